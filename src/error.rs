use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    /// A unique key is already in use (user email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A referenced id does not resolve to a usable entity.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl BlogError {
    /// Machine-readable code reported in the GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            BlogError::Conflict(_) => "CONFLICT",
            BlogError::NotFound(_) => "NOT_FOUND",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for BlogError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;

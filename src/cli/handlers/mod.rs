mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::AppConfig;
use crate::graphql::{BlogSchema, build_schema};
use crate::store::{self, Store};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: AppConfig,
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(config: AppConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    /// A schema over a store freshly built from the config.
    pub fn schema(&self) -> Result<BlogSchema> {
        let initial = Store::from_settings(&self.config.store)
            .context("Failed to initialize the store")?;
        Ok(build_schema(store::shared(initial)))
    }
}

/// Runs one document and prints the JSON response. Fails when the
/// response carries errors, after printing it.
pub(crate) fn execute_and_print(
    schema: &BlogSchema,
    document: &str,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Invalid --variables JSON")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        anyhow::bail!("GraphQL request returned {} error(s)", response.errors.len());
    }
    Ok(())
}

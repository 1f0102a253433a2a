use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "graphql-basics.yml";

/// Shortest random id accepted from config.
pub const MIN_ID_LENGTH: usize = 4;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// `host` must be an IP address; names are not resolved.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| BlogError::Config(format!("Invalid listen address: {}", e)))
    }
}

/// How entity ids are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    #[default]
    Random,
    Sequential,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Load the built-in demo users, posts and comments.
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// YAML fixtures file; takes precedence over `seed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures: Option<PathBuf>,

    #[serde(default)]
    pub id_mode: IdMode,

    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

fn default_seed() -> bool {
    true
}

fn default_id_length() -> usize {
    12
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            fixtures: None,
            id_mode: IdMode::default(),
            id_length: default_id_length(),
        }
    }
}

impl StoreSettings {
    pub fn validate(&self) -> Result<()> {
        if self.id_mode == IdMode::Random && self.id_length < MIN_ID_LENGTH {
            return Err(BlogError::Config(format!(
                "store.id_length must be at least {} (got {})",
                MIN_ID_LENGTH, self.id_length
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Loads the config from an explicit path, or searches upward from
    /// `start_path`. Falls back to defaults when no file is found.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    return Err(BlogError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                Some(p.to_path_buf())
            }
            None => Self::find_config_file(start_path),
        };

        let Some(path) = path else {
            tracing::debug!("No config file found, using defaults");
            return Ok((Self::default(), None));
        };

        let mut config = Self::from_file(&path)?;
        // Relative fixture paths are resolved against the config's directory.
        if let (Some(fixtures), Some(dir)) = (config.store.fixtures.as_ref(), path.parent()) {
            if fixtures.is_relative() {
                config.store.fixtures = Some(dir.join(fixtures));
            }
        }
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok((config, Some(path)))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig = serde_yaml::from_str(content)?;
        config.store.validate()?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

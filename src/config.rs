use crate::error::AppError;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SERVER: &str = "br1";
pub const DEFAULT_REGION: &str = "americas";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    /// Platform host prefix, used by server-scoped services
    pub server: String,
    /// Continental cluster prefix, used by region-scoped services
    pub region: String,
    pub catalog_path: Option<PathBuf>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            server: DEFAULT_SERVER.to_string(),
            region: DEFAULT_REGION.to_string(),
            catalog_path: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let mut config = Self::from_vars(|name| env::var(name).ok())?;
        if config.catalog_path.is_none() {
            config.catalog_path = user_catalog_path();
        }

        Ok(config)
    }

    pub fn from_vars<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let api_key = var("RIOT_API_KEY").filter(|key| !key.is_empty());
        let server = var("RIOT_SERVER").unwrap_or(defaults.server);
        let region = var("RIOT_REGION").unwrap_or(defaults.region);
        let catalog_path = var("RIOT_CATALOG").map(PathBuf::from);

        let timeout = match var("RIOT_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| AppError::ConfigurationLoad {
                    origin: "RIOT_TIMEOUT_SECS".to_string(),
                    reason: format!("'{}': {}", raw, e),
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        Ok(Config {
            api_key,
            server,
            region,
            catalog_path,
            timeout,
        })
    }
}

/// `~/.riot_caller/endpoints.toml`, if present.
pub fn user_catalog_path() -> Option<PathBuf> {
    dirs::home_dir().and_then(|home| catalog_in(&home))
}

fn catalog_in(home: &Path) -> Option<PathBuf> {
    Some(home.join(".riot_caller").join("endpoints.toml")).filter(|path| path.is_file())
}

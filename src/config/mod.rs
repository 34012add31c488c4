mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Loads configuration from the YAML file at `CONFIG_PATH` (default
/// `config.yaml`). A missing file is not an error; built-in defaults
/// apply. `INFERENCE_BASE_URL` overrides the configured backend URL.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => serde_yaml::from_str(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    if let Ok(base_url) = env::var("INFERENCE_BASE_URL") {
        config.inference.base_url = base_url;
    }

    Ok(config)
}

pub mod config;
pub mod manager;

pub use config::{
    AnalyticsConfig, Config, ConfigError, ConfigResult, LlmConfig, LogLevel, LoggingConfig,
    PhotosConfig, SamplingConfig, StorageConfig,
};
pub use manager::ConfigManager;

use std::path::PathBuf;

/// `~/.vic`
pub fn vic_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".vic"))
}

pub fn default_config_path() -> Option<PathBuf> {
    vic_dir().map(|dir| dir.join("config.json"))
}

pub fn default_state_dir() -> Option<PathBuf> {
    vic_dir().map(|dir| dir.join("state"))
}

pub fn default_log_path() -> Option<PathBuf> {
    vic_dir().map(|dir| dir.join("logs").join("vic.log"))
}

/// Create `~/.vic` and its state and log directories
pub async fn init_vic_dirs() -> ConfigResult<()> {
    if let Some(vic) = vic_dir() {
        tokio::fs::create_dir_all(&vic).await?;
        tokio::fs::create_dir_all(vic.join("state")).await?;
        tokio::fs::create_dir_all(vic.join("logs")).await?;
    }
    Ok(())
}

/// Expand a leading `~/` to the home directory
pub fn expand_tilde(path: &str) -> Option<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
        None => Some(PathBuf::from(path)),
    }
}

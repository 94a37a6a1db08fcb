use crate::config::{Config, ConfigError, ConfigResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Owns the loaded config and the file it came from
#[derive(Clone)]
pub struct ConfigManager {
    path: PathBuf,
    config: Arc<RwLock<Config>>,
}

impl ConfigManager {
    /// Load `path`, writing the defaults there first if it does not exist
    pub async fn load(path: &Path) -> ConfigResult<Self> {
        let config = if path.exists() {
            info!("Loading config from {:?}", path);
            let config = Self::read(path).await?;
            Self::validate(&config)?;
            config
        } else {
            info!("Config file not found, creating default config at {:?}", path);
            let default_config = Config::default();
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let content = serde_json::to_string_pretty(&default_config)?;
            tokio::fs::write(path, &content).await?;
            default_config
        };

        Ok(Self {
            path: path.to_path_buf(),
            config: Arc::new(RwLock::new(config)),
        })
    }

    /// Load from `~/.vic/config.json`
    pub async fn load_default() -> ConfigResult<Self> {
        let config_path = Self::default_config_path()?;
        Self::load(&config_path).await
    }

    pub fn default_config_path() -> ConfigResult<PathBuf> {
        crate::default_config_path()
            .ok_or_else(|| ConfigError::InvalidPath("Could not find home directory".to_string()))
    }

    /// Wrap an in-memory config without touching disk
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(config)),
        }
    }

    pub fn get(&self) -> Arc<RwLock<Config>> {
        Arc::clone(&self.config)
    }

    /// Clone of the current config
    pub async fn snapshot(&self) -> Config {
        self.config.read().await.clone()
    }

    pub async fn save(&self) -> ConfigResult<()> {
        self.save_to(&self.path).await?;
        info!("Config saved to {:?}", self.path);
        Ok(())
    }

    pub async fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let config = self.config.read().await;
        let content = serde_json::to_string_pretty(&*config)?;
        drop(config);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(path, content).await?;
        Ok(())
    }

    /// Re-read the backing file. The current config is kept if the new one is invalid.
    pub async fn reload(&self) -> ConfigResult<()> {
        if !self.path.exists() {
            return Err(ConfigError::InvalidPath(format!(
                "Config file not found: {:?}",
                self.path
            )));
        }

        let new_config = Self::read(&self.path).await?;
        Self::validate(&new_config)?;

        let mut config = self.config.write().await;
        *config = new_config;
        drop(config);

        info!("Config reloaded from {:?}", self.path);
        Ok(())
    }

    /// Apply `f`, validate the result and persist it
    pub async fn update<F>(&self, f: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config) -> ConfigResult<()>,
    {
        let mut config = self.config.write().await;
        let mut candidate = config.clone();
        f(&mut candidate)?;
        Self::validate(&candidate)?;
        *config = candidate;
        drop(config);
        self.save().await
    }

    pub fn validate(config: &Config) -> ConfigResult<()> {
        let base_url = config.llm.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "llm.base_url must be an http(s) URL, got '{}'",
                config.llm.base_url
            )));
        }

        if config.llm.model.trim().is_empty() {
            return Err(ConfigError::Validation("llm.model cannot be empty".to_string()));
        }

        if config.llm.timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "llm.timeout_seconds must be greater than 0".to_string(),
            ));
        }

        for (name, sampling) in [("chat", &config.llm.chat), ("analysis", &config.llm.analysis)] {
            if !(0.0..=2.0).contains(&sampling.temperature) {
                return Err(ConfigError::Validation(format!(
                    "llm.{}.temperature must be between 0 and 2",
                    name
                )));
            }
            if sampling.max_tokens == 0 {
                return Err(ConfigError::Validation(format!(
                    "llm.{}.max_tokens must be greater than 0",
                    name
                )));
            }
        }

        if config.llm.max_analysis_images == 0 {
            return Err(ConfigError::Validation(
                "llm.max_analysis_images must be greater than 0".to_string(),
            ));
        }

        if config.photos.max_files == 0 || config.photos.max_folder_images == 0 {
            return Err(ConfigError::Validation(
                "photo limits must be greater than 0".to_string(),
            ));
        }

        if config.photos.allowed_types.is_empty() {
            return Err(ConfigError::Validation(
                "photos.allowed_types cannot be empty".to_string(),
            ));
        }

        if let Some(url) = &config.analytics.webhook_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Validation(format!(
                    "analytics.webhook_url must be an http(s) URL, got '{}'",
                    url
                )));
            }
        }

        if config.storage.path.trim().is_empty() {
            return Err(ConfigError::Validation("storage.path cannot be empty".to_string()));
        }

        Ok(())
    }

    async fn read(path: &Path) -> ConfigResult<Config> {
        let content = tokio::fs::read_to_string(path).await?;
        let content = Self::expand_env_vars(&content)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Expand `${VAR}` and `${VAR:-default}`
    pub fn expand_env_vars(content: &str) -> ConfigResult<String> {
        let mut result = content.to_string();

        for cap in ENV_VAR.captures_iter(content) {
            let full_match = &cap[0];
            let var_expr = &cap[1];

            let (var_name, default_value) = match var_expr.split_once(":-") {
                Some((name, default)) => (name, Some(default)),
                None => (var_expr, None),
            };

            let replacement = match (std::env::var(var_name), default_value) {
                (Ok(val), _) => val,
                (Err(_), Some(default)) => default.to_string(),
                (Err(_), None) => return Err(ConfigError::EnvVarNotFound(var_name.to_string())),
            };

            debug!("Expanded config variable {}", var_name);
            result = result.replace(full_match, &replacement);
        }

        Ok(result)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let manager = ConfigManager::load(&config_path).await.unwrap();
        let config = manager.snapshot().await;

        assert!(config_path.exists());
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
    }

    #[tokio::test]
    async fn test_env_var_expansion() {
        std::env::set_var("VIC_TEST_MODEL", "gpt-4o-mini");

        let content = r#"{"model": "${VIC_TEST_MODEL}", "url": "${VIC_TEST_UNSET_URL:-https://example.com}"}"#;
        let expanded = ConfigManager::expand_env_vars(content).unwrap();

        assert!(expanded.contains("gpt-4o-mini"));
        assert!(expanded.contains("https://example.com"));
        assert!(matches!(
            ConfigManager::expand_env_vars("${VIC_TEST_UNSET_NO_DEFAULT}"),
            Err(ConfigError::EnvVarNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_config_validation() {
        let mut config = Config::default();
        assert!(ConfigManager::validate(&config).is_ok());

        config.llm.timeout_seconds = 0;
        assert!(ConfigManager::validate(&config).is_err());

        let mut config = Config::default();
        config.analytics.webhook_url = Some("ftp://nope".to_string());
        assert!(ConfigManager::validate(&config).is_err());

        let mut config = Config::default();
        config.llm.chat.temperature = 3.0;
        assert!(ConfigManager::validate(&config).is_err());
    }

    #[tokio::test]
    async fn test_update_persists_and_rejects_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let manager = ConfigManager::load(&config_path).await.unwrap();

        manager
            .update(|c| c.set_value("llm.model", "gpt-4o-mini"))
            .await
            .unwrap();
        let reloaded = ConfigManager::load(&config_path).await.unwrap();
        assert_eq!(reloaded.snapshot().await.llm.model, "gpt-4o-mini");

        let err = manager.update(|c| c.set_value("llm.model", " ")).await;
        assert!(err.is_err());
        assert_eq!(manager.snapshot().await.llm.model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_reload_picks_up_file_changes() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let manager = ConfigManager::load(&config_path).await.unwrap();

        tokio::fs::write(&config_path, r#"{"photos": {"max_files": 5}}"#)
            .await
            .unwrap();
        manager.reload().await.unwrap();
        let config = manager.snapshot().await;
        assert_eq!(config.photos.max_files, 5);
        assert_eq!(config.photos.max_folder_images, 50);
    }
}

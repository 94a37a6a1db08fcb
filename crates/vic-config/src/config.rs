use serde::{Deserialize, Serialize};

/// Root of `~/.vic/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub version: String,
    pub llm: LlmConfig,
    pub storage: StorageConfig,
    pub photos: PhotosConfig,
    pub analytics: AnalyticsConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            llm: LlmConfig::default(),
            storage: StorageConfig::default(),
            photos: PhotosConfig::default(),
            analytics: AnalyticsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn parse<T: std::str::FromStr>(value: &str, what: &str) -> ConfigResult<T> {
    value
        .parse()
        .map_err(|_| ConfigError::Validation(format!("Invalid {}: {}", what, value)))
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl Config {
    /// Look up a dotted key such as `llm.model`
    pub fn get_value(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["version"] => Some(self.version.clone()),
            ["llm", "base_url"] => Some(self.llm.base_url.clone()),
            ["llm", "model"] => Some(self.llm.model.clone()),
            ["llm", "timeout_seconds"] => Some(self.llm.timeout_seconds.to_string()),
            ["llm", "api_key_env"] => Some(self.llm.api_key_env.clone()),
            ["llm", "max_analysis_images"] => Some(self.llm.max_analysis_images.to_string()),
            ["llm", "chat", "temperature"] => Some(self.llm.chat.temperature.to_string()),
            ["llm", "chat", "max_tokens"] => Some(self.llm.chat.max_tokens.to_string()),
            ["llm", "analysis", "temperature"] => Some(self.llm.analysis.temperature.to_string()),
            ["llm", "analysis", "max_tokens"] => Some(self.llm.analysis.max_tokens.to_string()),
            ["storage", "path"] => Some(self.storage.path.clone()),
            ["photos", "max_files"] => Some(self.photos.max_files.to_string()),
            ["photos", "max_folder_images"] => Some(self.photos.max_folder_images.to_string()),
            ["photos", "allowed_types"] => Some(self.photos.allowed_types.join(",")),
            ["analytics", "webhook_url"] => self.analytics.webhook_url.clone(),
            ["logging", "level"] => Some(self.logging.level.as_str().to_string()),
            ["logging", "file"] => self.logging.file.clone(),
            ["logging", "json"] => Some(self.logging.json.to_string()),
            _ => None,
        }
    }

    /// Set a dotted key from its string form
    pub fn set_value(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["llm", "base_url"] => self.llm.base_url = value.trim().to_string(),
            ["llm", "model"] => self.llm.model = value.trim().to_string(),
            ["llm", "timeout_seconds"] => self.llm.timeout_seconds = parse(value, "number")?,
            ["llm", "api_key_env"] => self.llm.api_key_env = value.trim().to_string(),
            ["llm", "max_analysis_images"] => {
                self.llm.max_analysis_images = parse(value, "number")?
            }
            ["llm", "chat", "temperature"] => self.llm.chat.temperature = parse(value, "temperature")?,
            ["llm", "chat", "max_tokens"] => self.llm.chat.max_tokens = parse(value, "number")?,
            ["llm", "analysis", "temperature"] => {
                self.llm.analysis.temperature = parse(value, "temperature")?
            }
            ["llm", "analysis", "max_tokens"] => self.llm.analysis.max_tokens = parse(value, "number")?,
            ["storage", "path"] => self.storage.path = value.trim().to_string(),
            ["photos", "max_files"] => self.photos.max_files = parse(value, "number")?,
            ["photos", "max_folder_images"] => self.photos.max_folder_images = parse(value, "number")?,
            ["photos", "allowed_types"] => {
                self.photos.allowed_types = value
                    .split(',')
                    .map(|t| t.trim().to_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect();
            }
            ["analytics", "webhook_url"] => self.analytics.webhook_url = optional(value),
            ["logging", "level"] => self.logging.level = value.parse()?,
            ["logging", "file"] => self.logging.file = optional(value),
            ["logging", "json"] => self.logging.json = parse(value, "boolean")?,
            _ => return Err(ConfigError::KeyNotFound(key.to_string())),
        }
        Ok(())
    }
}

/// Sampling parameters for one call site
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Chat completion endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
    /// Environment variable consulted when no key is stored
    pub api_key_env: String,
    pub chat: SamplingConfig,
    pub analysis: SamplingConfig,
    pub max_analysis_images: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            timeout_seconds: 30,
            api_key_env: "OPENAI_API_KEY".to_string(),
            chat: SamplingConfig {
                temperature: 0.8,
                max_tokens: 800,
            },
            analysis: SamplingConfig {
                temperature: 0.7,
                max_tokens: 1000,
            },
            max_analysis_images: 10,
        }
    }
}

/// Where persisted state lives
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "~/.vic/state".to_string(),
        }
    }
}

/// Photo selection limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhotosConfig {
    pub max_files: usize,
    pub max_folder_images: usize,
    /// MIME types accepted when scanning a folder
    pub allowed_types: Vec<String>,
}

impl Default for PhotosConfig {
    fn default() -> Self {
        Self {
            max_files: 20,
            max_folder_images: 50,
            allowed_types: ["image/jpeg", "image/jpg", "image/png", "image/webp", "image/heic"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

/// Signup webhook
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub file: Option<String>,
    pub json: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

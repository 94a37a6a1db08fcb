use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// Bearer API key (OpenAI style)
    ApiKey { key: String },
    #[default]
    None,
}

impl AuthConfig {
    /// API key auth from an environment variable, if set and non-blank
    pub fn from_env(env_var: &str) -> Option<Self> {
        std::env::var(env_var)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(|key| Self::ApiKey { key })
    }
}

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub provider_id: String,
    /// Base URL for the API, without the `/chat/completions` suffix
    pub base_url: String,
    #[serde(flatten)]
    pub auth: AuthConfig,
    /// Default model to use
    pub model: String,
    /// Request timeout in seconds
    #[serde(with = "serde_duration", default = "default_timeout")]
    pub timeout: Duration,
    /// Additional headers to include
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl ProviderConfig {
    pub fn new(provider_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            base_url: base_url.into(),
            auth: AuthConfig::None,
            model: DEFAULT_MODEL.to_string(),
            timeout: default_timeout(),
            headers: HashMap::new(),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.auth = AuthConfig::ApiKey { key: key.into() };
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Full URL of the chat completion endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new("openai", DEFAULT_BASE_URL)
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

mod serde_duration {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.completions_url(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ProviderConfig::new("openai", "http://127.0.0.1:9999/");
        assert_eq!(config.completions_url(), "http://127.0.0.1:9999/chat/completions");
    }

    #[test]
    fn test_serde_flattens_auth() {
        let config = ProviderConfig::default().with_api_key("sk-1");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "api_key");
        assert_eq!(json["key"], "sk-1");
        assert_eq!(json["timeout"], 30);

        let back: ProviderConfig = serde_json::from_value(json).unwrap();
        assert!(matches!(back.auth, AuthConfig::ApiKey { ref key } if key == "sk-1"));
    }

    #[test]
    fn test_auth_from_env_ignores_blank() {
        std::env::set_var("VIC_LLM_TEST_BLANK_KEY", "   ");
        assert!(AuthConfig::from_env("VIC_LLM_TEST_BLANK_KEY").is_none());
        std::env::set_var("VIC_LLM_TEST_KEY", " sk-abc ");
        assert!(matches!(
            AuthConfig::from_env("VIC_LLM_TEST_KEY"),
            Some(AuthConfig::ApiKey { key }) if key == "sk-abc"
        ));
        assert!(AuthConfig::from_env("VIC_LLM_TEST_UNSET_KEY").is_none());
    }
}

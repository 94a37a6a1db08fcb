use async_trait::async_trait;
use vic_core::chat::{ChatRequest, ChatResponse};

use crate::error::{LLMError, Result};
use crate::provider::{AuthConfig, BaseProvider, LLMProvider, ProviderCapabilities, ProviderConfig, ProviderMetadata};
use crate::transformer::OpenAiTransformer;

/// OpenAI chat completions, or any endpoint speaking the same schema
pub struct OpenAiProvider {
    base: BaseProvider<OpenAiTransformer>,
}

impl OpenAiProvider {
    /// Fails with [`LLMError::MissingCredential`] unless `config` carries a non-blank API key
    pub fn with_config(config: ProviderConfig) -> Result<Self> {
        match &config.auth {
            AuthConfig::ApiKey { key } if !key.trim().is_empty() => {}
            _ => return Err(LLMError::MissingCredential),
        }
        let metadata = ProviderMetadata {
            id: config.provider_id.clone(),
            name: "OpenAI".to_string(),
            capabilities: ProviderCapabilities::all(),
        };
        let base = BaseProvider::new(config, OpenAiTransformer::new(), metadata)?;
        Ok(Self { base })
    }

    /// Provider for the public OpenAI API
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ProviderConfig::default().with_api_key(api_key))
    }

    /// Provider for a compatible endpoint at `base_url`
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ProviderConfig::new("openai", base_url).with_api_key(api_key))
    }

    pub fn config(&self) -> &ProviderConfig {
        self.base.config()
    }
}

#[async_trait]
impl LLMProvider for OpenAiProvider {
    fn provider_id(&self) -> &str {
        self.base.provider_id()
    }

    fn metadata(&self) -> &ProviderMetadata {
        &self.base.metadata
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.base.chat(request).await
    }

    async fn validate(&self) -> Result<()> {
        self.base.validate().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_provider() {
        let provider = OpenAiProvider::new("test-key").unwrap();
        assert_eq!(provider.config().base_url, "https://api.openai.com/v1");
        assert!(provider.metadata().capabilities.vision);
    }

    #[test]
    fn test_with_base_url() {
        let provider = OpenAiProvider::with_base_url("test-key", "https://custom.openai.com/v1").unwrap();
        assert_eq!(provider.config().completions_url(), "https://custom.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_blank_or_missing_key_is_rejected() {
        assert!(matches!(OpenAiProvider::new("   "), Err(LLMError::MissingCredential)));

        let err = OpenAiProvider::with_config(ProviderConfig::new("openai", "http://localhost:9999/v1")).err();
        assert!(matches!(err, Some(LLMError::MissingCredential)));
        assert_eq!(
            LLMError::MissingCredential.to_string(),
            "OpenAI API key not found. Please add your API key in settings."
        );
    }

    #[tokio::test]
    async fn test_validate_rejects_empty_base_url() {
        let provider = OpenAiProvider::with_base_url("test-key", " ").unwrap();
        assert!(provider.validate().await.is_err());
    }
}

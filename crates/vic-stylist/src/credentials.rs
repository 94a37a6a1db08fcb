//! API key lookup and provider construction.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use vic_config::LlmConfig;
use vic_llm::{LLMProvider, OpenAiProvider, ProviderConfig};
use vic_store::{Credential, StateStore};

use crate::error::Result;

/// Stored key first, then the environment variable named in config
pub async fn resolve_credential(store: &dyn StateStore, api_key_env: &str) -> Result<Option<Credential>> {
    if let Some(credential) = store.load_credential().await? {
        debug!("using stored API key");
        return Ok(Some(credential));
    }

    let from_env = std::env::var(api_key_env).ok().and_then(Credential::new);
    if from_env.is_some() {
        debug!(env = api_key_env, "using API key from environment");
    }
    Ok(from_env)
}

/// Chat completion provider for `credential` using the `llm` config section
pub fn build_provider(config: &LlmConfig, credential: &Credential) -> Result<Arc<dyn LLMProvider>> {
    let provider_config = ProviderConfig::new("openai", config.base_url.clone())
        .with_api_key(credential.api_key.clone())
        .with_model(config.model.clone())
        .with_timeout(Duration::from_secs(config.timeout_seconds));
    Ok(Arc::new(OpenAiProvider::with_config(provider_config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StylistError;
    use vic_llm::LLMError;
    use vic_store::MemoryStore;

    #[tokio::test]
    async fn test_stored_key_wins_over_env() {
        std::env::set_var("VIC_TEST_KEY_STORED", "sk-env");
        let store = MemoryStore::new();
        store
            .save_credential(&Credential::new("sk-stored").unwrap())
            .await
            .unwrap();

        let credential = resolve_credential(&store, "VIC_TEST_KEY_STORED").await.unwrap();
        assert_eq!(credential.unwrap().api_key, "sk-stored");
    }

    #[tokio::test]
    async fn test_env_fallback_ignores_blank_values() {
        let store = MemoryStore::new();

        std::env::set_var("VIC_TEST_KEY_ENV", "  sk-env  ");
        let credential = resolve_credential(&store, "VIC_TEST_KEY_ENV").await.unwrap();
        assert_eq!(credential.unwrap().api_key, "sk-env");

        std::env::set_var("VIC_TEST_KEY_BLANK", "   ");
        assert!(resolve_credential(&store, "VIC_TEST_KEY_BLANK").await.unwrap().is_none());
        assert!(resolve_credential(&store, "VIC_TEST_KEY_UNSET").await.unwrap().is_none());
    }

    #[test]
    fn test_build_provider_uses_config() {
        let mut config = LlmConfig::default();
        config.base_url = "http://localhost:9999/v1".to_string();
        let provider = build_provider(&config, &Credential::new("sk-test").unwrap()).unwrap();
        assert_eq!(provider.provider_id(), "openai");
    }

    #[test]
    fn test_blank_key_cannot_build_a_provider() {
        let blank = Credential {
            api_key: "  ".to_string(),
        };
        let err = build_provider(&LlmConfig::default(), &blank).err().unwrap();
        assert!(matches!(err, StylistError::Llm(LLMError::MissingCredential)));
    }
}

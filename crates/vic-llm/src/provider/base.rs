use async_trait::async_trait;
use reqwest::{header, Client};
use std::sync::Arc;
use tracing::{debug, warn};
use vic_core::chat::{ChatRequest, ChatResponse};

use crate::auth::{ApiKeyAuth, Authenticator, NoAuth};
use crate::error::{ConversionError, LLMError, Result};
use crate::provider::{AuthConfig, LLMProvider, ProviderConfig, ProviderMetadata};
use crate::transformer::{utils, SchemaTransformer};

/// Base provider implementation
/// Handles the HTTP round trip and delegates schema transformation
pub struct BaseProvider<T: SchemaTransformer> {
    config: ProviderConfig,
    http_client: Client,
    transformer: Arc<T>,
    pub metadata: ProviderMetadata,
    authenticator: Arc<dyn Authenticator>,
}

impl<T: SchemaTransformer + 'static> BaseProvider<T> {
    /// Create a provider whose authenticator follows `config.auth`
    pub fn new(config: ProviderConfig, transformer: T, metadata: ProviderMetadata) -> Result<Self> {
        let authenticator: Arc<dyn Authenticator> = match &config.auth {
            AuthConfig::ApiKey { key } => Arc::new(ApiKeyAuth::new(key.clone())),
            AuthConfig::None => Arc::new(NoAuth),
        };
        Self::with_authenticator(config, transformer, metadata, authenticator)
    }

    /// Create with a custom authenticator
    pub fn with_authenticator(
        config: ProviderConfig,
        transformer: T,
        metadata: ProviderMetadata,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self> {
        // Single attempt per request, bounded by the configured timeout
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LLMError::Config(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
            transformer: Arc::new(transformer),
            metadata,
            authenticator,
        })
    }

    pub fn provider_id(&self) -> &str {
        self.transformer.provider_id()
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn build_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/json"));

        if let Some((header_name, header_value)) = self.authenticator.get_auth_header().await? {
            let name = header::HeaderName::from_bytes(header_name.as_bytes())
                .map_err(|e| LLMError::Config(format!("Invalid auth header name: {}", e)))?;
            let value = header::HeaderValue::from_str(&header_value)
                .map_err(|e| LLMError::Config(format!("Invalid auth header value: {}", e)))?;
            headers.insert(name, value);
        }

        for (key, value) in &self.config.headers {
            let header_name = header::HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| LLMError::Config(format!("Invalid header name: {}", e)))?;
            let header_value = header::HeaderValue::from_str(value)
                .map_err(|e| LLMError::Config(format!("Invalid header value: {}", e)))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    /// Send a request and parse the complete response
    pub async fn send_request(&self, request: ChatRequest) -> Result<ChatResponse> {
        let body = self.transformer.transform_request(&request)?;
        let headers = self.build_headers().await?;
        let url = self.config.completions_url();

        debug!(
            provider = self.provider_id(),
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion"
        );

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %text, "chat completion failed");
            return Err(LLMError::Api {
                status: status.as_u16(),
                message: utils::extract_error_message(&text),
            });
        }

        let data: serde_json::Value = serde_json::from_str(&text).map_err(ConversionError::from)?;
        Ok(self.transformer.parse_response(&data)?)
    }
}

#[async_trait]
impl<T: SchemaTransformer + 'static> LLMProvider for BaseProvider<T> {
    fn provider_id(&self) -> &str {
        self.provider_id()
    }

    fn metadata(&self) -> &ProviderMetadata {
        &self.metadata
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.send_request(request).await
    }

    async fn validate(&self) -> Result<()> {
        if self.config.base_url.trim().is_empty() {
            return Err(LLMError::Config("base_url is empty".to_string()));
        }
        let _ = self.build_headers().await?;
        Ok(())
    }
}

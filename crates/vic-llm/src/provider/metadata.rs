use async_trait::async_trait;
use vic_core::chat::{ChatRequest, ChatResponse};

use crate::error::Result;

/// LLM Provider trait
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Get the provider ID
    fn provider_id(&self) -> &str;

    /// Get provider metadata
    fn metadata(&self) -> &ProviderMetadata;

    /// Send a chat request and wait for the complete response
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;

    /// Validate the provider configuration
    async fn validate(&self) -> Result<()>;
}

/// Provider metadata
#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub id: String,
    /// Human-readable name
    pub name: String,
    pub capabilities: ProviderCapabilities,
}

/// Provider capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderCapabilities {
    /// Accepts image parts
    pub vision: bool,
    /// Honors `response_format: json_object`
    pub json_mode: bool,
}

impl ProviderCapabilities {
    pub fn all() -> Self {
        Self {
            vision: true,
            json_mode: true,
        }
    }

    pub fn text_only() -> Self {
        Self {
            vision: false,
            json_mode: false,
        }
    }
}

impl Default for ProviderCapabilities {
    fn default() -> Self {
        Self::all()
    }
}

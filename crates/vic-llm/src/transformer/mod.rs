pub mod openai;
pub mod utils;

pub use openai::OpenAiTransformer;

use serde_json::Value;
use vic_core::chat::{ChatRequest, ChatResponse};

use crate::error::ConversionError;

/// Converts between internal chat types and a provider's wire format
pub trait SchemaTransformer: Send + Sync {
    fn provider_id(&self) -> &str;

    /// Transform request to provider-specific format
    fn transform_request(&self, request: &ChatRequest) -> Result<Value, ConversionError>;

    /// Parse a complete response body
    fn parse_response(&self, data: &Value) -> Result<ChatResponse, ConversionError>;
}

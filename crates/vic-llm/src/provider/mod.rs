pub mod base;
pub mod config;
pub mod metadata;

pub use base::BaseProvider;
pub use config::{AuthConfig, ProviderConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use metadata::{LLMProvider, ProviderCapabilities, ProviderMetadata};

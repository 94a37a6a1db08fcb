pub mod auth;
pub mod error;
pub mod provider;
pub mod providers;
pub mod transformer;

pub use auth::{ApiKeyAuth, Authenticator, NoAuth};
pub use error::{ConversionError, LLMError, Result, DEFAULT_API_ERROR};
pub use provider::{
    AuthConfig, BaseProvider, LLMProvider, ProviderCapabilities, ProviderConfig, ProviderMetadata,
    DEFAULT_BASE_URL, DEFAULT_MODEL,
};
pub use providers::OpenAiProvider;
pub use transformer::{OpenAiTransformer, SchemaTransformer};

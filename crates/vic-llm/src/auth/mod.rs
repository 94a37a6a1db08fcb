use async_trait::async_trait;
use crate::error::Result;

/// Produces the authentication header for outgoing requests
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// (header_name, header_value), or None if no authentication is needed
    async fn get_auth_header(&self) -> Result<Option<(String, String)>>;
}

/// API key sent as a bearer token
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    api_key: String,
}

impl ApiKeyAuth {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Authenticator for ApiKeyAuth {
    async fn get_auth_header(&self) -> Result<Option<(String, String)>> {
        Ok(Some((
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )))
    }
}

/// No authentication
#[derive(Debug, Clone)]
pub struct NoAuth;

#[async_trait]
impl Authenticator for NoAuth {
    async fn get_auth_header(&self) -> Result<Option<(String, String)>> {
        Ok(None)
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonaError {
    #[error("Invalid product catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PersonaError>;

use thiserror::Error;
use vic_core::OnboardingError;
use vic_llm::LLMError;
use vic_persona::PersonaError;
use vic_store::StoreError;

#[derive(Error, Debug)]
pub enum StylistError {
    #[error("No files selected")]
    NoFilesSelected,

    #[error("No images found in the selected folder.")]
    NoImagesFound,

    #[error("No images to analyze")]
    NoImagesToAnalyze,

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid embedded data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Llm(#[from] LLMError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Persona(#[from] PersonaError),

    #[error(transparent)]
    Onboarding(#[from] OnboardingError),
}

pub type Result<T> = std::result::Result<T, StylistError>;

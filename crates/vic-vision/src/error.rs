use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("not a base64 data URL")]
    InvalidDataUrl,

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, VisionError>;

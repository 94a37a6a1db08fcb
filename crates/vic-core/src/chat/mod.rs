pub mod request;
pub mod response;

pub use request::{ChatRequest, ChatOptions, ResponseFormat};
pub use response::{ChatResponse, ChatUsage};

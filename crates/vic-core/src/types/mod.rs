pub mod message;
pub mod content;

pub use message::{Message, Role, MessageId};
pub use content::{Content, ContentPart, ImageDetail, ImageSource};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::content::{Content, ContentPart};

/// Unique message identifier
pub type MessageId = String;

/// Message role in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Message sent to a chat model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: Content,
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn with_content(role: Role, content: Content) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content,
            created_at: Utc::now(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::with_content(Role::System, Content::text(content))
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_content(Role::User, Content::text(content))
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_content(Role::Assistant, Content::text(content))
    }

    /// Create a message from parts (multimodal content)
    pub fn from_parts(role: Role, parts: Vec<ContentPart>) -> Self {
        Self::with_content(role, Content::parts(parts))
    }

    /// Get text content if available
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text { text } => Some(text),
            Content::Parts { parts } => parts.iter().find_map(|p| match p {
                ContentPart::Text { text } => Some(text.as_str()),
                _ => None,
            }),
        }
    }

    /// Get all text content concatenated
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::Text { text } => text.clone(),
            Content::Parts { parts } => parts
                .iter()
                .filter_map(|p| match p {
                    ContentPart::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::content::ImageDetail;

    #[test]
    fn test_system_message() {
        let msg = Message::system("You are Vic");
        assert_eq!(msg.role, Role::System);
        assert_eq!(msg.text(), Some("You are Vic"));
    }

    #[test]
    fn test_assistant_message() {
        let msg = Message::assistant("Hello!");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.text(), Some("Hello!"));
    }

    #[test]
    fn test_multimodal_text_skips_images() {
        let msg = Message::from_parts(
            Role::User,
            vec![
                ContentPart::text("Rate "),
                ContentPart::image("https://example.com/a.png", ImageDetail::Low),
                ContentPart::text("this"),
            ],
        );
        assert_eq!(msg.text(), Some("Rate "));
        assert_eq!(msg.text_content(), "Rate this");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}

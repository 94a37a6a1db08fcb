use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{Message, Role};

/// First message of every transcript
pub const WELCOME_MESSAGE: &str = "Hi! I'm Vic, your AI style assistant. I can help with fashion advice, outfit suggestions, style questions, or just chat about anything. What would you like to talk about?";

/// One entry of the visible chat transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            image: None,
            is_error: false,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// An assistant bubble that reports a failed action
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::new(Role::Assistant, content)
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn is_welcome(&self) -> bool {
        self.role == Role::Assistant && self.content == WELCOME_MESSAGE
    }

    /// Whether this entry is replayed to the model as context
    pub fn is_history_eligible(&self) -> bool {
        !self.is_welcome() && self.image.is_none() && !self.content.is_empty() && !self.is_error
    }

    /// Text-only model message for this entry
    pub fn to_message(&self) -> Message {
        match self.role {
            Role::User => Message::user(self.content.clone()),
            Role::Assistant => Message::assistant(self.content.clone()),
            Role::System => Message::system(self.content.clone()),
        }
    }
}

/// Append-only ordered transcript
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// New transcript opening with the welcome message
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(WELCOME_MESSAGE)],
        }
    }

    /// Resume a saved transcript; an empty one starts fresh
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        if messages.is_empty() {
            Self::new()
        } else {
            Self { messages }
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<ChatMessage> {
        self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Prior turns replayed as model context
    pub fn history(&self) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .filter(|m| m.is_history_eligible())
            .cloned()
            .collect()
    }

    /// Everything the user has typed so far, in order
    pub fn user_turns(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.role == Role::User && !m.content.trim().is_empty())
            .map(|m| m.content.as_str())
            .collect()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-flight guard for sends.
///
/// A second acquire while one is outstanding fails instead of queueing.
#[derive(Debug, Default)]
pub struct BusyFlag {
    busy: AtomicBool,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn try_acquire(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { flag: self })
    }
}

/// Clears the busy flag on drop
#[derive(Debug)]
pub struct BusyGuard<'a> {
    flag: &'a BusyFlag,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_conversation_opens_with_welcome() {
        let conv = Conversation::new();
        assert_eq!(conv.len(), 1);
        assert!(conv.messages()[0].is_welcome());
        assert!(conv.history().is_empty());
    }

    #[test]
    fn test_history_filters_images_errors_and_empty() {
        let mut conv = Conversation::new();
        conv.push(ChatMessage::user("what goes with navy?"));
        conv.push(ChatMessage::assistant("Camel and white."));
        conv.push(ChatMessage::user("What do you think of this outfit?").with_image("data:image/png;base64,AAA"));
        conv.push(ChatMessage::error("I apologize, but I encountered an issue: boom"));
        conv.push(ChatMessage::user(""));

        let history = conv.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "what goes with navy?");
        assert_eq!(history[1].role, Role::Assistant);
    }

    #[test]
    fn test_user_turns() {
        let mut conv = Conversation::new();
        conv.push(ChatMessage::user("linen shirts?"));
        conv.push(ChatMessage::assistant("Yes."));
        conv.push(ChatMessage::user("   "));
        conv.push(ChatMessage::user("and shoes"));
        assert_eq!(conv.user_turns(), vec!["linen shirts?", "and shoes"]);
    }

    #[test]
    fn test_from_empty_messages_starts_fresh() {
        let conv = Conversation::from_messages(Vec::new());
        assert_eq!(conv.len(), 1);
    }

    #[test]
    fn test_chat_message_serialization_skips_defaults() {
        let json = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(json["role"], "user");
        assert!(json.get("image").is_none());
        assert!(json.get("isError").is_none());

        let json = serde_json::to_value(ChatMessage::error("oops")).unwrap();
        assert_eq!(json["isError"], true);
    }

    #[test]
    fn test_busy_flag_rejects_second_acquire() {
        let flag = BusyFlag::new();
        let guard = flag.try_acquire();
        assert!(guard.is_some());
        assert!(flag.is_busy());
        assert!(flag.try_acquire().is_none());
        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.try_acquire().is_some());
    }
}

//! One chat transcript with single-flight sends.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};
use vic_core::{BusyFlag, ChatMessage, Conversation, StyleProfile};
use vic_store::StateStore;

use crate::dispatch::Advisor;
use crate::error::Result;

/// User bubble shown for a shared photo
pub const IMAGE_TURN_TEXT: &str = "What do you think of this outfit?";
/// Instruction sent to the model alongside a shared photo
pub const IMAGE_DISPATCH_TEXT: &str = "Please analyze this outfit and provide style feedback.";

pub fn chat_error_message(message: &str) -> String {
    format!(
        "I apologize, but I encountered an issue: {}\n\nPlease try again or check your internet connection.",
        message
    )
}

pub fn image_error_message(message: &str) -> String {
    format!("I apologize, but I couldn't analyze that image: {}", message)
}

pub struct ChatSession {
    advisor: Arc<Advisor>,
    store: Arc<dyn StateStore>,
    profile: Option<StyleProfile>,
    conversation: Mutex<Conversation>,
    busy: BusyFlag,
}

impl ChatSession {
    pub fn new(
        advisor: Arc<Advisor>,
        store: Arc<dyn StateStore>,
        profile: Option<StyleProfile>,
        conversation: Conversation,
    ) -> Self {
        Self {
            advisor,
            store,
            profile,
            conversation: Mutex::new(conversation),
            busy: BusyFlag::new(),
        }
    }

    /// Session over the stored transcript and profile
    pub async fn resume(advisor: Arc<Advisor>, store: Arc<dyn StateStore>) -> Result<Self> {
        let profile = store.load_profile().await?;
        let history = store.load_history().await?.unwrap_or_default();
        let conversation = Conversation::from_messages(history);
        Ok(Self::new(advisor, store, profile, conversation))
    }

    pub fn profile(&self) -> Option<&StyleProfile> {
        self.profile.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn is_online(&self) -> bool {
        self.advisor.is_online()
    }

    /// Snapshot of the transcript
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.conversation.lock().messages().to_vec()
    }

    /// Send a text turn.
    ///
    /// Returns the appended reply, or `None` when the input was blank or
    /// another send is still in flight.
    pub async fn send(&self, text: &str) -> Result<Option<ChatMessage>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let Some(_guard) = self.busy.try_acquire() else {
            debug!("send ignored while busy");
            return Ok(None);
        };

        let history = self.append(ChatMessage::user(text));
        let reply = match self
            .advisor
            .dispatch(&history, text, None, self.profile.as_ref())
            .await
        {
            Ok(content) => ChatMessage::assistant(content),
            Err(e) => {
                warn!(error = %e, "chat turn failed");
                ChatMessage::error(chat_error_message(&e.to_string()))
            }
        };

        self.append(reply.clone());
        self.persist().await?;
        Ok(Some(reply))
    }

    /// Share an outfit photo (data URL or https URL) for feedback
    pub async fn send_image(&self, image: impl Into<String>) -> Result<Option<ChatMessage>> {
        let image = image.into();
        let Some(_guard) = self.busy.try_acquire() else {
            debug!("image ignored while busy");
            return Ok(None);
        };

        let history = self.append(ChatMessage::user(IMAGE_TURN_TEXT).with_image(image.clone()));
        let reply = match self
            .advisor
            .dispatch(&history, IMAGE_DISPATCH_TEXT, Some(&image), self.profile.as_ref())
            .await
        {
            Ok(content) => ChatMessage::assistant(content),
            Err(e) => {
                warn!(error = %e, "outfit feedback failed");
                ChatMessage::error(image_error_message(&e.to_string()))
            }
        };

        self.append(reply.clone());
        self.persist().await?;
        Ok(Some(reply))
    }

    /// Start over from the welcome message and forget the stored transcript
    pub async fn reset(&self) -> Result<()> {
        *self.conversation.lock() = Conversation::new();
        self.store.clear_history().await?;
        Ok(())
    }

    /// Push `message`, returning the model history as it stood before it
    fn append(&self, message: ChatMessage) -> Vec<ChatMessage> {
        let mut conversation = self.conversation.lock();
        let history = conversation.history();
        conversation.push(message);
        history
    }

    async fn persist(&self) -> Result<()> {
        let messages = self.messages();
        self.store.save_history(&messages).await?;
        Ok(())
    }
}

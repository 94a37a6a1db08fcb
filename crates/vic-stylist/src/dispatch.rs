//! Conversational advice: one model call per turn, or the offline persona.

use std::sync::Arc;

use tracing::{debug, Instrument};
use vic_config::{LlmConfig, SamplingConfig};
use vic_core::{ChatMessage, ChatRequest, ContentPart, ImageDetail, Message, Role, StyleProfile};
use vic_llm::{LLMError, LLMProvider, Result};
use vic_observability::create_chat_span;
use vic_persona::Persona;

/// Text sent with an image when the user typed nothing
pub const DEFAULT_IMAGE_PROMPT: &str = "What do you think of this outfit? Any suggestions?";

const SYSTEM_PROMPT: &str = "You are Vic, a helpful AI assistant specializing in fashion and personal style. You provide friendly, conversational responses to any questions or topics.

Key traits:
- Answer questions naturally and directly, just like ChatGPT would
- When discussing fashion/style, be knowledgeable and sophisticated
- For non-fashion topics, respond helpfully and conversationally
- Be warm, encouraging, and personable
- Keep responses concise and clear unless asked for details";

/// System instruction, with a note on the user's styles when known
pub fn system_prompt(profile: Option<&StyleProfile>) -> String {
    match profile {
        Some(profile) => format!(
            "{}\n\nNote: This user has a style profile indicating interests in {}. When giving fashion advice, consider their aesthetic preferences.",
            SYSTEM_PROMPT,
            profile.top_styles.join(", ")
        ),
        None => SYSTEM_PROMPT.to_string(),
    }
}

/// Routes a turn to the model when a provider is configured, else to the persona
pub struct Advisor {
    provider: Option<Arc<dyn LLMProvider>>,
    persona: Arc<Persona>,
    model: String,
    sampling: SamplingConfig,
}

impl Advisor {
    pub fn new(provider: Option<Arc<dyn LLMProvider>>, persona: Arc<Persona>, config: &LlmConfig) -> Self {
        Self {
            provider,
            persona,
            model: config.model.clone(),
            sampling: config.chat,
        }
    }

    /// Whether turns go to the model
    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Request for one turn: system prompt, prior turns, then the new turn
    pub fn build_request(
        &self,
        history: &[ChatMessage],
        text: &str,
        image: Option<&str>,
        profile: Option<&StyleProfile>,
    ) -> ChatRequest {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(system_prompt(profile)));
        messages.extend(history.iter().map(ChatMessage::to_message));

        let current = match image {
            Some(image) => {
                let text = if text.trim().is_empty() { DEFAULT_IMAGE_PROMPT } else { text };
                Message::from_parts(
                    Role::User,
                    vec![ContentPart::text(text), ContentPart::image(image, ImageDetail::High)],
                )
            }
            None => Message::user(text),
        };
        messages.push(current);

        ChatRequest::new(self.model.clone())
            .with_messages(messages)
            .max_tokens(self.sampling.max_tokens)
            .temperature(self.sampling.temperature)
    }

    /// Vic's reply to `text` given the prior `history`
    pub async fn dispatch(
        &self,
        history: &[ChatMessage],
        text: &str,
        image: Option<&str>,
        profile: Option<&StyleProfile>,
    ) -> Result<String> {
        let span = create_chat_span(history.len(), image.is_some(), self.is_online());

        let Some(provider) = &self.provider else {
            let _entered = span.enter();
            let reply = match image {
                Some(_) => self.persona.outfit_reaction(),
                None => self.persona.respond(text, profile),
            };
            debug!("answered offline");
            return Ok(reply);
        };

        let request = self.build_request(history, text, image, profile);
        async move {
            let response = provider.chat(request).await?;
            debug!(tokens = response.usage.total_tokens, "model replied");
            Ok::<_, LLMError>(response.text())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vic_core::{Content, FixedRandom};

    fn advisor() -> Advisor {
        let persona = Persona::new(Arc::new(FixedRandom(0))).unwrap();
        Advisor::new(None, Arc::new(persona), &LlmConfig::default())
    }

    #[test]
    fn test_system_prompt_mentions_styles() {
        let profile = StyleProfile::new(vec!["minimalist".into(), "modern".into()], vec![], "");
        let prompt = system_prompt(Some(&profile));
        assert!(prompt.ends_with(
            "interests in minimalist, modern. When giving fashion advice, consider their aesthetic preferences."
        ));
        assert!(!system_prompt(None).contains("Note:"));
    }

    #[test]
    fn test_request_shape() {
        let history = vec![ChatMessage::user("hi"), ChatMessage::assistant("Hello!")];
        let request = advisor().build_request(&history, "What about olive?", None, None);

        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.options.max_tokens, Some(800));
        assert_eq!(request.options.temperature, Some(0.8));
        assert_eq!(request.messages.len(), 4);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[3].text(), Some("What about olive?"));
    }

    #[test]
    fn test_image_turn_uses_default_text_and_high_detail() {
        let request = advisor().build_request(&[], "  ", Some("data:image/png;base64,AAAA"), None);
        let last = request.messages.last().unwrap();

        let Content::Parts { parts } = &last.content else {
            panic!("expected multi-part content");
        };
        assert!(matches!(&parts[0], ContentPart::Text { text } if text == DEFAULT_IMAGE_PROMPT));
        assert!(matches!(&parts[1], ContentPart::Image { detail: Some(ImageDetail::High), .. }));
    }

    #[tokio::test]
    async fn test_offline_dispatch_uses_persona() {
        let advisor = advisor();
        assert!(!advisor.is_online());

        let reply = advisor.dispatch(&[], "hello", None, None).await.unwrap();
        assert!(reply.starts_with("Hello! Lovely to hear from you."));

        let reaction = advisor
            .dispatch(&[], "", Some("data:image/png;base64,AAAA"), None)
            .await
            .unwrap();
        assert!(reaction.ends_with("Would you like me to suggest similar pieces or styling recommendations?"));
    }
}

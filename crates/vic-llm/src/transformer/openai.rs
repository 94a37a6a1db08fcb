use serde_json::{json, Value};
use vic_core::chat::{ChatRequest, ChatResponse, ChatUsage, ResponseFormat};
use vic_core::types::{Content, ContentPart, Message, Role};

use crate::error::ConversionError;
use crate::transformer::{utils, SchemaTransformer};

/// OpenAI-compatible schema transformer
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenAiTransformer;

impl OpenAiTransformer {
    pub fn new() -> Self {
        Self
    }

    fn convert_message(&self, msg: &Message) -> Value {
        let content = match &msg.content {
            Content::Text { text } => json!(text),
            Content::Parts { parts } => {
                Value::Array(parts.iter().map(|p| self.convert_content_part(p)).collect())
            }
        };
        json!({
            "role": msg.role.to_string(),
            "content": content,
        })
    }

    fn convert_content_part(&self, part: &ContentPart) -> Value {
        match part {
            ContentPart::Text { text } => json!({
                "type": "text",
                "text": text,
            }),
            ContentPart::Image { source, detail } => {
                let mut image_url = json!({ "url": source.to_url() });
                if let Some(detail) = detail {
                    image_url["detail"] = json!(detail.as_str());
                }
                json!({
                    "type": "image_url",
                    "image_url": image_url,
                })
            }
        }
    }

    fn convert_role(role: Option<&str>) -> Role {
        match role {
            Some("system") => Role::System,
            Some("user") => Role::User,
            _ => Role::Assistant,
        }
    }
}

impl SchemaTransformer for OpenAiTransformer {
    fn provider_id(&self) -> &str {
        "openai"
    }

    fn transform_request(&self, request: &ChatRequest) -> Result<Value, ConversionError> {
        if request.model.trim().is_empty() {
            return Err(ConversionError::InvalidFormat("model is empty".to_string()));
        }

        let messages: Vec<Value> = request
            .messages
            .iter()
            .map(|m| self.convert_message(m))
            .collect();

        let mut body = json!({
            "model": request.model,
            "messages": messages,
        });

        if let Some(max_tokens) = request.options.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        if let Some(temp) = request.options.temperature {
            body["temperature"] = json!(temp);
        }

        if let Some(ResponseFormat::JsonObject) = request.options.response_format {
            body["response_format"] = json!({ "type": "json_object" });
        }

        Ok(body)
    }

    fn parse_response(&self, data: &Value) -> Result<ChatResponse, ConversionError> {
        let id = data["id"].as_str().unwrap_or_default().to_string();
        let model = data["model"].as_str().unwrap_or_default().to_string();

        let message_data = utils::safe_get(data, "choices.0.message")
            .filter(|m| m.is_object())
            .ok_or_else(|| ConversionError::MissingField("choices[0].message".to_string()))?;

        let role = Self::convert_role(message_data["role"].as_str());
        let text = message_data["content"].as_str().unwrap_or_default();
        let message = match role {
            Role::System => Message::system(text),
            Role::User => Message::user(text),
            Role::Assistant => Message::assistant(text),
        };

        let usage = match data.get("usage") {
            Some(raw) => {
                let input = raw["prompt_tokens"].as_u64().unwrap_or(0) as u32;
                let output = raw["completion_tokens"].as_u64().unwrap_or(0) as u32;
                let mut usage = ChatUsage::new(input, output);
                if let Some(total) = raw["total_tokens"].as_u64() {
                    usage.total_tokens = total as u32;
                }
                usage
            }
            None => ChatUsage::default(),
        };

        Ok(ChatResponse::new(id, model, message).with_usage(usage))
    }
}

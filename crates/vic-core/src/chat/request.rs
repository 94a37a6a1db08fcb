use crate::types::Message;

/// Chat completion request
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub options: ChatOptions,
}

impl ChatRequest {
    /// Create a new chat request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            options: ChatOptions::default(),
        }
    }

    /// Add a message to the request
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Add multiple messages
    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Set options
    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.options.temperature = Some(temp);
        self
    }

    /// Set max tokens
    pub fn max_tokens(mut self, max: u32) -> Self {
        self.options.max_tokens = Some(max);
        self
    }

    /// Ask the model for a strict JSON object
    pub fn json_object(mut self) -> Self {
        self.options.response_format = Some(ResponseFormat::JsonObject);
        self
    }
}

/// Options for chat completion
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub response_format: Option<ResponseFormat>,
}

impl ChatOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set temperature (0.0 - 2.0)
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Set response format
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

/// Response format for structured outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Standard text response
    Text,
    /// JSON object response
    JsonObject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_builder() {
        let request = ChatRequest::new("gpt-4o")
            .with_message(Message::user("Hello"))
            .temperature(0.8)
            .max_tokens(800);

        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.options.temperature, Some(0.8));
        assert_eq!(request.options.max_tokens, Some(800));
        assert!(request.options.response_format.is_none());
    }

    #[test]
    fn test_json_object_request() {
        let request = ChatRequest::new("gpt-4o").json_object();
        assert_eq!(request.options.response_format, Some(ResponseFormat::JsonObject));
    }
}

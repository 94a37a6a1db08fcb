use serde::{Deserialize, Serialize};

/// Content type for messages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    /// Simple text content
    Text { text: String },
    /// Multimodal content parts
    Parts { parts: Vec<ContentPart> },
}

/// Individual content part (for multimodal messages)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content
    Text { text: String },
    /// Image content with an optional fidelity hint for vision models
    Image {
        source: ImageSource,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<ImageDetail>,
    },
}

/// Image source for vision models
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Base64 encoded image data
    Base64 { data: String, mime_type: String },
    /// URL to an image
    Url { url: String },
}

/// How closely a vision model should look at an image
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    Low,
    High,
    Auto,
}

impl ImageDetail {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
            Self::Auto => "auto",
        }
    }
}

impl Content {
    /// Create text content
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create content from parts
    pub fn parts(parts: Vec<ContentPart>) -> Self {
        Self::Parts { parts }
    }

    /// Check if content is empty
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text { text } => text.is_empty(),
            Self::Parts { parts } => parts.is_empty(),
        }
    }

    /// Number of image parts carried by this content
    pub fn image_count(&self) -> usize {
        match self {
            Self::Text { .. } => 0,
            Self::Parts { parts } => parts
                .iter()
                .filter(|p| matches!(p, ContentPart::Image { .. }))
                .count(),
        }
    }
}

impl ContentPart {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an image part from either a `data:` URL or a plain URL
    pub fn image(url_or_data: &str, detail: ImageDetail) -> Self {
        Self::Image {
            source: ImageSource::from_url(url_or_data),
            detail: Some(detail),
        }
    }

    /// Create an image part from base64
    pub fn image_base64(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self::Image {
            source: ImageSource::Base64 {
                data: data.into(),
                mime_type: mime_type.into(),
            },
            detail: None,
        }
    }

    /// Create an image part from URL
    pub fn image_url(url: impl Into<String>) -> Self {
        Self::Image {
            source: ImageSource::Url { url: url.into() },
            detail: None,
        }
    }
}

impl ImageSource {
    /// Split a `data:<mime>;base64,<payload>` URL into its parts.
    /// Anything else is kept as a plain URL.
    pub fn from_url(url: &str) -> Self {
        if let Some(rest) = url.strip_prefix("data:") {
            if let Some((mime_type, data)) = rest.split_once(";base64,") {
                return Self::Base64 {
                    data: data.to_string(),
                    mime_type: mime_type.to_string(),
                };
            }
        }
        Self::Url { url: url.to_string() }
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> &str {
        match self {
            Self::Base64 { mime_type, .. } => mime_type,
            Self::Url { .. } => "image/url",
        }
    }

    /// Render as something an `image_url` field accepts
    pub fn to_url(&self) -> String {
        match self {
            Self::Base64 { data, mime_type } => format!("data:{};base64,{}", mime_type, data),
            Self::Url { url } => url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content() {
        let content = Content::text("Hello");
        match content {
            Content::Text { text } => assert_eq!(text, "Hello"),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_data_url_is_split() {
        let part = ContentPart::image("data:image/png;base64,abc123", ImageDetail::High);
        match part {
            ContentPart::Image { source: ImageSource::Base64 { data, mime_type }, detail } => {
                assert_eq!(data, "abc123");
                assert_eq!(mime_type, "image/png");
                assert_eq!(detail, Some(ImageDetail::High));
            }
            _ => panic!("Expected base64 image"),
        }
    }

    #[test]
    fn test_plain_url_is_kept() {
        let source = ImageSource::from_url("https://example.com/look.jpg");
        assert_eq!(source, ImageSource::Url { url: "https://example.com/look.jpg".to_string() });
        assert_eq!(source.to_url(), "https://example.com/look.jpg");
    }

    #[test]
    fn test_base64_renders_back_to_data_url() {
        let source = ImageSource::from_url("data:image/jpeg;base64,Zm9v");
        assert_eq!(source.to_url(), "data:image/jpeg;base64,Zm9v");
    }

    #[test]
    fn test_image_count() {
        let content = Content::parts(vec![
            ContentPart::text("look"),
            ContentPart::image_url("https://a"),
            ContentPart::image_url("https://b"),
        ]);
        assert_eq!(content.image_count(), 2);
        assert_eq!(Content::text("x").image_count(), 0);
    }
}

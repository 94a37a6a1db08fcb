use serde::{Deserialize, Serialize};

/// Style key used when no profile (or an empty one) is available
pub const DEFAULT_STYLE: &str = "modern";

/// A user's inferred aesthetic.
///
/// Produced once per analysis run and replaced wholesale by the next one.
/// Field names are camelCase on disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    pub top_styles: Vec<String>,
    pub top_tags: Vec<String>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aesthetic_traits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luxury_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vic_insight: Option<String>,
}

impl StyleProfile {
    pub fn new(top_styles: Vec<String>, top_tags: Vec<String>, summary: impl Into<String>) -> Self {
        Self {
            top_styles,
            top_tags,
            summary: summary.into(),
            ..Default::default()
        }
    }

    pub fn with_aesthetic_traits(mut self, traits: Vec<String>) -> Self {
        self.aesthetic_traits = Some(traits);
        self
    }

    pub fn with_lifestyle(mut self, lifestyle: impl Into<String>) -> Self {
        self.lifestyle = Some(lifestyle.into());
        self
    }

    pub fn with_luxury_profile(mut self, luxury: impl Into<String>) -> Self {
        self.luxury_profile = Some(luxury.into());
        self
    }

    pub fn with_vic_insight(mut self, insight: impl Into<String>) -> Self {
        self.vic_insight = Some(insight.into());
        self
    }

    /// The dominant style, if any
    pub fn top_style(&self) -> Option<&str> {
        self.top_styles.first().map(String::as_str)
    }

    /// Key for looking up per-style phrase tables
    pub fn style_key(profile: Option<&StyleProfile>) -> &str {
        profile.and_then(|p| p.top_style()).unwrap_or(DEFAULT_STYLE)
    }
}

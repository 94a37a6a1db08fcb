//! Style profile from a batch of photos.
//!
//! With a provider the photos go to the vision model in one request and the
//! JSON it returns is mapped onto a [`StyleProfile`]. Without one the local
//! color pipeline in `vic_vision` runs instead.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, Instrument};
use vic_config::{LlmConfig, SamplingConfig};
use vic_core::{ChatRequest, ContentPart, ImageDetail, Message, RandomSource, Role, StyleProfile};
use vic_llm::{LLMError, LLMProvider};
use vic_observability::create_analysis_span;

use crate::error::{Result, StylistError};

/// Message used when the analysis call fails without a readable error
pub const ANALYSIS_ERROR: &str = "Failed to analyze images";

const DEFAULT_SUMMARY: &str = "Your style has been analyzed by Vic.";

const SYSTEM_PROMPT: &str = "You are Vic, an elite fashion curator and style analyst. Analyze the provided images to understand the person's style preferences, aesthetic, and lifestyle. Be sophisticated, insightful, and specific.";

/// Instruction text preceding the images
pub fn analysis_prompt(image_count: usize) -> String {
    format!(
        r#"Analyze these {image_count} images to create a comprehensive style profile. Identify:

1. **Top 3 Style Categories** (e.g., minimalist, streetwear, bohemian, professional, avant-garde, etc.)
2. **Color Palette Preferences** (specific colors they gravitate toward)
3. **Aesthetic Traits** (key characteristics of their style)
4. **Lifestyle Indicators** (what their photos reveal about their lifestyle)
5. **Luxury Preferences** (do they prefer high-end, contemporary, vintage, sustainable brands?)

Return your analysis as a JSON object with this structure:
{{
  "topStyles": ["style1", "style2", "style3"],
  "colorPalette": ["color1", "color2", "color3", "color4", "color5"],
  "aestheticTraits": ["trait1", "trait2", "trait3", "trait4"],
  "lifestyle": "brief description",
  "luxuryProfile": "brief description",
  "vicInsight": "A personal, sophisticated message from you (Vic) about their unique style - 2-3 sentences"
}}

Be specific and insightful. Avoid generic descriptions."#
    )
}

/// The document the vision model is asked to return
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteAnalysis {
    top_styles: Option<Vec<String>>,
    color_palette: Option<Vec<String>>,
    aesthetic_traits: Option<Vec<String>>,
    lifestyle: Option<String>,
    luxury_profile: Option<String>,
    vic_insight: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<RemoteAnalysis> for StyleProfile {
    fn from(remote: RemoteAnalysis) -> Self {
        let top_styles = remote
            .top_styles
            .unwrap_or_else(|| vec!["modern".to_string(), "refined".to_string()]);
        let top_tags = remote
            .color_palette
            .unwrap_or_else(|| vec!["neutral".to_string(), "sophisticated".to_string()]);
        let insight = non_empty(remote.vic_insight);
        let summary = insight.clone().unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

        let mut profile = StyleProfile::new(top_styles, top_tags, summary)
            .with_aesthetic_traits(remote.aesthetic_traits.unwrap_or_default())
            .with_lifestyle(non_empty(remote.lifestyle).unwrap_or_default())
            .with_luxury_profile(non_empty(remote.luxury_profile).unwrap_or_default());
        profile.vic_insight = insight;
        profile
    }
}

/// Parse the model's JSON reply into a profile
pub fn parse_analysis(content: &str) -> std::result::Result<StyleProfile, LLMError> {
    let remote: RemoteAnalysis = serde_json::from_str(content.trim())
        .map_err(|e| LLMError::MalformedResponse(format!("style analysis is not valid JSON: {}", e)))?;
    Ok(remote.into())
}

pub struct StyleAnalyzer {
    provider: Option<Arc<dyn LLMProvider>>,
    rng: Arc<dyn RandomSource>,
    model: String,
    sampling: SamplingConfig,
    max_images: usize,
}

impl StyleAnalyzer {
    pub fn new(provider: Option<Arc<dyn LLMProvider>>, rng: Arc<dyn RandomSource>, config: &LlmConfig) -> Self {
        Self {
            provider,
            rng,
            model: config.model.clone(),
            sampling: config.analysis,
            max_images: config.max_analysis_images,
        }
    }

    /// Vision request for the first `max_images` images
    pub fn build_request(&self, images: &[String]) -> ChatRequest {
        let selected = &images[..images.len().min(self.max_images)];

        let mut parts = Vec::with_capacity(selected.len() + 1);
        parts.push(ContentPart::text(analysis_prompt(selected.len())));
        parts.extend(selected.iter().map(|url| ContentPart::image(url, ImageDetail::Low)));

        ChatRequest::new(self.model.clone())
            .with_message(Message::system(SYSTEM_PROMPT))
            .with_message(Message::from_parts(Role::User, parts))
            .max_tokens(self.sampling.max_tokens)
            .temperature(self.sampling.temperature)
            .json_object()
    }

    /// Profile for `images`, given as data URLs or https URLs
    pub async fn analyze(&self, images: &[String]) -> Result<StyleProfile> {
        if images.is_empty() {
            return Err(StylistError::NoImagesToAnalyze);
        }

        let span = create_analysis_span(images.len(), self.provider.is_some());

        let Some(provider) = &self.provider else {
            let _entered = span.enter();
            let profile = vic_vision::analyze_data_urls(images, self.rng.as_ref());
            info!(styles = ?profile.top_styles, "analyzed photos locally");
            return Ok(profile);
        };

        let request = self.build_request(images);
        async move {
            let response = provider
                .chat(request)
                .await
                .map_err(|e| e.or_fallback(ANALYSIS_ERROR))?;
            debug!(tokens = response.usage.total_tokens, "vision model replied");
            let profile = parse_analysis(&response.text())?;
            info!(styles = ?profile.top_styles, "analyzed photos with vision model");
            Ok::<_, StylistError>(profile)
        }
        .instrument(span)
        .await
    }
}

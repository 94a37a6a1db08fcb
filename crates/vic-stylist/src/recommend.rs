//! Outfit recommendations built from what the user has talked about.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vic_core::{ChatMessage, Conversation, StyleProfile};
use vic_llm::LLMError;

use crate::dispatch::Advisor;
use crate::error::Result;

/// Summary shown when there is nothing to personalise from
pub const NO_HISTORY_SUMMARY: &str = "Start chatting with Vic to get personalized recommendations!";

const DEFAULT_OUTFITS: &str = include_str!("../resources/default_outfits.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingLink {
    pub item: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Generic pieces that make up the look
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub occasion: String,
    #[serde(default)]
    pub search_query: String,
    /// Specific branded products to shop
    #[serde(default)]
    pub shopping_links: Vec<ShoppingLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub summary: String,
    pub outfits: Vec<Outfit>,
}

impl Recommendations {
    fn defaults(summary: &str) -> Result<Self> {
        Ok(Self {
            summary: summary.to_string(),
            outfits: default_outfits()?,
        })
    }
}

/// The nine curated looks shown before Vic knows the user
pub fn default_outfits() -> Result<Vec<Outfit>> {
    Ok(serde_json::from_str(DEFAULT_OUTFITS)?)
}

/// Prompt asking the model for nine outfits as JSON
pub fn build_prompt(user_turns: &[&str], profile: Option<&StyleProfile>) -> String {
    let profile_block = match profile {
        Some(p) => format!(
            "User's style profile:\n- Top Styles: {}\n- Color Palette: {}\n- Aesthetic Traits: {}\n- Lifestyle: {}\n- Luxury Preferences: {}",
            p.top_styles.join(", "),
            p.top_tags.join(", "),
            p.aesthetic_traits.as_deref().unwrap_or_default().join(", "),
            p.lifestyle.as_deref().unwrap_or_default(),
            p.luxury_profile.as_deref().unwrap_or_default(),
        ),
        None => String::new(),
    };

    format!(
        r#"Based on this user's recent chat history and their analyzed style profile, recommend 9 specific outfit combinations that match their aesthetic.

User's chat history:
{history}

{profile_block}

Provide 9 outfit recommendations in this EXACT JSON format:
{{
  "summary": "A brief 1-sentence summary of what the user is looking for",
  "outfits": [
    {{
      "title": "Outfit name",
      "description": "Why this works for them",
      "items": ["Item 1 description (e.g., 'Navy wool blazer')", "Item 2 description", "Item 3 description"],
      "priceRange": "$XXX-$XXX",
      "occasion": "casual/professional/formal",
      "searchQuery": "specific search term for Unsplash photo",
      "shoppingLinks": [
        {{"item": "Specific product with brand (e.g., 'Suitsupply Lazio Navy Blazer')", "url": "https://www.google.com/search?q=brand+item&tbm=shop"}}
      ]
    }}
  ]
}}

IMPORTANT:
- "items" should be GENERIC descriptions of the outfit pieces (e.g., "Navy blazer", "White dress shirt")
- "shoppingLinks" should be SPECIFIC branded products to shop (e.g., "Brooks Brothers Milano Fit Blazer", "Charles Tyrwhitt Non-Iron Shirt")
- Make sure these are DIFFERENT - items are what's IN the outfit, shoppingLinks are WHERE to buy similar items

Make searchQuery very specific for finding good outfit photos on Unsplash (e.g., "man wearing navy suit", "woman in leather jacket street style")."#,
        history = user_turns.join("\n"),
    )
}

/// Byte ranges of every balanced top-level `{...}` in `text`.
///
/// Braces inside JSON strings are ignored. `None` if an object never closes.
fn top_level_objects(text: &str) -> Option<Vec<(usize, usize)>> {
    let mut objects = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if depth > 0 && in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    objects.push((start, i + 1));
                }
            }
            _ => {}
        }
    }

    (depth == 0).then_some(objects)
}

/// Pull the single recommendations document out of a model reply
pub fn extract_recommendations(text: &str) -> std::result::Result<Recommendations, LLMError> {
    let objects = top_level_objects(text)
        .ok_or_else(|| LLMError::MalformedResponse("unbalanced braces in reply".to_string()))?;

    let (start, end) = match objects.as_slice() {
        [single] => *single,
        [] => return Err(LLMError::MalformedResponse("no JSON object in reply".to_string())),
        many => {
            return Err(LLMError::MalformedResponse(format!(
                "expected one JSON object in reply, found {}",
                many.len()
            )))
        }
    };

    serde_json::from_str(&text[start..end])
        .map_err(|e| LLMError::MalformedResponse(format!("recommendations do not match schema: {}", e)))
}

/// Nine outfits for this user.
///
/// Falls back to the curated defaults when there is no conversation to learn
/// from or no model to ask.
pub async fn recommend(
    advisor: &Advisor,
    transcript: &[ChatMessage],
    profile: Option<&StyleProfile>,
) -> Result<Recommendations> {
    let conversation = Conversation::from_messages(transcript.to_vec());
    let turns = conversation.user_turns();
    if turns.is_empty() {
        debug!("no chat history, using default outfits");
        return Recommendations::defaults(NO_HISTORY_SUMMARY);
    }

    if !advisor.is_online() {
        debug!("offline, using default outfits");
        return Recommendations::defaults("");
    }

    let prompt = build_prompt(&turns, profile);
    let reply = advisor.dispatch(&[], &prompt, None, profile).await?;
    let recommendations = extract_recommendations(&reply)?;
    info!(outfits = recommendations.outfits.len(), "generated recommendations");
    Ok(recommendations)
}

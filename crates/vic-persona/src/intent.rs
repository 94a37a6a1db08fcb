//! Keyword intent classification.
//!
//! Rows are checked in order against the lowercased message and the first
//! hit wins, so "what color should I buy" is a [`Intent::Color`] question.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    Color,
    Shopping,
    Capsule,
    Seasonal,
    Footwear,
    Accessories,
    Fit,
    BodyShape,
    Pairing,
    Budget,
    Trends,
    Confidence,
    Question,
    Compliment,
    Help,
    Fallback,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Color => "color",
            Intent::Shopping => "shopping",
            Intent::Capsule => "capsule",
            Intent::Seasonal => "seasonal",
            Intent::Footwear => "footwear",
            Intent::Accessories => "accessories",
            Intent::Fit => "fit",
            Intent::BodyShape => "body-shape",
            Intent::Pairing => "pairing",
            Intent::Budget => "budget",
            Intent::Trends => "trends",
            Intent::Confidence => "confidence",
            Intent::Question => "question",
            Intent::Compliment => "compliment",
            Intent::Help => "help",
            Intent::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patterns in priority order. [`Intent::Fallback`] has no row.
const INTENT_PATTERNS: &[(Intent, &str)] = &[
    (Intent::Greeting, r"\b(hi|hey|hello|good morning|good afternoon|good evening)\b"),
    (Intent::Color, r"\b(color|colour|colors|colours)\b"),
    (Intent::Shopping, r"\b(buy|shop|find|brand|store|where|recommend|purchase)\b"),
    (Intent::Capsule, r"\b(capsule|wardrobe|essential|basics|must-have|foundation)\b"),
    (Intent::Seasonal, r"\b(winter|summer|fall|autumn|spring|season|weather|cold|hot)\b"),
    (Intent::Footwear, r"\b(shoe|shoes|sneaker|boot|footwear|feet)\b"),
    (Intent::Accessories, r"\b(accessory|accessories|jewelry|watch|bag|belt|scarf|wallet|backpack)\b"),
    (Intent::Fit, r"\b(fit|fitting|tailor|tailoring|alter|size|sizing)\b"),
    (Intent::BodyShape, r"\b(body|shape|figure|tall|short|slim|curvy)\b"),
    (Intent::Pairing, r"\b(match|matching|pair|pairing|combine|go with|goes with)\b"),
    (Intent::Budget, r"\b(budget|cheap|affordable|expensive|cost|price)\b"),
    (Intent::Trends, r"\b(trend|trendy|trending|fashion|current|latest)\b"),
    (Intent::Confidence, r"\b(confidence|confident|insecure|uncomfortable|unsure)\b"),
    (Intent::Question, r"\?"),
    (Intent::Compliment, r"\b(like|love|great|amazing|beautiful|gorgeous)\b"),
    (Intent::Help, r"\b(help|advice|suggest|suggestion|guide|guidance)\b"),
];

static DECISION_TABLE: Lazy<Vec<(Intent, Regex)>> = Lazy::new(|| {
    INTENT_PATTERNS
        .iter()
        .map(|(intent, pattern)| (*intent, Regex::new(pattern).expect("intent pattern is valid")))
        .collect()
});

/// What a shopping request is after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoppingTarget {
    Tops,
    Bottoms,
    Shoes,
    Outerwear,
    Accessories,
    General,
}

const SHOPPING_PATTERNS: &[(ShoppingTarget, &str)] = &[
    (ShoppingTarget::Tops, r"\b(shirt|tee|t-shirt|top|sweater|hoodie)\b"),
    (ShoppingTarget::Bottoms, r"\b(pant|pants|jean|jeans|trouser|chino)\b"),
    (ShoppingTarget::Shoes, r"\b(shoe|shoes|sneaker|boot|boots|footwear)\b"),
    (ShoppingTarget::Outerwear, r"\b(jacket|coat|outerwear)\b"),
    (ShoppingTarget::Accessories, r"\b(bag|wallet|watch|backpack|accessory|accessories)\b"),
];

static SHOPPING_TABLE: Lazy<Vec<(ShoppingTarget, Regex)>> = Lazy::new(|| {
    SHOPPING_PATTERNS
        .iter()
        .map(|(target, pattern)| (*target, Regex::new(pattern).expect("shopping pattern is valid")))
        .collect()
});

/// First matching intent for `message`
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();
    DECISION_TABLE
        .iter()
        .find(|(_, re)| re.is_match(&lower))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Fallback)
}

/// Every intent whose row matches, in priority order
pub fn matching_intents(message: &str) -> Vec<Intent> {
    let lower = message.to_lowercase();
    DECISION_TABLE
        .iter()
        .filter(|(_, re)| re.is_match(&lower))
        .map(|(intent, _)| *intent)
        .collect()
}

/// Sub-category of a shopping request
pub fn shopping_target(message: &str) -> ShoppingTarget {
    let lower = message.to_lowercase();
    SHOPPING_TABLE
        .iter()
        .find(|(_, re)| re.is_match(&lower))
        .map(|(target, _)| *target)
        .unwrap_or(ShoppingTarget::General)
}

//! Offline Vic: canned, persona-flavored replies when no model is reachable.

use std::sync::Arc;

use tracing::debug;
use vic_core::random::{self, RandomSource};
use vic_core::StyleProfile;

use crate::catalog::{Catalog, Category, Product};
use crate::error::Result;
use crate::intent::{self, Intent, ShoppingTarget};
use crate::phrases;

/// Upper bound on products listed for a shopping request
const SHOPPING_LIMIT: usize = 4;
/// Products listed for footwear and accessories questions
const SHOWCASE_LIMIT: usize = 3;

pub struct Persona {
    catalog: Catalog,
    rng: Arc<dyn RandomSource>,
}

impl Persona {
    /// Persona backed by the embedded catalog
    pub fn new(rng: Arc<dyn RandomSource>) -> Result<Self> {
        Ok(Self::with_catalog(Catalog::embedded()?, rng))
    }

    pub fn with_catalog(catalog: Catalog, rng: Arc<dyn RandomSource>) -> Self {
        Self { catalog, rng }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn pick(&self, items: &[&'static str]) -> &'static str {
        random::choose(self.rng.as_ref(), items).copied().unwrap_or_default()
    }

    /// Opening line, personalised when a profile is known
    pub fn greeting(&self, profile: Option<&StyleProfile>) -> String {
        let greeting = self.pick(phrases::GREETINGS);
        match profile.and_then(StyleProfile::top_style) {
            Some(style) => format!(
                "{}\n\nI notice your {} sensibility — quite refined. How may I assist you today?",
                greeting, style
            ),
            None => greeting.to_string(),
        }
    }

    /// Canned reaction to a shared outfit photo
    pub fn outfit_reaction(&self) -> String {
        format!("{}{}", self.pick(phrases::OUTFIT_REACTIONS), phrases::OUTFIT_FOLLOW_UP)
    }

    pub fn quick_suggestions() -> &'static [&'static str] {
        phrases::QUICK_SUGGESTIONS
    }

    /// Reply to `message` using the keyword decision table
    pub fn respond(&self, message: &str, profile: Option<&StyleProfile>) -> String {
        let style = StyleProfile::style_key(profile);
        let intent = intent::classify(message);
        debug!(%intent, style, "offline reply");

        match intent {
            Intent::Greeting => phrases::HELLO.to_string(),
            Intent::Color => phrases::color_advice(style).to_string(),
            Intent::Shopping => self.shopping(message, style),
            Intent::Capsule => phrases::CAPSULE.to_string(),
            Intent::Seasonal => seasonal(&message.to_lowercase()).to_string(),
            Intent::Footwear => {
                let shoes = self.catalog.products_by_style(Category::Shoes, style);
                showcase(phrases::FOOTWEAR_INTRO, shoes, phrases::FOOTWEAR_OUTRO)
            }
            Intent::Accessories => showcase(
                phrases::ACCESSORIES_INTRO,
                self.catalog.accessories(),
                phrases::ACCESSORIES_OUTRO,
            ),
            Intent::Fit => phrases::FIT.to_string(),
            Intent::BodyShape => phrases::BODY.to_string(),
            Intent::Pairing => format!("{}{}", self.advice(style), phrases::PAIRING_TIPS),
            Intent::Budget => phrases::BUDGET.to_string(),
            Intent::Trends => phrases::TRENDS.to_string(),
            Intent::Confidence => phrases::CONFIDENCE.to_string(),
            Intent::Question => self.advice(style).to_string(),
            Intent::Compliment => format!(
                "{}{}",
                self.pick(phrases::COMPLIMENTS),
                phrases::COMPLIMENT_FOLLOW_UP
            ),
            Intent::Help => format!("{}{}", phrases::HELP_PREFIX, self.advice(style)),
            Intent::Fallback => self.pick(phrases::THOUGHTFUL_DEFAULTS).to_string(),
        }
    }

    fn advice(&self, style: &str) -> &'static str {
        self.pick(phrases::style_advice(style))
    }

    fn shopping(&self, message: &str, style: &str) -> String {
        let (category, products) = match intent::shopping_target(message) {
            ShoppingTarget::Tops => styled(&self.catalog, Category::Tops, style),
            ShoppingTarget::Bottoms => styled(&self.catalog, Category::Bottoms, style),
            ShoppingTarget::Shoes => styled(&self.catalog, Category::Shoes, style),
            ShoppingTarget::Outerwear => styled(&self.catalog, Category::Outerwear, style),
            ShoppingTarget::Accessories => (None, self.catalog.accessories().to_vec()),
            ShoppingTarget::General => (
                None,
                self.catalog.mixed(SHOPPING_LIMIT, style, self.rng.as_ref()),
            ),
        };

        let mut response = match category {
            Some(category) => format!(
                "Here are some {} I'd recommend for your {} aesthetic:\n\n",
                category.as_str(),
                style
            ),
            None => phrases::SHOPPING_GENERAL_INTRO.to_string(),
        };
        for product in products.iter().take(SHOPPING_LIMIT) {
            response.push_str(&product.render());
        }
        response.push_str(phrases::SHOPPING_PRO_TIP);
        response
    }
}

fn styled(catalog: &Catalog, category: Category, style: &str) -> (Option<Category>, Vec<Product>) {
    (Some(category), catalog.products_by_style(category, style).to_vec())
}

fn showcase(intro: &str, products: &[Product], outro: &str) -> String {
    let mut response = intro.to_string();
    for product in products.iter().take(SHOWCASE_LIMIT) {
        response.push_str(&product.render());
    }
    response.push_str(outro);
    response
}

fn seasonal(lower: &str) -> &'static str {
    if lower.contains("winter") || lower.contains("cold") {
        phrases::WINTER
    } else if lower.contains("summer") || lower.contains("hot") {
        phrases::SUMMER
    } else {
        phrases::TRANSITIONAL
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Interests offered during onboarding, as `(id, label)`
pub const STYLE_INTERESTS: &[(&str, &str)] = &[
    ("minimalist", "Minimalist"),
    ("streetwear", "Streetwear"),
    ("professional", "Professional"),
    ("bohemian", "Bohemian"),
    ("modern", "Modern"),
    ("vintage", "Vintage"),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OnboardingError {
    #[error("name is required")]
    MissingName,

    #[error("a valid email address is required")]
    InvalidEmail,

    #[error("pick at least one style interest")]
    NoInterests,
}

/// Onboarding-completion marker; its presence means onboarding is done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub instagram: String,
    pub interests: Vec<String>,
    pub signup_date: DateTime<Utc>,
}

impl OnboardingRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        instagram: impl Into<String>,
        interests: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            instagram: instagram.into(),
            interests,
            signup_date: Utc::now(),
        }
    }

    /// Instagram is optional; everything else must be filled in.
    pub fn validate(&self) -> Result<(), OnboardingError> {
        if self.name.trim().is_empty() {
            return Err(OnboardingError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(OnboardingError::InvalidEmail);
        }
        if self.interests.is_empty() {
            return Err(OnboardingError::NoInterests);
        }
        Ok(())
    }

    /// Toggle an interest on or off, keeping selection order
    pub fn toggle_interest(&mut self, id: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == id) {
            self.interests.remove(pos);
        } else {
            self.interests.push(id.to_string());
        }
    }
}

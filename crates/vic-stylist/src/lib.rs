//! Vic's styling workflows.
//!
//! [`Stylist`] is the entry point: it resolves the API key, then routes chat
//! turns, photo analysis and recommendations either to the chat completion
//! endpoint or to the offline persona and local vision pipeline.

pub mod analysis;
pub mod analytics;
pub mod credentials;
pub mod dispatch;
pub mod error;
pub mod onboarding;
pub mod photos;
pub mod recommend;
pub mod session;
pub mod stylist;

pub use analysis::{parse_analysis, StyleAnalyzer};
pub use analytics::{SignupPayload, SignupTracker};
pub use credentials::{build_provider, resolve_credential};
pub use dispatch::{system_prompt, Advisor};
pub use error::{Result, StylistError};
pub use photos::{scan_folder, select_files};
pub use recommend::{default_outfits, extract_recommendations, Outfit, Recommendations, ShoppingLink};
pub use session::ChatSession;
pub use stylist::Stylist;

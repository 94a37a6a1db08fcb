//! Vic's offline persona: keyword intents, phrase tables and the product
//! catalog used when no model credential is available.

pub mod catalog;
pub mod error;
pub mod intent;
pub mod phrases;
pub mod responder;

pub use catalog::{Catalog, Category, Product};
pub use error::{PersonaError, Result};
pub use intent::{classify, matching_intents, Intent, ShoppingTarget};
pub use responder::Persona;

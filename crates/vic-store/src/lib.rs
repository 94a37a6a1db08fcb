//! Typed persistence for everything Vic remembers between runs.
//!
//! [`StateStore`] exposes one load/save/clear triple per kind of state.
//! Implementations only move raw JSON text around; (de)serialization and
//! the corrupt-data policy live in the trait's provided methods.

mod memory;
mod models;
mod storage;
mod store;

pub use memory::MemoryStore;
pub use models::{Credential, StateKey};
pub use storage::JsonFileStore;
pub use store::StateStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

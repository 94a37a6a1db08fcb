use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use vic_core::{ChatMessage, OnboardingRecord, StyleProfile};

use crate::models::{Credential, StateKey};
use crate::StoreResult;

fn decode<T: DeserializeOwned>(key: StateKey, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key = key.as_str(), error = %e, "ignoring corrupt persisted state");
            None
        }
    }
}

fn encode<T: Serialize>(value: &T) -> StoreResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Persisted application state.
///
/// Implementors provide raw slot access; the typed accessors are shared.
/// Unparseable slots are logged and read back as absent.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn read_raw(&self, key: StateKey) -> StoreResult<Option<String>>;

    async fn write_raw(&self, key: StateKey, contents: String) -> StoreResult<()>;

    /// Remove a slot. Removing an absent slot is not an error.
    async fn remove(&self, key: StateKey) -> StoreResult<()>;

    async fn load_profile(&self) -> StoreResult<Option<StyleProfile>> {
        let key = StateKey::StyleProfile;
        Ok(decode(key, self.read_raw(key).await?))
    }

    async fn save_profile(&self, profile: &StyleProfile) -> StoreResult<()> {
        self.write_raw(StateKey::StyleProfile, encode(profile)?).await
    }

    async fn clear_profile(&self) -> StoreResult<()> {
        self.remove(StateKey::StyleProfile).await
    }

    async fn load_credential(&self) -> StoreResult<Option<Credential>> {
        let key = StateKey::Credential;
        let credential: Option<Credential> = decode(key, self.read_raw(key).await?);
        Ok(credential.and_then(|c| Credential::new(c.api_key)))
    }

    async fn save_credential(&self, credential: &Credential) -> StoreResult<()> {
        self.write_raw(StateKey::Credential, encode(credential)?).await
    }

    async fn clear_credential(&self) -> StoreResult<()> {
        self.remove(StateKey::Credential).await
    }

    async fn load_onboarding(&self) -> StoreResult<Option<OnboardingRecord>> {
        let key = StateKey::Onboarding;
        Ok(decode(key, self.read_raw(key).await?))
    }

    async fn save_onboarding(&self, record: &OnboardingRecord) -> StoreResult<()> {
        self.write_raw(StateKey::Onboarding, encode(record)?).await
    }

    async fn clear_onboarding(&self) -> StoreResult<()> {
        self.remove(StateKey::Onboarding).await
    }

    async fn load_history(&self) -> StoreResult<Option<Vec<ChatMessage>>> {
        let key = StateKey::ChatHistory;
        Ok(decode(key, self.read_raw(key).await?))
    }

    async fn save_history(&self, messages: &[ChatMessage]) -> StoreResult<()> {
        self.write_raw(StateKey::ChatHistory, encode(&messages)?).await
    }

    async fn clear_history(&self) -> StoreResult<()> {
        self.remove(StateKey::ChatHistory).await
    }

    /// Forget everything
    async fn clear_all(&self) -> StoreResult<()> {
        for key in StateKey::ALL {
            self.remove(key).await?;
        }
        Ok(())
    }
}

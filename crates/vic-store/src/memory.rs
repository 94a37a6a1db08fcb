use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::models::StateKey;
use crate::store::StateStore;
use crate::StoreResult;

/// In-process store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<StateKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn read_raw(&self, key: StateKey) -> StoreResult<Option<String>> {
        Ok(self.slots.read().get(&key).cloned())
    }

    async fn write_raw(&self, key: StateKey, contents: String) -> StoreResult<()> {
        self.slots.write().insert(key, contents);
        Ok(())
    }

    async fn remove(&self, key: StateKey) -> StoreResult<()> {
        self.slots.write().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Credential;
    use vic_core::{ChatMessage, StyleProfile};

    #[tokio::test]
    async fn test_profile_round_trip() {
        let store = MemoryStore::new();
        let profile = StyleProfile::new(
            vec!["minimalist".into(), "modern".into()],
            vec!["neutral-tones".into(), "monochrome".into()],
            "Style essence: minimalist with modern influences",
        )
        .with_vic_insight("Quiet confidence.");

        store.save_profile(&profile).await.unwrap();
        assert_eq!(store.load_profile().await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn test_corrupt_slot_reads_as_absent() {
        let store = MemoryStore::new();
        store.write_raw(StateKey::StyleProfile, "{not json".into()).await.unwrap();
        assert!(store.load_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blank_credential_reads_as_absent() {
        let store = MemoryStore::new();
        store
            .write_raw(StateKey::Credential, r#"{"apiKey":"  "}"#.into())
            .await
            .unwrap();
        assert!(store.load_credential().await.unwrap().is_none());

        store.save_credential(&Credential::new("sk-1").unwrap()).await.unwrap();
        assert_eq!(store.load_credential().await.unwrap().unwrap().api_key, "sk-1");
    }

    #[tokio::test]
    async fn test_clear_all() {
        let store = MemoryStore::new();
        store.save_history(&[ChatMessage::user("hi")]).await.unwrap();
        store.save_credential(&Credential::new("sk-1").unwrap()).await.unwrap();
        assert_eq!(store.len(), 2);

        store.clear_all().await.unwrap();
        assert!(store.is_empty());
        assert!(store.load_history().await.unwrap().is_none());
    }
}

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::json;
use tokio::net::TcpListener;
use vic_config::Config;
use vic_core::FixedRandom;
use vic_store::{Credential, MemoryStore, StateStore};
use vic_stylist::Stylist;

/// Config pointing the model at `base_url` with an env var that is never set
pub fn config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.llm.base_url = base_url.to_string();
    config.llm.api_key_env = "VIC_TEST_UNSET_API_KEY".to_string();
    config
}

pub async fn online_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .save_credential(&Credential::new("sk-test").unwrap())
        .await
        .unwrap();
    store
}

pub async fn stylist(base_url: &str, store: Arc<MemoryStore>) -> Stylist {
    Stylist::connect(config(base_url), store, Arc::new(FixedRandom(0)))
        .await
        .unwrap()
}

/// Chat completion body whose message content is `content`
pub fn completion(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "model": "gpt-4o",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
    .to_string()
}

/// Base URL of a server that accepts connections and never answers
pub async fn silent_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}", addr)
}

//! Best-effort signup tracking to an external webhook.

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use vic_core::OnboardingRecord;

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Row sent to the signup sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub instagram: String,
    pub interests: String,
    pub signup_date: String,
}

impl SignupPayload {
    pub fn from_record(record: &OnboardingRecord) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            name: record.name.clone(),
            email: record.email.clone(),
            instagram: record.instagram.clone(),
            interests: record.interests.join(", "),
            signup_date: record.signup_date.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Posts signups to the configured webhook. Never fails the caller.
#[derive(Debug, Clone)]
pub struct SignupTracker {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl SignupTracker {
    pub fn new(webhook_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            webhook_url: webhook_url.filter(|url| !url.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// POST the signup. `true` once the request went out, whatever the status.
    pub async fn track_signup(&self, record: &OnboardingRecord) -> bool {
        let Some(url) = &self.webhook_url else {
            warn!("signup tracking not configured");
            return false;
        };

        let payload = SignupPayload::from_record(record);
        match self.client.post(url).json(&payload).send().await {
            Ok(response) => {
                info!(status = response.status().as_u16(), "signup tracked");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to track signup");
                false
            }
        }
    }

    /// Fire-and-forget [`Self::track_signup`] on a detached task
    pub fn spawn_track(&self, record: OnboardingRecord) -> JoinHandle<bool> {
        let tracker = self.clone();
        tokio::spawn(async move { tracker.track_signup(&record).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn record() -> OnboardingRecord {
        OnboardingRecord::new(
            "Ada",
            "ada@example.com",
            "@ada",
            vec!["minimalist".into(), "vintage".into()],
        )
    }

    #[test]
    fn test_payload_shape() {
        let value = serde_json::to_value(SignupPayload::from_record(&record())).unwrap();
        assert_eq!(value["interests"], "minimalist, vintage");
        assert_eq!(value["instagram"], "@ada");
        assert!(value["signupDate"].as_str().unwrap().ends_with('Z'));
        assert!(value.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn test_unconfigured_tracker_returns_false() {
        let tracker = SignupTracker::new(None);
        assert!(!tracker.is_configured());
        assert!(!tracker.track_signup(&record()).await);
        assert!(!SignupTracker::new(Some("  ".into())).is_configured());
    }

    #[tokio::test]
    async fn test_posts_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/signup")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "interests": "minimalist, vintage",
            })))
            .with_status(200)
            .create_async()
            .await;

        let tracker = SignupTracker::new(Some(format!("{}/signup", server.url())));
        assert!(tracker.spawn_track(record()).await.unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_still_counts_as_sent() {
        let mut server = mockito::Server::new_async().await;
        server.mock("POST", "/signup").with_status(500).create_async().await;

        let tracker = SignupTracker::new(Some(format!("{}/signup", server.url())));
        assert!(tracker.track_signup(&record()).await);
    }

    #[tokio::test]
    async fn test_unreachable_webhook_is_swallowed() {
        let tracker = SignupTracker::new(Some("http://127.0.0.1:1/signup".into()));
        assert!(!tracker.track_signup(&record()).await);
    }
}

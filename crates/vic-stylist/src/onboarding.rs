use tokio::task::JoinHandle;
use tracing::info;
use vic_core::OnboardingRecord;
use vic_store::StateStore;

use crate::analytics::SignupTracker;
use crate::error::Result;

/// Whether the user has finished onboarding
pub async fn is_onboarded(store: &dyn StateStore) -> Result<bool> {
    Ok(store.load_onboarding().await?.is_some())
}

/// Validate and persist `record`, then report the signup in the background.
///
/// The returned handle resolves to whether the webhook request was sent;
/// callers are free to drop it.
pub async fn complete_onboarding(
    store: &dyn StateStore,
    tracker: &SignupTracker,
    record: OnboardingRecord,
) -> Result<JoinHandle<bool>> {
    record.validate()?;
    store.save_onboarding(&record).await?;
    info!(interests = record.interests.len(), "onboarding complete");
    Ok(tracker.spawn_track(record))
}

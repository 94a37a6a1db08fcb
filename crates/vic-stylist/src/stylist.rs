//! Entry point tying configuration, persisted state and the model together.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;
use vic_config::Config;
use vic_core::{OnboardingRecord, RandomSource, StyleProfile};
use vic_llm::LLMProvider;
use vic_persona::Persona;
use vic_store::StateStore;

use crate::analysis::StyleAnalyzer;
use crate::analytics::SignupTracker;
use crate::credentials::{build_provider, resolve_credential};
use crate::dispatch::Advisor;
use crate::error::Result;
use crate::recommend::{self, Recommendations};
use crate::session::ChatSession;
use crate::{onboarding, photos};

pub struct Stylist {
    config: Config,
    store: Arc<dyn StateStore>,
    advisor: Arc<Advisor>,
    analyzer: StyleAnalyzer,
    tracker: SignupTracker,
}

impl Stylist {
    /// Resolve the API key and build a provider when one is available
    pub async fn connect(config: Config, store: Arc<dyn StateStore>, rng: Arc<dyn RandomSource>) -> Result<Self> {
        let credential = resolve_credential(store.as_ref(), &config.llm.api_key_env).await?;
        let provider = credential
            .map(|credential| build_provider(&config.llm, &credential))
            .transpose()?;
        info!(online = provider.is_some(), "stylist ready");
        Self::with_provider(config, store, rng, provider)
    }

    /// Stylist over an explicit provider; `None` keeps everything local
    pub fn with_provider(
        config: Config,
        store: Arc<dyn StateStore>,
        rng: Arc<dyn RandomSource>,
        provider: Option<Arc<dyn LLMProvider>>,
    ) -> Result<Self> {
        let persona = Arc::new(Persona::new(rng.clone())?);
        let advisor = Arc::new(Advisor::new(provider.clone(), persona, &config.llm));
        let analyzer = StyleAnalyzer::new(provider, rng, &config.llm);
        let tracker = SignupTracker::new(config.analytics.webhook_url.clone());
        Ok(Self {
            config,
            store,
            advisor,
            analyzer,
            tracker,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn StateStore> {
        &self.store
    }

    pub fn advisor(&self) -> &Arc<Advisor> {
        &self.advisor
    }

    pub fn is_online(&self) -> bool {
        self.advisor.is_online()
    }

    pub async fn profile(&self) -> Result<Option<StyleProfile>> {
        Ok(self.store.load_profile().await?)
    }

    /// Opening line for a new chat
    pub async fn greeting(&self) -> Result<String> {
        let profile = self.profile().await?;
        Ok(self.advisor.persona().greeting(profile.as_ref()))
    }

    /// Analyze `images` and store the result as the user's profile
    pub async fn analyze(&self, images: &[String]) -> Result<StyleProfile> {
        let profile = self.analyzer.analyze(images).await?;
        self.store.save_profile(&profile).await?;
        Ok(profile)
    }

    pub async fn analyze_files(&self, paths: &[PathBuf]) -> Result<StyleProfile> {
        let images = photos::select_files(paths, self.config.photos.max_files).await?;
        self.analyze(&images).await
    }

    pub async fn analyze_folder(&self, dir: &Path) -> Result<StyleProfile> {
        let images = photos::scan_folder(
            dir,
            self.config.photos.max_folder_images,
            &self.config.photos.allowed_types,
        )
        .await?;
        self.analyze(&images).await
    }

    pub async fn recommend(&self) -> Result<Recommendations> {
        let transcript = self.store.load_history().await?.unwrap_or_default();
        let profile = self.profile().await?;
        recommend::recommend(&self.advisor, &transcript, profile.as_ref()).await
    }

    /// Chat session resuming the stored transcript
    pub async fn open_session(&self) -> Result<ChatSession> {
        ChatSession::resume(self.advisor.clone(), self.store.clone()).await
    }

    pub async fn complete_onboarding(&self, record: OnboardingRecord) -> Result<JoinHandle<bool>> {
        onboarding::complete_onboarding(self.store.as_ref(), &self.tracker, record).await
    }

    pub async fn is_onboarded(&self) -> Result<bool> {
        onboarding::is_onboarded(self.store.as_ref()).await
    }
}

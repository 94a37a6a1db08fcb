//! Structured logging built on `tracing`.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    reload::{self, Handle},
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::config::LoggingConfig;
use crate::error::{ObservabilityError, Result};

type ReloadHandle = Handle<EnvFilter, Registry>;

/// Owns the global subscriber's reload handle and the file writer guard
#[derive(Debug)]
pub struct LogManager {
    config: LoggingConfig,
    reload_handle: Option<Arc<RwLock<ReloadHandle>>>,
    // Dropping this flushes and stops the background file writer
    file_guard: Option<WorkerGuard>,
    initialized: bool,
}

impl LogManager {
    /// Install the global subscriber described by `config`
    pub async fn new(config: &LoggingConfig) -> Result<Self> {
        let mut manager = Self {
            config: config.clone(),
            reload_handle: None,
            file_guard: None,
            initialized: false,
        };

        manager.init().await?;

        Ok(manager)
    }

    async fn init(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        let filter = self.build_filter()?;
        let (filter, reload_handle) = reload::Layer::new(filter);
        self.reload_handle = Some(Arc::new(RwLock::new(reload_handle)));

        let (json_layer, text_layer) = if self.config.json_format {
            let layer = fmt::layer()
                .json()
                .with_target(self.config.include_target)
                .with_writer(std::io::stderr);
            (Some(layer), None)
        } else {
            let layer = fmt::layer()
                .with_target(self.config.include_target)
                .with_ansi(self.config.ansi_colors)
                .with_writer(std::io::stderr);
            (None, Some(layer))
        };

        let file_layer = match &self.config.file_path {
            Some(path) => {
                let dir = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| ".".into());
                let file_name = path.file_name().ok_or_else(|| {
                    ObservabilityError::config(format!("Log file path has no file name: {:?}", path))
                })?;
                tokio::fs::create_dir_all(&dir).await?;

                let appender = tracing_appender::rolling::never(&dir, file_name);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                self.file_guard = Some(guard);
                Some(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(writer),
                )
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .with(text_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| ObservabilityError::logging(format!("Failed to install subscriber: {}", e)))?;

        self.initialized = true;

        tracing::debug!(
            target: "vic_observability",
            "Log manager initialized with level: {}",
            self.config.level
        );

        Ok(())
    }

    fn build_filter(&self) -> Result<EnvFilter> {
        let mut filter = EnvFilter::try_new(&self.config.level)
            .map_err(|e| ObservabilityError::logging(format!("Invalid log level: {}", e)))?;

        for (module, level) in &self.config.module_levels {
            filter = filter.add_directive(
                format!("{}={}", module, level)
                    .parse()
                    .map_err(|e| ObservabilityError::logging(format!("Invalid directive: {}", e)))?,
            );
        }

        Ok(filter)
    }

    /// Swap the active filter
    pub async fn update_level(&mut self, level: &str) -> Result<()> {
        let new_filter = EnvFilter::try_new(level)
            .map_err(|e| ObservabilityError::logging(format!("Invalid log level: {}", e)))?;

        let Some(ref handle) = self.reload_handle else {
            return Err(ObservabilityError::logging("Log manager not initialized"));
        };

        handle
            .write()
            .modify(|filter| {
                *filter = new_filter;
            })
            .map_err(|e| ObservabilityError::logging(format!("Failed to update log level: {}", e)))?;

        self.config.level = level.to_string();

        tracing::info!(target: "vic_observability", "Log level updated to: {}", level);

        Ok(())
    }

    /// Active configuration
    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Flush the file writer, if any
    pub async fn shutdown(mut self) -> Result<()> {
        tracing::debug!(target: "vic_observability", "Log manager shutting down");
        self.file_guard.take();
        Ok(())
    }
}

/// Span around one advice dispatch
pub fn create_chat_span(history_len: usize, has_image: bool, online: bool) -> tracing::Span {
    tracing::info_span!(
        "chat",
        history_len = history_len,
        has_image = has_image,
        online = online,
    )
}

/// Span around one style analysis run
pub fn create_analysis_span(image_count: usize, online: bool) -> tracing::Span {
    tracing::info_span!("analysis", image_count = image_count, online = online)
}

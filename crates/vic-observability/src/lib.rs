//! Vic observability
//!
//! Installs the `tracing` subscriber used by the CLI and provides the spans
//! that wrap advice dispatch and style analysis.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::LoggingConfig;
pub use error::{ObservabilityError, Result};
pub use logging::{create_analysis_span, create_chat_span, LogManager};

/// Common imports
pub mod prelude {
    //! Re-exports for call sites that log

    pub use crate::{LogManager, LoggingConfig, Result};

    pub use tracing::{debug, error, info, instrument, trace, warn, Instrument, Span};
}

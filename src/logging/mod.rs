//! Logging and observability
//!
//! Structured logging with:
//! - human-readable console output
//! - optional JSON file logging with rotation
//! - a debug switch carried in [`crate::config::ApplicationConfig`]
//!
//! # Example
//!
//! ```no_run
//! use pricesync::logging::init_logging;
//! use pricesync::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(records = 1200, "Catalog export complete");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use pricesync::log_error_with_context;
/// use pricesync::domain::SyncError;
///
/// let error = SyncError::Configuration("SITE_ID is not set".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log progress through the upload batches
///
/// # Example
///
/// ```no_run
/// use pricesync::log_batch_progress;
///
/// log_batch_progress!(2, 3, 500);
/// ```
#[macro_export]
macro_rules! log_batch_progress {
    ($current:expr, $total:expr, $size:expr) => {
        tracing::info!(
            batch = $current,
            total_batches = $total,
            items = $size,
            progress_pct = ($current as f64 / $total as f64 * 100.0),
            "Uploading batch"
        );
    };
}

//! Integration tests for logging initialization
//!
//! The global subscriber can only be installed once per process, so the
//! whole lifecycle is exercised in a single test.

use pricesync::config::LoggingConfig;
use pricesync::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_lifecycle() {
    let config = LoggingConfig::default();
    assert!(config.local_enabled);
    assert_eq!(config.local_rotation, "daily");

    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");
    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    assert!(init_logging("loud", &config).is_err());
    assert!(!log_path.exists());

    let guard = init_logging("info", &config).expect("Failed to initialize logging");
    tracing::info!(records = 3, "Catalog export complete");
    drop(guard);

    assert!(log_path.join("pricesync.log").exists());

    // A second subscriber cannot be installed
    let second = LoggingConfig {
        local_enabled: false,
        ..config
    };
    assert!(init_logging("info", &second).is_err());
}

//! Integration tests for configuration loading and validation
//!
//! Every test that calls `load_config` reads the process environment, so
//! they all hold `ENV_MUTEX`.

use pricesync::config::load_config;
use pricesync::domain::SyncError;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use tempfile::{NamedTempFile, TempDir};

static ENV_MUTEX: Mutex<()> = Mutex::new(());

const MANAGED_VARS: &[&str] = &[
    "CATSY_BEARER_TOKEN",
    "CATSY_BASE_URL",
    "SPARKLAYER_URL",
    "SITE_ID",
    "CLIENT_ID",
    "CLIENT_SECRET",
    "PRICESYNC_LOG_LEVEL",
    "PRICESYNC_DEBUG",
    "PRICESYNC_DRY_RUN",
    "PRICESYNC_PAGE_SIZE",
    "PRICESYNC_BATCH_SIZE",
    "PRICESYNC_SNAPSHOT_DIR",
    "TEST_PRICESYNC_SECRET",
];

/// Locks the environment and clears every variable the loader looks at
fn clean_env() -> MutexGuard<'static, ()> {
    let guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    for var in MANAGED_VARS {
        std::env::remove_var(var);
    }
    guard
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const COMPLETE_CONFIG: &str = r#"
[application]
log_level = "warn"
dry_run = true

[catsy]
base_url = "https://catsy.example/api/v3/queries/abc/items"
bearer_token = "file-token"
page_size = 250
page_delay_ms = 100

[sparklayer]
base_url = "https://spark.example"
site_id = "site-file"
client_id = "client-file"
client_secret = "secret-file"
batch_size = 100

[snapshot]
enabled = false

[logging]
local_enabled = false
local_rotation = "hourly"
"#;

#[test]
fn test_load_complete_config() {
    let _env = clean_env();
    let file = config_file(COMPLETE_CONFIG);

    let config = load_config(file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "warn");
    assert!(config.application.dry_run);
    assert_eq!(config.catsy.page_size, 250);
    assert_eq!(config.catsy.page_delay_ms, 100);
    assert!(config.catsy.bearer_token.as_ref().unwrap().expose_secret() == "file-token");
    assert_eq!(config.sparklayer.site_id.as_deref(), Some("site-file"));
    assert_eq!(config.sparklayer.batch_size, 100);
    assert_eq!(config.sparklayer.timeout_seconds, 180);
    assert!(!config.snapshot.enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_environment_overrides_file_values() {
    let _env = clean_env();
    let file = config_file(COMPLETE_CONFIG);
    std::env::set_var("CLIENT_SECRET", "secret-env");
    std::env::set_var("SITE_ID", "site-env");
    std::env::set_var("PRICESYNC_BATCH_SIZE", "50");
    std::env::set_var("PRICESYNC_DRY_RUN", "false");

    let config = load_config(file.path()).unwrap();

    assert!(config.sparklayer.client_secret.as_ref().unwrap().expose_secret() == "secret-env");
    assert_eq!(config.sparklayer.site_id.as_deref(), Some("site-env"));
    assert_eq!(config.sparklayer.batch_size, 50);
    assert!(!config.application.dry_run);
    clean_env_vars_only();
}

#[test]
fn test_missing_file_uses_environment_only() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    std::env::set_var("CATSY_BEARER_TOKEN", "env-token");
    std::env::set_var("SPARKLAYER_URL", "https://spark.example");
    std::env::set_var("SITE_ID", "site-env");
    std::env::set_var("CLIENT_ID", "client-env");
    std::env::set_var("CLIENT_SECRET", "secret-env");

    let config = load_config(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.catsy.page_size, 500);
    assert_eq!(config.sparklayer.batch_size, 500);
    assert_eq!(
        config.sparklayer.price_list_resource,
        "price-lists/wholesale/pricing"
    );
    assert!(config.snapshot.enabled);
    clean_env_vars_only();
}

#[test]
fn test_missing_credentials_reported_together() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();

    let err = load_config(dir.path().join("absent.toml")).unwrap_err();

    let SyncError::Configuration(message) = err else {
        panic!("Expected configuration error");
    };
    for name in [
        "CATSY_BEARER_TOKEN",
        "SPARKLAYER_URL",
        "SITE_ID",
        "CLIENT_ID",
        "CLIENT_SECRET",
    ] {
        assert!(message.contains(name), "{name} missing from: {message}");
    }
}

#[test]
fn test_placeholder_substitution() {
    let _env = clean_env();
    std::env::set_var("TEST_PRICESYNC_SECRET", "substituted-secret");
    let file = config_file(&COMPLETE_CONFIG.replace(
        "client_secret = \"secret-file\"",
        "client_secret = \"${TEST_PRICESYNC_SECRET}\"",
    ));

    let config = load_config(file.path()).unwrap();

    assert!(
        config.sparklayer.client_secret.as_ref().unwrap().expose_secret() == "substituted-secret"
    );
    clean_env_vars_only();
}

#[test]
fn test_placeholder_for_unset_variable_fails() {
    let _env = clean_env();
    let file = config_file(&COMPLETE_CONFIG.replace(
        "client_secret = \"secret-file\"",
        "client_secret = \"${TEST_PRICESYNC_SECRET}\"",
    ));

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_PRICESYNC_SECRET"));
}

#[test]
fn test_out_of_range_batch_size_rejected() {
    let _env = clean_env();
    let file = config_file(&COMPLETE_CONFIG.replace("batch_size = 100", "batch_size = 501"));

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("batch_size"));
}

#[test]
fn test_malformed_toml_rejected() {
    let _env = clean_env();
    let file = config_file("[catsy\npage_size = ");

    assert!(matches!(
        load_config(file.path()),
        Err(SyncError::Configuration(_))
    ));
}

/// Clears managed variables while the caller still holds the lock
fn clean_env_vars_only() {
    for var in MANAGED_VARS {
        std::env::remove_var(var);
    }
}

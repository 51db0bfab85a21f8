//! Configuration schema types
//!
//! Every section has defaults, so an empty TOML file (or no file at all)
//! deserializes; required credentials are checked by [`SyncConfig::validate`].

use crate::config::SecretString;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use url::Url;

/// Largest batch the storefront bulk endpoint accepts
pub const MAX_BATCH_SIZE: usize = 500;

/// Largest page the catalog export endpoint serves
pub const MAX_PAGE_SIZE: usize = 1000;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Catalog export endpoint
    #[serde(default)]
    pub catsy: CatsyConfig,

    /// Storefront pricing API
    #[serde(default)]
    pub sparklayer: SparkLayerConfig,

    /// CSV snapshot of each full export
    #[serde(default)]
    pub snapshot: SnapshotConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SyncConfig {
    /// Validates the configuration
    ///
    /// All missing credentials are reported in one message so a fresh setup
    /// can be fixed in a single pass.
    ///
    /// # Errors
    ///
    /// Returns an error describing every missing or invalid value
    pub fn validate(&self) -> Result<(), String> {
        let missing: Vec<&str> = self
            .catsy
            .missing_fields()
            .into_iter()
            .chain(self.sparklayer.missing_fields())
            .collect();

        if !missing.is_empty() {
            return Err(format!(
                "Missing required settings: {}",
                missing.join(", ")
            ));
        }

        self.application.validate()?;
        self.catsy.validate()?;
        self.sparklayer.validate()?;
        self.snapshot.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Log level after applying the debug switch
    pub fn effective_log_level(&self) -> &str {
        if self.application.debug {
            "debug"
        } else {
            &self.application.log_level
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Verbose diagnostics (request URLs, status codes, first SKU per batch)
    #[serde(default)]
    pub debug: bool,

    /// Fetch and transform, but never request a token or push prices
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            debug: false,
            dry_run: false,
        }
    }
}

/// Catsy export endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatsyConfig {
    /// Full URL of the saved-query items endpoint
    #[serde(default = "default_catsy_base_url")]
    pub base_url: String,

    /// API bearer token
    #[serde(default)]
    pub bearer_token: Option<SecretString>,

    /// Items requested per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Pause between pages in milliseconds
    #[serde(default = "default_delay_ms")]
    pub page_delay_ms: u64,

    /// Per-page request timeout in seconds
    #[serde(default = "default_page_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl CatsyConfig {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank_secret(&self.bearer_token) {
            missing.push("catsy.bearer_token (CATSY_BEARER_TOKEN)");
        }
        missing
    }

    fn validate(&self) -> Result<(), String> {
        validate_http_url("catsy.base_url", &self.base_url)?;

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(format!(
                "catsy.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("catsy.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for CatsyConfig {
    fn default() -> Self {
        Self {
            base_url: default_catsy_base_url(),
            bearer_token: None,
            page_size: default_page_size(),
            page_delay_ms: default_delay_ms(),
            timeout_seconds: default_page_timeout_seconds(),
        }
    }
}

/// SparkLayer pricing API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparkLayerConfig {
    /// Site base URL, e.g. `https://app.sparklayer.io`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Value sent in the `Site-Id` header
    #[serde(default)]
    pub site_id: Option<String>,

    /// OAuth client id
    #[serde(default)]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[serde(default)]
    pub client_secret: Option<SecretString>,

    /// Resource path below `/api/v1/` receiving the pricing PATCH
    #[serde(default = "default_price_list_resource")]
    pub price_list_resource: String,

    /// Items per bulk update call
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Pause after each batch in milliseconds
    #[serde(default = "default_delay_ms")]
    pub batch_delay_ms: u64,

    /// Bulk update timeout in seconds
    #[serde(default = "default_push_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Token request timeout in seconds
    #[serde(default = "default_auth_timeout_seconds")]
    pub auth_timeout_seconds: u64,
}

impl SparkLayerConfig {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.base_url) {
            missing.push("sparklayer.base_url (SPARKLAYER_URL)");
        }
        if is_blank(&self.site_id) {
            missing.push("sparklayer.site_id (SITE_ID)");
        }
        if is_blank(&self.client_id) {
            missing.push("sparklayer.client_id (CLIENT_ID)");
        }
        if is_blank_secret(&self.client_secret) {
            missing.push("sparklayer.client_secret (CLIENT_SECRET)");
        }
        missing
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(base_url) = &self.base_url {
            validate_http_url("sparklayer.base_url", base_url)?;
        }

        if self.price_list_resource.trim_matches('/').is_empty() {
            return Err("sparklayer.price_list_resource cannot be empty".to_string());
        }

        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(format!(
                "sparklayer.batch_size must be between 1 and {MAX_BATCH_SIZE}, got {}",
                self.batch_size
            ));
        }

        if self.timeout_seconds == 0 || self.auth_timeout_seconds == 0 {
            return Err("sparklayer timeouts must be > 0".to_string());
        }

        Ok(())
    }

    /// Base URL without trailing slashes, empty when unset
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/')
    }
}

impl Default for SparkLayerConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            site_id: None,
            client_id: None,
            client_secret: None,
            price_list_resource: default_price_list_resource(),
            batch_size: default_batch_size(),
            batch_delay_ms: default_delay_ms(),
            timeout_seconds: default_push_timeout_seconds(),
            auth_timeout_seconds: default_auth_timeout_seconds(),
        }
    }
}

/// Snapshot export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Write a CSV of every fetched record
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory receiving `catsy_export_<timestamp>.csv`
    #[serde(default = "default_snapshot_directory")]
    pub directory: String,
}

impl SnapshotConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.directory.trim().is_empty() {
            return Err("snapshot.directory cannot be empty when snapshots are enabled".to_string());
        }
        Ok(())
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: default_snapshot_directory(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or_default().is_empty()
}

fn is_blank_secret(value: &Option<SecretString>) -> bool {
    value
        .as_ref()
        .map(|s| s.expose_secret().is_empty())
        .unwrap_or(true)
}

fn validate_http_url(field: &str, value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("{field} must start with http:// or https://"));
    }
    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_catsy_base_url() -> String {
    "https://api.catsy.com/api/v3/queries/4919552a-c2c9-48af-ae88-a5159c8af053/items".to_string()
}

fn default_page_size() -> usize {
    500
}

fn default_batch_size() -> usize {
    MAX_BATCH_SIZE
}

fn default_delay_ms() -> u64 {
    500
}

fn default_page_timeout_seconds() -> u64 {
    90
}

fn default_push_timeout_seconds() -> u64 {
    180
}

fn default_auth_timeout_seconds() -> u64 {
    30
}

fn default_price_list_resource() -> String {
    "price-lists/wholesale/pricing".to_string()
}

fn default_snapshot_directory() -> String {
    "exports".to_string()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

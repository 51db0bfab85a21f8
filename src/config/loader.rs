//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SyncConfig;
use super::secret::secret_string;
use crate::domain::errors::SyncError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file and the environment
///
/// This function:
/// 1. Reads the TOML file if it exists (defaults otherwise)
/// 2. Substitutes `${VAR}` placeholders from the environment
/// 3. Applies environment overrides (`CATSY_*`, `SPARKLAYER_URL`, `SITE_ID`,
///    `CLIENT_ID`, `CLIENT_SECRET`, `PRICESYNC_*`)
/// 4. Validates the result
///
/// A missing file is not an error: a deployment driven purely by
/// environment variables needs no config file at all.
///
/// # Errors
///
/// Returns [`SyncError::Configuration`] if the file cannot be read or
/// parsed, a placeholder references an unset variable, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use pricesync::config::loader::load_config;
///
/// let config = load_config("pricesync.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SyncConfig> {
    let mut config = read_config_file(path)?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    config.validate().map_err(|e| {
        SyncError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Reads and parses the TOML file without touching overrides or validation
pub fn read_config_file(path: impl AsRef<Path>) -> Result<SyncConfig> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(
            path = %path.display(),
            "Configuration file not found, using defaults and environment"
        );
        return Ok(SyncConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SyncError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    toml::from_str(&contents)
        .map_err(|e| SyncError::Configuration(format!("Failed to parse TOML: {e}")))
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SyncError::Other(format!("Invalid placeholder pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    String::new()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SyncError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment overrides on top of the file configuration
///
/// Credential variables keep the names the sync has always used so
/// existing `.env` files keep working. Tuning knobs use the `PRICESYNC_`
/// prefix. Empty values are ignored. `lookup` abstracts the environment.
pub fn apply_env_overrides<F>(config: &mut SyncConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let get_bool = |key: &str| get(key).map(|v| parse_bool(&v));

    // Credentials and endpoints
    if let Some(val) = get("CATSY_BEARER_TOKEN") {
        config.catsy.bearer_token = Some(secret_string(val));
    }
    if let Some(val) = get("CATSY_BASE_URL") {
        config.catsy.base_url = val;
    }
    if let Some(val) = get("SPARKLAYER_URL") {
        config.sparklayer.base_url = Some(val);
    }
    if let Some(val) = get("SITE_ID") {
        config.sparklayer.site_id = Some(val);
    }
    if let Some(val) = get("CLIENT_ID") {
        config.sparklayer.client_id = Some(val);
    }
    if let Some(val) = get("CLIENT_SECRET") {
        config.sparklayer.client_secret = Some(secret_string(val));
    }

    // Application
    if let Some(val) = get("PRICESYNC_LOG_LEVEL") {
        config.application.log_level = val.to_lowercase();
    }
    if let Some(val) = get_bool("PRICESYNC_DEBUG") {
        config.application.debug = val;
    }
    if let Some(val) = get_bool("PRICESYNC_DRY_RUN") {
        config.application.dry_run = val;
    }

    // Pagination and batching
    if let Some(val) = parse_opt(get("PRICESYNC_PAGE_SIZE")) {
        config.catsy.page_size = val;
    }
    if let Some(val) = parse_opt(get("PRICESYNC_PAGE_DELAY_MS")) {
        config.catsy.page_delay_ms = val;
    }
    if let Some(val) = parse_opt(get("PRICESYNC_BATCH_SIZE")) {
        config.sparklayer.batch_size = val;
    }
    if let Some(val) = parse_opt(get("PRICESYNC_BATCH_DELAY_MS")) {
        config.sparklayer.batch_delay_ms = val;
    }
    if let Some(val) = get("PRICESYNC_PRICE_LIST_RESOURCE") {
        config.sparklayer.price_list_resource = val;
    }

    // Snapshot
    if let Some(val) = get_bool("PRICESYNC_SNAPSHOT_ENABLED") {
        config.snapshot.enabled = val;
    }
    if let Some(val) = get("PRICESYNC_SNAPSHOT_DIR") {
        config.snapshot.directory = val;
    }

    // Logging
    if let Some(val) = get_bool("PRICESYNC_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val;
    }
    if let Some(val) = get("PRICESYNC_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

fn parse_opt<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

//! Validate config command implementation
//!
//! Loads the configuration the same way `sync` does and prints what a run
//! would use, with credentials redacted.

use super::{EXIT_FAILURE, EXIT_OK};
use crate::config::{load_config, redacted, SecretString, SyncConfig};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration: {config_path}");
        println!();

        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                for line in summary_lines(&config) {
                    println!("{line}");
                }
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(EXIT_FAILURE)
            }
        }
    }
}

/// Human-readable configuration summary, secrets redacted
pub fn summary_lines(config: &SyncConfig) -> Vec<String> {
    let secret = |value: &Option<SecretString>| {
        value
            .as_ref()
            .map(redacted)
            .unwrap_or_else(|| "<not set>".to_string())
    };
    let plain = |value: &Option<String>| value.clone().unwrap_or_else(|| "<not set>".to_string());

    vec![
        "Configuration Summary:".to_string(),
        format!("  Log Level: {}", config.effective_log_level()),
        format!("  Dry Run: {}", config.application.dry_run),
        format!("  Catsy Endpoint: {}", config.catsy.base_url),
        format!("  Catsy Token: {}", secret(&config.catsy.bearer_token)),
        format!("  Page Size: {}", config.catsy.page_size),
        format!("  SparkLayer URL: {}", plain(&config.sparklayer.base_url)),
        format!("  Site ID: {}", plain(&config.sparklayer.site_id)),
        format!("  Client ID: {}", plain(&config.sparklayer.client_id)),
        format!("  Client Secret: {}", secret(&config.sparklayer.client_secret)),
        format!("  Price List: {}", config.sparklayer.price_list_resource),
        format!("  Batch Size: {}", config.sparklayer.batch_size),
        format!(
            "  Snapshot: {}",
            if config.snapshot.enabled {
                config.snapshot.directory.as_str()
            } else {
                "disabled"
            }
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_summary_redacts_secrets() {
        let mut config = SyncConfig::default();
        config.catsy.bearer_token = Some(secret_string("catsy-very-secret".to_string()));
        config.sparklayer.client_secret = Some(secret_string("spark-very-secret".to_string()));
        config.sparklayer.site_id = Some("site-1".to_string());

        let text = summary_lines(&config).join("\n");

        assert!(!text.contains("very-secret"));
        assert!(text.contains("Catsy Token: cats****"));
        assert!(text.contains("Client Secret: spar****"));
        assert!(text.contains("Site ID: site-1"));
        assert!(text.contains("Client ID: <not set>"));
    }

    #[test]
    fn test_summary_snapshot_disabled() {
        let mut config = SyncConfig::default();
        config.snapshot.enabled = false;
        assert!(summary_lines(&config).iter().any(|l| l == "  Snapshot: disabled"));
    }
}

//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_FAILURE, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "pricesync.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_FAILURE);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - CATSY_BEARER_TOKEN");
                println!("     - SPARKLAYER_URL, SITE_ID, CLIENT_ID, CLIENT_SECRET");
                println!("  3. Validate configuration: pricesync validate-config");
                println!("  4. Try a dry run: pricesync sync --dry-run");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FAILURE)
            }
        }
    }
}

/// Sample configuration written by `init`
///
/// Credentials are left to the environment so the file can be committed.
pub fn sample_config() -> &'static str {
    r#"# pricesync configuration
# Catsy catalog export -> SparkLayer wholesale price list
#
# Credentials are read from the environment (or a .env file):
#   CATSY_BEARER_TOKEN, SPARKLAYER_URL, SITE_ID, CLIENT_ID, CLIENT_SECRET
# They can also be set here, e.g. client_secret = "${MY_SECRET_VAR}".

[application]
log_level = "info"
debug = false
dry_run = false

[catsy]
base_url = "https://api.catsy.com/api/v3/queries/4919552a-c2c9-48af-ae88-a5159c8af053/items"
# bearer_token = "${CATSY_BEARER_TOKEN}"
page_size = 500
page_delay_ms = 500
timeout_seconds = 90

[sparklayer]
# base_url = "https://app.sparklayer.io"
# site_id = "your-site-id"
# client_id = "your-client-id"
# client_secret = "${CLIENT_SECRET}"
price_list_resource = "price-lists/wholesale/pricing"
batch_size = 500
batch_delay_ms = 500
timeout_seconds = 180
auth_timeout_seconds = 30

[snapshot]
enabled = true
directory = "exports"

[logging]
local_enabled = true
local_path = "logs"
local_rotation = "daily"
"#
}

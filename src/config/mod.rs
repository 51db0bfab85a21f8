//! Configuration management for pricesync.
//!
//! Configuration comes from an optional TOML file, `${VAR}` substitution
//! inside that file, and environment variables (including a `.env` file
//! loaded at startup). The resulting [`SyncConfig`] is built once at process
//! entry and passed by reference into every component.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pricesync::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("pricesync.toml")?;
//! println!("Catalog: {}", config.catsy.base_url);
//! println!("Batch size: {}", config.sparklayer.batch_size);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [catsy]
//! bearer_token = "${CATSY_BEARER_TOKEN}"
//! page_size = 500
//!
//! [sparklayer]
//! base_url = "https://app.sparklayer.io"
//! site_id = "${SITE_ID}"
//! client_id = "${CLIENT_ID}"
//! client_secret = "${CLIENT_SECRET}"
//! batch_size = 500
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Setting |
//! |---|---|
//! | `CATSY_BEARER_TOKEN` | `catsy.bearer_token` |
//! | `CATSY_BASE_URL` | `catsy.base_url` |
//! | `SPARKLAYER_URL` | `sparklayer.base_url` |
//! | `SITE_ID` | `sparklayer.site_id` |
//! | `CLIENT_ID` | `sparklayer.client_id` |
//! | `CLIENT_SECRET` | `sparklayer.client_secret` |
//! | `PRICESYNC_DEBUG` | `application.debug` |
//! | `PRICESYNC_DRY_RUN` | `application.dry_run` |
//! | `PRICESYNC_BATCH_SIZE` | `sparklayer.batch_size` |
//! | `PRICESYNC_SNAPSHOT_DIR` | `snapshot.directory` |

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CatsyConfig, LoggingConfig, SnapshotConfig, SparkLayerConfig, SyncConfig,
};
pub use secret::{redacted, secret_string, secret_string_opt, SecretString, SecretValue};

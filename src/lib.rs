// pricesync - Catsy to SparkLayer price synchronization
// Copyright (c) 2025 pricesync Contributors
// Licensed under the MIT License

//! # pricesync - Catsy to SparkLayer price sync
//!
//! pricesync reads the product catalog from a Catsy saved-query export and
//! pushes trade prices into a SparkLayer wholesale price list.
//!
//! ## Overview
//!
//! One run is a straight pipeline:
//! - **Fetching** every catalog record through offset/limit pagination
//! - **Snapshotting** the raw records to a timestamped CSV file
//! - **Transforming** records into single-tier pricing updates
//! - **Uploading** the updates in batches, one access token per batch
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (fetch, snapshot, transform, upload, sync)
//! - [`adapters`] - External integrations (Catsy, SparkLayer)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pricesync::config::load_config;
//! use pricesync::core::sync::SyncCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("pricesync.toml")?;
//!
//!     let summary = SyncCoordinator::new(&config)?.run().await?;
//!
//!     println!("Uploaded {} items", summary.upload.items_uploaded);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Handling
//!
//! The sync keeps going through most failures. A catalog page that fails
//! ends pagination with the records collected so far. Records without a
//! usable SKU or price are dropped, and a rejected batch is logged before
//! the next one is sent. The one fatal case is the storefront refusing to
//! issue an access token:
//!
//! ```rust,no_run
//! use pricesync::domain::{StorefrontError, SyncError};
//!
//! # async fn example(coordinator: pricesync::core::sync::SyncCoordinator<'_>) {
//! match coordinator.run().await {
//!     Ok(summary) => summary.log(),
//!     Err(SyncError::Storefront(StorefrontError::AuthenticationFailed(msg))) => {
//!         tracing::error!(error = %msg, fatal = true, "Token request refused");
//!     }
//!     Err(e) => tracing::error!(error = %e, fatal = true, "Sync aborted"),
//! }
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

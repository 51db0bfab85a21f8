//! Core business logic for pricesync.
//!
//! # Modules
//!
//! - [`fetch`] - Offset/limit pagination over the catalog export
//! - [`snapshot`] - CSV snapshot of the fetched records
//! - [`transform`] - Catalog record to pricing item mapping
//! - [`upload`] - Batching and upload to the storefront
//! - [`sync`] - Orchestration of a full run
//!
//! # Sync Workflow
//!
//! 1. **Fetch**: Page through the Catsy export until it is exhausted
//! 2. **Snapshot**: Write the raw records to a timestamped CSV
//! 3. **Transform**: Build one pricing item per usable record
//! 4. **Upload**: Send items in batches, with a fresh token per batch
//! 5. **Report**: Log the run summary
//!
//! # Example
//!
//! ```rust,no_run
//! use pricesync::config::load_config;
//! use pricesync::core::sync::SyncCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("pricesync.toml")?;
//!
//! let coordinator = SyncCoordinator::new(&config)?;
//! let summary = coordinator.run().await?;
//!
//! println!("Uploaded: {}", summary.upload.items_uploaded);
//! println!("Failed batches: {}", summary.upload.batches_failed);
//! # Ok(())
//! # }
//! ```

pub mod fetch;
pub mod snapshot;
pub mod sync;
pub mod transform;
pub mod upload;

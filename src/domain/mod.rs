//! Domain models and types for pricesync.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Catalog records** ([`SourceRecord`]) as raw JSON objects
//! - **Strongly-typed identifiers** ([`Sku`])
//! - **Storefront payloads** ([`PricingUpdateItem`], [`PriceTier`])
//! - **Error types** ([`SyncError`], [`CatalogError`], [`StorefrontError`], [`TransformError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! ```rust
//! use pricesync::domain::{Result, SyncError};
//!
//! fn example() -> Result<()> {
//!     Err(SyncError::Configuration("CLIENT_ID is not set".to_string()))
//! }
//!
//! assert!(example().is_err());
//! ```

pub mod errors;
pub mod ids;
pub mod pricing;
pub mod record;
pub mod result;

pub use errors::{CatalogError, StorefrontError, SyncError, TransformError};
pub use ids::Sku;
pub use pricing::{PriceTier, PricingUpdateItem};
pub use record::SourceRecord;
pub use result::Result;

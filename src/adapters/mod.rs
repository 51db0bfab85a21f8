//! External system adapters
//!
//! - [`catsy`] - catalog export (source)
//! - [`sparklayer`] - storefront pricing API (target)
//! - [`traits`] - the seams the sync pipeline is written against

pub mod catsy;
pub mod sparklayer;
pub mod traits;

pub use catsy::{CatalogPage, CatsyClient};
pub use sparklayer::{AccessToken, PushReceipt, SparkLayerClient};
pub use traits::{CatalogSource, PricingTarget};

/// Longest slice of a response body carried into errors and logs
const BODY_PREVIEW_CHARS: usize = 500;

/// First [`BODY_PREVIEW_CHARS`] characters of a response body
pub(crate) fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

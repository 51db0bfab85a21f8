//! SparkLayer storefront adapter
//!
//! Client-credentials authentication plus the bulk price list PATCH.

pub mod client;
pub mod models;

pub use client::SparkLayerClient;
pub use models::{AccessToken, PushReceipt};

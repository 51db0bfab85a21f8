//! Catsy catalog adapter
//!
//! Pages through a saved-query export with offset/limit parameters.

pub mod client;
pub mod models;

pub use client::CatsyClient;
pub use models::{total_hint, CatalogPage};

//! Batched upload to the storefront
//!
//! Items are split into contiguous batches of at most
//! [`crate::config::schema::MAX_BATCH_SIZE`]. Each batch is sent with its own
//! access token, and batches go out one after another with a fixed pause.

pub mod batch;
pub mod uploader;

pub use batch::{batch, batch_count};
pub use uploader::{UploadReport, Uploader};

//! End-to-end sync orchestration
//!
//! [`SyncCoordinator`] drives one run: fetch, snapshot, transform, upload.
//! [`SyncSummary`] carries the counters logged at the end of the run.

pub mod coordinator;
pub mod summary;

pub use coordinator::SyncCoordinator;
pub use summary::{SyncOutcome, SyncSummary};

//! Catalog fetching
//!
//! Pages through the export endpoint with a zero-based offset cursor and
//! collects every record in memory. There are no retries: the first failed
//! page ends pagination and the records gathered so far are kept.

pub mod paginator;

pub use paginator::{FetchReport, Paginator};

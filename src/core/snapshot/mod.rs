//! Audit snapshot of each run's catalog export
//!
//! Writes the raw records to `catsy_export_<timestamp>.csv` so a run can be
//! inspected after the fact. A snapshot failure never stops a sync.

pub mod csv_export;

pub use csv_export::{cell, snapshot_columns, snapshot_file_name, write_snapshot};

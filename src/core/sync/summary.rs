//! Sync run summary

use crate::core::upload::UploadReport;
use std::path::PathBuf;
use std::time::Duration;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The catalog returned no records
    NothingToSync,
    /// Records were fetched but none could be priced
    NoValidItems,
    /// Items were prepared but not sent
    DryRun,
    /// Batches were sent; some may have failed
    Uploaded,
}

/// Counters for one sync run
#[derive(Debug, Clone, PartialEq)]
pub struct SyncSummary {
    /// How the run ended
    pub outcome: SyncOutcome,

    /// Records fetched from the catalog
    pub records_fetched: usize,

    /// False when pagination stopped on an error
    pub fetch_complete: bool,

    /// Pricing items prepared
    pub items_prepared: usize,

    /// Records dropped during transformation
    pub records_skipped: usize,

    /// Upload counters (all zero unless items were sent)
    pub upload: UploadReport,

    /// CSV snapshot written for this run
    pub snapshot_path: Option<PathBuf>,

    /// Wall-clock time of the run
    pub duration: Duration,
}

impl SyncSummary {
    /// Empty summary with the given outcome
    pub fn new(outcome: SyncOutcome) -> Self {
        Self {
            outcome,
            records_fetched: 0,
            fetch_complete: true,
            items_prepared: 0,
            records_skipped: 0,
            upload: UploadReport::default(),
            snapshot_path: None,
            duration: Duration::ZERO,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// True when nothing went wrong along the way
    pub fn is_clean(&self) -> bool {
        self.fetch_complete && self.upload.is_successful()
    }

    /// Log the summary
    pub fn log(&self) {
        tracing::info!(
            outcome = ?self.outcome,
            records_fetched = self.records_fetched,
            items_prepared = self.items_prepared,
            records_skipped = self.records_skipped,
            batches_attempted = self.upload.batches_attempted,
            batches_succeeded = self.upload.batches_succeeded,
            batches_failed = self.upload.batches_failed,
            items_uploaded = self.upload.items_uploaded,
            duration_ms = self.duration.as_millis() as u64,
            "Sync finished"
        );

        if let Some(path) = &self.snapshot_path {
            tracing::info!(path = %path.display(), "Snapshot of this run");
        }
        if !self.fetch_complete {
            tracing::warn!("Catalog pagination stopped early; not every product was synced");
        }
        if self.upload.batches_failed > 0 {
            tracing::warn!(
                batches_failed = self.upload.batches_failed,
                items_failed = self.upload.items_failed,
                "Sync completed with failed batches"
            );
        }
    }
}

//! Batched pricing upload

use super::batch::{batch, batch_count};
use crate::adapters::PricingTarget;
use crate::config::SparkLayerConfig;
use crate::domain::{PricingUpdateItem, Result};
use crate::log_batch_progress;
use std::time::Duration;

/// Result of pushing every batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Batches sent to the storefront
    pub batches_attempted: usize,

    /// Batches answered with a success status
    pub batches_succeeded: usize,

    /// Batches rejected or lost in transit
    pub batches_failed: usize,

    /// Items in successful batches
    pub items_uploaded: usize,

    /// Items in failed batches
    pub items_failed: usize,
}

impl UploadReport {
    /// True when every batch succeeded
    pub fn is_successful(&self) -> bool {
        self.batches_failed == 0
    }
}

/// Pushes pricing items to a [`PricingTarget`] one batch at a time
#[derive(Debug, Clone)]
pub struct Uploader {
    batch_size: usize,
    batch_delay: Duration,
    debug: bool,
}

impl Uploader {
    /// Create an uploader
    pub fn new(batch_size: usize, batch_delay: Duration, debug: bool) -> Self {
        Self {
            batch_size: batch_size.max(1),
            batch_delay,
            debug,
        }
    }

    /// Uploader using the storefront section's batch settings
    pub fn from_config(config: &SparkLayerConfig, debug: bool) -> Self {
        Self::new(
            config.batch_size,
            Duration::from_millis(config.batch_delay_ms),
            debug,
        )
    }

    /// Upload `items`
    ///
    /// Each batch gets a freshly requested token. A rejected or failed push
    /// is logged and the next batch is tried; the delay is applied after
    /// every batch either way.
    ///
    /// # Errors
    ///
    /// Returns the token error when the storefront refuses to issue a token.
    /// Batches already sent stay sent.
    pub async fn upload(
        &self,
        target: &dyn PricingTarget,
        items: &[PricingUpdateItem],
    ) -> Result<UploadReport> {
        let mut report = UploadReport::default();
        let total_batches = batch_count(items.len(), self.batch_size);

        for (index, chunk) in batch(items, self.batch_size).into_iter().enumerate() {
            let number = index + 1;
            log_batch_progress!(number, total_batches, chunk.len());
            if self.debug {
                if let Some(first) = chunk.first() {
                    tracing::debug!(batch = number, first_sku = %first.sku, "Batch contents");
                }
            }

            let token = target.request_token().await?;
            report.batches_attempted += 1;

            match target.push_pricing(&token, chunk).await {
                Ok(receipt) => {
                    report.batches_succeeded += 1;
                    report.items_uploaded += chunk.len();
                    tracing::info!(
                        batch = number,
                        items = chunk.len(),
                        status = receipt.status,
                        "Batch uploaded"
                    );
                }
                Err(e) => {
                    report.batches_failed += 1;
                    report.items_failed += chunk.len();
                    tracing::error!(
                        batch = number,
                        items = chunk.len(),
                        error = %e,
                        "Batch upload failed"
                    );
                }
            }

            tokio::time::sleep(self.batch_delay).await;
        }

        Ok(report)
    }
}

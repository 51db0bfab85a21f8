//! Offset/limit pagination over a [`CatalogSource`]

use crate::adapters::CatalogSource;
use crate::config::CatsyConfig;
use crate::domain::SourceRecord;
use std::time::Duration;

/// Outcome of paging through the whole export
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// Object records in the order the export returned them
    pub records: Vec<SourceRecord>,

    /// Pages that returned a usable body
    pub pages: usize,

    /// False when a page failed and pagination stopped early
    pub complete: bool,

    /// Total-count hint from the first page
    pub total_hint: Option<u64>,

    /// List entries dropped because they were not JSON objects
    pub discarded: usize,
}

/// Walks the export endpoint until it is exhausted
///
/// Every failure is logged and ends pagination; whatever was collected
/// before it is returned.
#[derive(Debug, Clone)]
pub struct Paginator {
    page_size: usize,
    page_delay: Duration,
    debug: bool,
}

impl Paginator {
    /// Create a paginator
    pub fn new(page_size: usize, page_delay: Duration, debug: bool) -> Self {
        Self {
            page_size: page_size.max(1),
            page_delay,
            debug,
        }
    }

    /// Paginator using the catalog section's paging settings
    pub fn from_config(config: &CatsyConfig, debug: bool) -> Self {
        Self::new(
            config.page_size,
            Duration::from_millis(config.page_delay_ms),
            debug,
        )
    }

    /// Fetch every page from `source`
    pub async fn fetch_all(&self, source: &dyn CatalogSource) -> FetchReport {
        let mut report = FetchReport::default();
        let mut offset = 0usize;

        tracing::info!(
            endpoint = %source.endpoint(),
            page_size = self.page_size,
            "Fetching products from Catsy"
        );

        loop {
            let page = match source.fetch_page(offset, self.page_size).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::error!(offset, error = %e, "Failed to fetch catalog page");
                    return report;
                }
            };

            report.pages += 1;
            if offset == 0 {
                report.total_hint = page.total_hint;
                if let Some(total) = page.total_hint {
                    tracing::info!(total, "Catalog reports total item count");
                }
            }

            if page.is_empty() {
                tracing::info!(offset, "No more items returned");
                report.complete = true;
                return report;
            }

            let returned = page.len();
            let (records, discarded) = page.into_records();
            if discarded > 0 {
                tracing::warn!(offset, discarded, "Dropped catalog entries that are not objects");
            }
            report.discarded += discarded;
            report.records.extend(records);

            tracing::info!(
                offset,
                returned,
                fetched = report.records.len(),
                "Fetched catalog page"
            );
            if self.debug {
                tracing::debug!(page = report.pages, next_offset = offset + self.page_size, "Page cursor");
            }

            if self.is_last_page(offset, returned, report.total_hint) {
                report.complete = true;
                return report;
            }

            offset += self.page_size;
            tokio::time::sleep(self.page_delay).await;
        }
    }

    fn is_last_page(&self, offset: usize, returned: usize, total: Option<u64>) -> bool {
        if returned < self.page_size {
            return true;
        }
        total.is_some_and(|total| (offset + self.page_size) as u64 >= total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::CatalogPage;
    use crate::domain::CatalogError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use test_case::test_case;

    /// Serves `available` records, optionally failing at a given offset
    struct FakeSource {
        available: usize,
        total_hint: Option<u64>,
        fail_at: Option<usize>,
        offsets: Mutex<Vec<usize>>,
    }

    impl FakeSource {
        fn new(available: usize) -> Self {
            Self {
                available,
                total_hint: None,
                fail_at: None,
                offsets: Mutex::new(Vec::new()),
            }
        }

        fn offsets(&self) -> Vec<usize> {
            self.offsets.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogSource for FakeSource {
        async fn fetch_page(
            &self,
            offset: usize,
            limit: usize,
        ) -> std::result::Result<CatalogPage, CatalogError> {
            self.offsets.lock().unwrap().push(offset);
            if self.fail_at == Some(offset) {
                return Err(CatalogError::UnexpectedStatus {
                    status: 502,
                    body: "bad gateway".to_string(),
                });
            }
            let end = self.available.min(offset + limit);
            let items = (offset..end)
                .map(|i| json!({"sku": format!("SKU-{i}"), "price_trade": i}))
                .collect();
            Ok(CatalogPage {
                items,
                total_hint: if offset == 0 { self.total_hint } else { None },
            })
        }

        fn endpoint(&self) -> &str {
            "fake://catalog"
        }
    }

    fn paginator(page_size: usize) -> Paginator {
        Paginator::new(page_size, Duration::ZERO, false)
    }

    #[test_case(0, 500, &[0] ; "empty export")]
    #[test_case(499, 500, &[0] ; "single short page")]
    #[test_case(1200, 500, &[0, 500, 1000] ; "short last page")]
    #[test_case(1000, 500, &[0, 500, 1000] ; "exact multiple needs empty page")]
    #[test_case(7, 3, &[0, 3, 6] ; "small pages")]
    #[tokio::test]
    async fn test_offsets_advance_by_page_size(available: usize, page_size: usize, expected: &[usize]) {
        let source = FakeSource::new(available);
        let report = paginator(page_size).fetch_all(&source).await;

        assert_eq!(source.offsets(), expected);
        assert_eq!(report.records.len(), available);
        assert!(report.complete);
    }

    #[tokio::test]
    async fn test_offsets_strictly_increase_for_many_shapes() {
        for page_size in 1..=7 {
            for available in 0..=20 {
                let source = FakeSource::new(available);
                let report = paginator(page_size).fetch_all(&source).await;
                let offsets = source.offsets();

                assert!(offsets.windows(2).all(|w| w[1] == w[0] + page_size));
                assert_eq!(report.records.len(), available);
                // Stops after the first short page
                let last = *offsets.last().unwrap();
                assert!(available.saturating_sub(last) < page_size);
            }
        }
    }

    #[tokio::test]
    async fn test_total_hint_avoids_trailing_empty_page() {
        let mut source = FakeSource::new(1000);
        source.total_hint = Some(1000);
        let report = paginator(500).fetch_all(&source).await;

        assert_eq!(source.offsets(), vec![0, 500]);
        assert_eq!(report.total_hint, Some(1000));
        assert_eq!(report.pages, 2);
    }

    #[tokio::test]
    async fn test_failure_keeps_partial_results() {
        let mut source = FakeSource::new(1200);
        source.fail_at = Some(500);
        let report = paginator(500).fetch_all(&source).await;

        assert_eq!(source.offsets(), vec![0, 500]);
        assert_eq!(report.records.len(), 500);
        assert!(!report.complete);
    }

    #[tokio::test]
    async fn test_failure_on_first_page_returns_nothing() {
        let mut source = FakeSource::new(10);
        source.fail_at = Some(0);
        let report = paginator(500).fetch_all(&source).await;

        assert!(report.records.is_empty());
        assert_eq!(report.pages, 0);
        assert!(!report.complete);
    }

    struct MixedSource;

    #[async_trait]
    impl CatalogSource for MixedSource {
        async fn fetch_page(
            &self,
            offset: usize,
            _limit: usize,
        ) -> std::result::Result<CatalogPage, CatalogError> {
            let items: Vec<Value> = if offset == 0 {
                vec![json!({"sku": "A"}), json!("junk"), json!(null)]
            } else {
                Vec::new()
            };
            Ok(CatalogPage {
                items,
                total_hint: None,
            })
        }

        fn endpoint(&self) -> &str {
            "fake://mixed"
        }
    }

    #[tokio::test]
    async fn test_non_object_entries_count_toward_page_size() {
        let report = paginator(3).fetch_all(&MixedSource).await;

        // Full page of three entries, so a second request is made
        assert_eq!(report.pages, 2);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.discarded, 2);
    }
}

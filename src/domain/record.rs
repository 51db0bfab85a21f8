//! Catalog record representation

use serde_json::{Map, Value};

/// One catalog item as returned by the export endpoint
///
/// Records are kept as raw JSON objects. Only two fields matter to the
/// pricing pipeline; everything else is carried along for the snapshot.
pub type SourceRecord = Map<String, Value>;

/// Field holding the product identifier
pub const SKU_FIELD: &str = "sku";

/// Field holding the trade price
pub const PRICE_FIELD: &str = "price_trade";

/// Returns the value of `field`, treating JSON null the same as a missing key
pub fn present<'a>(record: &'a SourceRecord, field: &str) -> Option<&'a Value> {
    record.get(field).filter(|v| !v.is_null())
}

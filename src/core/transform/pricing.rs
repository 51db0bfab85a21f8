//! Catalog record to storefront pricing item mapping

use crate::domain::record::{present, PRICE_FIELD, SKU_FIELD};
use crate::domain::{PricingUpdateItem, Sku, SourceRecord, TransformError};
use serde_json::Value;

/// Items built from a set of records plus how many records were dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformReport {
    /// Pricing items, in record order
    pub items: Vec<PricingUpdateItem>,

    /// Records that produced no item, for any reason
    pub skipped: usize,
}

/// Map every record to a pricing item, dropping the ones that cannot be priced
///
/// Records without a SKU or price are skipped silently. Records with an
/// unusable SKU or price are skipped with a warning.
///
/// # Examples
///
/// ```
/// use pricesync::core::transform::transform;
/// use serde_json::json;
///
/// let records = vec![
///     json!({"sku": "A-1", "price_trade": 12.5}).as_object().cloned().unwrap(),
///     json!({"sku": "A-2"}).as_object().cloned().unwrap(),
/// ];
///
/// let report = transform(&records);
/// assert_eq!(report.items.len(), 1);
/// assert_eq!(report.skipped, 1);
/// ```
pub fn transform(records: &[SourceRecord]) -> TransformReport {
    let mut report = TransformReport::default();

    for record in records {
        match to_pricing_item(record) {
            Ok(Some(item)) => report.items.push(item),
            Ok(None) => report.skipped += 1,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping catalog record");
                report.skipped += 1;
            }
        }
    }

    report
}

/// Map a single record
///
/// `Ok(None)` means the record carries no SKU or no price and is not worth
/// reporting.
///
/// # Errors
///
/// [`TransformError::InvalidSku`] for SKUs that are neither strings nor
/// numbers, [`TransformError::InvalidPrice`] for prices that do not convert
/// to a finite number.
pub fn to_pricing_item(
    record: &SourceRecord,
) -> std::result::Result<Option<PricingUpdateItem>, TransformError> {
    let (Some(raw_sku), Some(raw_price)) = (present(record, SKU_FIELD), present(record, PRICE_FIELD))
    else {
        return Ok(None);
    };

    let sku = match Sku::from_value(raw_sku).map_err(TransformError::InvalidSku)? {
        Some(sku) => sku,
        None => return Ok(None),
    };

    let invalid_price = || TransformError::InvalidPrice {
        sku: sku.to_string(),
        value: raw_price.to_string(),
    };
    let price = parse_price(raw_price).ok_or_else(invalid_price)?;

    PricingUpdateItem::single_unit(sku.clone(), price)
        .map(Some)
        .ok_or_else(invalid_price)
}

/// Convert a raw price value to a finite float
///
/// Accepts JSON numbers and numeric strings (surrounding whitespace is
/// ignored). Booleans, containers, non-numeric strings and non-finite
/// values give `None`.
pub fn parse_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    price.is_finite().then_some(price)
}

//! Catsy export response models

use crate::domain::{CatalogError, SourceRecord};
use serde_json::Value;

/// Keys that may carry the total item count, in precedence order
///
/// The export API does not document which one it uses; different query
/// types have been seen to return each of them.
const TOTAL_HINT_PATHS: [&[&str]; 3] = [&["total"], &["totalCount"], &["pagination", "total_results"]];

/// One decoded page of the export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    /// Raw entries of the `items` list
    pub items: Vec<Value>,

    /// Total-count hint, only read on the first page
    pub total_hint: Option<u64>,
}

impl CatalogPage {
    /// Decode a response body
    ///
    /// A missing or null `items` key is an empty page; any other non-list
    /// value is an invalid response.
    pub fn from_body(body: Value, read_total: bool) -> Result<Self, CatalogError> {
        let Value::Object(mut map) = body else {
            return Err(CatalogError::InvalidResponse(
                "response body is not a JSON object".to_string(),
            ));
        };

        let total_hint = if read_total {
            total_hint(&map)
        } else {
            None
        };

        let items = match map.remove("items") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(CatalogError::InvalidResponse(format!(
                    "items is not a list: {}",
                    type_name(&other)
                )))
            }
        };

        Ok(Self { items, total_hint })
    }

    /// Number of entries returned, including ones that are not objects
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page carried no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Splits the page into object records and a count of discarded entries
    pub fn into_records(self) -> (Vec<SourceRecord>, usize) {
        let mut discarded = 0;
        let records = self
            .items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => {
                    discarded += 1;
                    None
                }
            })
            .collect();
        (records, discarded)
    }
}

/// First usable total-count among [`TOTAL_HINT_PATHS`]
///
/// Missing, null, zero and non-numeric values fall through to the next key.
pub fn total_hint(body: &serde_json::Map<String, Value>) -> Option<u64> {
    TOTAL_HINT_PATHS.iter().find_map(|path| {
        let (first, rest) = path.split_first()?;
        let value = rest
            .iter()
            .try_fold(body.get(*first)?, |value, key| value.get(*key))?;
        as_count(value)
    })
}

fn as_count(value: &Value) -> Option<u64> {
    let count = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f > 0.0)
                .map(|f| f.ceil() as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    (count > 0).then_some(count)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

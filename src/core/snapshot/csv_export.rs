//! CSV snapshot of the fetched catalog records

use crate::domain::record::{PRICE_FIELD, SKU_FIELD};
use crate::domain::{Result, SourceRecord, SyncError};
use chrono::NaiveDateTime;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot file name prefix
const FILE_PREFIX: &str = "catsy_export_";

/// Timestamp layout embedded in the file name
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// File name for a snapshot taken at `timestamp`
pub fn snapshot_file_name(timestamp: NaiveDateTime) -> String {
    format!("{FILE_PREFIX}{}.csv", timestamp.format(TIMESTAMP_FORMAT))
}

/// Header row for `records`
///
/// `sku` and `price_trade` lead when any record has them; every other key
/// follows in sorted order.
pub fn snapshot_columns(records: &[SourceRecord]) -> Vec<String> {
    let keys: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| record.keys().map(String::as_str))
        .collect();

    let leading = [SKU_FIELD, PRICE_FIELD]
        .into_iter()
        .filter(|key| keys.contains(key));
    let rest = keys
        .iter()
        .copied()
        .filter(|key| *key != SKU_FIELD && *key != PRICE_FIELD);

    leading.chain(rest).map(str::to_string).collect()
}

/// Text written for a single cell
///
/// Strings are written verbatim, null as an empty cell and anything else
/// as compact JSON.
pub fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Write `records` to a timestamped CSV file under `directory`
///
/// The directory is created when missing. Returns the path written.
///
/// # Errors
///
/// I/O or CSV errors from creating the directory or writing the file.
pub fn write_snapshot(
    records: &[SourceRecord],
    directory: &Path,
    timestamp: NaiveDateTime,
) -> Result<PathBuf> {
    fs::create_dir_all(directory).map_err(|e| {
        SyncError::Snapshot(format!(
            "Failed to create snapshot directory {}: {e}",
            directory.display()
        ))
    })?;

    let path = directory.join(snapshot_file_name(timestamp));
    let columns = snapshot_columns(records);

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(&columns)?;
    for record in records {
        writer.write_record(columns.iter().map(|column| cell(record.get(column))))?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), records = records.len(), "Snapshot written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use tempfile::TempDir;

    fn record(value: Value) -> SourceRecord {
        value.as_object().cloned().unwrap()
    }

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            snapshot_file_name(timestamp()),
            "catsy_export_2024-03-09_14-05-07.csv"
        );
    }

    #[test]
    fn test_columns_lead_with_sku_and_price() {
        let records = vec![
            record(json!({"zeta": 1, "price_trade": 2, "alpha": 3})),
            record(json!({"sku": "A", "beta": true})),
        ];
        assert_eq!(
            snapshot_columns(&records),
            vec!["sku", "price_trade", "alpha", "beta", "zeta"]
        );
    }

    #[test]
    fn test_columns_without_pricing_fields() {
        let records = vec![record(json!({"b": 1, "a": 2}))];
        assert_eq!(snapshot_columns(&records), vec!["a", "b"]);
    }

    #[test]
    fn test_cell_rendering() {
        assert_eq!(cell(None), "");
        assert_eq!(cell(Some(&json!(null))), "");
        assert_eq!(cell(Some(&json!("a,b"))), "a,b");
        assert_eq!(cell(Some(&json!(12.5))), "12.5");
        assert_eq!(cell(Some(&json!(false))), "false");
        assert_eq!(cell(Some(&json!({"k": [1, 2]}))), r#"{"k":[1,2]}"#);
    }

    #[test]
    fn test_write_snapshot_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let directory = temp_dir.path().join("exports");
        let records = vec![
            record(json!({"sku": "A-1", "price_trade": 9.5, "name": "Widget, large"})),
            record(json!({"sku": "A-2", "colour": "red"})),
        ];

        let path = write_snapshot(&records, &directory, timestamp()).unwrap();

        assert_eq!(path, directory.join("catsy_export_2024-03-09_14-05-07.csv"));
        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "sku,price_trade,colour,name");
        assert_eq!(lines[1], "A-1,9.5,,\"Widget, large\"");
        assert_eq!(lines[2], "A-2,,red,");
    }

    #[test]
    fn test_write_snapshot_reports_unwritable_directory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();

        let result = write_snapshot(&[], &blocker, timestamp());
        assert!(matches!(result, Err(SyncError::Snapshot(_))));
    }
}

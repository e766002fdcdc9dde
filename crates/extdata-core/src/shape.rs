//! Result shaping: projection, client-side filtering, tabular encoding, and
//! size aggregation. Every function here is pure over `serde_json::Value`
//! records so the gateway and the driver stay free of formatting concerns.

use chrono::{DateTime, SecondsFormat, Utc};
use extdata_types::{Error, Result};
use serde_json::{Map, Value, json};

/// Header row for the compute inventory report
pub const COMPUTE_CSV_HEADER: [&str; 4] = ["Name", "Location", "ResourceGroup", "VMId"];

/// Project a record down to exactly the requested properties, in the
/// requested order. A property the record lacks becomes `null`; the record
/// itself is never dropped. Values that parse as RFC 3339 timestamps are
/// re-emitted in the canonical `YYYY-MM-DDTHH:MM:SSZ` form.
pub fn project_properties(record: &Value, properties: &[String]) -> Value {
    let mut projected = Map::new();
    for property in properties {
        let value = record.get(property).cloned().unwrap_or(Value::Null);
        projected.insert(property.clone(), normalize_timestamp(value));
    }
    Value::Object(projected)
}

fn normalize_timestamp(value: Value) -> Value {
    if let Value::String(raw) = &value
        && let Ok(dt) = DateTime::parse_from_rfc3339(raw)
    {
        return Value::String(
            dt.with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        );
    }
    value
}

/// Keep only records whose named timestamp field is strictly greater than
/// the threshold. Records with the field absent or unparsable are excluded,
/// and an exactly-equal timestamp is excluded too.
pub fn filter_created_after(
    records: Vec<Value>,
    field: &str,
    threshold: DateTime<Utc>,
) -> Vec<Value> {
    records
        .into_iter()
        .filter(|record| {
            record
                .get(field)
                .and_then(Value::as_str)
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                .is_some_and(|dt| dt.with_timezone(&Utc) > threshold)
        })
        .collect()
}

/// Encode a fixed header row plus data rows as one CSV string with standard
/// quoting for embedded delimiters.
pub fn csv_table(header: &[&str], rows: Vec<Vec<String>>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(header)
        .map_err(|e| Error::Provider(format!("Failed to build CSV report: {}", e)))?;
    for row in rows {
        writer
            .write_record(&row)
            .map_err(|e| Error::Provider(format!("Failed to build CSV report: {}", e)))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Provider(format!("Failed to build CSV report: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Provider(format!("Failed to build CSV report: {}", e)))
}

/// Map compute inventory records into report rows. Absent fields become
/// empty cells so one malformed record cannot sink the report.
pub fn compute_rows(records: &[Value]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| {
            vec![
                field_or_empty(record, "name"),
                field_or_empty(record, "location"),
                field_or_empty(record, "resourceGroup"),
                field_or_empty(record, "id"),
            ]
        })
        .collect()
}

fn field_or_empty(record: &Value, field: &str) -> String {
    record
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Accumulate object sizes into per-object `{name, size}` pairs plus the
/// running total. A null or absent size contributes zero; no object is
/// dropped. Accepts the size either at the top level (`size`) or under
/// `properties.contentLength`, the shape the Azure CLI emits.
pub fn sum_object_sizes(records: &[Value]) -> (Vec<Value>, i64) {
    let mut objects = Vec::with_capacity(records.len());
    let mut total: i64 = 0;
    for record in records {
        let name = field_or_empty(record, "name");
        let size = object_size(record);
        total += size;
        objects.push(json!({ "name": name, "size": size }));
    }
    (objects, total)
}

fn object_size(record: &Value) -> i64 {
    record
        .get("size")
        .and_then(Value::as_i64)
        .or_else(|| {
            record
                .get("properties")
                .and_then(|props| props.get("contentLength"))
                .and_then(Value::as_i64)
        })
        .unwrap_or(0)
}

//! Per-field coercion rules: pure functions from a raw query field to a
//! typed parameter. Every rule is total or fails with a `Validation` error
//! naming the field; defaults are applied only where an adapter declares
//! one explicitly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use extdata_types::{Error, Query, Result};
use serde_json::Value;

/// Strict UTC timestamp form, e.g. `2006-01-02T15:04:05Z`
const STRICT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Naive fallback accepted by the lenient parser (no zone designator)
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Return the field verbatim; absent or empty is a validation failure, as
/// is a present value of any other type.
pub fn required_string(query: &Query, field: &str) -> Result<String> {
    match query.get(field) {
        None => Err(Error::Validation(format!("Missing {} in query", field))),
        Some(Value::String(raw)) if !raw.is_empty() => Ok(raw.to_string()),
        Some(Value::String(_)) => Err(Error::Validation(format!("Missing {} in query", field))),
        Some(_) => Err(Error::Validation(format!(
            "Invalid {}: expected a string",
            field
        ))),
    }
}

/// Return the field verbatim when present, `None` when absent. A value of
/// any other type fails rather than quietly dropping the field.
pub fn optional_string(query: &Query, field: &str) -> Result<Option<String>> {
    match query.get(field) {
        None => Ok(None),
        Some(Value::String(raw)) => Ok(Some(raw.to_string())),
        Some(_) => Err(Error::Validation(format!(
            "Invalid {}: expected a string",
            field
        ))),
    }
}

/// Parse a required timestamp in the strict `YYYY-MM-DDTHH:MM:SSZ` form.
pub fn timestamp_strict(query: &Query, field: &str) -> Result<DateTime<Utc>> {
    let raw = query
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Validation(format!("Missing {} in query", field)))?;
    NaiveDateTime::parse_from_str(raw, STRICT_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|e| Error::Validation(format!("Invalid {} format: {}", field, e)))
}

/// Parse an optional timestamp leniently: RFC 3339 first, then the naive
/// `YYYY-MM-DDTHH:MM:SS` form, then a bare date at midnight. The result is
/// always normalized to UTC.
pub fn timestamp_lenient(query: &Query, field: &str) -> Result<Option<DateTime<Utc>>> {
    let Some(value) = query.get(field) else {
        return Ok(None);
    };
    let raw = value
        .as_str()
        .ok_or_else(|| Error::Validation(format!("Invalid {}: expected a string", field)))?;
    parse_lenient(raw)
        .map(Some)
        .ok_or_else(|| Error::Validation(format!("Invalid {}: unrecognized timestamp {:?}", field, raw)))
}

fn parse_lenient(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT) {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    None
}

/// Parse an optional integer from a JSON number or a numeric string.
pub fn integer(query: &Query, field: &str) -> Result<Option<i64>> {
    match query.get(field) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| Error::Validation(format!("Invalid {}: expected an integer", field))),
        Some(Value::String(raw)) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| Error::Validation(format!("Invalid {}: expected an integer", field))),
        Some(_) => Err(Error::Validation(format!(
            "Invalid {}: expected an integer",
            field
        ))),
    }
}

/// Parse an optional integer, substituting the declared default when absent.
pub fn integer_or(query: &Query, field: &str, default: i64) -> Result<i64> {
    Ok(integer(query, field)?.unwrap_or(default))
}

/// Split a comma-separated field into trimmed, non-empty tokens, falling
/// back to the declared default list when the field is absent.
pub fn string_list_or(query: &Query, field: &str, default: &str) -> Result<Vec<String>> {
    let raw = match query.get(field) {
        None => default,
        Some(Value::String(raw)) => raw,
        Some(_) => {
            return Err(Error::Validation(format!(
                "Invalid {}: expected a comma-separated string",
                field
            )));
        }
    };
    Ok(split_list(raw))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

//! AWS-backed gateway variants, all driven through the `aws` CLI.

use chrono::{DateTime, SecondsFormat, Utc};
use extdata_types::{Error, Result};
use serde_json::Value;

use crate::exec::{CommandRunner, run_json};
use crate::gateway::AuditFilter;

/// Page size requested per principal listing call; the provider may cap it
const PRINCIPAL_PAGE_SIZE: &str = "1000";

/// List IAM users page by page until the provider stops handing back a
/// continuation token.
pub(crate) fn list_principals(runner: &dyn CommandRunner) -> Result<Vec<Value>> {
    let mut principals = Vec::new();
    let mut token: Option<String> = None;
    loop {
        let mut args = string_args(&[
            "iam",
            "list-users",
            "--max-items",
            PRINCIPAL_PAGE_SIZE,
            "--output",
            "json",
        ]);
        if let Some(token) = &token {
            args.push("--starting-token".to_string());
            args.push(token.clone());
        }
        let page = run_json(runner, "aws", &args, "list users")?;
        if let Some(batch) = page.get("Users").and_then(Value::as_array) {
            principals.extend(batch.iter().cloned());
        }
        token = page
            .get("NextToken")
            .and_then(Value::as_str)
            .map(str::to_string);
        if token.is_none() {
            break;
        }
    }
    Ok(principals)
}

/// Look up audit-trail events. Absent filters are left off the command
/// line entirely; lookup attributes are only attached when at least one
/// attribute match was requested.
pub(crate) fn lookup_audit_events(
    runner: &dyn CommandRunner,
    filter: &AuditFilter,
) -> Result<Vec<Value>> {
    let mut args = string_args(&["cloudtrail", "lookup-events", "--output", "json"]);
    if let Some(start) = filter.start_time {
        args.push("--start-time".to_string());
        args.push(format_time(start));
    }
    if let Some(end) = filter.end_time {
        args.push("--end-time".to_string());
        args.push(format_time(end));
    }
    if let Some(max) = filter.max_records {
        args.push("--max-results".to_string());
        args.push(max.to_string());
    }

    let mut attributes = Vec::new();
    if let Some(username) = &filter.username {
        attributes.push(attribute("Username", username));
    }
    if let Some(resource_name) = &filter.resource_name {
        attributes.push(attribute("ResourceName", resource_name));
    }
    if let Some(event_source) = &filter.event_source {
        attributes.push(attribute("EventSource", event_source));
    }
    if !attributes.is_empty() {
        args.push("--lookup-attributes".to_string());
        args.extend(attributes);
    }

    let response = run_json(runner, "aws", &args, "lookup events")?;
    Ok(response
        .get("Events")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default())
}

/// Fetch one secret parameter with server-side decryption.
pub(crate) fn get_secret_parameter(runner: &dyn CommandRunner, path: &str) -> Result<String> {
    let args = string_args(&[
        "ssm",
        "get-parameter",
        "--name",
        path,
        "--with-decryption",
        "--output",
        "json",
    ]);
    let operation = format!("retrieve parameter {}", path);
    let response = run_json(runner, "aws", &args, &operation)?;
    response
        .get("Parameter")
        .and_then(|parameter| parameter.get("Value"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            Error::Provider(format!(
                "Failed to {}: response has no Parameter.Value",
                operation
            ))
        })
}

/// Issue a pre-signed download URL. The CLI prints the bare URL on stdout,
/// not JSON.
pub(crate) fn presign_download_url(
    runner: &dyn CommandRunner,
    bucket: &str,
    key: &str,
    expiry_secs: i64,
) -> Result<String> {
    let args = vec![
        "s3".to_string(),
        "presign".to_string(),
        format!("s3://{}/{}", bucket, key),
        "--expires-in".to_string(),
        expiry_secs.to_string(),
    ];
    let stdout = runner
        .run("aws", &args)
        .map_err(|e| Error::Provider(format!("Failed to generate pre-signed URL: {}", e)))?;
    let url = stdout.trim();
    if url.is_empty() {
        return Err(Error::Provider(
            "Failed to generate pre-signed URL: empty response".to_string(),
        ));
    }
    Ok(url.to_string())
}

fn attribute(key: &str, value: &str) -> String {
    format!("AttributeKey={},AttributeValue={}", key, value)
}

fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn string_args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

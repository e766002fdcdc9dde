use extdata_core::coerce;
use extdata_providers::{GatewayConfig, ProviderGateway};
use extdata_types::{Query, Result};
use serde_json::{Value, json};

/// Validity window applied when the caller omits `expiry`
const DEFAULT_EXPIRY_SECS: i64 = 3600;

/// Issue a time-limited download URL for one object.
pub fn handle(
    query: &Query,
    gateway: &dyn ProviderGateway,
    _config: &GatewayConfig,
) -> Result<Value> {
    let bucket = coerce::required_string(query, "bucket")?;
    let key = coerce::required_string(query, "key")?;
    let expiry_secs = coerce::integer_or(query, "expiry", DEFAULT_EXPIRY_SECS)?;

    let url = gateway.presign_download_url(&bucket, &key, expiry_secs)?;

    Ok(json!({ "url": url }))
}

use extdata_core::{coerce, shape};
use extdata_providers::{GatewayConfig, ProviderGateway};
use extdata_types::{Query, Result};
use serde_json::{Value, json};

/// Sum object sizes across one container. `resource_group` and
/// `storage_account` are accepted for caller convenience but unused; the
/// connection string already pins the account.
pub fn handle(
    query: &Query,
    gateway: &dyn ProviderGateway,
    _config: &GatewayConfig,
) -> Result<Value> {
    let container = coerce::required_string(query, "container")?;

    let objects = gateway.list_objects(&container)?;
    let (blobs, total_size) = shape::sum_object_sizes(&objects);

    Ok(json!({ "blobs": blobs, "total_size": total_size }))
}

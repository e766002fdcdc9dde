use extdata_core::{coerce, shape};
use extdata_providers::{GatewayConfig, ProviderGateway};
use extdata_types::{Query, Result};
use serde_json::{Value, json};

/// Projection applied when the caller does not name properties
const DEFAULT_PROPERTIES: &str = "UserName,Arn,CreateDate";

/// Field carrying each principal's creation timestamp
const CREATED_FIELD: &str = "CreateDate";

/// List identity principals created strictly after `date_threshold`,
/// projected to the requested `properties` in the requested order.
pub fn handle(
    query: &Query,
    gateway: &dyn ProviderGateway,
    _config: &GatewayConfig,
) -> Result<Value> {
    let threshold = coerce::timestamp_strict(query, "date_threshold")?;
    let properties = coerce::string_list_or(query, "properties", DEFAULT_PROPERTIES)?;

    let principals = gateway.list_principals()?;
    let users: Vec<Value> = shape::filter_created_after(principals, CREATED_FIELD, threshold)
        .iter()
        .map(|record| shape::project_properties(record, &properties))
        .collect();

    Ok(json!({ "users": users }))
}

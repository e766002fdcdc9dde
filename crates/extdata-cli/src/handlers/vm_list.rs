use extdata_core::{coerce, shape};
use extdata_providers::{GatewayConfig, ProviderGateway};
use extdata_types::{Query, Result};
use serde_json::{Value, json};

/// Tabulate the compute inventory of one subscription/resource-group pair
/// as a CSV block with a fixed header row.
pub fn handle(
    query: &Query,
    gateway: &dyn ProviderGateway,
    _config: &GatewayConfig,
) -> Result<Value> {
    let subscription = coerce::required_string(query, "subscription_id")?;
    let resource_group = coerce::required_string(query, "resource_group")?;

    let resources = gateway.list_compute_resources(&subscription, &resource_group)?;
    let rows = shape::compute_rows(&resources);
    let csv = shape::csv_table(&shape::COMPUTE_CSV_HEADER, rows)?;

    Ok(json!({ "csv": csv }))
}

use extdata_core::coerce;
use extdata_providers::{GatewayConfig, ProviderGateway};
use extdata_types::{Query, Result};
use serde_json::{Value, json};

/// Fetch the decrypted secret for one device. The parameter path is
/// derived from the configured namespace; the secret value goes into the
/// payload and nowhere else.
pub fn handle(
    query: &Query,
    gateway: &dyn ProviderGateway,
    config: &GatewayConfig,
) -> Result<Value> {
    let dev_name = coerce::required_string(query, "devName")?;
    let path = config.secret_path(&dev_name);

    let password = gateway.get_secret_parameter(&path)?;

    Ok(json!({ "password": password }))
}

use extdata_core::coerce;
use extdata_providers::{AuditFilter, GatewayConfig, ProviderGateway};
use extdata_types::{Query, Result};
use serde_json::{Value, json};

/// Look up audit-trail events. Every filter is optional; whatever the
/// caller leaves out is omitted from the provider call entirely.
pub fn handle(
    query: &Query,
    gateway: &dyn ProviderGateway,
    _config: &GatewayConfig,
) -> Result<Value> {
    let filter = AuditFilter {
        username: coerce::optional_string(query, "caller")?,
        // resource_group rides on the ResourceName attribute, see AuditFilter
        resource_name: coerce::optional_string(query, "resource_group")?,
        event_source: coerce::optional_string(query, "resource_provider")?,
        start_time: coerce::timestamp_lenient(query, "start_time")?,
        end_time: coerce::timestamp_lenient(query, "end_time")?,
        max_records: coerce::integer(query, "max_records")?,
    };

    let events = gateway.lookup_audit_events(&filter)?;

    Ok(json!({ "events": events }))
}

use chrono::{DateTime, Utc};
use extdata_types::Result;
use serde_json::Value;

/// Optional lookup filters for the audit-events variant.
///
/// Every `None` is omitted from the provider call entirely; no filter is
/// ever sent as an empty placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditFilter {
    /// Matched against the `Username` lookup attribute
    pub username: Option<String>,

    /// Matched against the `ResourceName` lookup attribute. The provider
    /// has no native resource-group concept; a resource group supplied
    /// here is matched as if it were a resource name. Known limitation.
    pub resource_name: Option<String>,

    /// Matched against the `EventSource` lookup attribute
    pub event_source: Option<String>,

    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,

    /// Cap on the number of events the provider returns
    pub max_records: Option<i64>,
}

/// Capability set backing the six adapters, one method per query kind.
///
/// Each method wraps exactly one read-only provider operation. Pagination
/// is the business of the variant that understands it; records come back
/// raw and are filtered/projected by the shaper.
pub trait ProviderGateway: Send + Sync {
    /// Every identity principal, all pages exhausted.
    fn list_principals(&self) -> Result<Vec<Value>>;

    /// Compute inventory for one subscription and resource group.
    fn list_compute_resources(
        &self,
        subscription: &str,
        resource_group: &str,
    ) -> Result<Vec<Value>>;

    /// Every object in the named container, listing exhausted.
    fn list_objects(&self, container: &str) -> Result<Vec<Value>>;

    /// Audit-trail events matching the supplied filters.
    fn lookup_audit_events(&self, filter: &AuditFilter) -> Result<Vec<Value>>;

    /// Decrypted value of the secret parameter at the given path. The value
    /// is returned verbatim and must never be logged or echoed.
    fn get_secret_parameter(&self, path: &str) -> Result<String>;

    /// Time-limited download URL for one object; performs no I/O against
    /// the object itself.
    fn presign_download_url(&self, bucket: &str, key: &str, expiry_secs: i64) -> Result<String>;
}

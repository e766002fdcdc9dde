use extdata_types::Result;
use serde_json::Value;

use crate::aws;
use crate::azure;
use crate::config::GatewayConfig;
use crate::exec::{CommandRunner, ProcessRunner};
use crate::gateway::{AuditFilter, ProviderGateway};

/// Gateway implementation backed by the provider CLIs.
///
/// Credentials stay in the ambient environment of the spawned CLI; the
/// only configuration this type consumes is the snapshot taken at startup.
pub struct CliGateway {
    runner: Box<dyn CommandRunner>,
    config: GatewayConfig,
}

impl CliGateway {
    pub fn new(runner: Box<dyn CommandRunner>, config: GatewayConfig) -> Self {
        Self { runner, config }
    }

    pub fn with_config(config: GatewayConfig) -> Self {
        Self::new(Box::new(ProcessRunner), config)
    }
}

impl ProviderGateway for CliGateway {
    fn list_principals(&self) -> Result<Vec<Value>> {
        aws::list_principals(self.runner.as_ref())
    }

    fn list_compute_resources(
        &self,
        subscription: &str,
        resource_group: &str,
    ) -> Result<Vec<Value>> {
        azure::list_compute_resources(self.runner.as_ref(), subscription, resource_group)
    }

    fn list_objects(&self, container: &str) -> Result<Vec<Value>> {
        // Missing configuration is reported before any subprocess is spawned
        let connection_string = self.config.storage_connection_string()?;
        azure::list_objects(self.runner.as_ref(), connection_string, container)
    }

    fn lookup_audit_events(&self, filter: &AuditFilter) -> Result<Vec<Value>> {
        aws::lookup_audit_events(self.runner.as_ref(), filter)
    }

    fn get_secret_parameter(&self, path: &str) -> Result<String> {
        aws::get_secret_parameter(self.runner.as_ref(), path)
    }

    fn presign_download_url(&self, bucket: &str, key: &str, expiry_secs: i64) -> Result<String> {
        aws::presign_download_url(self.runner.as_ref(), bucket, key, expiry_secs)
    }
}

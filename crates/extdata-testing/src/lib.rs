//! Test doubles shared by the adapter test suites: a recording gateway
//! serving canned records and a scripted subprocess runner. Everything here
//! records the arguments it was called with so tests can assert on exactly
//! what reached the provider boundary.

use std::collections::VecDeque;
use std::sync::Mutex;

use extdata_providers::{AuditFilter, CommandRunner, ProviderGateway};
use extdata_types::{Error, Result};
use serde_json::Value;

/// One recorded gateway invocation with the arguments the adapter passed.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    ListPrincipals,
    ListComputeResources {
        subscription: String,
        resource_group: String,
    },
    ListObjects {
        container: String,
    },
    LookupAuditEvents {
        filter: AuditFilter,
    },
    GetSecretParameter {
        path: String,
    },
    PresignDownloadUrl {
        bucket: String,
        key: String,
        expiry_secs: i64,
    },
}

/// Gateway double: serves canned records and records every invocation.
///
/// `failing_with` makes every capability return a provider error (after
/// recording the call).
#[derive(Default)]
pub struct MockGateway {
    principals: Vec<Value>,
    compute_resources: Vec<Value>,
    objects: Vec<Value>,
    events: Vec<Value>,
    secret_value: Option<String>,
    presigned_url: Option<String>,
    fail_with: Option<String>,
    calls: Mutex<Vec<GatewayCall>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_principals(mut self, principals: Vec<Value>) -> Self {
        self.principals = principals;
        self
    }

    pub fn with_compute_resources(mut self, resources: Vec<Value>) -> Self {
        self.compute_resources = resources;
        self
    }

    pub fn with_objects(mut self, objects: Vec<Value>) -> Self {
        self.objects = objects;
        self
    }

    pub fn with_events(mut self, events: Vec<Value>) -> Self {
        self.events = events;
        self
    }

    pub fn with_secret_value(mut self, value: &str) -> Self {
        self.secret_value = Some(value.to_string());
        self
    }

    pub fn with_presigned_url(mut self, url: &str) -> Self {
        self.presigned_url = Some(url.to_string());
        self
    }

    pub fn failing_with(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: GatewayCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(message) => Err(Error::Provider(message.clone())),
            None => Ok(()),
        }
    }
}

impl ProviderGateway for MockGateway {
    fn list_principals(&self) -> Result<Vec<Value>> {
        self.record(GatewayCall::ListPrincipals)?;
        Ok(self.principals.clone())
    }

    fn list_compute_resources(
        &self,
        subscription: &str,
        resource_group: &str,
    ) -> Result<Vec<Value>> {
        self.record(GatewayCall::ListComputeResources {
            subscription: subscription.to_string(),
            resource_group: resource_group.to_string(),
        })?;
        Ok(self.compute_resources.clone())
    }

    fn list_objects(&self, container: &str) -> Result<Vec<Value>> {
        self.record(GatewayCall::ListObjects {
            container: container.to_string(),
        })?;
        Ok(self.objects.clone())
    }

    fn lookup_audit_events(&self, filter: &AuditFilter) -> Result<Vec<Value>> {
        self.record(GatewayCall::LookupAuditEvents {
            filter: filter.clone(),
        })?;
        Ok(self.events.clone())
    }

    fn get_secret_parameter(&self, path: &str) -> Result<String> {
        self.record(GatewayCall::GetSecretParameter {
            path: path.to_string(),
        })?;
        self.secret_value
            .clone()
            .ok_or_else(|| Error::Provider(format!("Failed to retrieve parameter {}", path)))
    }

    fn presign_download_url(&self, bucket: &str, key: &str, expiry_secs: i64) -> Result<String> {
        self.record(GatewayCall::PresignDownloadUrl {
            bucket: bucket.to_string(),
            key: key.to_string(),
            expiry_secs,
        })?;
        Ok(self
            .presigned_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.example.test/{}", bucket, key)))
    }
}

/// Subprocess double: feeds one canned stdout per invocation in order and
/// records every argv, program included.
#[derive(Default)]
pub struct ScriptedRunner {
    outputs: Mutex<VecDeque<Result<String>>>,
    invocations: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new(outputs: Vec<Result<String>>) -> Self {
        Self {
            outputs: Mutex::new(outputs.into()),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Runner whose every invocation succeeds with the next canned stdout.
    pub fn succeeding(outputs: &[&str]) -> Self {
        Self::new(outputs.iter().map(|o| Ok(o.to_string())).collect())
    }

    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        let mut argv = vec![program.to_string()];
        argv.extend(args.iter().cloned());
        self.invocations.lock().unwrap().push(argv);
        self.outputs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Provider("scripted runner exhausted".to_string())))
    }
}

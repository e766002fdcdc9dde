//! Azure-backed gateway variants, driven through the `az` CLI.

use extdata_types::{Error, Result};
use serde_json::Value;

use crate::exec::{CommandRunner, run_json};

/// List virtual machines for one subscription and resource group.
pub(crate) fn list_compute_resources(
    runner: &dyn CommandRunner,
    subscription: &str,
    resource_group: &str,
) -> Result<Vec<Value>> {
    let args = vec![
        "vm".to_string(),
        "list".to_string(),
        "--resource-group".to_string(),
        resource_group.to_string(),
        "--subscription".to_string(),
        subscription.to_string(),
        "--output".to_string(),
        "json".to_string(),
    ];
    let response = run_json(runner, "az", &args, "retrieve VM list via Azure CLI")?;
    expect_array(response, "retrieve VM list via Azure CLI")
}

/// List every blob in the container. `--num-results *` makes the CLI walk
/// the provider's internal pagination to exhaustion.
pub(crate) fn list_objects(
    runner: &dyn CommandRunner,
    connection_string: &str,
    container: &str,
) -> Result<Vec<Value>> {
    let args = vec![
        "storage".to_string(),
        "blob".to_string(),
        "list".to_string(),
        "--container-name".to_string(),
        container.to_string(),
        "--connection-string".to_string(),
        connection_string.to_string(),
        "--num-results".to_string(),
        "*".to_string(),
        "--output".to_string(),
        "json".to_string(),
    ];
    let response = run_json(runner, "az", &args, "list blobs")?;
    expect_array(response, "list blobs")
}

fn expect_array(response: Value, operation: &str) -> Result<Vec<Value>> {
    match response {
        Value::Array(records) => Ok(records),
        _ => Err(Error::Provider(format!(
            "Failed to {}: expected a JSON array",
            operation
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// Runner double with one canned response and the recorded argv.
    struct OneShotRunner {
        output: String,
        invocation: Mutex<Option<Vec<String>>>,
    }

    impl OneShotRunner {
        fn new(output: &str) -> Self {
            Self {
                output: output.to_string(),
                invocation: Mutex::new(None),
            }
        }

        fn argv(&self) -> Vec<String> {
            self.invocation.lock().unwrap().clone().expect("not invoked")
        }
    }

    impl CommandRunner for OneShotRunner {
        fn run(&self, program: &str, args: &[String]) -> Result<String> {
            let mut argv = vec![program.to_string()];
            argv.extend(args.iter().cloned());
            *self.invocation.lock().unwrap() = Some(argv);
            Ok(self.output.clone())
        }
    }

    #[test]
    fn test_list_compute_resources_decodes_array() {
        let response = json!([{"name": "vm1", "location": "westeurope"}]).to_string();
        let runner = OneShotRunner::new(&response);

        let records = list_compute_resources(&runner, "sub-1", "rg-1").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "vm1");

        let argv = runner.argv().join(" ");
        assert!(argv.starts_with("az vm list"));
        assert!(argv.contains("--resource-group rg-1"));
        assert!(argv.contains("--subscription sub-1"));
    }

    #[test]
    fn test_list_compute_resources_rejects_non_array() {
        let runner = OneShotRunner::new(r#"{"value": []}"#);
        match list_compute_resources(&runner, "sub-1", "rg-1").unwrap_err() {
            Error::Provider(msg) => {
                assert!(msg.contains("expected a JSON array"), "got: {}", msg)
            }
            other => panic!("Expected Provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_objects_requests_exhaustive_listing() {
        let response = json!([{"name": "a.txt", "properties": {"contentLength": 3}}]).to_string();
        let runner = OneShotRunner::new(&response);

        let records = list_objects(&runner, "cs", "backups").unwrap();
        assert_eq!(records.len(), 1);

        let argv = runner.argv().join(" ");
        assert!(argv.starts_with("az storage blob list"));
        assert!(argv.contains("--container-name backups"));
        assert!(argv.contains("--num-results *"));
    }
}

//! Pipeline tests against the CLI-backed gateway with a scripted
//! subprocess runner: exercises the full path from query object to the
//! exact argv handed to the provider CLI.

use std::io::Cursor;
use std::sync::Arc;

use extdata_cli::{Commands, dispatch};
use extdata_providers::{CliGateway, CommandRunner, GatewayConfig};
use extdata_testing::ScriptedRunner;
use extdata_types::{Error, Result};
use serde_json::{Value, json};

fn run_scripted(
    command: Commands,
    runner: Arc<ScriptedRunner>,
    config: GatewayConfig,
    input: &str,
) -> (i32, Value) {
    let gateway = CliGateway::new(Box::new(SharedRunner(runner)), config.clone());
    let mut reader = Cursor::new(input.to_string());
    let mut output = Vec::new();
    let code = dispatch(command, &gateway, &config, &mut reader, &mut output);
    let value = serde_json::from_slice(&output).expect("output must be one JSON object");
    (code, value)
}

/// Keeps a handle on the runner after the gateway boxes it.
struct SharedRunner(Arc<ScriptedRunner>);

impl CommandRunner for SharedRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        self.0.run(program, args)
    }
}

#[test]
fn test_vm_list_invokes_the_azure_cli_and_reports_csv() {
    let response = json!([
        {"name": "vm1", "location": "westeurope", "resourceGroup": "rg", "id": "/sub/vm1"}
    ])
    .to_string();
    let runner = Arc::new(ScriptedRunner::succeeding(&[&response]));

    let (code, payload) = run_scripted(
        Commands::VmList,
        Arc::clone(&runner),
        GatewayConfig::default(),
        r#"{"subscription_id": "sub-1", "resource_group": "rg"}"#,
    );

    assert_eq!(code, 0);
    assert!(
        payload["csv"]
            .as_str()
            .unwrap()
            .starts_with("Name,Location,ResourceGroup,VMId")
    );

    let argv = runner.invocations()[0].join(" ");
    assert!(argv.starts_with("az vm list"));
    assert!(argv.contains("--resource-group rg"));
    assert!(argv.contains("--subscription sub-1"));
}

#[test]
fn test_laps_password_passes_the_derived_path_to_the_provider_cli() {
    let response = json!({"Parameter": {"Value": "hunter2"}}).to_string();
    let runner = Arc::new(ScriptedRunner::succeeding(&[&response]));

    let (code, payload) = run_scripted(
        Commands::LapsPassword,
        Arc::clone(&runner),
        GatewayConfig::default(),
        r#"{"devName": "dev01"}"#,
    );

    assert_eq!(code, 0);
    assert_eq!(payload, json!({"password": "hunter2"}));

    let argv = &runner.invocations()[0];
    assert!(argv.contains(&"/LAPS/dev01".to_string()));
    assert!(argv.contains(&"--with-decryption".to_string()));
}

#[test]
fn test_provider_cli_failure_surfaces_as_the_envelope() {
    let runner = Arc::new(ScriptedRunner::new(vec![Err(Error::Provider(
        "az exited with exit status: 1: not logged in".to_string(),
    ))]));

    let (code, payload) = run_scripted(
        Commands::VmList,
        Arc::clone(&runner),
        GatewayConfig::default(),
        r#"{"subscription_id": "sub-1", "resource_group": "rg"}"#,
    );

    assert_eq!(code, 1);
    let message = payload["error"].as_str().unwrap();
    assert!(
        message.contains("Failed to retrieve VM list via Azure CLI"),
        "got: {}",
        message
    );
}

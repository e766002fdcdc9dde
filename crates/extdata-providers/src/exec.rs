use std::process::Command;

use extdata_types::{Error, Result};
use serde_json::Value;

/// Boundary between gateway variants and the provider CLIs they drive.
///
/// One invocation equals one subprocess. Tests substitute a scripted
/// runner, so no real provider CLI is ever needed in the test suite.
pub trait CommandRunner: Send + Sync {
    /// Run the program with the given arguments; return its stdout on a
    /// zero exit status, a `Provider` error otherwise.
    fn run(&self, program: &str, args: &[String]) -> Result<String>;
}

/// Runner that spawns real processes.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| Error::Provider(format!("Failed to run {}: {}", program, e)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Provider(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )));
        }
        String::from_utf8(output.stdout)
            .map_err(|_| Error::Provider(format!("{} produced non-UTF-8 output", program)))
    }
}

/// Run a CLI call and decode its stdout as JSON, attributing failures to
/// the named operation.
pub(crate) fn run_json(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[String],
    operation: &str,
) -> Result<Value> {
    let stdout = runner
        .run(program, args)
        .map_err(|e| Error::Provider(format!("Failed to {}: {}", operation, e)))?;
    serde_json::from_str(&stdout).map_err(|e| {
        Error::Provider(format!(
            "Failed to {}: invalid JSON from {}: {}",
            operation, program, e
        ))
    })
}

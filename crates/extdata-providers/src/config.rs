use extdata_types::{Error, Result};

/// Default namespace for secret parameter paths
const DEFAULT_SECRET_NAMESPACE: &str = "LAPS";

/// Ambient configuration, snapshotted once at process start.
///
/// Deeper layers never read the process environment; tests build this
/// struct by hand instead of mutating real environment variables.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Connection string required by the object-store listing variant
    pub storage_connection_string: Option<String>,

    /// Namespace segment of secret parameter paths, `/<namespace>/<id>`
    pub secret_namespace: String,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            storage_connection_string: std::env::var("AZURE_STORAGE_CONNECTION_STRING").ok(),
            secret_namespace: std::env::var("EXTDATA_SECRET_NAMESPACE")
                .unwrap_or_else(|_| DEFAULT_SECRET_NAMESPACE.to_string()),
        }
    }

    /// The connection string, or the validation error the envelope reports
    /// when the variable was never set.
    pub fn storage_connection_string(&self) -> Result<&str> {
        self.storage_connection_string.as_deref().ok_or_else(|| {
            Error::Validation(
                "Environment variable AZURE_STORAGE_CONNECTION_STRING is not set.".to_string(),
            )
        })
    }

    /// Deterministic secret path for a caller-supplied identifier.
    pub fn secret_path(&self, identifier: &str) -> String {
        format!("/{}/{}", self.secret_namespace, identifier)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            storage_connection_string: None,
            secret_namespace: DEFAULT_SECRET_NAMESPACE.to_string(),
        }
    }
}

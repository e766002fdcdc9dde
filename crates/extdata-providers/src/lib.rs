// Error-free seam between the adapter pipeline and the cloud providers.
//
// Every provider operation is mediated through the official provider CLIs
// (`aws`, `az`); the subprocess is an implementation detail behind the
// `ProviderGateway` trait, so the driver and the shaper never know whether
// a call was native or subprocess-backed.

pub mod config;
pub mod exec;
pub mod gateway;
pub mod live;

mod aws;
mod azure;

pub use config::GatewayConfig;
pub use exec::{CommandRunner, ProcessRunner};
pub use gateway::{AuditFilter, ProviderGateway};
pub use live::CliGateway;

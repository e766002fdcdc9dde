use std::io::{Read, Write};

use extdata_providers::{CliGateway, GatewayConfig, ProviderGateway};
use extdata_types::{Query, Result};
use serde_json::Value;

use super::args::{Cli, Commands};
use super::handlers;
use super::pipeline;

type Handler = fn(&Query, &dyn ProviderGateway, &GatewayConfig) -> Result<Value>;

fn select(command: Commands) -> Handler {
    match command {
        Commands::IamUsers => handlers::iam_users::handle,
        Commands::VmList => handlers::vm_list::handle,
        Commands::BlobSizes => handlers::blob_sizes::handle,
        Commands::CloudtrailEvents => handlers::cloudtrail_events::handle,
        Commands::LapsPassword => handlers::laps_password::handle,
        Commands::PresignUrl => handlers::presign_url::handle,
    }
}

/// Run one adapter against the given gateway and streams; returns the
/// process exit code. Tests call this with doubles and in-memory buffers.
pub fn dispatch<R: Read, W: Write>(
    command: Commands,
    gateway: &dyn ProviderGateway,
    config: &GatewayConfig,
    reader: &mut R,
    writer: &mut W,
) -> i32 {
    let handler = select(command);
    pipeline::run_adapter(reader, writer, |query| handler(query, gateway, config))
}

/// Production entry point: ambient configuration, CLI-backed gateway,
/// stdin/stdout.
pub fn run(cli: Cli) -> i32 {
    let config = GatewayConfig::from_env();
    let gateway = CliGateway::with_config(config.clone());
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &gateway, &config, &mut stdin, &mut stdout)
}

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "extdata")]
#[command(
    about = "External data-source adapters: one JSON query on stdin, one JSON result on stdout",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// One subcommand per adapter. Each reads its query object from stdin;
/// there are no positional arguments or flags beyond the adapter name.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// List identity principals created strictly after a threshold
    IamUsers,

    /// Tabulate compute resources for a subscription and resource group
    VmList,

    /// Sum object sizes across a storage container
    BlobSizes,

    /// Look up audit-trail events with optional filters
    CloudtrailEvents,

    /// Fetch one decrypted secret parameter
    LapsPassword,

    /// Issue a time-limited download URL for one object
    PresignUrl,
}

use clap::Parser;
use extdata_cli::{Cli, run};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(cli));
}

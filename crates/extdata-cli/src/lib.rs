// One binary, six adapters. Every subcommand is the same linear pipeline:
// parse one query object from stdin, coerce its declared fields, make one
// read-only provider call, shape the records, write one JSON object to
// stdout. The first error at any stage jumps straight to the
// `{"error": ...}` envelope and exit status 1.

mod args;
mod commands;
pub mod handlers;
pub mod pipeline;

pub use args::{Cli, Commands};
pub use commands::{dispatch, run};

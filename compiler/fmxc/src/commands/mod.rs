//! Command handlers for the `export-funcmap` CLI.

mod args;
mod export;

pub use args::{parse_args, usage, Command, ExportArgs, UsageError, DEFAULT_ORACLE};
pub use export::{run_export, CliError};

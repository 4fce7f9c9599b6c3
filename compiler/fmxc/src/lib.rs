//! `export-funcmap` command-line front end.
//!
//! Argument handling and the export command live in [`commands`]; the
//! binary only dispatches and reports.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `FMX_LOG=fmx_export=debug` or `FMX_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var_os("FMX_LOG").is_some() {
            let filter = EnvFilter::from_env("FMX_LOG");
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}

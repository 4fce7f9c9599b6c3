//! Go source printer for exported function tables.
//!
//! # Modules
//!
//! - [`emitter`]: Output abstraction for string and file output
//! - [`printer`]: Rendering of the generated module

pub mod emitter;
pub mod printer;

use std::io;
use std::path::Path;

pub use emitter::{Emitter, FileEmitter, StringEmitter};
pub use printer::{quote, Printer};

use fmx_ir::SyntheticModule;

/// Print `module` as Go source text.
pub fn print_module(module: &SyntheticModule) -> String {
    let mut emitter = StringEmitter::new();
    Printer::new(&mut emitter).module(module);
    emitter.ensure_trailing_newline();
    emitter.output()
}

/// Print `module` straight into the file at `path`, replacing it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_module(path: &Path, module: &SyntheticModule) -> io::Result<()> {
    let mut emitter = FileEmitter::new(path)?;
    Printer::new(&mut emitter).module(module);
    emitter.finish()
}

//! The export command: load the oracle, export, print.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fmx_export::{ExportError, Exporter};
use fmx_oracle::{OracleError, ProgramIndex};

use super::args::ExportArgs;

/// Failure of an export run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Oracle(#[from] OracleError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Run one export and write the generated module.
///
/// Nothing is written unless the whole export succeeds.
#[tracing::instrument(level = "debug", skip_all, fields(outfile = %args.outfile))]
pub fn run_export(args: &ExportArgs) -> Result<(), CliError> {
    let index = ProgramIndex::load(&args.oracle)?;
    let module = Exporter::new(&index).export(&args.request())?;

    if args.to_stdout() {
        let text = fmx_print::print_module(&module);
        return io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|source| CliError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            });
    }

    let path = Path::new(&args.outfile);
    fmx_print::write_module(path, &module).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        entries = module.table.entries.len(),
        records = module.catalogue.records.len(),
        "wrote module"
    );
    Ok(())
}

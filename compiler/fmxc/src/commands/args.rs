//! Command-line argument handling.
//!
//! `export-funcmap [--oracle=<manifest.json>] <outfile> <outpackage> <outvar> <modulePath:ident[:ident...]>...`

use std::path::PathBuf;

use fmx_export::ExportRequest;
use fmx_ir::{TargetParseError, Targets};

/// Manifest read when neither `--oracle` nor `FMX_ORACLE` is given.
pub const DEFAULT_ORACLE: &str = "funcmap.oracle.json";

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Export(ExportArgs),
}

/// A fully parsed export invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArgs {
    /// Type oracle manifest.
    pub oracle: PathBuf,
    /// Output file; `-` writes to stdout.
    pub outfile: String,
    pub package: String,
    pub var_name: String,
    pub targets: Targets,
}

impl ExportArgs {
    pub fn request(&self) -> ExportRequest {
        ExportRequest::new(
            self.targets.clone(),
            self.outfile.clone(),
            self.package.clone(),
            self.var_name.clone(),
        )
    }

    /// Whether the output goes to stdout instead of a file.
    pub fn to_stdout(&self) -> bool {
        self.outfile == "-"
    }
}

/// Malformed command line; reported together with the usage text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("Not enough arguments.")]
    NotEnoughArguments,
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error("--oracle requires a path")]
    EmptyOracle,
    #[error(transparent)]
    Target(#[from] TargetParseError),
}

/// Parse the arguments after the program name.
///
/// `env_oracle` is the value of `FMX_ORACLE`, if set; `--oracle` wins over it.
pub fn parse_args(args: &[String], env_oracle: Option<String>) -> Result<Command, UsageError> {
    // `cargo run -- ...` style launchers may pass the separator through.
    let args = match args.split_first() {
        Some((first, rest)) if first == "--" => rest,
        _ => args,
    };

    let mut oracle = env_oracle.map(PathBuf::from);
    let mut positional: Vec<&str> = Vec::new();

    for arg in args {
        match arg.as_str() {
            "-h" | "-help" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            value => {
                if let Some(path) = value.strip_prefix("--oracle=") {
                    if path.is_empty() {
                        return Err(UsageError::EmptyOracle);
                    }
                    oracle = Some(PathBuf::from(path));
                } else if value.len() > 1 && value.starts_with('-') {
                    return Err(UsageError::UnknownFlag(value.to_string()));
                } else {
                    positional.push(value);
                }
            }
        }
    }

    let [outfile, package, var_name, targets @ ..] = positional.as_slice() else {
        return Err(UsageError::NotEnoughArguments);
    };
    if targets.is_empty() {
        return Err(UsageError::NotEnoughArguments);
    }

    Ok(Command::Export(ExportArgs {
        oracle: oracle.unwrap_or_else(|| PathBuf::from(DEFAULT_ORACLE)),
        outfile: (*outfile).to_string(),
        package: (*package).to_string(),
        var_name: (*var_name).to_string(),
        targets: Targets::parse(targets)?,
    }))
}

/// Help text printed by `-h`/`-help` and on usage errors.
pub fn usage() -> String {
    format!(
        "export-funcmap - {version}
Export a funcmap variable declaration to its symbolic version.

Usage

	export-funcmap [--oracle=<manifest.json>] <outfile> <outpackage> <outvar> <pkgpath:var...>...

	outfile
		The output filepath of the export result, - for stdout.
		required.

	outpackage
		The output package name of the export result.
		required.

	outvar
		The output variable name of the export result.
		The reference catalogue is written as <outvar>PublicIdents.
		required.

	pkgpath:var...
		A repeatable argument of package path (for example html/template),
		followed by at least one colon-separated variable to export.
		Later variables win when they share a key with earlier ones.
		required.

Options

	--oracle=<path>
		Type oracle manifest describing the loaded packages.
		Defaults to $FMX_ORACLE, then {DEFAULT_ORACLE}.

	-h, -help
		Show this help.

	-v
		Show the version.

Environment

	FMX_LOG
		Enable logging on stderr, e.g. FMX_LOG=fmx_export=debug.

Example
	export-funcmap gen.go gen export text/template:builtins
	export-funcmap gen.go gen export html/template:funcMap:escapers
	export-funcmap - gen export text/template:builtins html/template:funcMap
",
        version = env!("CARGO_PKG_VERSION"),
    )
}

//! Target lookup.
//!
//! Resolves every requested `module:ident` pair to its package-level
//! function table before any entry is projected, so a missing module or
//! identifier aborts the request with nothing produced.

use fmx_ir::Targets;
use fmx_oracle::{Decl, MapEntry, Module, TypeOracle};

use crate::error::ExportError;

/// A requested function table and the module declaring it.
#[derive(Copy, Clone, Debug)]
pub struct LocatedTable<'a> {
    pub module: &'a Module,
    pub decl: &'a Decl,
}

impl<'a> LocatedTable<'a> {
    pub fn ident(&self) -> &'a str {
        &self.decl.name
    }

    /// Map literal entries in source order.
    pub fn entries(&self) -> &'a [MapEntry] {
        self.decl.entries()
    }
}

/// Locate every requested table, in request order.
///
/// Only package-scope declarations typed as a function table are
/// candidates; a function-local shadow or a differently typed variable of
/// the same name reports `IdentifierNotFound`.
pub fn locate_tables<'a>(
    oracle: &'a dyn TypeOracle,
    targets: &Targets,
) -> Result<Vec<LocatedTable<'a>>, ExportError> {
    let mut located = Vec::new();
    for target in targets {
        let module =
            oracle
                .module(&target.module_path)
                .ok_or_else(|| ExportError::ModuleNotFound {
                    module: target.module_path.clone(),
                })?;

        for ident in &target.idents {
            let decl = module
                .package_decl(ident)
                .filter(|decl| decl.ty.is_function_table())
                .ok_or_else(|| ExportError::IdentifierNotFound {
                    module: target.module_path.clone(),
                    ident: ident.clone(),
                })?;
            located.push(LocatedTable { module, decl });
        }
    }
    Ok(located)
}

//! Output module assembly.

use fmx_ir::{CatalogueDecl, GeneratedDecl, PublicIdentRecord, SyntheticModule, TableDecl, Targets};

/// Everything one export call needs besides the oracle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExportRequest {
    pub targets: Targets,
    /// Output file name, carried through to the printer.
    pub file_name: String,
    /// Package clause of the generated module.
    pub package: String,
    /// Name of the generated table variable. The catalogue variable is
    /// `<var_name>PublicIdents`.
    pub var_name: String,
}

impl ExportRequest {
    pub fn new(
        targets: Targets,
        file_name: impl Into<String>,
        package: impl Into<String>,
        var_name: impl Into<String>,
    ) -> Self {
        ExportRequest {
            targets,
            file_name: file_name.into(),
            package: package.into(),
            var_name: var_name.into(),
        }
    }

    pub fn catalogue_var(&self) -> String {
        format!("{}PublicIdents", self.var_name)
    }
}

/// Combine the projected table and the catalogue into one module.
pub fn assemble(
    request: &ExportRequest,
    decl: GeneratedDecl,
    records: Vec<PublicIdentRecord>,
) -> SyntheticModule {
    SyntheticModule {
        file_name: request.file_name.clone(),
        package: request.package.clone(),
        imports: decl.imports,
        table: TableDecl {
            var_name: request.var_name.clone(),
            entries: decl.entries,
        },
        catalogue: CatalogueDecl {
            var_name: request.catalogue_var(),
            records,
        },
    }
}

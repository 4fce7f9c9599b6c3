//! Type oracle for funcmap export.
//!
//! The exporter never parses or type-checks source itself. It asks a
//! `TypeOracle` for already-resolved module contents:
//!
//! - the module-scope symbol table (`Module::package_decl`)
//! - the resolved type of each map entry value (`ValueExpr::resolved_type`)
//! - import alias bindings (`Module::resolve_import`)
//! - identifier visibility (`TypeOracle::is_exported`)
//!
//! `ProgramIndex` is the in-memory implementation, loadable from a JSON
//! manifest.

mod module;
mod program;

pub use module::{Decl, DeclScope, ImportBinding, MapEntry, Module, ValueExpr};
pub use program::{OracleError, ProgramIndex};

/// Source of resolved module information.
pub trait TypeOracle {
    /// The loaded module with import path `path`.
    fn module(&self, path: &str) -> Option<&Module>;

    /// Whether `name` is visible outside its declaring module.
    fn is_exported(&self, name: &str) -> bool {
        fmx_ir::is_exported(name)
    }
}

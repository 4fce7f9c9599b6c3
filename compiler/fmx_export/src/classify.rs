//! Public identifier classification.
//!
//! Looks at each entry's value *expression*, not its type: a plain or
//! qualified reference to an exported function is catalogued with the
//! module that declares it, so consumers can import the real thing.
//! Inline closures and unexported references have no usable origin and are
//! left out.
//!
//! The catalogue merges by key exactly like the projected table. An entry
//! left out vacates the key, so the catalogue never describes a value the
//! table has since replaced, and a later record lands in the key's first
//! position.

use fmx_ir::{PublicIdentRecord, Targets};
use fmx_oracle::{MapEntry, TypeOracle, ValueExpr};

use crate::error::ExportError;
use crate::locate::{locate_tables, LocatedTable};
use crate::merge::KeyedMerge;

/// Locate the requested tables and catalogue their public references.
pub fn classify(
    oracle: &dyn TypeOracle,
    targets: &Targets,
) -> Result<Vec<PublicIdentRecord>, ExportError> {
    let tables = locate_tables(oracle, targets)?;
    classify_tables(oracle, &tables)
}

/// Catalogue already located tables, in order.
#[tracing::instrument(level = "debug", skip_all, fields(tables = tables.len()))]
pub fn classify_tables(
    oracle: &dyn TypeOracle,
    tables: &[LocatedTable<'_>],
) -> Result<Vec<PublicIdentRecord>, ExportError> {
    let mut merged = KeyedMerge::new();

    for table in tables {
        for entry in table.entries() {
            match reference(oracle, table, entry)? {
                Some(record) => merged.insert(&entry.key, record),
                None => merged.vacate(&entry.key),
            }
        }
    }

    Ok(merged
        .into_entries()
        .into_iter()
        .map(|(_, record)| record)
        .collect())
}

fn reference(
    oracle: &dyn TypeOracle,
    table: &LocatedTable<'_>,
    entry: &MapEntry,
) -> Result<Option<PublicIdentRecord>, ExportError> {
    let record = |selector: String, module_path: &str| PublicIdentRecord {
        key: entry.key.clone(),
        selector,
        module_path: module_path.to_string(),
    };

    match &entry.value {
        value if value.is_inline_closure() => Ok(None),
        ValueExpr::Ident { name, .. } => {
            if !oracle.is_exported(name) {
                excluded(table, entry, name);
                return Ok(None);
            }
            Ok(Some(record(
                format!("{}.{name}", table.module.name),
                &table.module.path,
            )))
        }
        ValueExpr::Selector {
            qualifier, name, ..
        } => {
            if !oracle.is_exported(name) {
                excluded(table, entry, name);
                return Ok(None);
            }
            let Some(import) = table.module.resolve_import(qualifier) else {
                return Err(unhandled_expression(table, entry));
            };
            let base = import.path.rsplit('/').next().unwrap_or(&import.path);
            Ok(Some(record(format!("{base}.{name}"), &import.path)))
        }
        ValueExpr::FuncLit { .. }
        | ValueExpr::Call { .. }
        | ValueExpr::Composite { .. }
        | ValueExpr::BasicLit { .. } => Err(unhandled_expression(table, entry)),
    }
}

fn excluded(table: &LocatedTable<'_>, entry: &MapEntry, name: &str) {
    tracing::debug!(
        module = %table.module.path,
        ident = table.ident(),
        key = %entry.key,
        name,
        "unexported reference left out of catalogue"
    );
}

fn unhandled_expression(table: &LocatedTable<'_>, entry: &MapEntry) -> ExportError {
    ExportError::UnhandledExpressionKind {
        module: table.module.path.clone(),
        ident: table.ident().to_string(),
        key: entry.key.clone(),
        kind: entry.value.kind_name(),
    }
}

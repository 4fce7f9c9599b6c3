//! Function table projection.
//!
//! Walks every located table's entries in source order and turns each
//! signature-typed value into a stub, merging across tables by key: a key
//! seen again replaces the earlier stub but keeps its position. An inline
//! closure without a resolved type vacates its key.

use fmx_ir::{GeneratedDecl, ModuleRef, TableEntry, Targets, TypeDesc};
use fmx_oracle::{MapEntry, TypeOracle, ValueExpr};
use rustc_hash::FxHashMap;

use crate::error::ExportError;
use crate::locate::{locate_tables, LocatedTable};
use crate::merge::KeyedMerge;
use crate::synth::build_stub;

/// Locate the requested tables and project them into one declaration.
pub fn project(oracle: &dyn TypeOracle, targets: &Targets) -> Result<GeneratedDecl, ExportError> {
    let tables = locate_tables(oracle, targets)?;
    project_tables(&tables)
}

/// Project already located tables, in order.
#[tracing::instrument(level = "debug", skip_all, fields(tables = tables.len()))]
pub fn project_tables(tables: &[LocatedTable<'_>]) -> Result<GeneratedDecl, ExportError> {
    let mut merged = KeyedMerge::new();

    for table in tables {
        for entry in table.entries() {
            match entry.value.resolved_type() {
                Some(TypeDesc::Signature(signature)) => {
                    let stub = build_stub(signature).map_err(|source| ExportError::Synthesis {
                        module: table.module.path.clone(),
                        ident: table.ident().to_string(),
                        key: entry.key.clone(),
                        source,
                    })?;
                    merged.insert(&entry.key, stub);
                }
                None if entry.value.is_inline_closure() => {
                    tracing::debug!(
                        module = %table.module.path,
                        ident = table.ident(),
                        key = %entry.key,
                        "dropping untyped inline closure"
                    );
                    merged.vacate(&entry.key);
                }
                _ => return Err(unhandled_value(table, entry)),
            }
        }
    }

    let entries: Vec<TableEntry> = merged
        .into_entries()
        .into_iter()
        .map(|(key, stub)| TableEntry { key, stub })
        .collect();

    let imports = import_paths(&entries)?;

    tracing::debug!(entries = entries.len(), "projected function table");
    Ok(GeneratedDecl { entries, imports })
}

/// Import paths of `entries`, deduplicated in first-seen order.
///
/// Every module is referred to by its package name, so two paths sharing
/// one name cannot both be imported.
fn import_paths(entries: &[TableEntry]) -> Result<Vec<String>, ExportError> {
    let mut by_name: FxHashMap<&str, &str> = FxHashMap::default();
    let mut paths: Vec<String> = Vec::new();

    for ModuleRef { path, name } in entries.iter().flat_map(|entry| &entry.stub.imports) {
        match by_name.get(name.as_str()) {
            Some(&first) if first == path.as_str() => {}
            Some(&first) => {
                return Err(ExportError::ImportConflict {
                    qualifier: name.clone(),
                    first: first.to_string(),
                    second: path.clone(),
                });
            }
            None => {
                by_name.insert(name, path);
                if !paths.contains(path) {
                    paths.push(path.clone());
                }
            }
        }
    }
    Ok(paths)
}

fn unhandled_value(table: &LocatedTable<'_>, entry: &MapEntry) -> ExportError {
    ExportError::UnhandledValueKind {
        module: table.module.path.clone(),
        ident: table.ident().to_string(),
        key: entry.key.clone(),
        kind: describe(&entry.value),
    }
}

fn describe(value: &ValueExpr) -> String {
    match value.resolved_type() {
        Some(ty) => format!("{} of type {ty}", value.kind_name()),
        None => format!("{} with unresolved type", value.kind_name()),
    }
}

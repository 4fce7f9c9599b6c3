//! Funcmap export IR.
//!
//! Shared data model for the exporter:
//! - Type descriptors resolved by the oracle (`TypeDesc` and friends)
//! - Export targets parsed from `modulePath:ident` arguments
//! - The generated syntax tree handed to the printer
//!
//! # Pipeline
//!
//! ```text
//! Targets ──► oracle lookup ──► TypeDesc per entry
//!                                   │
//!                                   ▼
//!                       synthesizer (Expr trees)
//!                                   │
//!                                   ▼
//!            GeneratedDecl + PublicIdentRecord ──► SyntheticModule
//! ```
//!
//! All types are plain owned data: `Clone` is a deep copy.

pub mod syntax;
pub mod target;
pub mod types;

pub use syntax::{
    CatalogueDecl, Expr, Field, FuncStub, GeneratedDecl, PublicIdentRecord, SyntheticModule,
    TableDecl, TableEntry,
};
pub use target::{Target, TargetParseError, Targets};
pub use types::{is_exported, BasicKind, ModuleRef, NamedType, Signature, Tuple, TypeDesc, Var};

//! Generated syntax.
//!
//! The export produces a small Go syntax tree rather than text, so the
//! synthesizer, the merge logic and the printer stay independent. Type
//! syntax and value syntax share one `Expr` enum, the same way Go's own AST
//! treats types as expressions: a slice zero value is a composite literal
//! whose type is itself an `Expr`.

use crate::types::ModuleRef;

/// A type or value expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Bare identifier: basic type names, `error`, `nil`, `false`.
    Ident(String),
    /// `qualifier.Name`.
    Selector { qualifier: String, name: String },
    /// `*T`.
    Star(Box<Expr>),
    /// `[]T`.
    SliceType(Box<Expr>),
    /// `...T`, only ever the type of a final parameter.
    Ellipsis(Box<Expr>),
    /// `map[K]V`.
    MapType { key: Box<Expr>, value: Box<Expr> },
    /// `interface{}`.
    InterfaceType,
    /// String literal; holds the unquoted contents.
    StringLit(String),
    IntLit(i64),
    /// Conversion or call: `fun(args...)`.
    Call { fun: Box<Expr>, args: Vec<Expr> },
    /// Empty composite literal `T{}`.
    CompositeLit(Box<Expr>),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn nil() -> Self {
        Expr::Ident("nil".to_string())
    }

    pub fn selector(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Expr::Selector {
            qualifier: qualifier.into(),
            name: name.into(),
        }
    }

    pub fn star(elem: Expr) -> Self {
        Expr::Star(Box::new(elem))
    }

    pub fn slice_type(elem: Expr) -> Self {
        Expr::SliceType(Box::new(elem))
    }

    pub fn ellipsis(elem: Expr) -> Self {
        Expr::Ellipsis(Box::new(elem))
    }

    pub fn map_type(key: Expr, value: Expr) -> Self {
        Expr::MapType {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn call(fun: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            fun: Box::new(fun),
            args,
        }
    }

    pub fn composite(ty: Expr) -> Self {
        Expr::CompositeLit(Box::new(ty))
    }
}

/// A stub parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: Option<String>,
    pub ty: Expr,
}

/// A generated function literal: original signature, zero-value body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FuncStub {
    pub params: Vec<Field>,
    /// Result types; results are never named.
    pub results: Vec<Expr>,
    /// Returned zero values, one per result.
    pub returns: Vec<Expr>,
    /// Modules this stub refers to by qualifier, first-seen order.
    pub imports: Vec<ModuleRef>,
}

/// `"key": func(...) ... { return ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TableEntry {
    pub key: String,
    pub stub: FuncStub,
}

/// The merged function table across every requested identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GeneratedDecl {
    /// One entry per distinct key, in first-occurrence order.
    pub entries: Vec<TableEntry>,
    /// Import paths of the surviving entries, deduplicated, first-seen order.
    pub imports: Vec<String>,
}

impl GeneratedDecl {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&FuncStub> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.stub)
    }
}

/// A catalogued reference to an externally resolvable function.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicIdentRecord {
    /// Function table key.
    pub key: String,
    /// Display name, `alias.Name`.
    pub selector: String,
    /// Import path of the module declaring the function.
    pub module_path: String,
}

/// `var <name> = map[string]interface{}{...}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TableDecl {
    pub var_name: String,
    pub entries: Vec<TableEntry>,
}

/// `var <name> = []map[string]string{...}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CatalogueDecl {
    pub var_name: String,
    pub records: Vec<PublicIdentRecord>,
}

/// The produced artifact: imports, merged table, reference catalogue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SyntheticModule {
    pub file_name: String,
    pub package: String,
    pub imports: Vec<String>,
    pub table: TableDecl,
    pub catalogue: CatalogueDecl,
}

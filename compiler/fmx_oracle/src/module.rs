//! Resolved module contents: declarations, import bindings, map literals.
//!
//! This is the slice of a type-checked module the exporter consumes. Every
//! expression the exporter looks at carries the type the oracle resolved
//! for it, so the core never has to type-check anything itself.

use fmx_ir::{Signature, TypeDesc};
use serde::{Deserialize, Serialize};

/// An import declaration in a module: `import alias "path"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportBinding {
    /// Explicit alias, if the import renames the package.
    #[serde(default)]
    pub alias: Option<String>,
    pub path: String,
    /// Package clause name of the imported module.
    pub name: String,
}

impl ImportBinding {
    /// The identifier this import binds in the importing module.
    pub fn local_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Where a declaration lives.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclScope {
    /// Module scope.
    #[default]
    Package,
    /// Inside a function body; never a lookup candidate.
    Local,
}

/// A value expression as written in a map literal entry.
///
/// Each shape carries the type the oracle resolved for it, `None` when the
/// oracle could not resolve one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueExpr {
    /// `Name`, referring to a declaration of the same module.
    Ident {
        name: String,
        #[serde(default)]
        ty: Option<TypeDesc>,
    },
    /// `alias.Name`.
    Selector {
        qualifier: String,
        name: String,
        #[serde(default)]
        ty: Option<TypeDesc>,
    },
    /// `func(...) ... { ... }` written inline.
    FuncLit {
        #[serde(default)]
        ty: Option<TypeDesc>,
    },
    /// Call or conversion, `f(x)` / `T(x)`.
    Call {
        #[serde(default)]
        ty: Option<TypeDesc>,
    },
    /// `T{...}`.
    Composite {
        #[serde(default)]
        ty: Option<TypeDesc>,
    },
    /// Literal constant.
    BasicLit {
        #[serde(default)]
        ty: Option<TypeDesc>,
    },
}

impl ValueExpr {
    pub fn ident(name: impl Into<String>, ty: TypeDesc) -> Self {
        ValueExpr::Ident {
            name: name.into(),
            ty: Some(ty),
        }
    }

    pub fn selector(qualifier: impl Into<String>, name: impl Into<String>, ty: TypeDesc) -> Self {
        ValueExpr::Selector {
            qualifier: qualifier.into(),
            name: name.into(),
            ty: Some(ty),
        }
    }

    /// An inline closure with the given signature.
    pub fn func_lit(signature: Signature) -> Self {
        ValueExpr::FuncLit {
            ty: Some(TypeDesc::signature(signature)),
        }
    }

    /// The type the oracle resolved for this expression.
    pub fn resolved_type(&self) -> Option<&TypeDesc> {
        match self {
            ValueExpr::Ident { ty, .. }
            | ValueExpr::Selector { ty, .. }
            | ValueExpr::FuncLit { ty }
            | ValueExpr::Call { ty }
            | ValueExpr::Composite { ty }
            | ValueExpr::BasicLit { ty } => ty.as_ref(),
        }
    }

    /// A function literal written directly as the entry value.
    ///
    /// Only the bare literal counts: a closure wrapped in a conversion is a
    /// `Call`. The projector and the classifier both use this predicate.
    pub fn is_inline_closure(&self) -> bool {
        matches!(self, ValueExpr::FuncLit { .. })
    }

    /// Short name of the expression shape, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ValueExpr::Ident { .. } => "identifier",
            ValueExpr::Selector { .. } => "selector",
            ValueExpr::FuncLit { .. } => "function literal",
            ValueExpr::Call { .. } => "call",
            ValueExpr::Composite { .. } => "composite literal",
            ValueExpr::BasicLit { .. } => "basic literal",
        }
    }
}

/// One `"key": value` pair of a map literal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    /// Unquoted key string.
    pub key: String,
    pub value: ValueExpr,
}

impl MapEntry {
    pub fn new(key: impl Into<String>, value: ValueExpr) -> Self {
        MapEntry {
            key: key.into(),
            value,
        }
    }
}

/// A variable declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decl {
    pub name: String,
    #[serde(default)]
    pub scope: DeclScope,
    /// Declared type.
    pub ty: TypeDesc,
    /// Map literal initializer, in source order. `None` when the variable
    /// is not initialized by a map literal.
    #[serde(default)]
    pub entries: Option<Vec<MapEntry>>,
}

impl Decl {
    /// A package-level `map[string]interface{}` initialized by `entries`.
    pub fn table(name: impl Into<String>, entries: Vec<MapEntry>) -> Self {
        Decl {
            name: name.into(),
            scope: DeclScope::Package,
            ty: TypeDesc::function_table(),
            entries: Some(entries),
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: TypeDesc) -> Self {
        self.ty = ty;
        self
    }

    #[must_use]
    pub fn local(mut self) -> Self {
        self.scope = DeclScope::Local;
        self
    }

    /// Map literal entries, empty when there is no literal initializer.
    pub fn entries(&self) -> &[MapEntry] {
        self.entries.as_deref().unwrap_or_default()
    }
}

/// A loaded, type-checked module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Import path.
    pub path: String,
    /// Package clause name.
    pub name: String,
    #[serde(default)]
    pub imports: Vec<ImportBinding>,
    #[serde(default)]
    pub decls: Vec<Decl>,
}

impl Module {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Module {
            path: path.into(),
            name: name.into(),
            imports: Vec::new(),
            decls: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_import(mut self, alias: Option<&str>, path: &str, name: &str) -> Self {
        self.imports.push(ImportBinding {
            alias: alias.map(str::to_string),
            path: path.to_string(),
            name: name.to_string(),
        });
        self
    }

    #[must_use]
    pub fn with_decl(mut self, decl: Decl) -> Self {
        self.decls.push(decl);
        self
    }

    /// Add a package-level function table.
    #[must_use]
    pub fn with_table(self, name: &str, entries: Vec<MapEntry>) -> Self {
        self.with_decl(Decl::table(name, entries))
    }

    /// Package-scope declaration named `name`. Function-local shadows are
    /// never returned.
    pub fn package_decl(&self, name: &str) -> Option<&Decl> {
        self.decls
            .iter()
            .find(|d| d.scope == DeclScope::Package && d.name == name)
    }

    /// The import bound to `local_name` in this module.
    pub fn resolve_import(&self, local_name: &str) -> Option<&ImportBinding> {
        self.imports.iter().find(|i| i.local_name() == local_name)
    }
}

//! Resolved type descriptors.
//!
//! A `TypeDesc` is the static type the oracle resolved for a declaration or
//! an expression. The variant set is closed: every consumer matches it
//! exhaustively, so a new kind of type is a compile error in the translator
//! rather than a runtime surprise.
//!
//! # Variants
//!
//! | Variant | Go spelling |
//! |---|---|
//! | `Basic` | `bool`, `string`, `int8`, `float64`, ... |
//! | `Named` | `template.HTML`, `error`, `a.SomeStruct` |
//! | `Pointer` | `*T` |
//! | `Slice` | `[]T` |
//! | `Map` | `map[K]V` |
//! | `Interface` | `interface{}` |
//! | `Struct` | `struct{...}` (only meaningful as a named type's underlying) |
//! | `Signature` | `func(P...) R...` |

use std::fmt;

/// Kind of a predeclared basic type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BasicKind {
    Bool,
    String,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    /// Alias of `uint8`, kept distinct so the stub spells it `byte`.
    Byte,
    /// Alias of `int32`, kept distinct so the stub spells it `rune`.
    Rune,
    Float32,
    Float64,
    Complex64,
    Complex128,
    UnsafePointer,
}

impl BasicKind {
    /// Every basic kind, in declaration order.
    pub const ALL: [BasicKind; 20] = [
        BasicKind::Bool,
        BasicKind::String,
        BasicKind::Int,
        BasicKind::Int8,
        BasicKind::Int16,
        BasicKind::Int32,
        BasicKind::Int64,
        BasicKind::Uint,
        BasicKind::Uint8,
        BasicKind::Uint16,
        BasicKind::Uint32,
        BasicKind::Uint64,
        BasicKind::Uintptr,
        BasicKind::Byte,
        BasicKind::Rune,
        BasicKind::Float32,
        BasicKind::Float64,
        BasicKind::Complex64,
        BasicKind::Complex128,
        BasicKind::UnsafePointer,
    ];

    /// The type-name token for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            BasicKind::Bool => "bool",
            BasicKind::String => "string",
            BasicKind::Int => "int",
            BasicKind::Int8 => "int8",
            BasicKind::Int16 => "int16",
            BasicKind::Int32 => "int32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint => "uint",
            BasicKind::Uint8 => "uint8",
            BasicKind::Uint16 => "uint16",
            BasicKind::Uint32 => "uint32",
            BasicKind::Uint64 => "uint64",
            BasicKind::Uintptr => "uintptr",
            BasicKind::Byte => "byte",
            BasicKind::Rune => "rune",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
            BasicKind::Complex64 => "complex64",
            BasicKind::Complex128 => "complex128",
            BasicKind::UnsafePointer => "unsafe.Pointer",
        }
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The module a named type was declared in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleRef {
    /// Import path, e.g. `html/template`.
    pub path: String,
    /// Package clause name, e.g. `template`. Used as the qualifier.
    pub name: String,
}

impl ModuleRef {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        ModuleRef {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// A declared (named) type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedType {
    pub name: String,
    /// Origin module. `None` for predeclared types such as `error`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub module: Option<ModuleRef>,
    /// Whether the type is visible outside its module.
    pub exported: bool,
    pub underlying: TypeDesc,
}

impl NamedType {
    /// The predeclared `error` type.
    pub fn is_predeclared_error(&self) -> bool {
        self.module.is_none() && self.name == "error"
    }

    /// `qualifier.Name`, or the bare name for predeclared types.
    pub fn qualified_name(&self) -> String {
        match &self.module {
            Some(module) => format!("{}.{}", module.name, self.name),
            None => self.name.clone(),
        }
    }
}

/// One positional parameter or result.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Var {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    pub ty: TypeDesc,
}

impl Var {
    pub fn named(name: impl Into<String>, ty: TypeDesc) -> Self {
        Var {
            name: Some(name.into()),
            ty,
        }
    }

    pub fn unnamed(ty: TypeDesc) -> Self {
        Var { name: None, ty }
    }
}

/// Ordered parameter or result list. Order is positional and significant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Tuple {
    vars: Vec<Var>,
}

impl Tuple {
    pub fn new(vars: Vec<Var>) -> Self {
        Tuple { vars }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Var> {
        self.vars.iter()
    }
}

impl FromIterator<Var> for Tuple {
    fn from_iter<I: IntoIterator<Item = Var>>(iter: I) -> Self {
        Tuple {
            vars: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Var;
    type IntoIter = std::slice::Iter<'a, Var>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

/// A function signature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Tuple,
    #[cfg_attr(feature = "serde", serde(default))]
    pub results: Tuple,
    /// The final parameter is `...T` (carried as a slice `[]T`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub variadic: bool,
}

impl Signature {
    pub fn new(params: Tuple, results: Tuple) -> Self {
        Signature {
            params,
            results,
            variadic: false,
        }
    }

    #[must_use]
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}

/// Resolved static type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TypeDesc {
    Basic(BasicKind),
    Named(Box<NamedType>),
    Pointer(Box<TypeDesc>),
    Slice(Box<TypeDesc>),
    Map {
        key: Box<TypeDesc>,
        value: Box<TypeDesc>,
    },
    /// Any interface type; method sets are not modelled.
    Interface,
    /// Any struct type; fields are not modelled.
    Struct,
    Signature(Box<Signature>),
}

impl TypeDesc {
    pub fn basic(kind: BasicKind) -> Self {
        TypeDesc::Basic(kind)
    }

    pub fn string() -> Self {
        TypeDesc::Basic(BasicKind::String)
    }

    pub fn pointer(elem: TypeDesc) -> Self {
        TypeDesc::Pointer(Box::new(elem))
    }

    pub fn slice(elem: TypeDesc) -> Self {
        TypeDesc::Slice(Box::new(elem))
    }

    pub fn map(key: TypeDesc, value: TypeDesc) -> Self {
        TypeDesc::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn signature(signature: Signature) -> Self {
        TypeDesc::Signature(Box::new(signature))
    }

    /// A type declared in `module`. Visibility follows the name.
    pub fn named(module: ModuleRef, name: impl Into<String>, underlying: TypeDesc) -> Self {
        let name = name.into();
        TypeDesc::Named(Box::new(NamedType {
            exported: is_exported(&name),
            name,
            module: Some(module),
            underlying,
        }))
    }

    /// The predeclared `error` interface.
    pub fn error() -> Self {
        TypeDesc::Named(Box::new(NamedType {
            name: "error".to_string(),
            module: None,
            exported: false,
            underlying: TypeDesc::Interface,
        }))
    }

    /// `map[string]interface{}`.
    pub fn function_table() -> Self {
        TypeDesc::map(TypeDesc::string(), TypeDesc::Interface)
    }

    /// Whether this is `map[string]interface{}`, directly or as the
    /// underlying type of a named type (e.g. `template.FuncMap`).
    pub fn is_function_table(&self) -> bool {
        match self {
            TypeDesc::Named(named) => named.underlying.is_map_string_any(),
            other => other.is_map_string_any(),
        }
    }

    fn is_map_string_any(&self) -> bool {
        matches!(
            self,
            TypeDesc::Map { key, value }
                if **key == TypeDesc::Basic(BasicKind::String) && **value == TypeDesc::Interface
        )
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeDesc::Basic(_) => "basic",
            TypeDesc::Named(_) => "named",
            TypeDesc::Pointer(_) => "pointer",
            TypeDesc::Slice(_) => "slice",
            TypeDesc::Map { .. } => "map",
            TypeDesc::Interface => "interface",
            TypeDesc::Struct => "struct",
            TypeDesc::Signature(_) => "signature",
        }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDesc::Basic(kind) => write!(f, "{kind}"),
            TypeDesc::Named(named) => f.write_str(&named.qualified_name()),
            TypeDesc::Pointer(elem) => write!(f, "*{elem}"),
            TypeDesc::Slice(elem) => write!(f, "[]{elem}"),
            TypeDesc::Map { key, value } => write!(f, "map[{key}]{value}"),
            TypeDesc::Interface => f.write_str("interface{}"),
            TypeDesc::Struct => f.write_str("struct{...}"),
            TypeDesc::Signature(sig) => {
                f.write_str("func(")?;
                let last = sig.params.len().saturating_sub(1);
                for (i, param) in sig.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match (&param.ty, sig.variadic && i == last) {
                        (TypeDesc::Slice(elem), true) => write!(f, "...{elem}")?,
                        (ty, _) => write!(f, "{ty}")?,
                    }
                }
                f.write_str(")")?;
                match sig.results.len() {
                    0 => Ok(()),
                    1 => sig.results.iter().try_for_each(|r| write!(f, " {}", r.ty)),
                    _ => {
                        f.write_str(" (")?;
                        for (i, result) in sig.results.iter().enumerate() {
                            if i > 0 {
                                f.write_str(", ")?;
                            }
                            write!(f, "{}", result.ty)?;
                        }
                        f.write_str(")")
                    }
                }
            }
        }
    }
}

/// Visibility rule for identifiers: exported names start with an
/// upper-case letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

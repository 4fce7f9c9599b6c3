//! Type and zero-value synthesis.
//!
//! One recursive walk over `TypeDesc` produces all three syntactic forms a
//! stub needs, selected by [`Mode`]:
//!
//! | Mode | `[]template.HTML` becomes |
//! |---|---|
//! | `Declaration { variadic: false }` | `[]template.HTML` |
//! | `Declaration { variadic: true }` | `...template.HTML` |
//! | `Reference` | `[]template.HTML` |
//! | `Value` | `[]template.HTML{}` |
//!
//! Container zero values need their element and key types in `Reference`
//! form, so value synthesis recurses into the same function with a
//! different mode instead of keeping a second walk in sync.
//!
//! Every qualified reference the walk emits records its origin module;
//! [`Synthesizer::into_imports`] returns them deduplicated by import path in
//! first-seen order.

use fmx_ir::{BasicKind, Expr, Field, FuncStub, ModuleRef, NamedType, Signature, TypeDesc};
use rustc_hash::FxHashSet;

use crate::error::SynthError;
use crate::stack::ensure_sufficient_stack;

/// What syntactic form to produce for a type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Type of a parameter or result. `variadic` is only ever set for the
    /// final parameter of a variadic signature and turns `[]T` into `...T`.
    Declaration { variadic: bool },
    /// Bare type syntax, for element/key types inside containers.
    Reference,
    /// Zero-value expression.
    Value,
}

/// Recursive type-to-syntax translator with import tracking.
#[derive(Debug, Default)]
pub struct Synthesizer {
    imports: Vec<ModuleRef>,
    seen: FxHashSet<String>,
}

impl Synthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate `ty` into syntax of the requested `mode`.
    pub fn synthesize(&mut self, ty: &TypeDesc, mode: Mode) -> Result<Expr, SynthError> {
        ensure_sufficient_stack(|| self.lower(ty, mode))
    }

    /// Modules referenced so far, first-seen order.
    pub fn into_imports(self) -> Vec<ModuleRef> {
        self.imports
    }

    fn lower(&mut self, ty: &TypeDesc, mode: Mode) -> Result<Expr, SynthError> {
        tracing::trace!(%ty, ?mode, "synthesize");
        match ty {
            TypeDesc::Basic(kind) => match mode {
                Mode::Value => basic_zero(*kind),
                Mode::Declaration { .. } | Mode::Reference => Ok(self.basic_type(*kind)),
            },
            TypeDesc::Named(named) => self.named(named, mode),
            TypeDesc::Pointer(elem) => match mode {
                Mode::Value => Ok(Expr::nil()),
                Mode::Declaration { .. } | Mode::Reference => {
                    Ok(Expr::star(self.synthesize(elem, Mode::Reference)?))
                }
            },
            TypeDesc::Interface => match mode {
                Mode::Value => Ok(Expr::nil()),
                Mode::Declaration { .. } | Mode::Reference => Ok(Expr::InterfaceType),
            },
            TypeDesc::Slice(elem) => {
                let elem = self.synthesize(elem, Mode::Reference)?;
                Ok(match mode {
                    Mode::Declaration { variadic: true } => Expr::ellipsis(elem),
                    Mode::Declaration { variadic: false } | Mode::Reference => {
                        Expr::slice_type(elem)
                    }
                    Mode::Value => Expr::composite(Expr::slice_type(elem)),
                })
            }
            TypeDesc::Map { key, value } => {
                let key = self.synthesize(key, Mode::Reference)?;
                let value = self.synthesize(value, Mode::Reference)?;
                let map = Expr::map_type(key, value);
                Ok(match mode {
                    Mode::Value => Expr::composite(map),
                    Mode::Declaration { .. } | Mode::Reference => map,
                })
            }
            TypeDesc::Struct | TypeDesc::Signature(_) => Err(unhandled(ty)),
        }
    }

    fn basic_type(&mut self, kind: BasicKind) -> Expr {
        if kind == BasicKind::UnsafePointer {
            self.require(&ModuleRef::new("unsafe", "unsafe"));
            return Expr::selector("unsafe", "Pointer");
        }
        Expr::ident(kind.name())
    }

    fn named(&mut self, named: &NamedType, mode: Mode) -> Result<Expr, SynthError> {
        match mode {
            Mode::Declaration { .. } | Mode::Reference => self.qualify(named),
            Mode::Value => match &named.underlying {
                TypeDesc::Interface => Ok(Expr::nil()),
                TypeDesc::Basic(kind) => {
                    let conversion = self.qualify(named)?;
                    Ok(Expr::call(conversion, vec![basic_zero(*kind)?]))
                }
                TypeDesc::Struct => Ok(Expr::composite(self.qualify(named)?)),
                TypeDesc::Named(_)
                | TypeDesc::Pointer(_)
                | TypeDesc::Slice(_)
                | TypeDesc::Map { .. }
                | TypeDesc::Signature(_) => Err(SynthError::UnhandledTypeKind {
                    kind: named.underlying.kind_name(),
                    ty: named.qualified_name(),
                }),
            },
        }
    }

    /// `module.Name`, registering the module as an import.
    fn qualify(&mut self, named: &NamedType) -> Result<Expr, SynthError> {
        if named.is_predeclared_error() {
            return Ok(Expr::ident("error"));
        }
        if !named.exported {
            return Err(SynthError::UnexportedType {
                ty: named.qualified_name(),
            });
        }
        let Some(module) = &named.module else {
            return Err(SynthError::UnhandledTypeKind {
                kind: "predeclared",
                ty: named.name.clone(),
            });
        };
        self.require(module);
        Ok(Expr::selector(&module.name, &named.name))
    }

    fn require(&mut self, module: &ModuleRef) {
        if self.seen.insert(module.path.clone()) {
            self.imports.push(module.clone());
        }
    }
}

fn basic_zero(kind: BasicKind) -> Result<Expr, SynthError> {
    match kind {
        BasicKind::String => Ok(Expr::StringLit(String::new())),
        BasicKind::Bool => Ok(Expr::ident("false")),
        BasicKind::Int
        | BasicKind::Int8
        | BasicKind::Int16
        | BasicKind::Int32
        | BasicKind::Int64
        | BasicKind::Uint
        | BasicKind::Uint8
        | BasicKind::Uint16
        | BasicKind::Uint32
        | BasicKind::Uint64
        | BasicKind::Uintptr
        | BasicKind::Byte
        | BasicKind::Rune
        | BasicKind::Float32
        | BasicKind::Float64 => Ok(Expr::IntLit(0)),
        BasicKind::Complex64 | BasicKind::Complex128 | BasicKind::UnsafePointer => {
            Err(SynthError::UnhandledBasicKind { kind })
        }
    }
}

fn unhandled(ty: &TypeDesc) -> SynthError {
    SynthError::UnhandledTypeKind {
        kind: ty.kind_name(),
        ty: ty.to_string(),
    }
}

/// Build the stub for `signature`: same parameters, results and
/// variadic-ness, with a body returning each result's zero value.
///
/// Parameter names are kept. When only some parameters are named the
/// others become `_`; Go does not allow mixing named and unnamed ones.
pub fn build_stub(signature: &Signature) -> Result<FuncStub, SynthError> {
    let mut synth = Synthesizer::new();

    let last = signature.params.len().saturating_sub(1);
    let any_named = signature
        .params
        .iter()
        .any(|p| p.name.as_deref().is_some_and(|n| !n.is_empty()));

    let mut params = Vec::with_capacity(signature.params.len());
    for (i, param) in signature.params.iter().enumerate() {
        let mode = Mode::Declaration {
            variadic: signature.variadic && i == last,
        };
        let ty = synth.synthesize(&param.ty, mode)?;
        let name = any_named.then(|| match param.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => "_".to_string(),
        });
        params.push(Field { name, ty });
    }

    let results = signature
        .results
        .iter()
        .map(|r| synth.synthesize(&r.ty, Mode::Declaration { variadic: false }))
        .collect::<Result<Vec<_>, _>>()?;

    let returns = signature
        .results
        .iter()
        .map(|r| synth.synthesize(&r.ty, Mode::Value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FuncStub {
        params,
        results,
        returns,
        imports: synth.into_imports(),
    })
}

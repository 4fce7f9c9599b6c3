//! Export errors.
//!
//! Every error is fatal to the export in flight: nothing is retried and no
//! partial output is produced.

use fmx_ir::BasicKind;

/// Failure inside the type/zero-value synthesizer.
///
/// Raised without call context; the projector wraps it in
/// [`ExportError::Synthesis`] with the module, identifier and key.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SynthError {
    /// A named type needs a qualified reference but is not exported.
    #[error("cannot use unexported type {ty}")]
    UnexportedType { ty: String },
    /// A type shape the translator does not model.
    #[error("unhandled {kind} type {ty}")]
    UnhandledTypeKind { kind: &'static str, ty: String },
    /// A basic kind with no zero-value literal.
    #[error("unhandled basic zero value {kind}")]
    UnhandledBasicKind { kind: BasicKind },
}

/// Failure of an export call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("module {module} is not loaded")]
    ModuleNotFound { module: String },

    #[error("variable {ident} not found in {module}")]
    IdentifierNotFound { module: String, ident: String },

    /// An entry value whose resolved type is not a function signature.
    #[error("{module}.{ident}[{key:?}]: unhandled value kind: {kind}")]
    UnhandledValueKind {
        module: String,
        ident: String,
        key: String,
        kind: String,
    },

    /// An entry value expression the reference classifier does not model.
    #[error("{module}.{ident}[{key:?}]: unhandled expression kind: {kind}")]
    UnhandledExpressionKind {
        module: String,
        ident: String,
        key: String,
        kind: &'static str,
    },

    /// Two surviving stubs refer to different modules through the same
    /// package name; the generated file could not import both.
    #[error("package name {qualifier} refers to both {first} and {second}")]
    ImportConflict {
        qualifier: String,
        first: String,
        second: String,
    },

    #[error("{module}.{ident}[{key:?}]: {source}")]
    Synthesis {
        module: String,
        ident: String,
        key: String,
        #[source]
        source: SynthError,
    },
}

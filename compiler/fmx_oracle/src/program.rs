//! In-memory module index.
//!
//! `ProgramIndex` is the oracle the CLI uses: a set of already type-checked
//! modules, read from a JSON manifest produced by whatever front end loaded
//! the sources.
//!
//! # Manifest format
//!
//! ```text
//! {
//!   "modules": [
//!     {
//!       "path": "github.com/x/funcs",
//!       "name": "funcs",
//!       "imports": [{ "path": "html/template", "name": "template" }],
//!       "decls": [
//!         {
//!           "name": "builtins",
//!           "ty": { "map": { "key": { "basic": "string" }, "value": "interface" } },
//!           "entries": [
//!             { "key": "html", "value": { "kind": "selector", "qualifier": "template",
//!                                         "name": "HTMLEscaper", "ty": { ... } } }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::module::Module;
use crate::TypeOracle;

/// Error loading a module index.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("failed to read oracle manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid oracle manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("module {0} is declared more than once")]
    DuplicateModule(String),
}

#[derive(Deserialize)]
struct Manifest {
    modules: Vec<Module>,
}

/// Modules keyed by import path.
#[derive(Clone, Debug, Default)]
pub struct ProgramIndex {
    modules: FxHashMap<String, Module>,
}

impl ProgramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `modules`; two modules with the same path are rejected.
    pub fn from_modules(modules: impl IntoIterator<Item = Module>) -> Result<Self, OracleError> {
        let mut index = ProgramIndex::new();
        for module in modules {
            index.insert(module)?;
        }
        Ok(index)
    }

    /// Parse a JSON manifest.
    pub fn from_json(json: &str) -> Result<Self, OracleError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Self::from_modules(manifest.modules)
    }

    /// Read and parse a JSON manifest file.
    pub fn load(path: &Path) -> Result<Self, OracleError> {
        let json = std::fs::read_to_string(path).map_err(|source| OracleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), modules = index.len(), "loaded oracle manifest");
        Ok(index)
    }

    pub fn insert(&mut self, module: Module) -> Result<(), OracleError> {
        if self.modules.contains_key(&module.path) {
            return Err(OracleError::DuplicateModule(module.path));
        }
        self.modules.insert(module.path.clone(), module);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl TypeOracle for ProgramIndex {
    fn module(&self, path: &str) -> Option<&Module> {
        self.modules.get(path)
    }
}

//! Symbolic export of function tables.
//!
//! Given module-level `map[string]interface{}` declarations resolved by a
//! [`TypeOracle`], produces a module with the same keys where every function
//! value is replaced by a stub of identical signature returning zero values,
//! plus a catalogue of the entries that reference an exported function by
//! name.
//!
//! # Architecture
//!
//! - `locate`: finds every requested table up front (all-or-nothing)
//! - `synth`: one recursive `TypeDesc` walk for type syntax and zero values
//! - `project`: stubs per entry, merged by key (last wins, first position)
//! - `classify`: catalogue of plain/qualified references, same merge
//! - `assemble`: the final `SyntheticModule`
//! - `cache`: optional memoization with copy-on-read
//!
//! An inline closure without a resolved type vacates its key in both the
//! table and the catalogue; everything else the walk cannot model fails the
//! whole export.

mod assemble;
mod cache;
mod classify;
mod error;
mod locate;
mod merge;
mod project;
mod stack;
mod synth;

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod testing;

pub use assemble::{assemble, ExportRequest};
pub use cache::{CacheKey, ExportCache, MemoryCache};
pub use classify::{classify, classify_tables};
pub use error::{ExportError, SynthError};
pub use locate::{locate_tables, LocatedTable};
pub use project::{project, project_tables};
pub use synth::{build_stub, Mode, Synthesizer};

use fmx_ir::SyntheticModule;
use fmx_oracle::TypeOracle;

/// Runs export requests against one oracle, optionally memoized.
#[derive(Copy, Clone)]
pub struct Exporter<'a> {
    oracle: &'a dyn TypeOracle,
    cache: Option<&'a dyn ExportCache>,
}

impl<'a> Exporter<'a> {
    pub fn new(oracle: &'a dyn TypeOracle) -> Self {
        Exporter {
            oracle,
            cache: None,
        }
    }

    #[must_use]
    pub fn with_cache(mut self, cache: &'a dyn ExportCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Export the requested tables.
    ///
    /// Either the full module is returned or nothing: no cache entry is
    /// written for a failed export.
    #[tracing::instrument(level = "debug", skip_all, fields(package = %request.package, var = %request.var_name))]
    pub fn export(&self, request: &ExportRequest) -> Result<SyntheticModule, ExportError> {
        let key = self.cache.map(|_| CacheKey::new(request));
        if let (Some(cache), Some(key)) = (self.cache, &key) {
            if let Some(module) = cache.get(key) {
                tracing::debug!(modules = ?key.modules(), "export cache hit");
                return Ok(module);
            }
            tracing::debug!(modules = ?key.modules(), "export cache miss");
        }

        let tables = locate_tables(self.oracle, &request.targets)?;
        let decl = project_tables(&tables)?;
        let records = classify_tables(self.oracle, &tables)?;
        let module = assemble(request, decl, records);

        if let (Some(cache), Some(key)) = (self.cache, key) {
            cache.insert(key, &module);
        }
        Ok(module)
    }
}

/// Export without a cache.
pub fn export(
    oracle: &dyn TypeOracle,
    request: &ExportRequest,
) -> Result<SyntheticModule, ExportError> {
    Exporter::new(oracle).export(request)
}

//! Whole-result memoization.
//!
//! The cache is a collaborator handed to [`Exporter`](crate::Exporter)
//! explicitly. Reads hand out owned copies: a caller that edits its module
//! afterwards never changes what the next caller gets.

use fmx_ir::SyntheticModule;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::assemble::ExportRequest;

/// Cache key: the sorted set of requested module paths plus the full
/// request, so two requests over the same modules but different
/// identifiers or output names never share an entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    modules: Vec<String>,
    request: ExportRequest,
}

impl CacheKey {
    pub fn new(request: &ExportRequest) -> Self {
        let mut modules: Vec<String> = request
            .targets
            .module_paths()
            .into_iter()
            .map(str::to_string)
            .collect();
        modules.sort_unstable();
        modules.dedup();
        CacheKey {
            modules,
            request: request.clone(),
        }
    }

    /// Requested module paths, sorted and deduplicated.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }
}

/// Storage for finished exports.
pub trait ExportCache {
    /// An independent copy of the stored module.
    fn get(&self, key: &CacheKey) -> Option<SyntheticModule>;

    /// Store a copy of `module`.
    fn insert(&self, key: CacheKey, module: &SyntheticModule);
}

/// In-process cache, shareable across threads.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<FxHashMap<CacheKey, SyntheticModule>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl ExportCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<SyntheticModule> {
        self.entries.read().get(key).cloned()
    }

    fn insert(&self, key: CacheKey, module: &SyntheticModule) {
        self.entries.write().insert(key, module.clone());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;

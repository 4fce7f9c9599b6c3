use super::*;
use crate::testing::{fixture, targets};
use crate::Exporter;
use fmx_ir::{Expr, Target, Targets};
use pretty_assertions::assert_eq;

fn request(idents: &[&str]) -> ExportRequest {
    ExportRequest::new(targets(idents), "out.go", "out", "funcs")
}

#[test]
fn key_sorts_and_dedups_modules() {
    let targets = Targets::new(vec![
        Target::new("example.com/z", ["a"]),
        Target::new("example.com/a", ["b"]),
        Target::new("example.com/z", ["c"]),
    ]);
    let key = CacheKey::new(&ExportRequest::new(targets, "o.go", "o", "v"));
    assert_eq!(key.modules().to_vec(), vec!["example.com/a", "example.com/z"]);
}

#[test]
fn key_distinguishes_identifiers_over_same_module() {
    assert_ne!(
        CacheKey::new(&request(&["stringfn"])),
        CacheKey::new(&request(&["otherstringfn"]))
    );
    assert_eq!(
        CacheKey::new(&request(&["stringfn"])),
        CacheKey::new(&request(&["stringfn"]))
    );
}

#[test]
fn reads_are_independent_copies() {
    let index = fixture();
    let cache = MemoryCache::new();
    let exporter = Exporter::new(&index).with_cache(&cache);
    let request = request(&["stringfn"]);

    let mut first = exporter.export(&request).unwrap();
    let pristine = first.clone();
    first.table.entries[0].stub.returns[0] = Expr::ident("tampered");
    first.imports.push("example.com/tampered".to_string());

    assert_eq!(cache.len(), 1);
    assert_eq!(exporter.export(&request).unwrap(), pristine);
    assert_eq!(cache.get(&CacheKey::new(&request)).unwrap(), pristine);
}

#[test]
fn different_request_misses() {
    let index = fixture();
    let cache = MemoryCache::new();
    let exporter = Exporter::new(&index).with_cache(&cache);

    let string_module = exporter.export(&request(&["stringfn"])).unwrap();
    let other_module = exporter.export(&request(&["otherstringfn"])).unwrap();

    assert_ne!(string_module, other_module);
    assert_eq!(cache.len(), 2);
}

#[test]
fn failures_are_not_cached() {
    let index = fixture();
    let cache = MemoryCache::new();
    let exporter = Exporter::new(&index).with_cache(&cache);

    assert!(exporter.export(&request(&["unexportedfn"])).is_err());
    assert!(cache.is_empty());
}

#[test]
fn clear_empties() {
    let cache = MemoryCache::new();
    cache.insert(CacheKey::new(&request(&["x"])), &SyntheticModule::default());
    assert_eq!(cache.len(), 1);
    cache.clear();
    assert!(cache.is_empty());
}

//! Property-based tests for function table export.
//!
//! Generates random tables of random signatures and checks:
//! 1. Determinism: the same request exports the same module
//! 2. Key merge: distinct keys in first-occurrence order, last value wins
//! 3. Imports: exactly the deduplicated imports of the surviving stubs
//! 4. Variadics: a variadic tail is always an ellipsis parameter

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::needless_pass_by_value,
    reason = "Proptest macros generate code with these patterns"
)]

use fmx_export::{build_stub, export, ExportRequest};
use fmx_ir::{BasicKind, Expr, ModuleRef, Signature, Target, Targets, Tuple, TypeDesc, Var};
use fmx_oracle::{MapEntry, Module, ProgramIndex, ValueExpr};
use proptest::prelude::*;

const MODULE: &str = "example.com/prop";

// -- Strategies --

fn basic_strategy() -> impl Strategy<Value = TypeDesc> {
    let kinds: Vec<BasicKind> = BasicKind::ALL
        .into_iter()
        .filter(|k| {
            !matches!(
                k,
                BasicKind::Complex64 | BasicKind::Complex128 | BasicKind::UnsafePointer
            )
        })
        .collect();
    prop::sample::select(kinds).prop_map(TypeDesc::basic)
}

fn named_strategy() -> impl Strategy<Value = TypeDesc> {
    prop_oneof![
        Just(TypeDesc::named(
            ModuleRef::new("html/template", "template"),
            "HTML",
            TypeDesc::string()
        )),
        Just(TypeDesc::named(
            ModuleRef::new("example.com/b", "b"),
            "SomeType",
            TypeDesc::Struct
        )),
        Just(TypeDesc::named(
            ModuleRef::new("example.com/a", "a"),
            "Tomate",
            TypeDesc::Interface
        )),
        Just(TypeDesc::error()),
    ]
}

fn type_strategy() -> impl Strategy<Value = TypeDesc> {
    let leaf = prop_oneof![
        basic_strategy(),
        named_strategy(),
        Just(TypeDesc::Interface),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(TypeDesc::pointer),
            inner.clone().prop_map(TypeDesc::slice),
            inner.prop_map(|value| TypeDesc::map(TypeDesc::string(), value)),
        ]
    })
}

fn signature_strategy() -> impl Strategy<Value = Signature> {
    (
        prop::collection::vec(type_strategy(), 0..4),
        prop::collection::vec(type_strategy(), 0..3),
        any::<bool>(),
    )
        .prop_map(|(mut params, results, variadic)| {
            let variadic = variadic && !params.is_empty();
            if variadic {
                if let Some(last) = params.pop() {
                    params.push(TypeDesc::slice(last));
                }
            }
            let signature = Signature::new(
                params.into_iter().map(Var::unnamed).collect(),
                results.into_iter().map(Var::unnamed).collect::<Tuple>(),
            );
            if variadic {
                signature.variadic()
            } else {
                signature
            }
        })
}

fn table_strategy() -> impl Strategy<Value = Vec<(String, Signature)>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(str::to_string),
            signature_strategy(),
        ),
        0..6,
    )
}

// -- Helpers --

fn index(tables: &[Vec<(String, Signature)>]) -> ProgramIndex {
    let mut module = Module::new(MODULE, "prop");
    for (i, table) in tables.iter().enumerate() {
        let entries = table
            .iter()
            .map(|(key, sig)| MapEntry::new(key, ValueExpr::func_lit(sig.clone())))
            .collect();
        module = module.with_table(&format!("t{i}"), entries);
    }
    ProgramIndex::from_modules([module]).unwrap()
}

fn request(count: usize) -> ExportRequest {
    let idents: Vec<String> = (0..count).map(|i| format!("t{i}")).collect();
    ExportRequest::new(
        Targets::new(vec![Target::new(MODULE, idents)]),
        "out.go",
        "out",
        "funcs",
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_export_is_deterministic(
        first in table_strategy(),
        second in table_strategy(),
    ) {
        let tables = [first, second];
        let index = index(&tables);
        let request = request(tables.len());
        prop_assert_eq!(export(&index, &request), export(&index, &request));
    }

    #[test]
    fn prop_last_wins_first_position(
        first in table_strategy(),
        second in table_strategy(),
    ) {
        let tables = [first, second];
        let module = export(&index(&tables), &request(tables.len())).unwrap();

        let mut expected_keys: Vec<&str> = Vec::new();
        for (key, _) in tables.iter().flatten() {
            if !expected_keys.contains(&key.as_str()) {
                expected_keys.push(key);
            }
        }
        let keys: Vec<&str> = module.table.entries.iter().map(|e| e.key.as_str()).collect();
        prop_assert_eq!(keys, expected_keys);

        for entry in &module.table.entries {
            let (_, last) = tables
                .iter()
                .flatten()
                .filter(|(key, _)| *key == entry.key)
                .last()
                .unwrap();
            prop_assert_eq!(&entry.stub, &build_stub(last).unwrap());
        }
    }

    #[test]
    fn prop_imports_match_surviving_stubs(
        first in table_strategy(),
        second in table_strategy(),
    ) {
        let tables = [first, second];
        let module = export(&index(&tables), &request(tables.len())).unwrap();

        let mut expected: Vec<&String> = Vec::new();
        let paths = module
            .table
            .entries
            .iter()
            .flat_map(|e| e.stub.imports.iter().map(|m| &m.path));
        for import in paths {
            if !expected.contains(&import) {
                expected.push(import);
            }
        }
        prop_assert_eq!(module.imports.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_variadic_tail_is_ellipsis(sig in signature_strategy()) {
        let stub = build_stub(&sig).unwrap();
        prop_assert_eq!(stub.params.len(), sig.params.len());
        for (i, param) in stub.params.iter().enumerate() {
            let is_tail = i + 1 == stub.params.len();
            prop_assert_eq!(
                matches!(param.ty, Expr::Ellipsis(_)),
                sig.variadic && is_tail
            );
        }
        prop_assert_eq!(stub.results.len(), stub.returns.len());
    }
}

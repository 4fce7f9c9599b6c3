//! Shared fixture module for the unit tests.

use fmx_ir::{BasicKind, ModuleRef, Signature, Target, Targets, Tuple, TypeDesc, Var};
use fmx_oracle::{Decl, MapEntry, Module, ProgramIndex, ValueExpr};

pub const FIXTURE: &str = "example.com/fixture";

pub fn template() -> ModuleRef {
    ModuleRef::new("html/template", "template")
}

pub fn html() -> TypeDesc {
    TypeDesc::named(template(), "HTML", TypeDesc::string())
}

/// `func(g <param>) <result>`.
pub fn unary(param: TypeDesc, result: TypeDesc) -> Signature {
    Signature::new(
        Tuple::new(vec![Var::named("g", param)]),
        Tuple::new(vec![Var::unnamed(result)]),
    )
}

pub fn closure(signature: Signature) -> ValueExpr {
    ValueExpr::func_lit(signature)
}

pub fn entry(key: &str, value: ValueExpr) -> MapEntry {
    MapEntry::new(key, value)
}

pub fn targets(idents: &[&str]) -> Targets {
    Targets::new(vec![Target::new(FIXTURE, idents.iter().copied())])
}

pub fn fixture() -> ProgramIndex {
    let string_fn = || closure(unary(TypeDesc::string(), TypeDesc::string()));
    let some_type = TypeDesc::named(
        ModuleRef::new("example.com/fixture/b", "b"),
        "SomeType",
        TypeDesc::Struct,
    );
    let unexported = TypeDesc::named(
        ModuleRef::new(FIXTURE, "fixture"),
        "unexported",
        TypeDesc::Struct,
    );

    let module = Module::new(FIXTURE, "fixture")
        .with_import(None, "html/template", "template")
        .with_import(Some("text"), "text/template", "template")
        .with_import(None, "example.com/fixture/a", "a")
        .with_table("stringfn", vec![entry("fn", string_fn())])
        .with_table("otherstringfn", vec![entry("otherfn", string_fn())])
        .with_table(
            "intfn",
            vec![entry(
                "fn",
                closure(unary(TypeDesc::basic(BasicKind::Int), TypeDesc::basic(BasicKind::Int))),
            )],
        )
        .with_table(
            "errfn",
            vec![
                entry("fn", string_fn()),
                entry("errfn", closure(unary(TypeDesc::string(), TypeDesc::error()))),
            ],
        )
        .with_table(
            "htmlfn",
            vec![entry("fn", closure(unary(html(), html())))],
        )
        .with_table(
            "textfn",
            vec![entry(
                "text",
                closure(unary(
                    TypeDesc::named(
                        ModuleRef::new("text/template", "template"),
                        "Template",
                        TypeDesc::Struct,
                    ),
                    TypeDesc::string(),
                )),
            )],
        )
        .with_table(
            "unexportedfn",
            vec![entry("fn", closure(unary(TypeDesc::string(), unexported)))],
        )
        .with_decl(
            Decl::table("funcMap", vec![entry("noop", closure(Signature::default()))])
                .with_type(TypeDesc::named(
                    ModuleRef::new("text/template", "template"),
                    "FuncMap",
                    TypeDesc::function_table(),
                )),
        )
        .with_table(
            "refs",
            vec![
                entry(
                    "a",
                    ValueExpr::selector(
                        "template",
                        "JSEscapeString",
                        TypeDesc::signature(unary(TypeDesc::string(), TypeDesc::string())),
                    ),
                ),
                entry(
                    "b",
                    ValueExpr::ident("Rr", TypeDesc::signature(Signature::default())),
                ),
                entry("c", closure(Signature::default())),
                entry(
                    "yy",
                    ValueExpr::selector(
                        "a",
                        "SomeFn",
                        TypeDesc::signature(unary(TypeDesc::string(), some_type)),
                    ),
                ),
                entry(
                    "tt",
                    ValueExpr::selector(
                        "text",
                        "HTMLEscaper",
                        TypeDesc::signature(unary(TypeDesc::string(), TypeDesc::string())),
                    ),
                ),
                entry(
                    "hidden",
                    ValueExpr::ident("rr", TypeDesc::signature(Signature::default())),
                ),
            ],
        )
        .with_table(
            "constant",
            vec![entry(
                "n",
                ValueExpr::BasicLit {
                    ty: Some(TypeDesc::basic(BasicKind::Int)),
                },
            )],
        )
        .with_table(
            "untyped",
            vec![
                entry("fn", string_fn()),
                entry("lazy", ValueExpr::FuncLit { ty: None }),
            ],
        );

    ProgramIndex::from_modules([module]).unwrap()
}

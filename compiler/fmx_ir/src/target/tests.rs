use super::*;
use pretty_assertions::assert_eq;

#[test]
fn parse_single_ident() {
    let target = Target::parse("text/template:builtins");
    assert_eq!(target, Ok(Target::new("text/template", ["builtins"])));
}

#[test]
fn parse_many_idents_keeps_order() {
    let target = Target::parse("github.com/x/y:b:a:b");
    assert_eq!(target, Ok(Target::new("github.com/x/y", ["b", "a", "b"])));
}

#[test]
fn parse_rejects_missing_ident_list() {
    assert_eq!(
        Target::parse("text/template"),
        Err(TargetParseError::InvalidTarget("text/template".into()))
    );
    assert_eq!(
        Target::parse(":builtins"),
        Err(TargetParseError::InvalidTarget(":builtins".into()))
    );
}

#[test]
fn parse_rejects_empty_ident() {
    assert_eq!(
        Target::parse("text/template:"),
        Err(TargetParseError::MissingIdentifier("text/template:".into()))
    );
    assert_eq!(
        Target::parse("text/template:a::b"),
        Err(TargetParseError::MissingIdentifier("text/template:a::b".into()))
    );
}

#[test]
fn targets_parse_all_or_nothing() {
    let ok = Targets::parse(["text/template:builtins", "html/template:funcMap"]);
    let Ok(targets) = ok else {
        panic!("expected targets to parse");
    };
    assert_eq!(targets.len(), 2);
    assert_eq!(targets.module_paths(), vec!["text/template", "html/template"]);

    let bad = Targets::parse(["text/template:builtins", "html/template"]);
    assert_eq!(
        bad,
        Err(TargetParseError::InvalidTarget("html/template".into()))
    );
}

#[test]
fn display_round_trips_argument_form() {
    let target = Target::new("html/template", ["funcMap", "escapers"]);
    assert_eq!(target.to_string(), "html/template:funcMap:escapers");
}

#[test]
fn error_messages() {
    assert_eq!(
        TargetParseError::InvalidTarget("x".into()).to_string(),
        "invalid package target: x"
    );
}

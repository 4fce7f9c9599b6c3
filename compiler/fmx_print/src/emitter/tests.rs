use super::*;
use pretty_assertions::assert_eq;

#[test]
fn string_emitter_basic() {
    let mut emitter = StringEmitter::new();
    emitter.emit("package");
    emitter.emit_space();
    emitter.emit("gen");
    assert_eq!(emitter.as_str(), "package gen");
}

#[test]
fn string_emitter_indents_with_tabs() {
    let mut emitter = StringEmitter::new();
    emitter.emit("var x = map[string]interface{}{");
    emitter.emit_newline();
    emitter.emit_indent(1);
    emitter.emit("\"fn\": func() {");
    emitter.emit_newline();
    emitter.emit_indent(2);
    emitter.emit("return");
    assert_eq!(
        emitter.output(),
        "var x = map[string]interface{}{\n\t\"fn\": func() {\n\t\treturn"
    );
}

#[test]
fn string_emitter_trailing_newline() {
    let mut emitter = StringEmitter::new();
    emitter.emit("}");
    emitter.ensure_trailing_newline();
    emitter.ensure_trailing_newline();
    assert_eq!(emitter.output(), "}\n");
}

#[test]
fn file_emitter_writes_on_finish() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.go");

    let mut emitter = FileEmitter::new(&path).unwrap();
    emitter.emit("package gen");
    emitter.emit_newline();
    emitter.emit_indent(2);
    emitter.emit_space();
    emitter.finish().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "package gen\n\t\t ");
}

#[test]
fn file_emitter_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(FileEmitter::new(dir.path().join("nope").join("out.go")).is_err());
}

//! Go source printer.
//!
//! Renders a [`SyntheticModule`] the way gofmt lays it out:
//!
//! ```text
//! package gen
//!
//! import "html/template"
//!
//! var builtins = map[string]interface{}{
//! 	"html": func(g string) template.HTML {
//! 		return template.HTML("")
//! 	},
//! 	"noop": func() {},
//! }
//!
//! var builtinsPublicIdents = []map[string]string{
//! 	{"FuncName": "html", "Sel": "template.HTMLEscaper", "Pkg": "html/template"},
//! }
//! ```
//!
//! A single import is written inline, several as a parenthesized block.

use fmx_ir::{CatalogueDecl, Expr, Field, FuncStub, SyntheticModule, TableDecl};

use crate::emitter::Emitter;

/// Prints module parts into an [`Emitter`].
pub struct Printer<'e, E: Emitter> {
    out: &'e mut E,
}

impl<'e, E: Emitter> Printer<'e, E> {
    pub fn new(out: &'e mut E) -> Self {
        Printer { out }
    }

    /// Package clause, imports, table, catalogue.
    pub fn module(&mut self, module: &SyntheticModule) {
        self.out.emit("package ");
        self.out.emit(&module.package);
        self.out.emit_newline();

        self.imports(&module.imports);

        self.out.emit_newline();
        self.table(&module.table);

        self.out.emit_newline();
        self.catalogue(&module.catalogue);
    }

    fn imports(&mut self, imports: &[String]) {
        match imports {
            [] => {}
            [single] => {
                self.out.emit_newline();
                self.out.emit("import ");
                self.out.emit(&quote(single));
                self.out.emit_newline();
            }
            many => {
                self.out.emit_newline();
                self.out.emit("import (");
                self.out.emit_newline();
                for path in many {
                    self.out.emit_indent(1);
                    self.out.emit(&quote(path));
                    self.out.emit_newline();
                }
                self.out.emit(")");
                self.out.emit_newline();
            }
        }
    }

    pub fn table(&mut self, table: &TableDecl) {
        self.out.emit("var ");
        self.out.emit(&table.var_name);
        self.out.emit(" = map[string]interface{}{");
        if table.entries.is_empty() {
            self.out.emit("}");
            self.out.emit_newline();
            return;
        }
        self.out.emit_newline();
        for entry in &table.entries {
            self.out.emit_indent(1);
            self.out.emit(&quote(&entry.key));
            self.out.emit(": ");
            self.stub(&entry.stub, 1);
            self.out.emit(",");
            self.out.emit_newline();
        }
        self.out.emit("}");
        self.out.emit_newline();
    }

    /// `func(params) results { return zeros }`, body indented one level
    /// deeper than `indent`.
    pub fn stub(&mut self, stub: &FuncStub, indent: usize) {
        self.out.emit("func(");
        self.params(&stub.params);
        self.out.emit(")");

        match stub.results.as_slice() {
            [] => {}
            [single] => {
                self.out.emit_space();
                self.expr(single);
            }
            many => {
                self.out.emit(" (");
                self.list(many);
                self.out.emit(")");
            }
        }

        if stub.returns.is_empty() {
            self.out.emit(" {}");
            return;
        }
        self.out.emit(" {");
        self.out.emit_newline();
        self.out.emit_indent(indent + 1);
        self.out.emit("return ");
        self.list(&stub.returns);
        self.out.emit_newline();
        self.out.emit_indent(indent);
        self.out.emit("}");
    }

    fn params(&mut self, params: &[Field]) {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.out.emit(", ");
            }
            if let Some(name) = &param.name {
                self.out.emit(name);
                self.out.emit_space();
            }
            self.expr(&param.ty);
        }
    }

    pub fn catalogue(&mut self, catalogue: &CatalogueDecl) {
        self.out.emit("var ");
        self.out.emit(&catalogue.var_name);
        self.out.emit(" = []map[string]string{");
        if catalogue.records.is_empty() {
            self.out.emit("}");
            self.out.emit_newline();
            return;
        }
        self.out.emit_newline();
        for record in &catalogue.records {
            self.out.emit_indent(1);
            self.out.emit("{\"FuncName\": ");
            self.out.emit(&quote(&record.key));
            self.out.emit(", \"Sel\": ");
            self.out.emit(&quote(&record.selector));
            self.out.emit(", \"Pkg\": ");
            self.out.emit(&quote(&record.module_path));
            self.out.emit("},");
            self.out.emit_newline();
        }
        self.out.emit("}");
        self.out.emit_newline();
    }

    fn list(&mut self, exprs: &[Expr]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.out.emit(", ");
            }
            self.expr(expr);
        }
    }

    pub fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(name) => self.out.emit(name),
            Expr::Selector { qualifier, name } => {
                self.out.emit(qualifier);
                self.out.emit(".");
                self.out.emit(name);
            }
            Expr::Star(elem) => {
                self.out.emit("*");
                self.expr(elem);
            }
            Expr::SliceType(elem) => {
                self.out.emit("[]");
                self.expr(elem);
            }
            Expr::Ellipsis(elem) => {
                self.out.emit("...");
                self.expr(elem);
            }
            Expr::MapType { key, value } => {
                self.out.emit("map[");
                self.expr(key);
                self.out.emit("]");
                self.expr(value);
            }
            Expr::InterfaceType => self.out.emit("interface{}"),
            Expr::StringLit(value) => self.out.emit(&quote(value)),
            Expr::IntLit(value) => self.out.emit(&value.to_string()),
            Expr::Call { fun, args } => {
                self.expr(fun);
                self.out.emit("(");
                self.list(args);
                self.out.emit(")");
            }
            Expr::CompositeLit(ty) => {
                self.expr(ty);
                self.out.emit("{}");
            }
        }
    }
}

/// Go double-quoted string literal for `value`.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => {
                let code = u32::from(c);
                if code < 0x80 {
                    out.push_str(&format!("\\x{code:02x}"));
                } else {
                    out.push_str(&format!("\\u{code:04x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

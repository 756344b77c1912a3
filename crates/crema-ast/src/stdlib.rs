//! The runtime declaration table (spec §6): external function signatures for
//! every routine the emitted program can call but the compiler does not
//! define a body for. [`crema_sem`] registers these as ordinary functions so
//! calls to them type-check like any user call; [`crema_ir`] emits them as
//! external declarations in the module so the linker can resolve them
//! against the runtime support library.
//!
//! `list_length` and `save_args` are not here — they're emitted directly by
//! the IR builder (foreach lowering and the entry-function prelude,
//! respectively) and never appear as a user-callable `Call` expression, so
//! they don't need a signature in the declaration namespace.

use crate::ast::Binding;
use crate::items::FuncDecl;
use crate::types::{Kind, Type};
use crema_util::{Span, Symbol};
use std::sync::OnceLock;

fn p(name: &str, ty: Type) -> Binding {
    Binding::new(Symbol::intern(name), ty, Span::DUMMY)
}

fn decl(name: &str, return_ty: Type, params: Vec<Binding>) -> FuncDecl {
    FuncDecl::new(Symbol::intern(name), return_ty, params, None, Span::DUMMY)
}

/// Builds the table once and leaks it to `'static` — the table is small,
/// fixed at compile time, and built at most once per process.
pub fn declarations() -> &'static [FuncDecl] {
    static TABLE: OnceLock<Vec<FuncDecl>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

fn build_table() -> Vec<FuncDecl> {
    let mut out = Vec::new();

    // Per-scalar-kind list constructors, retrieval, and mutation.
    for &(suffix, kind) in &[
        ("int", Kind::Int),
        ("uint", Kind::UInt),
        ("double", Kind::Double),
        ("char", Kind::Char),
        ("bool", Kind::Bool),
    ] {
        let scalar = Type::scalar(kind);
        let list = Type::list_of(kind);
        out.push(decl(&format!("{suffix}_list_create"), list, vec![]));
        out.push(decl(
            &format!("{suffix}_list_retrieve"),
            scalar,
            vec![p("list", list), p("index", Type::INT)],
        ));
        out.push(decl(
            &format!("{suffix}_list_insert"),
            Type::VOID,
            vec![p("list", list), p("index", Type::INT), p("value", scalar)],
        ));
        out.push(decl(
            &format!("{suffix}_list_append"),
            Type::VOID,
            vec![p("list", list), p("value", scalar)],
        ));
    }

    // Strings (`list<char>` under the hood, but with their own runtime
    // entry points per spec §6).
    out.push(decl("str_create", Type::STRING, vec![]));
    out.push(decl(
        "str_retrieve",
        Type::CHAR,
        vec![p("s", Type::STRING), p("index", Type::INT)],
    ));
    out.push(decl(
        "str_insert",
        Type::VOID,
        vec![p("s", Type::STRING), p("index", Type::INT), p("value", Type::CHAR)],
    ));
    out.push(decl(
        "str_append",
        Type::VOID,
        vec![p("s", Type::STRING), p("value", Type::CHAR)],
    ));

    // print/println family, one pair per scalar kind plus string.
    for &(suffix, ty) in &[
        ("int", Type::INT),
        ("uint", Type::UINT),
        ("double", Type::DOUBLE),
        ("char", Type::CHAR),
        ("bool", Type::BOOL),
        ("str", Type::STRING),
    ] {
        out.push(decl(&format!("{suffix}_print"), Type::VOID, vec![p("value", ty)]));
        out.push(decl(&format!("{suffix}_println"), Type::VOID, vec![p("value", ty)]));
    }

    // Numeric/bool-to-string formatting, used by the emitter wherever the
    // coercion table calls for a promotion to `string` (spec §4.4) — there is
    // no single instruction for this, so it always goes through one of these.
    for &(suffix, ty) in &[
        ("int", Type::INT),
        ("uint", Type::UINT),
        ("double", Type::DOUBLE),
        ("bool", Type::BOOL),
        ("char", Type::CHAR),
    ] {
        out.push(decl(&format!("{suffix}_to_str"), Type::STRING, vec![p("value", ty)]));
    }

    // Program arguments and ranges.
    out.push(decl("prog_arg_count", Type::INT, vec![]));
    out.push(decl(
        "prog_argument",
        Type::STRING,
        vec![p("index", Type::INT)],
    ));
    out.push(decl(
        "crema_seq",
        Type::list_of(Kind::Int),
        vec![p("start", Type::INT), p("end", Type::INT)],
    ));

    // Math.
    for name in ["floor", "ceiling", "round", "square", "sin", "sqrt", "abs"] {
        out.push(decl(
            &format!("double_{name}"),
            Type::DOUBLE,
            vec![p("value", Type::DOUBLE)],
        ));
    }
    out.push(decl(
        "double_pow",
        Type::DOUBLE,
        vec![p("base", Type::DOUBLE), p("exponent", Type::DOUBLE)],
    ));
    out.push(decl("int_square", Type::INT, vec![p("value", Type::INT)]));
    out.push(decl(
        "int_pow",
        Type::INT,
        vec![p("base", Type::INT), p("exponent", Type::INT)],
    ));
    out.push(decl("int_abs", Type::INT, vec![p("value", Type::INT)]));

    out
}

/// The two runtime symbols the IR builder calls directly (module prelude
/// and foreach lowering) without going through the declaration namespace.
pub const SAVE_ARGS: &str = "save_args";
pub const LIST_LENGTH: &str = "list_length";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_names() {
        let table = declarations();
        let mut names: Vec<_> = table.iter().map(|f| f.name.as_str()).collect();
        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn every_declaration_is_external() {
        for f in declarations() {
            assert!(f.is_external());
        }
    }

    #[test]
    fn int_list_retrieve_has_expected_signature() {
        let f = declarations()
            .iter()
            .find(|f| f.name.as_str() == "int_list_retrieve")
            .unwrap();
        assert_eq!(f.return_ty, Type::INT);
        assert_eq!(f.params.len(), 2);
    }
}

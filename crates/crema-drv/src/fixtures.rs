//! Named AST fixtures loaded by `-f NAME` in lieu of real source text (the
//! lexer/parser are out of scope of this workspace). Each fixture builds an
//! AST directly through `crema_ast`'s constructors, one per scenario of
//! spec.md §8's concrete end-to-end list.

use crema_ast::{
    ArithOp, BinOp, Binding, Block, Expr, FuncDecl, Kind, Literal, Program, RecordDecl, Stmt,
    Type,
};
use crema_util::{Span, Symbol};

fn sym(s: &str) -> Symbol {
    Symbol::intern(s)
}

fn program(stmts: Vec<Stmt>) -> Program {
    Program::new(Block::new(stmts, Span::DUMMY))
}

/// `int a = 3  int b = a + 4  return b` — analysis ok; exits 7.
fn arithmetic() -> Program {
    program(vec![
        Stmt::var_decl(
            Binding::new(sym("a"), Type::INT, Span::DUMMY),
            Some(Expr::literal(Literal::Int(3), Span::DUMMY)),
            Span::DUMMY,
        ),
        Stmt::var_decl(
            Binding::new(sym("b"), Type::INT, Span::DUMMY),
            Some(Expr::binary(
                BinOp::Arith(ArithOp::Add),
                Expr::var(sym("a"), Span::DUMMY),
                Expr::literal(Literal::Int(4), Span::DUMMY),
                Span::DUMMY,
            )),
            Span::DUMMY,
        ),
        Stmt::return_stmt(Some(Expr::var(sym("b"), Span::DUMMY)), Span::DUMMY),
    ])
}

/// `int a  double b = 2.5  a = b` — error: double not assignable to int.
fn type_mismatch() -> Program {
    program(vec![
        Stmt::var_decl(Binding::new(sym("a"), Type::INT, Span::DUMMY), None, Span::DUMMY),
        Stmt::var_decl(
            Binding::new(sym("b"), Type::DOUBLE, Span::DUMMY),
            Some(Expr::literal(Literal::Double(2.5), Span::DUMMY)),
            Span::DUMMY,
        ),
        Stmt::assign_scalar(sym("a"), Expr::var(sym("b"), Span::DUMMY), Span::DUMMY),
    ])
}

/// `int a  double b = a  return b` — up-cast warning; returns 0.0.
fn upcast() -> Program {
    program(vec![
        Stmt::var_decl(Binding::new(sym("a"), Type::INT, Span::DUMMY), None, Span::DUMMY),
        Stmt::var_decl(
            Binding::new(sym("b"), Type::DOUBLE, Span::DUMMY),
            Some(Expr::var(sym("a"), Span::DUMMY)),
            Span::DUMMY,
        ),
        Stmt::return_stmt(Some(Expr::var(sym("b"), Span::DUMMY)), Span::DUMMY),
    ])
}

/// `def int f() { return f() }` — error: recursive function call in f.
fn recursion() -> Program {
    let body = Block::new(
        vec![Stmt::return_stmt(
            Some(Expr::call(sym("f"), vec![], Span::DUMMY)),
            Span::DUMMY,
        )],
        Span::DUMMY,
    );
    program(vec![Stmt::new(
        crema_ast::StmtKind::FuncDecl(FuncDecl::new(sym("f"), Type::INT, vec![], Some(body), Span::DUMMY)),
        Span::DUMMY,
    )])
}

/// `struct Pt { int x  int y }  Pt p  p.x = 5  return p.x` — ok; exits 5.
fn record() -> Program {
    let decl = RecordDecl::new(
        sym("Pt"),
        vec![
            Binding::new(sym("x"), Type::INT, Span::DUMMY),
            Binding::new(sym("y"), Type::INT, Span::DUMMY),
        ],
        Span::DUMMY,
    );
    program(vec![
        Stmt::new(crema_ast::StmtKind::RecordDecl(decl), Span::DUMMY),
        Stmt::var_decl(
            Binding::new(sym("p"), Type::record(sym("Pt")), Span::DUMMY),
            None,
            Span::DUMMY,
        ),
        Stmt::new(
            crema_ast::StmtKind::AssignRecordField {
                record: sym("p"),
                field: sym("x"),
                value: Expr::literal(Literal::Int(5), Span::DUMMY),
            },
            Span::DUMMY,
        ),
        Stmt::return_stmt(
            Some(Expr::record_access(Expr::var(sym("p"), Span::DUMMY), sym("x"), Span::DUMMY)),
            Span::DUMMY,
        ),
    ])
}

/// `int[] xs = [1,2,3]  foreach (xs as v) { int_println(v) }` — prints `1\n2\n3\n`.
fn foreach() -> Program {
    program(vec![
        Stmt::var_decl(
            Binding::new(sym("xs"), Type::list_of(Kind::Int), Span::DUMMY),
            Some(Expr::list_literal(
                vec![
                    Expr::literal(Literal::Int(1), Span::DUMMY),
                    Expr::literal(Literal::Int(2), Span::DUMMY),
                    Expr::literal(Literal::Int(3), Span::DUMMY),
                ],
                Span::DUMMY,
            )),
            Span::DUMMY,
        ),
        Stmt::foreach(
            sym("xs"),
            sym("v"),
            Block::new(
                vec![Stmt::new(
                    crema_ast::StmtKind::Expr(Expr::call(
                        sym("int_println"),
                        vec![Expr::var(sym("v"), Span::DUMMY)],
                        Span::DUMMY,
                    )),
                    Span::DUMMY,
                )],
                Span::DUMMY,
            ),
            Span::DUMMY,
        ),
    ])
}

/// `int[] xs = [1, 2.0]` — error: list contains differing types.
fn heterogeneous_list() -> Program {
    program(vec![Stmt::var_decl(
        Binding::new(sym("xs"), Type::list_of(Kind::Int), Span::DUMMY),
        Some(Expr::list_literal(
            vec![
                Expr::literal(Literal::Int(1), Span::DUMMY),
                Expr::literal(Literal::Double(2.0), Span::DUMMY),
            ],
            Span::DUMMY,
        )),
        Span::DUMMY,
    )])
}

/// `if ("hi") { }` — error: condition cannot evaluate to a boolean.
fn bad_condition() -> Program {
    program(vec![Stmt::if_stmt(
        Expr::literal(Literal::Str("hi".to_string()), Span::DUMMY),
        Block::new(vec![], Span::DUMMY),
        vec![],
        None,
        Span::DUMMY,
    )])
}

/// The names accepted by `-f`, in the order spec.md §8 lists them.
pub const NAMES: &[&str] = &[
    "arithmetic",
    "type_mismatch",
    "upcast",
    "recursion",
    "record",
    "foreach",
    "heterogeneous_list",
    "bad_condition",
];

/// Builds the named fixture's AST, or `None` if `name` isn't one of [`NAMES`].
pub fn load(name: &str) -> Option<Program> {
    match name {
        "arithmetic" => Some(arithmetic()),
        "type_mismatch" => Some(type_mismatch()),
        "upcast" => Some(upcast()),
        "recursion" => Some(recursion()),
        "record" => Some(record()),
        "foreach" => Some(foreach()),
        "heterogeneous_list" => Some(heterogeneous_list()),
        "bad_condition" => Some(bad_condition()),
        _ => None,
    }
}

//! crema-sem - Semantic analysis for Crema (spec §4.3).
//!
//! Consumes a [`crema_ast::Program`] and checks name resolution, typing, and
//! the whole-program recursion restriction, reporting through
//! [`crema_util::diagnostic::Handler`]. On success every expression's type
//! slot ([`crema_ast::Expr::ty`]) is filled in, ready for [`crema_ir`] to
//! consume.

pub mod analysis;
pub mod scope;

pub use analysis::{analyze, SemanticAnalyzer};
pub use scope::{Rib, RibId, RibKind, ScopeTree};

#[cfg(test)]
mod tests {
    use super::*;
    use crema_ast::{
        BinOp, Binding, Block, Expr, FuncDecl, Literal, Program, RecordDecl, Stmt, Type,
    };
    use crema_util::{Handler, Span, Symbol};

    fn sym(s: &str) -> Symbol {
        Symbol::intern(s)
    }

    fn program(stmts: Vec<Stmt>) -> Program {
        Program::new(Block::new(stmts, Span::DUMMY))
    }

    #[test]
    fn arithmetic_program_type_checks() {
        let stmts = vec![
            Stmt::var_decl(
                Binding::new(sym("x"), Type::INT, Span::DUMMY),
                Some(Expr::literal(Literal::Int(1), Span::DUMMY)),
                Span::DUMMY,
            ),
            Stmt::assign_scalar(
                sym("x"),
                Expr::binary(
                    BinOp::Arith(crema_ast::ArithOp::Add),
                    Expr::var(sym("x"), Span::DUMMY),
                    Expr::literal(Literal::Int(2), Span::DUMMY),
                    Span::DUMMY,
                ),
                Span::DUMMY,
            ),
        ];
        let program = program(stmts);
        let handler = Handler::new();
        assert!(analyze(&program, &handler));
        assert!(!handler.has_errors());
    }

    #[test]
    fn type_mismatch_on_assignment_is_an_error() {
        let stmts = vec![
            Stmt::var_decl(
                Binding::new(sym("flag"), Type::BOOL, Span::DUMMY),
                Some(Expr::literal(Literal::Bool(true), Span::DUMMY)),
                Span::DUMMY,
            ),
            Stmt::assign_scalar(
                sym("flag"),
                Expr::literal(Literal::Str("oops".into()), Span::DUMMY),
                Span::DUMMY,
            ),
        ];
        let program = program(stmts);
        let handler = Handler::new();
        assert!(!analyze(&program, &handler));
        assert!(handler.has_errors());
    }

    #[test]
    fn up_cast_warns_but_succeeds() {
        let stmts = vec![
            Stmt::var_decl(
                Binding::new(sym("d"), Type::DOUBLE, Span::DUMMY),
                None,
                Span::DUMMY,
            ),
            Stmt::assign_scalar(sym("d"), Expr::literal(Literal::Int(3), Span::DUMMY), Span::DUMMY),
        ];
        let program = program(stmts);
        let handler = Handler::new();
        assert!(analyze(&program, &handler));
        assert!(!handler.has_errors());
        assert!(handler.warning_count() >= 1);
    }

    #[test]
    fn direct_recursion_is_rejected() {
        let recurse_body = Block::new(
            vec![Stmt::return_stmt(
                Some(Expr::call(sym("recurse"), vec![], Span::DUMMY)),
                Span::DUMMY,
            )],
            Span::DUMMY,
        );
        let stmts = vec![Stmt::new(
            crema_ast::StmtKind::FuncDecl(FuncDecl::new(
                sym("recurse"),
                Type::INT,
                vec![],
                Some(recurse_body),
                Span::DUMMY,
            )),
            Span::DUMMY,
        )];
        let program = program(stmts);
        let handler = Handler::new();
        assert!(!analyze(&program, &handler));
    }

    #[test]
    fn record_field_access_resolves_member_type() {
        let record = RecordDecl::new(
            sym("Point"),
            vec![
                Binding::new(sym("x"), Type::INT, Span::DUMMY),
                Binding::new(sym("y"), Type::INT, Span::DUMMY),
            ],
            Span::DUMMY,
        );
        let stmts = vec![
            Stmt::new(crema_ast::StmtKind::RecordDecl(record), Span::DUMMY),
            Stmt::var_decl(
                Binding::new(sym("p"), Type::record(sym("Point")), Span::DUMMY),
                None,
                Span::DUMMY,
            ),
            Stmt::new(
                crema_ast::StmtKind::AssignRecordField {
                    record: sym("p"),
                    field: sym("x"),
                    value: Expr::literal(Literal::Int(1), Span::DUMMY),
                },
                Span::DUMMY,
            ),
        ];
        let program = program(stmts);
        let handler = Handler::new();
        assert!(analyze(&program, &handler));
    }

    #[test]
    fn foreach_binds_element_type() {
        let stmts = vec![
            Stmt::var_decl(
                Binding::new(sym("xs"), Type::list_of(crema_ast::Kind::Int), Span::DUMMY),
                Some(Expr::list_literal(
                    vec![
                        Expr::literal(Literal::Int(1), Span::DUMMY),
                        Expr::literal(Literal::Int(2), Span::DUMMY),
                    ],
                    Span::DUMMY,
                )),
                Span::DUMMY,
            ),
            Stmt::foreach(
                sym("xs"),
                sym("item"),
                Block::new(
                    vec![Stmt::assign_scalar(
                        sym("item"),
                        Expr::binary(
                            BinOp::Arith(crema_ast::ArithOp::Add),
                            Expr::var(sym("item"), Span::DUMMY),
                            Expr::literal(Literal::Int(1), Span::DUMMY),
                            Span::DUMMY,
                        ),
                        Span::DUMMY,
                    )],
                    Span::DUMMY,
                ),
                Span::DUMMY,
            ),
        ];
        let program = program(stmts);
        let handler = Handler::new();
        assert!(analyze(&program, &handler));
    }

    #[test]
    fn heterogeneous_list_literal_is_an_error() {
        let stmts = vec![Stmt::var_decl(
            Binding::new(sym("xs"), Type::list_of(crema_ast::Kind::Int), Span::DUMMY),
            Some(Expr::list_literal(
                vec![
                    Expr::literal(Literal::Int(1), Span::DUMMY),
                    Expr::literal(Literal::Bool(true), Span::DUMMY),
                ],
                Span::DUMMY,
            )),
            Span::DUMMY,
        )];
        let program = program(stmts);
        let handler = Handler::new();
        assert!(!analyze(&program, &handler));
    }

    #[test]
    fn numeric_condition_is_accepted() {
        let stmts = vec![Stmt::if_stmt(
            Expr::literal(Literal::Int(1), Span::DUMMY),
            Block::new(vec![], Span::DUMMY),
            vec![],
            None,
            Span::DUMMY,
        )];
        let program = program(stmts);
        let handler = Handler::new();
        assert!(analyze(&program, &handler));
    }

    #[test]
    fn string_condition_is_an_error() {
        let stmts = vec![Stmt::if_stmt(
            Expr::literal(Literal::Str("hi".to_string()), Span::DUMMY),
            Block::new(vec![], Span::DUMMY),
            vec![],
            None,
            Span::DUMMY,
        )];
        let program = program(stmts);
        let handler = Handler::new();
        assert!(!analyze(&program, &handler));
    }
}

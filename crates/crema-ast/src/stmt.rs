//! Statement nodes (spec §3 "Statement" row).

use crate::ast::{Binding, Identifier};
use crate::expr::Expr;
use crate::items::{FuncDecl, RecordDecl};
use crema_util::Span;

/// A sequence of statements introducing a fresh scope when analyzed/emitted
/// (spec §4.3 "Block").
#[derive(Debug)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Block { stmts, span }
    }
}

#[derive(Debug)]
pub enum StmtKind {
    VarDecl {
        binding: Binding,
        initializer: Option<Expr>,
    },
    RecordDecl(RecordDecl),
    FuncDecl(FuncDecl),
    AssignScalar {
        target: Identifier,
        value: Expr,
    },
    AssignListElt {
        list: Identifier,
        index: Expr,
        value: Expr,
    },
    AssignRecordField {
        record: Identifier,
        field: Identifier,
        value: Expr,
    },
    If {
        cond: Expr,
        then_block: Block,
        elseifs: Vec<(Expr, Block)>,
        else_block: Option<Block>,
    },
    Foreach {
        list: Identifier,
        binder: Identifier,
        body: Block,
    },
    Return(Option<Expr>),
    /// A bare expression evaluated for its side effects (e.g. a call
    /// statement such as `int_println(v)`).
    Expr(Expr),
}

#[derive(Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    pub fn var_decl(binding: Binding, initializer: Option<Expr>, span: Span) -> Self {
        Stmt::new(
            StmtKind::VarDecl {
                binding,
                initializer,
            },
            span,
        )
    }

    pub fn assign_scalar(target: Identifier, value: Expr, span: Span) -> Self {
        Stmt::new(StmtKind::AssignScalar { target, value }, span)
    }

    pub fn if_stmt(
        cond: Expr,
        then_block: Block,
        elseifs: Vec<(Expr, Block)>,
        else_block: Option<Block>,
        span: Span,
    ) -> Self {
        Stmt::new(
            StmtKind::If {
                cond,
                then_block,
                elseifs,
                else_block,
            },
            span,
        )
    }

    pub fn foreach(list: Identifier, binder: Identifier, body: Block, span: Span) -> Self {
        Stmt::new(StmtKind::Foreach { list, binder, body }, span)
    }

    pub fn return_stmt(value: Option<Expr>, span: Span) -> Self {
        Stmt::new(StmtKind::Return(value), span)
    }
}

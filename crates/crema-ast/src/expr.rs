//! Expression nodes (spec §3 "Expression" row).
//!
//! Every expression carries a mutable `type` slot, filled in by the analyzer
//! and read back by the emitter — spec §4.2's "expression nodes additionally
//! expose `type_of(ctx) -> Type` and a mutable `type` slot". `Cell<Type>` is
//! used instead of `&mut` threading since `Type` is `Copy` and the analyzer
//! walks the tree through shared references.

use crate::ast::{BinOp, Identifier, Literal};
use crate::types::Type;
use crema_util::Span;
use std::cell::Cell;

#[derive(Debug)]
pub enum ExprKind {
    Literal(Literal),
    /// A list literal: `[e1, e2, ...]`.
    ListLiteral(Vec<Expr>),
    /// A bare identifier reference, resolved by the analyzer to a binding.
    VariableAccess(Identifier),
    /// `list[index]`.
    ListAccess { list: Box<Expr>, index: Box<Expr> },
    /// `record.field`.
    RecordAccess {
        record: Box<Expr>,
        field: Identifier,
    },
    /// `callee(args...)`.
    Call {
        callee: Identifier,
        args: Vec<Expr>,
    },
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `!e`.
    Not(Box<Expr>),
    /// Placeholder written by the analyzer when a subexpression could not be
    /// typed at all (distinct from a merely-`Invalid`-typed, otherwise valid
    /// node); never produced by direct AST construction.
    Error,
}

#[derive(Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    ty: Cell<Type>,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr {
            kind,
            span,
            ty: Cell::new(Type::INVALID),
        }
    }

    pub fn ty(&self) -> Type {
        self.ty.get()
    }

    pub fn set_ty(&self, ty: Type) {
        self.ty.set(ty);
    }

    pub fn literal(lit: Literal, span: Span) -> Self {
        Expr::new(ExprKind::Literal(lit), span)
    }

    pub fn var(name: Identifier, span: Span) -> Self {
        Expr::new(ExprKind::VariableAccess(name), span)
    }

    pub fn call(callee: Identifier, args: Vec<Expr>, span: Span) -> Self {
        Expr::new(ExprKind::Call { callee, args }, span)
    }

    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr, span: Span) -> Self {
        Expr::new(
            ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            span,
        )
    }

    pub fn list_access(list: Expr, index: Expr, span: Span) -> Self {
        Expr::new(
            ExprKind::ListAccess {
                list: Box::new(list),
                index: Box::new(index),
            },
            span,
        )
    }

    pub fn record_access(record: Expr, field: Identifier, span: Span) -> Self {
        Expr::new(
            ExprKind::RecordAccess {
                record: Box::new(record),
                field,
            },
            span,
        )
    }

    pub fn list_literal(elements: Vec<Expr>, span: Span) -> Self {
        Expr::new(ExprKind::ListLiteral(elements), span)
    }
}

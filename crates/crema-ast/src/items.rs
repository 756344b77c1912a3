//! Top-level declarations: functions and records (spec §3).

use crate::ast::{Binding, Identifier};
use crate::stmt::Block;
use crate::types::Type;
use crema_util::Span;

/// `{ name, return-type, parameter-list, body? }` (spec §3). `body = None`
/// denotes an external declaration — used for the stdlib/runtime functions
/// injected at the head of the program (spec §4.2 "Stdlib injection").
#[derive(Debug)]
pub struct FuncDecl {
    pub name: Identifier,
    pub return_ty: Type,
    pub params: Vec<Binding>,
    pub body: Option<Block>,
    pub span: Span,
}

impl FuncDecl {
    pub fn new(
        name: Identifier,
        return_ty: Type,
        params: Vec<Binding>,
        body: Option<Block>,
        span: Span,
    ) -> Self {
        FuncDecl {
            name,
            return_ty,
            params,
            body,
            span,
        }
    }

    pub fn is_external(&self) -> bool {
        self.body.is_none()
    }
}

/// `{ name, members }`; member order defines the IR layout (spec §3).
#[derive(Debug)]
pub struct RecordDecl {
    pub name: Identifier,
    pub members: Vec<Binding>,
    pub span: Span,
}

impl RecordDecl {
    pub fn new(name: Identifier, members: Vec<Binding>, span: Span) -> Self {
        RecordDecl {
            name,
            members,
            span,
        }
    }

    pub fn field_index(&self, field: Identifier) -> Option<usize> {
        self.members.iter().position(|m| m.name == field)
    }
}

/// The root of a compilation unit: a single top-level block (spec §3's
/// "Lifecycle": "The AST is built by the parser, owned by the compilation
/// unit"). Function and record declarations appear as statements within it,
/// per spec §3's invariant that functions never nest.
#[derive(Debug)]
pub struct Program {
    pub root: Block,
}

impl Program {
    pub fn new(root: Block) -> Self {
        Program { root }
    }
}

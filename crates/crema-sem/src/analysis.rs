//! The semantic analyzer (spec §4.3).
//!
//! Walks a [`Program`] built by the (external) parser, resolving names,
//! checking types, and reporting diagnostics through a [`Handler`]. Runs in
//! two passes: [`SemanticAnalyzer::collect_decls`] registers every function
//! and record name up front so forward calls resolve, then
//! [`SemanticAnalyzer::analyze_program`] walks statement order, checking
//! variables as they come into scope and function/record bodies in full.

use crate::scope::{RibKind, ScopeTree};
use crema_ast::{
    ArithOp, BinOp, Binding, Block, BitwiseOp, CompareOp, Expr, ExprKind, FuncDecl, Identifier,
    Literal, Program, RecordDecl, Stmt, StmtKind, Type,
};
use crema_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
use crema_util::{Handler, Span};
use std::collections::{HashMap, HashSet};

pub struct SemanticAnalyzer<'ast> {
    scopes: ScopeTree,
    functions: HashMap<Identifier, &'ast FuncDecl>,
    records: HashMap<Identifier, &'ast RecordDecl>,
    /// Stack of enclosing function return types; `Type::VOID` at the
    /// program's implicit top-level "function" so a bare top-level `return;`
    /// is legal.
    return_stack: Vec<Type>,
    handler: &'ast Handler,
    fatal: bool,
}

impl<'ast> SemanticAnalyzer<'ast> {
    pub fn new(handler: &'ast Handler) -> Self {
        SemanticAnalyzer {
            scopes: ScopeTree::new(),
            functions: HashMap::new(),
            records: HashMap::new(),
            return_stack: vec![Type::VOID],
            handler,
            fatal: false,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fatal
    }

    fn error(&mut self, code: DiagnosticCode, message: impl Into<String>, span: Span) {
        self.fatal = true;
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    fn warn(&self, code: DiagnosticCode, message: impl Into<String>, span: Span) {
        DiagnosticBuilder::warning(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    /// Checks `value_ty` against `target_ty` under the assignability rule
    /// (spec §4.1): equal or a strict up-cast is fine (the latter warns),
    /// anything else is a type-mismatch error. Returns whether the
    /// assignment is accepted.
    fn check_assignable(
        &mut self,
        target_ty: Type,
        value_ty: Type,
        what: &str,
        span: Span,
    ) -> bool {
        if value_ty.is_invalid() || target_ty.is_invalid() {
            return false;
        }
        if value_ty == target_ty {
            return true;
        }
        if value_ty.less_than(&target_ty) {
            self.warn(
                DiagnosticCode::W_SEMANTIC_UPCAST,
                format!("implicit up-cast from {} to {} in {}", value_ty, target_ty, what),
                span,
            );
            return true;
        }
        self.error(
            DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
            format!(
                "type mismatch in {}: expected {}, found {}",
                what, target_ty, value_ty
            ),
            span,
        );
        false
    }

    // ---------------------------------------------------------------
    // Pass 1: declaration collection + recursion check
    // ---------------------------------------------------------------

    pub fn collect_decls(&mut self, program: &'ast Program) {
        for func in crema_ast::stdlib::declarations() {
            self.functions.insert(func.name, func);
        }
        for stmt in &program.root.stmts {
            self.collect_stmt_decls(stmt);
        }
        self.check_recursion();
    }

    fn collect_stmt_decls(&mut self, stmt: &'ast Stmt) {
        match &stmt.kind {
            StmtKind::FuncDecl(func) => {
                if self.functions.contains_key(&func.name) || self.records.contains_key(&func.name)
                {
                    self.error(
                        DiagnosticCode::E_SEMANTIC_DUPLICATE_DEF,
                        format!("duplicate definition of `{}`", func.name.as_str()),
                        func.span,
                    );
                } else {
                    self.functions.insert(func.name, func);
                }
            }
            StmtKind::RecordDecl(record) => {
                if self.functions.contains_key(&record.name)
                    || self.records.contains_key(&record.name)
                {
                    self.error(
                        DiagnosticCode::E_SEMANTIC_DUPLICATE_DEF,
                        format!("duplicate definition of `{}`", record.name.as_str()),
                        record.span,
                    );
                } else {
                    self.records.insert(record.name, record);
                }
            }
            _ => {}
        }
    }

    /// Whole-program recursion check (spec §4.3): functions may not call
    /// themselves, directly or through another function. A DFS with a
    /// visited set over the call graph catches both.
    fn check_recursion(&mut self) {
        let mut visited = HashSet::new();
        let names: Vec<Identifier> = self.functions.keys().copied().collect();
        for name in names {
            if !visited.contains(&name) {
                let mut on_stack = Vec::new();
                self.dfs_check(name, &mut visited, &mut on_stack);
            }
        }
    }

    fn dfs_check(
        &mut self,
        name: Identifier,
        visited: &mut HashSet<Identifier>,
        on_stack: &mut Vec<Identifier>,
    ) {
        if on_stack.contains(&name) {
            self.error(
                DiagnosticCode::E_SEMANTIC_RECURSION,
                format!(
                    "recursive call graph through `{}` (top-level functions may not recurse)",
                    name.as_str()
                ),
                self.functions
                    .get(&name)
                    .map(|f| f.span)
                    .unwrap_or(Span::DUMMY),
            );
            return;
        }
        if visited.contains(&name) {
            return;
        }
        visited.insert(name);
        on_stack.push(name);
        let Some(func) = self.functions.get(&name).copied() else {
            on_stack.pop();
            return;
        };
        if let Some(body) = &func.body {
            let mut callees = Vec::new();
            collect_calls(body, &mut callees);
            for callee in callees {
                if self.functions.contains_key(&callee) {
                    self.dfs_check(callee, visited, on_stack);
                }
            }
        }
        on_stack.pop();
    }

    // ---------------------------------------------------------------
    // Pass 2: full analysis
    // ---------------------------------------------------------------

    pub fn analyze_program(&mut self, program: &'ast Program) {
        self.analyze_stmts(&program.root.stmts);
    }

    fn analyze_block(&mut self, block: &'ast Block) {
        self.scopes.enter_scope(RibKind::Block);
        self.analyze_stmts(&block.stmts);
        self.scopes.exit_scope();
    }

    fn analyze_stmts(&mut self, stmts: &'ast [Stmt]) {
        for stmt in stmts {
            self.analyze_stmt(stmt);
        }
    }

    fn analyze_stmt(&mut self, stmt: &'ast Stmt) {
        match &stmt.kind {
            StmtKind::VarDecl {
                binding,
                initializer,
            } => self.analyze_var_decl(binding, initializer.as_ref(), stmt.span),
            StmtKind::RecordDecl(record) => self.analyze_record_decl(record),
            StmtKind::FuncDecl(func) => self.analyze_func_decl(func),
            StmtKind::AssignScalar { target, value } => {
                self.analyze_assign_scalar(*target, value, stmt.span)
            }
            StmtKind::AssignListElt { list, index, value } => {
                self.analyze_assign_list_elt(*list, index, value, stmt.span)
            }
            StmtKind::AssignRecordField {
                record,
                field,
                value,
            } => self.analyze_assign_record_field(*record, *field, value, stmt.span),
            StmtKind::If {
                cond,
                then_block,
                elseifs,
                else_block,
            } => self.analyze_if(cond, then_block, elseifs, else_block.as_ref()),
            StmtKind::Foreach { list, binder, body } => {
                self.analyze_foreach(*list, *binder, body, stmt.span)
            }
            StmtKind::Return(value) => self.analyze_return(value.as_ref(), stmt.span),
            StmtKind::Expr(expr) => {
                self.analyze_expr(expr);
            }
        }
    }

    fn analyze_var_decl(&mut self, binding: &'ast Binding, initializer: Option<&'ast Expr>, span: Span) {
        if let Some(init) = initializer {
            let init_ty = self.analyze_expr(init);
            self.check_assignable(binding.ty, init_ty, "variable initializer", init.span);
        }
        if let Some(name) = binding.ty.record_name {
            if !self.records.contains_key(&name) {
                self.error(
                    DiagnosticCode::E_SEMANTIC_UNDEFINED_VAR,
                    format!("undefined record type `{}`", name.as_str()),
                    span,
                );
            }
        }
        if self.functions.contains_key(&binding.name) {
            self.error(
                DiagnosticCode::E_SEMANTIC_DUPLICATE_DEF,
                format!("`{}` is already declared as a function", binding.name.as_str()),
                span,
            );
            return;
        }
        if !self.scopes.declare(binding.clone()) {
            self.error(
                DiagnosticCode::E_SEMANTIC_DUPLICATE_DEF,
                format!("`{}` is already declared in this scope", binding.name.as_str()),
                span,
            );
        }
    }

    fn analyze_record_decl(&mut self, _record: &'ast RecordDecl) {
        // Registered in pass 1; members carry no executable code to check.
    }

    fn analyze_func_decl(&mut self, func: &'ast FuncDecl) {
        let Some(body) = &func.body else {
            return;
        };
        self.scopes.enter_scope(RibKind::Function);
        for param in &func.params {
            if self.functions.contains_key(&param.name) {
                self.error(
                    DiagnosticCode::E_SEMANTIC_DUPLICATE_DEF,
                    format!("`{}` is already declared as a function", param.name.as_str()),
                    param.span,
                );
                continue;
            }
            if !self.scopes.declare(param.clone()) {
                self.error(
                    DiagnosticCode::E_SEMANTIC_DUPLICATE_DEF,
                    format!("duplicate parameter `{}`", param.name.as_str()),
                    param.span,
                );
            }
        }
        self.return_stack.push(func.return_ty);
        self.analyze_stmts(&body.stmts);
        self.return_stack.pop();
        self.scopes.exit_scope();
    }

    fn analyze_assign_scalar(&mut self, target: Identifier, value: &'ast Expr, span: Span) {
        let value_ty = self.analyze_expr(value);
        match self.scopes.resolve(target).cloned() {
            Some(binding) => {
                self.check_assignable(binding.ty, value_ty, "assignment", span);
            }
            None => self.error(
                DiagnosticCode::E_SEMANTIC_UNDEFINED_VAR,
                format!("undefined variable `{}`", target.as_str()),
                span,
            ),
        }
    }

    fn analyze_assign_list_elt(
        &mut self,
        list: Identifier,
        index: &'ast Expr,
        value: &'ast Expr,
        span: Span,
    ) {
        let index_ty = self.analyze_expr(index);
        let value_ty = self.analyze_expr(value);
        if !is_index_type(&index_ty) {
            self.error(
                DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                format!("list index must be int or uint, found {}", index_ty),
                index.span,
            );
        }
        match self.scopes.resolve(list).cloned() {
            Some(binding) => match binding.ty.element_type() {
                Some(elem_ty) => {
                    self.check_assignable(elem_ty, value_ty, "list element assignment", span);
                }
                None => self.error(
                    DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                    format!("`{}` is not a list", list.as_str()),
                    span,
                ),
            },
            None => self.error(
                DiagnosticCode::E_SEMANTIC_UNDEFINED_VAR,
                format!("undefined variable `{}`", list.as_str()),
                span,
            ),
        }
    }

    fn analyze_assign_record_field(
        &mut self,
        record: Identifier,
        field: Identifier,
        value: &'ast Expr,
        span: Span,
    ) {
        let value_ty = self.analyze_expr(value);
        let Some(binding) = self.scopes.resolve(record).cloned() else {
            self.error(
                DiagnosticCode::E_SEMANTIC_UNDEFINED_VAR,
                format!("undefined variable `{}`", record.as_str()),
                span,
            );
            return;
        };
        let Some(field_ty) = self.record_field_type(binding.ty, field, span) else {
            return;
        };
        self.check_assignable(field_ty, value_ty, "record field assignment", span);
    }

    fn record_field_type(&mut self, record_ty: Type, field: Identifier, span: Span) -> Option<Type> {
        let Some(name) = record_ty.record_name else {
            self.error(
                DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                format!("{} is not a record type", record_ty),
                span,
            );
            return None;
        };
        let Some(decl) = self.records.get(&name).copied() else {
            self.error(
                DiagnosticCode::E_SEMANTIC_UNDEFINED_VAR,
                format!("undefined record type `{}`", name.as_str()),
                span,
            );
            return None;
        };
        match decl.field_index(field) {
            Some(idx) => Some(decl.members[idx].ty),
            None => {
                self.error(
                    DiagnosticCode::E_SEMANTIC_UNDEFINED_VAR,
                    format!("record `{}` has no field `{}`", name.as_str(), field.as_str()),
                    span,
                );
                None
            }
        }
    }

    fn analyze_if(
        &mut self,
        cond: &'ast Expr,
        then_block: &'ast Block,
        elseifs: &'ast [(Expr, Block)],
        else_block: Option<&'ast Block>,
    ) {
        self.check_condition(cond);
        self.analyze_block(then_block);
        for (elseif_cond, elseif_block) in elseifs {
            self.check_condition(elseif_cond);
            self.analyze_block(elseif_block);
        }
        if let Some(else_block) = else_block {
            self.analyze_block(else_block);
        }
    }

    fn check_condition(&mut self, cond: &'ast Expr) {
        let ty = self.analyze_expr(cond);
        let ok = !ty.is_list
            && ty.record_name.is_none()
            && matches!(
                ty.kind,
                crema_ast::Kind::Bool | crema_ast::Kind::Int | crema_ast::Kind::UInt | crema_ast::Kind::Double
            );
        if !ok {
            self.error(
                DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                format!("condition must be bool, int, uint, or double, found {}", ty),
                cond.span,
            );
        }
    }

    fn analyze_foreach(&mut self, list: Identifier, binder: Identifier, body: &'ast Block, span: Span) {
        let Some(binding) = self.scopes.resolve(list).cloned() else {
            self.error(
                DiagnosticCode::E_SEMANTIC_UNDEFINED_VAR,
                format!("undefined variable `{}`", list.as_str()),
                span,
            );
            return;
        };
        let Some(elem_ty) = binding.ty.element_type() else {
            self.error(
                DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                format!("`{}` is not a list", list.as_str()),
                span,
            );
            return;
        };
        self.scopes.enter_scope(RibKind::Block);
        self.scopes.declare(Binding::new(binder, elem_ty, span));
        self.analyze_stmts(&body.stmts);
        self.scopes.exit_scope();
    }

    fn analyze_return(&mut self, value: Option<&'ast Expr>, span: Span) {
        let expected = *self.return_stack.last().expect("return_stack never empty");
        match value {
            Some(expr) => {
                let ty = self.analyze_expr(expr);
                self.check_assignable(expected, ty, "return value", expr.span);
            }
            None => {
                if expected != Type::VOID {
                    self.error(
                        DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                        format!("missing return value, expected {}", expected),
                        span,
                    );
                }
            }
        }
    }

    // ---------------------------------------------------------------
    // Expressions
    // ---------------------------------------------------------------

    fn analyze_expr(&mut self, expr: &'ast Expr) -> Type {
        let ty = match &expr.kind {
            ExprKind::Literal(lit) => literal_type(lit),
            ExprKind::ListLiteral(elements) => self.analyze_list_literal(elements, expr.span),
            ExprKind::VariableAccess(name) => self.analyze_var_access(*name, expr.span),
            ExprKind::ListAccess { list, index } => self.analyze_list_access(list, index),
            ExprKind::RecordAccess { record, field } => self.analyze_record_access(record, *field),
            ExprKind::Call { callee, args } => self.analyze_call(*callee, args, expr.span),
            ExprKind::Binary { op, lhs, rhs } => self.analyze_binary(*op, lhs, rhs, expr.span),
            ExprKind::Not(inner) => {
                let inner_ty = self.analyze_expr(inner);
                if inner_ty != Type::BOOL {
                    self.error(
                        DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                        format!("`!` requires bool, found {}", inner_ty),
                        inner.span,
                    );
                    Type::INVALID
                } else {
                    Type::BOOL
                }
            }
            ExprKind::Error => Type::INVALID,
        };
        expr.set_ty(ty);
        ty
    }

    fn analyze_list_literal(&mut self, elements: &'ast [Expr], span: Span) -> Type {
        if elements.is_empty() {
            self.error(
                DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                "empty list literal has no element type",
                span,
            );
            return Type::INVALID;
        }
        let mut elem_tys = elements.iter().map(|e| self.analyze_expr(e));
        let first = elem_tys.next().unwrap();
        if first.is_list {
            self.error(
                DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                "nested list literals are not supported",
                elements[0].span,
            );
            return Type::INVALID;
        }
        for (idx, ty) in elem_tys.enumerate() {
            if ty != first {
                self.error(
                    DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                    format!(
                        "heterogeneous list literal: element 0 has type {} but element {} has type {}",
                        first,
                        idx + 1,
                        ty
                    ),
                    elements[idx + 1].span,
                );
                return Type::INVALID;
            }
        }
        Type {
            kind: first.kind,
            is_list: true,
            record_name: first.record_name,
        }
    }

    fn analyze_var_access(&mut self, name: Identifier, span: Span) -> Type {
        match self.scopes.resolve(name) {
            Some(binding) => binding.ty,
            None => {
                self.error(
                    DiagnosticCode::E_SEMANTIC_UNDEFINED_VAR,
                    format!("undefined variable `{}`", name.as_str()),
                    span,
                );
                Type::INVALID
            }
        }
    }

    fn analyze_list_access(&mut self, list: &'ast Expr, index: &'ast Expr) -> Type {
        let list_ty = self.analyze_expr(list);
        let index_ty = self.analyze_expr(index);
        if !is_index_type(&index_ty) {
            self.error(
                DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                format!("list index must be int or uint, found {}", index_ty),
                index.span,
            );
        }
        match list_ty.element_type() {
            Some(elem_ty) => elem_ty,
            None => {
                if !list_ty.is_invalid() {
                    self.error(
                        DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                        format!("cannot index into non-list type {}", list_ty),
                        list.span,
                    );
                }
                Type::INVALID
            }
        }
    }

    fn analyze_record_access(&mut self, record: &'ast Expr, field: Identifier) -> Type {
        let record_ty = self.analyze_expr(record);
        if record_ty.is_invalid() {
            return Type::INVALID;
        }
        self.record_field_type(record_ty, field, record.span)
            .unwrap_or(Type::INVALID)
    }

    fn analyze_call(&mut self, callee: Identifier, args: &'ast [Expr], span: Span) -> Type {
        let arg_tys: Vec<Type> = args.iter().map(|a| self.analyze_expr(a)).collect();
        let Some(func) = self.functions.get(&callee).copied() else {
            self.error(
                DiagnosticCode::E_SEMANTIC_UNDEFINED_FN,
                format!("undefined function `{}`", callee.as_str()),
                span,
            );
            return Type::INVALID;
        };
        if func.params.len() != args.len() {
            self.error(
                DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                format!(
                    "`{}` expects {} argument(s), found {}",
                    callee.as_str(),
                    func.params.len(),
                    args.len()
                ),
                span,
            );
            return func.return_ty;
        }
        for (i, (param, arg_ty)) in func.params.iter().zip(arg_tys.iter()).enumerate() {
            self.check_assignable(
                param.ty,
                *arg_ty,
                &format!("argument {} of `{}`", i + 1, callee.as_str()),
                args[i].span,
            );
        }
        func.return_ty
    }

    fn analyze_binary(&mut self, op: BinOp, lhs: &'ast Expr, rhs: &'ast Expr, span: Span) -> Type {
        let lhs_ty = self.analyze_expr(lhs);
        let rhs_ty = self.analyze_expr(rhs);
        if lhs_ty.is_invalid() || rhs_ty.is_invalid() {
            return Type::INVALID;
        }
        match op {
            BinOp::Arith(arith) => self.check_numeric_binop(arith_name(arith), lhs_ty, rhs_ty, span),
            BinOp::Bitwise(bw) => self.check_integral_binop(bitwise_name(bw), lhs_ty, rhs_ty, span),
            BinOp::Logical(_) => {
                let comparable = Type::larger(&lhs_ty, &rhs_ty);
                if comparable.is_invalid() {
                    self.error(
                        DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                        format!("logical operator requires mutually comparable operands, found {} and {}", lhs_ty, rhs_ty),
                        span,
                    );
                    return Type::INVALID;
                }
                Type::BOOL
            }
            BinOp::Compare(cmp) => self.check_compare(cmp, lhs_ty, rhs_ty, span),
        }
    }

    fn check_numeric_binop(&mut self, op_name: &str, lhs: Type, rhs: Type, span: Span) -> Type {
        let result = Type::larger(&lhs, &rhs);
        if result.is_invalid() || result.is_list || result.kind == crema_ast::Kind::Bool {
            self.error(
                DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                format!("`{}` is not defined for {} and {}", op_name, lhs, rhs),
                span,
            );
            return Type::INVALID;
        }
        result
    }

    fn check_integral_binop(&mut self, op_name: &str, lhs: Type, rhs: Type, span: Span) -> Type {
        if !is_integral(&lhs) || !is_integral(&rhs) {
            self.error(
                DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                format!("`{}` requires integral operands, found {} and {}", op_name, lhs, rhs),
                span,
            );
            return Type::INVALID;
        }
        Type::larger(&lhs, &rhs)
    }

    fn check_compare(&mut self, op: CompareOp, lhs: Type, rhs: Type, span: Span) -> Type {
        let comparable = Type::larger(&lhs, &rhs);
        if comparable.is_invalid() {
            self.error(
                DiagnosticCode::E_SEMANTIC_TYPE_MISMATCH,
                format!("cannot compare {} and {}", lhs, rhs),
                span,
            );
            return Type::INVALID;
        }
        let _ = op;
        Type::BOOL
    }
}

fn is_index_type(ty: &Type) -> bool {
    *ty == Type::UINT || (!ty.is_list && ty.record_name.is_none() && ty.less_or_equal(&Type::INT))
}

fn is_integral(ty: &Type) -> bool {
    !ty.is_list
        && ty.record_name.is_none()
        && matches!(
            ty.kind,
            crema_ast::Kind::Int | crema_ast::Kind::UInt | crema_ast::Kind::Char | crema_ast::Kind::Bool
        )
}

fn literal_type(lit: &Literal) -> Type {
    match lit {
        Literal::Int(_) => Type::INT,
        Literal::UInt(_) => Type::UINT,
        Literal::Double(_) => Type::DOUBLE,
        Literal::Bool(_) => Type::BOOL,
        Literal::Char(_) => Type::CHAR,
        Literal::Str(_) => Type::STRING,
    }
}

fn arith_name(op: ArithOp) -> &'static str {
    match op {
        ArithOp::Add => "+",
        ArithOp::Sub => "-",
        ArithOp::Mul => "*",
        ArithOp::Div => "/",
        ArithOp::Rem => "%",
    }
}

fn bitwise_name(op: BitwiseOp) -> &'static str {
    match op {
        BitwiseOp::And => "&",
        BitwiseOp::Or => "|",
        BitwiseOp::Xor => "^",
    }
}

/// Collects every callee name reached by a direct `Call` expression within
/// `block`, for the recursion check's call graph.
fn collect_calls(block: &Block, out: &mut Vec<Identifier>) {
    for stmt in &block.stmts {
        collect_calls_stmt(stmt, out);
    }
}

fn collect_calls_stmt(stmt: &Stmt, out: &mut Vec<Identifier>) {
    match &stmt.kind {
        StmtKind::VarDecl { initializer, .. } => {
            if let Some(e) = initializer {
                collect_calls_expr(e, out);
            }
        }
        StmtKind::RecordDecl(_) | StmtKind::FuncDecl(_) => {}
        StmtKind::AssignScalar { value, .. } => collect_calls_expr(value, out),
        StmtKind::AssignListElt { index, value, .. } => {
            collect_calls_expr(index, out);
            collect_calls_expr(value, out);
        }
        StmtKind::AssignRecordField { value, .. } => collect_calls_expr(value, out),
        StmtKind::If {
            cond,
            then_block,
            elseifs,
            else_block,
        } => {
            collect_calls_expr(cond, out);
            collect_calls(then_block, out);
            for (c, b) in elseifs {
                collect_calls_expr(c, out);
                collect_calls(b, out);
            }
            if let Some(b) = else_block {
                collect_calls(b, out);
            }
        }
        StmtKind::Foreach { body, .. } => collect_calls(body, out),
        StmtKind::Return(value) => {
            if let Some(e) = value {
                collect_calls_expr(e, out);
            }
        }
        StmtKind::Expr(e) => collect_calls_expr(e, out),
    }
}

fn collect_calls_expr(expr: &Expr, out: &mut Vec<Identifier>) {
    match &expr.kind {
        ExprKind::Call { callee, args } => {
            out.push(*callee);
            for arg in args {
                collect_calls_expr(arg, out);
            }
        }
        ExprKind::ListLiteral(elements) => {
            for e in elements {
                collect_calls_expr(e, out);
            }
        }
        ExprKind::ListAccess { list, index } => {
            collect_calls_expr(list, out);
            collect_calls_expr(index, out);
        }
        ExprKind::RecordAccess { record, .. } => collect_calls_expr(record, out),
        ExprKind::Binary { lhs, rhs, .. } => {
            collect_calls_expr(lhs, out);
            collect_calls_expr(rhs, out);
        }
        ExprKind::Not(inner) => collect_calls_expr(inner, out),
        ExprKind::Literal(_) | ExprKind::VariableAccess(_) | ExprKind::Error => {}
    }
}

/// Runs both analysis passes over `program`, returning `true` on success (no
/// fatal diagnostics were raised).
pub fn analyze(program: &Program, handler: &Handler) -> bool {
    let mut analyzer = SemanticAnalyzer::new(handler);
    analyzer.collect_decls(program);
    analyzer.analyze_program(program);
    !analyzer.has_errors()
}

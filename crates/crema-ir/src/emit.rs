//! Lowers an analyzed [`Program`] into a [`Module`] (spec §4.4).
//!
//! Consumes the tree exactly as [`crema_sem`] leaves it: every [`Expr`]'s
//! type slot already filled in, every name already resolved to a unique
//! declaration. This pass never rejects a program — by the time it runs,
//! [`crema_sem::analyze`] has already ruled out every error it reports.
//! Anything that still goes wrong here (an unsupported coercion, a missing
//! runtime declaration) is an internal compiler bug, reported through
//! [`DiagnosticCode::E_EMIT_INTERNAL`] rather than panicking.

use crate::builder::FunctionBuilder;
use crate::ir::{
    CoerceKind, ConstValue, Instruction, IrBinOp, LocalId, Module, Operand, RecordLayout, Terminator,
};
use crema_ast::{
    ArithOp, BinOp, BitwiseOp, Block, CompareOp, Expr, ExprKind, FuncDecl, Identifier, Kind,
    Literal, Program, Stmt, StmtKind, Type,
};
use crema_util::diagnostic::DiagnosticCode;
use crema_util::{Handler, Span, Symbol};
use std::collections::HashMap;

/// Name -> local mapping for one function, with block-scoped shadowing.
struct VarScope {
    ribs: Vec<HashMap<Identifier, LocalId>>,
}

impl VarScope {
    fn new() -> Self {
        VarScope { ribs: vec![HashMap::new()] }
    }

    fn enter(&mut self) {
        self.ribs.push(HashMap::new());
    }

    fn exit(&mut self) {
        self.ribs.pop();
    }

    fn declare(&mut self, name: Identifier, local: LocalId) {
        self.ribs.last_mut().expect("scope never empty").insert(name, local);
    }

    fn resolve(&self, name: Identifier) -> LocalId {
        for rib in self.ribs.iter().rev() {
            if let Some(local) = rib.get(&name) {
                return *local;
            }
        }
        panic!("internal: unresolved variable `{}` reached the emitter", name.as_str());
    }
}

struct Emitter<'a> {
    module: Module,
    handler: &'a Handler,
}

impl<'a> Emitter<'a> {
    fn bug(&self, message: impl Into<String>, span: Span) {
        crema_util::diagnostic::DiagnosticBuilder::error(message)
            .code(DiagnosticCode::E_EMIT_INTERNAL)
            .span(span)
            .emit(self.handler);
    }
}

/// Runs the emitter over `program`, returning the lowered module. Diagnostics
/// for internal errors (there should never be any, given an analyzed
/// program) are reported through `handler`.
pub fn emit_module(program: &Program, handler: &Handler) -> Module {
    let mut emitter = Emitter {
        module: Module::new(),
        handler,
    };

    for func in crema_ast::stdlib::declarations() {
        let fb = FunctionBuilder::new(func.name, func.return_ty);
        let mut b = fb;
        let params = func
            .params
            .iter()
            .map(|param| b.add_local(param.ty, Some(param.name)))
            .collect();
        let built = b.finish(params, true);
        emitter.module.push_function(built);
    }

    for stmt in &program.root.stmts {
        if let StmtKind::RecordDecl(record) = &stmt.kind {
            let fields = record.members.iter().map(|m| (m.name, m.ty)).collect();
            emitter.module.records.insert(record.name, RecordLayout { fields });
        }
    }

    for stmt in &program.root.stmts {
        if let StmtKind::FuncDecl(func) = &stmt.kind {
            if !func.is_external() {
                let built = emitter.emit_function(func);
                emitter.module.push_function(built);
            }
        }
    }

    let entry = emitter.emit_entry(&program.root.stmts);
    emitter.module.push_function(entry);

    emitter.module
}

impl<'a> Emitter<'a> {
    fn emit_function(&mut self, decl: &FuncDecl) -> crate::ir::Function {
        let mut b = FunctionBuilder::new(decl.name, decl.return_ty);
        let mut scope = VarScope::new();
        let params = decl
            .params
            .iter()
            .map(|param| {
                let local = b.add_local(param.ty, Some(param.name));
                scope.declare(param.name, local);
                local
            })
            .collect();
        let body = decl.body.as_ref().expect("non-external FuncDecl always has a body");
        self.emit_stmts(&mut b, &mut scope, &body.stmts);
        b.finish(params, false)
    }

    /// The program's implicit entry point: `int64 main(int64 argc, char**
    /// argv)` (spec §6). Calls `save_args`, then runs the top-level
    /// statements (func/record decls are skipped — they were already
    /// emitted/registered elsewhere), finally returning 0 unless a top-level
    /// `return` already produced a value.
    fn emit_entry(&mut self, stmts: &[Stmt]) -> crate::ir::Function {
        let mut b = FunctionBuilder::new(Symbol::intern("main"), Type::INT);
        let mut scope = VarScope::new();
        let argc = b.add_local(Type::INT, Some(Symbol::intern("argc")));
        // `char** argv` has no Crema-level type; modeled as a string list
        // purely so the builder has a concrete `Type` to print, never
        // type-checked against Crema's lattice.
        let argv = b.add_local(Type::list_of(Kind::Char), Some(Symbol::intern("argv")));
        b.push(Instruction::Call {
            dest: None,
            callee: Symbol::intern(crema_ast::stdlib::SAVE_ARGS),
            args: vec![Operand::Local(argc), Operand::Local(argv)],
        });

        let top_level: Vec<&Stmt> = stmts
            .iter()
            .filter(|s| !matches!(s.kind, StmtKind::FuncDecl(_) | StmtKind::RecordDecl(_)))
            .collect();
        for stmt in top_level {
            self.emit_stmt(&mut b, &mut scope, stmt);
        }

        // Fallthrough (no top-level `return` fired): implicit `return 0`.
        // A no-op if a `return` already terminated the current block.
        b.terminate(Terminator::Return(Some(Operand::Const(ConstValue::Int(0)))));
        b.finish(vec![argc, argv], false)
    }

    fn emit_stmts(&mut self, b: &mut FunctionBuilder, scope: &mut VarScope, stmts: &[Stmt]) {
        for stmt in stmts {
            self.emit_stmt(b, scope, stmt);
        }
    }

    fn emit_stmt(&mut self, b: &mut FunctionBuilder, scope: &mut VarScope, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::VarDecl { binding, initializer } => {
                let local = b.add_local(binding.ty, Some(binding.name));
                scope.declare(binding.name, local);
                match initializer {
                    Some(init) => {
                        let value = self.emit_expr(b, scope, init);
                        let value = self.coerce(b, value, init.ty(), binding.ty, init.span);
                        b.push(Instruction::Copy { dest: local, src: value });
                    }
                    None => {
                        // Lists and strings default to an empty runtime-
                        // constructed value; scalars are left undefined,
                        // matching the language's "no implicit zero value"
                        // stance for plain variables.
                        if let Some(ctor) = list_constructor_name(&binding.ty) {
                            b.push(Instruction::Call {
                                dest: Some(local),
                                callee: Symbol::intern(ctor),
                                args: vec![],
                            });
                        }
                    }
                }
            }
            StmtKind::RecordDecl(_) | StmtKind::FuncDecl(_) => {}
            StmtKind::AssignScalar { target, value } => {
                let local = scope.resolve(*target);
                let target_ty = b.local_type(local);
                let operand = self.emit_expr(b, scope, value);
                let operand = self.coerce(b, operand, value.ty(), target_ty, value.span);
                b.push(Instruction::Copy { dest: local, src: operand });
            }
            StmtKind::AssignListElt { list, index, value } => {
                let list_local = scope.resolve(*list);
                let list_ty = b.local_type(list_local);
                let elem_ty = list_ty.element_type().unwrap_or(Type::INVALID);
                let index_op = self.emit_expr(b, scope, index);
                let value_op = self.emit_expr(b, scope, value);
                let value_op = self.coerce(b, value_op, value.ty(), elem_ty, value.span);
                let callee = list_insert_name(&list_ty, stmt.span, self);
                b.push(Instruction::Call {
                    dest: None,
                    callee: Symbol::intern(&callee),
                    args: vec![Operand::Local(list_local), index_op, value_op],
                });
            }
            StmtKind::AssignRecordField { record, field, value } => {
                let record_local = scope.resolve(*record);
                let record_ty = b.local_type(record_local);
                let layout_name = record_ty.record_name.expect("analyzer guarantees record type");
                let field_index = self
                    .module
                    .records
                    .get(&layout_name)
                    .and_then(|layout| layout.field_index(*field))
                    .unwrap_or(0) as u32;
                let field_ty = self
                    .module
                    .records
                    .get(&layout_name)
                    .map(|layout| layout.fields[field_index as usize].1)
                    .unwrap_or(Type::INVALID);
                let value_op = self.emit_expr(b, scope, value);
                let value_op = self.coerce(b, value_op, value.ty(), field_ty, value.span);
                b.push(Instruction::FieldSet {
                    record: record_local,
                    field_index,
                    value: value_op,
                });
            }
            StmtKind::If { cond, then_block, elseifs, else_block } => {
                self.emit_if(b, scope, cond, then_block, elseifs, else_block.as_ref());
            }
            StmtKind::Foreach { list, binder, body } => {
                self.emit_foreach(b, scope, *list, *binder, body);
            }
            StmtKind::Return(value) => {
                let operand = value.as_ref().map(|v| {
                    let op = self.emit_expr(b, scope, v);
                    self.coerce(b, op, v.ty(), b_return_ty(b), v.span)
                });
                b.terminate(Terminator::Return(operand));
            }
            StmtKind::Expr(expr) => {
                self.emit_expr(b, scope, expr);
            }
        }
    }

    /// `if`/`elseif`/`else` lowers to a chain of conditional branches into
    /// fresh blocks, all rejoining at one `merge` block (spec §4.4, §3's
    /// structured-control-flow invariant — there's exactly one join point).
    fn emit_if(
        &mut self,
        b: &mut FunctionBuilder,
        scope: &mut VarScope,
        cond: &Expr,
        then_block: &Block,
        elseifs: &[(Expr, Block)],
        else_block: Option<&Block>,
    ) {
        let merge = b.new_block();

        let cond_op = self.emit_expr(b, scope, cond);
        let cond_op = self.coerce_to_condition(b, cond_op, cond.ty());
        let then_bb = b.new_block();
        let next_cond_bb = b.new_block();
        b.terminate(Terminator::CondBr { cond: cond_op, then_block: then_bb, else_block: next_cond_bb });

        b.set_current_block(then_bb);
        scope.enter();
        self.emit_stmts(b, scope, &then_block.stmts);
        scope.exit();
        b.terminate(Terminator::Goto { target: merge });

        let mut current = next_cond_bb;
        for (elseif_cond, elseif_body) in elseifs {
            b.set_current_block(current);
            let cond_op = self.emit_expr(b, scope, elseif_cond);
            let cond_op = self.coerce_to_condition(b, cond_op, elseif_cond.ty());
            let body_bb = b.new_block();
            let next_bb = b.new_block();
            b.terminate(Terminator::CondBr { cond: cond_op, then_block: body_bb, else_block: next_bb });

            b.set_current_block(body_bb);
            scope.enter();
            self.emit_stmts(b, scope, &elseif_body.stmts);
            scope.exit();
            b.terminate(Terminator::Goto { target: merge });

            current = next_bb;
        }

        b.set_current_block(current);
        if let Some(else_body) = else_block {
            scope.enter();
            self.emit_stmts(b, scope, &else_body.stmts);
            scope.exit();
        }
        b.terminate(Terminator::Goto { target: merge });

        b.set_current_block(merge);
    }

    /// Lowers a condition to the `Bool` a `CondBr` needs. `Bool` conditions
    /// pass through unchanged; `Int`/`UInt`/`Double` conditions (spec §4.3
    /// allows all three) compare not-equal against the appropriate zero
    /// (spec §4.4).
    fn coerce_to_condition(&mut self, b: &mut FunctionBuilder, cond: Operand, ty: Type) -> Operand {
        if ty.kind == Kind::Bool {
            return cond;
        }
        let (op, zero) = if ty.kind == Kind::Double {
            (IrBinOp::NeDouble, ConstValue::Double(0.0))
        } else {
            (IrBinOp::NeInt, ConstValue::Int(0))
        };
        let dest = b.add_local(Type::BOOL, None);
        b.push(Instruction::BinaryOp { dest, op, lhs: cond, rhs: Operand::Const(zero) });
        Operand::Local(dest)
    }

    /// `foreach item in list { body }` lowers to a counted loop: a
    /// synthesized index local compared against `list_length`, an element
    /// fetched through the per-kind `*_list_retrieve`, and an increment
    /// before looping back (spec §4.4).
    fn emit_foreach(
        &mut self,
        b: &mut FunctionBuilder,
        scope: &mut VarScope,
        list: Identifier,
        binder: Identifier,
        body: &Block,
    ) {
        let list_local = scope.resolve(list);
        let list_ty = b.local_type(list_local);
        let elem_ty = list_ty.element_type().unwrap_or(Type::INVALID);

        let index_local = b.add_local(Type::INT, None);
        b.push(Instruction::Const { dest: index_local, value: ConstValue::Int(0) });

        let len_local = b.add_local(Type::INT, None);
        b.push(Instruction::Call {
            dest: Some(len_local),
            callee: Symbol::intern(crema_ast::stdlib::LIST_LENGTH),
            args: vec![Operand::Local(list_local)],
        });

        let header = b.new_block();
        b.terminate(Terminator::Goto { target: header });
        b.set_current_block(header);

        let cmp_local = b.add_local(Type::BOOL, None);
        b.push(Instruction::BinaryOp {
            dest: cmp_local,
            op: IrBinOp::LtInt,
            lhs: Operand::Local(index_local),
            rhs: Operand::Local(len_local),
        });

        let body_bb = b.new_block();
        let after_bb = b.new_block();
        b.terminate(Terminator::CondBr {
            cond: Operand::Local(cmp_local),
            then_block: body_bb,
            else_block: after_bb,
        });

        b.set_current_block(body_bb);
        let elem_local = b.add_local(elem_ty, Some(binder));
        let retrieve = list_retrieve_name(&list_ty, Span::DUMMY, self);
        b.push(Instruction::Call {
            dest: Some(elem_local),
            callee: Symbol::intern(&retrieve),
            args: vec![Operand::Local(list_local), Operand::Local(index_local)],
        });
        scope.enter();
        scope.declare(binder, elem_local);
        self.emit_stmts(b, scope, &body.stmts);
        scope.exit();

        let one_local = b.add_local(Type::INT, None);
        b.push(Instruction::Const { dest: one_local, value: ConstValue::Int(1) });
        b.push(Instruction::BinaryOp {
            dest: index_local,
            op: IrBinOp::AddInt,
            lhs: Operand::Local(index_local),
            rhs: Operand::Local(one_local),
        });
        b.terminate(Terminator::Goto { target: header });

        b.set_current_block(after_bb);
    }

    fn emit_expr(&mut self, b: &mut FunctionBuilder, scope: &mut VarScope, expr: &Expr) -> Operand {
        match &expr.kind {
            ExprKind::Literal(Literal::Str(s)) => self.emit_string_literal(b, s),
            ExprKind::Literal(lit) => Operand::Const(const_value(lit)),
            ExprKind::ListLiteral(elements) => self.emit_list_literal(b, scope, elements, expr.ty()),
            ExprKind::VariableAccess(name) => Operand::Local(scope.resolve(*name)),
            ExprKind::ListAccess { list, index } => self.emit_list_access(b, scope, list, index),
            ExprKind::RecordAccess { record, field } => self.emit_record_access(b, scope, record, *field),
            ExprKind::Call { callee, args } => self.emit_call(b, scope, *callee, args, expr.ty()),
            ExprKind::Binary { op, lhs, rhs } => self.emit_binary(b, scope, *op, lhs, rhs),
            ExprKind::Not(inner) => {
                let operand = self.emit_expr(b, scope, inner);
                let dest = b.add_local(Type::BOOL, None);
                b.push(Instruction::Not { dest, operand });
                Operand::Local(dest)
            }
            ExprKind::Error => Operand::Const(ConstValue::Int(0)),
        }
    }

    /// Builds a string value from a literal at compile time. `str_create`
    /// plus one `str_append` per character is correct but not the only
    /// legal lowering — a future pass could fold this into a single
    /// runtime call without changing the observable result.
    fn emit_string_literal(&mut self, b: &mut FunctionBuilder, s: &str) -> Operand {
        let dest = b.add_local(Type::STRING, None);
        b.push(Instruction::Call {
            dest: Some(dest),
            callee: Symbol::intern("str_create"),
            args: vec![],
        });
        for ch in s.chars() {
            b.push(Instruction::Call {
                dest: None,
                callee: Symbol::intern("str_append"),
                args: vec![Operand::Local(dest), Operand::Const(ConstValue::Char(ch))],
            });
        }
        Operand::Local(dest)
    }

    fn emit_list_literal(
        &mut self,
        b: &mut FunctionBuilder,
        scope: &mut VarScope,
        elements: &[Expr],
        list_ty: Type,
    ) -> Operand {
        let elem_ty = list_ty.element_type().unwrap_or(Type::INVALID);
        let dest = b.add_local(list_ty, None);
        let ctor = list_constructor_name(&list_ty).unwrap_or("int_list_create");
        b.push(Instruction::Call { dest: Some(dest), callee: Symbol::intern(ctor), args: vec![] });
        let append = list_append_name(&list_ty, Span::DUMMY, self);
        for elem in elements {
            let value = self.emit_expr(b, scope, elem);
            let value = self.coerce(b, value, elem.ty(), elem_ty, elem.span);
            b.push(Instruction::Call {
                dest: None,
                callee: Symbol::intern(&append),
                args: vec![Operand::Local(dest), value],
            });
        }
        Operand::Local(dest)
    }

    fn emit_list_access(&mut self, b: &mut FunctionBuilder, scope: &mut VarScope, list: &Expr, index: &Expr) -> Operand {
        let list_op = self.emit_expr(b, scope, list);
        let index_op = self.emit_expr(b, scope, index);
        let list_local = match list_op {
            Operand::Local(id) => id,
            Operand::Const(_) => {
                self.bug("list access on a constant operand", list.span);
                return Operand::Const(ConstValue::Int(0));
            }
        };
        let list_ty = b.local_type(list_local);
        let retrieve = list_retrieve_name(&list_ty, list.span, self);
        let dest = b.add_local(list_ty.element_type().unwrap_or(Type::INVALID), None);
        b.push(Instruction::Call {
            dest: Some(dest),
            callee: Symbol::intern(&retrieve),
            args: vec![Operand::Local(list_local), index_op],
        });
        Operand::Local(dest)
    }

    fn emit_record_access(&mut self, b: &mut FunctionBuilder, scope: &mut VarScope, record: &Expr, field: Identifier) -> Operand {
        let record_op = self.emit_expr(b, scope, record);
        let record_local = match record_op {
            Operand::Local(id) => id,
            Operand::Const(_) => {
                self.bug("field access on a constant operand", record.span);
                return Operand::Const(ConstValue::Int(0));
            }
        };
        let record_ty = b.local_type(record_local);
        let Some(name) = record_ty.record_name else {
            self.bug("field access on a non-record type", record.span);
            return Operand::Const(ConstValue::Int(0));
        };
        let (field_index, field_ty) = match self.module.records.get(&name) {
            Some(layout) => match layout.field_index(field) {
                Some(idx) => (idx as u32, layout.fields[idx].1),
                None => {
                    self.bug(format!("unknown field `{}`", field.as_str()), record.span);
                    (0, Type::INVALID)
                }
            },
            None => {
                self.bug(format!("unknown record type `{}`", name.as_str()), record.span);
                (0, Type::INVALID)
            }
        };
        let dest = b.add_local(field_ty, None);
        b.push(Instruction::FieldGet { dest, record: record_local, field_index });
        Operand::Local(dest)
    }

    fn emit_call(&mut self, b: &mut FunctionBuilder, scope: &mut VarScope, callee: Identifier, args: &[Expr], ret_ty: Type) -> Operand {
        let arg_ops: Vec<Operand> = args.iter().map(|a| self.emit_expr(b, scope, a)).collect();
        let dest = if ret_ty == Type::VOID { None } else { Some(b.add_local(ret_ty, None)) };
        b.push(Instruction::Call { dest, callee, args: arg_ops });
        dest.map(Operand::Local).unwrap_or(Operand::Const(ConstValue::Int(0)))
    }

    fn emit_binary(&mut self, b: &mut FunctionBuilder, scope: &mut VarScope, op: BinOp, lhs: &Expr, rhs: &Expr) -> Operand {
        let lhs_ty = lhs.ty();
        let rhs_ty = rhs.ty();
        let result_ty = Type::larger(&lhs_ty, &rhs_ty);
        let lhs_op = self.emit_expr(b, scope, lhs);
        let rhs_op = self.emit_expr(b, scope, rhs);
        let lhs_op = self.coerce(b, lhs_op, lhs_ty, result_ty, lhs.span);
        let rhs_op = self.coerce(b, rhs_op, rhs_ty, result_ty, rhs.span);
        let is_double = result_ty.kind == Kind::Double;
        let ir_op = match op {
            BinOp::Arith(a) => arith_op(a, is_double),
            BinOp::Bitwise(bw) => bitwise_op(bw),
            BinOp::Logical(l) => logical_op(l),
            BinOp::Compare(c) => compare_op(c, is_double),
        };
        let dest_ty = if op.is_comparison() { Type::BOOL } else { result_ty };
        let dest = b.add_local(dest_ty, None);
        b.push(Instruction::BinaryOp { dest, op: ir_op, lhs: lhs_op, rhs: rhs_op });
        Operand::Local(dest)
    }

    /// Inserts whatever the analyzer's recorded up-cast requires (spec
    /// §4.4's coercion table). A no-op if `from == to`.
    fn coerce(&mut self, b: &mut FunctionBuilder, operand: Operand, from: Type, to: Type, span: Span) -> Operand {
        if from == to || from.is_invalid() || to.is_invalid() {
            return operand;
        }
        if to == Type::STRING && !from.is_list {
            let callee = match from.kind {
                Kind::Int => "int_to_str",
                Kind::UInt => "uint_to_str",
                Kind::Double => "double_to_str",
                Kind::Bool => "bool_to_str",
                Kind::Char => "char_to_str",
                _ => {
                    self.bug(format!("no string coercion from {}", from), span);
                    return operand;
                }
            };
            let dest = b.add_local(Type::STRING, None);
            b.push(Instruction::Call {
                dest: Some(dest),
                callee: Symbol::intern(callee),
                args: vec![operand],
            });
            return Operand::Local(dest);
        }
        let kind = match (from.kind, to.kind) {
            (Kind::Int, Kind::Double) => CoerceKind::IntToDouble,
            (Kind::UInt, Kind::Double) => CoerceKind::UIntToDouble,
            (Kind::Char, Kind::Int) => CoerceKind::CharToInt,
            (Kind::Bool, Kind::Int) => CoerceKind::BoolToInt,
            (Kind::Bool, Kind::UInt) => CoerceKind::BoolToUInt,
            (Kind::Bool, Kind::Double) => CoerceKind::BoolToDouble,
            _ => {
                self.bug(format!("no coercion from {} to {}", from, to), span);
                return operand;
            }
        };
        let dest = b.add_local(to, None);
        b.push(Instruction::Coerce { dest, kind, operand });
        Operand::Local(dest)
    }
}

/// Covers every `Literal` variant except `Str`, which [`Emitter::emit_expr`]
/// routes to [`Emitter::emit_string_literal`] instead — a string has no
/// constant representation in this IR, only a runtime-constructed value.
fn const_value(lit: &Literal) -> ConstValue {
    match lit {
        Literal::Int(v) => ConstValue::Int(*v),
        Literal::UInt(v) => ConstValue::UInt(*v),
        Literal::Double(v) => ConstValue::Double(*v),
        Literal::Bool(v) => ConstValue::Bool(*v),
        Literal::Char(v) => ConstValue::Char(*v),
        Literal::Str(_) => unreachable!("string literals are handled in emit_expr"),
    }
}

fn list_constructor_name(ty: &Type) -> Option<&'static str> {
    if !ty.is_list || ty.record_name.is_some() {
        return None;
    }
    Some(match ty.kind {
        Kind::Int => "int_list_create",
        Kind::UInt => "uint_list_create",
        Kind::Double => "double_list_create",
        Kind::Char => "str_create",
        Kind::Bool => "bool_list_create",
        _ => return None,
    })
}

fn list_retrieve_name(ty: &Type, span: Span, emitter: &Emitter) -> String {
    match retrieve_or_insert_suffix(ty) {
        Some(suffix) => format!("{suffix}_retrieve"),
        None => {
            emitter.bug(format!("no retrieve runtime function for {}", ty), span);
            "int_list_retrieve".to_string()
        }
    }
}

fn list_insert_name(ty: &Type, span: Span, emitter: &Emitter) -> String {
    match retrieve_or_insert_suffix(ty) {
        Some(suffix) => format!("{suffix}_insert"),
        None => {
            emitter.bug(format!("no insert runtime function for {}", ty), span);
            "int_list_insert".to_string()
        }
    }
}

fn list_append_name(ty: &Type, span: Span, emitter: &Emitter) -> String {
    match retrieve_or_insert_suffix(ty) {
        Some(suffix) => format!("{suffix}_append"),
        None => {
            emitter.bug(format!("no append runtime function for {}", ty), span);
            "int_list_append".to_string()
        }
    }
}

/// `str_retrieve`/`str_insert`/`str_append` break the `{kind}_list_*`
/// pattern (spec §6), so char-lists (strings) get their own prefix.
fn retrieve_or_insert_suffix(ty: &Type) -> Option<&'static str> {
    if ty.kind == Kind::Char {
        return Some("str");
    }
    if !ty.is_list || ty.record_name.is_some() {
        return None;
    }
    Some(match ty.kind {
        Kind::Int => "int_list",
        Kind::UInt => "uint_list",
        Kind::Double => "double_list",
        Kind::Bool => "bool_list",
        _ => return None,
    })
}

fn arith_op(op: ArithOp, is_double: bool) -> IrBinOp {
    match (op, is_double) {
        (ArithOp::Add, false) => IrBinOp::AddInt,
        (ArithOp::Add, true) => IrBinOp::AddDouble,
        (ArithOp::Sub, false) => IrBinOp::SubInt,
        (ArithOp::Sub, true) => IrBinOp::SubDouble,
        (ArithOp::Mul, false) => IrBinOp::MulInt,
        (ArithOp::Mul, true) => IrBinOp::MulDouble,
        (ArithOp::Div, false) => IrBinOp::DivInt,
        (ArithOp::Div, true) => IrBinOp::DivDouble,
        (ArithOp::Rem, _) => IrBinOp::RemInt,
    }
}

fn bitwise_op(op: BitwiseOp) -> IrBinOp {
    match op {
        BitwiseOp::And => IrBinOp::And,
        BitwiseOp::Or => IrBinOp::Or,
        BitwiseOp::Xor => IrBinOp::Xor,
    }
}

fn logical_op(op: crema_ast::LogicalOp) -> IrBinOp {
    match op {
        crema_ast::LogicalOp::And => IrBinOp::LogicalAnd,
        crema_ast::LogicalOp::Or => IrBinOp::LogicalOr,
    }
}

fn compare_op(op: CompareOp, is_double: bool) -> IrBinOp {
    match (op, is_double) {
        (CompareOp::Eq, false) => IrBinOp::EqInt,
        (CompareOp::Eq, true) => IrBinOp::EqDouble,
        (CompareOp::Ne, false) => IrBinOp::NeInt,
        (CompareOp::Ne, true) => IrBinOp::NeDouble,
        (CompareOp::Lt, false) => IrBinOp::LtInt,
        (CompareOp::Lt, true) => IrBinOp::LtDouble,
        (CompareOp::Le, false) => IrBinOp::LeInt,
        (CompareOp::Le, true) => IrBinOp::LeDouble,
        (CompareOp::Gt, false) => IrBinOp::GtInt,
        (CompareOp::Gt, true) => IrBinOp::GtDouble,
        (CompareOp::Ge, false) => IrBinOp::GeInt,
        (CompareOp::Ge, true) => IrBinOp::GeDouble,
    }
}

fn b_return_ty(b: &FunctionBuilder) -> Type {
    b.return_type()
}

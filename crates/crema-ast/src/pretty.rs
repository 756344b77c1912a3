//! The `-p` pretty-printer (spec §4.2): a `Display`-oriented dump of the
//! tree, not a virtual `print` method per node (spec §9 "Inheritance
//! hierarchy of node kinds" — single dispatch on the variant tag instead).

use crate::ast::{BinOp, Literal};
use crate::expr::{Expr, ExprKind};
use crate::items::{FuncDecl, Program, RecordDecl};
use crate::stmt::{Block, Stmt, StmtKind};
use std::fmt::Write;

pub fn pretty_print(program: &Program) -> String {
    let mut out = String::new();
    print_block(&program.root, 0, &mut out);
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn print_block(block: &Block, depth: usize, out: &mut String) {
    for stmt in &block.stmts {
        print_stmt(stmt, depth, out);
    }
}

fn print_stmt(stmt: &Stmt, depth: usize, out: &mut String) {
    indent(out, depth);
    match &stmt.kind {
        StmtKind::VarDecl {
            binding,
            initializer,
        } => {
            let _ = write!(out, "{} {}", binding.ty, binding.name);
            if let Some(init) = initializer {
                out.push_str(" = ");
                print_expr(init, out);
            }
            out.push('\n');
        }
        StmtKind::RecordDecl(record) => print_record(record, depth, out),
        StmtKind::FuncDecl(func) => print_func(func, depth, out),
        StmtKind::AssignScalar { target, value } => {
            let _ = write!(out, "{} = ", target.as_str());
            print_expr(value, out);
            out.push('\n');
        }
        StmtKind::AssignListElt { list, index, value } => {
            let _ = write!(out, "{}[", list.as_str());
            print_expr(index, out);
            out.push_str("] = ");
            print_expr(value, out);
            out.push('\n');
        }
        StmtKind::AssignRecordField {
            record,
            field,
            value,
        } => {
            let _ = write!(out, "{}.{} = ", record.as_str(), field.as_str());
            print_expr(value, out);
            out.push('\n');
        }
        StmtKind::If {
            cond,
            then_block,
            elseifs,
            else_block,
        } => {
            out.push_str("if (");
            print_expr(cond, out);
            out.push_str(") {\n");
            print_block(then_block, depth + 1, out);
            indent(out, depth);
            out.push('}');
            for (cond, block) in elseifs {
                out.push_str(" elseif (");
                print_expr(cond, out);
                out.push_str(") {\n");
                print_block(block, depth + 1, out);
                indent(out, depth);
                out.push('}');
            }
            if let Some(else_block) = else_block {
                out.push_str(" else {\n");
                print_block(else_block, depth + 1, out);
                indent(out, depth);
                out.push('}');
            }
            out.push('\n');
        }
        StmtKind::Foreach { list, binder, body } => {
            let _ = write!(
                out,
                "foreach ({} as {}) {{\n",
                list.as_str(),
                binder.as_str()
            );
            print_block(body, depth + 1, out);
            indent(out, depth);
            out.push_str("}\n");
        }
        StmtKind::Return(value) => {
            out.push_str("return");
            if let Some(value) = value {
                out.push(' ');
                print_expr(value, out);
            }
            out.push('\n');
        }
        StmtKind::Expr(expr) => {
            print_expr(expr, out);
            out.push('\n');
        }
    }
}

fn print_record(record: &RecordDecl, depth: usize, out: &mut String) {
    let _ = write!(out, "record {} {{\n", record.name.as_str());
    for member in &record.members {
        indent(out, depth + 1);
        let _ = write!(out, "{} {}\n", member.ty, member.name.as_str());
    }
    indent(out, depth);
    out.push_str("}\n");
}

fn print_func(func: &FuncDecl, depth: usize, out: &mut String) {
    let _ = write!(out, "func {} {}(", func.return_ty, func.name.as_str());
    for (i, param) in func.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{} {}", param.ty, param.name.as_str());
    }
    out.push(')');
    match &func.body {
        Some(body) => {
            out.push_str(" {\n");
            print_block(body, depth + 1, out);
            indent(out, depth);
            out.push_str("}\n");
        }
        None => out.push_str(" extern\n"),
    }
}

fn print_expr(expr: &Expr, out: &mut String) {
    match &expr.kind {
        ExprKind::Literal(lit) => print_literal(lit, out),
        ExprKind::ListLiteral(elements) => {
            out.push('[');
            for (i, el) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                print_expr(el, out);
            }
            out.push(']');
        }
        ExprKind::VariableAccess(name) => out.push_str(name.as_str()),
        ExprKind::ListAccess { list, index } => {
            print_expr(list, out);
            out.push('[');
            print_expr(index, out);
            out.push(']');
        }
        ExprKind::RecordAccess { record, field } => {
            print_expr(record, out);
            out.push('.');
            out.push_str(field.as_str());
        }
        ExprKind::Call { callee, args } => {
            out.push_str(callee.as_str());
            out.push('(');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                print_expr(arg, out);
            }
            out.push(')');
        }
        ExprKind::Binary { op, lhs, rhs } => {
            out.push('(');
            print_expr(lhs, out);
            let _ = write!(out, " {} ", op_symbol(op));
            print_expr(rhs, out);
            out.push(')');
        }
        ExprKind::Not(inner) => {
            out.push('!');
            print_expr(inner, out);
        }
        ExprKind::Error => out.push_str("<error>"),
    }
}

fn op_symbol(op: &BinOp) -> &'static str {
    op.symbol()
}

fn print_literal(lit: &Literal, out: &mut String) {
    match lit {
        Literal::Int(v) => {
            let _ = write!(out, "{}", v);
        }
        Literal::UInt(v) => {
            let _ = write!(out, "{}u", v);
        }
        Literal::Double(v) => {
            let _ = write!(out, "{}", v);
        }
        Literal::Bool(v) => {
            let _ = write!(out, "{}", v);
        }
        Literal::Char(v) => {
            let _ = write!(out, "'{}'", v);
        }
        Literal::Str(v) => {
            let _ = write!(out, "\"{}\"", v);
        }
    }
}

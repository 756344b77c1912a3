//! crema-ir - IR emitter for Crema (spec §4.4).
//!
//! Lowers an analyzed [`crema_ast::Program`] (every expression's type slot
//! already filled in by `crema_sem`) into a [`Module`]: a concrete,
//! inspectable data structure with `IndexVec`-addressed locals and blocks,
//! an explicit terminator per block, and typed instructions for arithmetic,
//! comparison, calls, coercions, and runtime calls. [`Module::to_ir_text`]
//! renders it as LLVM-IR-flavored text for the driver's `-S` flag.
//!
//! Native codegen from this IR is out of scope (spec §1's Non-goals) — this
//! crate's job ends at a module a downstream backend could consume.

pub mod builder;
pub mod emit;
pub mod ir;

pub use emit::emit_module;
pub use ir::{
    BasicBlock, BlockId, CoerceKind, ConstValue, Function, FunctionId, Instruction, IrBinOp,
    Local, LocalId, Module, Operand, RecordLayout, Terminator,
};

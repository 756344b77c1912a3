//! The IR data model (spec §4.4): a concrete, inspectable representation of
//! a lowered Crema program. Modeled on the teacher's MIR (locals and blocks
//! addressed through [`IndexVec`], an explicit terminator per block) but
//! flattened to the handful of instruction shapes Crema's emitter actually
//! needs — there is no separate `Place`/`Rvalue`/`Operand` split because
//! Crema has no references, no slices, and no aggregates-by-projection
//! beyond a single record-field step.

use crema_ast::Type;
use crema_util::{define_idx, Idx, IndexVec, Symbol};
use std::collections::HashMap;
use std::fmt::Write as _;

define_idx!(LocalId);
define_idx!(BlockId);

/// A single stack slot: a parameter, a user variable, or a compiler-
/// synthesized temporary (`name = None`).
#[derive(Debug, Clone)]
pub struct Local {
    pub ty: Type,
    pub name: Option<Symbol>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstValue {
    Int(i64),
    UInt(u64),
    Double(f64),
    Bool(bool),
    Char(char),
}

/// An instruction operand: either a previously computed local or a literal.
#[derive(Debug, Clone, Copy)]
pub enum Operand {
    Local(LocalId),
    Const(ConstValue),
}

/// Binary operators at the IR level. Crema's AST-level `ArithOp`/`BitwiseOp`/
/// `CompareOp`/`LogicalOp` all flatten into this one enum once operand types
/// are known — there's no longer a promotion step to do, just a primitive op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrBinOp {
    AddInt,
    SubInt,
    MulInt,
    DivInt,
    RemInt,
    AddDouble,
    SubDouble,
    MulDouble,
    DivDouble,
    And,
    Or,
    Xor,
    LogicalAnd,
    LogicalOr,
    EqInt,
    NeInt,
    LtInt,
    LeInt,
    GtInt,
    GeInt,
    EqDouble,
    NeDouble,
    LtDouble,
    LeDouble,
    GtDouble,
    GeDouble,
}

/// A non-identity coercion inserted by the emitter wherever the analyzer
/// recorded an up-cast (spec §4.1, §4.4's coercion table). Numeric-to-string
/// is deliberately absent: that conversion is built from a handful of
/// runtime calls (`str_create` + `str_append`), not a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoerceKind {
    IntToDouble,
    UIntToDouble,
    CharToInt,
    BoolToInt,
    BoolToUInt,
    BoolToDouble,
}

#[derive(Debug, Clone)]
pub enum Instruction {
    /// Materializes a literal into a fresh local.
    Const { dest: LocalId, value: ConstValue },
    BinaryOp {
        dest: LocalId,
        op: IrBinOp,
        lhs: Operand,
        rhs: Operand,
    },
    Not { dest: LocalId, operand: Operand },
    /// Writes `src` into `dest` unchanged. Locals are mutable stack slots
    /// here, not SSA values, so plain assignment and parameter binding both
    /// reduce to this.
    Copy { dest: LocalId, src: Operand },
    Coerce {
        dest: LocalId,
        kind: CoerceKind,
        operand: Operand,
    },
    /// Reads a record's field by its declared member index (records are
    /// native aggregates, addressed directly rather than through a runtime
    /// call).
    FieldGet {
        dest: LocalId,
        record: LocalId,
        field_index: u32,
    },
    FieldSet {
        record: LocalId,
        field_index: u32,
        value: Operand,
    },
    /// A call to either a user function or one of the runtime declarations
    /// (spec §6) — both live in the same flat function namespace by the
    /// time they reach the emitter, so one instruction shape serves both.
    Call {
        dest: Option<LocalId>,
        callee: Symbol,
        args: Vec<Operand>,
    },
}

#[derive(Debug, Clone)]
pub enum Terminator {
    Goto { target: BlockId },
    CondBr {
        cond: Operand,
        then_block: BlockId,
        else_block: BlockId,
    },
    Return(Option<Operand>),
}

#[derive(Debug, Clone)]
pub struct BasicBlock {
    pub id: BlockId,
    pub instructions: Vec<Instruction>,
    /// `None` only transiently while the builder is still appending to this
    /// block — every block in a finished [`Function`] has a terminator.
    pub terminator: Option<Terminator>,
}

impl BasicBlock {
    fn new(id: BlockId) -> Self {
        BasicBlock {
            id,
            instructions: Vec::new(),
            terminator: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Function {
    pub name: Symbol,
    pub return_ty: Type,
    pub params: Vec<LocalId>,
    pub locals: IndexVec<LocalId, Local>,
    pub blocks: IndexVec<BlockId, BasicBlock>,
    pub entry_block: BlockId,
    /// `true` for the runtime declarations (spec §6): no blocks, just a
    /// signature for the printer and the (external) linker to see.
    pub is_external: bool,
}

#[derive(Debug, Clone)]
pub struct RecordLayout {
    pub fields: Vec<(Symbol, Type)>,
}

impl RecordLayout {
    pub fn field_index(&self, name: Symbol) -> Option<usize> {
        self.fields.iter().position(|(n, _)| *n == name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Module {
    pub functions: IndexVec<FunctionId, Function>,
    pub function_ids: HashMap<Symbol, FunctionId>,
    pub records: HashMap<Symbol, RecordLayout>,
}

define_idx!(FunctionId);

impl Module {
    pub fn new() -> Self {
        Module::default()
    }

    pub fn push_function(&mut self, func: Function) -> FunctionId {
        let name = func.name;
        let id = self.functions.push(func);
        self.function_ids.insert(name, id);
        id
    }

    pub fn function(&self, name: Symbol) -> Option<&Function> {
        self.function_ids.get(&name).map(|id| &self.functions[*id])
    }

    /// Renders the module as LLVM-IR-flavored text for the `-S` driver flag.
    /// This is not meant to be fed to an LLVM toolchain — it's a readable,
    /// stable textual form of the instructions above.
    pub fn to_ir_text(&self) -> String {
        let mut out = String::new();
        for (name, layout) in &self.records {
            let fields = layout
                .fields
                .iter()
                .map(|(n, ty)| format!("{} {}", ty_text(ty), n.as_str()))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "%{} = type {{ {} }}", name.as_str(), fields);
        }
        if !self.records.is_empty() {
            out.push('\n');
        }
        for func in self.functions.as_slice().iter() {
            write_function(&mut out, func);
        }
        out
    }
}

fn ty_text(ty: &Type) -> String {
    if ty.is_list {
        format!("{}*", scalar_ty_text(ty.kind))
    } else if let Some(name) = ty.record_name {
        format!("%{}", name.as_str())
    } else {
        scalar_ty_text(ty.kind).to_string()
    }
}

fn scalar_ty_text(kind: crema_ast::Kind) -> &'static str {
    use crema_ast::Kind;
    match kind {
        Kind::Int => "i64",
        Kind::UInt => "i64",
        Kind::Double => "double",
        Kind::Char => "i32",
        Kind::Bool => "i1",
        Kind::Void => "void",
        Kind::Record => "%record",
        Kind::Invalid => "invalid",
    }
}

fn write_function(out: &mut String, func: &Function) {
    if func.is_external {
        let params = func
            .params
            .iter()
            .map(|id| ty_text(&func.locals[*id].ty))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "declare {} @{}({})",
            ty_text(&func.return_ty),
            func.name.as_str(),
            params
        );
        return;
    }
    let params = func
        .params
        .iter()
        .map(|id| format!("{} %{}", ty_text(&func.locals[*id].ty), id.index()))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(
        out,
        "define {} @{}({}) {{",
        ty_text(&func.return_ty),
        func.name.as_str(),
        params
    );
    for block in func.blocks.as_slice().iter() {
        write_block(out, block);
    }
    out.push_str("}\n\n");
}

fn write_block(out: &mut String, block: &BasicBlock) {
    let _ = writeln!(out, "bb{}:", block.id.index());
    for inst in &block.instructions {
        let _ = writeln!(out, "  {}", instruction_text(inst));
    }
    if let Some(term) = &block.terminator {
        let _ = writeln!(out, "  {}", terminator_text(term));
    }
}

fn operand_text(op: &Operand) -> String {
    match op {
        Operand::Local(id) => format!("%{}", id.index()),
        Operand::Const(ConstValue::Int(v)) => v.to_string(),
        Operand::Const(ConstValue::UInt(v)) => v.to_string(),
        Operand::Const(ConstValue::Double(v)) => v.to_string(),
        Operand::Const(ConstValue::Bool(v)) => v.to_string(),
        Operand::Const(ConstValue::Char(v)) => format!("'{}'", v),
    }
}

fn instruction_text(inst: &Instruction) -> String {
    match inst {
        Instruction::Const { dest, value } => {
            format!("%{} = const {}", dest.index(), operand_text(&Operand::Const(*value)))
        }
        Instruction::BinaryOp { dest, op, lhs, rhs } => format!(
            "%{} = {:?} {}, {}",
            dest.index(),
            op,
            operand_text(lhs),
            operand_text(rhs)
        ),
        Instruction::Not { dest, operand } => format!("%{} = not {}", dest.index(), operand_text(operand)),
        Instruction::Copy { dest, src } => format!("%{} = copy {}", dest.index(), operand_text(src)),
        Instruction::Coerce { dest, kind, operand } => {
            format!("%{} = coerce.{:?} {}", dest.index(), kind, operand_text(operand))
        }
        Instruction::FieldGet { dest, record, field_index } => {
            format!("%{} = field_get %{}, {}", dest.index(), record.index(), field_index)
        }
        Instruction::FieldSet { record, field_index, value } => {
            format!("field_set %{}, {}, {}", record.index(), field_index, operand_text(value))
        }
        Instruction::Call { dest, callee, args } => {
            let args = args.iter().map(operand_text).collect::<Vec<_>>().join(", ");
            match dest {
                Some(dest) => format!("%{} = call @{}({})", dest.index(), callee.as_str(), args),
                None => format!("call @{}({})", callee.as_str(), args),
            }
        }
    }
}

fn terminator_text(term: &Terminator) -> String {
    match term {
        Terminator::Goto { target } => format!("br bb{}", target.index()),
        Terminator::CondBr { cond, then_block, else_block } => format!(
            "br {}, bb{}, bb{}",
            operand_text(cond),
            then_block.index(),
            else_block.index()
        ),
        Terminator::Return(Some(op)) => format!("ret {}", operand_text(op)),
        Terminator::Return(None) => "ret void".to_string(),
    }
}

//! Low-level block/instruction builder, used by [`crate::emit`] to assemble
//! one [`Function`] at a time.

use crate::ir::{BasicBlock, BlockId, Function, Instruction, Local, LocalId, Terminator};
use crema_ast::Type;
use crema_util::{Idx, IndexVec, Symbol};

pub struct FunctionBuilder {
    name: Symbol,
    return_ty: Type,
    locals: IndexVec<LocalId, Local>,
    blocks: IndexVec<BlockId, BasicBlock>,
    current: BlockId,
}

impl FunctionBuilder {
    pub fn new(name: Symbol, return_ty: Type) -> Self {
        let mut blocks = IndexVec::new();
        let entry = blocks.push(BasicBlock {
            id: BlockId::from_usize(0),
            instructions: Vec::new(),
            terminator: None,
        });
        FunctionBuilder {
            name,
            return_ty,
            locals: IndexVec::new(),
            blocks,
            current: entry,
        }
    }

    pub fn add_local(&mut self, ty: Type, name: Option<Symbol>) -> LocalId {
        self.locals.push(Local { ty, name })
    }

    pub fn new_block(&mut self) -> BlockId {
        let id = BlockId::from_usize(self.blocks.len());
        self.blocks.push(BasicBlock {
            id,
            instructions: Vec::new(),
            terminator: None,
        })
    }

    pub fn set_current_block(&mut self, block: BlockId) {
        self.current = block;
    }

    pub fn push(&mut self, inst: Instruction) {
        self.blocks[self.current].instructions.push(inst);
    }

    /// Sets the current block's terminator. A no-op if the block is already
    /// terminated (source-level `return` inside a conditional branch, for
    /// instance, terminates the block before any fallthrough code would).
    pub fn terminate(&mut self, term: Terminator) {
        if self.blocks[self.current].terminator.is_none() {
            self.blocks[self.current].terminator = Some(term);
        }
    }

    pub fn local_type(&self, local: LocalId) -> Type {
        self.locals[local].ty
    }

    pub fn return_type(&self) -> Type {
        self.return_ty
    }

    pub fn finish(mut self, params: Vec<LocalId>, is_external: bool) -> Function {
        for block in self.blocks.as_mut_slice() {
            if block.terminator.is_none() {
                block.terminator = Some(Terminator::Return(None));
            }
        }
        Function {
            name: self.name,
            return_ty: self.return_ty,
            params,
            locals: self.locals,
            blocks: self.blocks,
            entry_block: BlockId::from_usize(0),
            is_external,
        }
    }
}

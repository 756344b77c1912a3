//! Variable scoping (spec §4.3 "context state: scopes: stack<Scope>").
//!
//! Functions and records live in their own flat, global namespaces (see
//! [`crate::analysis::SemanticAnalyzer`]) — only variables are rib-scoped.

use crema_ast::{Binding, Identifier};
use crema_util::{Idx, IndexVec};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RibId(pub u32);

impl Idx for RibId {
    fn from_usize(idx: usize) -> Self {
        RibId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy)]
pub enum RibKind {
    /// The outermost, top-level block of the program.
    Global,
    Function,
    Block,
}

/// A single scope. Bindings are keyed by name, not by a generated id — spec
/// §4.3 resolves a variable straight to its `Binding`.
#[derive(Debug)]
pub struct Rib {
    pub bindings: HashMap<Identifier, Binding>,
    pub parent: Option<RibId>,
    pub kind: RibKind,
}

pub struct ScopeTree {
    pub ribs: IndexVec<RibId, Rib>,
    pub current_rib: RibId,
}

impl ScopeTree {
    pub fn new() -> Self {
        let mut ribs = IndexVec::new();
        let root = ribs.push(Rib {
            bindings: HashMap::new(),
            parent: None,
            kind: RibKind::Global,
        });

        ScopeTree {
            ribs,
            current_rib: root,
        }
    }

    pub fn enter_scope(&mut self, kind: RibKind) -> RibId {
        let new_rib = self.ribs.push(Rib {
            bindings: HashMap::new(),
            parent: Some(self.current_rib),
            kind,
        });
        self.current_rib = new_rib;
        new_rib
    }

    /// Leave the current scope. Panics if called at the root rib — callers
    /// must pair every `enter_scope` with exactly one `exit_scope` (spec
    /// §4.3's "scope stack empty at start/end" invariant).
    pub fn exit_scope(&mut self) {
        let parent = self.ribs[self.current_rib]
            .parent
            .expect("exit_scope called with no open scope");
        self.current_rib = parent;
    }

    pub fn is_at_root(&self) -> bool {
        self.ribs[self.current_rib].parent.is_none()
    }

    /// Declares `binding` in the current scope. Returns `false` (and leaves
    /// the scope unchanged) if the name is already bound *in this scope* —
    /// shadowing an outer scope's binding is allowed.
    pub fn declare(&mut self, binding: Binding) -> bool {
        let rib = &mut self.ribs[self.current_rib];
        if rib.bindings.contains_key(&binding.name) {
            return false;
        }
        rib.bindings.insert(binding.name, binding);
        true
    }

    /// Resolves a name by walking from the current rib up to the root.
    pub fn resolve(&self, name: Identifier) -> Option<&Binding> {
        let mut rib_id = self.current_rib;
        loop {
            let rib = &self.ribs[rib_id];
            if let Some(binding) = rib.bindings.get(&name) {
                return Some(binding);
            }
            match rib.parent {
                Some(parent) => rib_id = parent,
                None => return None,
            }
        }
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crema_ast::Type;
    use crema_util::{Span, Symbol};

    fn binding(name: &str, ty: Type) -> Binding {
        Binding::new(Symbol::intern(name), ty, Span::DUMMY)
    }

    #[test]
    fn resolves_through_parent_scopes() {
        let mut scopes = ScopeTree::new();
        scopes.declare(binding("x", Type::INT));
        scopes.enter_scope(RibKind::Block);
        assert!(scopes.resolve(Symbol::intern("x")).is_some());
    }

    #[test]
    fn shadowing_is_allowed() {
        let mut scopes = ScopeTree::new();
        scopes.declare(binding("x", Type::INT));
        scopes.enter_scope(RibKind::Block);
        assert!(scopes.declare(binding("x", Type::DOUBLE)));
        assert_eq!(scopes.resolve(Symbol::intern("x")).unwrap().ty, Type::DOUBLE);
    }

    #[test]
    fn duplicate_in_same_scope_rejected() {
        let mut scopes = ScopeTree::new();
        assert!(scopes.declare(binding("x", Type::INT)));
        assert!(!scopes.declare(binding("x", Type::DOUBLE)));
    }

    #[test]
    fn exit_restores_parent() {
        let mut scopes = ScopeTree::new();
        scopes.enter_scope(RibKind::Block);
        scopes.exit_scope();
        assert!(scopes.is_at_root());
    }

    #[test]
    fn unresolved_name_is_none() {
        let scopes = ScopeTree::new();
        assert!(scopes.resolve(Symbol::intern("nope")).is_none());
    }
}

//! Internal pipeline integration: fixture -> analyze -> emit_module,
//! without going through the CLI, checking the IR shape each scenario is
//! expected to produce.

use crema_drv::fixtures;
use crema_ir::{Instruction, Terminator};
use crema_util::diagnostic::Handler;
use crema_util::Symbol;

fn analyzed(name: &str) -> (crema_ast::Program, Handler) {
    let program = fixtures::load(name).expect("fixture exists");
    let handler = Handler::new();
    let ok = crema_sem::analyze(&program, &handler);
    assert!(ok, "fixture `{name}` must type-check");
    (program, handler)
}

/// Scenario 1: `int a = 3  int b = a + 4  return b`.
#[test]
fn arithmetic_entry_ends_in_a_return() {
    let (program, handler) = analyzed("arithmetic");
    let module = crema_ir::emit_module(&program, &handler);
    assert!(!handler.has_errors());
    let main = module.function(Symbol::intern("main")).unwrap();
    let last_block = main.blocks.as_slice().last().unwrap();
    assert!(matches!(last_block.terminator, Some(Terminator::Return(Some(_)))));
}

/// Scenario 3: `int a  double b = a` must insert a coercion.
#[test]
fn upcast_emits_a_coerce_instruction() {
    let (program, handler) = analyzed("upcast");
    let module = crema_ir::emit_module(&program, &handler);
    let main = module.function(Symbol::intern("main")).unwrap();
    let has_coerce = main
        .blocks
        .as_slice()
        .iter()
        .flat_map(|b| &b.instructions)
        .any(|i| matches!(i, Instruction::Coerce { .. }));
    assert!(has_coerce, "assigning an int to a double local must coerce");
}

/// Scenario 5: record field write/read go through native field access.
#[test]
fn record_field_assignment_emits_field_set_and_field_get() {
    let (program, handler) = analyzed("record");
    let module = crema_ir::emit_module(&program, &handler);
    let main = module.function(Symbol::intern("main")).unwrap();
    let insts: Vec<_> = main.blocks.as_slice().iter().flat_map(|b| &b.instructions).collect();
    assert!(insts.iter().any(|i| matches!(i, Instruction::FieldSet { .. })));
    assert!(insts.iter().any(|i| matches!(i, Instruction::FieldGet { .. })));
}

/// Scenario 6: foreach lowers to a length call plus a per-element retrieve.
#[test]
fn foreach_emits_a_length_call_and_a_retrieve_call() {
    let (program, handler) = analyzed("foreach");
    let module = crema_ir::emit_module(&program, &handler);
    let main = module.function(Symbol::intern("main")).unwrap();
    let calls: Vec<_> = main
        .blocks
        .as_slice()
        .iter()
        .flat_map(|b| &b.instructions)
        .filter_map(|i| match i {
            Instruction::Call { callee, .. } => Some(callee.as_str()),
            _ => None,
        })
        .collect();
    assert!(calls.contains(&"list_length"));
    assert!(calls.contains(&"int_list_retrieve"));
    assert!(calls.contains(&"int_println"));
}

/// Scenario 2: a failing analysis must never reach emission.
#[test]
fn type_mismatch_fixture_fails_analysis() {
    let program = fixtures::load("type_mismatch").unwrap();
    let handler = Handler::new();
    assert!(!crema_sem::analyze(&program, &handler));
    assert!(handler.has_errors());
}

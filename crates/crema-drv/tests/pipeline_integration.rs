//! Full-pipeline integration: every scenario of spec.md §8 through
//! `Session::compile`, checked against its expected analyzer outcome.

use crema_drv::{CompileError, Config, Session};

fn compile(fixture: &str) -> Result<(), CompileError> {
    let config = Config {
        fixture: Some(fixture.to_string()),
        stop_after_sem: true,
        ..Config::default()
    };
    Session::new(config).compile()
}

#[test]
fn scenario_outcomes_match_the_specification_table() {
    let expected = [
        ("arithmetic", true),
        ("type_mismatch", false),
        ("upcast", true),
        ("recursion", false),
        ("record", true),
        ("foreach", true),
        ("heterogeneous_list", false),
        ("bad_condition", false),
    ];

    for (name, should_succeed) in expected {
        let result = compile(name);
        assert_eq!(result.is_ok(), should_succeed, "fixture `{name}` outcome mismatch");
    }
}

#[test]
fn every_scenario_name_in_the_table_is_a_known_fixture() {
    let table_names = [
        "arithmetic",
        "type_mismatch",
        "upcast",
        "recursion",
        "record",
        "foreach",
        "heterogeneous_list",
        "bad_condition",
    ];
    assert_eq!(table_names.len(), crema_drv::fixtures::NAMES.len());
    for name in table_names {
        assert!(crema_drv::fixtures::NAMES.contains(&name));
    }
}

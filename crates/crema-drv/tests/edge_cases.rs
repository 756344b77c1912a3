//! Edge-case tests for crema-drv's flag parsing and session plumbing.

use crema_drv::{parse_args, CompileError, Config, Session};

fn args(flags: &[&str]) -> Vec<String> {
    flags.iter().map(|s| s.to_string()).collect()
}

#[test]
fn default_config_has_no_fixture_and_no_stop_flags() {
    let config = Config::default();
    assert!(config.fixture.is_none());
    assert!(!config.stop_after_parse);
    assert!(!config.stop_after_sem);
    assert!(!config.verbose);
    assert!(!config.help);
}

#[test]
fn help_flag_short_circuits_without_a_fixture() {
    let config = parse_args(args(&["-h"])).unwrap();
    assert!(config.help);
    assert!(config.fixture.is_none());
}

#[test]
fn later_fixture_flag_overrides_an_earlier_one() {
    let config = parse_args(args(&["-f", "arithmetic", "-f", "record"])).unwrap();
    assert_eq!(config.fixture.as_deref(), Some("record"));
}

#[test]
fn empty_argv_is_a_missing_fixture_error() {
    let config = parse_args(Vec::<String>::new()).unwrap();
    let mut session = Session::new(config);
    assert!(matches!(
        session.compile(),
        Err(CompileError::InvalidArguments(_))
    ));
}

#[test]
fn dash_s_without_a_path_is_an_argument_error() {
    assert!(parse_args(args(&["-f", "arithmetic", "-S"])).is_err());
}

#[test]
fn all_eight_scenario_fixtures_are_known_to_the_driver() {
    for name in crema_drv::fixtures::NAMES {
        let config = parse_args(args(&["-f", name])).unwrap();
        assert!(crema_drv::fixtures::load(&config.fixture.unwrap()).is_some());
    }
}

//! End-to-end tests driving the `crema` binary through `assert_cmd`.

mod cli_tests;
mod compilation_tests;
mod snapshot_tests;

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parenval")).args(args)
                                                .output()
                                                .unwrap_or_else(|e| panic!("Failed to run parenval: {e}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn evaluates_the_given_file() {
    let output = run(&["tests/scripts/line_endings.expr"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "2\n3\n");
}

#[test]
fn arguments_after_the_file_are_ignored() {
    let output = run(&["tests/scripts/line_endings.expr", "extra", "--flag"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "2\n3\n");
}

#[test]
fn missing_file_name_exits_successfully() {
    let output = run(&[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Error: No file name was given.\n");
}

#[test]
fn unreadable_file_exits_successfully() {
    let output = run(&["tests/scripts/does-not-exist.expr"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output),
               "Error: File 'tests/scripts/does-not-exist.expr' could not be found or opened.\n");
}

#[test]
fn unknown_option_is_a_diagnostic_not_a_failure() {
    let output = run(&["--frobnicate"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("--frobnicate"));
}

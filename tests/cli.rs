use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    cargo_bin_cmd!("primer")
}

#[test]
fn list_names_every_lesson() {
    let out = cmd().arg("list").assert().success().get_output().stdout.clone();
    let out = String::from_utf8(out).unwrap();
    for name in ["intro", "strings", "numbers", "conditions", "loops", "collections"] {
        assert!(out.lines().any(|l| l.starts_with(name)), "missing {}", name);
    }
}

#[test]
fn intro_prints_exactly_two_lines() {
    cmd()
        .args(["run", "intro"])
        .assert()
        .success()
        .stdout("Hello, World!\nLearning Rust as Programming Language\n");
}

#[test]
fn extra_arguments_are_ignored() {
    cmd()
        .args(["run", "intro", "one", "two"])
        .assert()
        .success()
        .stdout("Hello, World!\nLearning Rust as Programming Language\n");
}

#[test]
fn extra_arguments_after_all_are_ignored() {
    let plain = cmd().args(["run", "--all"]).assert().success().get_output().stdout.clone();
    let extra = cmd()
        .args(["run", "--all", "foo", "bar"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(plain, extra);
}

#[test]
fn output_is_identical_across_runs() {
    let first = cmd().args(["run", "--all"]).assert().success().get_output().stdout.clone();
    let second = cmd().args(["run", "--all"]).assert().success().get_output().stdout.clone();
    assert_eq!(first, second);
    assert!(String::from_utf8(first).unwrap().contains("Sorted Name List (Ascending):"));
}

#[test]
fn numbers_show_wraparound() {
    cmd()
        .args(["run", "numbers"])
        .assert()
        .success()
        .stdout(contains("An example of overflow: the output is -2147483646"));
}

#[test]
fn logs_stay_off_stdout() {
    cmd()
        .args(["--log-level", "debug", "run", "intro"])
        .assert()
        .success()
        .stdout("Hello, World!\nLearning Rust as Programming Language\n")
        .stderr(contains("starting lesson"));
}

#[test]
fn overrun_fails_after_printing_earlier_lines() {
    cmd()
        .args(["run", "collections", "--overrun"])
        .assert()
        .failure()
        .stdout(contains("Last city: Vaughan"))
        .stdout(contains("Assigning names_array[4]..."))
        .stdout(contains("Sorted Name List").not())
        .stderr(contains("index 4 out of bounds for `names_array` of length 4"));
}

#[test]
fn unknown_lesson_is_a_usage_error() {
    cmd()
        .args(["run", "recursion"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid value 'recursion'"));
}

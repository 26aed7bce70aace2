use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn no_args_prints_usage_and_fails() {
    Command::cargo_bin("reposync").unwrap().assert().failure();
}

#[test]
fn org_is_required() {
    let output = Command::cargo_bin("reposync")
        .unwrap()
        .args(["--name", "foo-*"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--org"));
}

#[test]
fn name_term_is_required() {
    let output = Command::cargo_bin("reposync")
        .unwrap()
        .args(["--org", "acme"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--name"));
}

#[test]
fn help_succeeds() {
    Command::cargo_bin("reposync")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
}

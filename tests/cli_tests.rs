//! Command line tests for the `lisp-lex` binary
#![cfg(feature = "cli")]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn lisp_lex() -> Command {
    Command::cargo_bin("lisp-lex").unwrap()
}

fn source_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file
}

#[test]
fn test_cli_prints_tokens_from_file() {
    let file = source_file(b"(foo 42)\n");
    lisp_lex()
        .arg(file.path())
        .assert()
        .success()
        .stdout("(\n<foo>\n<42>\n)\n");
}

#[test]
fn test_cli_reads_stdin() {
    lisp_lex()
        .write_stdin("(a (b))")
        .assert()
        .success()
        .stdout("(\n<a>\n(\n<b>\n)\n)\n");
}

#[test]
fn test_cli_json_output() {
    lisp_lex()
        .args(["--format", "json"])
        .write_stdin("(x 7)")
        .assert()
        .success()
        .stdout("\"LeftParenthesis\"\n{\"Symbol\":\"x\"}\n{\"Number\":7}\n\"RightParenthesis\"\n");
}

#[test]
fn test_cli_reports_malformed_token() {
    lisp_lex()
        .write_stdin("(ok 42abc)")
        .assert()
        .failure()
        .stdout("(\n<ok>\n")
        .stderr(predicate::str::contains("Unexpected character 'a' at 1:7"));
}

#[test]
fn test_cli_encoding_option() {
    let file = source_file(b"(caf\xe9)");
    lisp_lex()
        .arg(file.path())
        .args(["--encoding", "latin1"])
        .assert()
        .success()
        .stdout("(\n<café>\n)\n");
}

#[test]
fn test_cli_rejects_unknown_encoding() {
    lisp_lex()
        .args(["--encoding", "klingon"])
        .write_stdin("()")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown encoding"));
}

#[test]
fn test_cli_config_file() {
    let config = source_file(br#"{"max_token_len": 2}"#);
    lisp_lex()
        .arg("--config")
        .arg(config.path())
        .write_stdin("ab abc")
        .assert()
        .failure()
        .stdout("<ab>\n")
        .stderr(predicate::str::contains("Token too long (limit: 2 characters)"));
}

#[test]
fn test_cli_missing_file() {
    lisp_lex()
        .arg("/definitely/not/here.lisp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn test_cli_empty_input() {
    lisp_lex().write_stdin("   \n").assert().success().stdout("");
}

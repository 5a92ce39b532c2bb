#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn xmljson() -> Command {
    Command::cargo_bin("xmljson").unwrap()
}

#[test]
fn test_encodes_file_to_stdout() {
    let expected = fs::read_to_string("tests/input/sample.xml").unwrap();
    xmljson()
        .args(["--file", "tests/input/sample.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(expected.trim_end()));
}

#[test]
fn test_writes_output_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.xml");

    xmljson()
        .args(["--file", "tests/input/sample.json", "--output"])
        .arg(&out)
        .args(["--pretty"])
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("\n  <tags type=\"array\">"));
}

#[test]
fn test_decimal_separator_option() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    fs::write(&input, r#"{"pi": 3.14}"#).unwrap();

    xmljson()
        .arg("--file")
        .arg(&input)
        .args(["--decimal-separator", ","])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<pi type="number">3,14</pi>"#));
}

#[test]
fn test_utf16_output_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.xml");

    xmljson()
        .args(["--file", "tests/input/sample.json", "--encoding", "utf-16le", "--output"])
        .arg(&out)
        .assert()
        .success();

    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[..4], &[b'<', 0, b'?', 0]);
}

#[test]
fn test_json_format() {
    xmljson()
        .args(["--file", "tests/input/sample.json", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"name":"Flexo""#));
}

#[test]
fn test_invalid_json_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, "[1,]").unwrap();

    xmljson()
        .arg("--file")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("trailing comma"));
}

#[test]
fn test_missing_file_fails() {
    xmljson()
        .args(["--file", "tests/input/does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read file"));
}

#[test]
fn test_unknown_encoding_is_rejected() {
    xmljson()
        .args(["--file", "tests/input/sample.json", "--encoding", "latin1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported text encoding"));
}

#[test]
fn test_non_xml_character_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("control.json");
    fs::write(&input, r#"{"k": "x\u0001y"}"#).unwrap();

    xmljson()
        .arg("--file")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be written to an XML document"));
}

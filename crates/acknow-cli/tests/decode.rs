//! End-to-end tests for `acknow decode` and `acknow schema`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn acknow_cmd() -> Command {
    let mut cmd = Command::cargo_bin("acknow").unwrap();
    // Keep tests independent of any acknow.toml in the working directory.
    cmd.args(["--config", "__missing__/acknow.toml"]);
    cmd
}

/// Lock file fixtures shared with the decoder crate.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("acknow-package")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn decode_json(files: &[&str]) -> serde_json::Value {
    let mut cmd = acknow_cmd();
    cmd.arg("decode");
    for f in files {
        cmd.arg(fixture(f));
    }
    let output = cmd.output().expect("run acknow");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

#[test]
fn decode_v1_fixture_as_json() {
    let json = decode_json(&["Package-version-1.resolved"]);
    let acks = json["acknowledgements"].as_array().expect("array");
    assert_eq!(acks.len(), 6);
    assert_eq!(acks[0]["title"], "AcknowList");
    assert_eq!(
        acks[0]["repository"],
        "https://github.com/vtourraine/AcknowList.git"
    );
    assert_eq!(acks[0]["version"], "2.1.0");
    assert!(acks[0].get("text").is_none());
    assert!(acks[0].get("license").is_none());
    assert!(json.get("header_text").is_none());
}

#[test]
fn decode_multiple_files_concatenates_in_argument_order() {
    let json = decode_json(&["Package-version-2.resolved", "Package-version-1.resolved"]);
    let acks = json["acknowledgements"].as_array().expect("array");
    assert_eq!(acks.len(), 7);
    assert_eq!(acks[0]["title"], "thirdpartymailer");
    assert_eq!(acks[1]["title"], "AcknowList");
}

#[test]
fn decode_output_matches_emitted_schema() {
    let schema_out = acknow_cmd().arg("schema").output().expect("run schema");
    assert!(schema_out.status.success());
    let schema: serde_json::Value =
        serde_json::from_slice(&schema_out.stdout).expect("schema is json");
    let validator = jsonschema::validator_for(&schema).expect("compile schema");

    let instance = decode_json(&[
        "Package-version-1.resolved",
        "Package-version-2.resolved",
        "Package-version-3.resolved",
    ]);
    assert!(validator.is_valid(&instance));
}

#[test]
fn decode_markdown_to_file_with_config_header() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = temp.path().join("acknow.toml");
    std::fs::write(&config, "header = \"Built with:\"\nfooter = \"Thanks!\"\n").expect("config");
    let out = temp.path().join("out").join("ACKNOWLEDGEMENTS.md");

    #[allow(deprecated)]
    Command::cargo_bin("acknow")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("decode")
        .arg(fixture("Package-version-2.resolved"))
        .args(["--format", "markdown", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let md = std::fs::read_to_string(&out).expect("markdown written");
    assert!(md.starts_with("# Acknowledgements\n\nBuilt with:\n\n"));
    assert!(md.contains("## thirdpartymailer"));
    assert!(md.ends_with("Thanks!\n"));
}

#[test]
fn decode_invalid_lock_file_fails_with_message() {
    let temp = tempfile::tempdir().expect("tempdir");
    let bad = temp.path().join("Package.resolved");
    std::fs::write(&bad, "{}").expect("write");

    acknow_cmd()
        .arg("decode")
        .arg(&bad)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("acknow error:"))
        .stderr(predicate::str::contains("missing field `pins`"));
}

#[test]
fn decode_missing_file_fails() {
    acknow_cmd()
        .args(["decode", "does/not/exist.resolved"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read does/not/exist.resolved"));
}

#[test]
fn strict_version_check_rejects_mismatched_version() {
    let temp = tempfile::tempdir().expect("tempdir");
    let lock = temp.path().join("Package.resolved");
    std::fs::write(&lock, r#"{"pins":[],"version":1}"#).expect("write");

    acknow_cmd().arg("decode").arg(&lock).assert().success();
    acknow_cmd()
        .args(["--version-check", "strict", "decode"])
        .arg(&lock)
        .assert()
        .failure()
        .stderr(predicate::str::contains("declares version 1"));
}

#[test]
fn unknown_format_is_rejected() {
    acknow_cmd()
        .arg("decode")
        .arg(fixture("Package-version-2.resolved"))
        .args(["--format", "html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("json|markdown"));
}

#[test]
fn unreadable_config_is_an_error_not_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = temp.path().join("acknow.toml");
    std::fs::write(&config, [0xff, 0xfe, 0xfd]).expect("write non-utf8 config");

    #[allow(deprecated)]
    Command::cargo_bin("acknow")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("decode")
        .arg(fixture("Package-version-2.resolved"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("read config:"));
}

//! End-to-end tests for the patchlevel binary.

#![allow(deprecated)]

use assert_cmd::Command;
use patchlevel_core::VersionMetadata;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn patchlevel() -> Command {
    Command::cargo_bin("patchlevel").expect("patchlevel binary")
}

fn empty_dir() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("run patchlevel");
    assert!(output.status.success(), "exit status {:?}", output.status);
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

#[test]
fn test_version_flag_prints_release_and_exits_zero() {
    let temp = empty_dir();

    patchlevel()
        .current_dir(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("patchlevel v5.16.3 ("))
        .stdout(predicate::str::contains("Minimum compatible API: v5.16.0"));
}

#[test]
fn test_short_version_flag_matches_long() {
    let temp = empty_dir();
    let long = stdout_of(patchlevel().current_dir(temp.path()).arg("--version"));
    let short = stdout_of(patchlevel().current_dir(temp.path()).arg("-V"));
    assert_eq!(short, long);
}

#[test]
fn test_version_lists_patches_one_per_line() {
    let temp = empty_dir();
    let out = stdout_of(
        patchlevel()
            .current_dir(temp.path())
            .args(["version", "--patches"]),
    );

    let patches = VersionMetadata::current().patch_log();
    let listed: Vec<&str> = out
        .lines()
        .skip_while(|l| *l != "Locally applied patches:")
        .skip(1)
        .map(|l| l.trim_start_matches('\t'))
        .collect();
    assert_eq!(listed.len(), patches.count());
    for (line, entry) in listed.iter().zip(patches.iter()) {
        assert_eq!(line, entry);
    }
}

#[test]
fn test_version_no_patches_omits_log() {
    let temp = empty_dir();

    patchlevel()
        .current_dir(temp.path())
        .args(["version", "--no-patches"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Locally applied patches").not());
}

#[test]
fn test_config_file_controls_defaults() {
    let temp = empty_dir();
    fs::write(
        temp.path().join("patchlevel.toml"),
        "[report]\nshow_patches = false\nname = \"perl\"\n",
    )
    .unwrap();

    patchlevel()
        .current_dir(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("perl v5.16.3 ("))
        .stdout(predicate::str::contains("Locally applied patches").not());

    // CLI wins over the file.
    let out = stdout_of(
        patchlevel()
            .current_dir(temp.path())
            .args(["version", "--patches"]),
    );
    assert_eq!(
        out.contains("Locally applied patches"),
        VersionMetadata::current().patch_count() > 0
    );
}

#[test]
fn test_explicit_config_path_must_exist() {
    let temp = empty_dir();

    patchlevel()
        .current_dir(temp.path())
        .args(["--config", "missing.toml", "version"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_invalid_config_fails() {
    let temp = empty_dir();
    fs::write(temp.path().join("patchlevel.toml"), "[report\n").unwrap();

    patchlevel()
        .current_dir(temp.path())
        .arg("version")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_version_json_report() {
    let temp = empty_dir();
    let out = stdout_of(
        patchlevel()
            .current_dir(temp.path())
            .args(["version", "--format", "json"]),
    );

    let value: serde_json::Value = serde_json::from_str(&out).expect("json report");
    assert_eq!(value["schema"], "patchlevel.report.v1");
    assert_eq!(value["release"]["minor"], 16);
    assert_eq!(value["min_compatible_api"]["subversion"], 0);
    let patches = value["patches"].as_array().expect("patches array");
    assert_eq!(value["patch_count"].as_u64(), Some(patches.len() as u64));
    assert!(value["generated_at"].is_string());
}

#[test]
fn test_version_markdown() {
    let temp = empty_dir();

    patchlevel()
        .current_dir(temp.path())
        .args(["version", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# patchlevel v5.16.3"))
        .stdout(predicate::str::contains("## Local patches"));
}

#[test]
fn test_patches_text_and_json_agree() {
    let temp = empty_dir();
    let text = stdout_of(patchlevel().current_dir(temp.path()).arg("patches"));
    let json = stdout_of(
        patchlevel()
            .current_dir(temp.path())
            .args(["patches", "--format", "json"]),
    );

    let from_json: Vec<String> = serde_json::from_str(&json).expect("json array");
    let from_text: Vec<String> = text.lines().map(str::to_string).collect();
    assert_eq!(from_text, from_json);
    assert_eq!(from_json, VersionMetadata::current().patch_log().entries());
}

#[test]
fn test_patches_markdown_is_bullet_list() {
    let temp = empty_dir();
    let md = stdout_of(
        patchlevel()
            .current_dir(temp.path())
            .args(["patches", "--format", "markdown"]),
    );

    let expected: Vec<String> = VersionMetadata::current()
        .patch_log()
        .iter()
        .map(|e| format!("- {e}"))
        .collect();
    let lines: Vec<String> = md.lines().map(str::to_string).collect();
    assert_eq!(lines, expected);
}

#[test]
fn test_compat_accepts_window() {
    let temp = empty_dir();

    for version in ["5.16.0", "5.16.1", "v5.16.3"] {
        patchlevel()
            .current_dir(temp.path())
            .args(["compat", version])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("compatible"));
    }
}

#[test]
fn test_compat_rejects_outside_window_with_exit_2() {
    let temp = empty_dir();

    patchlevel()
        .current_dir(temp.path())
        .args(["compat", "5.14.0"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("minimum compatible API 5.16.0"));

    patchlevel()
        .current_dir(temp.path())
        .args(["compat", "5.18.0"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("newer than this release"));
}

#[test]
fn test_compat_bad_version_is_runtime_error() {
    let temp = empty_dir();

    patchlevel()
        .current_dir(temp.path())
        .args(["compat", "five.sixteen"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_lineage_filters_and_sorts() {
    let temp = empty_dir();

    patchlevel()
        .current_dir(temp.path())
        .args(["lineage", "5.16.1", "5.14.4", "5.16.2", "5.16.3", "5.16.1"])
        .assert()
        .success()
        .stdout("5.16.2\n5.16.1\n");
}

#[test]
fn test_lineage_requires_candidates() {
    let temp = empty_dir();

    patchlevel()
        .current_dir(temp.path())
        .arg("lineage")
        .assert()
        .failure();
}

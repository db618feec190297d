use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn rivetoggle() -> Command {
    Command::cargo_bin("rivetoggle").expect("binary exists")
}

#[test]
fn help_flags_are_rejected_like_unknown_renderers() {
    let dir = tempfile::tempdir().unwrap();
    for flag in ["--help", "-h", "--version"] {
        rivetoggle()
            .current_dir(dir.path())
            .arg(flag)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Usage:"));
    }
}

#[test]
fn renderer_flag_must_come_first() {
    let dir = tempfile::tempdir().unwrap();
    rivetoggle()
        .current_dir(dir.path())
        .args(["-v", "3.2.1", "-webgl"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn extra_arguments_after_renderer_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let cases: [(&[&str], &str); 3] = [
        (&["-webgl", "-v"], "Version: 2.21.6"),
        (&["-webgl", "extra"], "Version: 2.21.6"),
        (&["-webgl", "-v", "1.0", "junk"], "Version: 1.0"),
    ];
    for (args, version) in cases {
        rivetoggle()
            .current_dir(dir.path())
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("Final renderer: WEBGL"))
            .stdout(predicate::str::contains(version));
    }
}

#[test]
fn usage_wins_over_broken_workspace_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".rivetoggle.toml"), "this is not toml").unwrap();
    rivetoggle()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn download_failure_exits_without_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".rivetoggle.toml"),
        "[remote]\nhost = \"127.0.0.1:1\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("package.json"),
        "{ \"dependencies\": { \"@rive-app/canvas-advanced\": \"1.0.0\" } }\n",
    )
    .unwrap();

    rivetoggle()
        .current_dir(dir.path())
        .args(["-webgl", "-v", "2.0.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Downloading WASM from: https://127.0.0.1:1/@rive-app/webgl-advanced@2.0.0/rive.wasm",
        ))
        .stdout(predicate::str::contains("Error downloading WASM:"))
        .stdout(predicate::str::contains("Summary:").not());
}

#[test]
fn missing_renderer_prints_usage_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    rivetoggle()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Usage: rivetoggle [-webgl|-canvas|-webgl2] [-v version]",
        ));
}

#[test]
fn unknown_renderer_prints_usage_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    rivetoggle()
        .current_dir(dir.path())
        .arg("-svg")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn empty_project_reports_zero_counts() {
    let dir = tempfile::tempdir().unwrap();
    rivetoggle()
        .current_dir(dir.path())
        .args(["-canvas", "-v", "3.2.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 0 files"))
        .stdout(predicate::str::contains("Modified 0 files"))
        .stdout(predicate::str::contains("Final renderer: CANVAS"))
        .stdout(predicate::str::contains("Version: 3.2.1"))
        .stdout(predicate::str::contains("Downloading").not());
}

#[test]
fn up_to_date_project_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = "{ \"dependencies\": { \"@rive-app/webgl2-advanced\": \"2.21.6\" } }\n";
    fs::write(dir.path().join("package.json"), manifest).unwrap();

    rivetoggle()
        .current_dir(dir.path())
        .arg("-webgl2")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes needed in package.json"))
        .stdout(predicate::str::contains("Checked 1 files"))
        .stdout(predicate::str::contains("Modified 0 files"));

    assert_eq!(fs::read_to_string(dir.path().join("package.json")).unwrap(), manifest);
}

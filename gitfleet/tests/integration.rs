use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_gitfleet")));
    cmd.env_remove("GITFLEET_ROOT").env("NO_COLOR", "1");
    cmd
}

/// Root with `repoA` (clean), `repoB` (one modified file), `broken` (pull
/// fails) and `notARepo` (no marker).
fn fleet() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in ["repoA", "repoB", "broken"] {
        fs::create_dir_all(dir.path().join(name).join(".git")).unwrap();
    }
    fs::create_dir_all(dir.path().join("notARepo")).unwrap();
    dir
}

/// A stand-in for git that answers based on the directory it runs in.
#[cfg(unix)]
fn fake_git(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-git");
    fs::write(
        &path,
        r#"#!/bin/sh
name=$(basename "$(pwd -P)")
case "$1" in
  pull)
    echo "From origin" >&2
    if [ "$name" = "broken" ]; then
      echo "fatal: unable to access remote" >&2
      exit 1
    fi
    echo "Already up to date."
    ;;
  status)
    [ "$2" = "--porcelain" ] || exit 2
    if [ "$name" = "repoB" ]; then
      echo " M README.md"
    fi
    ;;
esac
"#,
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn status_prints_clean_and_dirty() {
    let root = fleet();
    let tools = TempDir::new().unwrap();
    let git = fake_git(tools.path());

    let assert = cmd()
        .arg("status")
        .args(["--root", root.path().to_str().unwrap()])
        .args(["--git", git.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, "CLEAN : broken\nCLEAN : repoA\nDIRTY : repoB\n");
}

#[cfg(unix)]
#[test]
fn status_root_from_environment() {
    let root = fleet();
    let tools = TempDir::new().unwrap();
    let git = fake_git(tools.path());

    cmd()
        .arg("status")
        .env("GITFLEET_ROOT", root.path())
        .args(["--git", git.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("DIRTY : repoB"));
}

#[cfg(unix)]
#[test]
fn pull_reports_failure_and_continues() {
    let root = fleet();
    let tools = TempDir::new().unwrap();
    let git = fake_git(tools.path());

    let assert = cmd()
        .arg("pull")
        .args(["--root", root.path().to_str().unwrap()])
        .args(["--git", git.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("    fatal: unable to access remote\n"), "{stdout}");
    assert!(stdout.contains("Failed to update broken"), "{stdout}");
    assert!(!stdout.contains("Failed to update repoA"), "{stdout}");
    assert!(stdout.contains("Skipping notARepo"), "{stdout}");
    assert!(stdout.contains("    From origin\n"), "{stdout}");

    let failed = stdout.find("Failed to update broken").unwrap();
    let next = stdout.find("Updating repoA").unwrap();
    assert!(failed < next);
    assert!(stdout.contains("2 updated, 1 failed, 1 skipped"), "{stdout}");
}

#[test]
fn missing_root_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    for sub in ["pull", "status"] {
        cmd()
            .arg(sub)
            .args(["--root", missing.to_str().unwrap()])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("root directory not found"));
    }
}

#[test]
fn missing_git_is_reported_per_repository() {
    let root = fleet();
    let tools = TempDir::new().unwrap();
    let git = tools.path().join("no-such-git");

    cmd()
        .arg("status")
        .args(["--root", root.path().to_str().unwrap()])
        .args(["--git", git.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("FAILED : repoA"))
        .stdout(predicate::str::contains("FAILED : repoB"));
}

#[test]
fn custom_marker() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("hgrepo/.hg")).unwrap();
    fs::create_dir_all(root.path().join("gitrepo/.git")).unwrap();

    cmd()
        .arg("pull")
        .args(["--root", root.path().to_str().unwrap()])
        .args(["--marker", ".hg"])
        .args(["--git", root.path().join("no-such-git").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping gitrepo"))
        .stdout(predicate::str::contains("Failed to update hgrepo"));
}

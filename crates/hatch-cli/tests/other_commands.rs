//! Tests for `hatch hook`, `hatch config`, `hatch init` and completions.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hatch(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hatch").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("NO_COLOR", "1")
        .env_remove("HATCH_TOOLCHAIN__VERSION");
    cmd
}

fn repo_with_script(temp: &TempDir) -> &Path {
    let root = temp.path();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("scripts")).unwrap();
    fs::write(root.join("scripts/pre-commit"), "#!/bin/sh\nmix format --check-formatted\n")
        .unwrap();
    root
}

#[cfg(unix)]
#[test]
fn hook_install_links_script() {
    let temp = TempDir::new().unwrap();
    let root = repo_with_script(&temp);

    hatch(root)
        .args(["hook", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed"));

    let link = root.join(".git/hooks/pre-commit");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());

    hatch(root)
        .args(["hook", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already installed"));
}

#[cfg(unix)]
#[test]
fn hook_install_refuses_foreign_hook_without_force() {
    let temp = TempDir::new().unwrap();
    let root = repo_with_script(&temp);
    fs::create_dir_all(root.join(".git/hooks")).unwrap();
    fs::write(root.join(".git/hooks/pre-commit"), "#!/bin/sh\n").unwrap();

    hatch(root).args(["hook", "install"]).assert().code(2);

    hatch(root)
        .args(["hook", "install", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced"));
}

#[test]
fn hook_install_outside_repository_is_not_found() {
    let temp = TempDir::new().unwrap();

    hatch(temp.path())
        .args(["hook", "install"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("git init"));
}

#[test]
fn config_get_default_toolchain() {
    let temp = TempDir::new().unwrap();

    hatch(temp.path())
        .args(["config", "get", "toolchain.version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.15.0"));
}

#[test]
fn config_get_unknown_key_exits_4() {
    let temp = TempDir::new().unwrap();

    hatch(temp.path())
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn init_then_config_path_agree() {
    let temp = TempDir::new().unwrap();

    hatch(temp.path())
        .args(["--config", "hatch.toml", "init"])
        .assert()
        .success();
    assert!(read_config(temp.path()).contains("[toolchain]"));

    hatch(temp.path())
        .args(["--config", "hatch.toml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hatch.toml"));
}

fn read_config(dir: &Path) -> String {
    fs::read_to_string(dir.join("hatch.toml")).unwrap()
}

#[test]
fn bash_completions_use_binary_name() {
    let temp = TempDir::new().unwrap();

    hatch(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hatch"));
}

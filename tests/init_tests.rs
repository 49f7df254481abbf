//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_blog, miniblog_cmd};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    miniblog_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized miniblog"));

    assert!(temp.path().join(".miniblog").is_dir());

    let content = fs::read_to_string(temp.path().join(".miniblog/config.toml")).unwrap();
    assert!(content.contains("default_sort = \"newest\""));
    assert!(content.contains("export_file = \"mini-blog-export.json\""));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_blog(temp.path());
    miniblog_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_command_outside_blog_fails() {
    let temp = TempDir::new().unwrap();

    miniblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("miniblog init"));
}

#[test]
fn test_miniblog_root_env() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_blog(temp.path());

    miniblog_cmd()
        .current_dir(elsewhere.path())
        .env("MINIBLOG_ROOT", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));
}

#[test]
fn test_config_set_and_get_sort() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());

    miniblog_cmd()
        .current_dir(temp.path())
        .args(["config", "default_sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("newest"));

    miniblog_cmd()
        .current_dir(temp.path())
        .args(["config", "default_sort", "oldest"])
        .assert()
        .success();

    miniblog_cmd()
        .current_dir(temp.path())
        .args(["config", "default_sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("oldest"));
}

#[test]
fn test_config_invalid_sort_fails() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());

    miniblog_cmd()
        .current_dir(temp.path())
        .args(["config", "default_sort", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid sort modes"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());

    miniblog_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_sort = newest"))
        .stdout(predicate::str::contains("preview_chars = 600"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_set_created_fails() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());

    miniblog_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2020-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

//! Integration tests for list and categories commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{init_blog, miniblog_cmd, write_posts, TWO_POSTS};

fn list_titles(root: &std::path::Path, args: &[&str]) -> Vec<String> {
    let output = miniblog_cmd()
        .current_dir(root)
        .arg("list")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .filter(|line| line.contains("(id "))
        .map(|line| line.split("  (id ").next().unwrap().to_string())
        .collect()
}

#[test]
fn test_list_no_posts() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());

    miniblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));
}

#[test]
fn test_list_sort_orders() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());
    write_posts(temp.path(), TWO_POSTS);

    assert_eq!(list_titles(temp.path(), &[]), vec!["B", "A"]);
    assert_eq!(list_titles(temp.path(), &["--sort", "newest"]), vec!["B", "A"]);
    assert_eq!(list_titles(temp.path(), &["--sort", "oldest"]), vec!["A", "B"]);
    assert_eq!(list_titles(temp.path(), &["--sort", "title-desc"]), vec!["B", "A"]);
    assert_eq!(list_titles(temp.path(), &["--sort", "bogus"]), vec!["A", "B"]);
    assert_eq!(list_titles(temp.path(), &["--sort", "NEWEST"]), vec!["A", "B"]);
}

#[test]
fn test_list_search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());
    write_posts(temp.path(), TWO_POSTS);

    assert_eq!(list_titles(temp.path(), &["--search", "b"]), vec!["B"]);
    assert_eq!(list_titles(temp.path(), &["--search", "TIPS"]), vec!["B"]);
    assert_eq!(list_titles(temp.path(), &["--search", "X"]), vec!["A"]);
}

#[test]
fn test_list_category_filter() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());
    write_posts(temp.path(), TWO_POSTS);

    assert_eq!(list_titles(temp.path(), &["--category", "News"]), vec!["A"]);
    assert!(list_titles(temp.path(), &["--category", "news"]).is_empty());
    assert!(list_titles(temp.path(), &["--category", "News", "--search", "y"]).is_empty());
}

#[test]
fn test_list_uses_configured_default_sort() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());
    write_posts(temp.path(), TWO_POSTS);

    miniblog_cmd()
        .current_dir(temp.path())
        .args(["config", "default_sort", "oldest"])
        .assert()
        .success();

    assert_eq!(list_titles(temp.path(), &[]), vec!["A", "B"]);
}

#[test]
fn test_list_corrupt_store_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());
    write_posts(temp.path(), "{ this is not json");

    miniblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));
}

#[test]
fn test_list_clamps_long_posts() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());
    let long = "word ".repeat(200);
    write_posts(
        temp.path(),
        &format!(
            r#"[{{"id": 5, "title": "Long", "content": "{}", "category": "News", "createdAt": 5}}]"#,
            long
        ),
    );

    miniblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Read full post: miniblog show 5"));

    miniblog_cmd()
        .current_dir(temp.path())
        .args(["list", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Read full post").not());
}

#[test]
fn test_list_tolerates_unknown_and_missing_categories() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());
    write_posts(
        temp.path(),
        r#"[
          {"id": 1, "title": "Imported", "content": "x", "category": "Recipes", "createdAt": 1},
          {"id": 2, "title": "Bare", "content": "y", "createdAt": 2}
        ]"#,
    );

    miniblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Recipes]"))
        .stdout(predicate::str::contains("Bare  (id 2)"));

    assert_eq!(
        list_titles(temp.path(), &["--category", "Recipes"]),
        vec!["Imported"]
    );
}

#[test]
fn test_categories_lists_allowed_then_unrecognized() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());
    write_posts(
        temp.path(),
        r#"[{"id": 1, "title": "Imported", "content": "x", "category": "Recipes", "createdAt": 1}]"#,
    );

    miniblog_cmd()
        .current_dir(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(
            "News\nTips\nTutorial\nOpinion\nAnnouncement\nOther\nRecipes (unrecognized)\n",
        );
}

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn miniblog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("miniblog").unwrap();
    cmd.env_remove("MINIBLOG_ROOT");
    cmd.env_remove("MINIBLOG_LOG");
    cmd
}

/// Initialize a blog at `root`
pub fn init_blog(root: &Path) {
    miniblog_cmd().arg("init").arg(root).assert().success();
}

/// Write the current post collection directly
pub fn write_posts(root: &Path, json: &str) {
    fs::write(root.join(".miniblog/mini_blog_posts_v2.json"), json).unwrap();
}

pub fn read_posts(root: &Path) -> String {
    fs::read_to_string(root.join(".miniblog/mini_blog_posts_v2.json")).unwrap()
}

/// Ids of the stored collection, in stored order
pub fn stored_ids(root: &Path) -> Vec<i64> {
    let posts: Vec<serde_json::Value> = serde_json::from_str(&read_posts(root)).unwrap();
    posts.iter().map(|p| p["id"].as_i64().unwrap()).collect()
}

pub const TWO_POSTS: &str = r#"[
  {"id": 1, "title": "A", "content": "x", "category": "News", "createdAt": 100},
  {"id": 2, "title": "B", "content": "y", "category": "Tips", "createdAt": 200}
]"#;

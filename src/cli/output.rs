//! Output formatting utilities

use crate::domain::post::PREVIEW_MAX_LINES;
use crate::domain::{CategoryLabel, Post};

fn format_meta(post: &Post) -> String {
    let date = post
        .created_local()
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown date".to_string());

    match post.category_label() {
        Some(label) => format!("[{}] {}", label, date),
        None => date,
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {}\n", line))
        .collect()
}

/// Clamp content to the preview limits
fn preview(content: &str, preview_chars: usize) -> String {
    let clamped: String = content.chars().take(preview_chars).collect();
    let clamped: Vec<&str> = clamped.split('\n').take(PREVIEW_MAX_LINES).collect();
    format!("{}…", clamped.join("\n").trim_end())
}

/// Format a listing. Long content is clamped unless `full` is set.
pub fn format_post_list(posts: &[Post], preview_chars: usize, full: bool) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for (i, post) in posts.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}  (id {})\n", post.title, post.id));
        output.push_str(&format!("  {}\n", format_meta(post)));

        if !full && post.is_long(preview_chars) {
            output.push_str(&indent(&preview(&post.content, preview_chars)));
            output.push_str(&format!(
                "  Read full post: miniblog show {}\n",
                post.id
            ));
        } else {
            output.push_str(&indent(&post.content));
        }
    }
    output
}

/// Format the detail view of one post
pub fn format_post_detail(post: &Post) -> String {
    format!(
        "{}\n{}\n\n{}\n",
        post.title,
        format_meta(post),
        post.content
    )
}

/// Format category filter options, one per line
pub fn format_category_list(categories: &[CategoryLabel]) -> String {
    let mut output = String::new();
    for category in categories {
        match category {
            CategoryLabel::Known(c) => output.push_str(&format!("{}\n", c)),
            CategoryLabel::Unrecognized(raw) => {
                output.push_str(&format!("{} (unrecognized)\n", raw))
            }
        }
    }
    output
}

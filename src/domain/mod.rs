//! Domain layer - Business logic and domain models

pub mod category;
pub mod post;
pub mod query;

pub use category::{Category, CategoryLabel};
pub use post::{categories_in_use, parse_post_ref, Post, PostDraft};
pub use query::{PostQuery, SortMode};

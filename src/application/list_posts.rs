//! List posts use case

use crate::domain::{categories_in_use, Category, CategoryLabel, Post, PostQuery};
use crate::infrastructure::{KeyValueStore, PostRepository};

/// Posts visible under `query`, in display order
pub fn list_posts<S: KeyValueStore>(
    repository: &PostRepository<S>,
    query: &PostQuery,
) -> Vec<Post> {
    let posts = repository.load();
    query.apply(&posts).into_iter().cloned().collect()
}

/// Categories offered for filtering: the allowed set, then any other
/// categories found in stored posts
pub fn category_options(posts: &[Post]) -> Vec<CategoryLabel> {
    let mut options: Vec<CategoryLabel> = Category::ALL
        .into_iter()
        .map(CategoryLabel::Known)
        .collect();

    options.extend(
        categories_in_use(posts)
            .iter()
            .map(|raw| CategoryLabel::from_raw(raw))
            .filter(|label| matches!(label, CategoryLabel::Unrecognized(_))),
    );
    options
}

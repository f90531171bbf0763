//! Sample registry data for tests.
//!
//! Three posts with distinct dates, tags, and content refs; ids 1-3.

use broadsheet_types::{Post, PostId, Registry};

/// Build a single post with the given id, title, date, and tags.
pub fn sample_post(id: u64, title: &str, date: &str, tags: &[&str]) -> Post {
    Post {
        id: PostId::new(id),
        title: title.to_string(),
        date: date.parse().expect("fixture date must be ISO 8601"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        thumbnail: None,
        excerpt: format!("Excerpt for {}", title),
        content_ref: format!("posts/post-{}.html", id),
    }
}

/// The three-post sample set: newest first by date is 1, 2, 3.
pub fn sample_posts() -> Vec<Post> {
    vec![
        sample_post(
            1,
            "How Binary Search Actually Works",
            "2025-02-10",
            &["algorithms", "fundamentals"],
        ),
        sample_post(
            2,
            "Understanding Big-O Notation",
            "2025-01-28",
            &["complexity", "fundamentals"],
        ),
        sample_post(
            3,
            "TCP vs UDP: When Reliability Costs Too Much",
            "2025-01-15",
            &["networking", "systems"],
        ),
    ]
}

/// A registry built from [`sample_posts`].
pub fn sample_registry() -> Registry {
    Registry::new(sample_posts()).expect("sample posts have unique ids")
}

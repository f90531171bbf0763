use broadsheet_engine::{count_label, format_long_date};
use broadsheet_runtime::FetchError;
use broadsheet_types::Post;

use super::view_models::{DetailViewModel, ListViewModel, PostCardViewModel};

pub fn present_list(posts: &[Post], query: Option<&str>) -> ListViewModel {
    let cards = posts
        .iter()
        .map(|post| PostCardViewModel {
            id: post.id.value(),
            title: post.title.clone(),
            date: format_long_date(post.date),
            tags: post.tags.clone(),
            excerpt: post.excerpt.clone(),
        })
        .collect();

    ListViewModel {
        count_label: count_label(posts.len()),
        query: query.map(|q| q.to_string()),
        posts: cards,
    }
}

/// Present a post with its fetch outcome. A failed fetch becomes the
/// inline failure message, never an error that escapes the command.
pub fn present_detail(post: &Post, body: Result<String, FetchError>) -> DetailViewModel {
    let (body, body_is_error) = match body {
        Ok(content) => (content, false),
        Err(err) => (format!("Could not load post content. ({})", err), true),
    };

    DetailViewModel {
        id: post.id.value(),
        title: post.title.clone(),
        date: format_long_date(post.date),
        tags: post.tags.clone(),
        excerpt: post.excerpt.clone(),
        body,
        body_is_error,
    }
}

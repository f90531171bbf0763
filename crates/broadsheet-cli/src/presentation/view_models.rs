use serde::Serialize;

/// One post summary row in the list view.
#[derive(Debug, Clone, Serialize)]
pub struct PostCardViewModel {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub excerpt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListViewModel {
    pub count_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub posts: Vec<PostCardViewModel>,
}

/// A single post with its fetched body (or the inline failure message).
#[derive(Debug, Clone, Serialize)]
pub struct DetailViewModel {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub body: String,
    pub body_is_error: bool,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::{Error, Result};

/// Unique identifier for a post in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single post's metadata plus a reference to its body content.
///
/// The body itself lives in an external resource named by `content_ref`
/// and is fetched on demand when the post is opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier.
    pub id: PostId,
    /// Display title.
    pub title: String,
    /// Calendar date ("YYYY-MM-DD" in the registry file). Drives the
    /// reverse-chronological sort and the formatted display date.
    pub date: NaiveDate,
    /// Ordered category labels. Order affects display order only.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional image reference for the card thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Short summary shown on the card and the detail header.
    pub excerpt: String,
    /// Path or URL of the post's body content, resolved against the
    /// configured content base when fetched.
    pub content_ref: String,
}

/// The full ordered set of known posts.
///
/// Static configuration data: constructed once at startup from the
/// registry file and never mutated afterwards. All browsing operations
/// produce new derived sequences over it. The construction order is the
/// tie-break order wherever two posts share a date.
#[derive(Debug, Clone)]
pub struct Registry {
    posts: Vec<Post>,
}

impl Registry {
    /// Build a registry, rejecting duplicate post ids.
    pub fn new(posts: Vec<Post>) -> Result<Self> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.id) {
                return Err(Error::Config(format!(
                    "duplicate post id {} in registry",
                    post.id
                )));
            }
        }
        Ok(Self { posts })
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PostId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }
}

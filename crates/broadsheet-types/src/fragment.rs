use crate::PostId;

const FRAGMENT_PREFIX: &str = "#post-";

/// Render the URL fragment that names a post ("#post-3").
pub fn post_fragment(id: PostId) -> String {
    format!("{}{}", FRAGMENT_PREFIX, id)
}

/// Parse a URL fragment back into a post id.
///
/// Accepts the fragment with or without its leading '#'. Anything that
/// is not exactly a `post-<integer>` reference yields None.
pub fn parse_fragment(fragment: &str) -> Option<PostId> {
    let trimmed = fragment.strip_prefix('#').unwrap_or(fragment);
    let id = trimmed.strip_prefix("post-")?;
    id.parse::<u64>().ok().map(PostId::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_round_trips() {
        let id = PostId::new(42);
        assert_eq!(post_fragment(id), "#post-42");
        assert_eq!(parse_fragment(&post_fragment(id)), Some(id));
    }

    #[test]
    fn parse_accepts_bare_fragment() {
        assert_eq!(parse_fragment("post-7"), Some(PostId::new(7)));
    }

    #[test]
    fn parse_rejects_non_post_fragments() {
        assert_eq!(parse_fragment(""), None);
        assert_eq!(parse_fragment("#about"), None);
        assert_eq!(parse_fragment("#post-"), None);
        assert_eq!(parse_fragment("#post-abc"), None);
        assert_eq!(parse_fragment("#post-1x"), None);
    }
}

use broadsheet_types::{Post, Registry};

/// Filter posts against a free-text query, newest first.
///
/// The query is trimmed and lowercased before matching. A post matches
/// when the query is a substring of its lowercased title, its lowercased
/// excerpt, or at least one of its tags. Tags are compared as stored:
/// the query is lowercased but the tag is not, so a mixed-case tag only
/// matches a query that is already lowercase.
///
/// The result is a fresh sequence sorted by date descending. The sort is
/// stable, so posts sharing a date keep their registry order.
pub fn filter_and_sort(registry: &Registry, query: &str) -> Vec<Post> {
    let q = query.trim().to_lowercase();

    let mut posts: Vec<Post> = if q.is_empty() {
        registry.iter().cloned().collect()
    } else {
        registry
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&q)
                    || p.excerpt.to_lowercase().contains(&q)
                    || p.tags.iter().any(|t| t.contains(&q))
            })
            .cloned()
            .collect()
    };

    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadsheet_types::PostId;

    fn sample_registry() -> Registry {
        let posts = vec![
            post(1, "How Binary Search Actually Works", "2025-02-10", &["algorithms", "fundamentals"]),
            post(2, "Understanding Big-O Notation", "2025-01-28", &["complexity", "fundamentals"]),
            post(3, "TCP vs UDP: When Reliability Costs Too Much", "2025-01-15", &["networking", "systems"]),
        ];
        Registry::new(posts).unwrap()
    }

    fn post(id: u64, title: &str, date: &str, tags: &[&str]) -> Post {
        Post {
            id: PostId::new(id),
            title: title.to_string(),
            date: date.parse().unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            thumbnail: None,
            excerpt: format!("Excerpt for {}", title),
            content_ref: format!("posts/{}.html", id),
        }
    }

    #[test]
    fn empty_query_returns_all_posts_sorted() {
        let registry = sample_registry();
        let result = filter_and_sort(&registry, "");
        let ids: Vec<u64> = result.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn whitespace_query_is_treated_as_empty() {
        let registry = sample_registry();
        assert_eq!(filter_and_sort(&registry, "   ").len(), 3);
    }

    #[test]
    fn title_matching_is_case_insensitive() {
        let registry = sample_registry();
        let result = filter_and_sort(&registry, "BINARY search");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, PostId::new(1));
    }

    #[test]
    fn excerpt_matching_is_case_insensitive() {
        let registry = sample_registry();
        let result = filter_and_sort(&registry, "excerpt for understanding");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, PostId::new(2));
    }

    #[test]
    fn tag_substring_matches() {
        let registry = sample_registry();
        let result = filter_and_sort(&registry, "network");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, PostId::new(3));
    }

    #[test]
    fn tags_are_compared_as_stored() {
        // The query is lowercased but the tag is not, so an uppercase
        // tag is unreachable by any query containing letters.
        let posts = vec![post(1, "Mixed tag", "2025-02-10", &["Networking"])];
        let registry = Registry::new(posts).unwrap();

        assert!(filter_and_sort(&registry, "Networking").is_empty());
        assert!(filter_and_sort(&registry, "networking").is_empty());
    }

    #[test]
    fn no_match_yields_empty_result() {
        let registry = sample_registry();
        assert!(filter_and_sort(&registry, "quantum").is_empty());
    }

    #[test]
    fn result_is_sorted_newest_first() {
        let registry = sample_registry();
        let result = filter_and_sort(&registry, "fundamentals");
        let dates: Vec<String> = result.iter().map(|p| p.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-02-10", "2025-01-28"]);
    }

    #[test]
    fn equal_dates_preserve_registry_order() {
        let posts = vec![
            post(10, "First", "2025-03-01", &[]),
            post(11, "Second", "2025-03-01", &[]),
            post(12, "Third", "2025-03-01", &[]),
        ];
        let registry = Registry::new(posts).unwrap();

        let ids: Vec<u64> = filter_and_sort(&registry, "")
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn input_registry_is_not_mutated() {
        let registry = sample_registry();
        let before: Vec<u64> = registry.iter().map(|p| p.id.value()).collect();
        let _ = filter_and_sort(&registry, "tcp");
        let after: Vec<u64> = registry.iter().map(|p| p.id.value()).collect();
        assert_eq!(before, after);
    }
}

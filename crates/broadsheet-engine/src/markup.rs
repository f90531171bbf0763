use broadsheet_types::{Post, TagPalette};

use crate::text::{escape_html, format_long_date};

/// Rendered output for the list view: the post-count label plus the
/// card grid (or the no-results placeholder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarkup {
    pub count_label: String,
    pub grid: String,
}

/// "0 posts" / "1 post" / "N posts"
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 post".to_string()
    } else {
        format!("{} posts", count)
    }
}

/// Render colored tag chips for a post's tag row.
///
/// Chip order follows tag order. Colors come from the fixed palette;
/// tag names are escaped, the palette values are trusted constants.
pub fn render_tag_row(tags: &[String], palette: &TagPalette) -> String {
    tags.iter()
        .map(|tag| {
            let c = palette.color(tag);
            format!(
                r#"<span class="tag" style="background:{};color:{};">{}</span>"#,
                c.bg,
                c.fg,
                escape_html(tag)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Render the full card list.
///
/// Every text field that originates in the registry (title, excerpt,
/// tag names, thumbnail URL) is escaped before insertion. An empty input
/// produces a single placeholder paragraph instead of an empty grid.
pub fn render_list(posts: &[Post], palette: &TagPalette) -> ListMarkup {
    let count_label = count_label(posts.len());

    if posts.is_empty() {
        return ListMarkup {
            count_label,
            grid: r#"<p class="empty-msg">No posts match your search.</p>"#.to_string(),
        };
    }

    let grid = posts
        .iter()
        .map(|post| render_card(post, palette))
        .collect::<Vec<_>>()
        .join("\n");

    ListMarkup { count_label, grid }
}

fn render_card(post: &Post, palette: &TagPalette) -> String {
    let thumb = match &post.thumbnail {
        Some(url) => format!(
            "\n  <div class=\"card-thumb\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"/></div>",
            escape_html(url),
            escape_html(&post.title)
        ),
        None => String::new(),
    };

    format!(
        "<article class=\"card\" data-id=\"{id}\">{thumb}\n  \
         <div class=\"card-body\">\n    \
         <div class=\"card-meta\">\n      \
         <span class=\"card-date\">{date}</span>\n      \
         <div class=\"tag-row\">{tags}</div>\n    \
         </div>\n    \
         <h2 class=\"card-title\">{title}</h2>\n    \
         <p class=\"card-excerpt\">{excerpt}</p>\n    \
         <span class=\"card-cta\">Read more →</span>\n  \
         </div>\n</article>",
        id = post.id,
        thumb = thumb,
        date = format_long_date(post.date),
        tags = render_tag_row(&post.tags, palette),
        title = escape_html(&post.title),
        excerpt = escape_html(&post.excerpt),
    )
}

/// Placeholder shown in the body region while content is in flight.
pub fn loading_markup() -> &'static str {
    r#"<p class="loading">Loading…</p>"#
}

/// Inline failure message for a content fetch that did not succeed.
/// The reason is untrusted (it may echo response details) and is escaped.
pub fn content_error_markup(reason: &str) -> String {
    format!(
        r#"<p class="empty-msg">Could not load post content. ({})</p>"#,
        escape_html(reason)
    )
}

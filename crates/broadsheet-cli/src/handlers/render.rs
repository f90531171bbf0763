use anyhow::{Context, Result};
use broadsheet_engine::{filter_and_sort, render_list};
use broadsheet_types::{Registry, TagPalette};
use std::path::Path;

pub fn handle(registry: &Registry, query: Option<&str>, output: Option<&Path>) -> Result<()> {
    let posts = filter_and_sort(registry, query.unwrap_or(""));
    let markup = render_list(&posts, TagPalette::shared());

    let html = format!(
        "<p id=\"post-count\">{}</p>\n<div id=\"card-grid\">\n{}\n</div>\n",
        markup.count_label, markup.grid
    );

    match output {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", html),
    }

    Ok(())
}

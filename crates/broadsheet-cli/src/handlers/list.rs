use crate::args::OutputFormat;
use crate::presentation::{present_list, ConsoleRenderer};
use anyhow::Result;
use broadsheet_engine::filter_and_sort;
use broadsheet_types::Registry;

pub fn handle(registry: &Registry, query: Option<&str>, format: OutputFormat) -> Result<()> {
    let posts = filter_and_sort(registry, query.unwrap_or(""));
    let view = present_list(&posts, query);

    let renderer = ConsoleRenderer::new(format);
    renderer.render_list(&view)
}

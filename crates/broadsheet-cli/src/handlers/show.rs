use crate::args::OutputFormat;
use crate::presentation::{present_detail, ConsoleRenderer};
use anyhow::{anyhow, Context, Result};
use broadsheet_runtime::{AnyFetcher, ContentFetcher};
use broadsheet_types::{PostId, Registry};

pub fn handle(registry: &Registry, id: u64, content_base: &str, format: OutputFormat) -> Result<()> {
    let id = PostId::new(id);
    let post = registry
        .get(id)
        .ok_or_else(|| anyhow!("no post with id {}", id))?;

    let fetcher = AnyFetcher::for_base(content_base)
        .map_err(|err| anyhow!("invalid content base {}: {}", content_base, err))?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let body = runtime.block_on(fetcher.fetch(&post.content_ref));

    // A failed fetch renders inline; it is not a command failure.
    let view = present_detail(post, body);

    let renderer = ConsoleRenderer::new(format);
    renderer.render_detail(&view)
}

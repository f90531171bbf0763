use super::args::{Cli, Commands};
use super::handlers;
use anyhow::{Context, Result};
use broadsheet_runtime::{load_registry, Config};

pub fn run(cli: Cli) -> Result<()> {
    init_tracing();

    let config = Config::load_from(&cli.config)?;
    let registry_path = config.resolve_registry_path(cli.registry.as_deref());
    let content_base = config.resolve_content_base(&registry_path);

    let registry = load_registry(&registry_path)
        .with_context(|| format!("failed to load registry {}", registry_path.display()))?;

    match cli.command {
        Commands::List { query, format } => {
            handlers::list::handle(&registry, query.as_deref(), format)
        }

        Commands::Show { id, format } => {
            handlers::show::handle(&registry, id, &content_base, format)
        }

        Commands::Render { query, output } => {
            handlers::render::handle(&registry, query.as_deref(), output.as_deref())
        }

        Commands::Browse { fragment } => {
            handlers::browse::handle(registry, &content_base, fragment.as_deref())
        }
    }
}

/// Log to stderr, honoring RUST_LOG and defaulting to warnings only.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

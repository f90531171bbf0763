use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "broadsheet")]
#[command(about = "Browse a registry of posts: searchable list, detail view, history-aware navigation")]
#[command(version)]
pub struct Cli {
    /// Path of the registry file (overrides config and BROADSHEET_REGISTRY)
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,

    /// Path of the config file
    #[arg(long, global = true, default_value = "broadsheet.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List posts, filtered by an optional search query")]
    List {
        #[arg(long, short, help = "Free-text query matched against title, excerpt, and tags")]
        query: Option<String>,

        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Show a single post, fetching its body content")]
    Show {
        #[arg(help = "Post id")]
        id: u64,

        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Render the list view as HTML markup")]
    Render {
        #[arg(long, short, help = "Free-text query matched against title, excerpt, and tags")]
        query: Option<String>,

        #[arg(long, short, help = "Write the markup to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    #[command(about = "Browse interactively: search, open posts, walk history")]
    Browse {
        #[arg(
            long,
            help = "Start on a post's detail view, as a '#post-<id>' deep link would"
        )]
        fragment: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

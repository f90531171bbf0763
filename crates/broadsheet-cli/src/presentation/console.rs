use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use super::view_models::{DetailViewModel, ListViewModel};
use crate::args::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn render_list(&self, view: &ListViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.render_json(view),
            OutputFormat::Plain => {
                if let Some(query) = &view.query {
                    println!("{} matching \"{}\"", view.count_label, query);
                } else {
                    println!("{}", view.count_label);
                }

                if view.posts.is_empty() {
                    println!("\nNo posts match your search.");
                    return Ok(());
                }

                println!();
                println!("{:<6} {:<20} {:<45} TAGS", "ID", "DATE", "TITLE");
                println!("{}", "-".repeat(100));

                for post in &view.posts {
                    println!(
                        "{:<6} {:<20} {:<45} {}",
                        post.id,
                        post.date,
                        truncate(&post.title, 43),
                        post.tags.join(", ")
                    );
                }

                Ok(())
            }
        }
    }

    pub fn render_detail(&self, view: &DetailViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.render_json(view),
            OutputFormat::Plain => {
                if self.color {
                    println!("{}", view.title.bold());
                } else {
                    println!("{}", view.title);
                }

                if view.tags.is_empty() {
                    println!("{}", view.date);
                } else {
                    println!("{} · {}", view.date, view.tags.join(", "));
                }

                println!();
                println!("{}", view.excerpt);
                println!();

                if view.body_is_error && self.color {
                    println!("{}", view.body.red());
                } else {
                    println!("{}", view.body);
                }

                Ok(())
            }
        }
    }

    fn render_json<T: serde::Serialize>(&self, view: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(view)?);
        Ok(())
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{}…", cut)
    }
}

use anyhow::{anyhow, Context, Result};
use broadsheet_runtime::{
    AnyFetcher, Browser, BrowserEvent, BrowserSurface, DetailHeader, InMemoryHistory,
};
use broadsheet_types::{PostId, Registry};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::Write;

/// Interactive browse loop.
///
/// Reads one command per line and dispatches it into the browser:
/// free text searches, a bare number opens that post, `b`/`f` walk the
/// history, `h` goes home, `q` quits.
pub fn handle(registry: Registry, content_base: &str, fragment: Option<&str>) -> Result<()> {
    let fetcher = AnyFetcher::for_base(content_base)
        .map_err(|err| anyhow!("invalid content base {}: {}", content_base, err))?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(run_loop(registry, fetcher, fragment))?;

    Ok(())
}

async fn run_loop(registry: Registry, fetcher: AnyFetcher, fragment: Option<&str>) -> Result<()> {
    let surface = ConsoleSurface::new();
    let mut browser = Browser::new(registry, surface, InMemoryHistory::new(), fetcher);

    browser.start(fragment).await;
    print_help();

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "q" | "quit" => break,

            "b" | "back" => {
                let entry = browser.controller_mut().history_mut().back();
                match entry {
                    Some(entry) => {
                        println!("(location: /{})", entry.url_suffix());
                        browser.dispatch(BrowserEvent::HistoryPopped(entry)).await;
                    }
                    None => println!("Already at the oldest entry."),
                }
            }

            "f" | "forward" => {
                let entry = browser.controller_mut().history_mut().forward();
                match entry {
                    Some(entry) => {
                        println!("(location: /{})", entry.url_suffix());
                        browser.dispatch(BrowserEvent::HistoryPopped(entry)).await;
                    }
                    None => println!("Already at the newest entry."),
                }
            }

            "h" | "home" => browser.dispatch(BrowserEvent::HomeRequested).await,

            "?" | "help" => print_help(),

            _ => {
                if let Ok(id) = input.parse::<u64>() {
                    browser
                        .dispatch(BrowserEvent::PostActivated(PostId::new(id)))
                        .await;
                } else {
                    browser
                        .dispatch(BrowserEvent::SearchChanged(input.to_string()))
                        .await;
                }
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands: <text> search · <id> open post · b back · f forward · h home · q quit");
}

/// Surface that prints every slot write to the terminal.
///
/// The grid and body slots hold markup and are printed as-is; header and
/// label slots are formatted as text lines.
struct ConsoleSurface {
    color: bool,
}

impl ConsoleSurface {
    fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    fn rule(&self, title: &str) {
        println!("\n──── {} {}", title, "─".repeat(60_usize.saturating_sub(title.len())));
    }
}

impl BrowserSurface for ConsoleSurface {
    fn set_list_visible(&mut self, visible: bool) {
        if visible {
            self.rule("list");
        }
    }

    fn set_detail_visible(&mut self, visible: bool) {
        if visible {
            self.rule("post");
        }
    }

    fn write_count_label(&mut self, label: &str) {
        if self.color {
            println!("{}", label.bold());
        } else {
            println!("{}", label);
        }
    }

    fn write_grid(&mut self, markup: &str) {
        println!("{}", markup);
    }

    fn clear_search_input(&mut self) {
        println!("(search cleared)");
    }

    fn write_detail_header(&mut self, header: &DetailHeader) {
        if self.color {
            println!("{}", header.title.bold());
        } else {
            println!("{}", header.title);
        }
        println!("{}", header.date);
        if !header.tag_row.is_empty() {
            println!("{}", header.tag_row);
        }
        println!("{}", header.excerpt);
    }

    fn write_body(&mut self, markup: &str) {
        println!("\n{}", markup);
    }

    fn scroll_to_top(&mut self) {}
}

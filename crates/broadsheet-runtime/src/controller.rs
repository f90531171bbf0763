use broadsheet_engine::{
    content_error_markup, filter_and_sort, format_long_date, loading_markup, render_list,
    render_tag_row,
};
use broadsheet_types::{parse_fragment, PostId, Registry, TagPalette};

use crate::fetch::FetchError;
use crate::history::{HistoryEntry, HistoryPort};
use crate::surface::{BrowserSurface, DetailHeader};

/// Which view is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// The searchable card list (initial state).
    List,
    /// A single post's detail view.
    Detail(PostId),
}

/// Messages dispatched into the controller from the UI boundary.
///
/// Every user interaction and every asynchronous completion arrives as
/// one of these; the controller itself never registers callbacks.
#[derive(Debug)]
pub enum BrowserEvent {
    /// The search input changed.
    SearchChanged(String),
    /// A card (or equivalent affordance) selected a post.
    PostActivated(PostId),
    /// The back affordance was used.
    BackRequested,
    /// The home/logo affordance was used.
    HomeRequested,
    /// History navigation reached an entry (browser back/forward).
    HistoryPopped(HistoryEntry),
    /// A content fetch settled.
    ContentLoaded {
        generation: u64,
        result: Result<String, FetchError>,
    },
}

/// A request to retrieve a post's body content, produced by a detail
/// navigation. Carries the navigation generation so late completions can
/// be told apart from current ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub post_id: PostId,
    pub content_ref: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replay,
}

/// The post browser: list/detail view controller with history sync.
///
/// Owns the immutable registry and the derived view state (query, active
/// view, navigation generation). The rendering surface and the history
/// are injected, so the whole state machine runs against fakes in tests.
/// Content fetching is externalized: a detail navigation returns a
/// [`FetchRequest`], and the driver feeds the outcome back in as
/// [`BrowserEvent::ContentLoaded`].
pub struct PostBrowser<S: BrowserSurface, H: HistoryPort> {
    registry: Registry,
    palette: TagPalette,
    query: String,
    state: ViewState,
    generation: u64,
    surface: S,
    history: H,
}

impl<S: BrowserSurface, H: HistoryPort> PostBrowser<S, H> {
    pub fn new(registry: Registry, surface: S, history: H) -> Self {
        Self {
            registry,
            palette: TagPalette::new(),
            query: String::new(),
            state: ViewState::List,
            generation: 0,
            surface,
            history,
        }
    }

    /// Render the initial view. With a fragment naming a known post the
    /// browser starts directly in that post's detail view (pushing its
    /// history entry, as a fresh selection would); otherwise it starts
    /// on the full, default-sorted list.
    pub fn start(&mut self, fragment: Option<&str>) -> Option<FetchRequest> {
        self.render_current_list();

        if let Some(id) = fragment.and_then(parse_fragment)
            && self.registry.contains(id)
        {
            return self.open_post(id, HistoryMode::Push);
        }

        None
    }

    /// Feed one event through the state machine. At most one fetch
    /// request comes back out.
    pub fn dispatch(&mut self, event: BrowserEvent) -> Option<FetchRequest> {
        match event {
            BrowserEvent::SearchChanged(query) => {
                self.query = query;
                self.render_current_list();
                None
            }

            BrowserEvent::PostActivated(id) => {
                if self.registry.contains(id) {
                    self.open_post(id, HistoryMode::Push)
                } else {
                    None
                }
            }

            BrowserEvent::BackRequested => {
                self.show_list(HistoryMode::Push);
                None
            }

            BrowserEvent::HomeRequested => {
                self.query.clear();
                self.surface.clear_search_input();
                self.show_list(HistoryMode::Push);
                self.render_current_list();
                None
            }

            BrowserEvent::HistoryPopped(entry) => match entry.post_id {
                Some(id) if self.registry.contains(id) => self.open_post(id, HistoryMode::Replay),
                _ => {
                    self.show_list(HistoryMode::Replay);
                    None
                }
            },

            BrowserEvent::ContentLoaded { generation, result } => {
                self.apply_content(generation, result);
                None
            }
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Recompute and rewrite the list slots from the current query.
    /// The displayed set is always derived fresh, never patched.
    fn render_current_list(&mut self) {
        let posts = filter_and_sort(&self.registry, &self.query);
        let markup = render_list(&posts, &self.palette);
        self.surface.write_count_label(&markup.count_label);
        self.surface.write_grid(&markup.grid);
    }

    fn open_post(&mut self, id: PostId, mode: HistoryMode) -> Option<FetchRequest> {
        let post = self.registry.get(id)?;
        let header = DetailHeader {
            date: format_long_date(post.date),
            tag_row: render_tag_row(&post.tags, &self.palette),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
        };
        let content_ref = post.content_ref.clone();

        self.surface.set_list_visible(false);
        self.surface.set_detail_visible(true);
        self.surface.write_detail_header(&header);
        self.surface.write_body(loading_markup());
        self.surface.scroll_to_top();

        if mode == HistoryMode::Push {
            self.history.push(HistoryEntry::post(id));
        }

        self.state = ViewState::Detail(id);
        self.generation += 1;

        Some(FetchRequest {
            generation: self.generation,
            post_id: id,
            content_ref,
        })
    }

    fn show_list(&mut self, mode: HistoryMode) {
        self.surface.set_detail_visible(false);
        self.surface.set_list_visible(true);
        self.surface.scroll_to_top();

        if mode == HistoryMode::Push {
            self.history.push(HistoryEntry::list());
        }

        self.state = ViewState::List;
        self.generation += 1;
    }

    /// Write a settled fetch into the body region, unless the user has
    /// navigated again since the fetch started. Fetched content is the
    /// post's own authored markup and goes in verbatim; failures are
    /// escaped before display.
    fn apply_content(&mut self, generation: u64, result: Result<String, FetchError>) {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale content fetch"
            );
            return;
        }

        match result {
            Ok(content) => self.surface.write_body(&content),
            Err(err) => {
                tracing::warn!(error = %err, "content fetch failed");
                self.surface.write_body(&content_error_markup(&err.to_string()));
            }
        }
    }
}

//! A surface that records every slot write for assertions.

use broadsheet_runtime::{BrowserSurface, DetailHeader};

/// In-memory stand-in for the rendering surface.
///
/// Holds the current value of every named slot, so tests assert on the
/// visible state the controller produced. `scrolls` and `searches_cleared`
/// count affordance invocations.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub list_visible: bool,
    pub detail_visible: bool,
    pub count_label: String,
    pub grid: String,
    pub detail_header: Option<DetailHeader>,
    pub body: String,
    pub scrolls: usize,
    pub searches_cleared: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            list_visible: true,
            detail_visible: false,
            count_label: String::new(),
            grid: String::new(),
            detail_header: None,
            body: String::new(),
            scrolls: 0,
            searches_cleared: 0,
        }
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserSurface for RecordingSurface {
    fn set_list_visible(&mut self, visible: bool) {
        self.list_visible = visible;
    }

    fn set_detail_visible(&mut self, visible: bool) {
        self.detail_visible = visible;
    }

    fn write_count_label(&mut self, label: &str) {
        self.count_label = label.to_string();
    }

    fn write_grid(&mut self, markup: &str) {
        self.grid = markup.to_string();
    }

    fn clear_search_input(&mut self) {
        self.searches_cleared += 1;
    }

    fn write_detail_header(&mut self, header: &DetailHeader) {
        self.detail_header = Some(header.clone());
    }

    fn write_body(&mut self, markup: &str) {
        self.body = markup.to_string();
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}

/// Detail-view header fields, populated synchronously from the registry
/// when a post is opened. `tag_row` is rendered markup; the other fields
/// are plain text written into text slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailHeader {
    pub date: String,
    pub tag_row: String,
    pub title: String,
    pub excerpt: String,
}

/// The UI surface the controller writes into.
///
/// The surface is a set of named slots (containers, labels, regions) plus
/// two affordance hooks (search clearing, scrolling). The controller owns
/// all decisions about what goes where; implementations only display.
/// A recording implementation is enough to test the controller without
/// any real rendering.
pub trait BrowserSurface {
    fn set_list_visible(&mut self, visible: bool);
    fn set_detail_visible(&mut self, visible: bool);

    /// Replace the post-count label ("3 posts").
    fn write_count_label(&mut self, label: &str);

    /// Replace the card grid wholesale. No incremental diffing: each
    /// render overwrites whatever was there before.
    fn write_grid(&mut self, markup: &str);

    /// Clear the search input (home affordance).
    fn clear_search_input(&mut self);

    fn write_detail_header(&mut self, header: &DetailHeader);

    /// Replace the detail body region (loading placeholder, fetched
    /// content, or an inline error message).
    fn write_body(&mut self, markup: &str);

    fn scroll_to_top(&mut self);
}

use broadsheet_types::{post_fragment, PostId};
use serde::{Deserialize, Serialize};

/// One navigation history entry: either the list view (no post id) or a
/// specific post's detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<PostId>,
}

impl HistoryEntry {
    pub fn list() -> Self {
        Self { post_id: None }
    }

    pub fn post(id: PostId) -> Self {
        Self { post_id: Some(id) }
    }

    /// The visible URL suffix for this entry: "#post-<id>" or nothing.
    pub fn url_suffix(&self) -> String {
        match self.post_id {
            Some(id) => post_fragment(id),
            None => String::new(),
        }
    }
}

/// The push half of history synchronization.
///
/// The controller only ever pushes; back/forward movement originates at
/// the UI boundary, which replays the reached entry into the controller
/// as a `HistoryPopped` event.
pub trait HistoryPort {
    fn push(&mut self, entry: HistoryEntry);
}

/// Browser-like history: a stack with a cursor. Pushing while somewhere
/// in the middle of the stack discards the forward tail, exactly as
/// navigating discards a real browser's forward entries.
#[derive(Debug, Clone)]
pub struct InMemoryHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl InMemoryHistory {
    /// A fresh history holding the initial list entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::list()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> HistoryEntry {
        self.entries[self.cursor]
    }

    /// Move back one entry, returning the entry to replay. None when
    /// already at the oldest entry.
    pub fn back(&mut self) -> Option<HistoryEntry> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor])
    }

    /// Move forward one entry, returning the entry to replay. None when
    /// already at the newest entry.
    pub fn forward(&mut self) -> Option<HistoryEntry> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryPort for InMemoryHistory {
    fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }
}

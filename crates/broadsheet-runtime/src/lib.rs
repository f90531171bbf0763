// Runtime module - Browser orchestration
// Wires the pure engine into a navigable browser: registry loading, the
// view-controller state machine, history sync, and content fetching.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod history;
pub mod surface;

pub use client::Browser;
pub use config::{load_registry, Config};
pub use controller::{BrowserEvent, FetchRequest, PostBrowser, ViewState};
pub use error::{Error, Result};
pub use fetch::{AnyFetcher, ContentFetcher, FetchError, FsFetcher, HttpFetcher};
pub use history::{HistoryEntry, HistoryPort, InMemoryHistory};
pub use surface::{BrowserSurface, DetailHeader};

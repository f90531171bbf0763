mod console;
mod presenters;
mod view_models;

pub use console::ConsoleRenderer;
pub use presenters::{present_detail, present_list};
pub use view_models::{DetailViewModel, ListViewModel, PostCardViewModel};

// Engine module - Pure display logic (filtering, sorting, markup rendering)
// This layer sits between registry posts (types) and the browser runtime

pub mod filter;
pub mod markup;
pub mod text;

pub use filter::filter_and_sort;
pub use markup::{
    content_error_markup, count_label, loading_markup, render_list, render_tag_row, ListMarkup,
};
pub use text::{escape_html, format_long_date};

pub mod error;
pub mod fragment;
pub mod post;
pub mod tag;

pub use error::{Error, Result};
pub use fragment::*;
pub use post::*;
pub use tag::*;

//! Test support for the broadsheet crates.
//!
//! Provides:
//! - Registry fixtures matching the sample registry shipped with the CLI
//! - A recording surface that captures every slot write
//! - A stub fetcher with programmable responses
//! - A test world that materializes a registry plus content files on disk
//!   for CLI integration tests

pub mod fetch;
pub mod fixtures;
pub mod surface;
pub mod world;

pub use fetch::StubFetcher;
pub use fixtures::{sample_post, sample_posts, sample_registry};
pub use surface::RecordingSurface;
pub use world::TestWorld;

//! Disk-backed test environment for CLI integration tests.

use crate::fixtures::sample_posts;
use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a registry file and the content files
/// its posts reference, plus a command builder pointed at it.
pub struct TestWorld {
    temp: TempDir,
}

impl TestWorld {
    /// Materialize the sample registry: `posts.json` at the root and one
    /// HTML body per post under `posts/`.
    pub fn new() -> Result<Self> {
        let temp = TempDir::new()?;

        let posts = sample_posts();
        let registry_json = serde_json::to_string_pretty(&posts)?;
        fs::write(temp.path().join("posts.json"), registry_json)?;

        fs::create_dir(temp.path().join("posts"))?;
        for post in &posts {
            fs::write(
                temp.path().join(&post.content_ref),
                format!("<p>Body of post {}</p>", post.id),
            )?;
        }

        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn registry_path(&self) -> PathBuf {
        self.temp.path().join("posts.json")
    }

    /// Overwrite (or create) a content file relative to the world root.
    pub fn write_content(&self, relative: &str, body: &str) -> Result<()> {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, body)?;
        Ok(())
    }

    /// Delete a content file so its fetch fails.
    pub fn remove_content(&self, relative: &str) -> Result<()> {
        fs::remove_file(self.temp.path().join(relative))?;
        Ok(())
    }

    /// A `broadsheet` command running inside this world.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("broadsheet").expect("broadsheet binary builds");
        cmd.current_dir(self.temp.path());
        cmd.env_remove("BROADSHEET_REGISTRY");
        cmd
    }
}

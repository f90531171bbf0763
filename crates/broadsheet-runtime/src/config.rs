use crate::{Error, Result};
use broadsheet_types::{Post, Registry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Browser configuration, read from an optional `broadsheet.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the registry file.
    #[serde(default = "default_registry_path")]
    pub registry: PathBuf,

    /// Base location content refs are resolved against: a directory or an
    /// http(s) URL. Defaults to the registry file's parent directory.
    #[serde(default)]
    pub content_base: Option<String>,
}

fn default_registry_path() -> PathBuf {
    PathBuf::from("posts.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry: default_registry_path(),
            content_base: None,
        }
    }
}

impl Config {
    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the registry path based on priority:
    /// 1. Explicit path (--registry flag)
    /// 2. BROADSHEET_REGISTRY environment variable
    /// 3. The configured (or default) path
    pub fn resolve_registry_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        if let Ok(env_path) = std::env::var("BROADSHEET_REGISTRY") {
            return PathBuf::from(env_path);
        }

        self.registry.clone()
    }

    /// Resolve the content base: the configured value, or the registry
    /// file's parent directory (the analog of resolving content refs
    /// against the page's own location).
    pub fn resolve_content_base(&self, registry_path: &Path) -> String {
        if let Some(base) = &self.content_base {
            return base.clone();
        }

        registry_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string())
    }
}

/// Load and validate a registry file (a JSON array of post records).
pub fn load_registry(path: &Path) -> Result<Registry> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        Error::Config(format!("cannot read registry {}: {}", path.display(), err))
    })?;

    let posts: Vec<Post> = serde_json::from_str(&content)?;
    Ok(Registry::new(posts)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.registry, PathBuf::from("posts.json"));
        assert!(config.content_base.is_none());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broadsheet.toml");
        fs::write(
            &path,
            "registry = \"data/posts.json\"\ncontent_base = \"https://example.com/posts\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.registry, PathBuf::from("data/posts.json"));
        assert_eq!(
            config.content_base.as_deref(),
            Some("https://example.com/posts")
        );
    }

    #[test]
    fn explicit_registry_path_wins() {
        let config = Config::default();
        let resolved = config.resolve_registry_path(Some(Path::new("elsewhere.json")));
        assert_eq!(resolved, PathBuf::from("elsewhere.json"));
    }

    #[test]
    fn content_base_falls_back_to_registry_parent() {
        let config = Config::default();
        assert_eq!(
            config.resolve_content_base(Path::new("data/posts.json")),
            "data"
        );
        assert_eq!(config.resolve_content_base(Path::new("posts.json")), ".");
    }

    #[test]
    fn load_registry_parses_posts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("posts.json");
        fs::write(
            &path,
            r#"[{
                "id": 1,
                "title": "Hello",
                "date": "2025-02-10",
                "tags": ["systems"],
                "excerpt": "First post.",
                "content_ref": "posts/hello.html"
            }]"#,
        )
        .unwrap();

        let registry = load_registry(&path).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn load_registry_rejects_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("posts.json");
        fs::write(
            &path,
            r#"[
                {"id": 1, "title": "A", "date": "2025-02-10", "excerpt": "", "content_ref": "a.html"},
                {"id": 1, "title": "B", "date": "2025-02-11", "excerpt": "", "content_ref": "b.html"}
            ]"#,
        )
        .unwrap();

        let err = load_registry(&path).unwrap_err();
        assert!(err.to_string().contains("duplicate post id"));
    }

    #[test]
    fn load_registry_reports_missing_file() {
        let err = load_registry(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read registry"));
    }
}

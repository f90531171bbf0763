use std::fmt;
use std::path::PathBuf;

use reqwest::Url;

/// A content fetch that did not produce the resource.
///
/// Rendered verbatim (escaped) into the inline body error message, so
/// Display keeps the short original phrasing ("HTTP 404").
#[derive(Debug)]
pub enum FetchError {
    /// Response arrived with a non-success status
    Status(u16),

    /// Transport-level failure (connection, resolution, invalid ref)
    Network(String),

    /// Filesystem retrieval failed
    Io(std::io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "HTTP {}", code),
            FetchError::Network(msg) => write!(f, "{}", msg),
            FetchError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Io(err) => Some(err),
            FetchError::Status(_) | FetchError::Network(_) => None,
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err)
    }
}

/// Retrieves a post's body content by its content ref.
///
/// The single suspension point of the browser: everything else is
/// synchronous. Implementations resolve the (usually relative) ref
/// against their own base location.
pub trait ContentFetcher {
    fn fetch(
        &self,
        content_ref: &str,
    ) -> impl std::future::Future<Output = Result<String, FetchError>> + Send;
}

/// Resolves content refs against a base directory on disk.
///
/// The CLI analog of same-origin static files: `posts/a.html` next to a
/// registry in `data/` is read from `data/posts/a.html`.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    base: PathBuf,
}

impl FsFetcher {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl ContentFetcher for FsFetcher {
    async fn fetch(&self, content_ref: &str) -> Result<String, FetchError> {
        let path = self.base.join(content_ref);
        tracing::debug!(path = %path.display(), "reading content file");
        Ok(tokio::fs::read_to_string(&path).await?)
    }
}

/// Retrieves content over HTTP with a plain GET. No headers, no
/// authentication, no content negotiation.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    base: Url,
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher for a base URL. The base is treated as a
    /// directory: a missing trailing slash is added so relative refs
    /// resolve under it rather than replacing its last segment.
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let base = Url::parse(&base).map_err(|err| FetchError::Network(err.to_string()))?;
        Ok(Self {
            base,
            client: reqwest::Client::new(),
        })
    }
}

impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, content_ref: &str) -> Result<String, FetchError> {
        let url = self
            .base
            .join(content_ref)
            .map_err(|err| FetchError::Network(err.to_string()))?;

        tracing::debug!(%url, "fetching content");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))
    }
}

/// Fetcher selected from a content base at startup: http(s) bases fetch
/// over the network, anything else is a directory on disk.
#[derive(Debug, Clone)]
pub enum AnyFetcher {
    Fs(FsFetcher),
    Http(HttpFetcher),
}

impl AnyFetcher {
    pub fn for_base(base: &str) -> Result<Self, FetchError> {
        if base.starts_with("http://") || base.starts_with("https://") {
            Ok(AnyFetcher::Http(HttpFetcher::new(base)?))
        } else {
            Ok(AnyFetcher::Fs(FsFetcher::new(base)))
        }
    }
}

impl ContentFetcher for AnyFetcher {
    async fn fetch(&self, content_ref: &str) -> Result<String, FetchError> {
        match self {
            AnyFetcher::Fs(fetcher) => fetcher.fetch(content_ref).await,
            AnyFetcher::Http(fetcher) => fetcher.fetch(content_ref).await,
        }
    }
}

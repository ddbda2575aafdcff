use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while fetching and extracting vlr.gg data.
#[derive(thiserror::Error, Debug)]
pub enum VlrError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// A text pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    /// The cache backend failed.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Configuration value missing or malformed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A URL could not be parsed.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// A resource URL did not carry the id it should.
    #[error("no {kind} id in {url}")]
    MissingId { kind: &'static str, url: String },
}

impl<'a> From<SelectorErrorKind<'a>> for VlrError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        VlrError::Selector(err.to_string())
    }
}

/// Failures of a [`CacheStore`](crate::cache::CacheStore) backend.
///
/// The cache-aside layer never propagates these; it logs them and treats the
/// lookup as a miss.
#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("cache backend error: {0}")]
    Backend(String),

    #[error("cache entry could not be encoded or decoded: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VlrError>;

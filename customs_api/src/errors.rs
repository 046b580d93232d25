//! Error types for the customs client.

/// Errors that can occur while looking up a trader.
///
/// A trader that does not exist is not an error: lookups return `Ok(None)`
/// for that case. Everything here signals a transport failure or an upstream
/// contract break and is propagated to the caller unchanged.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request failed before a response was received (DNS, TLS,
    /// connection refused, timeout) or the body could not be read.
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The registry answered with a non-success status other than 404.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The registry answered with a body that does not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// A request URL could not be constructed from the configured base URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns the HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

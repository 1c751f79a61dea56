use thiserror::Error;

/// The error type for every fallible operation in this crate.
///
/// From the point of view of the fetch-and-print flow all variants are the
/// same thing: the upstream quote summary could not be obtained.
#[derive(Debug, Error)]
pub enum PeError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected non-success status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The symbol or endpoint does not exist (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// Yahoo throttled the request (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429.
        url: String,
    },

    /// Yahoo returned a 5xx status.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// Cookie or crumb acquisition failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The quoteSummary envelope carried an error description.
    #[error("Yahoo API error: {0}")]
    Api(String),

    /// The response body could not be decoded.
    #[error("Data format unexpected: {0}")]
    Data(String),

    /// A required module or result was absent from an otherwise valid response.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Writing output locally failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PeError {
    /// Whether the failure came from the quote source rather than local output.
    pub const fn is_upstream(&self) -> bool {
        !matches!(self, Self::Io(_))
    }

    /// Maps a non-success HTTP status to the matching variant.
    pub(crate) fn from_status(status: u16, url: &url::Url) -> Self {
        let url = url.to_string();
        match status {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status, url },
            _ => Self::Status { status, url },
        }
    }
}

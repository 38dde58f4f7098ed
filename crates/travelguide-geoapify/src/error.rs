use thiserror::Error;

/// Errors returned by the Geoapify API client.
///
/// Callers generally surface these as a single failure message; the variants
/// exist for logging and tests.
#[derive(Debug, Error)]
pub enum GeoapifyError {
    /// Network or TLS failure, or a non-2xx HTTP status. The request URL is
    /// stripped so the API key never reaches a message or log line.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for GeoapifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

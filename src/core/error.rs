use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum RoverError {
    /// A date string did not follow the `Y-M-D` wire form, or named a day that does not exist.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The request never produced a usable response (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream API answered with a status outside 200-299.
    #[error("{status} {reason} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase for `status`, if any.
        reason: String,
        /// The URL that returned the error.
        url: String,
        /// The upstream body, kept when it was a JSON document.
        body: Option<serde_json::Value>,
    },

    /// The response body did not match the expected photo schema.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl RoverError {
    /// HTTP status this error asks to be reported with, when it has an opinion.
    ///
    /// Callers fall back to their own default (500 for fetch failures) on `None`.
    pub fn status_override(&self) -> Option<u16> {
        match self {
            RoverError::InvalidDate(_) => Some(400),
            _ => None,
        }
    }

    /// Wire representation this error provides for itself, replacing the
    /// generic `{"error": "<message>"}` wrapper.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        match self {
            RoverError::Status {
                body: Some(upstream),
                ..
            } => Some(serde_json::json!({
                "error": self.to_string(),
                "upstream": upstream,
            })),
            _ => None,
        }
    }
}

use reqwest::StatusCode;
use thiserror::Error;

/// Why a single weather fetch ended without a snapshot.
///
/// Every variant is terminal for the request that produced it; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Blank location input, caught before any request is made.
    #[error("location query is empty")]
    Validation,

    /// The provider does not know the requested place (HTTP 404).
    #[error("location not found")]
    NotFound,

    /// The API key is missing or rejected (HTTP 401).
    #[error("API key missing or rejected")]
    Unauthorized,

    /// Any other transport, server or decoding failure.
    #[error("weather request failed: {0}")]
    Transient(String),
}

impl FetchError {
    /// Classify a non-success HTTP status returned by the provider.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::NOT_FOUND => FetchError::NotFound,
            StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
            other => FetchError::Transient(format!("status {other}: {}", truncate_body(body))),
        }
    }

    /// Text shown to the user in a notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Validation => "Please enter a city",
            FetchError::NotFound => "City not found",
            FetchError::Unauthorized => "Invalid API key",
            FetchError::Transient(_) => "Error fetching weather",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transient(err.to_string())
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

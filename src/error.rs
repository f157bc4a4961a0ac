/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure while talking to the backend
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The backend answered with an unexpected status.
    ///
    /// Carries either a fixed message or the `error_message` reported by the server.
    #[error("{0}")]
    Rejected(String),
    /// A body could not be parsed as JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The configured base URL or a derived URL is invalid
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    /// Local storage could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Navigation to a path that no route matches
    #[error("no route matches path: {0}")]
    RouteNotFound(String),
}

impl AppError {
    /// Returns the rejection message when the backend refused the request
    pub fn rejection(&self) -> Option<&str> {
        match self {
            AppError::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

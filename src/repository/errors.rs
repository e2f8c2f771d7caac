use thiserror::Error;

/// Failure of a single call to the ideas API.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// A success response whose body is not JSON.
    #[error("Decode error: {0}")]
    Decode(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    /// Reason reported by the API or the transport, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            FetchError::Network(reason) | FetchError::Decode(reason) => reason,
            FetchError::Http { message, .. } => message,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

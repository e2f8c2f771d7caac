//! Services coordinating the listing workflows between routes and the API.

use thiserror::Error;

use crate::dto::api::FormatError;
use crate::repository::errors::FetchError;

pub mod ideas;
pub mod nav;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load posts. Please try again later.";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid data format received";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to fetch ideas: {0}")]
    Fetch(#[from] FetchError),

    #[error("invalid data format: {0}")]
    InvalidFormat(#[from] FormatError),

    #[error("{0}")]
    Form(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Text shown in place of the idea list.
    pub fn user_message(&self) -> &'static str {
        match self {
            ServiceError::InvalidFormat(_) => INVALID_FORMAT_MESSAGE,
            ServiceError::Fetch(_) | ServiceError::Form(_) => LOAD_FAILED_MESSAGE,
        }
    }
}

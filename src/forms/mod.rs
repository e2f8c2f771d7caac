//! Form definitions backing the listing controls.

use thiserror::Error;
use validator::ValidationErrors;

pub mod controls;
pub mod nav;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid page size")]
    InvalidPageSize,

    #[error("invalid sort key")]
    InvalidSortKey,

    #[error("unknown navigation item")]
    UnknownNavItem,
}

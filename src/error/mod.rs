//! Error Module
//!
//! The handler-facing error taxonomy and its HTTP mapping.

/// Error taxonomy and response rendering
pub mod types;

pub use types::{ApiError, ErrorBody, InternalErrorDetails, INVALID_CREDENTIALS};

//! Error types for the items API client.
//!
//! `NotFound` and `Validation` get their own variants because they are the
//! two failures the server reports on purpose. Anything else lands in
//! `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `ItemsClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned 422; `body` holds the structured detail list.
    #[error("validation failed: {body}")]
    Validation { body: String },

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}

//! Error types returned by the items API.
//!
//! # Design
//! Only two classes exist. `Validation` is raised by the request extractors
//! (body, path, query) and never reaches the service layer; `NotFound` is produced by handlers
//! when the service reports an absent item. The service itself returns
//! `Option`/`bool` and knows nothing about HTTP.

use std::error::Error as StdError;
use std::fmt;

use axum::extract::path::ErrorKind;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_path_to_error::Segment;
use thiserror::Error;

pub const ITEM_NOT_FOUND: &str = "Item not found";

/// One entry of a structured validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    /// Path to the offending value, starting at `"body"`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationDetail {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body did not decode into a valid `Item`.
    #[error("validation failed: {0:?}")]
    Validation(Vec<ValidationDetail>),

    #[error("Item not found")]
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<T: Serialize> {
    detail: T,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(details) => {
                (status, Json(ErrorBody { detail: details })).into_response()
            }
            ApiError::NotFound => (status, Json(ErrorBody { detail: ITEM_NOT_FOUND })).into_response(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let detail = match &rejection {
            JsonRejection::JsonDataError(err) => {
                match find_error_source::<serde_path_to_error::Error<serde_json::Error>>(err) {
                    Some(err) => located_detail("body", err),
                    None => ValidationDetail::new(&["body"], rejection.body_text(), "value_error"),
                }
            }
            JsonRejection::JsonSyntaxError(_) => {
                ValidationDetail::new(&["body"], rejection.body_text(), "json_invalid")
            }
            JsonRejection::MissingJsonContentType(_) => {
                ValidationDetail::new(&["body"], rejection.body_text(), "content_type")
            }
            _ => ValidationDetail::new(&["body"], rejection.body_text(), "body_read"),
        };
        ApiError::Validation(vec![detail])
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        let detail = match &rejection {
            PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
                ErrorKind::ParseErrorAtKey {
                    key, expected_type, ..
                } => ValidationDetail::new(&["path", key.as_str()], err.body_text(), parsing_kind(expected_type)),
                ErrorKind::DeserializeError { key, .. }
                | ErrorKind::InvalidUtf8InPathParam { key } => {
                    ValidationDetail::new(&["path", key.as_str()], err.body_text(), "value_error")
                }
                _ => ValidationDetail::new(&["path"], err.body_text(), "value_error"),
            },
            _ => ValidationDetail::new(&["path"], rejection.body_text(), "missing"),
        };
        ApiError::Validation(vec![detail])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        let detail = match &rejection {
            QueryRejection::FailedToDeserializeQueryString(err) => {
                match find_error_source::<serde_path_to_error::Error<serde::de::value::Error>>(err) {
                    Some(err) => located_detail("query", err),
                    None => ValidationDetail::new(&["query"], rejection.body_text(), "value_error"),
                }
            }
            _ => ValidationDetail::new(&["query"], rejection.body_text(), "value_error"),
        };
        ApiError::Validation(vec![detail])
    }
}

/// Build a detail whose `loc` follows the serde path of the failing value.
/// A missing field is reported at the field itself, not at its parent.
fn located_detail<E: fmt::Display>(root: &str, err: &serde_path_to_error::Error<E>) -> ValidationDetail {
    let mut loc = vec![root.to_string()];
    loc.extend(err.path().iter().filter_map(|segment| match segment {
        Segment::Seq { index } => Some(index.to_string()),
        Segment::Map { key } => Some(key.clone()),
        Segment::Enum { variant } => Some(variant.clone()),
        Segment::Unknown => None,
    }));

    let msg = err.inner().to_string();
    if let Some(field) = missing_field(&msg).map(str::to_string) {
        loc.push(field);
        return ValidationDetail {
            loc,
            msg: "Field required".to_string(),
            kind: "missing".to_string(),
        };
    }
    ValidationDetail {
        loc,
        msg,
        kind: "value_error".to_string(),
    }
}

fn missing_field(msg: &str) -> Option<&str> {
    msg.strip_prefix("missing field `")?.split('`').next()
}

fn parsing_kind(expected_type: &str) -> &'static str {
    match expected_type {
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "u64" | "usize" | "isize" => "int_parsing",
        "f32" | "f64" => "float_parsing",
        _ => "value_error",
    }
}

// axum boxes the serde error inside its rejection; walk the source chain to reach it.
fn find_error_source<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    match err.downcast_ref::<T>() {
        Some(found) => Some(found),
        None => find_error_source(err.source()?),
    }
}

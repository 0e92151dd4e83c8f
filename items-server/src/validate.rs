//! Request validation extractors.
//!
//! Each extractor wraps the matching axum extractor and turns its rejection
//! into `ApiError::Validation`, so every malformed request gets the same
//! structured 422 body.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::item::Item;

/// Extractor yielding an `Item` that passed both decoding and
/// `Item::validate`. Any failure rejects the request with a 422 before the
/// handler body runs.
#[derive(Debug)]
pub struct ValidItem(pub Item);

impl<S> FromRequest<S> for ValidItem
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(item) = Json::<Item>::from_request(req, state).await?;
        item.validate()?;
        Ok(ValidItem(item))
    }
}

// Named so a parse failure reports `item_id` as its location.
#[derive(Deserialize)]
struct ItemPath {
    item_id: i64,
}

/// The `{item_id}` path segment parsed as an integer.
#[derive(Debug, Clone, Copy)]
pub struct ItemId(pub i64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(ItemPath { item_id }) = Path::<ItemPath>::from_request_parts(parts, state).await?;
        Ok(ItemId(item_id))
    }
}

/// `Query<T>` with a structured 422 rejection.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ValidQuery(params))
    }
}

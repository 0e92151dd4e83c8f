//! HTTP routes and handlers.
//!
//! Handlers are thin: decode, call the `ItemService`, map `None`/`false` to
//! `ApiError::NotFound`. Unmatched paths get a JSON 404 from the fallback.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::item::Item;
use crate::service::ItemService;
use crate::validate::{ItemId, ValidItem, ValidQuery};

pub const WELCOME_MESSAGE: &str = "Welcome to the FastAPI Fundamentals Lab API";
pub const ITEM_DELETED: &str = "Item deleted";
pub const ROUTE_NOT_FOUND: &str = "Not Found";

pub type SharedService = Arc<dyn ItemService>;

#[derive(Debug, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Detail {
    pub detail: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub category: String,
    pub price_lt: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterEcho {
    pub category: String,
    pub price_less_than: f64,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route("/items/{item_id}", get(get_item).put(update_item).delete(delete_item))
        .route("/filter/", get(filter_items))
        .route("/search/", get(search_items))
        .fallback(route_not_found)
        .with_state(service)
}

async fn route_not_found() -> (StatusCode, Json<Detail>) {
    (
        StatusCode::NOT_FOUND,
        Json(Detail {
            detail: ROUTE_NOT_FOUND.to_string(),
        }),
    )
}

async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: WELCOME_MESSAGE.to_string(),
    })
}

async fn list_items(State(service): State<SharedService>) -> Json<Vec<Item>> {
    Json(service.list_items())
}

async fn get_item(
    State(service): State<SharedService>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, ApiError> {
    service.get_item(id).map(Json).ok_or(ApiError::NotFound)
}

async fn create_item(
    State(service): State<SharedService>,
    ValidItem(item): ValidItem,
) -> (StatusCode, Json<Item>) {
    (StatusCode::CREATED, Json(service.create_item(item)))
}

async fn update_item(
    State(service): State<SharedService>,
    ItemId(id): ItemId,
    ValidItem(replacement): ValidItem,
) -> Result<Json<Item>, ApiError> {
    service
        .update_item(id, replacement)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn delete_item(
    State(service): State<SharedService>,
    ItemId(id): ItemId,
) -> Result<Json<Detail>, ApiError> {
    if !service.delete_item(id) {
        return Err(ApiError::NotFound);
    }
    Ok(Json(Detail {
        detail: ITEM_DELETED.to_string(),
    }))
}

async fn filter_items(ValidQuery(params): ValidQuery<FilterParams>) -> Json<FilterEcho> {
    Json(FilterEcho {
        category: params.category,
        price_less_than: params.price_lt,
    })
}

async fn search_items(
    State(service): State<SharedService>,
    ValidQuery(params): ValidQuery<SearchParams>,
) -> Json<SearchResults> {
    let items = search(service.list_items(), params.q.as_deref(), params.skip, params.limit);
    Json(SearchResults { items, q: params.q })
}

/// Case-insensitive substring match on `name`, then `skip`/`limit` paging.
fn search(items: Vec<Item>, q: Option<&str>, skip: usize, limit: usize) -> Vec<Item> {
    let needle = q.map(str::to_lowercase);
    items
        .into_iter()
        .filter(|item| match &needle {
            Some(needle) => item.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .skip(skip)
        .take(limit)
        .collect()
}

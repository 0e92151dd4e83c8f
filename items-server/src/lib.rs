//! In-memory items CRUD API.
//!
//! # Overview
//! An `ItemStore` holds items in insertion order; the `ItemService` trait
//! exposes list/get/create/update/delete over it; `ValidItem` rejects bad
//! bodies before any service call; `routes` maps HTTP onto the service.
//!
//! # Design
//! - The store is an explicit value shared through an `Arc`, built by the
//!   caller (`app` uses an empty one, the binary may seed it).
//! - Absence is `Option`/`bool` in the service and becomes a 404 only at the
//!   HTTP boundary.
//! - Requests are traced with `tower-http`'s `TraceLayer`.

pub mod config;
pub mod error;
pub mod item;
pub mod routes;
pub mod service;
pub mod store;
pub mod validate;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::{ApiError, ValidationDetail};
pub use item::Item;
pub use routes::SharedService;
pub use service::ItemService;
pub use store::ItemStore;

/// Router over a fresh, empty store.
pub fn app() -> Router {
    app_with(Arc::new(ItemStore::new()))
}

/// Router over the given service.
pub fn app_with(service: SharedService) -> Router {
    routes::router(service).layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

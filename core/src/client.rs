//! Stateless HTTP request builder and response parser for the items API.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Detail, Item, Message};

/// Synchronous, stateless client for the items API.
///
/// The caller is responsible for executing the HTTP round-trip between
/// `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ItemsClient {
    base_url: String,
}

impl ItemsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_welcome(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/".to_string(), None)
    }

    pub fn build_list_items(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/items/".to_string(), None)
    }

    pub fn build_get_item(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/items/{id}"), None)
    }

    pub fn build_create_item(&self, item: &Item) -> Result<HttpRequest, ApiError> {
        let body = to_json(item)?;
        Ok(self.request(HttpMethod::Post, "/items/".to_string(), Some(body)))
    }

    /// `id` addresses the stored item; `item` replaces it whole, its own id included.
    pub fn build_update_item(&self, id: i64, item: &Item) -> Result<HttpRequest, ApiError> {
        let body = to_json(item)?;
        Ok(self.request(HttpMethod::Put, format!("/items/{id}"), Some(body)))
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/items/{id}"), None)
    }

    pub fn parse_welcome(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        parse_json::<Message>(&response).map(|m| m.message)
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 201)?;
        parse_json(&response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    /// Returns the server's confirmation text.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        parse_json::<Detail>(&response).map(|d| d.detail)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let headers = match body {
            Some(_) => vec![("content-type".to_string(), "application/json".to_string())],
            None => Vec::new(),
        };
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }
}

fn to_json(item: &Item) -> Result<String, ApiError> {
    serde_json::to_string(item).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn parse_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        422 => Err(ApiError::Validation {
            body: response.body.clone(),
        }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

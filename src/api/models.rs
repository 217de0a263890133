use crate::storage::{Item, ItemPatch, ItemStore};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::warn;

/// Application state
#[derive(Clone, Default)]
pub struct AppState {
    pub items: Arc<RwLock<ItemStore>>,
}

impl AppState {
    pub fn new(store: ItemStore) -> Self {
        Self {
            items: Arc::new(RwLock::new(store)),
        }
    }
}

/// Request to add a new item
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub price: Option<Number>,
}

/// Request to modify an existing item
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub price: Option<Number>,
}

/// Response after adding an item
#[derive(Debug, Serialize)]
pub struct AddedResponse {
    pub added: Item,
}

/// Response after modifying an item
#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub updated: Item,
}

/// Response after deleting an item
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_items: usize,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CreateItemRequest {
    /// Validate the request and turn it into a storable item
    pub fn into_item(self) -> Result<Item, String> {
        match (self.name, self.price) {
            (Some(name), Some(price)) if !name.is_empty() => Ok(Item { name, price }),
            _ => Err("Name and price are required".to_string()),
        }
    }
}

impl UpdateItemRequest {
    /// Validate the request and turn it into a patch
    pub fn into_patch(self) -> Result<ItemPatch, String> {
        if self.name.as_deref() == Some("") {
            return Err("Name cannot be empty".to_string());
        }
        Ok(ItemPatch {
            name: self.name,
            price: self.price,
        })
    }
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Item not found")]
    NotFound,
    #[error("Not found")]
    UnknownRoute,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    Json(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound => (StatusCode::NOT_FOUND, AppError::NotFound.to_string()),
            AppError::UnknownRoute => (StatusCode::NOT_FOUND, AppError::UnknownRoute.to_string()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                AppError::MethodNotAllowed.to_string(),
            ),
            AppError::Json(rejection) => {
                warn!(error = %rejection, "Rejected request body");
                (rejection.status(), rejection.body_text())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_is_valid() {
        let request = CreateItemRequest {
            name: Some("gum".to_string()),
            price: Some(Number::from(0)),
        };
        assert_eq!(
            request.into_item(),
            Ok(Item {
                name: "gum".to_string(),
                price: Number::from(0),
            })
        );
    }

    #[test]
    fn missing_fields_are_rejected() {
        let cases = [
            (None, Some(Number::from(1))),
            (Some(String::new()), Some(Number::from(1))),
            (Some("incomplete".to_string()), None),
        ];
        for (name, price) in cases {
            let err = CreateItemRequest { name, price }.into_item().unwrap_err();
            assert_eq!(err, "Name and price are required");
        }
    }

    #[test]
    fn update_rejects_empty_name() {
        let request = UpdateItemRequest {
            name: Some(String::new()),
            price: None,
        };
        assert_eq!(request.into_patch().unwrap_err(), "Name cannot be empty");
    }

    #[test]
    fn null_update_fields_are_ignored() {
        let request: UpdateItemRequest =
            serde_json::from_str(r#"{"name": null, "price": 2.5}"#).unwrap();
        let patch = request.into_patch().unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.price.and_then(|p| p.as_f64()), Some(2.5));
    }
}

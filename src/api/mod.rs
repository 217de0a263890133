pub mod items;
pub mod models;

// Re-exports
pub use models::*;

// Health handler (simple, keep here)
use axum::{extract::State, Json};

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let total_items = state.items.read().await.len();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_items,
    })
}

/// Catch-all for paths no route matches
pub async fn not_found_handler() -> AppError {
    AppError::UnknownRoute
}

/// Known path, unsupported method
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

use crate::api::models::*;
use crate::storage::Item;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

pub async fn list_items_handler(State(state): State<AppState>) -> Json<Vec<Item>> {
    let items = state.items.read().await;
    Json(items.list().to_vec())
}

pub async fn create_item_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddedResponse>), AppError> {
    let Json(request) = payload?;

    // Validate
    let item = request.into_item().map_err(AppError::BadRequest)?;

    let added = state.items.write().await.insert(item).clone();

    info!(name = %added.name, price = %added.price, "Item added");

    Ok((StatusCode::CREATED, Json(AddedResponse { added })))
}

pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Item>, AppError> {
    let items = state.items.read().await;

    match items.get(&name) {
        Some(item) => Ok(Json(item.clone())),
        None => {
            warn!(name = %name, "Item lookup failed");
            Err(AppError::NotFound)
        }
    }
}

pub async fn update_item_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Option<Json<UpdateItemRequest>>, JsonRejection>,
) -> Result<Json<UpdatedResponse>, AppError> {
    // No body means nothing to change
    let request = payload?.map(|Json(request)| request).unwrap_or_default();

    let mut items = state.items.write().await;

    if items.get(&name).is_none() {
        warn!(name = %name, "Update target not found");
        return Err(AppError::NotFound);
    }

    // Validate
    let patch = request.into_patch().map_err(AppError::BadRequest)?;

    let updated = items
        .update(&name, patch)
        .cloned()
        .ok_or(AppError::NotFound)?;

    info!(from = %name, name = %updated.name, price = %updated.price, "Item updated");

    Ok(Json(UpdatedResponse { updated }))
}

pub async fn delete_item_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let removed = state.items.write().await.remove(&name);

    let Some(removed) = removed else {
        warn!(name = %name, "Delete target not found");
        return Err(AppError::NotFound);
    };

    info!(name = %removed.name, "Item deleted");

    Ok(Json(MessageResponse {
        message: "Deleted".to_string(),
    }))
}

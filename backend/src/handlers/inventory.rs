//! HTTP handlers for inventory management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::models::{ConsumptionRecord, InventoryItem};
use crate::services::inventory::{CreateItemInput, RecordConsumptionInput, UpdateItemInput};
use crate::AppState;
use shared::types::ItemCategory;

#[derive(Deserialize)]
pub struct ListItemsQuery {
    pub category: Option<ItemCategory>,
    pub location_id: Option<Uuid>,
}

/// List inventory items, optionally filtered by category and location
pub async fn list_items(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(query): Query<ListItemsQuery>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = state
        .inventory
        .list_items(query.category, query.location_id)
        .await?;
    Ok(Json(items))
}

/// Create an inventory item
pub async fn create_item(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Json(input): Json<CreateItemInput>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    let item = state.inventory.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get a single inventory item
pub async fn get_item(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<InventoryItem>> {
    let item = state.inventory.get_item(item_id).await?;
    Ok(Json(item))
}

/// Update an inventory item
pub async fn update_item(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
    Json(input): Json<UpdateItemInput>,
) -> AppResult<Json<InventoryItem>> {
    let item = state.inventory.update_item(item_id, input).await?;
    Ok(Json(item))
}

/// Delete an inventory item
pub async fn delete_item(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.inventory.delete_item(item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Record a consumption event against an item's balance
pub async fn record_consumption(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
    Json(input): Json<RecordConsumptionInput>,
) -> AppResult<(StatusCode, Json<ConsumptionRecord>)> {
    let record = state
        .inventory
        .record_consumption(current_user.0.user_id, item_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Get consumption history for an item
pub async fn list_item_consumption(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<Vec<ConsumptionRecord>>> {
    let records = state.inventory.list_item_consumption(item_id).await?;
    Ok(Json(records))
}

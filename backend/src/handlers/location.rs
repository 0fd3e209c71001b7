//! HTTP handlers for location management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::models::Location;
use crate::services::location::{CreateLocationInput, UpdateLocationInput};
use crate::AppState;

/// List all locations
pub async fn list_locations(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> AppResult<Json<Vec<Location>>> {
    let locations = state.locations.list_locations().await?;
    Ok(Json(locations))
}

/// Create a location
pub async fn create_location(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Json(input): Json<CreateLocationInput>,
) -> AppResult<(StatusCode, Json<Location>)> {
    let location = state.locations.create_location(input).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// Get a single location
pub async fn get_location(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(location_id): Path<Uuid>,
) -> AppResult<Json<Location>> {
    let location = state.locations.get_location(location_id).await?;
    Ok(Json(location))
}

/// Update a location
pub async fn update_location(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(location_id): Path<Uuid>,
    Json(input): Json<UpdateLocationInput>,
) -> AppResult<Json<Location>> {
    let location = state.locations.update_location(location_id, input).await?;
    Ok(Json(location))
}

/// Delete a location
pub async fn delete_location(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(location_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.locations.delete_location(location_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

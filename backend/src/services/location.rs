//! Location management service

use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Location;
use crate::repositories::LocationRepository;
use shared::validation::validate_name;

/// Location service for CRUD over physical locations
#[derive(Clone)]
pub struct LocationService {
    locations: LocationRepository,
}

/// Input for creating a location
#[derive(Debug, Deserialize)]
pub struct CreateLocationInput {
    pub name: String,
    pub location_type: String,
    pub parent_id: Option<Uuid>,
}

/// Input for updating a location; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateLocationInput {
    pub name: Option<String>,
    pub location_type: Option<String>,
    pub parent_id: Option<Uuid>,
}

impl LocationService {
    pub fn new(db: PgPool) -> Self {
        Self {
            locations: LocationRepository::new(db),
        }
    }

    pub async fn create_location(&self, input: CreateLocationInput) -> AppResult<Location> {
        validate_name(&input.name).map_err(|e| AppError::Validation {
            field: "name".to_string(),
            message: e.to_string(),
        })?;

        if let Some(parent_id) = input.parent_id {
            if self.locations.find_by_id(parent_id).await?.is_none() {
                return Err(AppError::NotFound("Parent location".to_string()));
            }
        }

        let now = Utc::now();
        let location = Location {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            location_type: input.location_type,
            parent_id: input.parent_id,
            created_at: now,
            updated_at: now,
        };

        self.locations.insert(&location).await?;
        Ok(location)
    }

    pub async fn get_location(&self, id: Uuid) -> AppResult<Location> {
        self.locations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Location".to_string()))
    }

    pub async fn list_locations(&self) -> AppResult<Vec<Location>> {
        self.locations.find_all().await
    }

    pub async fn update_location(
        &self,
        id: Uuid,
        input: UpdateLocationInput,
    ) -> AppResult<Location> {
        let mut location = self.get_location(id).await?;

        if let Some(name) = input.name {
            validate_name(&name).map_err(|e| AppError::Validation {
                field: "name".to_string(),
                message: e.to_string(),
            })?;
            location.name = name.trim().to_string();
        }
        if let Some(location_type) = input.location_type {
            location.location_type = location_type;
        }
        if let Some(parent_id) = input.parent_id {
            if parent_id == id {
                return Err(AppError::ValidationError(
                    "A location cannot be its own parent".to_string(),
                ));
            }
            if self.locations.find_by_id(parent_id).await?.is_none() {
                return Err(AppError::NotFound("Parent location".to_string()));
            }
            location.parent_id = Some(parent_id);
        }

        location.updated_at = Utc::now();
        self.locations.update(&location).await?;
        Ok(location)
    }

    /// Delete a location; items stored there keep existing with a null
    /// location (FK is ON DELETE SET NULL)
    pub async fn delete_location(&self, id: Uuid) -> AppResult<()> {
        self.locations.delete(id).await
    }
}

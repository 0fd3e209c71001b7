//! Location repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Location;

const LOCATION_COLUMNS: &str = "id, name, location_type, parent_id, created_at, updated_at";

/// Data access for `locations`
#[derive(Clone)]
pub struct LocationRepository {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct LocationRow {
    id: Uuid,
    name: String,
    location_type: String,
    parent_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            name: row.name,
            location_type: row.location_type,
            parent_id: row.parent_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl LocationRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Location>> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {} FROM locations WHERE id = $1",
            LOCATION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Location::from))
    }

    pub async fn find_all(&self) -> AppResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {} FROM locations ORDER BY name",
            LOCATION_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }

    pub async fn insert(&self, location: &Location) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO locations (id, name, location_type, parent_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(location.id)
        .bind(&location.name)
        .bind(&location.location_type)
        .bind(location.parent_id)
        .bind(location.created_at)
        .bind(location.updated_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    pub async fn update(&self, location: &Location) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE locations
            SET name = $2, location_type = $3, parent_id = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(location.id)
        .bind(&location.name)
        .bind(&location.location_type)
        .bind(location.parent_id)
        .bind(location.updated_at)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Location".to_string()));
        }
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Location".to_string()));
        }
        Ok(())
    }
}

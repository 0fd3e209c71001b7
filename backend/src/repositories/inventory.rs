//! Inventory item repository

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::InventoryItem;
use shared::types::ItemCategory;

const ITEM_COLUMNS: &str = "id, name, category, location_id, current_quantity, original_amount, \
                            minimum_quantity, unit, expiry_date, created_at, updated_at";

/// Data access for `inventory_items`
#[derive(Clone)]
pub struct InventoryRepository {
    db: PgPool,
}

/// Raw row; category is stored as lowercase text
#[derive(Debug, FromRow)]
struct ItemRow {
    id: Uuid,
    name: String,
    category: String,
    location_id: Option<Uuid>,
    current_quantity: Decimal,
    original_amount: Decimal,
    minimum_quantity: Decimal,
    unit: String,
    expiry_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ItemRow {
    fn into_model(self) -> AppResult<InventoryItem> {
        let category = ItemCategory::from_str(&self.category).map_err(|_| {
            AppError::Internal(format!(
                "invalid category '{}' stored for item {}",
                self.category, self.id
            ))
        })?;
        Ok(InventoryItem {
            id: self.id,
            name: self.name,
            category,
            location_id: self.location_id,
            current_quantity: self.current_quantity,
            original_amount: self.original_amount,
            minimum_quantity: self.minimum_quantity,
            unit: self.unit,
            expiry_date: self.expiry_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn category_param(category: Option<ItemCategory>) -> Option<String> {
    category.map(|c| c.as_str().to_ascii_lowercase())
}

fn into_models(rows: Vec<ItemRow>) -> AppResult<Vec<InventoryItem>> {
    rows.into_iter().map(ItemRow::into_model).collect()
}

impl InventoryRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<InventoryItem>> {
        let row = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {} FROM inventory_items WHERE id = $1",
            ITEM_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        row.map(ItemRow::into_model).transpose()
    }

    /// Find items matching the optional category and location filters
    pub async fn find_by(
        &self,
        category: Option<ItemCategory>,
        location_id: Option<Uuid>,
    ) -> AppResult<Vec<InventoryItem>> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            r#"
            SELECT {}
            FROM inventory_items
            WHERE ($1::text IS NULL OR category = $1)
              AND ($2::uuid IS NULL OR location_id = $2)
            ORDER BY name
            "#,
            ITEM_COLUMNS
        ))
        .bind(category_param(category))
        .bind(location_id)
        .fetch_all(&self.db)
        .await?;

        into_models(rows)
    }

    pub async fn find_all(&self) -> AppResult<Vec<InventoryItem>> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {} FROM inventory_items ORDER BY name",
            ITEM_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        into_models(rows)
    }

    /// Batch lookup used when resolving consumption records to categories
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<InventoryItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {} FROM inventory_items WHERE id = ANY($1)",
            ITEM_COLUMNS
        ))
        .bind(ids)
        .fetch_all(&self.db)
        .await?;

        into_models(rows)
    }

    /// Items at or below their restock threshold.
    ///
    /// The store-level comparison (`current_quantity <= minimum_quantity`)
    /// deliberately matches the in-memory low-status derivation; see the
    /// divergence test in the report tests.
    pub async fn find_needing_restock(
        &self,
        category: Option<ItemCategory>,
        location_id: Option<Uuid>,
    ) -> AppResult<Vec<InventoryItem>> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            r#"
            SELECT {}
            FROM inventory_items
            WHERE current_quantity <= minimum_quantity
              AND ($1::text IS NULL OR category = $1)
              AND ($2::uuid IS NULL OR location_id = $2)
            ORDER BY name
            "#,
            ITEM_COLUMNS
        ))
        .bind(category_param(category))
        .bind(location_id)
        .fetch_all(&self.db)
        .await?;

        into_models(rows)
    }

    /// Items carrying an expiry date, optionally filtered by category
    pub async fn find_expiring(
        &self,
        category: Option<ItemCategory>,
    ) -> AppResult<Vec<InventoryItem>> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            r#"
            SELECT {}
            FROM inventory_items
            WHERE expiry_date IS NOT NULL
              AND ($1::text IS NULL OR category = $1)
            ORDER BY expiry_date
            "#,
            ITEM_COLUMNS
        ))
        .bind(category_param(category))
        .fetch_all(&self.db)
        .await?;

        into_models(rows)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_items")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }

    pub async fn insert(&self, item: &InventoryItem) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO inventory_items (
                id, name, category, location_id, current_quantity, original_amount,
                minimum_quantity, unit, expiry_date, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.category.as_str().to_ascii_lowercase())
        .bind(item.location_id)
        .bind(item.current_quantity)
        .bind(item.original_amount)
        .bind(item.minimum_quantity)
        .bind(&item.unit)
        .bind(item.expiry_date)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    pub async fn update(&self, item: &InventoryItem) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE inventory_items
            SET name = $2, category = $3, location_id = $4, current_quantity = $5,
                original_amount = $6, minimum_quantity = $7, unit = $8,
                expiry_date = $9, updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.category.as_str().to_ascii_lowercase())
        .bind(item.location_id)
        .bind(item.current_quantity)
        .bind(item.original_amount)
        .bind(item.minimum_quantity)
        .bind(&item.unit)
        .bind(item.expiry_date)
        .bind(item.updated_at)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Inventory item".to_string()));
        }
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Inventory item".to_string()));
        }
        Ok(())
    }
}

//! Inventory management service: item CRUD and consumption recording

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{ConsumptionRecord, InventoryItem};
use crate::repositories::{ConsumptionRepository, InventoryRepository};
use shared::types::ItemCategory;
use shared::validation::{
    validate_item_amounts, validate_name, validate_positive_quantity, validate_unit,
};

/// Inventory service for item CRUD and consumption recording
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
    items: InventoryRepository,
    consumption: ConsumptionRepository,
}

/// Input for creating an inventory item
#[derive(Debug, Deserialize)]
pub struct CreateItemInput {
    pub name: String,
    pub category: ItemCategory,
    pub location_id: Option<Uuid>,
    /// Defaults to `original_amount` (a freshly stocked container)
    pub current_quantity: Option<Decimal>,
    pub original_amount: Decimal,
    pub minimum_quantity: Decimal,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
}

/// Input for updating an inventory item; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateItemInput {
    pub name: Option<String>,
    pub category: Option<ItemCategory>,
    pub location_id: Option<Uuid>,
    pub current_quantity: Option<Decimal>,
    pub original_amount: Option<Decimal>,
    pub minimum_quantity: Option<Decimal>,
    pub unit: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

/// Input for recording a consumption event
#[derive(Debug, Deserialize)]
pub struct RecordConsumptionInput {
    pub quantity: Decimal,
    pub notes: Option<String>,
}

fn validation_error(field: &str, message: &str) -> AppError {
    AppError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

impl InventoryService {
    pub fn new(db: PgPool) -> Self {
        Self {
            items: InventoryRepository::new(db.clone()),
            consumption: ConsumptionRepository::new(db.clone()),
            db,
        }
    }

    pub async fn create_item(&self, input: CreateItemInput) -> AppResult<InventoryItem> {
        validate_name(&input.name).map_err(|e| validation_error("name", e))?;
        validate_unit(&input.unit).map_err(|e| validation_error("unit", e))?;

        let current_quantity = input.current_quantity.unwrap_or(input.original_amount);
        validate_item_amounts(current_quantity, input.original_amount, input.minimum_quantity)
            .map_err(|e| validation_error("original_amount", e))?;

        let now = Utc::now();
        let item = InventoryItem {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            category: input.category,
            location_id: input.location_id,
            current_quantity,
            original_amount: input.original_amount,
            minimum_quantity: input.minimum_quantity,
            unit: input.unit,
            expiry_date: input.expiry_date,
            created_at: now,
            updated_at: now,
        };

        self.items.insert(&item).await?;
        Ok(item)
    }

    pub async fn get_item(&self, id: Uuid) -> AppResult<InventoryItem> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inventory item".to_string()))
    }

    pub async fn list_items(
        &self,
        category: Option<ItemCategory>,
        location_id: Option<Uuid>,
    ) -> AppResult<Vec<InventoryItem>> {
        self.items.find_by(category, location_id).await
    }

    pub async fn update_item(&self, id: Uuid, input: UpdateItemInput) -> AppResult<InventoryItem> {
        let mut item = self.get_item(id).await?;

        if let Some(name) = input.name {
            validate_name(&name).map_err(|e| validation_error("name", e))?;
            item.name = name.trim().to_string();
        }
        if let Some(category) = input.category {
            item.category = category;
        }
        if let Some(location_id) = input.location_id {
            item.location_id = Some(location_id);
        }
        if let Some(current_quantity) = input.current_quantity {
            item.current_quantity = current_quantity;
        }
        if let Some(original_amount) = input.original_amount {
            item.original_amount = original_amount;
        }
        if let Some(minimum_quantity) = input.minimum_quantity {
            item.minimum_quantity = minimum_quantity;
        }
        if let Some(unit) = input.unit {
            validate_unit(&unit).map_err(|e| validation_error("unit", e))?;
            item.unit = unit;
        }
        if let Some(expiry_date) = input.expiry_date {
            item.expiry_date = Some(expiry_date);
        }

        validate_item_amounts(
            item.current_quantity,
            item.original_amount,
            item.minimum_quantity,
        )
        .map_err(|e| validation_error("current_quantity", e))?;

        item.updated_at = Utc::now();
        self.items.update(&item).await?;
        Ok(item)
    }

    pub async fn delete_item(&self, id: Uuid) -> AppResult<()> {
        self.items.delete(id).await
    }

    /// Record a consumption event against an item's balance.
    ///
    /// The decrement and the consumption row are committed in one
    /// transaction; an overdraw is rejected without touching the balance.
    pub async fn record_consumption(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        input: RecordConsumptionInput,
    ) -> AppResult<ConsumptionRecord> {
        validate_positive_quantity(input.quantity)
            .map_err(|e| validation_error("quantity", e))?;

        let item = self.get_item(item_id).await?;
        if item.current_quantity < input.quantity {
            return Err(AppError::InsufficientStock(format!(
                "Requested {} {} of '{}' but only {} available",
                input.quantity, item.unit, item.name, item.current_quantity
            )));
        }

        let mut tx = self.db.begin().await?;

        // Conditional decrement guards against a concurrent consumption
        // racing past the check above
        let updated = sqlx::query(
            r#"
            UPDATE inventory_items
            SET current_quantity = current_quantity - $1, updated_at = $2
            WHERE id = $3 AND current_quantity >= $1
            "#,
        )
        .bind(input.quantity)
        .bind(Utc::now())
        .bind(item_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::InsufficientStock(format!(
                "Stock of '{}' changed concurrently; consumption not recorded",
                item.name
            )));
        }

        let record = ConsumptionRecord {
            id: Uuid::new_v4(),
            inventory_item_id: item_id,
            user_id,
            quantity: input.quantity,
            unit: item.unit,
            recorded_at: Utc::now(),
            notes: input.notes,
        };

        sqlx::query(
            r#"
            INSERT INTO consumption_records (
                id, inventory_item_id, user_id, quantity, unit, recorded_at, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id)
        .bind(record.inventory_item_id)
        .bind(record.user_id)
        .bind(record.quantity)
        .bind(&record.unit)
        .bind(record.recorded_at)
        .bind(&record.notes)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(record)
    }

    /// Consumption history for one item, newest first
    pub async fn list_item_consumption(
        &self,
        item_id: Uuid,
    ) -> AppResult<Vec<ConsumptionRecord>> {
        // Surface a 404 for unknown items rather than an empty history
        self.get_item(item_id).await?;
        self.consumption.find_by_item(item_id).await
    }
}

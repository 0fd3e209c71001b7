//! Inventory item model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::ItemCategory;

/// A consumable stock item held at a location
///
/// Records are immutable once fetched; report generation derives new values
/// (stock percentage, status) without mutating the source row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub category: ItemCategory,
    pub location_id: Option<Uuid>,
    /// Quantity currently on hand. Expected to be non-negative, but the
    /// report engine derives status from whatever value is stored.
    pub current_quantity: Decimal,
    /// Quantity the container held when full
    pub original_amount: Decimal,
    /// Restock threshold: at or below this the item counts as low
    pub minimum_quantity: Decimal,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

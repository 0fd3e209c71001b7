//! Consumption record model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single consumption event against an inventory item's balance
///
/// Immutable once created: the system never updates or deletes these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsumptionRecord {
    pub id: Uuid,
    pub inventory_item_id: Uuid,
    pub user_id: Uuid,
    pub quantity: Decimal,
    pub unit: String,
    pub recorded_at: DateTime<Utc>,
    pub notes: Option<String>,
}

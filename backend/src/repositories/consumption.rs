//! Consumption record repository
//!
//! Records are append-only; there is no update or delete surface.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::ConsumptionRecord;

const RECORD_COLUMNS: &str =
    "id, inventory_item_id, user_id, quantity, unit, recorded_at, notes";

/// Data access for `consumption_records`
#[derive(Clone)]
pub struct ConsumptionRepository {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct RecordRow {
    id: Uuid,
    inventory_item_id: Uuid,
    user_id: Uuid,
    quantity: Decimal,
    unit: String,
    recorded_at: DateTime<Utc>,
    notes: Option<String>,
}

impl From<RecordRow> for ConsumptionRecord {
    fn from(row: RecordRow) -> Self {
        ConsumptionRecord {
            id: row.id,
            inventory_item_id: row.inventory_item_id,
            user_id: row.user_id,
            quantity: row.quantity,
            unit: row.unit,
            recorded_at: row.recorded_at,
            notes: row.notes,
        }
    }
}

impl ConsumptionRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Records within `[start, end]`, oldest first, optionally restricted to
    /// one user
    pub async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        user_id: Option<Uuid>,
    ) -> AppResult<Vec<ConsumptionRecord>> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            r#"
            SELECT {}
            FROM consumption_records
            WHERE recorded_at >= $1 AND recorded_at <= $2
              AND ($3::uuid IS NULL OR user_id = $3)
            ORDER BY recorded_at
            "#,
            RECORD_COLUMNS
        ))
        .bind(start)
        .bind(end)
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(ConsumptionRecord::from).collect())
    }

    /// Consumption history for one item, newest first
    pub async fn find_by_item(&self, item_id: Uuid) -> AppResult<Vec<ConsumptionRecord>> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            r#"
            SELECT {}
            FROM consumption_records
            WHERE inventory_item_id = $1
            ORDER BY recorded_at DESC
            "#,
            RECORD_COLUMNS
        ))
        .bind(item_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(ConsumptionRecord::from).collect())
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM consumption_records")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}

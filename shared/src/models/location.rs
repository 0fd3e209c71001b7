//! Physical location model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A physical location holding inventory (workshop, store room, vehicle)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    /// Free-text location type (e.g. "warehouse", "workshop")
    pub location_type: String,
    /// Optional parent for hierarchical locations. Reports group by the flat
    /// location_id only.
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

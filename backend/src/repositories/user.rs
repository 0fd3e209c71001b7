//! User repository
//!
//! Users are provisioned by the external identity provider; this backend
//! only reads them (display names for report grouping, role lookups).

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::User;
use shared::types::UserRole;

const USER_COLUMNS: &str = "id, first_name, last_name, email, role, created_at";

/// Data access for `users`
#[derive(Clone)]
pub struct UserRepository {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_model(self) -> AppResult<User> {
        let role = UserRole::from_str(&self.role).map_err(|_| {
            AppError::Internal(format!(
                "invalid role '{}' stored for user {}",
                self.role, self.id
            ))
        })?;
        Ok(User {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role,
            created_at: self.created_at,
        })
    }
}

impl UserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Batch lookup used when resolving consumption records to display names
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE id = ANY($1)",
            USER_COLUMNS
        ))
        .bind(ids)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(UserRow::into_model).collect()
    }

    /// Total provisioned users, surfaced in the reporting overview
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}

//! Report generation service
//!
//! Orchestrates the bounded fetch sequence for each report kind and
//! delegates the aggregation itself to the pure engine in
//! `shared::reports`. Each report is recomputed from a fresh point-in-time
//! read on every call; nothing is cached or retried here, and store failures
//! propagate to the caller.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::repositories::{
    ConsumptionRepository, InventoryRepository, LocationRepository, UserRepository,
};
use shared::reports::{
    build_consumption_trends, build_expiry, build_inventory_status, build_location_utilization,
    ConsumptionTrendsParams, ExpiryParams, GroupBy, InventoryStatusParams,
    LocationUtilizationParams, Report, StatusFilter,
};
use shared::types::ItemCategory;

/// Headline record counts shown on the reporting landing page
#[derive(Debug, Clone, Serialize)]
pub struct ReportingOverview {
    pub generated_at: DateTime<Utc>,
    pub total_items: i64,
    pub total_locations: i64,
    pub total_consumption_records: i64,
    pub total_users: i64,
}

/// Report generation service
#[derive(Clone)]
pub struct ReportService {
    items: InventoryRepository,
    consumption: ConsumptionRepository,
    locations: LocationRepository,
    users: UserRepository,
}

impl ReportService {
    pub fn new(db: PgPool) -> Self {
        Self {
            items: InventoryRepository::new(db.clone()),
            consumption: ConsumptionRepository::new(db.clone()),
            locations: LocationRepository::new(db.clone()),
            users: UserRepository::new(db),
        }
    }

    /// Headline counts across the tracked entities
    pub async fn overview(&self) -> AppResult<ReportingOverview> {
        Ok(ReportingOverview {
            generated_at: Utc::now(),
            total_items: self.items.count().await?,
            total_locations: self.locations.count().await?,
            total_consumption_records: self.consumption.count().await?,
            total_users: self.users.count().await?,
        })
    }

    /// Generate the inventory status report.
    ///
    /// The `low` status filter goes through the dedicated restock query;
    /// `critical` is filtered in memory on the full fetched set.
    pub async fn inventory_status(&self, params: InventoryStatusParams) -> AppResult<Report> {
        let items = match params.status {
            StatusFilter::Low => {
                self.items
                    .find_needing_restock(params.category, params.location_id)
                    .await?
            }
            StatusFilter::All | StatusFilter::Critical => {
                self.items
                    .find_by(params.category, params.location_id)
                    .await?
            }
        };

        Ok(Report::InventoryStatus(build_inventory_status(
            items,
            Utc::now(),
            params,
        )))
    }

    /// Generate the consumption trends report
    pub async fn consumption_trends(&self, params: ConsumptionTrendsParams) -> AppResult<Report> {
        let now = Utc::now();
        let (start, end) = params.window(now);

        let mut records = self
            .consumption
            .find_by_date_range(start, end, params.user_id)
            .await?;

        // Category filtering joins through the matching item IDs
        if let Some(category) = params.category {
            let ids: HashSet<Uuid> = self
                .items
                .find_by(Some(category), None)
                .await?
                .into_iter()
                .map(|item| item.id)
                .collect();
            records.retain(|record| ids.contains(&record.inventory_item_id));
        }

        // One batch lookup per unique foreign key, only for the grouping
        // modes that need resolution
        let mut item_categories: HashMap<Uuid, ItemCategory> = HashMap::new();
        if params.group_by == GroupBy::Category {
            let ids: Vec<Uuid> = records
                .iter()
                .map(|record| record.inventory_item_id)
                .collect::<HashSet<_>>()
                .into_iter()
                .collect();
            for item in self.items.find_by_ids(&ids).await? {
                item_categories.insert(item.id, item.category);
            }
        }

        let mut user_names: HashMap<Uuid, String> = HashMap::new();
        if params.group_by == GroupBy::User {
            let ids: Vec<Uuid> = records
                .iter()
                .map(|record| record.user_id)
                .collect::<HashSet<_>>()
                .into_iter()
                .collect();
            for user in self.users.find_by_ids(&ids).await? {
                user_names.insert(user.id, user.display_name());
            }
        }

        Ok(Report::ConsumptionTrends(build_consumption_trends(
            &records,
            now,
            params,
            &item_categories,
            &user_names,
        )))
    }

    /// Generate the expiry report
    pub async fn expiry(&self, params: ExpiryParams) -> AppResult<Report> {
        let now = Utc::now();
        let items = self.items.find_expiring(params.category).await?;

        Ok(Report::Expiry(build_expiry(
            items,
            now.date_naive(),
            now,
            params,
        )))
    }

    /// Generate the location utilization report
    pub async fn location_utilization(
        &self,
        params: LocationUtilizationParams,
    ) -> AppResult<Report> {
        let locations = match params.location_id {
            Some(id) => {
                let location = self
                    .locations
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Location".to_string()))?;
                vec![location]
            }
            None => self.locations.find_all().await?,
        };

        let items = self.items.find_all().await?;

        Ok(Report::LocationUtilization(build_location_utilization(
            locations,
            &items,
            Utc::now(),
            params,
        )))
    }
}

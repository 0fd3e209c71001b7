//! Report aggregation engine
//!
//! Pure computation over already-fetched record sets: filtering, grouping,
//! percentage/status derivation and summary calculation for the four report
//! kinds. The engine never touches the store; the backend's `ReportService`
//! performs the bounded fetch sequence and delegates here.
//!
//! Every parameter default is normalized in one place (the parameter structs
//! in this module) rather than scattered across call sites.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ConsumptionRecord, InventoryItem, Location};
use crate::types::{ExpiryStatus, ItemCategory, StockStatus};

mod export;

pub use export::CsvExportError;

/// The four report kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    InventoryStatus,
    ConsumptionTrends,
    Expiry,
    LocationUtilization,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::InventoryStatus => "inventory-status",
            ReportKind::ConsumptionTrends => "consumption-trends",
            ReportKind::Expiry => "expiry",
            ReportKind::LocationUtilization => "location-utilization",
        }
    }

    /// Filename used in the Content-Disposition header for CSV downloads
    pub fn csv_filename(&self) -> String {
        format!("{}-report.csv", self.as_str())
    }
}

/// A generated report
///
/// Transient, recomputed from a point-in-time read on every request; never
/// persisted. Serializes with a `report_type` discriminant alongside the
/// kind-specific body.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "report_type")]
pub enum Report {
    #[serde(rename = "inventory-status")]
    InventoryStatus(InventoryStatusReport),
    #[serde(rename = "consumption-trends")]
    ConsumptionTrends(ConsumptionTrendsReport),
    #[serde(rename = "expiry")]
    Expiry(ExpiryReport),
    #[serde(rename = "location-utilization")]
    LocationUtilization(LocationUtilizationReport),
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        match self {
            Report::InventoryStatus(_) => ReportKind::InventoryStatus,
            Report::ConsumptionTrends(_) => ReportKind::ConsumptionTrends,
            Report::Expiry(_) => ReportKind::Expiry,
            Report::LocationUtilization(_) => ReportKind::LocationUtilization,
        }
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// Status filter for the inventory status report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Low,
    Critical,
}

/// Parameters for the inventory status report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryStatusParams {
    #[serde(default)]
    pub category: Option<ItemCategory>,
    #[serde(default)]
    pub location_id: Option<Uuid>,
    #[serde(default)]
    pub status: StatusFilter,
}

/// Grouping mode for the consumption trends report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Day,
    Week,
    #[default]
    Month,
    Category,
    User,
}

/// Parameters for the consumption trends report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsumptionTrendsParams {
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub group_by: GroupBy,
    #[serde(default)]
    pub category: Option<ItemCategory>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

impl ConsumptionTrendsParams {
    /// Resolve the requested date window. Absent bounds default to the
    /// trailing 30 days ending at `now`.
    pub fn window(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let end = self.end_date.unwrap_or(now);
        let start = self.start_date.unwrap_or(now - Duration::days(30));
        (start, end)
    }
}

fn default_days_until_expiry() -> i64 {
    30
}

/// Parameters for the expiry report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpiryParams {
    #[serde(default)]
    pub category: Option<ItemCategory>,
    #[serde(default = "default_days_until_expiry")]
    pub days_until_expiry: i64,
}

impl Default for ExpiryParams {
    fn default() -> Self {
        Self {
            category: None,
            days_until_expiry: default_days_until_expiry(),
        }
    }
}

/// Parameters for the location utilization report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationUtilizationParams {
    #[serde(default)]
    pub location_id: Option<Uuid>,
    #[serde(default)]
    pub include_empty: bool,
}

// ============================================================================
// Derivations
// ============================================================================

/// Stock percentage: `current / original * 100`, rounded half-away-from-zero
/// to an integer. Zero `original_amount` yields 0.
pub fn stock_percentage(current_quantity: Decimal, original_amount: Decimal) -> i64 {
    if original_amount <= Decimal::ZERO {
        return 0;
    }
    round_to_i64(current_quantity / original_amount * Decimal::ONE_HUNDRED)
}

/// Derive the stock status for an item.
///
/// The restock-threshold check takes priority: an item at or below
/// `minimum_quantity` is low even when its percentage is under 10%. The
/// percentage check uses the unrounded ratio and is skipped when
/// `original_amount` is zero.
pub fn stock_status(item: &InventoryItem) -> StockStatus {
    if item.current_quantity <= item.minimum_quantity {
        return StockStatus::Low;
    }
    if item.original_amount > Decimal::ZERO
        && item.current_quantity / item.original_amount * Decimal::ONE_HUNDRED < Decimal::TEN
    {
        return StockStatus::Critical;
    }
    StockStatus::Normal
}

/// Start of the week containing `date`, pinned to a Sunday-start convention
/// regardless of locale.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

fn round_to_i64(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

// ============================================================================
// Inventory status report
// ============================================================================

/// One inventory item annotated with derived stock figures
#[derive(Debug, Clone, Serialize)]
pub struct ItemStatusEntry {
    pub id: Uuid,
    pub name: String,
    pub category: ItemCategory,
    pub location_id: Option<Uuid>,
    pub current_quantity: Decimal,
    pub original_amount: Decimal,
    pub minimum_quantity: Decimal,
    pub unit: String,
    pub stock_percentage: i64,
    pub status: StockStatus,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryStatusSummary {
    pub total_items: i64,
    pub low_stock_items: i64,
    pub critical_stock_items: i64,
    pub average_stock_level: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryStatusReport {
    pub generated_at: DateTime<Utc>,
    pub parameters: InventoryStatusParams,
    pub summary: InventoryStatusSummary,
    pub items: Vec<ItemStatusEntry>,
}

/// Build the inventory status report from fetched items.
///
/// For `StatusFilter::Low` the caller fetches through the dedicated restock
/// query and no further status filtering happens here. For
/// `StatusFilter::Critical` the full set is filtered in memory on the
/// derived status, so low-and-under-10% items stay out of the critical set.
pub fn build_inventory_status(
    items: Vec<InventoryItem>,
    generated_at: DateTime<Utc>,
    params: InventoryStatusParams,
) -> InventoryStatusReport {
    let mut entries: Vec<ItemStatusEntry> = items
        .into_iter()
        .map(|item| {
            let status = stock_status(&item);
            ItemStatusEntry {
                stock_percentage: stock_percentage(item.current_quantity, item.original_amount),
                status,
                id: item.id,
                name: item.name,
                category: item.category,
                location_id: item.location_id,
                current_quantity: item.current_quantity,
                original_amount: item.original_amount,
                minimum_quantity: item.minimum_quantity,
                unit: item.unit,
                updated_at: item.updated_at,
            }
        })
        .collect();

    if params.status == StatusFilter::Critical {
        entries.retain(|entry| entry.status == StockStatus::Critical);
    }

    let total_items = entries.len() as i64;
    let low_stock_items = entries
        .iter()
        .filter(|e| e.status == StockStatus::Low)
        .count() as i64;
    let critical_stock_items = entries
        .iter()
        .filter(|e| e.status == StockStatus::Critical)
        .count() as i64;
    let average_stock_level = if entries.is_empty() {
        0
    } else {
        let sum: i64 = entries.iter().map(|e| e.stock_percentage).sum();
        round_to_i64(Decimal::from(sum) / Decimal::from(total_items))
    };

    InventoryStatusReport {
        generated_at,
        parameters: params,
        summary: InventoryStatusSummary {
            total_items,
            low_stock_items,
            critical_stock_items,
            average_stock_level,
        },
        items: entries,
    }
}

// ============================================================================
// Consumption trends report
// ============================================================================

/// One aggregated trend group; shape depends on the grouping mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TrendPoint {
    Day {
        date: String,
        total_quantity: Decimal,
        consumption_count: i64,
    },
    Week {
        week_start: String,
        total_quantity: Decimal,
        consumption_count: i64,
    },
    Month {
        month: String,
        total_quantity: Decimal,
        consumption_count: i64,
    },
    Category {
        category: String,
        total_quantity: Decimal,
        consumption_count: i64,
    },
    User {
        user_id: Uuid,
        user_name: String,
        total_quantity: Decimal,
        consumption_count: i64,
    },
}

impl TrendPoint {
    pub fn total_quantity(&self) -> Decimal {
        match self {
            TrendPoint::Day { total_quantity, .. }
            | TrendPoint::Week { total_quantity, .. }
            | TrendPoint::Month { total_quantity, .. }
            | TrendPoint::Category { total_quantity, .. }
            | TrendPoint::User { total_quantity, .. } => *total_quantity,
        }
    }

    pub fn consumption_count(&self) -> i64 {
        match self {
            TrendPoint::Day {
                consumption_count, ..
            }
            | TrendPoint::Week {
                consumption_count, ..
            }
            | TrendPoint::Month {
                consumption_count, ..
            }
            | TrendPoint::Category {
                consumption_count, ..
            }
            | TrendPoint::User {
                consumption_count, ..
            } => *consumption_count,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConsumptionSummary {
    pub total_consumption: Decimal,
    pub total_records: i64,
    /// `total_consumption / total_records`, rounded to 2 decimal places
    pub average_per_record: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsumptionTrendsReport {
    pub generated_at: DateTime<Utc>,
    pub parameters: ConsumptionTrendsParams,
    pub summary: ConsumptionSummary,
    pub trends: Vec<TrendPoint>,
}

#[derive(Default)]
struct GroupAccumulator {
    total_quantity: Decimal,
    count: i64,
}

impl GroupAccumulator {
    fn add(&mut self, quantity: Decimal) {
        self.total_quantity += quantity;
        self.count += 1;
    }
}

/// Build the consumption trends report from the filtered record set.
///
/// `item_categories` and `user_names` are batch-resolved lookups for the
/// category and user grouping modes; records whose foreign key misses the
/// map fall into `"Unknown"` / `"Unknown User"` groups.
///
/// Time-based groups sort ascending by key (ISO strings sort correctly
/// lexicographically); category and user groups sort descending by total
/// quantity.
pub fn build_consumption_trends(
    records: &[ConsumptionRecord],
    generated_at: DateTime<Utc>,
    params: ConsumptionTrendsParams,
    item_categories: &HashMap<Uuid, ItemCategory>,
    user_names: &HashMap<Uuid, String>,
) -> ConsumptionTrendsReport {
    let trends = match params.group_by {
        GroupBy::Day => group_by_time(records, |r| r.recorded_at.date_naive().to_string(), |date, acc| {
            TrendPoint::Day {
                date,
                total_quantity: acc.total_quantity,
                consumption_count: acc.count,
            }
        }),
        GroupBy::Week => group_by_time(
            records,
            |r| week_start(r.recorded_at.date_naive()).to_string(),
            |week_start, acc| TrendPoint::Week {
                week_start,
                total_quantity: acc.total_quantity,
                consumption_count: acc.count,
            },
        ),
        GroupBy::Month => group_by_time(
            records,
            |r| r.recorded_at.format("%Y-%m").to_string(),
            |month, acc| TrendPoint::Month {
                month,
                total_quantity: acc.total_quantity,
                consumption_count: acc.count,
            },
        ),
        GroupBy::Category => group_by_category(records, item_categories),
        GroupBy::User => group_by_user(records, user_names),
    };

    let total_records = records.len() as i64;
    let total_consumption: Decimal = records.iter().map(|r| r.quantity).sum();
    let average_per_record = if total_records == 0 {
        Decimal::ZERO
    } else {
        (total_consumption / Decimal::from(total_records))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    ConsumptionTrendsReport {
        generated_at,
        parameters: params,
        summary: ConsumptionSummary {
            total_consumption,
            total_records,
            average_per_record,
        },
        trends,
    }
}

fn group_by_time(
    records: &[ConsumptionRecord],
    key: impl Fn(&ConsumptionRecord) -> String,
    build: impl Fn(String, GroupAccumulator) -> TrendPoint,
) -> Vec<TrendPoint> {
    let mut groups: BTreeMap<String, GroupAccumulator> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().add(record.quantity);
    }
    // BTreeMap iteration gives the ascending lexicographic order
    groups.into_iter().map(|(k, acc)| build(k, acc)).collect()
}

fn group_by_category(
    records: &[ConsumptionRecord],
    item_categories: &HashMap<Uuid, ItemCategory>,
) -> Vec<TrendPoint> {
    let mut groups: BTreeMap<String, GroupAccumulator> = BTreeMap::new();
    for record in records {
        let category = item_categories
            .get(&record.inventory_item_id)
            .map(|c| c.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        groups.entry(category).or_default().add(record.quantity);
    }
    let mut points: Vec<TrendPoint> = groups
        .into_iter()
        .map(|(category, acc)| TrendPoint::Category {
            category,
            total_quantity: acc.total_quantity,
            consumption_count: acc.count,
        })
        .collect();
    points.sort_by(|a, b| b.total_quantity().cmp(&a.total_quantity()));
    points
}

fn group_by_user(
    records: &[ConsumptionRecord],
    user_names: &HashMap<Uuid, String>,
) -> Vec<TrendPoint> {
    let mut groups: BTreeMap<Uuid, GroupAccumulator> = BTreeMap::new();
    for record in records {
        groups.entry(record.user_id).or_default().add(record.quantity);
    }
    let mut points: Vec<TrendPoint> = groups
        .into_iter()
        .map(|(user_id, acc)| TrendPoint::User {
            user_id,
            user_name: user_names
                .get(&user_id)
                .cloned()
                .unwrap_or_else(|| "Unknown User".to_string()),
            total_quantity: acc.total_quantity,
            consumption_count: acc.count,
        })
        .collect();
    points.sort_by(|a, b| b.total_quantity().cmp(&a.total_quantity()));
    points
}

// ============================================================================
// Expiry report
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ExpiringItemEntry {
    pub id: Uuid,
    pub name: String,
    pub category: ItemCategory,
    pub current_quantity: Decimal,
    pub unit: String,
    pub expiry_date: NaiveDate,
    pub days_remaining: i64,
    pub status: ExpiryStatus,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpirySummary {
    pub expired_items: i64,
    pub critical_items: i64,
    pub warning_items: i64,
    pub total_expiring_items: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpiryReport {
    pub generated_at: DateTime<Utc>,
    pub parameters: ExpiryParams,
    pub summary: ExpirySummary,
    pub items: Vec<ExpiringItemEntry>,
}

/// Derive the expiry status from whole days remaining.
///
/// Expiry dates are calendar dates, so `days_remaining` is the plain
/// calendar-day difference `expiry_date - today` (equivalent to rounding the
/// millisecond difference up for midnight-valued dates).
pub fn expiry_status(days_remaining: i64) -> ExpiryStatus {
    if days_remaining <= 0 {
        ExpiryStatus::Expired
    } else if days_remaining <= 7 {
        ExpiryStatus::Critical
    } else {
        ExpiryStatus::Warning
    }
}

/// Build the expiry report from items that carry an expiry date.
///
/// Items expiring more than `days_until_expiry` days after `today` are
/// dropped; the rest are bucketed into expired/critical/warning.
pub fn build_expiry(
    items: Vec<InventoryItem>,
    today: NaiveDate,
    generated_at: DateTime<Utc>,
    params: ExpiryParams,
) -> ExpiryReport {
    let entries: Vec<ExpiringItemEntry> = items
        .into_iter()
        .filter_map(|item| {
            let expiry_date = item.expiry_date?;
            let days_remaining = (expiry_date - today).num_days();
            if days_remaining > params.days_until_expiry {
                return None;
            }
            Some(ExpiringItemEntry {
                id: item.id,
                name: item.name,
                category: item.category,
                current_quantity: item.current_quantity,
                unit: item.unit,
                expiry_date,
                days_remaining,
                status: expiry_status(days_remaining),
            })
        })
        .collect();

    let mut summary = ExpirySummary {
        total_expiring_items: entries.len() as i64,
        ..Default::default()
    };
    for entry in &entries {
        match entry.status {
            ExpiryStatus::Expired => summary.expired_items += 1,
            ExpiryStatus::Critical => summary.critical_items += 1,
            ExpiryStatus::Warning => summary.warning_items += 1,
        }
    }

    ExpiryReport {
        generated_at,
        parameters: params,
        summary,
        items: entries,
    }
}

// ============================================================================
// Location utilization report
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoryUsage {
    pub category: ItemCategory,
    pub item_count: i64,
    pub total_quantity: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationUsageEntry {
    pub location_id: Uuid,
    pub location_name: String,
    pub location_type: String,
    pub total_items: i64,
    pub total_quantity: Decimal,
    pub categories: Vec<CategoryUsage>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LocationUtilizationSummary {
    pub total_locations: i64,
    pub total_items: i64,
    pub average_items_per_location: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationUtilizationReport {
    pub generated_at: DateTime<Utc>,
    pub parameters: LocationUtilizationParams,
    pub summary: LocationUtilizationSummary,
    pub locations: Vec<LocationUsageEntry>,
}

/// Build the location utilization report.
///
/// Unless `include_empty` is set, locations with no matching items are
/// dropped entirely, and the summary counts only the retained set.
pub fn build_location_utilization(
    locations: Vec<Location>,
    items: &[InventoryItem],
    generated_at: DateTime<Utc>,
    params: LocationUtilizationParams,
) -> LocationUtilizationReport {
    let mut entries: Vec<LocationUsageEntry> = locations
        .into_iter()
        .map(|location| {
            let mut total_items = 0i64;
            let mut total_quantity = Decimal::ZERO;
            let mut categories: BTreeMap<ItemCategory, GroupAccumulator> = BTreeMap::new();
            for item in items.iter().filter(|i| i.location_id == Some(location.id)) {
                total_items += 1;
                total_quantity += item.current_quantity;
                categories
                    .entry(item.category)
                    .or_default()
                    .add(item.current_quantity);
            }
            LocationUsageEntry {
                location_id: location.id,
                location_name: location.name,
                location_type: location.location_type,
                total_items,
                total_quantity,
                categories: categories
                    .into_iter()
                    .map(|(category, acc)| CategoryUsage {
                        category,
                        item_count: acc.count,
                        total_quantity: acc.total_quantity,
                    })
                    .collect(),
            }
        })
        .collect();

    if !params.include_empty {
        entries.retain(|entry| entry.total_items > 0);
    }

    let total_locations = entries.len() as i64;
    let total_items: i64 = entries.iter().map(|e| e.total_items).sum();
    let average_items_per_location = if total_locations == 0 {
        0
    } else {
        round_to_i64(Decimal::from(total_items) / Decimal::from(total_locations))
    };

    LocationUtilizationReport {
        generated_at,
        parameters: params,
        summary: LocationUtilizationSummary {
            total_locations,
            total_items,
            average_items_per_location,
        },
        locations: entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_start_is_sunday() {
        // 2024-12-25 is a Wednesday
        let wednesday = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(week_start(wednesday), NaiveDate::from_ymd_opt(2024, 12, 22).unwrap());

        // A Sunday maps to itself
        let sunday = NaiveDate::from_ymd_opt(2024, 12, 22).unwrap();
        assert_eq!(week_start(sunday), sunday);
    }

    #[test]
    fn percentage_guards_zero_original() {
        assert_eq!(stock_percentage(Decimal::TEN, Decimal::ZERO), 0);
    }

    #[test]
    fn trailing_window_defaults_to_thirty_days() {
        let now = Utc::now();
        let params = ConsumptionTrendsParams::default();
        let (start, end) = params.window(now);
        assert_eq!(end, now);
        assert_eq!(start, now - Duration::days(30));
    }
}

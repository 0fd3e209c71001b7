//! Report aggregation engine tests
//!
//! Covers the derivation and grouping policies of the four report kinds:
//! - Low-before-critical status precedence
//! - Percentage and average rounding
//! - Day/week/month/category/user grouping and sort orders
//! - Expiry bucketing conventions
//! - Empty-location exclusion

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::models::{ConsumptionRecord, InventoryItem, Location};
use shared::reports::{
    build_consumption_trends, build_expiry, build_inventory_status, build_location_utilization,
    expiry_status, stock_percentage, stock_status, week_start, ConsumptionTrendsParams,
    ExpiryParams, GroupBy, InventoryStatusParams, LocationUtilizationParams, Report, StatusFilter,
    TrendPoint,
};
use shared::types::{ExpiryStatus, ItemCategory, StockStatus};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn item(current: &str, original: &str, minimum: &str) -> InventoryItem {
    let now = fixed_now();
    InventoryItem {
        id: Uuid::new_v4(),
        name: "Silicone Sealant 310ml".to_string(),
        category: ItemCategory::Sealant,
        location_id: None,
        current_quantity: dec(current),
        original_amount: dec(original),
        minimum_quantity: dec(minimum),
        unit: "ml".to_string(),
        expiry_date: None,
        created_at: now,
        updated_at: now,
    }
}

fn record(quantity: &str, recorded_at: DateTime<Utc>) -> ConsumptionRecord {
    ConsumptionRecord {
        id: Uuid::new_v4(),
        inventory_item_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        quantity: dec(quantity),
        unit: "ml".to_string(),
        recorded_at,
        notes: None,
    }
}

fn location(name: &str) -> Location {
    let now = fixed_now();
    Location {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location_type: "workshop".to_string(),
        parent_id: None,
        created_at: now,
        updated_at: now,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// An item at or below its restock threshold reports low even when its
    /// percentage is also under 10%
    #[test]
    fn test_low_takes_priority_over_critical() {
        let both = item("5", "100", "10"); // 5% of original AND below minimum
        assert_eq!(stock_status(&both), StockStatus::Low);

        let report = build_inventory_status(
            vec![both],
            fixed_now(),
            InventoryStatusParams::default(),
        );
        assert_eq!(report.summary.low_stock_items, 1);
        assert_eq!(report.summary.critical_stock_items, 0);
        assert_eq!(report.items[0].status, StockStatus::Low);
    }

    /// Percentage-only depletion reports critical
    #[test]
    fn test_critical_below_ten_percent() {
        let depleted = item("5", "100", "2"); // 5% but above minimum
        assert_eq!(stock_status(&depleted), StockStatus::Critical);
    }

    #[test]
    fn test_normal_status() {
        let healthy = item("80", "100", "10");
        assert_eq!(stock_status(&healthy), StockStatus::Normal);
    }

    /// Stock percentage rounds to the nearest integer
    #[test]
    fn test_stock_percentage_rounding() {
        assert_eq!(stock_percentage(dec("100"), dec("200")), 50);
        assert_eq!(stock_percentage(dec("33"), dec("100")), 33);
        assert_eq!(stock_percentage(dec("1"), dec("3")), 33);
        // Midpoint rounds away from zero
        assert_eq!(stock_percentage(dec("25"), dec("200")), 13);
    }

    /// Zero original amount yields percentage 0 and never percentage-critical
    #[test]
    fn test_zero_original_amount() {
        assert_eq!(stock_percentage(dec("10"), dec("0")), 0);
        let odd = item("10", "0", "2");
        assert_eq!(stock_status(&odd), StockStatus::Normal);
    }

    /// An empty item set produces a zeroed summary, not NaN or an error
    #[test]
    fn test_empty_report_average_is_zero() {
        let report = build_inventory_status(
            Vec::new(),
            fixed_now(),
            InventoryStatusParams::default(),
        );
        assert_eq!(report.summary.total_items, 0);
        assert_eq!(report.summary.average_stock_level, 0);
        assert!(report.items.is_empty());
    }

    /// The critical filter keeps only items whose derived status is critical,
    /// so low-and-under-10% items stay out
    #[test]
    fn test_critical_filter_excludes_low_items() {
        let low_and_depleted = item("5", "100", "10");
        let critical_only = item("5", "100", "2");
        let report = build_inventory_status(
            vec![low_and_depleted, critical_only.clone()],
            fixed_now(),
            InventoryStatusParams {
                status: StatusFilter::Critical,
                ..Default::default()
            },
        );
        assert_eq!(report.summary.total_items, 1);
        assert_eq!(report.items[0].id, critical_only.id);
    }

    /// The store-level restock comparison and the in-memory low derivation
    /// must select the same items. This pins the two code paths (the
    /// dedicated restock query vs the derived status field) to each other.
    #[test]
    fn test_low_path_matches_derived_filter() {
        let items = vec![
            item("5", "100", "10"),  // low
            item("10", "100", "10"), // low (boundary: equal)
            item("11", "100", "10"), // not low
            item("5", "100", "2"),   // critical but not low
            item("80", "100", "10"), // normal
        ];

        // What the restock query selects at the store level
        let store_low: Vec<Uuid> = items
            .iter()
            .filter(|i| i.current_quantity <= i.minimum_quantity)
            .map(|i| i.id)
            .collect();

        // What the in-memory derivation reports as low
        let derived_low: Vec<Uuid> = items
            .iter()
            .filter(|i| stock_status(i) == StockStatus::Low)
            .map(|i| i.id)
            .collect();

        assert_eq!(store_low, derived_low);
    }

    /// Day grouping: two records on one day and one on another yield two
    /// ascending groups with per-group and overall totals
    #[test]
    fn test_day_grouping_totals() {
        let d1 = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let d1_later = Utc.with_ymd_and_hms(2025, 6, 1, 17, 30, 0).unwrap();
        let d2 = Utc.with_ymd_and_hms(2025, 6, 3, 10, 0, 0).unwrap();
        let records = vec![record("50", d1), record("30", d1_later), record("100", d2)];

        let params = ConsumptionTrendsParams {
            group_by: GroupBy::Day,
            ..Default::default()
        };
        let report = build_consumption_trends(
            &records,
            fixed_now(),
            params,
            &HashMap::new(),
            &HashMap::new(),
        );

        assert_eq!(report.trends.len(), 2);
        match &report.trends[0] {
            TrendPoint::Day {
                date,
                total_quantity,
                consumption_count,
            } => {
                assert_eq!(date, "2025-06-01");
                assert_eq!(*total_quantity, dec("80"));
                assert_eq!(*consumption_count, 2);
            }
            other => panic!("expected day point, got {:?}", other),
        }
        assert_eq!(report.summary.total_consumption, dec("180"));
        assert_eq!(report.summary.total_records, 3);
        assert_eq!(report.summary.average_per_record, dec("60"));
    }

    /// Week grouping keys on the Sunday starting the record's week
    #[test]
    fn test_week_grouping_sunday_start() {
        // 2025-06-15 is a Sunday; 2025-06-18 a Wednesday in the same week
        let sunday = Utc.with_ymd_and_hms(2025, 6, 15, 8, 0, 0).unwrap();
        let wednesday = Utc.with_ymd_and_hms(2025, 6, 18, 8, 0, 0).unwrap();
        let records = vec![record("10", sunday), record("20", wednesday)];

        let params = ConsumptionTrendsParams {
            group_by: GroupBy::Week,
            ..Default::default()
        };
        let report = build_consumption_trends(
            &records,
            fixed_now(),
            params,
            &HashMap::new(),
            &HashMap::new(),
        );

        assert_eq!(report.trends.len(), 1);
        match &report.trends[0] {
            TrendPoint::Week {
                week_start,
                total_quantity,
                consumption_count,
            } => {
                assert_eq!(week_start, "2025-06-15");
                assert_eq!(*total_quantity, dec("30"));
                assert_eq!(*consumption_count, 2);
            }
            other => panic!("expected week point, got {:?}", other),
        }
    }

    #[test]
    fn test_week_start_helper() {
        // Wednesday -> preceding Sunday
        let wednesday = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
        assert_eq!(
            week_start(wednesday),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
        );
        // Sunday maps to itself
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(week_start(sunday), sunday);
    }

    /// Month grouping keys on YYYY-MM and sorts ascending
    #[test]
    fn test_month_grouping_sorted_ascending() {
        let may = Utc.with_ymd_and_hms(2025, 5, 20, 8, 0, 0).unwrap();
        let june = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();
        let records = vec![record("40", june), record("10", may)];

        let params = ConsumptionTrendsParams {
            group_by: GroupBy::Month,
            ..Default::default()
        };
        let report = build_consumption_trends(
            &records,
            fixed_now(),
            params,
            &HashMap::new(),
            &HashMap::new(),
        );

        let months: Vec<String> = report
            .trends
            .iter()
            .map(|p| match p {
                TrendPoint::Month { month, .. } => month.clone(),
                other => panic!("expected month point, got {:?}", other),
            })
            .collect();
        assert_eq!(months, vec!["2025-05".to_string(), "2025-06".to_string()]);
    }

    /// Category grouping resolves items through the batch lookup and maps
    /// missing items to "Unknown"
    #[test]
    fn test_category_grouping_with_unknown() {
        let when = Utc.with_ymd_and_hms(2025, 6, 10, 8, 0, 0).unwrap();
        let known = record("100", when);
        let orphan = record("7", when);

        let mut categories = HashMap::new();
        categories.insert(known.inventory_item_id, ItemCategory::Paint);

        let params = ConsumptionTrendsParams {
            group_by: GroupBy::Category,
            ..Default::default()
        };
        let report = build_consumption_trends(
            &[known, orphan],
            fixed_now(),
            params,
            &categories,
            &HashMap::new(),
        );

        assert_eq!(report.trends.len(), 2);
        // Sorted descending by total quantity: Paint (100) before Unknown (7)
        match (&report.trends[0], &report.trends[1]) {
            (
                TrendPoint::Category {
                    category: first, ..
                },
                TrendPoint::Category {
                    category: second, ..
                },
            ) => {
                assert_eq!(first, "Paint");
                assert_eq!(second, "Unknown");
            }
            other => panic!("expected category points, got {:?}", other),
        }
    }

    /// User grouping resolves display names and sorts descending by total
    /// quantity
    #[test]
    fn test_user_grouping_scenario() {
        let when = Utc.with_ymd_and_hms(2025, 6, 10, 8, 0, 0).unwrap();
        let light = record("12", when);
        let heavy = record("90", when);

        let mut names = HashMap::new();
        names.insert(light.user_id, "Alex Carter".to_string());
        names.insert(heavy.user_id, "Sam Reyes".to_string());

        let params = ConsumptionTrendsParams {
            group_by: GroupBy::User,
            ..Default::default()
        };
        let report = build_consumption_trends(
            &[light.clone(), heavy.clone()],
            fixed_now(),
            params,
            &HashMap::new(),
            &names,
        );

        assert_eq!(report.trends.len(), 2);
        match &report.trends[0] {
            TrendPoint::User {
                user_id,
                user_name,
                total_quantity,
                ..
            } => {
                assert_eq!(*user_id, heavy.user_id);
                assert_eq!(user_name, "Sam Reyes");
                assert_eq!(*total_quantity, dec("90"));
            }
            other => panic!("expected user point, got {:?}", other),
        }
        match &report.trends[1] {
            TrendPoint::User { user_name, .. } => assert_eq!(user_name, "Alex Carter"),
            other => panic!("expected user point, got {:?}", other),
        }
    }

    #[test]
    fn test_unresolved_user_gets_placeholder_name() {
        let when = Utc.with_ymd_and_hms(2025, 6, 10, 8, 0, 0).unwrap();
        let params = ConsumptionTrendsParams {
            group_by: GroupBy::User,
            ..Default::default()
        };
        let report = build_consumption_trends(
            &[record("5", when)],
            fixed_now(),
            params,
            &HashMap::new(),
            &HashMap::new(),
        );
        match &report.trends[0] {
            TrendPoint::User { user_name, .. } => assert_eq!(user_name, "Unknown User"),
            other => panic!("expected user point, got {:?}", other),
        }
    }

    /// Average per record rounds to two decimal places
    #[test]
    fn test_trends_average_rounding() {
        let when = Utc.with_ymd_and_hms(2025, 6, 10, 8, 0, 0).unwrap();
        let records = vec![record("10", when), record("10", when), record("5", when)];
        let report = build_consumption_trends(
            &records,
            fixed_now(),
            ConsumptionTrendsParams::default(),
            &HashMap::new(),
            &HashMap::new(),
        );
        assert_eq!(report.summary.average_per_record, dec("8.33"));
    }

    /// Empty record set yields a zeroed summary
    #[test]
    fn test_trends_empty_records() {
        let report = build_consumption_trends(
            &[],
            fixed_now(),
            ConsumptionTrendsParams::default(),
            &HashMap::new(),
            &HashMap::new(),
        );
        assert_eq!(report.summary.total_records, 0);
        assert_eq!(report.summary.total_consumption, Decimal::ZERO);
        assert_eq!(report.summary.average_per_record, Decimal::ZERO);
        assert!(report.trends.is_empty());
    }

    /// The default window is the trailing 30 days ending now
    #[test]
    fn test_default_window() {
        let now = fixed_now();
        let params = ConsumptionTrendsParams::default();
        let (start, end) = params.window(now);
        assert_eq!(end, now);
        assert_eq!(start, now - Duration::days(30));
    }

    /// Expiry bucketing: 3 days out is critical, past dates are expired,
    /// beyond a week is warning
    #[test]
    fn test_expiry_buckets() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        let mut soon = item("50", "100", "5");
        soon.expiry_date = Some(today + Duration::days(3));
        let mut gone = item("50", "100", "5");
        gone.expiry_date = Some(today - Duration::days(2));
        let mut later = item("50", "100", "5");
        later.expiry_date = Some(today + Duration::days(20));

        let report = build_expiry(
            vec![soon, gone, later],
            today,
            fixed_now(),
            ExpiryParams::default(),
        );

        assert_eq!(report.summary.total_expiring_items, 3);
        assert_eq!(report.summary.critical_items, 1);
        assert_eq!(report.summary.expired_items, 1);
        assert_eq!(report.summary.warning_items, 1);

        let critical = report
            .items
            .iter()
            .find(|i| i.status == ExpiryStatus::Critical)
            .unwrap();
        assert_eq!(critical.days_remaining, 3);

        let expired = report
            .items
            .iter()
            .find(|i| i.status == ExpiryStatus::Expired)
            .unwrap();
        assert!(expired.days_remaining <= 0);
    }

    /// Items expiring beyond the horizon are dropped entirely
    #[test]
    fn test_expiry_horizon_cutoff() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let mut distant = item("50", "100", "5");
        distant.expiry_date = Some(today + Duration::days(31));

        let report = build_expiry(vec![distant], today, fixed_now(), ExpiryParams::default());
        assert_eq!(report.summary.total_expiring_items, 0);
        assert!(report.items.is_empty());
    }

    #[test]
    fn test_expiry_status_boundaries() {
        assert_eq!(expiry_status(0), ExpiryStatus::Expired);
        assert_eq!(expiry_status(-5), ExpiryStatus::Expired);
        assert_eq!(expiry_status(1), ExpiryStatus::Critical);
        assert_eq!(expiry_status(7), ExpiryStatus::Critical);
        assert_eq!(expiry_status(8), ExpiryStatus::Warning);
    }

    /// Locations with no items are dropped unless include_empty is set, and
    /// the summary counts only the retained set
    #[test]
    fn test_empty_location_exclusion() {
        let stocked = location("Main Workshop");
        let empty = location("Overflow Shed");

        let mut held = item("40", "100", "5");
        held.location_id = Some(stocked.id);

        let report = build_location_utilization(
            vec![stocked.clone(), empty.clone()],
            &[held.clone()],
            fixed_now(),
            LocationUtilizationParams::default(),
        );
        assert_eq!(report.locations.len(), 1);
        assert_eq!(report.locations[0].location_id, stocked.id);
        assert_eq!(report.summary.total_locations, 1);
        assert_eq!(report.summary.average_items_per_location, 1);

        // With include_empty the shed is zero-padded instead of dropped
        let padded = build_location_utilization(
            vec![stocked, empty],
            &[held],
            fixed_now(),
            LocationUtilizationParams {
                include_empty: true,
                ..Default::default()
            },
        );
        assert_eq!(padded.locations.len(), 2);
        assert_eq!(padded.summary.total_locations, 2);
    }

    /// Reports serialize as a tagged union: a `report_type` discriminant
    /// alongside the kind-specific body, with lowercase status and category
    /// values
    #[test]
    fn test_report_json_shape() {
        let report = Report::InventoryStatus(build_inventory_status(
            vec![item("5", "100", "10")],
            fixed_now(),
            InventoryStatusParams::default(),
        ));
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["report_type"], "inventory-status");
        assert_eq!(value["summary"]["total_items"], 1);
        assert_eq!(value["summary"]["low_stock_items"], 1);
        assert_eq!(value["items"][0]["status"], "low");
        assert_eq!(value["items"][0]["category"], "sealant");
        assert_eq!(value["items"][0]["stock_percentage"], 5);
    }

    /// Per-location category breakdown counts and sums within that location
    #[test]
    fn test_location_category_breakdown() {
        let shop = location("Paint Shop");

        let mut red = item("10", "20", "2");
        red.category = ItemCategory::Paint;
        red.location_id = Some(shop.id);
        let mut blue = item("30", "40", "2");
        blue.category = ItemCategory::Paint;
        blue.location_id = Some(shop.id);
        let mut oil = item("5", "10", "1");
        oil.category = ItemCategory::Oil;
        oil.location_id = Some(shop.id);

        let report = build_location_utilization(
            vec![shop],
            &[red, blue, oil],
            fixed_now(),
            LocationUtilizationParams::default(),
        );

        let entry = &report.locations[0];
        assert_eq!(entry.total_items, 3);
        assert_eq!(entry.total_quantity, dec("45"));

        let paint = entry
            .categories
            .iter()
            .find(|c| c.category == ItemCategory::Paint)
            .unwrap();
        assert_eq!(paint.item_count, 2);
        assert_eq!(paint.total_quantity, dec("40"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating plausible stock quantities
    fn quantity_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=100_000i64).prop_map(|n| Decimal::new(n, 2)) // 0.00 to 1000.00
    }

    fn positive_quantity_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=100_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    fn item_strategy() -> impl Strategy<Value = InventoryItem> {
        (
            quantity_strategy(),
            positive_quantity_strategy(),
            quantity_strategy(),
        )
            .prop_map(|(current, original, minimum)| {
                let mut it = item("0", "1", "0");
                it.current_quantity = current;
                it.original_amount = original;
                it.minimum_quantity = minimum;
                it
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// An item at or below its minimum is always low, regardless of its
        /// percentage
        #[test]
        fn prop_low_wins_over_critical(
            minimum in positive_quantity_strategy(),
            below in 0i64..=100i64,
            original in positive_quantity_strategy()
        ) {
            let mut it = item("0", "1", "0");
            it.minimum_quantity = minimum;
            it.current_quantity = minimum * Decimal::new(below, 2); // 0..=100% of minimum
            it.original_amount = original;

            prop_assert_eq!(stock_status(&it), StockStatus::Low);
        }

        /// Summary counters are consistent with the returned item set
        #[test]
        fn prop_inventory_summary_consistent(items in prop::collection::vec(item_strategy(), 0..20)) {
            let count = items.len() as i64;
            let report = build_inventory_status(items, fixed_now(), InventoryStatusParams::default());

            prop_assert_eq!(report.summary.total_items, count);
            let low = report.items.iter().filter(|i| i.status == StockStatus::Low).count() as i64;
            let critical = report.items.iter().filter(|i| i.status == StockStatus::Critical).count() as i64;
            prop_assert_eq!(report.summary.low_stock_items, low);
            prop_assert_eq!(report.summary.critical_stock_items, critical);
            prop_assert!(low + critical <= report.summary.total_items);
        }

        /// Grouped totals always add back up to the summary totals
        #[test]
        fn prop_day_groups_partition_records(
            quantities in prop::collection::vec(1i64..=10_000i64, 1..30),
            day_offsets in prop::collection::vec(0i64..=10i64, 1..30)
        ) {
            let base = fixed_now();
            let records: Vec<ConsumptionRecord> = quantities
                .iter()
                .zip(day_offsets.iter().cycle())
                .map(|(q, offset)| record(&Decimal::new(*q, 2).to_string(), base - Duration::days(*offset)))
                .collect();

            let params = ConsumptionTrendsParams { group_by: GroupBy::Day, ..Default::default() };
            let report = build_consumption_trends(&records, base, params, &HashMap::new(), &HashMap::new());

            let grouped_total: Decimal = report.trends.iter().map(|p| p.total_quantity()).sum();
            let grouped_count: i64 = report.trends.iter().map(|p| p.consumption_count()).sum();
            prop_assert_eq!(grouped_total, report.summary.total_consumption);
            prop_assert_eq!(grouped_count, report.summary.total_records);

            // Time-based keys are sorted ascending
            let keys: Vec<String> = report.trends.iter().map(|p| match p {
                TrendPoint::Day { date, .. } => date.clone(),
                _ => unreachable!(),
            }).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(keys, sorted);
        }

        /// Location summary totals equal the sum over retained entries
        #[test]
        fn prop_location_totals_consistent(
            item_count in 0usize..15,
            location_count in 1usize..5
        ) {
            let locations: Vec<Location> = (0..location_count).map(|i| location(&format!("Bay {}", i))).collect();
            let items: Vec<InventoryItem> = (0..item_count).map(|i| {
                let mut it = item("10", "100", "1");
                it.location_id = Some(locations[i % location_count].id);
                it
            }).collect();

            let report = build_location_utilization(
                locations,
                &items,
                fixed_now(),
                LocationUtilizationParams::default(),
            );

            let entry_items: i64 = report.locations.iter().map(|l| l.total_items).sum();
            prop_assert_eq!(entry_items, report.summary.total_items);
            prop_assert_eq!(report.summary.total_locations, report.locations.len() as i64);
            // Every retained location holds at least one item
            prop_assert!(report.locations.iter().all(|l| l.total_items > 0));
        }

        /// Expiry buckets partition the retained item set
        #[test]
        fn prop_expiry_buckets_partition(offsets in prop::collection::vec(-30i64..=60i64, 0..20)) {
            let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
            let items: Vec<InventoryItem> = offsets.iter().map(|offset| {
                let mut it = item("10", "100", "1");
                it.expiry_date = Some(today + Duration::days(*offset));
                it
            }).collect();

            let report = build_expiry(items, today, fixed_now(), ExpiryParams::default());

            prop_assert_eq!(
                report.summary.expired_items + report.summary.critical_items + report.summary.warning_items,
                report.summary.total_expiring_items
            );
            prop_assert_eq!(report.summary.total_expiring_items, report.items.len() as i64);
            // Nothing beyond the horizon survives
            prop_assert!(report.items.iter().all(|i| i.days_remaining <= 30));
        }
    }
}

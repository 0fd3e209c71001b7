//! Reporting handlers for report generation and data export
//!
//! All four report endpoints accept `format=json|csv`; report access is
//! restricted to manager and admin roles.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::services::report::ReportingOverview;
use crate::AppState;
use shared::reports::{
    ConsumptionTrendsParams, ExpiryParams, GroupBy, InventoryStatusParams,
    LocationUtilizationParams, Report, StatusFilter,
};
use shared::types::ItemCategory;

/// Response format for report endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
}

/// Parse an optional date query parameter: full RFC 3339 timestamps or plain
/// `YYYY-MM-DD` dates (taken as UTC midnight). A present but unparsable value
/// is a validation error, never a silent fallback to the default window.
fn parse_date_param(field: &'static str, value: Option<&str>) -> AppResult<Option<DateTime<Utc>>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    if let Ok(timestamp) = raw.parse::<DateTime<Utc>>() {
        return Ok(Some(timestamp));
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Some(dt.and_utc()))
        .ok_or_else(|| AppError::Validation {
            field: field.to_string(),
            message: format!(
                "'{}' is not an RFC 3339 timestamp or a YYYY-MM-DD date",
                raw
            ),
        })
}

/// Serialize a report as JSON or as a CSV attachment
fn report_response(report: Report, format: ReportFormat) -> AppResult<Response> {
    match format {
        ReportFormat::Json => Ok(Json(report).into_response()),
        ReportFormat::Csv => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                report.kind().csv_filename()
            );
            let csv = report.to_csv()?;
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                csv,
            )
                .into_response())
        }
    }
}

/// Headline record counts for the reporting landing page
pub async fn get_reports_overview(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<ReportingOverview>> {
    current_user.0.require_report_access()?;
    let overview = state.reports.overview().await?;
    Ok(Json(overview))
}

#[derive(Deserialize)]
pub struct InventoryStatusQuery {
    pub category: Option<ItemCategory>,
    pub location_id: Option<Uuid>,
    pub status: Option<StatusFilter>,
    pub format: Option<ReportFormat>,
}

/// Get the inventory status report
pub async fn get_inventory_status_report(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<InventoryStatusQuery>,
) -> AppResult<Response> {
    current_user.0.require_report_access()?;

    let params = InventoryStatusParams {
        category: query.category,
        location_id: query.location_id,
        status: query.status.unwrap_or_default(),
    };

    let report = state.reports.inventory_status(params).await?;
    report_response(report, query.format.unwrap_or_default())
}

#[derive(Deserialize)]
pub struct ConsumptionTrendsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub group_by: Option<GroupBy>,
    pub category: Option<ItemCategory>,
    pub user_id: Option<Uuid>,
    pub format: Option<ReportFormat>,
}

/// Get the consumption trends report
pub async fn get_consumption_trends_report(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<ConsumptionTrendsQuery>,
) -> AppResult<Response> {
    current_user.0.require_report_access()?;

    let params = ConsumptionTrendsParams {
        start_date: parse_date_param("start_date", query.start_date.as_deref())?,
        end_date: parse_date_param("end_date", query.end_date.as_deref())?,
        group_by: query.group_by.unwrap_or_default(),
        category: query.category,
        user_id: query.user_id,
    };

    let report = state.reports.consumption_trends(params).await?;
    report_response(report, query.format.unwrap_or_default())
}

#[derive(Deserialize)]
pub struct ExpiryQuery {
    pub category: Option<ItemCategory>,
    pub days_until_expiry: Option<i64>,
    pub format: Option<ReportFormat>,
}

/// Get the expiry report
pub async fn get_expiry_report(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<ExpiryQuery>,
) -> AppResult<Response> {
    current_user.0.require_report_access()?;

    let params = ExpiryParams {
        category: query.category,
        days_until_expiry: query.days_until_expiry.unwrap_or(30),
    };

    let report = state.reports.expiry(params).await?;
    report_response(report, query.format.unwrap_or_default())
}

#[derive(Deserialize)]
pub struct LocationUtilizationQuery {
    pub location_id: Option<Uuid>,
    pub include_empty: Option<bool>,
    pub format: Option<ReportFormat>,
}

/// Get the location utilization report
pub async fn get_location_utilization_report(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<LocationUtilizationQuery>,
) -> AppResult<Response> {
    current_user.0.require_report_access()?;

    let params = LocationUtilizationParams {
        location_id: query.location_id,
        include_empty: query.include_empty.unwrap_or(false),
    };

    let report = state.reports.location_utilization(params).await?;
    report_response(report, query.format.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_param_accepts_rfc3339_and_plain_dates() {
        let ts = parse_date_param("start_date", Some("2025-06-01T09:30:00Z"))
            .unwrap()
            .unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap());

        let midnight = parse_date_param("start_date", Some("2025-06-01"))
            .unwrap()
            .unwrap();
        assert_eq!(midnight, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn absent_date_param_is_none() {
        assert_eq!(parse_date_param("end_date", None).unwrap(), None);
    }

    #[test]
    fn malformed_date_param_is_rejected() {
        let err = parse_date_param("start_date", Some("2025-13-99")).unwrap_err();
        match err {
            AppError::Validation { field, .. } => assert_eq!(field, "start_date"),
            other => panic!("expected validation error, got {:?}", other),
        }

        assert!(parse_date_param("end_date", Some("not-a-date")).is_err());
    }
}

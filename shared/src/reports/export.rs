//! CSV export for generated reports
//!
//! Each report kind has a fixed column set; formatting dispatches
//! exhaustively over the `Report` variants. Unlike the JSON body, the Stock
//! Percentage column carries a literal `%` suffix. Fields containing commas
//! or quotes are RFC-4180 quoted by the writer.

use csv::Writer;
use thiserror::Error;

use super::{
    ConsumptionTrendsReport, ExpiryReport, GroupBy, InventoryStatusReport,
    LocationUtilizationReport, Report, TrendPoint,
};

/// Failures while rendering a report to CSV text
#[derive(Debug, Error)]
pub enum CsvExportError {
    #[error("CSV write error: {0}")]
    Write(#[from] csv::Error),
    #[error("CSV writer error: {0}")]
    IntoInner(String),
    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Report {
    /// Render this report as CSV text: one header row plus one row per entry
    pub fn to_csv(&self) -> Result<String, CsvExportError> {
        let mut wtr = Writer::from_writer(vec![]);
        match self {
            Report::InventoryStatus(report) => write_inventory_status(&mut wtr, report)?,
            Report::ConsumptionTrends(report) => write_consumption_trends(&mut wtr, report)?,
            Report::Expiry(report) => write_expiry(&mut wtr, report)?,
            Report::LocationUtilization(report) => write_location_utilization(&mut wtr, report)?,
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| CsvExportError::IntoInner(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

fn write_inventory_status(
    wtr: &mut Writer<Vec<u8>>,
    report: &InventoryStatusReport,
) -> Result<(), csv::Error> {
    wtr.write_record([
        "ID",
        "Name",
        "Category",
        "Current Quantity",
        "Original Amount",
        "Minimum Quantity",
        "Unit",
        "Stock Percentage",
        "Status",
        "Last Updated",
    ])?;
    for item in &report.items {
        wtr.write_record(&[
            item.id.to_string(),
            item.name.clone(),
            item.category.to_string(),
            item.current_quantity.to_string(),
            item.original_amount.to_string(),
            item.minimum_quantity.to_string(),
            item.unit.clone(),
            format!("{}%", item.stock_percentage),
            item.status.to_string(),
            item.updated_at.to_rfc3339(),
        ])?;
    }
    Ok(())
}

fn write_consumption_trends(
    wtr: &mut Writer<Vec<u8>>,
    report: &ConsumptionTrendsReport,
) -> Result<(), csv::Error> {
    // Header depends on the grouping mode, taken from the echoed parameters
    // so an empty trends array still gets the right columns.
    let header: &[&str] = match report.parameters.group_by {
        GroupBy::Day => &["Date", "Total Quantity", "Consumption Count"],
        GroupBy::Week => &["Week Start", "Total Quantity", "Consumption Count"],
        GroupBy::Month => &["Month", "Total Quantity", "Consumption Count"],
        GroupBy::Category => &["Category", "Total Quantity", "Consumption Count"],
        GroupBy::User => &["User ID", "User Name", "Total Quantity", "Consumption Count"],
    };
    wtr.write_record(header)?;

    for point in &report.trends {
        match point {
            TrendPoint::Day {
                date,
                total_quantity,
                consumption_count,
            } => wtr.write_record(&[
                date.clone(),
                total_quantity.to_string(),
                consumption_count.to_string(),
            ])?,
            TrendPoint::Week {
                week_start,
                total_quantity,
                consumption_count,
            } => wtr.write_record(&[
                week_start.clone(),
                total_quantity.to_string(),
                consumption_count.to_string(),
            ])?,
            TrendPoint::Month {
                month,
                total_quantity,
                consumption_count,
            } => wtr.write_record(&[
                month.clone(),
                total_quantity.to_string(),
                consumption_count.to_string(),
            ])?,
            TrendPoint::Category {
                category,
                total_quantity,
                consumption_count,
            } => wtr.write_record(&[
                category.clone(),
                total_quantity.to_string(),
                consumption_count.to_string(),
            ])?,
            TrendPoint::User {
                user_id,
                user_name,
                total_quantity,
                consumption_count,
            } => wtr.write_record(&[
                user_id.to_string(),
                user_name.clone(),
                total_quantity.to_string(),
                consumption_count.to_string(),
            ])?,
        }
    }
    Ok(())
}

fn write_expiry(wtr: &mut Writer<Vec<u8>>, report: &ExpiryReport) -> Result<(), csv::Error> {
    wtr.write_record([
        "ID",
        "Name",
        "Category",
        "Current Quantity",
        "Unit",
        "Expiry Date",
        "Days Remaining",
        "Status",
    ])?;
    for item in &report.items {
        wtr.write_record(&[
            item.id.to_string(),
            item.name.clone(),
            item.category.to_string(),
            item.current_quantity.to_string(),
            item.unit.clone(),
            item.expiry_date.to_string(),
            item.days_remaining.to_string(),
            item.status.to_string(),
        ])?;
    }
    Ok(())
}

fn write_location_utilization(
    wtr: &mut Writer<Vec<u8>>,
    report: &LocationUtilizationReport,
) -> Result<(), csv::Error> {
    wtr.write_record([
        "Location ID",
        "Location Name",
        "Location Type",
        "Total Items",
        "Total Quantity",
    ])?;
    for location in &report.locations {
        wtr.write_record(&[
            location.location_id.to_string(),
            location.location_name.clone(),
            location.location_type.clone(),
            location.total_items.to_string(),
            location.total_quantity.to_string(),
        ])?;
    }
    Ok(())
}

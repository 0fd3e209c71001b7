//! Business logic services for the Stockroom backend

pub mod inventory;
pub mod location;
pub mod report;

pub use inventory::InventoryService;
pub use location::LocationService;
pub use report::ReportService;

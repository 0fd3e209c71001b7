//! HTTP handlers for the Stockroom backend

pub mod health;
pub mod inventory;
pub mod location;
pub mod report;

pub use health::*;
pub use inventory::*;
pub use location::*;
pub use report::*;

//! Shared types and domain logic for the Stockroom inventory platform
//!
//! This crate contains the entity models, common types, validation helpers,
//! and the report aggregation engine shared between the backend server and
//! any other components of the system.

pub mod models;
pub mod reports;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

//! Database models for the Stockroom backend
//!
//! Re-exports models from the shared crate

pub use shared::models::*;

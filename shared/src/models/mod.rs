//! Entity models for the Stockroom inventory platform

mod consumption;
mod inventory;
mod location;
mod user;

pub use consumption::*;
pub use inventory::*;
pub use location::*;
pub use user::*;

//! Thin per-entity data-access facades over the record store
//!
//! Repositories return plain shared models; enum-valued columns are stored as
//! text and parsed on the way out.

pub mod consumption;
pub mod inventory;
pub mod location;
pub mod user;

pub use consumption::ConsumptionRepository;
pub use inventory::InventoryRepository;
pub use location::LocationRepository;
pub use user::UserRepository;

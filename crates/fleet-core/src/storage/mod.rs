//! Storage abstraction for Fleet.
//!
//! This module defines the `VehicleStore` trait and the types that flow
//! through it.
//!
//! ## Architecture
//!
//! The store owns a single `vehicles` table. Its column set evolves
//! additively: every open creates the table if needed and then adds any
//! column introduced by a later release, with a neutral default. Columns
//! are never dropped, renamed or reordered.
//!
//! All storage engines must implement the `VehicleStore` trait, which
//! provides the CRUD contract used by the front end.

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::{SqliteVehicleStore, DEFAULT_DB_FILENAME};
pub use traits::VehicleStore;
pub use types::{NewVehicle, Vehicle, DEFAULT_MILEAGE, DEFAULT_STATUS};

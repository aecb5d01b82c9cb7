//! # Fleet Core
//!
//! Core library for Fleet - a local, single-user vehicle record keeper.
//!
//! This crate provides the persistence layer, domain types and the small
//! helpers the front end needs, independent of any user interface.
//!
//! ## Architecture
//!
//! - **storage**: `VehicleStore` trait and the SQLite implementation
//! - **validation**: field checks applied at the input edge
//! - **catalog**: suggestion lists (vehicle types, fuels, colours, brands)
//! - **documents**: attached registration/insurance/inspection files
//! - **fs**: atomic file replacement

pub mod catalog;
pub mod documents;
pub mod error;
pub mod fs;
pub mod storage;
pub mod validation;

pub use error::{FleetError, Result};
pub use storage::{NewVehicle, SqliteVehicleStore, Vehicle, VehicleStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

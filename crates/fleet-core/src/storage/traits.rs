//! Vehicle store trait definition.
//!
//! The `VehicleStore` trait is the contract the front end programs against.
//! It is synchronous and single-owner: write operations take `&mut self` and
//! no implementation is expected to serialize concurrent callers.

use std::path::Path;

use super::types::{NewVehicle, Vehicle};
use crate::error::Result;

/// Storage interface for vehicle records.
///
/// All implementations must ensure:
/// - The vehicle table is reconciled with the current column set on open
/// - Schema changes are additive only
/// - Every write is a single atomic statement or transaction
/// - Errors are returned, never swallowed (except by `close`)
pub trait VehicleStore {
    /// Open or create the store at `path`, reconciling the schema.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::Storage` if the file cannot be opened or the
    /// schema cannot be created or extended.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Release the underlying connection.
    ///
    /// Calling this on an already closed store is a no-op. Failures while
    /// closing are logged, not returned.
    fn close(&mut self);

    /// Whether the store currently holds an open connection.
    fn is_open(&self) -> bool;

    // --- Write operations ---

    /// Insert a new vehicle, returning its generated id.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::ConstraintViolation` if the license plate is
    /// already present.
    fn add(&mut self, vehicle: &NewVehicle) -> Result<i64>;

    /// Overwrite every column of the vehicle with `id` and bump `updated_at`.
    ///
    /// Fields absent from `vehicle` are written as their defaults; nothing
    /// is merged from the stored row.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::NotFound` if no vehicle has this id and
    /// `FleetError::ConstraintViolation` if the new plate collides.
    fn update(&mut self, id: i64, vehicle: &NewVehicle) -> Result<()>;

    /// Delete the vehicle with this license plate.
    ///
    /// Returns `true` if a row was removed. The delete runs inside a
    /// transaction that is rolled back on failure.
    fn delete(&mut self, license_plate: &str) -> Result<bool>;

    // --- Read operations ---

    /// All vehicles, most recently added first.
    fn get_all(&self) -> Result<Vec<Vehicle>>;

    /// Exact match on the natural key.
    fn get_by_license_plate(&self, license_plate: &str) -> Result<Option<Vehicle>>;

    /// Exact match on the primary key.
    fn get_by_id(&self, id: i64) -> Result<Option<Vehicle>>;

    /// Vehicles fitted with a GPS tracker, ordered by brand then model.
    fn get_all_with_gps(&self) -> Result<Vec<Vehicle>>;

    /// Case-insensitive substring search over the listed columns.
    ///
    /// An empty query returns the same result as `get_all`.
    fn search(&self, query: &str) -> Result<Vec<Vehicle>>;

    /// Number of stored vehicles.
    fn count(&self) -> Result<usize>;
}

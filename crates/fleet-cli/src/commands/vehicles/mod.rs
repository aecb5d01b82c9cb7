//! Vehicle record commands.

mod add;
mod delete;
mod edit;
mod list;
mod search;
mod show;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use search::handle_search;
pub use show::handle_show;

use fleet_core::validation::normalize_plate;
use fleet_core::{SqliteVehicleStore, Vehicle, VehicleStore};

use crate::errors::CliError;

const LIST_HINT: &str = "Hint: Run `fleet list` to see stored vehicles.";

/// Look up a vehicle by plate, or fail with a not-found error.
pub(crate) fn require_by_plate(store: &SqliteVehicleStore, plate: &str) -> anyhow::Result<Vehicle> {
    let plate = normalize_plate(plate);
    store.get_by_license_plate(&plate)?.ok_or_else(|| {
        CliError::not_found(format!("No vehicle with plate {}", plate), LIST_HINT).into()
    })
}

pub(crate) fn require_by_id(store: &SqliteVehicleStore, id: i64) -> anyhow::Result<Vehicle> {
    store
        .get_by_id(id)?
        .ok_or_else(|| CliError::not_found(format!("No vehicle with ID {}", id), LIST_HINT).into())
}

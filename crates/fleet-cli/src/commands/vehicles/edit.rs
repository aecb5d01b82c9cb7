use chrono::Local;
use tracing::info;

use fleet_core::VehicleStore;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::plate_conflict;
use crate::form::{build_vehicle, VehicleForm};
use crate::output::{print_json, vehicle_json};
use crate::ui::{print, receipt, Field};

use super::require_by_id;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, None);
    let interactive = !args.no_input && ui.is_interactive();
    let today = Local::now().date_naive();

    let mut store = ctx.open_store()?;
    let existing = require_by_id(&store, args.id)?;

    let vehicle = build_vehicle(
        VehicleForm::edit(&existing),
        &args.fields,
        interactive,
        &ui,
        today,
    )?;
    store
        .update(args.id, &vehicle)
        .map_err(|e| plate_conflict(e, &vehicle.license_plate))?;
    let updated = require_by_id(&store, args.id)?;
    store.close();
    info!(id = args.id, plate = %updated.license_plate, "vehicle updated");

    if ui.mode.is_json() {
        return print_json(&vehicle_json(&updated, None)?);
    }
    if !ctx.quiet() {
        let id = updated.id.to_string();
        let updated_at = updated.updated_at.to_rfc3339();
        print(
            &ui,
            &receipt(
                &ui,
                "Updated vehicle",
                &[
                    (Field::Id, id.as_str()),
                    (Field::LicensePlate, updated.license_plate.as_str()),
                    (Field::UpdatedAt, updated_at.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

use chrono::Local;
use tracing::info;

use fleet_core::VehicleStore;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::plate_conflict;
use crate::form::{build_vehicle, VehicleForm};
use crate::output::{print_json, vehicle_json};
use crate::ui::{print, receipt, Field};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, None);
    let interactive = !args.no_input && ui.is_interactive();
    let today = Local::now().date_naive();

    let vehicle = build_vehicle(VehicleForm::create(), &args.fields, interactive, &ui, today)?;

    let mut store = ctx.open_store()?;
    let id = store
        .add(&vehicle)
        .map_err(|e| plate_conflict(e, &vehicle.license_plate))?;
    let stored = store.get_by_id(id)?;
    store.close();
    info!(id, plate = %vehicle.license_plate, "vehicle added");

    if ui.mode.is_json() {
        if let Some(ref stored) = stored {
            print_json(&vehicle_json(stored, None)?)?;
        }
        return Ok(());
    }
    if !ctx.quiet() {
        let id = id.to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Added vehicle",
                &[
                    (Field::Id, id.as_str()),
                    (Field::LicensePlate, vehicle.license_plate.as_str()),
                    (Field::Brand, vehicle.brand.as_str()),
                    (Field::Model, vehicle.model.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

use tracing::{info, warn};

use fleet_core::VehicleStore;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::ui::prompt::prompt_confirm;
use crate::ui::{hint, print, receipt, Field};

use super::require_by_plate;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let mut store = ctx.open_store()?;
    let vehicle = require_by_plate(&store, &args.plate)?;

    if !args.yes {
        let question = format!(
            "Delete {} {} ({})?",
            vehicle.brand, vehicle.model, vehicle.license_plate
        );
        if !prompt_confirm(&ui, &question, false)? {
            print(&ui, &hint(&ui, "Nothing deleted."));
            return Ok(());
        }
    }

    if !store.delete(&vehicle.license_plate)? {
        return Err(CliError::not_found(
            format!("No vehicle with plate {}", vehicle.license_plate),
            "Hint: It may have been deleted already.",
        )
        .into());
    }
    store.close();
    info!(plate = %vehicle.license_plate, "vehicle deleted");

    let mut removed = 0;
    if args.with_documents {
        let documents = ctx.document_store()?;
        for (kind, _) in documents.list(&vehicle.license_plate) {
            match documents.remove(&vehicle.license_plate, kind) {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(err) => warn!(%kind, error = %err, "failed to remove document"),
            }
        }
    }

    if !ctx.quiet() {
        let id = vehicle.id.to_string();
        let removed = removed.to_string();
        let mut items = vec![
            (Field::Id, id.as_str()),
            (Field::LicensePlate, vehicle.license_plate.as_str()),
        ];
        if args.with_documents {
            items.push((Field::Document, removed.as_str()));
        }
        print(&ui, &receipt(&ui, "Deleted vehicle", &items));
    }
    Ok(())
}

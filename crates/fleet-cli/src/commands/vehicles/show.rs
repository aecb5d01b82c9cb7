use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::print_vehicle;

use super::{require_by_id, require_by_plate};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let vehicle = match (args.id, args.plate.as_deref()) {
        (Some(id), _) => require_by_id(&store, id)?,
        (None, Some(plate)) => require_by_plate(&store, plate)?,
        (None, None) => {
            return Err(anyhow::anyhow!("Either a license plate or --id is required"));
        }
    };

    let documents = ctx.document_store()?.list(&vehicle.license_plate);
    let ui = ctx.ui_context(args.json, None);
    print_vehicle(&ui, &vehicle, &documents)
}

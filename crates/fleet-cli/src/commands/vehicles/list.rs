use fleet_core::VehicleStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::check_format_flags;
use crate::output::print_vehicle_list;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    check_format_flags(args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;

    let (vehicles, context) = if args.gps {
        (store.get_all_with_gps()?, Some("GPS"))
    } else {
        (store.get_all()?, None)
    };

    let ui = ctx.ui_context(args.json, args.format.as_deref());
    print_vehicle_list(&ui, "list", context, &vehicles, ctx.quiet())
}

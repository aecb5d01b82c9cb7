use fleet_core::VehicleStore;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::helpers::check_format_flags;
use crate::output::print_vehicle_list;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    check_format_flags(args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;
    let vehicles = store.search(&args.query)?;

    let ui = ctx.ui_context(args.json, args.format.as_deref());
    let query = args.query.trim();
    let context = (!query.is_empty()).then_some(query);
    print_vehicle_list(&ui, "search", context, &vehicles, ctx.quiet())
}

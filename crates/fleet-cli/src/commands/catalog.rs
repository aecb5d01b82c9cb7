use fleet_core::catalog::Catalog;

use crate::cli::CatalogArgs;
use crate::output::print_json;

pub fn handle_catalog(args: &CatalogArgs) -> anyhow::Result<()> {
    let catalog = Catalog::from(args.list);
    let values = catalog.values();
    if args.json {
        return print_json(&values);
    }
    for value in values {
        println!("{}", value);
    }
    Ok(())
}

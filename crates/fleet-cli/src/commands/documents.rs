//! Attached document commands.

use fleet_core::documents::DocumentKind;

use crate::app::AppContext;
use crate::cli::{AttachArgs, DetachArgs, DocsArgs};
use crate::errors::CliError;
use crate::output::{documents_json, print_json};
use crate::ui::{
    blank_line, header, hint, print, receipt, simple_table, Column, Field, OutputMode,
};

use super::vehicles::require_by_plate;

pub fn handle_attach(ctx: &AppContext, args: &AttachArgs) -> anyhow::Result<()> {
    let vehicle = require_by_plate(&ctx.open_store()?, &args.plate)?;
    let kind = DocumentKind::from(args.kind);

    let path = ctx
        .document_store()?
        .attach(&vehicle.license_plate, kind, &args.file)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        let kind_text = kind.to_string();
        let path_text = path.display().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Attached document",
                &[
                    (Field::LicensePlate, vehicle.license_plate.as_str()),
                    (Field::Document, kind_text.as_str()),
                    (Field::Path, path_text.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_detach(ctx: &AppContext, args: &DetachArgs) -> anyhow::Result<()> {
    let vehicle = require_by_plate(&ctx.open_store()?, &args.plate)?;
    let kind = DocumentKind::from(args.kind);

    if !ctx
        .document_store()?
        .remove(&vehicle.license_plate, kind)?
    {
        return Err(CliError::not_found(
            format!("No {} document for {}", kind, vehicle.license_plate),
            format!("Hint: Run `fleet docs {}` to see attached files.", vehicle.license_plate),
        )
        .into());
    }

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        let kind_text = kind.to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Removed document",
                &[
                    (Field::LicensePlate, vehicle.license_plate.as_str()),
                    (Field::Document, kind_text.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_docs(ctx: &AppContext, args: &DocsArgs) -> anyhow::Result<()> {
    let vehicle = require_by_plate(&ctx.open_store()?, &args.plate)?;
    let documents = ctx.document_store()?.list(&vehicle.license_plate);

    let ui = ctx.ui_context(args.json, None);
    if ui.mode.is_json() {
        return print_json(&documents_json(&documents));
    }

    if documents.is_empty() {
        if !ctx.quiet() {
            match ui.mode {
                OutputMode::Pretty => {
                    print(&ui, &header(&ui, "docs", Some(vehicle.license_plate.as_str())));
                    blank_line(&ui);
                    print(
                        &ui,
                        &hint(
                            &ui,
                            &format!("fleet attach {} insurance <FILE>", vehicle.license_plate),
                        ),
                    );
                }
                OutputMode::Plain | OutputMode::Json => println!("count=0"),
            }
        }
        return Ok(());
    }

    if ui.mode.is_pretty() {
        print(&ui, &header(&ui, "docs", Some(vehicle.license_plate.as_str())));
        blank_line(&ui);
    }
    let columns = [
        Column::field(Field::Document, &ui),
        Column::field(Field::Path, &ui),
    ];
    let rows: Vec<Vec<String>> = documents
        .iter()
        .map(|(kind, path)| vec![kind.as_str().to_string(), path.display().to_string()])
        .collect();
    print(&ui, &simple_table(&ui, &columns, &rows));
    Ok(())
}

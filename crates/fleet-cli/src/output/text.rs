//! Text and table output formatting for vehicles.

use std::path::PathBuf;

use fleet_core::documents::DocumentKind;
use fleet_core::Vehicle;

use crate::ui::format::{format_date, format_datetime, or_blank, single_line, truncate};
use crate::ui::labels::yes_no;
use crate::ui::{
    blank_line, field_kv, header, hint, kv, print, table, Column, Field, OutputMode, UiContext,
};

use super::json::{print_json, vehicle_json};

const NOTES_MAX: usize = 40;

/// Columns shown in the vehicle list.
const LIST_FIELDS: [Field; 9] = [
    Field::Id,
    Field::LicensePlate,
    Field::Brand,
    Field::Model,
    Field::Year,
    Field::Mileage,
    Field::InsuranceExpiry,
    Field::Notes,
    Field::HasGps,
];

/// Translated yes/no when pretty; 1/0 otherwise, as stored.
fn gps_text(ui: &UiContext, has_gps: bool) -> String {
    if ui.mode.is_pretty() {
        yes_no(has_gps, ui.language).to_string()
    } else {
        u8::from(has_gps).to_string()
    }
}

/// One row per vehicle, in `LIST_FIELDS` order.
pub fn vehicle_rows(ui: &UiContext, vehicles: &[Vehicle]) -> Vec<Vec<String>> {
    vehicles
        .iter()
        .map(|v| {
            let notes = single_line(v.notes.as_deref().unwrap_or(""));
            vec![
                v.id.to_string(),
                v.license_plate.clone(),
                v.brand.clone(),
                v.model.clone(),
                or_blank(v.year),
                v.mileage.to_string(),
                format_date(v.insurance_expiry),
                if ui.mode.is_pretty() {
                    truncate(&notes, NOTES_MAX)
                } else {
                    notes
                },
                gps_text(ui, v.has_gps),
            ]
        })
        .collect()
}

pub fn print_vehicle_list(
    ui: &UiContext,
    command: &str,
    context: Option<&str>,
    vehicles: &[Vehicle],
    quiet: bool,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        return print_json(vehicles);
    }

    if vehicles.is_empty() {
        if !quiet {
            match ui.mode {
                OutputMode::Pretty => {
                    print(ui, &header(ui, command, context));
                    blank_line(ui);
                    print(ui, &hint(ui, "No vehicles found."));
                }
                OutputMode::Plain | OutputMode::Json => println!("count=0"),
            }
        }
        return Ok(());
    }

    let rows = vehicle_rows(ui, vehicles);
    if ui.mode.is_pretty() && !quiet {
        print(ui, &header(ui, command, context));
        blank_line(ui);
    }

    let columns: Vec<Column> = LIST_FIELDS
        .iter()
        .map(|field| Column::field(*field, ui))
        .collect();
    print(ui, &table(ui, &columns, &rows));

    if ui.mode.is_pretty() && !quiet {
        blank_line(ui);
        print(ui, &hint(ui, &format!("{} vehicles", vehicles.len())));
    }
    Ok(())
}

/// Every field of one vehicle followed by its attached documents.
pub fn print_vehicle(
    ui: &UiContext,
    vehicle: &Vehicle,
    documents: &[(DocumentKind, PathBuf)],
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        return print_json(&vehicle_json(vehicle, Some(documents))?);
    }

    let pretty = ui.mode.is_pretty();
    if pretty {
        print(ui, &header(ui, "show", Some(vehicle.license_plate.as_str())));
        blank_line(ui);
    }

    let v = vehicle;
    let fields: [(Field, String); 19] = [
        (Field::Id, v.id.to_string()),
        (Field::LicensePlate, v.license_plate.clone()),
        (Field::Brand, v.brand.clone()),
        (Field::Model, v.model.clone()),
        (Field::Year, or_blank(v.year)),
        (Field::VehicleType, or_blank(v.vehicle_type.as_deref())),
        (Field::VinNumber, or_blank(v.vin_number.as_deref())),
        (Field::Mileage, v.mileage.to_string()),
        (Field::EngineCc, or_blank(v.engine_cc)),
        (Field::FuelType, or_blank(v.fuel_type.as_deref())),
        (Field::Color, or_blank(v.color.as_deref())),
        (Field::InsuranceExpiry, format_date(v.insurance_expiry)),
        (Field::KteoNext, format_date(v.kteo_next)),
        (Field::KekRenewal, format_date(v.kek_renewal)),
        (Field::Status, v.status.clone()),
        (Field::HasGps, gps_text(ui, v.has_gps)),
        (Field::Notes, single_line(v.notes.as_deref().unwrap_or(""))),
        (Field::CreatedAt, format_datetime(&v.created_at, pretty)),
        (Field::UpdatedAt, format_datetime(&v.updated_at, pretty)),
    ];
    for (field, value) in &fields {
        print(ui, &field_kv(ui, *field, value));
    }

    if !documents.is_empty() {
        blank_line(ui);
        for (kind, path) in documents {
            let line = if pretty {
                kv(
                    ui,
                    &format!("{} ({})", Field::Document.text(ui.language), kind),
                    &path.display().to_string(),
                )
            } else {
                format!("document_{}={}", kind.as_str(), path.display())
            };
            print(ui, &line);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::Language;
    use crate::ui::theme::Accent;
    use chrono::{NaiveDate, Utc};

    fn ui(mode: OutputMode) -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 120,
            mode,
            accent: Accent::default(),
            language: Language::En,
        }
    }

    fn vehicle(notes: &str) -> Vehicle {
        let now = Utc::now();
        Vehicle {
            id: 4,
            license_plate: "IKA-1234".to_string(),
            brand: "Fiat".to_string(),
            model: "Doblo".to_string(),
            year: None,
            vehicle_type: None,
            vin_number: None,
            mileage: 98000,
            engine_cc: None,
            fuel_type: None,
            color: None,
            notes: Some(notes.to_string()),
            insurance_expiry: NaiveDate::from_ymd_opt(2025, 3, 1),
            kteo_next: None,
            kek_renewal: None,
            status: "Active".to_string(),
            has_gps: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_rows_follow_list_columns() {
        let rows = vehicle_rows(&ui(OutputMode::Plain), &[vehicle("van\nback door sticks")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), LIST_FIELDS.len());
        assert_eq!(rows[0][1], "IKA-1234");
        assert_eq!(rows[0][4], "");
        assert_eq!(rows[0][6], "2025-03-01");
        assert_eq!(rows[0][7], "van back door sticks");
        assert_eq!(rows[0][8], "1");
    }

    #[test]
    fn test_pretty_rows_truncate_notes() {
        let long = "x".repeat(100);
        let rows = vehicle_rows(&ui(OutputMode::Pretty), &[vehicle(&long)]);
        assert_eq!(rows[0][7].chars().count(), NOTES_MAX);
        assert!(rows[0][7].ends_with("..."));
        assert_eq!(rows[0][8], "Yes");
    }
}

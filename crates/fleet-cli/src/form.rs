//! Vehicle input assembled from flags and interactive prompts.
//!
//! `add` and `edit` share this flow: start from an empty record (or the
//! stored one), apply whatever flags were given, prompt for the rest when
//! a TTY is available, then normalize and validate.

use chrono::NaiveDate;
use tracing::debug;

use fleet_core::catalog::{self, Catalog};
use fleet_core::validation::{normalize_plate, normalize_vin, validate_vehicle};
use fleet_core::{NewVehicle, Vehicle};

use crate::cli::VehicleFieldArgs;
use crate::helpers::{parse_optional_date, parse_optional_number, parse_optional_text};
use crate::ui::format::{format_date, or_blank};
use crate::ui::prompt::{prompt_confirm, prompt_input, prompt_select_optional, Suggestions};
use crate::ui::{Field, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone)]
pub struct VehicleForm {
    mode: FormMode,
    vehicle: NewVehicle,
}

impl VehicleForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            vehicle: NewVehicle::default(),
        }
    }

    /// Form prefilled with every stored value.
    pub fn edit(existing: &Vehicle) -> Self {
        Self {
            mode: FormMode::Edit,
            vehicle: NewVehicle::from(existing),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Apply flag values. A blank value clears an optional field.
    pub fn apply_args(&mut self, args: &VehicleFieldArgs) -> anyhow::Result<()> {
        let v = &mut self.vehicle;

        if let Some(ref plate) = args.plate {
            v.license_plate = plate.trim().to_string();
        }
        if let Some(ref brand) = args.brand {
            v.brand = brand.trim().to_string();
        }
        if let Some(ref model) = args.model {
            v.model = model.trim().to_string();
        }
        if let Some(ref year) = args.year {
            v.year = parse_optional_number("year", year)?;
        }
        if let Some(ref value) = args.vehicle_type {
            v.vehicle_type = parse_optional_text(value);
        }
        if let Some(ref vin) = args.vin {
            v.vin_number = parse_optional_text(vin);
        }
        if let Some(ref mileage) = args.mileage {
            v.mileage = parse_optional_number("mileage", mileage)?;
        }
        if let Some(ref cc) = args.engine_cc {
            v.engine_cc = parse_optional_number("engine cc", cc)?;
        }
        if let Some(ref fuel) = args.fuel {
            v.fuel_type = parse_optional_text(fuel);
        }
        if let Some(ref color) = args.color {
            v.color = parse_optional_text(color);
        }
        if let Some(ref notes) = args.notes {
            v.notes = parse_optional_text(notes);
        }
        if let Some(ref date) = args.insurance_expiry {
            v.insurance_expiry = parse_optional_date("insurance expiry", date)?;
        }
        if let Some(ref date) = args.kteo_next {
            v.kteo_next = parse_optional_date("KTEO date", date)?;
        }
        if let Some(ref date) = args.kek_renewal {
            v.kek_renewal = parse_optional_date("KEK renewal", date)?;
        }
        if let Some(ref status) = args.status {
            v.status = parse_optional_text(status);
        }
        if let Some(gps) = args.gps {
            v.has_gps = Some(gps);
        }
        Ok(())
    }

    /// Prompt for every field that was not given as a flag.
    pub fn prompt(&mut self, ui: &UiContext, given: &VehicleFieldArgs) -> anyhow::Result<()> {
        let lang = ui.language;
        let v = &mut self.vehicle;

        if given.plate.is_none() {
            v.license_plate = prompt_input(
                ui,
                Field::LicensePlate.text(lang),
                Some(v.license_plate.as_str()),
                true,
                None,
            )?;
        }
        if given.brand.is_none() {
            let brands = catalog::brands();
            let suggestions = Suggestions::new(&brands);
            v.brand = prompt_input(
                ui,
                Field::Brand.text(lang),
                Some(v.brand.as_str()),
                true,
                Some(&suggestions),
            )?;
        }
        if given.model.is_none() {
            v.model = prompt_input(
                ui,
                Field::Model.text(lang),
                Some(v.model.as_str()),
                true,
                None,
            )?;
        }
        if given.year.is_none() {
            let current = or_blank(v.year);
            let value = prompt_optional(ui, Field::Year.text(lang), &current)?;
            v.year = parse_optional_number("year", &value)?;
        }
        if given.vehicle_type.is_none() {
            v.vehicle_type = prompt_select_optional(
                ui,
                Field::VehicleType.text(lang),
                catalog::vehicle_types(),
                v.vehicle_type.as_deref(),
            )?;
        }
        if given.vin.is_none() {
            let current = v.vin_number.clone().unwrap_or_default();
            let value = prompt_optional(ui, Field::VinNumber.text(lang), &current)?;
            v.vin_number = parse_optional_text(&value);
        }
        if given.mileage.is_none() {
            let current = or_blank(v.mileage);
            let value = prompt_optional(ui, Field::Mileage.text(lang), &current)?;
            v.mileage = parse_optional_number("mileage", &value)?;
        }
        if given.engine_cc.is_none() {
            let current = or_blank(v.engine_cc);
            let value = prompt_optional(ui, Field::EngineCc.text(lang), &current)?;
            v.engine_cc = parse_optional_number("engine cc", &value)?;
        }
        if given.fuel.is_none() {
            v.fuel_type = prompt_select_optional(
                ui,
                Field::FuelType.text(lang),
                catalog::fuel_types(),
                v.fuel_type.as_deref(),
            )?;
        }
        if given.color.is_none() {
            v.color = prompt_select_optional(
                ui,
                Field::Color.text(lang),
                catalog::colors(),
                v.color.as_deref(),
            )?;
        }
        if given.insurance_expiry.is_none() {
            v.insurance_expiry =
                prompt_date(ui, Field::InsuranceExpiry, v.insurance_expiry, "insurance expiry")?;
        }
        if given.kteo_next.is_none() {
            v.kteo_next = prompt_date(ui, Field::KteoNext, v.kteo_next, "KTEO date")?;
        }
        if given.kek_renewal.is_none() {
            v.kek_renewal = prompt_date(ui, Field::KekRenewal, v.kek_renewal, "KEK renewal")?;
        }
        if given.gps.is_none() {
            let current = v.has_gps_or_default();
            v.has_gps = Some(prompt_confirm(ui, Field::HasGps.text(lang), current)?);
        }
        if given.notes.is_none() {
            let current = v.notes.clone().unwrap_or_default();
            let value = prompt_optional(ui, Field::Notes.text(lang), &current)?;
            v.notes = parse_optional_text(&value);
        }
        Ok(())
    }

    /// Normalize plate and VIN, then validate.
    pub fn finish(mut self, today: NaiveDate) -> anyhow::Result<NewVehicle> {
        let v = &mut self.vehicle;
        v.license_plate = normalize_plate(&v.license_plate);
        v.vin_number = v.vin_number.as_deref().and_then(normalize_vin);
        v.brand = v.brand.trim().to_string();
        v.model = v.model.trim().to_string();

        validate_vehicle(v, today)?;

        if !catalog::is_known(Catalog::Brands, &v.brand) {
            debug!(brand = %v.brand, "brand not in catalog");
        }
        if let Some(ref fuel) = v.fuel_type {
            if !catalog::is_known(Catalog::FuelTypes, fuel) {
                debug!(fuel = %fuel, "fuel type not in catalog");
            }
        }
        Ok(self.vehicle)
    }
}

fn prompt_date(
    ui: &UiContext,
    field: Field,
    current: Option<NaiveDate>,
    name: &str,
) -> anyhow::Result<Option<NaiveDate>> {
    let prompt = format!("{} (YYYY-MM-DD)", field.text(ui.language));
    let value = prompt_optional(ui, &prompt, &format_date(current))?;
    parse_optional_date(name, &value)
}

/// Entered at a prompt to clear a stored optional value.
const CLEAR_INPUT: &str = "-";

/// Prompt for an optional value prefilled with `current`.
///
/// An empty answer keeps `current`, so clearing it takes `CLEAR_INPUT`,
/// which comes back as an empty string.
fn prompt_optional(ui: &UiContext, label: &str, current: &str) -> anyhow::Result<String> {
    let prompt = if current.is_empty() {
        label.to_string()
    } else {
        format!("{} ({} to clear)", label, CLEAR_INPUT)
    };
    let value = prompt_input(ui, &prompt, Some(current), false, None)?;
    Ok(cleared(value))
}

fn cleared(value: String) -> String {
    if value.trim() == CLEAR_INPUT {
        String::new()
    } else {
        value
    }
}

/// Assemble a validated vehicle from a form start point, flags and (when
/// `interactive`) prompts.
pub fn build_vehicle(
    mut form: VehicleForm,
    args: &VehicleFieldArgs,
    interactive: bool,
    ui: &UiContext,
    today: NaiveDate,
) -> anyhow::Result<NewVehicle> {
    form.apply_args(args)?;
    if interactive {
        debug!(mode = ?form.mode(), "prompting for vehicle fields");
        form.prompt(ui, args)?;
    }
    form.finish(today)
}

//! Field checks applied where user input enters the system.
//!
//! The store does not call these; it accepts whatever it is given and
//! relies on the engine for uniqueness.

use chrono::{Datelike, NaiveDate};

use crate::error::{FleetError, Result};
use crate::storage::NewVehicle;

/// Required length of a vehicle identification number.
pub const VIN_LENGTH: usize = 17;

/// Trim and upper-case a license plate.
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

/// Trim and upper-case a VIN; blank input becomes `None`.
pub fn normalize_vin(vin: &str) -> Option<String> {
    let trimmed = vin.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Check presence and length rules for a vehicle about to be saved.
///
/// - license plate, brand and model must be non-blank
/// - a non-blank VIN must be exactly 17 characters
/// - the year may be at most one past `today`'s year
pub fn validate_vehicle(vehicle: &NewVehicle, today: NaiveDate) -> Result<()> {
    require("license plate", &vehicle.license_plate)?;
    require("brand", &vehicle.brand)?;
    require("model", &vehicle.model)?;

    if let Some(ref vin) = vehicle.vin_number {
        let vin = vin.trim();
        if !vin.is_empty() && vin.chars().count() != VIN_LENGTH {
            return Err(FleetError::Validation(format!(
                "VIN must be {} characters (got {})",
                VIN_LENGTH,
                vin.chars().count()
            )));
        }
    }

    if let Some(year) = vehicle.year {
        let max_year = today.year() + 1;
        if year > max_year {
            return Err(FleetError::Validation(format!(
                "Year cannot be later than {}",
                max_year
            )));
        }
    }

    Ok(())
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FleetError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_valid_vehicle_passes() {
        let vehicle = NewVehicle::new("XEP-4096", "Toyota", "Corolla")
            .with_year(2026)
            .with_vin_number("JTDBR32E720123456");
        assert!(validate_vehicle(&vehicle, today()).is_ok());
    }

    #[test]
    fn test_blank_required_fields_rejected() {
        let missing_plate = NewVehicle::new("  ", "Toyota", "Corolla");
        let missing_brand = NewVehicle::new("XEP-4096", "", "Corolla");
        let missing_model = NewVehicle::new("XEP-4096", "Toyota", " ");

        for vehicle in [missing_plate, missing_brand, missing_model] {
            let err = validate_vehicle(&vehicle, today()).unwrap_err();
            assert!(matches!(err, FleetError::Validation(_)));
        }
    }

    #[test]
    fn test_short_vin_rejected() {
        let vehicle = NewVehicle::new("XEP-4096", "Toyota", "Corolla").with_vin_number("ABC123");
        let err = validate_vehicle(&vehicle, today()).unwrap_err();
        assert!(err.to_string().contains("17"));
    }

    #[test]
    fn test_blank_vin_is_allowed() {
        let vehicle = NewVehicle::new("XEP-4096", "Toyota", "Corolla").with_vin_number("");
        assert!(validate_vehicle(&vehicle, today()).is_ok());
    }

    #[test]
    fn test_year_too_far_ahead_rejected() {
        let vehicle = NewVehicle::new("XEP-4096", "Toyota", "Corolla").with_year(2027);
        assert!(validate_vehicle(&vehicle, today()).is_err());
    }

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("  xep-4096 "), "XEP-4096");
    }

    #[test]
    fn test_normalize_vin() {
        assert_eq!(normalize_vin(" jtdbr32e720123456 ").as_deref(), Some("JTDBR32E720123456"));
        assert_eq!(normalize_vin("   "), None);
    }
}

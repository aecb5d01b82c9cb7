//! Vehicle row type for database queries.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use rusqlite::Row;

use crate::error::{FleetError, Result};
use crate::storage::types::{Vehicle, DEFAULT_MILEAGE, DEFAULT_STATUS};

/// Column list shared by every SELECT, in `VehicleRow` field order.
pub(crate) const COLS: &str = "\
    id, license_plate, brand, model, year, vehicle_type, vin_number, \
    mileage, engine_cc, fuel_type, color, notes, insurance_expiry, \
    kteo_next, kek_renewal, status, has_gps, created_at, updated_at";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format written by SQLite's `CURRENT_TIMESTAMP` default.
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw row data from the vehicles table, before parsing into domain types.
///
/// Columns added by later releases, and values written by older releases,
/// may be NULL; defaults are applied during conversion.
#[derive(Debug)]
pub struct VehicleRow {
    pub id: i64,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub vehicle_type: Option<String>,
    pub vin_number: Option<String>,
    pub mileage: Option<i64>,
    pub engine_cc: Option<i32>,
    pub fuel_type: Option<String>,
    pub color: Option<String>,
    pub notes: Option<String>,
    pub insurance_expiry: Option<String>,
    pub kteo_next: Option<String>,
    pub kek_renewal: Option<String>,
    pub status: Option<String>,
    pub has_gps: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl VehicleRow {
    /// Read a row selected with `COLS`.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            license_plate: row.get(1)?,
            brand: row.get(2)?,
            model: row.get(3)?,
            year: row.get(4)?,
            vehicle_type: row.get(5)?,
            vin_number: row.get(6)?,
            mileage: row.get(7)?,
            engine_cc: row.get(8)?,
            fuel_type: row.get(9)?,
            color: row.get(10)?,
            notes: row.get(11)?,
            insurance_expiry: row.get(12)?,
            kteo_next: row.get(13)?,
            kek_renewal: row.get(14)?,
            status: row.get(15)?,
            has_gps: row.get(16)?,
            created_at: row.get(17)?,
            updated_at: row.get(18)?,
        })
    }
}

impl TryFrom<VehicleRow> for Vehicle {
    type Error = FleetError;

    fn try_from(row: VehicleRow) -> Result<Self> {
        let created_at = match row.created_at {
            Some(ref value) => parse_timestamp(value)?,
            None => {
                return Err(FleetError::Storage(format!(
                    "Vehicle {} has no created_at timestamp",
                    row.id
                )))
            }
        };
        let updated_at = match row.updated_at {
            Some(ref value) => parse_timestamp(value)?,
            None => created_at,
        };

        Ok(Vehicle {
            id: row.id,
            license_plate: row.license_plate,
            brand: row.brand,
            model: row.model,
            year: row.year,
            vehicle_type: row.vehicle_type,
            vin_number: row.vin_number,
            mileage: row.mileage.unwrap_or(DEFAULT_MILEAGE),
            engine_cc: row.engine_cc,
            fuel_type: row.fuel_type,
            color: row.color,
            notes: row.notes,
            insurance_expiry: parse_date(row.insurance_expiry.as_deref())?,
            kteo_next: parse_date(row.kteo_next.as_deref())?,
            kek_renewal: parse_date(row.kek_renewal.as_deref())?,
            status: row.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            has_gps: row.has_gps.unwrap_or(0) != 0,
            created_at,
            updated_at,
        })
    }
}

/// Encode a timestamp with fixed microsecond precision so that text order
/// matches time order.
pub(crate) fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decode a stored timestamp (RFC 3339, or SQLite `CURRENT_TIMESTAMP`).
pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, SQLITE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| FleetError::Storage(format!("Invalid timestamp {:?}: {}", value, e)))
}

pub(crate) fn format_date(value: Option<NaiveDate>) -> Option<String> {
    value.map(|date| date.format(DATE_FORMAT).to_string())
}

fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Some)
            .map_err(|e| FleetError::Storage(format!("Invalid date {:?}: {}", text, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_row() -> VehicleRow {
        VehicleRow {
            id: 1,
            license_plate: "XEP-4096".to_string(),
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: None,
            vehicle_type: None,
            vin_number: None,
            mileage: None,
            engine_cc: None,
            fuel_type: None,
            color: None,
            notes: None,
            insurance_expiry: None,
            kteo_next: None,
            kek_renewal: None,
            status: None,
            has_gps: None,
            created_at: Some("2024-05-01 08:30:00".to_string()),
            updated_at: None,
        }
    }

    #[test]
    fn test_nulls_fall_back_to_defaults() {
        let vehicle: Vehicle = bare_row().try_into().unwrap();
        assert_eq!(vehicle.mileage, 0);
        assert_eq!(vehicle.status, "Active");
        assert!(!vehicle.has_gps);
        assert_eq!(vehicle.updated_at, vehicle.created_at);
    }

    #[test]
    fn test_empty_date_reads_as_absent() {
        let mut row = bare_row();
        row.insurance_expiry = Some(String::new());
        row.kteo_next = Some("2026-02-28".to_string());
        let vehicle: Vehicle = row.try_into().unwrap();
        assert!(vehicle.insurance_expiry.is_none());
        assert_eq!(vehicle.kteo_next, NaiveDate::from_ymd_opt(2026, 2, 28));
    }

    #[test]
    fn test_invalid_date_is_storage_error() {
        let mut row = bare_row();
        row.kek_renewal = Some("next spring".to_string());
        let result: Result<Vehicle> = row.try_into();
        assert!(matches!(result, Err(FleetError::Storage(_))));
    }

    #[test]
    fn test_missing_created_at_is_storage_error() {
        let mut row = bare_row();
        row.created_at = None;
        let result: Result<Vehicle> = row.try_into();
        assert!(matches!(result, Err(FleetError::Storage(_))));
    }

    #[test]
    fn test_timestamp_round_trip_keeps_micros() {
        let parsed = parse_timestamp("2024-05-01T08:30:00.123456Z").unwrap();
        assert_eq!(format_timestamp(&parsed), "2024-05-01T08:30:00.123456Z");
    }

    #[test]
    fn test_formatted_timestamps_sort_chronologically() {
        let earlier = parse_timestamp("2024-05-01T08:30:00.000009Z").unwrap();
        let later = parse_timestamp("2024-05-01T08:30:00.000010Z").unwrap();
        assert!(format_timestamp(&earlier) < format_timestamp(&later));
    }

    #[test]
    fn test_sqlite_timestamp_is_accepted() {
        let parsed = parse_timestamp("2024-05-01 08:30:00").unwrap();
        assert_eq!(format_timestamp(&parsed), "2024-05-01T08:30:00.000000Z");
    }
}

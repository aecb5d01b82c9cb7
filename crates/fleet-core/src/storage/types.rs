//! Core data types for the storage layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Status assigned to a vehicle when none is supplied.
pub const DEFAULT_STATUS: &str = "Active";

/// Mileage assigned to a vehicle when none is supplied.
pub const DEFAULT_MILEAGE: i64 = 0;

/// A stored vehicle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Generated primary key, immutable after insert
    pub id: i64,

    /// Natural key, unique across the table
    pub license_plate: String,

    pub brand: String,

    pub model: String,

    pub year: Option<i32>,

    /// Free text, usually one of `catalog::vehicle_types()`
    pub vehicle_type: Option<String>,

    pub vin_number: Option<String>,

    pub mileage: i64,

    pub engine_cc: Option<i32>,

    pub fuel_type: Option<String>,

    pub color: Option<String>,

    pub notes: Option<String>,

    pub insurance_expiry: Option<NaiveDate>,

    /// Next periodic roadworthiness inspection
    pub kteo_next: Option<NaiveDate>,

    /// Next emissions-certificate renewal
    pub kek_renewal: Option<NaiveDate>,

    pub status: String,

    /// Serialized as 0/1 to match the persisted column.
    #[serde(with = "gps_flag")]
    pub has_gps: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Whether any column shown in the vehicle list contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        let year = self.year.map(|y| y.to_string()).unwrap_or_default();
        let mileage = self.mileage.to_string();
        let insurance = self
            .insurance_expiry
            .map(|d| d.to_string())
            .unwrap_or_default();
        let notes = self.notes.as_deref().unwrap_or("");

        [
            self.license_plate.as_str(),
            self.brand.as_str(),
            self.model.as_str(),
            year.as_str(),
            mileage.as_str(),
            insurance.as_str(),
            notes,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Input for `add` and `update`.
///
/// Every column except the three required ones is optional. Absent values
/// fall back to: `mileage` 0, `status` "Active", `has_gps` false, and NULL
/// for everything else. `update` applies the same defaults, so a caller that
/// wants to keep a value must supply it again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewVehicle {
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
    pub insurance_expiry: Option<NaiveDate>,
    pub kteo_next: Option<NaiveDate>,
    pub kek_renewal: Option<NaiveDate>,
    pub status: Option<String>,
    pub has_gps: Option<bool>,
}

impl NewVehicle {
    pub fn new(
        license_plate: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            license_plate: license_plate.into(),
            brand: brand.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    pub fn with_vin_number(mut self, vin: impl Into<String>) -> Self {
        self.vin_number = Some(vin.into());
        self
    }

    pub fn with_mileage(mut self, mileage: i64) -> Self {
        self.mileage = Some(mileage);
        self
    }

    pub fn with_engine_cc(mut self, engine_cc: i32) -> Self {
        self.engine_cc = Some(engine_cc);
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = Some(fuel_type.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_insurance_expiry(mut self, date: NaiveDate) -> Self {
        self.insurance_expiry = Some(date);
        self
    }

    pub fn with_kteo_next(mut self, date: NaiveDate) -> Self {
        self.kteo_next = Some(date);
        self
    }

    pub fn with_kek_renewal(mut self, date: NaiveDate) -> Self {
        self.kek_renewal = Some(date);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_gps(mut self, has_gps: bool) -> Self {
        self.has_gps = Some(has_gps);
        self
    }

    pub fn mileage_or_default(&self) -> i64 {
        self.mileage.unwrap_or(DEFAULT_MILEAGE)
    }

    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }

    pub fn has_gps_or_default(&self) -> bool {
        self.has_gps.unwrap_or(false)
    }
}

impl From<&Vehicle> for NewVehicle {
    /// Full-record input carrying every stored value, for edit flows.
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            license_plate: vehicle.license_plate.clone(),
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            vehicle_type: vehicle.vehicle_type.clone(),
            vin_number: vehicle.vin_number.clone(),
            mileage: Some(vehicle.mileage),
            engine_cc: vehicle.engine_cc,
            fuel_type: vehicle.fuel_type.clone(),
            color: vehicle.color.clone(),
            notes: vehicle.notes.clone(),
            insurance_expiry: vehicle.insurance_expiry,
            kteo_next: vehicle.kteo_next,
            kek_renewal: vehicle.kek_renewal,
            status: Some(vehicle.status.clone()),
            has_gps: Some(vehicle.has_gps),
        }
    }
}

mod gps_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Bool(bool),
            Int(i64),
        }

        Ok(match Flag::deserialize(deserializer)? {
            Flag::Bool(value) => value,
            Flag::Int(value) => value != 0,
        })
    }
}

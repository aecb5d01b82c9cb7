//! Field labels in the supported languages.
//!
//! Pretty output shows the translated text; plain output always uses the
//! stable snake_case key so scripts do not depend on the language setting.

use crate::preferences::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    LicensePlate,
    Brand,
    Model,
    Year,
    VehicleType,
    VinNumber,
    Mileage,
    EngineCc,
    FuelType,
    Color,
    Notes,
    InsuranceExpiry,
    KteoNext,
    KekRenewal,
    Status,
    HasGps,
    CreatedAt,
    UpdatedAt,
    Document,
    Path,
}

impl Field {
    /// Stable key, matching the JSON field name where one exists.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::LicensePlate => "license_plate",
            Field::Brand => "brand",
            Field::Model => "model",
            Field::Year => "year",
            Field::VehicleType => "vehicle_type",
            Field::VinNumber => "vin_number",
            Field::Mileage => "mileage",
            Field::EngineCc => "engine_cc",
            Field::FuelType => "fuel_type",
            Field::Color => "color",
            Field::Notes => "notes",
            Field::InsuranceExpiry => "insurance_expiry",
            Field::KteoNext => "kteo_next",
            Field::KekRenewal => "kek_renewal",
            Field::Status => "status",
            Field::HasGps => "has_gps",
            Field::CreatedAt => "created_at",
            Field::UpdatedAt => "updated_at",
            Field::Document => "document",
            Field::Path => "path",
        }
    }

    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.english(),
            Language::El => self.greek(),
        }
    }

    fn english(&self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::LicensePlate => "License plate",
            Field::Brand => "Brand",
            Field::Model => "Model",
            Field::Year => "Year",
            Field::VehicleType => "Vehicle type",
            Field::VinNumber => "VIN",
            Field::Mileage => "Mileage",
            Field::EngineCc => "Engine (cc)",
            Field::FuelType => "Fuel",
            Field::Color => "Color",
            Field::Notes => "Notes",
            Field::InsuranceExpiry => "Insurance expiry",
            Field::KteoNext => "Next KTEO",
            Field::KekRenewal => "KEK renewal",
            Field::Status => "Status",
            Field::HasGps => "GPS",
            Field::CreatedAt => "Created",
            Field::UpdatedAt => "Updated",
            Field::Document => "Document",
            Field::Path => "Path",
        }
    }

    fn greek(&self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::LicensePlate => "Πινακίδα",
            Field::Brand => "Μάρκα",
            Field::Model => "Μοντέλο",
            Field::Year => "Έτος",
            Field::VehicleType => "Τύπος οχήματος",
            Field::VinNumber => "Αριθμός πλαισίου",
            Field::Mileage => "Χιλιόμετρα",
            Field::EngineCc => "Κυβικά",
            Field::FuelType => "Καύσιμο",
            Field::Color => "Χρώμα",
            Field::Notes => "Σημειώσεις",
            Field::InsuranceExpiry => "Λήξη ασφάλειας",
            Field::KteoNext => "Επόμενο ΚΤΕΟ",
            Field::KekRenewal => "Ανανέωση ΚΕΚ",
            Field::Status => "Κατάσταση",
            Field::HasGps => "GPS",
            Field::CreatedAt => "Δημιουργία",
            Field::UpdatedAt => "Ενημέρωση",
            Field::Document => "Έγγραφο",
            Field::Path => "Διαδρομή",
        }
    }
}

/// "Yes"/"No" in the given language.
pub fn yes_no(value: bool, language: Language) -> &'static str {
    match (value, language) {
        (true, Language::En) => "Yes",
        (false, Language::En) => "No",
        (true, Language::El) => "Ναι",
        (false, Language::El) => "Όχι",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_snake_case() {
        for field in [Field::LicensePlate, Field::InsuranceExpiry, Field::HasGps] {
            let key = field.key();
            assert!(key.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn test_text_follows_language() {
        assert_eq!(Field::Brand.text(Language::En), "Brand");
        assert_eq!(Field::Brand.text(Language::El), "Μάρκα");
        assert_eq!(yes_no(true, Language::El), "Ναι");
    }
}

//! JSON output formatting for vehicles.

use std::path::PathBuf;

use serde::Serialize;

use fleet_core::documents::DocumentKind;
use fleet_core::Vehicle;

/// Convert a vehicle to JSON, optionally with its attached documents.
pub fn vehicle_json(
    vehicle: &Vehicle,
    documents: Option<&[(DocumentKind, PathBuf)]>,
) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(vehicle)?;
    if let (Some(docs), Some(object)) = (documents, value.as_object_mut()) {
        object.insert("documents".to_string(), documents_json(docs));
    }
    Ok(value)
}

/// Attached documents as a `{kind: path}` object.
pub fn documents_json(documents: &[(DocumentKind, PathBuf)]) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = documents
        .iter()
        .map(|(kind, path)| {
            (
                kind.as_str().to_string(),
                serde_json::Value::String(path.display().to_string()),
            )
        })
        .collect();
    serde_json::Value::Object(map)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn vehicle() -> Vehicle {
        let now = Utc::now();
        Vehicle {
            id: 1,
            license_plate: "XEP-4096".to_string(),
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: Some(2020),
            vehicle_type: None,
            vin_number: None,
            mileage: 0,
            engine_cc: None,
            fuel_type: None,
            color: None,
            notes: None,
            insurance_expiry: None,
            kteo_next: None,
            kek_renewal: None,
            status: "Active".to_string(),
            has_gps: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_vehicle_json_without_documents() {
        let value = vehicle_json(&vehicle(), None).unwrap();
        assert_eq!(value["id"], 1);
        assert!(value.get("documents").is_none());
    }

    #[test]
    fn test_vehicle_json_with_documents() {
        let docs = vec![(
            DocumentKind::Insurance,
            PathBuf::from("files/XEP_4096_INSURANCE.pdf"),
        )];
        let value = vehicle_json(&vehicle(), Some(docs.as_slice())).unwrap();
        assert_eq!(
            value["documents"]["insurance"],
            "files/XEP_4096_INSURANCE.pdf"
        );
    }
}

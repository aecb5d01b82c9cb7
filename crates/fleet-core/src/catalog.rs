//! Suggestion lists offered when entering vehicle details.
//!
//! Values outside these lists are still accepted; they are hints, not
//! constraints.

const VEHICLE_TYPES: &[&str] = &[
    "Passenger car",
    "Truck",
    "Motorcycle",
    "Bus",
    "Pickup",
    "SUV",
    "Van",
    "Minibus",
    "Agricultural",
    "Construction",
];

const FUEL_TYPES: &[&str] = &[
    "Petrol",
    "Diesel",
    "LPG",
    "CNG",
    "Electric",
    "Hybrid (petrol)",
    "Hybrid (diesel)",
    "Plug-in hybrid",
];

const COLORS: &[&str] = &[
    "White", "Black", "Grey", "Silver", "Red", "Blue", "Green", "Yellow", "Orange", "Brown",
    "Beige", "Gold", "Burgundy", "Other",
];

const BRANDS: &[&str] = &[
    // Cars, European
    "Abarth", "Alfa Romeo", "Aston Martin", "Audi", "Bentley", "BMW", "Bugatti", "Citroën",
    "Dacia", "Ferrari", "Fiat", "Jaguar", "Lancia", "Land Rover", "Lotus", "Maserati",
    "McLaren", "Mercedes-Benz", "Mini", "Opel", "Peugeot", "Porsche", "Renault", "Rolls-Royce",
    "Rover", "Saab", "Seat", "Skoda", "Smart", "Volkswagen", "Volvo",
    // Cars, American
    "Buick", "Cadillac", "Chevrolet", "Chrysler", "Dodge", "Ford", "GMC", "Hummer", "Jeep",
    "Lincoln", "Pontiac", "Ram", "Tesla",
    // Cars, Asian
    "Acura", "Daihatsu", "Datsun", "Honda", "Hyundai", "Infiniti", "Isuzu", "Kia", "Lexus",
    "Mazda", "Mitsubishi", "Nissan", "Subaru", "Suzuki", "Toyota", "BYD", "Chery",
    // Trucks
    "DAF", "Iveco", "MAN", "Scania", "Kenworth", "Mack", "Peterbilt", "Hino",
    // Motorcycles
    "Honda Motorcycles", "Kawasaki", "Suzuki Motorcycles", "Yamaha", "Aprilia", "Ducati",
    "Husqvarna", "KTM", "Piaggio", "Triumph", "Vespa", "SYM", "Harley-Davidson",
    // Buses and coaches
    "Irizar", "Setra", "Solaris", "Temsa", "Van Hool",
    // Agricultural and construction
    "Caterpillar", "JCB", "Deutz-Fahr", "Fendt", "John Deere",
];

/// Named suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    VehicleTypes,
    FuelTypes,
    Colors,
    Brands,
}

impl Catalog {
    pub const ALL: [Catalog; 4] = [
        Catalog::VehicleTypes,
        Catalog::FuelTypes,
        Catalog::Colors,
        Catalog::Brands,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Catalog::VehicleTypes => "vehicle-types",
            Catalog::FuelTypes => "fuel-types",
            Catalog::Colors => "colors",
            Catalog::Brands => "brands",
        }
    }

    pub fn values(&self) -> Vec<&'static str> {
        match self {
            Catalog::VehicleTypes => vehicle_types().to_vec(),
            Catalog::FuelTypes => fuel_types().to_vec(),
            Catalog::Colors => colors().to_vec(),
            Catalog::Brands => brands(),
        }
    }
}

pub fn vehicle_types() -> &'static [&'static str] {
    VEHICLE_TYPES
}

pub fn fuel_types() -> &'static [&'static str] {
    FUEL_TYPES
}

pub fn colors() -> &'static [&'static str] {
    COLORS
}

/// Known brands, sorted and without duplicates.
pub fn brands() -> Vec<&'static str> {
    let mut brands = BRANDS.to_vec();
    brands.sort_unstable();
    brands.dedup();
    brands
}

/// Whether `value` is a known suggestion in `catalog` (case-insensitive).
pub fn is_known(catalog: Catalog, value: &str) -> bool {
    let value = value.trim().to_lowercase();
    catalog
        .values()
        .iter()
        .any(|candidate| candidate.to_lowercase() == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brands_sorted_and_unique() {
        let brands = brands();
        let mut sorted = brands.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(brands, sorted);
        assert!(brands.contains(&"Toyota"));
    }

    #[test]
    fn test_catalog_names_are_distinct() {
        let names: Vec<_> = Catalog::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["vehicle-types", "fuel-types", "colors", "brands"]);
    }

    #[test]
    fn test_is_known_ignores_case() {
        assert!(is_known(Catalog::FuelTypes, "diesel"));
        assert!(is_known(Catalog::Brands, " mercedes-benz "));
        assert!(!is_known(Catalog::Colors, "Ultraviolet"));
    }

    #[test]
    fn test_lists_not_empty() {
        for catalog in Catalog::ALL {
            assert!(!catalog.values().is_empty(), "{} is empty", catalog.name());
        }
    }
}

//! Vehicle table definition and additive reconciliation.
//!
//! The table is created with the full current column set. Databases written
//! by older releases are brought forward by adding each missing column with
//! its default; existing columns and rows are never touched.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::Result;

/// Name of the single table owned by the store.
pub const TABLE: &str = "vehicles";

const CREATE_VEHICLES: &str = r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        license_plate TEXT UNIQUE NOT NULL,
        brand TEXT NOT NULL,
        model TEXT NOT NULL,
        year INTEGER,
        vehicle_type TEXT,
        vin_number TEXT,
        mileage INTEGER DEFAULT 0,
        engine_cc INTEGER,
        fuel_type TEXT,
        color TEXT,
        notes TEXT,
        insurance_expiry TEXT,
        kteo_next TEXT,
        kek_renewal TEXT,
        status TEXT DEFAULT 'Active',
        has_gps INTEGER DEFAULT 0,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// A column introduced after the first release of the table.
#[derive(Debug, Clone, Copy)]
pub struct AddedColumn {
    pub name: &'static str,
    /// Type and default, as written after the name in `ADD COLUMN`.
    pub definition: &'static str,
}

/// Columns added by later releases, in the order they were introduced.
pub const ADDED_COLUMNS: &[AddedColumn] = &[
    AddedColumn {
        name: "has_gps",
        definition: "INTEGER DEFAULT 0",
    },
    AddedColumn {
        name: "vehicle_type",
        definition: "TEXT",
    },
    AddedColumn {
        name: "vin_number",
        definition: "TEXT",
    },
    AddedColumn {
        name: "engine_cc",
        definition: "INTEGER",
    },
    AddedColumn {
        name: "notes",
        definition: "TEXT",
    },
    AddedColumn {
        name: "insurance_expiry",
        definition: "TEXT",
    },
    AddedColumn {
        name: "kteo_next",
        definition: "TEXT",
    },
    AddedColumn {
        name: "kek_renewal",
        definition: "TEXT",
    },
];

/// Create the table if needed and add any missing later-release columns.
///
/// Runs in one transaction and is safe to call on every open. Returns the
/// names of the columns that were added.
pub fn reconcile(conn: &mut Connection) -> Result<Vec<&'static str>> {
    let tx = conn.transaction()?;
    tx.execute_batch(CREATE_VEHICLES)?;

    let existing = column_names(&tx)?;
    let mut added = Vec::new();
    for column in ADDED_COLUMNS {
        if existing.iter().any(|name| name == column.name) {
            continue;
        }
        tx.execute_batch(&format!(
            "ALTER TABLE {} ADD COLUMN {} {}",
            TABLE, column.name, column.definition
        ))?;
        info!(column = column.name, "added missing column to vehicles table");
        added.push(column.name);
    }

    tx.commit()?;
    debug!(added = added.len(), "vehicle schema reconciled");
    Ok(added)
}

/// Column names of the vehicle table, in table order.
pub fn column_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", TABLE))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(names)
}

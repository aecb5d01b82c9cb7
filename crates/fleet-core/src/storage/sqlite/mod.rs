//! SQLite storage backend.
//!
//! The store holds one `rusqlite::Connection` for its whole lifetime and
//! reconciles the vehicle table on every open.

mod row;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, SubsecRound, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, warn};

use crate::error::{FleetError, Result};
use crate::storage::traits::VehicleStore;
use crate::storage::types::{NewVehicle, Vehicle};

use row::{format_date, format_timestamp, parse_timestamp, VehicleRow, COLS};

/// File name used when no path is configured.
pub const DEFAULT_DB_FILENAME: &str = "fleet_manager.db";

/// SQLite-backed vehicle store.
pub struct SqliteVehicleStore {
    path: Option<PathBuf>,
    conn: Option<Connection>,
}

impl SqliteVehicleStore {
    /// Open `DEFAULT_DB_FILENAME` in the working directory.
    pub fn open_default() -> Result<Self> {
        Self::open(Path::new(DEFAULT_DB_FILENAME))
    }

    /// Open a private in-memory store (used by tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, None)
    }

    fn from_connection(mut conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        schema::reconcile(&mut conn)?;
        Ok(Self {
            path,
            conn: Some(conn),
        })
    }

    /// Backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current column set of the vehicle table, in table order.
    pub fn column_names(&self) -> Result<Vec<String>> {
        schema::column_names(self.conn()?)
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn
            .as_ref()
            .ok_or_else(|| FleetError::Storage("store is closed".to_string()))
    }

    fn conn_mut(&mut self) -> Result<&mut Connection> {
        self.conn
            .as_mut()
            .ok_or_else(|| FleetError::Storage("store is closed".to_string()))
    }

    fn query_vehicles<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Vehicle>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, VehicleRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(Vehicle::try_from).collect()
    }

    fn query_vehicle<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Option<Vehicle>> {
        let conn = self.conn()?;
        let row = conn
            .query_row(sql, params, VehicleRow::from_row)
            .optional()?;
        row.map(Vehicle::try_from).transpose()
    }
}

/// Current time at the precision timestamps are stored with.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Next `updated_at` value: now, unless that would not move past `previous`.
fn next_updated_at(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match previous {
        Some(prev) if now <= prev => prev + Duration::microseconds(1),
        _ => now,
    }
}

impl VehicleStore for SqliteVehicleStore {
    fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening vehicle store");
        let conn = Connection::open(path)
            .map_err(|e| FleetError::Storage(format!("Cannot open {}: {}", path.display(), e)))?;
        Self::from_connection(conn, Some(path.to_path_buf()))
    }

    fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err((_conn, err)) = conn.close() {
                warn!(error = %err, "failed to close vehicle store cleanly");
            } else {
                debug!("vehicle store closed");
            }
        }
    }

    fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    fn add(&mut self, vehicle: &NewVehicle) -> Result<i64> {
        let conn = self.conn_mut()?;
        let timestamp = format_timestamp(&now());

        conn.execute(
            r#"
            INSERT INTO vehicles (
                license_plate, brand, model, year, vehicle_type, vin_number,
                mileage, engine_cc, fuel_type, color, notes,
                insurance_expiry, kteo_next, kek_renewal, status, has_gps,
                created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
            "#,
            params![
                vehicle.license_plate,
                vehicle.brand,
                vehicle.model,
                vehicle.year,
                vehicle.vehicle_type,
                vehicle.vin_number,
                vehicle.mileage_or_default(),
                vehicle.engine_cc,
                vehicle.fuel_type,
                vehicle.color,
                vehicle.notes,
                format_date(vehicle.insurance_expiry),
                format_date(vehicle.kteo_next),
                format_date(vehicle.kek_renewal),
                vehicle.status_or_default(),
                i64::from(vehicle.has_gps_or_default()),
                timestamp,
                timestamp,
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, plate = %vehicle.license_plate, "vehicle added");
        Ok(id)
    }

    fn update(&mut self, id: i64, vehicle: &NewVehicle) -> Result<()> {
        let conn = self.conn_mut()?;
        let tx = conn.transaction()?;

        let previous: Option<Option<String>> = tx
            .query_row(
                "SELECT updated_at FROM vehicles WHERE id = ?1",
                [id],
                |row| row.get(0),
            )
            .optional()?;
        let previous = match previous {
            Some(value) => value.as_deref().map(parse_timestamp).transpose()?,
            None => return Err(FleetError::NotFound(format!("Vehicle {} not found", id))),
        };
        let updated_at = format_timestamp(&next_updated_at(previous, now()));

        tx.execute(
            r#"
            UPDATE vehicles SET
                license_plate = ?1,
                brand = ?2,
                model = ?3,
                year = ?4,
                vehicle_type = ?5,
                vin_number = ?6,
                mileage = ?7,
                engine_cc = ?8,
                fuel_type = ?9,
                color = ?10,
                notes = ?11,
                insurance_expiry = ?12,
                kteo_next = ?13,
                kek_renewal = ?14,
                status = ?15,
                has_gps = ?16,
                updated_at = ?17
            WHERE id = ?18
            "#,
            params![
                vehicle.license_plate,
                vehicle.brand,
                vehicle.model,
                vehicle.year,
                vehicle.vehicle_type,
                vehicle.vin_number,
                vehicle.mileage_or_default(),
                vehicle.engine_cc,
                vehicle.fuel_type,
                vehicle.color,
                vehicle.notes,
                format_date(vehicle.insurance_expiry),
                format_date(vehicle.kteo_next),
                format_date(vehicle.kek_renewal),
                vehicle.status_or_default(),
                i64::from(vehicle.has_gps_or_default()),
                updated_at,
                id,
            ],
        )?;

        tx.commit()?;
        debug!(id, "vehicle updated");
        Ok(())
    }

    fn delete(&mut self, license_plate: &str) -> Result<bool> {
        let conn = self.conn_mut()?;
        // Dropping the transaction on an early return rolls it back.
        let tx = conn.transaction()?;
        let affected = tx
            .execute(
                "DELETE FROM vehicles WHERE license_plate = ?1",
                [license_plate],
            )
            .map_err(|e| FleetError::Storage(format!("Delete failed: {}", e)))?;
        tx.commit()?;

        debug!(plate = license_plate, affected, "vehicle delete");
        Ok(affected > 0)
    }

    fn get_all(&self) -> Result<Vec<Vehicle>> {
        // Timestamps are stored as RFC 3339 or as `CURRENT_TIMESTAMP` text,
        // which do not sort together as strings.
        self.query_vehicles(
            &format!(
                "SELECT {} FROM vehicles \
                 ORDER BY julianday(created_at) DESC, created_at DESC, id DESC",
                COLS
            ),
            [],
        )
    }

    fn get_by_license_plate(&self, license_plate: &str) -> Result<Option<Vehicle>> {
        self.query_vehicle(
            &format!("SELECT {} FROM vehicles WHERE license_plate = ?1", COLS),
            [license_plate],
        )
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Vehicle>> {
        self.query_vehicle(&format!("SELECT {} FROM vehicles WHERE id = ?1", COLS), [id])
    }

    fn get_all_with_gps(&self) -> Result<Vec<Vehicle>> {
        self.query_vehicles(
            &format!(
                "SELECT {} FROM vehicles WHERE has_gps = 1 ORDER BY brand, model, id",
                COLS
            ),
            [],
        )
    }

    fn search(&self, query: &str) -> Result<Vec<Vehicle>> {
        let mut vehicles = self.get_all()?;
        let needle = query.trim().to_lowercase();
        if !needle.is_empty() {
            vehicles.retain(|vehicle| vehicle.matches_query(&needle));
        }
        Ok(vehicles)
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM vehicles", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|_| FleetError::Storage("Invalid row count".to_string()))
    }
}

impl Drop for SqliteVehicleStore {
    fn drop(&mut self) {
        self.close();
    }
}

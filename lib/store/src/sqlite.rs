use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};

use bcodes_core::{new_id, now_rfc3339, ServiceError};

use crate::model::BuildingCode;
use crate::traits::RecordStore;

/// SQL DDL to initialize the building-code table.
///
/// The full JSON document lives in the `data` TEXT column, with scalar
/// columns extracted for ordering and inspection.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS building_codes (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        building_name TEXT,
        code TEXT,
        created_at TEXT,
        updated_at TEXT
    )",
    "CREATE INDEX IF NOT EXISTS idx_bc_created ON building_codes(created_at)",
];

/// SqliteStore is a RecordStore implementation backed by rusqlite
/// (bundled SQLite).
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self, ServiceError> {
        let conn = Connection::open(path)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        // Enable WAL mode for better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        Self::with_conn(conn)
    }

    /// Create an in-memory database (useful for tests).
    pub fn open_in_memory() -> Result<Self, ServiceError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Self::with_conn(conn)
    }

    fn with_conn(conn: Connection) -> Result<Self, ServiceError> {
        for stmt in SCHEMA {
            conn.execute(stmt, [])
                .map_err(|e| ServiceError::Storage(format!("schema init failed: {}", e)))?;
        }
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, ServiceError> {
        self.conn
            .lock()
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }
}

fn parse_record(data: &str) -> Result<BuildingCode, ServiceError> {
    serde_json::from_str(data).map_err(|e| ServiceError::Internal(e.to_string()))
}

impl RecordStore for SqliteStore {
    fn list(&self) -> Result<Vec<BuildingCode>, ServiceError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT data FROM building_codes
                 ORDER BY created_at DESC, rowid DESC",
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            let data = row.map_err(|e| ServiceError::Storage(e.to_string()))?;
            records.push(parse_record(&data)?);
        }
        Ok(records)
    }

    fn get(&self, id: &str) -> Result<BuildingCode, ServiceError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT data FROM building_codes WHERE id = ?1")
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut rows = stmt
            .query_map(params![id], |row| row.get::<_, String>(0))
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        match rows.next() {
            Some(row) => {
                let data = row.map_err(|e| ServiceError::Storage(e.to_string()))?;
                parse_record(&data)
            }
            None => Err(ServiceError::NotFound(format!(
                "building code '{}' not found",
                id
            ))),
        }
    }

    fn create(&self, building_name: &str, code: &str) -> Result<BuildingCode, ServiceError> {
        if building_name.trim().is_empty() {
            return Err(ServiceError::Validation("buildingName is required".into()));
        }
        if code.trim().is_empty() {
            return Err(ServiceError::Validation("code is required".into()));
        }

        let now = now_rfc3339();
        let record = BuildingCode {
            id: new_id(),
            building_name: building_name.to_string(),
            code: code.to_string(),
            created_at: now.clone(),
            updated_at: now.clone(),
        };
        let json = serde_json::to_string(&record)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO building_codes
                (id, data, building_name, code, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![record.id, json, record.building_name, record.code, now, now],
        )
        .map_err(|e| ServiceError::Storage(e.to_string()))?;

        Ok(record)
    }

    fn update(
        &self,
        id: &str,
        building_name: &str,
        code: &str,
    ) -> Result<BuildingCode, ServiceError> {
        let current = self.get(id)?;

        let now = now_rfc3339();
        let record = BuildingCode {
            id: current.id,
            building_name: building_name.to_string(),
            code: code.to_string(),
            created_at: current.created_at,
            updated_at: now.clone(),
        };
        let json = serde_json::to_string(&record)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let conn = self.lock()?;
        let affected = conn
            .execute(
                "UPDATE building_codes
                 SET data = ?1, building_name = ?2, code = ?3, updated_at = ?4
                 WHERE id = ?5",
                params![json, record.building_name, record.code, now, id],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "building code '{}' not found",
                id
            )));
        }
        Ok(record)
    }

    fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let conn = self.lock()?;
        let affected = conn
            .execute("DELETE FROM building_codes WHERE id = ?1", params![id])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "building code '{}' not found",
                id
            )));
        }
        Ok(())
    }
}

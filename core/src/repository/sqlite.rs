//! SQLite storage implementation

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::{debug, warn};

use super::schema;
use super::traits::AttendanceRepository;
use crate::error::Result;
use crate::model::counters::{CounterKind, Counters};
use crate::model::day::Day;
use crate::model::AttendanceState;

/// SQLite-backed mirror of the schedule and both counters
pub struct SqliteAttendanceRepository {
    conn: Connection,
}

impl SqliteAttendanceRepository {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize_schema()?;
        debug!("Opened attendance database at {}", path.display());
        Ok(repo)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize_schema()?;
        Ok(repo)
    }

    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    fn counter_table(kind: CounterKind) -> (&'static str, &'static str) {
        match kind {
            CounterKind::Absences => (schema::ABSENCES_TABLE, "absences"),
            CounterKind::Cancellations => (schema::CANCELLED_TABLE, "cancelled"),
        }
    }

    fn load_schedule(&self, state: &mut AttendanceState) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare("SELECT day, class_name FROM schedule ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, Option<String>>(0)?,
                row.get::<_, Option<String>>(1)?,
            ))
        })?;

        for row in rows {
            let (Some(day), Some(class_name)) = row? else {
                warn!("Skipping schedule row with missing day or class name");
                continue;
            };
            match day.parse::<Day>() {
                Ok(day) => state.schedule.add(day, class_name),
                Err(e) => warn!("Skipping schedule row for '{}': {}", class_name, e),
            }
        }
        Ok(())
    }

    // Later rows overwrite earlier ones, so a table holding one row per
    // historical marking still loads its latest value.
    fn load_counters(&self, kind: CounterKind, counters: &mut Counters) -> Result<()> {
        let (table, column) = Self::counter_table(kind);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT class_name, {column} FROM {table} ORDER BY rowid"
        ))?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, Option<String>>(0)?,
                row.get::<_, Option<i64>>(1)?,
            ))
        })?;

        for row in rows {
            let (Some(class_name), value) = row? else {
                continue;
            };
            match u32::try_from(value.unwrap_or(0)) {
                Ok(value) => counters.set(class_name, value),
                Err(_) => warn!(
                    "Skipping invalid {} value {:?} for '{}'",
                    kind.label(),
                    value,
                    class_name
                ),
            }
        }
        Ok(())
    }
}

impl AttendanceRepository for SqliteAttendanceRepository {
    fn load(&self) -> Result<AttendanceState> {
        let mut state = AttendanceState::default();
        self.load_schedule(&mut state)?;
        self.load_counters(CounterKind::Absences, &mut state.absences)?;
        self.load_counters(CounterKind::Cancellations, &mut state.cancellations)?;
        Ok(state)
    }

    fn insert_classes(&mut self, entries: &[(Day, String)]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO schedule (day, class_name) VALUES (?1, ?2)")?;
            let mut seed = tx.prepare(
                "INSERT INTO absences (class_name, absences) SELECT ?1, 0
                 WHERE NOT EXISTS (SELECT 1 FROM absences WHERE class_name = ?1)",
            )?;
            for (day, class_name) in entries {
                stmt.execute(params![day.as_str(), class_name])?;
                seed.execute(params![class_name])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn store_counters(&mut self, kind: CounterKind, values: &[(String, u32)]) -> Result<()> {
        let (table, column) = Self::counter_table(kind);
        let tx = self.conn.transaction()?;
        {
            let mut delete = tx.prepare(&format!("DELETE FROM {table} WHERE class_name = ?1"))?;
            let mut insert = tx.prepare(&format!(
                "INSERT INTO {table} (class_name, {column}) VALUES (?1, ?2)"
            ))?;
            for (class_name, value) in values {
                delete.execute(params![class_name])?;
                insert.execute(params![class_name, value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn clear_all(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        for table in [
            schema::SCHEDULE_TABLE,
            schema::ABSENCES_TABLE,
            schema::CANCELLED_TABLE,
        ] {
            tx.execute(&format!("DELETE FROM {table}"), [])?;
        }
        tx.commit()?;
        Ok(())
    }
}

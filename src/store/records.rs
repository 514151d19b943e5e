use rusqlite::{Connection, params};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum StoreError {
    Sql(rusqlite::Error),
    NotFound { id: i64 },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sql(err) => write!(f, "sqlite: {err}"),
            Self::NotFound { id } => write!(f, "no record with id {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sql(value)
    }
}

/// A row of the record table.
///
/// Serializes with the `id` rendered as a JSON string, which is the
/// all-columns-as-text shape GET clients receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(serialize_with = "id_as_text")]
    pub id: i64,
    pub name: String,
}

fn id_as_text<S>(id: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(id)
}

/// Handle to the record table.
///
/// Holds only the database path: every operation opens its own
/// connection and drops it on return, so each call is a single
/// independent statement with no state shared between requests.
#[derive(Debug, Clone)]
pub struct RecordStore {
    db_path: PathBuf,
}

impl RecordStore {
    /// Opens the database and creates the record table if it does not
    /// exist yet. Must succeed before the listener starts accepting.
    pub fn init(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            db_path: db_path.as_ref().to_path_buf(),
        };

        let conn = store.connect()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS test (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               name TEXT NOT NULL
             );",
        )?;

        Ok(store)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.db_path)?)
    }

    /// Returns every record in the table, in the engine's natural order.
    pub fn list(&self) -> Result<Vec<Record>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id, name FROM test")?;
        let rows = stmt.query_map([], |row| {
            Ok(Record {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Appends a record with a store-assigned id.
    pub fn insert(&self, name: &str) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute("INSERT INTO test (name) VALUES (?1)", params![name])?;
        Ok(())
    }

    /// Overwrites the name of the record matching `id`.
    pub fn update(&self, id: i64, name: &str) -> Result<(), StoreError> {
        let conn = self.connect()?;
        let affected = conn.execute(
            "UPDATE test SET name = ?1 WHERE id = ?2",
            params![name, id],
        )?;

        if affected == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    /// Removes the record matching `id`.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.connect()?;
        let affected = conn.execute("DELETE FROM test WHERE id = ?1", params![id])?;

        if affected == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}

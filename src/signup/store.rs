//! SQLite-backed user store.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use crate::error::Error;

/// Applied on every open; `IF NOT EXISTS` keeps it idempotent.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL
);";

/// A signed-up user: an identifier plus a display name. Created once,
/// read back by id, never updated or deleted by the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// The single-table persistence layer behind the signup app.
///
/// One connection behind a `Mutex`; every operation is a single short
/// statement, so contention is not a concern at this scale.
pub struct UserStore {
    conn: Mutex<Connection>,
}

impl UserStore {
    /// Opens (creating if needed) the database at `db_path` and applies the
    /// schema.
    pub fn open(db_path: &Path) -> Result<Self, Error> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let conn = Connection::open(db_path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// An isolated in-memory store. For tests.
    pub fn open_in_memory() -> Result<Self, Error> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Inserts a user, returning the assigned id.
    pub fn insert(&self, username: &str) -> Result<i64, Error> {
        let conn = self.conn.lock().unwrap();
        conn.execute("INSERT INTO users(username) VALUES (?1)", params![username])?;
        let id = conn.last_insert_rowid();
        debug!(id, username, "user inserted");
        Ok(id)
    }

    /// Looks a user up by id.
    pub fn get(&self, id: i64) -> Result<Option<User>, Error> {
        let conn = self.conn.lock().unwrap();
        debug!(id, "user lookup");
        let user = conn
            .query_row(
                "SELECT id, username FROM users WHERE id = ?1",
                params![id],
                |row| Ok(User { id: row.get(0)?, username: row.get(1)? }),
            )
            .optional()?;
        Ok(user)
    }
}

//! SQLite-backed key/value store.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::KeyValueStore;
use chrono::{DateTime, Local};
use rusqlite::{OptionalExtension, params};
use std::fs;
use std::path::Path;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (or create) the store at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str, at: DateTime<Local>) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, at.to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    fn audit(
        &self,
        at: DateTime<Local>,
        operation: &str,
        target: &str,
        message: &str,
    ) -> AppResult<()> {
        ttlog(&self.pool.conn, at, operation, target, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::log::load_log;
    use chrono::TimeZone;

    fn pinned() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 17, 10, 0, 0).unwrap()
    }

    #[test]
    fn set_get_remove() {
        let mut store = SqliteStore::in_memory().unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "one", pinned()).unwrap();
        store.set("k", "two", pinned()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn audit_lands_in_log_table() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .audit(pinned(), "start", "Alice", "Break started")
            .unwrap();

        let entries = load_log(store.conn()).unwrap();
        let last = entries.last().unwrap();
        assert_eq!(last.operation, "start");
        assert_eq!(last.target, "Alice");
        assert_eq!(last.date, pinned().to_rfc3339());
    }

    #[test]
    fn writes_are_stamped_with_the_given_instant() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.set("k", "v", pinned()).unwrap();

        let stamp: String = store
            .conn()
            .query_row("SELECT updated_at FROM kv WHERE key = 'k'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(stamp, pinned().to_rfc3339());
    }
}

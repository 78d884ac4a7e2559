//! Key/value storage behind the break collection.

pub mod repository;

pub use repository::{BreakRepository, RECORDS_KEY};

use crate::errors::AppResult;
use chrono::{DateTime, Local};
use std::collections::HashMap;

/// Minimal key/value storage used to persist the break collection.
///
/// Writes carry the instant they happen at, taken from the caller's clock.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str, at: DateTime<Local>) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Append an entry to the store's audit trail, if it keeps one.
    fn audit(
        &self,
        _at: DateTime<Local>,
        _operation: &str,
        _target: &str,
        _message: &str,
    ) -> AppResult<()> {
        Ok(())
    }
}

/// Volatile store, for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str, _at: DateTime<Local>) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

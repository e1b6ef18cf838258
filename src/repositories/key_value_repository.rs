// src/repositories/key_value_repository.rs
//
// Persisted slots: one string value per fixed key, always overwritten whole.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rusqlite::{params, OptionalExtension};

use crate::db::ConnectionPool;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait KeyValueRepository: Send + Sync {
    /// Previously written value, or `None` if the slot was never written
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the slot's value in full
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

pub struct SqliteKeyValueRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueRepository for SqliteKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))",
            params![key, value],
        )?;

        Ok(())
    }
}

/// Process-local slots, lost on exit
#[derive(Default)]
pub struct InMemoryKeyValueRepository {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueRepository for InMemoryKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| AppError::Other("Key-value slots lock poisoned".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| AppError::Other("Key-value slots lock poisoned".to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool_at, get_connection, initialize_database};

    fn sqlite_repo(dir: &tempfile::TempDir) -> SqliteKeyValueRepository {
        let pool = create_connection_pool_at(&dir.path().join("kv.db")).unwrap();
        initialize_database(&get_connection(&pool).unwrap()).unwrap();
        SqliteKeyValueRepository::new(Arc::new(pool))
    }

    #[test]
    fn test_sqlite_absent_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = sqlite_repo(&dir);
        assert_eq!(repo.get("livros").unwrap(), None);
    }

    #[test]
    fn test_sqlite_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let repo = sqlite_repo(&dir);

        repo.set("livros", "[1,2,3]").unwrap();
        repo.set("livros", "[]").unwrap();

        assert_eq!(repo.get("livros").unwrap().as_deref(), Some("[]"));
        assert_eq!(repo.get("other").unwrap(), None);
    }

    #[test]
    fn test_sqlite_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        sqlite_repo(&dir).set("livros", "[\"kept\"]").unwrap();

        let reopened = sqlite_repo(&dir);
        assert_eq!(reopened.get("livros").unwrap().as_deref(), Some("[\"kept\"]"));
    }

    #[test]
    fn test_in_memory_set_and_get() {
        let repo = InMemoryKeyValueRepository::new();
        assert_eq!(repo.get("livros").unwrap(), None);

        repo.set("livros", "[]").unwrap();
        assert_eq!(repo.get("livros").unwrap().as_deref(), Some("[]"));
    }
}

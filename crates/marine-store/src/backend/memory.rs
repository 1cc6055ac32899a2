//! In-memory implementation of DocumentStore

use parking_lot::Mutex;

use marine_core::traits::{DocumentStore, RepoResult};
use marine_core::Database;

/// Keeps the last saved document in memory; nothing touches disk
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Database>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document
    pub fn with_document(database: Database) -> Self {
        Self {
            document: Mutex::new(database),
            saves: Mutex::new(0),
        }
    }

    /// Copy of the most recently saved document
    pub fn snapshot(&self) -> Database {
        self.document.lock().clone()
    }

    /// Number of completed saves
    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> RepoResult<Database> {
        Ok(self.snapshot())
    }

    fn save(&self, database: &Database) -> RepoResult<()> {
        *self.document.lock() = database.clone();
        *self.saves.lock() += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

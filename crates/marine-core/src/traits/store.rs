//! Document store port - the narrow persistence interface
//!
//! The whole dataset is a single document: it is read once at startup and
//! overwritten in full after every mutation. Keeping the port this small lets
//! a transactional backend replace the JSON file without touching services.

use crate::entities::Database;
use crate::error::DomainError;

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

pub trait DocumentStore: Send + Sync {
    /// Read the persisted document, creating an empty one if none exists
    fn load(&self) -> RepoResult<Database>;

    /// Overwrite the persisted document with `database`
    fn save(&self, database: &Database) -> RepoResult<()>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

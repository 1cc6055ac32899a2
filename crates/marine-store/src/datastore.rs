//! Datastore - owner of the live document
//!
//! Loaded once at startup. Reads share the lock; every mutation holds the
//! exclusive lock across the in-memory change and the full-document save, so
//! two writes never interleave on disk. `write` blocks on file I/O; async
//! callers run it on the blocking pool.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{error, info};

use marine_core::traits::{DocumentStore, RepoResult};
use marine_core::{Database, DomainError};

pub struct Datastore {
    state: RwLock<Database>,
    backend: Arc<dyn DocumentStore>,
}

impl Datastore {
    /// Load the document from `backend` and take ownership of it
    pub fn open(backend: Arc<dyn DocumentStore>) -> RepoResult<Self> {
        let database = backend.load()?;
        info!(
            location = %backend.describe(),
            listings = database.listings.len(),
            messages = database.messages.len(),
            comments = database.comments.len(),
            follows = database.follows.len(),
            "Datastore loaded"
        );
        Ok(Self {
            state: RwLock::new(database),
            backend,
        })
    }

    /// Run `f` against a consistent view of the document
    pub fn read<R>(&self, f: impl FnOnce(&Database) -> R) -> R {
        f(&self.state.read())
    }

    /// Apply `f` and persist the result.
    ///
    /// `f` works on a copy; the copy replaces the live document only after a
    /// successful save. When `f` fails nothing is written and the live
    /// document is unchanged.
    pub fn write<R, E>(&self, f: impl FnOnce(&mut Database) -> Result<R, E>) -> Result<R, E>
    where
        E: From<DomainError>,
    {
        let mut guard = self.state.write();
        let mut draft = guard.clone();
        let output = f(&mut draft)?;

        if let Err(e) = self.backend.save(&draft) {
            error!(error = %e, location = %self.backend.describe(), "Failed to persist document");
            return Err(e.into());
        }

        *guard = draft;
        Ok(output)
    }

    pub fn location(&self) -> String {
        self.backend.describe()
    }
}

impl std::fmt::Debug for Datastore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Datastore")
            .field("location", &self.backend.describe())
            .finish_non_exhaustive()
    }
}

//! JSON file implementation of DocumentStore

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use marine_core::traits::{DocumentStore, RepoResult};
use marine_core::Database;

use crate::error::{map_encode_error, map_io_error};

/// Single JSON document on local disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> RepoResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| map_io_error(parent, &e))
            }
            _ => Ok(()),
        }
    }

    fn write_document(&self, database: &Database) -> RepoResult<()> {
        let mut body = serde_json::to_string_pretty(database).map_err(|e| map_encode_error(&e))?;
        body.push('\n');
        fs::write(&self.path, body).map_err(|e| map_io_error(&self.path, &e))
    }
}

impl DocumentStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> RepoResult<Database> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Data file missing, creating an empty document");
                self.ensure_parent()?;
                let empty = Database::default();
                self.write_document(&empty)?;
                return Ok(empty);
            }
            Err(e) => return Err(map_io_error(&self.path, &e)),
        };

        match serde_json::from_str::<Database>(&raw) {
            Ok(database) => Ok(database),
            Err(e) => {
                // Replaced on the next save
                warn!(error = %e, "Data file is not a valid document, starting empty");
                Ok(Database::default())
            }
        }
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, database: &Database) -> RepoResult<()> {
        self.ensure_parent()?;
        self.write_document(database)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marine_core::{Comment, Listing, Segment};

    #[test]
    fn test_missing_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("db.json");
        let store = JsonFileStore::new(&path);

        let db = store.load().unwrap();
        assert_eq!(db, Database::default());
        assert!(path.exists());

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        for key in ["listings", "messages", "comments", "follows"] {
            assert_eq!(written[key], serde_json::json!([]), "{key}");
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("db.json"));

        let mut db = Database::default();
        let listing = Listing::new("Aurora 48".to_string());
        let id = listing.id.clone();
        db.listings.push(listing);
        db.comments
            .push(Comment::new(id.clone(), "Ana".to_string(), "Nice".to_string()));
        store.save(&db).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, db);
        assert_eq!(loaded.listing_title(&id), Some("Aurora 48"));
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), Database::default());
    }

    #[test]
    fn test_legacy_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(
            &path,
            r#"{
                "listings": [{
                    "id": "lst_legacy",
                    "title": "Old refit",
                    "segment": "bakim",
                    "year": "2009",
                    "createdAt": "2023-04-01T10:00:00.000Z",
                    "updatedAt": "2023-04-02T10:00:00.000Z"
                }],
                "messages": {}
            }"#,
        )
        .unwrap();

        let db = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(db.listings.len(), 1);
        let listing = &db.listings[0];
        assert_eq!(listing.segment, Segment::Maintenance);
        assert_eq!(listing.year, Some(2009));
        assert_eq!(listing.stats.messages, 0);
        assert!(listing.highlights.is_empty());
        assert!(db.messages.is_empty());
    }

    #[test]
    fn test_bad_record_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(
            &path,
            r#"{
                "listings": [
                    {
                        "id": "lst_good",
                        "title": "Aurora 48",
                        "createdAt": "2024-01-01T00:00:00.000Z",
                        "updatedAt": "2024-01-01T00:00:00.000Z"
                    },
                    {"id": "lst_bad", "title": "Legacy without timestamps"}
                ],
                "messages": [],
                "comments": [],
                "follows": []
            }"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&path);
        let db = store.load().unwrap();
        assert_eq!(db.listings.len(), 1);
        assert_eq!(db.listings[0].title, "Aurora 48");

        store.save(&db).unwrap();
        assert_eq!(store.load().unwrap().listings.len(), 1);
    }
}

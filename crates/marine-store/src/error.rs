//! Error handling utilities for store backends

use std::path::Path;

use marine_core::DomainError;

/// Wrap an I/O failure with the file it concerns
pub fn map_io_error(path: &Path, e: &std::io::Error) -> DomainError {
    DomainError::StorageError(format!("{}: {e}", path.display()))
}

/// Serialization of the in-memory document failed
pub fn map_encode_error(e: &serde_json::Error) -> DomainError {
    DomainError::StorageError(format!("failed to encode document: {e}"))
}

//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Listing not found: {0}")]
    ListingNotFound(RecordId),

    #[error("Follow record not found")]
    FollowNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Access denied: request is not whitelisted")]
    NotWhitelisted,

    #[error("Key generation is disabled for this address")]
    KeygenAddressDenied,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ListingNotFound(_) => "UNKNOWN_LISTING",
            Self::FollowNotFound => "UNKNOWN_FOLLOW",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",

            // Authorization
            Self::NotWhitelisted => "NOT_WHITELISTED",
            Self::KeygenAddressDenied => "KEYGEN_ADDRESS_DENIED",

            // Infrastructure
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListingNotFound(_) | Self::FollowNotFound)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::MissingField(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotWhitelisted | Self::KeygenAddressDenied)
    }
}

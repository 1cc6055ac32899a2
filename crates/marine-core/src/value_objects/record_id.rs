//! Record identifiers
//!
//! Every stored record carries an opaque string id made of a kind prefix and
//! a random UUID, e.g. `lst_6f1c...`. Ids are never parsed back; the prefix
//! only makes them readable in the data file and in logs.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of record an id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Listing,
    Message,
    Comment,
    Follow,
}

impl RecordKind {
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Listing => "lst",
            Self::Message => "msg",
            Self::Comment => "cmt",
            Self::Follow => "fol",
        }
    }
}

/// Opaque record id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh id for the given record kind
    pub fn generate(kind: RecordKind) -> Self {
        Self(format!("{}_{}", kind.prefix(), Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl PartialEq<str> for RecordId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RecordId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

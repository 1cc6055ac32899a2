//! # marine-store
//!
//! Persistence layer implementing the `DocumentStore` port from `marine-core`.
//!
//! ## Overview
//!
//! - [`JsonFileStore`]: one pretty-printed JSON file, overwritten in full
//! - [`MemoryStore`]: keeps the document in memory, for tests and dry runs
//! - [`Datastore`]: owns the live document and persists it after each mutation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use marine_store::{Datastore, JsonFileStore};
//!
//! let store = Datastore::open(Arc::new(JsonFileStore::new("data/db.json")))?;
//! let count = store.read(|db| db.listings.len());
//! ```

pub mod backend;
mod datastore;
mod error;

pub use backend::{JsonFileStore, MemoryStore};
pub use datastore::Datastore;

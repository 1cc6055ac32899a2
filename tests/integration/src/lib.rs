//! Integration test utilities for the marine listings API
//!
//! This crate provides helpers for running end-to-end tests against a real
//! server bound to a loopback port and backed by a temporary data file.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

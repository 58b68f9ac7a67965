//! Core Layer Tests
//!
//! Tests for the stepmap-core crate which provides:
//! - Step / Action - the typed step vocabulary
//! - canonicalize - the merge key of a step
//! - TestSuite - the persisted `{ "data": [...] }` document

#[path = "../common/mod.rs"]
mod common;

mod canonical_keys;
mod error_handling;
mod suite_format;

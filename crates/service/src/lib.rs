//! Core collection-manager layer for the shelter API.
//! - Owns the in-memory dog and hub collections and their CRUD semantics.
//! - Assigns short ids, keeps merge-vs-replace update behavior explicit.
//! - Leaves HTTP concerns to the `server` crate.

pub mod collections;
pub mod errors;
pub mod ids;
pub mod record;
pub mod storage;

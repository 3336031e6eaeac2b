//! # Storage Module
//!
//! Handles all data persistence for CowManager.
//!
//! Everything is kept in a small key-value store: each fixed key holds one
//! JSON document, either an array of records or the current-session object.
//! Writing a key replaces its whole value, so every write is a single atomic
//! replacement and reads always see the last write.
//!
//! ## Layout
//!
//! - **traits**: the `RecordStore` key-value contract and the per-entity
//!   storage traits the domain layer talks to
//! - **json_store**: file-backed store, one `<key>.json` per key
//! - **memory_store**: in-process store for tests and embedding
//! - **connection**: typed JSON access on top of a `RecordStore`, plus the
//!   write lock that keeps read-modify-write sequences atomic
//! - **repositories**: farmer, session, cow and insemination repositories
//!
//! Referential integrity lives here too: deleting a cow removes its
//! insemination records in the same locked write sequence.

pub mod connection;
pub mod json_store;
pub mod memory_store;
pub mod repositories;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use connection::{keys, Collection, StoreConnection};
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use repositories::{CowRepository, FarmerRepository, InseminationRepository, SessionRepository};
pub use traits::{CowStorage, FarmerStorage, InseminationStorage, RecordStore, SessionStorage};

//! # Storage Traits
//!
//! This module defines the storage abstractions used by the domain layer.
//! `RecordStore` is the raw key-value contract; the entity traits sit on top
//! of it and always scope reads by farmer.

use anyhow::Result;

use crate::domain::models::cow::Cow;
use crate::domain::models::farmer::Farmer;
use crate::domain::models::insemination::InseminationRecord;

/// Raw key-value persistence. Values are opaque JSON text.
pub trait RecordStore: Send + Sync {
    /// Get the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Returns true if it existed.
    fn delete(&self, key: &str) -> Result<bool>;
}

/// Trait defining the interface for farmer profile storage
pub trait FarmerStorage: Send + Sync {
    /// List every registered farmer
    fn list_farmers(&self) -> Result<Vec<Farmer>>;

    fn get_farmer(&self, farmer_id: &str) -> Result<Option<Farmer>>;

    /// Find the farmer registered with a mobile number
    fn find_by_mobile(&self, mobile: &str) -> Result<Option<Farmer>>;

    /// Store a new farmer profile
    fn store_farmer(&self, farmer: &Farmer) -> Result<()>;
}

/// Trait defining the interface for the current-session pointer
pub trait SessionStorage: Send + Sync {
    fn get_current_farmer(&self) -> Result<Option<Farmer>>;

    fn set_current_farmer(&self, farmer: &Farmer) -> Result<()>;

    /// Returns true if a session was cleared
    fn clear_current_farmer(&self) -> Result<bool>;
}

/// Trait defining the interface for cow storage
pub trait CowStorage: Send + Sync {
    /// List a farmer's cows in insertion order
    fn list_cows(&self, farmer_id: &str) -> Result<Vec<Cow>>;

    fn get_cow(&self, farmer_id: &str, cow_id: &str) -> Result<Option<Cow>>;

    /// Insert a new cow or replace the cow with the same ID
    fn upsert_cow(&self, cow: &Cow) -> Result<()>;

    /// Delete a cow and every insemination record referencing it.
    /// Returns None if the cow does not exist for this farmer, otherwise the
    /// number of insemination records removed with it.
    fn delete_cow(&self, farmer_id: &str, cow_id: &str) -> Result<Option<usize>>;
}

/// Trait defining the interface for insemination record storage
pub trait InseminationStorage: Send + Sync {
    /// List a farmer's records in insertion order
    fn list_inseminations(&self, farmer_id: &str) -> Result<Vec<InseminationRecord>>;

    fn get_insemination(&self, farmer_id: &str, record_id: &str) -> Result<Option<InseminationRecord>>;

    /// Insert a new record or replace the record with the same ID
    fn upsert_insemination(&self, record: &InseminationRecord) -> Result<()>;

    /// Returns true if the record was found and deleted
    fn delete_insemination(&self, farmer_id: &str, record_id: &str) -> Result<bool>;
}

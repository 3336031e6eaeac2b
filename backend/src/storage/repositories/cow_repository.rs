use anyhow::Result;
use tracing::info;

use crate::domain::models::cow::Cow;
use crate::domain::models::insemination::InseminationRecord;
use crate::storage::connection::{keys, Collection, StoreConnection};
use crate::storage::traits::CowStorage;

/// Cows of every farmer in one collection, filtered by owner on read
#[derive(Clone)]
pub struct CowRepository {
    connection: StoreConnection,
}

impl CowRepository {
    pub fn new(connection: StoreConnection) -> Self {
        Self { connection }
    }
}

impl CowStorage for CowRepository {
    fn list_cows(&self, farmer_id: &str) -> Result<Vec<Cow>> {
        let cows: Vec<Cow> = self.connection.read_all(keys::COWS)?;
        Ok(cows.into_iter().filter(|c| c.farmer_id == farmer_id).collect())
    }

    fn get_cow(&self, farmer_id: &str, cow_id: &str) -> Result<Option<Cow>> {
        Ok(self.list_cows(farmer_id)?.into_iter().find(|c| c.id == cow_id))
    }

    fn upsert_cow(&self, cow: &Cow) -> Result<()> {
        let _guard = self.connection.write_guard()?;

        let mut cows: Collection<Cow> = self.connection.read_collection(keys::COWS)?;
        match cows.items.iter_mut().find(|c| c.id == cow.id) {
            Some(existing) => *existing = cow.clone(),
            None => cows.items.push(cow.clone()),
        }
        self.connection.write_collection(keys::COWS, &cows)
    }

    fn delete_cow(&self, farmer_id: &str, cow_id: &str) -> Result<Option<usize>> {
        let _guard = self.connection.write_guard()?;

        let mut cows: Collection<Cow> = self.connection.read_collection(keys::COWS)?;
        let before = cows.items.len();
        cows.items.retain(|c| !(c.id == cow_id && c.farmer_id == farmer_id));
        if cows.items.len() == before {
            return Ok(None);
        }

        // Read both before writing either, so a bad record key leaves the cow in place
        let mut records: Collection<InseminationRecord> = self.connection.read_collection(keys::INSEMINATIONS)?;
        let records_before = records.items.len();
        records.items.retain(|r| r.cow_id != cow_id);
        let removed = records_before - records.items.len();

        self.connection.write_collection(keys::COWS, &cows)?;
        self.connection.write_collection(keys::INSEMINATIONS, &records)?;

        info!("Deleted cow {} with {} insemination record(s)", cow_id, removed);
        Ok(Some(removed))
    }
}

use anyhow::Result;

use crate::domain::models::insemination::InseminationRecord;
use crate::storage::connection::{keys, Collection, StoreConnection};
use crate::storage::traits::InseminationStorage;

#[derive(Clone)]
pub struct InseminationRepository {
    connection: StoreConnection,
}

impl InseminationRepository {
    pub fn new(connection: StoreConnection) -> Self {
        Self { connection }
    }
}

impl InseminationStorage for InseminationRepository {
    fn list_inseminations(&self, farmer_id: &str) -> Result<Vec<InseminationRecord>> {
        let records: Vec<InseminationRecord> = self.connection.read_all(keys::INSEMINATIONS)?;
        Ok(records.into_iter().filter(|r| r.farmer_id == farmer_id).collect())
    }

    fn get_insemination(&self, farmer_id: &str, record_id: &str) -> Result<Option<InseminationRecord>> {
        Ok(self
            .list_inseminations(farmer_id)?
            .into_iter()
            .find(|r| r.id == record_id))
    }

    fn upsert_insemination(&self, record: &InseminationRecord) -> Result<()> {
        let _guard = self.connection.write_guard()?;

        let mut records: Collection<InseminationRecord> = self.connection.read_collection(keys::INSEMINATIONS)?;
        match records.items.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => records.items.push(record.clone()),
        }
        self.connection.write_collection(keys::INSEMINATIONS, &records)
    }

    fn delete_insemination(&self, farmer_id: &str, record_id: &str) -> Result<bool> {
        let _guard = self.connection.write_guard()?;

        let mut records: Collection<InseminationRecord> = self.connection.read_collection(keys::INSEMINATIONS)?;
        let before = records.items.len();
        records.items.retain(|r| !(r.id == record_id && r.farmer_id == farmer_id));
        if records.items.len() == before {
            return Ok(false);
        }

        self.connection.write_collection(keys::INSEMINATIONS, &records)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, farmer_id: &str) -> InseminationRecord {
        InseminationRecord {
            id: id.to_string(),
            farmer_id: farmer_id.to_string(),
            cow_id: "cow::a".to_string(),
            date: "2024-03-10".to_string(),
            is_confirmed: false,
            doctor_name: "Dr. Rao".to_string(),
            bull_name: "JER-7".to_string(),
            notes: Some("first service".to_string()),
        }
    }

    #[test]
    fn test_upsert_and_scope() {
        let repo = InseminationRepository::new(StoreConnection::in_memory());
        repo.upsert_insemination(&record("insemination::1", "farmer::1")).unwrap();
        repo.upsert_insemination(&record("insemination::2", "farmer::2")).unwrap();

        assert_eq!(repo.list_inseminations("farmer::1").unwrap().len(), 1);
        assert!(repo.get_insemination("farmer::1", "insemination::2").unwrap().is_none());

        let mut confirmed = record("insemination::1", "farmer::1");
        confirmed.is_confirmed = true;
        repo.upsert_insemination(&confirmed).unwrap();

        let stored = repo.get_insemination("farmer::1", "insemination::1").unwrap().unwrap();
        assert!(stored.is_confirmed);
        assert_eq!(repo.list_inseminations("farmer::1").unwrap().len(), 1);
    }

    #[test]
    fn test_delete() {
        let repo = InseminationRepository::new(StoreConnection::in_memory());
        repo.upsert_insemination(&record("insemination::1", "farmer::1")).unwrap();

        assert!(!repo.delete_insemination("farmer::2", "insemination::1").unwrap());
        assert!(repo.delete_insemination("farmer::1", "insemination::1").unwrap());
        assert!(!repo.delete_insemination("farmer::1", "insemination::1").unwrap());
        assert!(repo.list_inseminations("farmer::1").unwrap().is_empty());
    }
}

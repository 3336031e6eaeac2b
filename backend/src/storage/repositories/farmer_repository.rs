use anyhow::Result;
use tracing::info;

use crate::domain::models::farmer::Farmer;
use crate::storage::connection::{keys, Collection, StoreConnection};
use crate::storage::traits::FarmerStorage;

/// Farmer profiles, stored as one collection
#[derive(Clone)]
pub struct FarmerRepository {
    connection: StoreConnection,
}

impl FarmerRepository {
    pub fn new(connection: StoreConnection) -> Self {
        Self { connection }
    }
}

impl FarmerStorage for FarmerRepository {
    fn list_farmers(&self) -> Result<Vec<Farmer>> {
        self.connection.read_all(keys::FARMERS)
    }

    fn get_farmer(&self, farmer_id: &str) -> Result<Option<Farmer>> {
        Ok(self.list_farmers()?.into_iter().find(|f| f.id == farmer_id))
    }

    fn find_by_mobile(&self, mobile: &str) -> Result<Option<Farmer>> {
        Ok(self.list_farmers()?.into_iter().find(|f| f.mobile == mobile))
    }

    fn store_farmer(&self, farmer: &Farmer) -> Result<()> {
        let _guard = self.connection.write_guard()?;

        let mut farmers: Collection<Farmer> = self.connection.read_collection(keys::FARMERS)?;
        match farmers.items.iter_mut().find(|f| f.id == farmer.id) {
            Some(existing) => *existing = farmer.clone(),
            None => farmers.items.push(farmer.clone()),
        }
        self.connection.write_collection(keys::FARMERS, &farmers)?;

        info!("Stored farmer {} ({})", farmer.id, farmer.farm_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farmer(id: &str, mobile: &str) -> Farmer {
        Farmer {
            id: id.to_string(),
            mobile: mobile.to_string(),
            farm_name: "Green Pastures".to_string(),
        }
    }

    #[test]
    fn test_store_and_find() {
        let repo = FarmerRepository::new(StoreConnection::in_memory());

        repo.store_farmer(&farmer("farmer::1", "9876543210")).unwrap();
        repo.store_farmer(&farmer("farmer::2", "9000000000")).unwrap();

        assert_eq!(repo.list_farmers().unwrap().len(), 2);
        assert_eq!(repo.get_farmer("farmer::2").unwrap().unwrap().mobile, "9000000000");
        assert_eq!(repo.find_by_mobile("9876543210").unwrap().unwrap().id, "farmer::1");
        assert!(repo.find_by_mobile("123").unwrap().is_none());
    }

    #[test]
    fn test_store_same_id_replaces() {
        let repo = FarmerRepository::new(StoreConnection::in_memory());

        repo.store_farmer(&farmer("farmer::1", "1")).unwrap();
        let mut renamed = farmer("farmer::1", "1");
        renamed.farm_name = "Sunrise Dairy".to_string();
        repo.store_farmer(&renamed).unwrap();

        let farmers = repo.list_farmers().unwrap();
        assert_eq!(farmers.len(), 1);
        assert_eq!(farmers[0].farm_name, "Sunrise Dairy");
    }
}

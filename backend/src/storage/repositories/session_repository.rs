use anyhow::Result;

use crate::domain::models::farmer::Farmer;
use crate::storage::connection::{keys, StoreConnection};
use crate::storage::traits::SessionStorage;

/// The current-session pointer: a copy of the logged-in farmer
#[derive(Clone)]
pub struct SessionRepository {
    connection: StoreConnection,
}

impl SessionRepository {
    pub fn new(connection: StoreConnection) -> Self {
        Self { connection }
    }
}

impl SessionStorage for SessionRepository {
    fn get_current_farmer(&self) -> Result<Option<Farmer>> {
        self.connection.read_one(keys::CURRENT_USER)
    }

    fn set_current_farmer(&self, farmer: &Farmer) -> Result<()> {
        let _guard = self.connection.write_guard()?;
        self.connection.write_one(keys::CURRENT_USER, farmer)
    }

    fn clear_current_farmer(&self) -> Result<bool> {
        let _guard = self.connection.write_guard()?;
        self.connection.remove(keys::CURRENT_USER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let repo = SessionRepository::new(StoreConnection::in_memory());
        assert!(repo.get_current_farmer().unwrap().is_none());

        let farmer = Farmer {
            id: "farmer::1".to_string(),
            mobile: "9876543210".to_string(),
            farm_name: "Green Pastures".to_string(),
        };
        repo.set_current_farmer(&farmer).unwrap();
        assert_eq!(repo.get_current_farmer().unwrap(), Some(farmer));

        assert!(repo.clear_current_farmer().unwrap());
        assert!(!repo.clear_current_farmer().unwrap());
        assert!(repo.get_current_farmer().unwrap().is_none());
    }
}

//! Test environment backed by a temporary directory that is removed on drop,
//! even when a test panics.

use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

use super::connection::StoreConnection;
use super::repositories::{CowRepository, FarmerRepository, InseminationRepository, SessionRepository};

pub struct TestEnvironment {
    _temp_dir: TempDir,
    pub connection: StoreConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir: TempDir = tempfile::Builder::new().prefix("cowmanager_test_").tempdir()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = StoreConnection::open_json(&base_path)?;

        Ok(Self {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn farmers(&self) -> FarmerRepository {
        FarmerRepository::new(self.connection.clone())
    }

    pub fn session(&self) -> SessionRepository {
        SessionRepository::new(self.connection.clone())
    }

    pub fn cows(&self) -> CowRepository {
        CowRepository::new(self.connection.clone())
    }

    pub fn inseminations(&self) -> InseminationRepository {
        InseminationRepository::new(self.connection.clone())
    }
}

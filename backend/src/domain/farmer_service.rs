use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::session::LoginCommand;
use crate::domain::errors::DomainError;
use crate::domain::models::farmer::Farmer;
use crate::domain::models::session::Session;
use crate::storage::traits::{FarmerStorage, SessionStorage};

/// Service for farmer login, registration and the current session
#[derive(Clone)]
pub struct FarmerService {
    farmers: Arc<dyn FarmerStorage>,
    session: Arc<dyn SessionStorage>,
}

impl FarmerService {
    pub fn new(farmers: Arc<dyn FarmerStorage>, session: Arc<dyn SessionStorage>) -> Self {
        Self { farmers, session }
    }

    /// Log a farmer in, registering them on first login.
    ///
    /// A mobile number that is already registered logs into the existing
    /// profile; the stored farm name is kept.
    pub async fn login(&self, command: LoginCommand) -> Result<Session> {
        let mobile = command.mobile.trim();
        let farm_name = command.farm_name.trim();

        if mobile.is_empty() {
            return Err(DomainError::validation("Mobile number is required").into());
        }
        if farm_name.is_empty() {
            return Err(DomainError::validation("Farm name is required").into());
        }

        let farmer = match self.farmers.find_by_mobile(mobile)? {
            Some(existing) => {
                info!("Farmer {} logged in", existing.id);
                existing
            }
            None => {
                let farmer = Farmer {
                    id: Farmer::generate_id(),
                    mobile: mobile.to_string(),
                    farm_name: farm_name.to_string(),
                };
                self.farmers.store_farmer(&farmer)?;
                info!("Registered farmer {} for farm '{}'", farmer.id, farmer.farm_name);
                farmer
            }
        };

        self.session.set_current_farmer(&farmer)?;
        Ok(Session::new(farmer))
    }

    /// The session restored from storage, if someone is logged in
    pub async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.session.get_current_farmer()?.map(Session::new))
    }

    /// Clear the current session. Farmer data is left untouched.
    pub async fn logout(&self) -> Result<()> {
        if self.session.clear_current_farmer()? {
            info!("Logged out");
        }
        Ok(())
    }

    /// Build the session a request acts under from the farmer ID in its path
    pub async fn resolve_session(&self, farmer_id: &str) -> Result<Session> {
        match self.farmers.get_farmer(farmer_id)? {
            Some(farmer) => Ok(Session::new(farmer)),
            None => {
                warn!("Request for unknown farmer {}", farmer_id);
                Err(DomainError::not_found("Farmer", farmer_id).into())
            }
        }
    }
}

use anyhow::Result;
use base64::{engine::general_purpose, Engine as _};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::cows::{DeleteCowResult, SaveCowCommand, SaveCowResult};
use crate::domain::errors::DomainError;
use crate::domain::models::cow::Cow;
use crate::domain::models::session::Session;
use crate::storage::traits::CowStorage;

/// Service for managing a farmer's herd
#[derive(Clone)]
pub struct CowService {
    cows: Arc<dyn CowStorage>,
}

impl CowService {
    pub fn new(cows: Arc<dyn CowStorage>) -> Self {
        Self { cows }
    }

    /// List the farmer's cows in the order they were added
    pub async fn list_cows(&self, session: &Session) -> Result<Vec<Cow>> {
        let cows = self.cows.list_cows(session.farmer_id())?;
        info!("Found {} cows for farmer {}", cows.len(), session.farmer_id());
        Ok(cows)
    }

    pub async fn get_cow(&self, session: &Session, cow_id: &str) -> Result<Cow> {
        self.cows
            .get_cow(session.farmer_id(), cow_id)?
            .ok_or_else(|| DomainError::not_found("Cow", cow_id).into())
    }

    /// Add a cow to the farmer's herd
    pub async fn create_cow(&self, session: &Session, command: SaveCowCommand) -> Result<SaveCowResult> {
        let fields = validate_cow_fields(&command)?;

        let id = Cow::generate_id();
        let image = resolve_image(command.image.as_deref(), None, &id);

        let cow = Cow {
            id,
            farmer_id: session.farmer_id().to_string(),
            tag_number: fields.tag_number,
            name: fields.name,
            dob: fields.dob,
            image: Some(image),
        };
        self.cows.upsert_cow(&cow)?;

        info!("Created cow {} (tag {})", cow.id, cow.tag_number);
        Ok(SaveCowResult {
            cow,
            success_message: "Cow added successfully".to_string(),
        })
    }

    /// Edit an existing cow. Its ID and owner never change.
    pub async fn update_cow(
        &self,
        session: &Session,
        cow_id: &str,
        command: SaveCowCommand,
    ) -> Result<SaveCowResult> {
        let existing = self.get_cow(session, cow_id).await?;
        let fields = validate_cow_fields(&command)?;

        let image = resolve_image(command.image.as_deref(), existing.image.as_deref(), &existing.id);

        let cow = Cow {
            tag_number: fields.tag_number,
            name: fields.name,
            dob: fields.dob,
            image: Some(image),
            ..existing
        };
        self.cows.upsert_cow(&cow)?;

        info!("Updated cow {}", cow.id);
        Ok(SaveCowResult {
            cow,
            success_message: "Cow updated successfully".to_string(),
        })
    }

    /// Remove a cow together with all of its insemination records
    pub async fn delete_cow(&self, session: &Session, cow_id: &str) -> Result<DeleteCowResult> {
        let removed = self
            .cows
            .delete_cow(session.farmer_id(), cow_id)?
            .ok_or_else(|| DomainError::not_found("Cow", cow_id))?;

        Ok(DeleteCowResult {
            deleted_cow_id: cow_id.to_string(),
            removed_inseminations: removed,
            success_message: "Cow deleted successfully".to_string(),
        })
    }
}

struct CowFields {
    tag_number: String,
    name: String,
    dob: String,
}

fn validate_cow_fields(command: &SaveCowCommand) -> Result<CowFields> {
    let tag_number = command.tag_number.trim();
    let name = command.name.trim();
    let dob = command.dob.trim();

    if tag_number.is_empty() {
        return Err(DomainError::validation("Tag number is required").into());
    }
    if name.is_empty() {
        return Err(DomainError::validation("Cow name is required").into());
    }
    if dob.is_empty() {
        return Err(DomainError::validation("Date of birth is required").into());
    }
    if NaiveDate::parse_from_str(dob, "%Y-%m-%d").is_err() {
        return Err(DomainError::validation("Date of birth must be in YYYY-MM-DD format").into());
    }

    Ok(CowFields {
        tag_number: tag_number.to_string(),
        name: name.to_string(),
        dob: dob.to_string(),
    })
}

/// Pick the image to store: a usable new image wins, then the current one,
/// then a placeholder seeded by the cow ID.
fn resolve_image(new_image: Option<&str>, current: Option<&str>, seed: &str) -> String {
    if let Some(candidate) = new_image.map(str::trim).filter(|s| !s.is_empty()) {
        if is_usable_image(candidate) {
            return candidate.to_string();
        }
        warn!("Ignoring unreadable image for cow {}, keeping previous image", seed);
    }

    match current.filter(|s| !s.is_empty()) {
        Some(current) => current.to_string(),
        None => Cow::placeholder_image(seed),
    }
}

/// An image is usable if it is an http(s) URL or a base64 `data:image/...` URL
fn is_usable_image(value: &str) -> bool {
    if value.starts_with("https://") || value.starts_with("http://") {
        return true;
    }

    let Some(rest) = value.strip_prefix("data:image/") else {
        return false;
    };
    let Some((_, payload)) = rest.split_once(";base64,") else {
        return false;
    };

    !payload.is_empty() && general_purpose::STANDARD.decode(payload).is_ok()
}

//! # Advisory Service
//!
//! Answers free-text questions about the herd. The question goes to a text
//! generator together with a system instruction describing the farmer's
//! herd; any generator failure is turned into a fixed apology so the caller
//! always gets text back.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use shared::herd::find_cow;
use shared::{Cow, InseminationRecord, ADVISORY_FALLBACK, UNKNOWN_COW_NAME};

use crate::domain::commands::advisory::AdviceQuery;
use crate::domain::errors::{AdvisoryError, DomainError};

/// Something that can turn a system instruction plus a question into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system_instruction: &str, query: &str) -> Result<String, AdvisoryError>;
}

#[derive(Clone)]
pub struct AdvisoryService {
    generator: Arc<dyn TextGenerator>,
}

impl AdvisoryService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask the assistant a question about the given herd
    pub async fn get_advice(&self, request: AdviceQuery) -> Result<String> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(DomainError::validation("Please enter a question").into());
        }

        let context = build_context(&request.cows, &request.inseminations);
        info!(
            "Requesting advice ({} cows, {} records in context)",
            request.cows.len(),
            request.inseminations.len()
        );

        match self.generator.generate(&context, query).await {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) => {
                error!("Advisory generator returned empty text");
                Ok(ADVISORY_FALLBACK.to_string())
            }
            Err(e) => {
                error!("Advisory generator failed: {}", e);
                Ok(ADVISORY_FALLBACK.to_string())
            }
        }
    }
}

/// The system instruction: consultant persona, herd summary and guidance on tone
pub fn build_context(cows: &[Cow], records: &[InseminationRecord]) -> String {
    let cow_entries = cows
        .iter()
        .map(|c| format!("{} (Tag: {}, DOB: {})", c.name, c.tag_number, c.dob))
        .collect::<Vec<_>>()
        .join(", ");

    let record_entries = records
        .iter()
        .map(|r| {
            let name = find_cow(cows, &r.cow_id).map_or(UNKNOWN_COW_NAME, |c| c.name.as_str());
            format!("Cow {} was inseminated on {}. Confirmed: {}", name, r.date, r.is_confirmed)
        })
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "You are an expert livestock veterinarian and dairy farm consultant.\n\
         A farmer is asking for advice. Here is their current herd data:\n\
         Total Cows: {}\n\
         Cows: {}\n\
         Insemination Records: {}\n\n\
         Provide practical, supportive, and scientifically sound advice for a dairy farmer.\n\
         Keep responses concise and easy to understand.",
        cows.len(),
        cow_entries,
        record_entries
    )
}

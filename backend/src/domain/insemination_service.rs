use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use shared::InseminationFilter;

use crate::domain::commands::inseminations::{
    CreateInseminationCommand, InseminationListQuery, InseminationResult,
};
use crate::domain::errors::DomainError;
use crate::domain::models::insemination::InseminationRecord;
use crate::domain::models::session::Session;
use crate::storage::traits::{CowStorage, InseminationStorage};

/// Service for recording inseminations and confirming pregnancies
#[derive(Clone)]
pub struct InseminationService {
    records: Arc<dyn InseminationStorage>,
    cows: Arc<dyn CowStorage>,
}

impl InseminationService {
    pub fn new(records: Arc<dyn InseminationStorage>, cows: Arc<dyn CowStorage>) -> Self {
        Self { records, cows }
    }

    /// List the farmer's records matching the query, in insertion order
    pub async fn list_inseminations(
        &self,
        session: &Session,
        query: InseminationListQuery,
    ) -> Result<Vec<InseminationRecord>> {
        let all = self.records.list_inseminations(session.farmer_id())?;

        let filter = InseminationFilter {
            status: query.status,
            start_date: query.start_date,
            end_date: query.end_date,
        };
        if filter.is_empty() {
            return Ok(all);
        }

        let all: Vec<shared::InseminationRecord> = all.into_iter().map(Into::into).collect();
        let matching: Vec<InseminationRecord> = shared::herd::filter_inseminations(&all, &filter)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect();

        info!(
            "{} of {} records match filter for farmer {}",
            matching.len(),
            all.len(),
            session.farmer_id()
        );
        Ok(matching)
    }

    /// Record a new insemination. It always starts unconfirmed.
    pub async fn create_insemination(
        &self,
        session: &Session,
        command: CreateInseminationCommand,
    ) -> Result<InseminationResult> {
        let cow_id = command.cow_id.trim();
        let date = command.date.trim();
        let doctor_name = command.doctor_name.trim();
        let bull_name = command.bull_name.trim();

        if cow_id.is_empty() {
            return Err(DomainError::validation("Please select a cow").into());
        }
        if date.is_empty() {
            return Err(DomainError::validation("Insemination date is required").into());
        }
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err(DomainError::validation("Insemination date must be in YYYY-MM-DD format").into());
        }
        if doctor_name.is_empty() {
            return Err(DomainError::validation("Doctor name is required").into());
        }
        if bull_name.is_empty() {
            return Err(DomainError::validation("Bull ID or name is required").into());
        }

        if self.cows.get_cow(session.farmer_id(), cow_id)?.is_none() {
            return Err(DomainError::validation(format!("Cow {} is not in your herd", cow_id)).into());
        }

        let notes = command
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let record = InseminationRecord {
            id: InseminationRecord::generate_id(),
            farmer_id: session.farmer_id().to_string(),
            cow_id: cow_id.to_string(),
            date: date.to_string(),
            is_confirmed: false,
            doctor_name: doctor_name.to_string(),
            bull_name: bull_name.to_string(),
            notes,
        };
        self.records.upsert_insemination(&record)?;

        info!("Recorded insemination {} for cow {}", record.id, record.cow_id);
        Ok(InseminationResult {
            record,
            success_message: "Insemination recorded successfully".to_string(),
        })
    }

    /// Mark a record as a confirmed pregnancy. Confirming twice changes nothing.
    pub async fn confirm_insemination(&self, session: &Session, record_id: &str) -> Result<InseminationResult> {
        let mut record = self
            .records
            .get_insemination(session.farmer_id(), record_id)?
            .ok_or_else(|| DomainError::not_found("Insemination record", record_id))?;

        if !record.is_confirmed {
            record.is_confirmed = true;
            self.records.upsert_insemination(&record)?;
            info!("Confirmed pregnancy for record {}", record.id);
        }

        Ok(InseminationResult {
            record,
            success_message: "Pregnancy confirmed".to_string(),
        })
    }

    pub async fn delete_insemination(&self, session: &Session, record_id: &str) -> Result<()> {
        if !self.records.delete_insemination(session.farmer_id(), record_id)? {
            return Err(DomainError::not_found("Insemination record", record_id).into());
        }

        info!("Deleted insemination record {}", record_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::cow::Cow;
    use crate::domain::models::farmer::Farmer;
    use crate::storage::test_utils::TestEnvironment;
    use shared::StatusFilter;

    fn setup_test() -> (TestEnvironment, InseminationService, Session) {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let service = InseminationService::new(Arc::new(env.inseminations()), Arc::new(env.cows()));
        let session = Session::new(Farmer {
            id: "farmer::1".to_string(),
            mobile: "9876543210".to_string(),
            farm_name: "Green Pastures".to_string(),
        });

        env.cows()
            .upsert_cow(&Cow {
                id: "cow::a".to_string(),
                farmer_id: "farmer::1".to_string(),
                tag_number: "T-1".to_string(),
                name: "Lakshmi".to_string(),
                dob: "2020-05-01".to_string(),
                image: None,
            })
            .unwrap();

        (env, service, session)
    }

    fn create_command(date: &str, notes: Option<&str>) -> CreateInseminationCommand {
        CreateInseminationCommand {
            cow_id: "cow::a".to_string(),
            date: date.to_string(),
            doctor_name: "Dr. Rao".to_string(),
            bull_name: "JER-7".to_string(),
            notes: notes.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_starts_pending() {
        let (_env, service, session) = setup_test();

        let record = service
            .create_insemination(&session, create_command("2024-03-01", Some("  ")))
            .await
            .unwrap()
            .record;

        assert!(record.id.starts_with("insemination::"));
        assert!(!record.is_confirmed);
        assert_eq!(record.notes, None);
        assert_eq!(record.farmer_id, "farmer::1");
    }

    #[tokio::test]
    async fn test_create_validation() {
        let (env, service, session) = setup_test();

        let mut missing_doctor = create_command("2024-03-01", None);
        missing_doctor.doctor_name = " ".to_string();
        let mut missing_bull = create_command("2024-03-01", None);
        missing_bull.bull_name = String::new();
        let mut unknown_cow = create_command("2024-03-01", None);
        unknown_cow.cow_id = "cow::elsewhere".to_string();

        for command in [create_command("", None), create_command("March 1", None), missing_doctor, missing_bull, unknown_cow] {
            let err = service.create_insemination(&session, command).await.unwrap_err();
            assert!(matches!(err.downcast_ref::<DomainError>(), Some(DomainError::Validation(_))));
        }

        assert!(env.inseminations().list_inseminations("farmer::1").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_is_idempotent() {
        let (_env, service, session) = setup_test();

        let record = service
            .create_insemination(&session, create_command("2024-03-01", None))
            .await
            .unwrap()
            .record;

        let first = service.confirm_insemination(&session, &record.id).await.unwrap().record;
        let second = service.confirm_insemination(&session, &record.id).await.unwrap().record;

        assert!(first.is_confirmed);
        assert_eq!(first, second);

        let err = service.confirm_insemination(&session, "insemination::none").await.unwrap_err();
        assert!(matches!(err.downcast_ref::<DomainError>(), Some(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let (_env, service, session) = setup_test();

        let jan = service.create_insemination(&session, create_command("2024-01-10", None)).await.unwrap().record;
        let feb = service.create_insemination(&session, create_command("2024-02-10", None)).await.unwrap().record;
        let mar = service.create_insemination(&session, create_command("2024-03-10", None)).await.unwrap().record;
        service.confirm_insemination(&session, &feb.id).await.unwrap();

        let all = service
            .list_inseminations(&session, InseminationListQuery::default())
            .await
            .unwrap();
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![jan.id.as_str(), feb.id.as_str(), mar.id.as_str()]);

        let pending = service
            .list_inseminations(
                &session,
                InseminationListQuery {
                    status: StatusFilter::Pending,
                    start_date: Some("2024-01-10".to_string()),
                    end_date: Some("2024-03-01".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, jan.id);
    }

    #[tokio::test]
    async fn test_delete() {
        let (_env, service, session) = setup_test();

        let record = service
            .create_insemination(&session, create_command("2024-03-01", None))
            .await
            .unwrap()
            .record;

        service.delete_insemination(&session, &record.id).await.unwrap();
        let err = service.delete_insemination(&session, &record.id).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<DomainError>(), Some(DomainError::NotFound { .. })));
    }
}

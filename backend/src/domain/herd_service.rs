use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use shared::herd;
use shared::UNKNOWN_COW_NAME;

use crate::domain::commands::herd::{Pregnancy, Reminder};
use crate::domain::models::session::Session;
use crate::storage::traits::{CowStorage, InseminationStorage};

/// Derived herd views: pregnant cows and heat-check reminders.
/// Everything is recomputed from storage on every call.
#[derive(Clone)]
pub struct HerdService {
    cows: Arc<dyn CowStorage>,
    records: Arc<dyn InseminationStorage>,
}

impl HerdService {
    pub fn new(cows: Arc<dyn CowStorage>, records: Arc<dyn InseminationStorage>) -> Self {
        Self { cows, records }
    }

    fn load(&self, session: &Session) -> Result<(Vec<shared::Cow>, Vec<shared::InseminationRecord>)> {
        let cows = self
            .cows
            .list_cows(session.farmer_id())?
            .into_iter()
            .map(Into::into)
            .collect();
        let records = self
            .records
            .list_inseminations(session.farmer_id())?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok((cows, records))
    }

    /// Cows with a confirmed insemination, each with its latest confirmed record
    pub async fn pregnancies(&self, session: &Session) -> Result<Vec<Pregnancy>> {
        let (cows, records) = self.load(session)?;

        let pregnancies: Vec<Pregnancy> = herd::pregnant_cows(&cows, &records)
            .into_iter()
            .map(|cow| Pregnancy {
                cow: cow.clone().into(),
                latest_confirmed: herd::latest_confirmed(&records, &cow.id).cloned().map(Into::into),
            })
            .collect();

        debug!("{} pregnant cows for farmer {}", pregnancies.len(), session.farmer_id());
        Ok(pregnancies)
    }

    /// Pending records due for a heat check as of today
    pub async fn reminders(&self, session: &Session) -> Result<Vec<Reminder>> {
        self.reminders_on(session, herd::today()).await
    }

    pub async fn reminders_on(&self, session: &Session, today: NaiveDate) -> Result<Vec<Reminder>> {
        let (cows, records) = self.load(session)?;

        let reminders: Vec<Reminder> = herd::heat_check_reminders(&records, today)
            .into_iter()
            .map(|record| Reminder {
                cow_name: herd::cow_name_or(&cows, &record.cow_id, UNKNOWN_COW_NAME),
                days_since_insemination: herd::days_since_insemination(record, today).unwrap_or_default(),
                record: record.clone().into(),
            })
            .collect();

        debug!("{} heat-check reminders for farmer {}", reminders.len(), session.farmer_id());
        Ok(reminders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::cow::Cow;
    use crate::domain::models::farmer::Farmer;
    use crate::domain::models::insemination::InseminationRecord;
    use crate::storage::connection::StoreConnection;
    use crate::storage::repositories::{CowRepository, InseminationRepository};

    fn setup_test() -> (CowRepository, InseminationRepository, HerdService, Session) {
        let connection = StoreConnection::in_memory();
        let cows = CowRepository::new(connection.clone());
        let records = InseminationRepository::new(connection);
        let service = HerdService::new(Arc::new(cows.clone()), Arc::new(records.clone()));
        let session = Session::new(Farmer {
            id: "farmer::1".to_string(),
            mobile: "1".to_string(),
            farm_name: "Farm".to_string(),
        });
        (cows, records, service, session)
    }

    fn cow(id: &str, name: &str) -> Cow {
        Cow {
            id: id.to_string(),
            farmer_id: "farmer::1".to_string(),
            tag_number: format!("TAG-{}", name),
            name: name.to_string(),
            dob: "2020-01-01".to_string(),
            image: None,
        }
    }

    fn record(id: &str, cow_id: &str, date: &str, is_confirmed: bool) -> InseminationRecord {
        InseminationRecord {
            id: id.to_string(),
            farmer_id: "farmer::1".to_string(),
            cow_id: cow_id.to_string(),
            date: date.to_string(),
            is_confirmed,
            doctor_name: "Dr. Rao".to_string(),
            bull_name: "JER-7".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_pregnancies_with_latest_confirmed() {
        let (cows, records, service, session) = setup_test();
        cows.upsert_cow(&cow("cow::a", "Lakshmi")).unwrap();
        cows.upsert_cow(&cow("cow::b", "Gauri")).unwrap();
        records.upsert_insemination(&record("i1", "cow::a", "2024-01-01", true)).unwrap();
        records.upsert_insemination(&record("i2", "cow::a", "2024-03-01", true)).unwrap();
        records.upsert_insemination(&record("i3", "cow::b", "2024-03-05", false)).unwrap();

        let pregnancies = service.pregnancies(&session).await.unwrap();
        assert_eq!(pregnancies.len(), 1);
        assert_eq!(pregnancies[0].cow.id, "cow::a");
        assert_eq!(pregnancies[0].latest_confirmed.as_ref().unwrap().id, "i2");
    }

    #[tokio::test]
    async fn test_reminders_use_threshold_and_cow_names() {
        let (cows, records, service, session) = setup_test();
        cows.upsert_cow(&cow("cow::a", "Lakshmi")).unwrap();
        records.upsert_insemination(&record("due", "cow::a", "2024-07-01", false)).unwrap();
        records.upsert_insemination(&record("early", "cow::a", "2024-07-10", false)).unwrap();
        records.upsert_insemination(&record("orphan", "cow::gone", "2024-06-01", false)).unwrap();
        records.upsert_insemination(&record("done", "cow::a", "2024-06-15", true)).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 7, 23).unwrap();
        let reminders = service.reminders_on(&session, today).await.unwrap();

        let summary: Vec<(&str, &str, i64)> = reminders
            .iter()
            .map(|r| (r.record.id.as_str(), r.cow_name.as_str(), r.days_since_insemination))
            .collect();
        assert_eq!(summary, vec![("due", "Lakshmi", 22), ("orphan", "Unknown Cow", 52)]);
    }
}

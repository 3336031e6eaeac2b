use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InseminationRecord {
    pub id: String,
    pub farmer_id: String,
    pub cow_id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub is_confirmed: bool,
    pub doctor_name: String,
    pub bull_name: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl InseminationRecord {
    pub fn generate_id() -> String {
        format!("insemination::{}", Uuid::new_v4().simple())
    }
}

impl From<InseminationRecord> for shared::InseminationRecord {
    fn from(record: InseminationRecord) -> Self {
        shared::InseminationRecord {
            id: record.id,
            farmer_id: record.farmer_id,
            cow_id: record.cow_id,
            date: record.date,
            is_confirmed: record.is_confirmed,
            doctor_name: record.doctor_name,
            bull_name: record.bull_name,
            notes: record.notes,
        }
    }
}

impl From<shared::InseminationRecord> for InseminationRecord {
    fn from(record: shared::InseminationRecord) -> Self {
        InseminationRecord {
            id: record.id,
            farmer_id: record.farmer_id,
            cow_id: record.cow_id,
            date: record.date,
            is_confirmed: record.is_confirmed,
            doctor_name: record.doctor_name,
            bull_name: record.bull_name,
            notes: record.notes,
        }
    }
}

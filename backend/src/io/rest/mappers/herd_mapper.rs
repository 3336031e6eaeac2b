use shared::{
    AdviceRequest, HeatCheckReminder, PregnancyEntry, PregnancyListResponse, ReminderListResponse,
};

use crate::domain::commands::advisory::AdviceQuery;
use crate::domain::commands::herd::{Pregnancy, Reminder};

/// Mapper for the derived herd views and the advisory request
pub struct HerdMapper;

impl HerdMapper {
    pub fn to_pregnancy_list_dto(pregnancies: Vec<Pregnancy>) -> PregnancyListResponse {
        PregnancyListResponse {
            pregnancies: pregnancies
                .into_iter()
                .map(|p| PregnancyEntry {
                    cow: p.cow.into(),
                    latest_confirmed: p.latest_confirmed.map(Into::into),
                })
                .collect(),
        }
    }

    pub fn to_reminder_list_dto(reminders: Vec<Reminder>) -> ReminderListResponse {
        ReminderListResponse {
            reminders: reminders
                .into_iter()
                .map(|r| HeatCheckReminder {
                    record: r.record.into(),
                    cow_name: r.cow_name,
                    days_since_insemination: r.days_since_insemination,
                })
                .collect(),
        }
    }

    pub fn to_advice_query(dto: AdviceRequest) -> AdviceQuery {
        AdviceQuery {
            query: dto.query,
            cows: dto.cows,
            inseminations: dto.inseminations,
        }
    }
}

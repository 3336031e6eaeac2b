//! The active farmer's cows and insemination records as loaded from the
//! backend, plus every view derived from them. Derived views are recomputed
//! on each call.

use std::rc::Rc;

use chrono::NaiveDate;
use yew::Reducible;

use shared::herd;
use shared::{
    Cow, HeatCheckReminder, InseminationFilter, InseminationRecord, PregnancyEntry,
    DELETED_COW_NAME, UNKNOWN_COW_NAME,
};

/// Number of records shown under "Recent Activity"
pub const RECENT_ACTIVITY_LIMIT: usize = 3;

pub const DAILY_TIP: &str =
    "Check for signs of heat 22 days after insemination. Timely confirmation is key to productivity.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HerdState {
    pub cows: Vec<Cow>,
    pub records: Vec<InseminationRecord>,
    pub loading: bool,
}

impl HerdState {
    pub fn total_cows(&self) -> usize {
        self.cows.len()
    }

    pub fn pregnant_cows(&self) -> Vec<&Cow> {
        herd::pregnant_cows(&self.cows, &self.records)
    }

    pub fn pregnancies(&self) -> Vec<PregnancyEntry> {
        self.pregnant_cows()
            .into_iter()
            .map(|cow| PregnancyEntry {
                cow: cow.clone(),
                latest_confirmed: herd::latest_confirmed(&self.records, &cow.id).cloned(),
            })
            .collect()
    }

    pub fn reminders(&self, today: NaiveDate) -> Vec<HeatCheckReminder> {
        herd::heat_check_reminders(&self.records, today)
            .into_iter()
            .map(|record| HeatCheckReminder {
                cow_name: herd::cow_name_or(&self.cows, &record.cow_id, UNKNOWN_COW_NAME),
                days_since_insemination: herd::days_since_insemination(record, today).unwrap_or_default(),
                record: record.clone(),
            })
            .collect()
    }

    pub fn filtered_records(&self, filter: &InseminationFilter) -> Vec<&InseminationRecord> {
        herd::filter_inseminations(&self.records, filter)
    }

    pub fn recent_records(&self) -> Vec<&InseminationRecord> {
        herd::recent_inseminations(&self.records, RECENT_ACTIVITY_LIMIT)
    }

    pub fn find_cow(&self, cow_id: &str) -> Option<&Cow> {
        herd::find_cow(&self.cows, cow_id)
    }

    /// Name for the insemination list, where a missing cow has been deleted
    pub fn record_cow_name(&self, cow_id: &str) -> String {
        herd::cow_name_or(&self.cows, cow_id, DELETED_COW_NAME)
    }

    /// Name for the dashboard, where a missing cow is simply unknown
    pub fn dashboard_cow_name(&self, cow_id: &str) -> String {
        herd::cow_name_or(&self.cows, cow_id, UNKNOWN_COW_NAME)
    }

    pub fn search_by_tag(&self, query: &str) -> Vec<&Cow> {
        herd::search_by_tag(&self.cows, query)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HerdAction {
    Loading,
    Loaded {
        cows: Vec<Cow>,
        records: Vec<InseminationRecord>,
    },
    /// Keep showing whatever was loaded before
    LoadFailed,
    Clear,
}

impl Reducible for HerdState {
    type Action = HerdAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            HerdAction::Loading => Rc::new(HerdState {
                loading: true,
                ..(*self).clone()
            }),
            HerdAction::Loaded { cows, records } => Rc::new(HerdState {
                cows,
                records,
                loading: false,
            }),
            HerdAction::LoadFailed => Rc::new(HerdState {
                loading: false,
                ..(*self).clone()
            }),
            HerdAction::Clear => Rc::new(HerdState::default()),
        }
    }
}

/// "N/A" stands in for blank text fields on record cards
pub fn or_not_available(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

//! # Herd Views
//!
//! Pure functions deriving the views the app shows from the raw cow and
//! insemination collections of one farmer. Nothing here is cached: callers
//! recompute whenever either collection changes.
//!
//! Dates are stored as `YYYY-MM-DD` strings. A record whose date cannot be
//! parsed is never a heat-check reminder, is never excluded by a date bound,
//! and ranks below every dated record when looking for the latest one.

use std::collections::HashSet;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::{Cow, InseminationFilter, InseminationRecord};

/// Days after insemination at which a pending record needs a heat check
pub const HEAT_CHECK_DAYS: i64 = 22;

/// Fixed day length used for day differences, regardless of DST
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parse a stored date. Accepts `YYYY-MM-DD` and full RFC 3339 timestamps.
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Today's date in the local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Epoch millis of midnight of `date` in `tz`
fn midnight_millis<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight).earliest() {
        Some(local) => local.timestamp_millis(),
        // midnight skipped by a DST jump
        None => Utc.from_utc_datetime(&midnight).timestamp_millis(),
    }
}

/// Whole days from `from` to `to`, both taken at midnight in `tz`.
///
/// The millisecond delta is floor-divided by [`MILLIS_PER_DAY`], so a span
/// crossing a DST change can come out one day short.
pub fn whole_days_between_in<Tz: TimeZone>(tz: &Tz, from: NaiveDate, to: NaiveDate) -> i64 {
    (midnight_millis(tz, to) - midnight_millis(tz, from)).div_euclid(MILLIS_PER_DAY)
}

/// Days since the record's insemination date, or None if the date is unreadable
pub fn days_since_insemination_in<Tz: TimeZone>(
    tz: &Tz,
    record: &InseminationRecord,
    today: NaiveDate,
) -> Option<i64> {
    parse_record_date(&record.date).map(|date| whole_days_between_in(tz, date, today))
}

pub fn days_since_insemination(record: &InseminationRecord, today: NaiveDate) -> Option<i64> {
    days_since_insemination_in(&Local, record, today)
}

/// Cows with at least one confirmed insemination, in herd order
pub fn pregnant_cows<'a>(cows: &'a [Cow], records: &[InseminationRecord]) -> Vec<&'a Cow> {
    let confirmed: HashSet<&str> = records
        .iter()
        .filter(|r| r.is_confirmed)
        .map(|r| r.cow_id.as_str())
        .collect();

    let mut seen = HashSet::new();
    cows.iter()
        .filter(|c| confirmed.contains(c.id.as_str()) && seen.insert(c.id.as_str()))
        .collect()
}

/// Pending records at least [`HEAT_CHECK_DAYS`] old, one entry per record
pub fn heat_check_reminders_in<'a, Tz: TimeZone>(
    tz: &Tz,
    records: &'a [InseminationRecord],
    today: NaiveDate,
) -> Vec<&'a InseminationRecord> {
    records
        .iter()
        .filter(|r| !r.is_confirmed)
        .filter(|r| {
            days_since_insemination_in(tz, r, today).map_or(false, |days| days >= HEAT_CHECK_DAYS)
        })
        .collect()
}

pub fn heat_check_reminders<'a>(
    records: &'a [InseminationRecord],
    today: NaiveDate,
) -> Vec<&'a InseminationRecord> {
    heat_check_reminders_in(&Local, records, today)
}

/// Records matching the status and inclusive date bounds, in input order
pub fn filter_inseminations<'a>(
    records: &'a [InseminationRecord],
    filter: &InseminationFilter,
) -> Vec<&'a InseminationRecord> {
    let start = filter.start_date.as_deref().and_then(parse_record_date);
    let end = filter.end_date.as_deref().and_then(parse_record_date);

    records
        .iter()
        .filter(|r| {
            if !filter.status.matches(r.is_confirmed) {
                return false;
            }

            let date = parse_record_date(&r.date);
            if let (Some(start), Some(date)) = (start, date) {
                if date < start {
                    return false;
                }
            }
            if let (Some(end), Some(date)) = (end, date) {
                if date > end {
                    return false;
                }
            }

            true
        })
        .collect()
}

/// The confirmed record with the latest date for a cow.
///
/// On equal dates the record that comes first in the collection wins.
pub fn latest_confirmed<'a>(
    records: &'a [InseminationRecord],
    cow_id: &str,
) -> Option<&'a InseminationRecord> {
    records
        .iter()
        .filter(|r| r.is_confirmed && r.cow_id == cow_id)
        .fold(None, |best: Option<&InseminationRecord>, candidate| match best {
            Some(current) if parse_record_date(&candidate.date) <= parse_record_date(&current.date) => {
                Some(current)
            }
            _ => Some(candidate),
        })
}

pub fn find_cow<'a>(cows: &'a [Cow], cow_id: &str) -> Option<&'a Cow> {
    cows.iter().find(|c| c.id == cow_id)
}

/// Name of the referenced cow, or `placeholder` if it no longer exists
pub fn cow_name_or(cows: &[Cow], cow_id: &str, placeholder: &str) -> String {
    find_cow(cows, cow_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Case-insensitive substring search on tag numbers. An empty query matches every cow.
pub fn search_by_tag<'a>(cows: &'a [Cow], query: &str) -> Vec<&'a Cow> {
    let needle = query.trim().to_lowercase();
    cows.iter()
        .filter(|c| c.tag_number.to_lowercase().contains(&needle))
        .collect()
}

/// Up to `limit` records, newest insemination date first
pub fn recent_inseminations(records: &[InseminationRecord], limit: usize) -> Vec<&InseminationRecord> {
    let mut sorted: Vec<&InseminationRecord> = records.iter().collect();
    sorted.sort_by(|a, b| parse_record_date(&b.date).cmp(&parse_record_date(&a.date)));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatusFilter;
    use chrono::FixedOffset;

    fn cow(id: &str, tag: &str, name: &str) -> Cow {
        Cow {
            id: id.to_string(),
            farmer_id: "farmer::1".to_string(),
            tag_number: tag.to_string(),
            name: name.to_string(),
            dob: "2019-04-02".to_string(),
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
            bull_name: "Jersey-7".to_string(),
            notes: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ids(records: &[&InseminationRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_parse_record_date() {
        assert_eq!(parse_record_date("2024-06-01"), Some(date("2024-06-01")));
        assert_eq!(parse_record_date(" 2024-06-01 "), Some(date("2024-06-01")));
        assert_eq!(parse_record_date("2024-06-01T10:30:00+05:30"), Some(date("2024-06-01")));
        assert_eq!(parse_record_date(""), None);
        assert_eq!(parse_record_date("yesterday"), None);
    }

    #[test]
    fn test_pregnant_cows_only_with_confirmed_records() {
        let cows = vec![cow("c1", "T1", "Gauri"), cow("c2", "T2", "Kamdhenu"), cow("c3", "T3", "Lakshmi")];
        let records = vec![
            record("r1", "c1", "2024-01-01", true),
            record("r2", "c1", "2024-02-01", true),
            record("r3", "c2", "2024-02-01", false),
            record("r4", "c9", "2024-02-01", true),
        ];

        let pregnant = pregnant_cows(&cows, &records);
        let pregnant_ids: Vec<&str> = pregnant.iter().map(|c| c.id.as_str()).collect();

        // c1 once despite two confirmed records, c9 is not in the herd
        assert_eq!(pregnant_ids, vec!["c1"]);
    }

    #[test]
    fn test_pregnant_cows_keeps_herd_order() {
        let cows = vec![cow("c1", "T1", "A"), cow("c2", "T2", "B"), cow("c3", "T3", "C")];
        let records = vec![record("r1", "c3", "2024-01-01", true), record("r2", "c1", "2024-01-01", true)];

        let pregnant_ids: Vec<&str> = pregnant_cows(&cows, &records).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(pregnant_ids, vec!["c1", "c3"]);
    }

    #[test]
    fn test_heat_check_threshold_boundary() {
        let today = date("2024-06-01");
        let records = vec![
            record("exactly-22", "c1", "2024-05-10", false),
            record("only-21", "c1", "2024-05-11", false),
            record("confirmed", "c1", "2024-04-01", true),
            record("old", "c2", "2024-03-01", false),
        ];

        let due = heat_check_reminders_in(&Utc, &records, today);
        assert_eq!(ids(&due), vec!["exactly-22", "old"]);
    }

    #[test]
    fn test_heat_check_not_deduplicated_per_cow() {
        let today = date("2024-06-01");
        let records = vec![
            record("r1", "c1", "2024-04-01", false),
            record("r2", "c1", "2024-04-20", false),
        ];

        assert_eq!(heat_check_reminders_in(&Utc, &records, today).len(), 2);
    }

    #[test]
    fn test_heat_check_skips_unreadable_and_future_dates() {
        let today = date("2024-06-01");
        let records = vec![
            record("garbled", "c1", "not a date", false),
            record("future", "c1", "2024-07-01", false),
        ];

        assert!(heat_check_reminders_in(&Utc, &records, today).is_empty());
    }

    #[test]
    fn test_whole_days_is_offset_independent_without_dst() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let pst = FixedOffset::west_opt(8 * 3600).unwrap();

        for tz in [ist, pst] {
            assert_eq!(whole_days_between_in(&tz, date("2024-05-10"), date("2024-06-01")), 22);
            assert_eq!(whole_days_between_in(&tz, date("2024-06-01"), date("2024-05-31")), -1);
        }
    }

    #[test]
    fn test_days_since_insemination() {
        let r = record("r1", "c1", "2024-05-30", false);
        assert_eq!(days_since_insemination_in(&Utc, &r, date("2024-06-01")), Some(2));

        let garbled = record("r2", "c1", "soon", false);
        assert_eq!(days_since_insemination_in(&Utc, &garbled, date("2024-06-01")), None);
    }

    #[test]
    fn test_filter_all_without_bounds_is_identity() {
        let records = vec![
            record("r3", "c1", "2024-03-01", false),
            record("r1", "c2", "2024-01-01", true),
            record("r2", "c1", "2024-02-01", false),
        ];

        let filtered = filter_inseminations(&records, &InseminationFilter::default());
        let expected: Vec<&InseminationRecord> = records.iter().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_filter_status_and_date_range() {
        let records = vec![
            record("jan", "c1", "2024-01-01", true),
            record("feb", "c1", "2024-02-01", false),
            record("mar", "c1", "2024-03-01", false),
        ];

        let filter = InseminationFilter {
            status: StatusFilter::Pending,
            start_date: Some("2024-01-15".to_string()),
            end_date: Some("2024-02-15".to_string()),
        };

        assert_eq!(ids(&filter_inseminations(&records, &filter)), vec!["feb"]);
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let records = vec![
            record("start", "c1", "2024-01-15", false),
            record("end", "c1", "2024-02-15", true),
            record("after", "c1", "2024-02-16", true),
        ];

        let filter = InseminationFilter {
            status: StatusFilter::All,
            start_date: Some("2024-01-15".to_string()),
            end_date: Some("2024-02-15".to_string()),
        };
        assert_eq!(ids(&filter_inseminations(&records, &filter)), vec!["start", "end"]);

        let confirmed_only = InseminationFilter {
            status: StatusFilter::Confirmed,
            start_date: None,
            end_date: None,
        };
        assert_eq!(ids(&filter_inseminations(&records, &confirmed_only)), vec!["end", "after"]);
    }

    #[test]
    fn test_filter_ignores_blank_bounds() {
        let records = vec![record("r1", "c1", "2024-01-01", false)];
        let filter = InseminationFilter {
            status: StatusFilter::All,
            start_date: Some(String::new()),
            end_date: Some(String::new()),
        };
        assert_eq!(filter_inseminations(&records, &filter).len(), 1);
    }

    #[test]
    fn test_latest_confirmed_picks_newest_date() {
        let records = vec![
            record("old", "c1", "2024-01-01", true),
            record("new", "c1", "2024-03-01", true),
            record("newer-pending", "c1", "2024-04-01", false),
            record("other-cow", "c2", "2024-05-01", true),
        ];

        assert_eq!(latest_confirmed(&records, "c1").map(|r| r.id.as_str()), Some("new"));
        assert_eq!(latest_confirmed(&records, "c3"), None);
    }

    #[test]
    fn test_latest_confirmed_tie_keeps_first_in_collection() {
        let records = vec![
            record("first", "c1", "2024-03-01", true),
            record("second", "c1", "2024-03-01", true),
        ];

        assert_eq!(latest_confirmed(&records, "c1").map(|r| r.id.as_str()), Some("first"));
    }

    #[test]
    fn test_latest_confirmed_prefers_dated_over_garbled() {
        let records = vec![
            record("garbled", "c1", "??", true),
            record("dated", "c1", "2020-01-01", true),
        ];

        assert_eq!(latest_confirmed(&records, "c1").map(|r| r.id.as_str()), Some("dated"));
    }

    #[test]
    fn test_search_by_tag_is_case_insensitive() {
        let cows = vec![cow("c1", "HF-101", "Gauri"), cow("c2", "jr-202", "Bela"), cow("c3", "HF-303", "Chandni")];

        let hits: Vec<&str> = search_by_tag(&cows, "hf").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(hits, vec!["c1", "c3"]);

        let hits: Vec<&str> = search_by_tag(&cows, "JR").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(hits, vec!["c2"]);

        assert_eq!(search_by_tag(&cows, "").len(), 3);
    }

    #[test]
    fn test_cow_name_placeholder() {
        let cows = vec![cow("c1", "T1", "Gauri")];
        assert_eq!(cow_name_or(&cows, "c1", "Unknown Cow"), "Gauri");
        assert_eq!(cow_name_or(&cows, "gone", "Unknown Cow"), "Unknown Cow");
    }

    #[test]
    fn test_recent_inseminations_newest_first() {
        let records = vec![
            record("a", "c1", "2024-01-01", false),
            record("b", "c1", "2024-04-01", false),
            record("c", "c1", "2024-02-01", true),
            record("d", "c1", "2024-03-01", false),
        ];

        assert_eq!(ids(&recent_inseminations(&records, 3)), vec!["b", "d", "c"]);
        assert!(recent_inseminations(&[], 3).is_empty());
    }
}

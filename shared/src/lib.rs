use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod herd;

/// Name shown on the dashboard when a record points at a cow that no longer exists
pub const UNKNOWN_COW_NAME: &str = "Unknown Cow";

/// Name shown in the insemination list when a record points at a removed cow
pub const DELETED_COW_NAME: &str = "Deleted Cow";

/// Shown to the farmer whenever the assistant cannot produce an answer
pub const ADVISORY_FALLBACK: &str =
    "I'm having trouble connecting to the AI consultant right now. Please try again later.";

/// Farmer ID in format: "farmer::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farmer {
    pub id: String,
    /// Mobile number used to log in
    pub mobile: String,
    /// Display name of the farm
    pub farm_name: String,
}

/// Cow ID in format: "cow::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cow {
    pub id: String,
    /// ID of the farmer owning this cow
    pub farmer_id: String,
    /// Ear tag, unique per farm in practice but not enforced
    pub tag_number: String,
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub dob: String,
    /// Data URL of an uploaded photo or a placeholder image URL
    pub image: Option<String>,
}

/// Insemination record ID in format: "insemination::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InseminationRecord {
    pub id: String,
    /// ID of the farmer owning this record
    pub farmer_id: String,
    /// ID of the inseminated cow
    pub cow_id: String,
    /// Date of the insemination (YYYY-MM-DD)
    pub date: String,
    /// True once a pregnancy has been confirmed. Never goes back to false.
    pub is_confirmed: bool,
    pub doctor_name: String,
    /// Bull ID or name
    pub bull_name: String,
    pub notes: Option<String>,
}

impl InseminationRecord {
    /// Short reference shown on record cards ("Record #a1b2")
    pub fn short_reference(&self) -> String {
        let chars: Vec<char> = self.id.chars().collect();
        let start = chars.len().saturating_sub(4);
        chars[start..].iter().collect()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_confirmed {
            "Confirmed"
        } else {
            "Pending"
        }
    }
}

/// The five tabs of the main view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppView {
    #[default]
    Dashboard,
    Cows,
    Inseminations,
    Pregnancies,
    Assistant,
}

impl AppView {
    pub const ALL: [AppView; 5] = [
        AppView::Dashboard,
        AppView::Cows,
        AppView::Inseminations,
        AppView::Pregnancies,
        AppView::Assistant,
    ];

    /// Short label used in the bottom navigation bar
    pub fn nav_label(&self) -> &'static str {
        match self {
            AppView::Dashboard => "Home",
            AppView::Cows => "Cow",
            AppView::Inseminations => "Ins.",
            AppView::Pregnancies => "Preg.",
            AppView::Assistant => "AI",
        }
    }
}

/// Status criterion of the insemination filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Confirmed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Pending, StatusFilter::Confirmed];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Confirmed => "confirmed",
        }
    }

    /// Whether a record with the given confirmation flag passes this status
    pub fn matches(&self, is_confirmed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => !is_confirmed,
            StatusFilter::Confirmed => is_confirmed,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatusFilter(pub String);

impl fmt::Display for UnknownStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status filter '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatusFilter {}

impl FromStr for StatusFilter {
    type Err = UnknownStatusFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "confirmed" => Ok(StatusFilter::Confirmed),
            other => Err(UnknownStatusFilter(other.to_string())),
        }
    }
}

/// Criteria for the insemination list. Date bounds are YYYY-MM-DD and inclusive;
/// an empty string counts as no bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InseminationFilter {
    #[serde(default)]
    pub status: StatusFilter,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl InseminationFilter {
    /// True when the filter lets every record through
    pub fn is_empty(&self) -> bool {
        self.status == StatusFilter::All
            && self.start_date.as_deref().map_or(true, |d| d.trim().is_empty())
            && self.end_date.as_deref().map_or(true, |d| d.trim().is_empty())
    }
}

/// Request to log in (or register on first login)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub mobile: String,
    pub farm_name: String,
}

/// The current session; `farmer` is None when nobody is logged in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub farmer: Option<Farmer>,
}

/// Form payload for creating or editing a cow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveCowRequest {
    pub tag_number: String,
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub dob: String,
    /// Newly uploaded image as a data URL; None keeps the current image
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CowResponse {
    pub cow: Cow,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CowListResponse {
    pub cows: Vec<Cow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteCowResponse {
    pub deleted_cow_id: String,
    /// Number of insemination records removed together with the cow
    pub removed_inseminations: usize,
    pub success_message: String,
}

/// Form payload for a new insemination record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInseminationRequest {
    pub cow_id: String,
    /// Date of the insemination (YYYY-MM-DD)
    pub date: String,
    pub doctor_name: String,
    pub bull_name: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InseminationResponse {
    pub record: InseminationRecord,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InseminationListResponse {
    pub records: Vec<InseminationRecord>,
}

/// A pregnant cow together with its most recent confirmed insemination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyEntry {
    pub cow: Cow,
    pub latest_confirmed: Option<InseminationRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyListResponse {
    pub pregnancies: Vec<PregnancyEntry>,
}

/// A pending record old enough to need a heat check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatCheckReminder {
    pub record: InseminationRecord,
    /// Name of the cow, or a placeholder if the cow is gone
    pub cow_name: String,
    pub days_since_insemination: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderListResponse {
    pub reminders: Vec<HeatCheckReminder>,
}

/// Free-text question for the advisory assistant, sent with the herd snapshot
/// the answer should take into account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub query: String,
    #[serde(default)]
    pub cows: Vec<Cow>,
    #[serde(default)]
    pub inseminations: Vec<InseminationRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub advice: String,
}

/// Log line forwarded from the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, is_confirmed: bool) -> InseminationRecord {
        InseminationRecord {
            id: id.to_string(),
            farmer_id: "farmer::1".to_string(),
            cow_id: "cow::1".to_string(),
            date: "2024-01-01".to_string(),
            is_confirmed,
            doctor_name: "Dr. Patel".to_string(),
            bull_name: "HF-221".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("pending".parse::<StatusFilter>().unwrap(), StatusFilter::Pending);
        assert_eq!("Confirmed".parse::<StatusFilter>().unwrap(), StatusFilter::Confirmed);
        assert_eq!("".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert!("maybe".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_filter_wire_format() {
        let json = serde_json::to_string(&StatusFilter::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");

        let filter: InseminationFilter = serde_json::from_str(r#"{"start_date":null,"end_date":null}"#).unwrap();
        assert_eq!(filter.status, StatusFilter::All);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(true));
        assert!(StatusFilter::All.matches(false));
        assert!(StatusFilter::Pending.matches(false));
        assert!(!StatusFilter::Pending.matches(true));
        assert!(StatusFilter::Confirmed.matches(true));
        assert!(!StatusFilter::Confirmed.matches(false));
    }

    #[test]
    fn test_filter_with_blank_bounds_is_empty() {
        let filter = InseminationFilter {
            status: StatusFilter::All,
            start_date: Some("  ".to_string()),
            end_date: Some(String::new()),
        };
        assert!(filter.is_empty());

        let filter = InseminationFilter {
            start_date: Some("2024-01-01".to_string()),
            ..InseminationFilter::default()
        };
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_short_reference_and_label() {
        let pending = record("insemination::abcdef1234", false);
        assert_eq!(pending.short_reference(), "1234");
        assert_eq!(pending.status_label(), "Pending");

        let confirmed = record("ab", true);
        assert_eq!(confirmed.short_reference(), "ab");
        assert_eq!(confirmed.status_label(), "Confirmed");
    }

    #[test]
    fn test_nav_labels_cover_all_views() {
        let labels: Vec<&str> = AppView::ALL.iter().map(|v| v.nav_label()).collect();
        assert_eq!(labels, vec!["Home", "Cow", "Ins.", "Preg.", "AI"]);
        assert_eq!(AppView::default(), AppView::Dashboard);
    }
}

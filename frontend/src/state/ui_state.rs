//! View-level UI state: active tab, the two modal forms, the insemination
//! filter panel and the assistant exchange.

use std::rc::Rc;

use shared::{AdviceResponse, AppView, Cow, InseminationFilter, StatusFilter, ADVISORY_FALLBACK};
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CowModal {
    #[default]
    Closed,
    New,
    Edit(Cow),
}

impl CowModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, CowModal::Closed)
    }

    pub fn editing(&self) -> Option<&Cow> {
        match self {
            CowModal::Edit(cow) => Some(cow),
            _ => None,
        }
    }
}

/// Two-step insemination form: search a cow by tag, then fill in details
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InseminationModal {
    pub open: bool,
    pub tag_search: String,
    pub selected_cow_id: Option<String>,
}

impl InseminationModal {
    /// The detail form is only offered once a cow is chosen
    pub fn shows_detail_form(&self) -> bool {
        self.open && self.selected_cow_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub view: AppView,
    pub cow_modal: CowModal,
    pub insemination_modal: InseminationModal,
    pub show_filters: bool,
    pub filter: InseminationFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Navigate(AppView),
    OpenNewCow,
    OpenEditCow(Cow),
    CloseCowModal,
    OpenInseminationModal,
    SetTagSearch(String),
    SelectCow(String),
    ClearSelectedCow,
    CloseInseminationModal,
    ToggleFilters,
    SetStatusFilter(StatusFilter),
    SetStartDate(String),
    SetEndDate(String),
    ResetFilters,
    /// Back to a fresh state after logout
    Reset,
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            UiAction::Navigate(view) => next.view = view,
            UiAction::OpenNewCow => next.cow_modal = CowModal::New,
            UiAction::OpenEditCow(cow) => next.cow_modal = CowModal::Edit(cow),
            UiAction::CloseCowModal => next.cow_modal = CowModal::Closed,
            UiAction::OpenInseminationModal => {
                next.insemination_modal = InseminationModal {
                    open: true,
                    ..InseminationModal::default()
                }
            }
            UiAction::SetTagSearch(query) => next.insemination_modal.tag_search = query,
            UiAction::SelectCow(cow_id) => next.insemination_modal.selected_cow_id = Some(cow_id),
            UiAction::ClearSelectedCow => next.insemination_modal.selected_cow_id = None,
            UiAction::CloseInseminationModal => next.insemination_modal = InseminationModal::default(),
            UiAction::ToggleFilters => next.show_filters = !next.show_filters,
            UiAction::SetStatusFilter(status) => next.filter.status = status,
            UiAction::SetStartDate(date) => next.filter.start_date = non_blank(date),
            UiAction::SetEndDate(date) => next.filter.end_date = non_blank(date),
            UiAction::ResetFilters => next.filter = InseminationFilter::default(),
            UiAction::Reset => next = UiState::default(),
        }

        Rc::new(next)
    }
}

/// Question/answer slot of the assistant tab.
///
/// Several questions may be in flight; whichever answer arrives last is the
/// one shown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssistantState {
    pub query: String,
    pub response: Option<String>,
    in_flight: usize,
}

impl AssistantState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Start a request for the current query. Returns the trimmed query, or
    /// None if there is nothing to ask.
    pub fn begin(&mut self) -> Option<String> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        let query = query.to_string();
        self.in_flight += 1;
        Some(query)
    }

    pub fn resolve(&mut self, answer: String) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.response = Some(answer);
    }

    /// Resolve with the server's answer, or the fixed apology on any failure
    pub fn resolve_result(&mut self, result: Result<AdviceResponse, String>) {
        let answer = match result {
            Ok(response) if !response.advice.trim().is_empty() => response.advice,
            _ => ADVISORY_FALLBACK.to_string(),
        };
        self.resolve(answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cow() -> Cow {
        Cow {
            id: "cow::a".to_string(),
            farmer_id: "farmer::1".to_string(),
            tag_number: "T-1".to_string(),
            name: "Lakshmi".to_string(),
            dob: "2020-05-01".to_string(),
            image: None,
        }
    }

    fn apply(state: UiState, actions: Vec<UiAction>) -> UiState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn test_cow_modal_modes() {
        let state = apply(UiState::default(), vec![UiAction::OpenNewCow]);
        assert!(state.cow_modal.is_open());
        assert!(state.cow_modal.editing().is_none());

        let state = apply(state, vec![UiAction::OpenEditCow(cow())]);
        assert_eq!(state.cow_modal.editing().map(|c| c.id.as_str()), Some("cow::a"));

        let state = apply(state, vec![UiAction::CloseCowModal]);
        assert!(!state.cow_modal.is_open());
    }

    #[test]
    fn test_insemination_modal_two_steps() {
        let state = apply(
            UiState::default(),
            vec![UiAction::OpenInseminationModal, UiAction::SetTagSearch("t-".to_string())],
        );
        assert!(state.insemination_modal.open);
        assert!(!state.insemination_modal.shows_detail_form());

        let state = apply(state, vec![UiAction::SelectCow("cow::a".to_string())]);
        assert!(state.insemination_modal.shows_detail_form());

        // reopening starts from the search step again
        let state = apply(
            state,
            vec![UiAction::CloseInseminationModal, UiAction::OpenInseminationModal],
        );
        assert_eq!(state.insemination_modal.selected_cow_id, None);
        assert_eq!(state.insemination_modal.tag_search, "");
    }

    #[test]
    fn test_filter_values_and_reset() {
        let state = apply(
            UiState::default(),
            vec![
                UiAction::ToggleFilters,
                UiAction::SetStatusFilter(StatusFilter::Pending),
                UiAction::SetStartDate("2024-01-15".to_string()),
                UiAction::SetEndDate("".to_string()),
            ],
        );
        assert!(state.show_filters);
        assert_eq!(state.filter.status, StatusFilter::Pending);
        assert_eq!(state.filter.start_date.as_deref(), Some("2024-01-15"));
        assert_eq!(state.filter.end_date, None);

        let state = apply(state, vec![UiAction::ResetFilters]);
        assert!(state.filter.is_empty());
        assert!(state.show_filters);
    }

    #[test]
    fn test_reset_after_logout() {
        let state = apply(
            UiState::default(),
            vec![UiAction::Navigate(AppView::Assistant), UiAction::OpenNewCow, UiAction::Reset],
        );
        assert_eq!(state, UiState::default());
    }

    #[test]
    fn test_assistant_last_answer_wins() {
        let mut assistant = AssistantState::default();
        assert_eq!(assistant.begin(), None);

        assistant.query = "first".to_string();
        assert_eq!(assistant.begin().as_deref(), Some("first"));
        assistant.query = " second ".to_string();
        assert_eq!(assistant.begin().as_deref(), Some("second"));
        assert!(assistant.is_loading());

        assistant.resolve("answer to second".to_string());
        assert!(assistant.is_loading());
        assistant.resolve("answer to first".to_string());

        assert!(!assistant.is_loading());
        assert_eq!(assistant.response.as_deref(), Some("answer to first"));
    }

    #[test]
    fn test_assistant_failure_shows_apology() {
        let mut assistant = AssistantState {
            query: "When is Gauri due?".to_string(),
            ..AssistantState::default()
        };

        assistant.begin();
        assistant.resolve_result(Err("Network error: connection refused".to_string()));
        assert_eq!(assistant.response.as_deref(), Some(ADVISORY_FALLBACK));
        assert!(!assistant.is_loading());

        assistant.begin();
        assistant.resolve_result(Ok(AdviceResponse {
            advice: "Check her in about two weeks.".to_string(),
        }));
        assert_eq!(assistant.response.as_deref(), Some("Check her in about two weeks."));
    }
}

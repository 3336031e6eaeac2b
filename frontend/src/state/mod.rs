pub mod herd_state;
pub mod login_form;
pub mod pull_gesture;
pub mod ui_state;

pub use herd_state::{HerdAction, HerdState};
pub use login_form::LoginForm;
pub use pull_gesture::PullGesture;
pub use ui_state::{AssistantState, CowModal, UiAction, UiState};

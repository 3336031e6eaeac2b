pub mod use_assistant;
pub mod use_herd;
pub mod use_session;

pub use use_assistant::{use_assistant, UseAssistantResult};
pub use use_herd::{use_herd, UseHerdResult};
pub use use_session::{use_session, UseSessionResult};

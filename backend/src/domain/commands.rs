//! Domain-level command and query types.
//! Services take these instead of the public DTOs from the `shared` crate;
//! the REST layer does the mapping.

pub mod session {
    /// Input for logging in. Registers the farmer on first login.
    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub mobile: String,
        pub farm_name: String,
    }
}

pub mod cows {
    use crate::domain::models::cow::Cow;

    /// Input for creating or editing a cow
    #[derive(Debug, Clone)]
    pub struct SaveCowCommand {
        pub tag_number: String,
        pub name: String,
        pub dob: String,
        /// Newly chosen image; None keeps the current one
        pub image: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct SaveCowResult {
        pub cow: Cow,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteCowResult {
        pub deleted_cow_id: String,
        pub removed_inseminations: usize,
        pub success_message: String,
    }
}

pub mod inseminations {
    use crate::domain::models::insemination::InseminationRecord;
    use shared::StatusFilter;

    #[derive(Debug, Clone)]
    pub struct CreateInseminationCommand {
        pub cow_id: String,
        pub date: String,
        pub doctor_name: String,
        pub bull_name: String,
        pub notes: Option<String>,
    }

    /// Criteria for listing records; blank bounds are ignored
    #[derive(Debug, Clone, Default)]
    pub struct InseminationListQuery {
        pub status: StatusFilter,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct InseminationResult {
        pub record: InseminationRecord,
        pub success_message: String,
    }
}

pub mod herd {
    use crate::domain::models::cow::Cow;
    use crate::domain::models::insemination::InseminationRecord;

    #[derive(Debug, Clone)]
    pub struct Pregnancy {
        pub cow: Cow,
        pub latest_confirmed: Option<InseminationRecord>,
    }

    #[derive(Debug, Clone)]
    pub struct Reminder {
        pub record: InseminationRecord,
        pub cow_name: String,
        pub days_since_insemination: i64,
    }
}

pub mod advisory {
    /// A question for the assistant together with the herd it is about
    #[derive(Debug, Clone)]
    pub struct AdviceQuery {
        pub query: String,
        pub cows: Vec<shared::Cow>,
        pub inseminations: Vec<shared::InseminationRecord>,
    }
}

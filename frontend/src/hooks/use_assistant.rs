use shared::{AdviceRequest, Cow, InseminationRecord};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::AssistantState;

#[derive(Clone, PartialEq)]
pub struct UseAssistantResult {
    pub state: AssistantState,
    pub on_query_change: Callback<String>,
    pub ask: Callback<()>,
}

/// Assistant question/answer slot. Every answer that arrives overwrites the
/// previous one, so with overlapping questions the slower answer is shown.
#[hook]
pub fn use_assistant(
    api_client: &ApiClient,
    cows: Vec<Cow>,
    records: Vec<InseminationRecord>,
) -> UseAssistantResult {
    let assistant = use_mut_ref(AssistantState::default);
    // The slot lives in a RefCell so late answers never write back a stale copy
    let rerender = use_force_update();

    let on_query_change = {
        let assistant = assistant.clone();
        let rerender = rerender.clone();
        Callback::from(move |query: String| {
            assistant.borrow_mut().query = query;
            rerender.force_update();
        })
    };

    let ask = {
        let api_client = api_client.clone();
        let assistant = assistant.clone();
        let rerender = rerender.clone();
        use_callback((cows, records), move |_: (), (cows, records)| {
            let Some(query) = assistant.borrow_mut().begin() else {
                return;
            };
            rerender.force_update();

            let request = AdviceRequest {
                query,
                cows: cows.clone(),
                inseminations: records.clone(),
            };
            let api_client = api_client.clone();
            let assistant = assistant.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                let result = api_client.get_advice(request).await;
                if let Err(e) = &result {
                    Logger::error_with_component("use_assistant", &format!("Advice request failed: {}", e));
                }
                assistant.borrow_mut().resolve_result(result);
                rerender.force_update();
            });
        })
    };

    let state = assistant.borrow().clone();
    UseAssistantResult {
        state,
        on_query_change,
        ask,
    }
}

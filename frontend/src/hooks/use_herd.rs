use gloo::timers::future::TimeoutFuture;
use shared::{Cow, InseminationRecord};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::{HerdAction, HerdState};

/// Pause before reading freshly loaded data on login and pull-to-refresh
const SETTLE_DELAY_MS: u32 = 800;

#[derive(Clone, PartialEq)]
pub struct UseHerdResult {
    pub state: HerdState,
    pub actions: UseHerdActions,
}

#[derive(Clone, PartialEq)]
pub struct UseHerdActions {
    /// Reload after the settle delay; the callback fires once loading is over
    pub refresh: Callback<Callback<()>>,
    /// Reload right away, used after every write
    pub reload: Callback<()>,
    pub delete_cow: Callback<Cow>,
    pub confirm_insemination: Callback<String>,
    pub delete_insemination: Callback<String>,
}

async fn load_herd(
    api_client: &ApiClient,
    farmer_id: &str,
) -> Result<(Vec<Cow>, Vec<InseminationRecord>), String> {
    let cows = api_client.list_cows(farmer_id).await?.cows;
    let records = api_client.list_inseminations(farmer_id).await?.records;
    Ok((cows, records))
}

fn apply_load(
    herd: &UseReducerDispatcher<HerdState>,
    result: Result<(Vec<Cow>, Vec<InseminationRecord>), String>,
) {
    match result {
        Ok((cows, records)) => {
            Logger::debug_with_component(
                "use_herd",
                &format!("Loaded {} cows and {} records", cows.len(), records.len()),
            );
            herd.dispatch(HerdAction::Loaded { cows, records });
        }
        Err(e) => {
            Logger::error_with_component("use_herd", &format!("Failed to load herd: {}", e));
            herd.dispatch(HerdAction::LoadFailed);
        }
    }
}

#[hook]
pub fn use_herd(api_client: &ApiClient, farmer_id: Option<String>) -> UseHerdResult {
    let herd = use_reducer(HerdState::default);

    let refresh = {
        let api_client = api_client.clone();
        let dispatcher = herd.dispatcher();
        use_callback(farmer_id.clone(), move |done: Callback<()>, farmer_id| {
            let Some(farmer_id) = farmer_id.clone() else {
                done.emit(());
                return;
            };
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();

            dispatcher.dispatch(HerdAction::Loading);
            spawn_local(async move {
                TimeoutFuture::new(SETTLE_DELAY_MS).await;
                let result = load_herd(&api_client, &farmer_id).await;
                apply_load(&dispatcher, result);
                done.emit(());
            });
        })
    };

    let reload = {
        let api_client = api_client.clone();
        let dispatcher = herd.dispatcher();
        use_callback(farmer_id.clone(), move |_: (), farmer_id| {
            let Some(farmer_id) = farmer_id.clone() else {
                return;
            };
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let result = load_herd(&api_client, &farmer_id).await;
                apply_load(&dispatcher, result);
            });
        })
    };

    // Load on login, clear on logout
    {
        let dispatcher = herd.dispatcher();
        let refresh = refresh.clone();
        use_effect_with(farmer_id.clone(), move |farmer_id| {
            if farmer_id.is_some() {
                refresh.emit(Callback::noop());
            } else {
                dispatcher.dispatch(HerdAction::Clear);
            }
            || ()
        });
    }

    let delete_cow = {
        let api_client = api_client.clone();
        let reload = reload.clone();
        use_callback(farmer_id.clone(), move |cow: Cow, farmer_id| {
            let Some(farmer_id) = farmer_id.clone() else {
                return;
            };
            if !gloo::dialogs::confirm(&format!("Delete {}? Its insemination records will be removed too.", cow.name)) {
                return;
            }
            let api_client = api_client.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api_client.delete_cow(&farmer_id, &cow.id).await {
                    Ok(response) => Logger::info_with_component(
                        "use_herd",
                        &format!(
                            "Deleted cow {} with {} records",
                            response.deleted_cow_id, response.removed_inseminations
                        ),
                    ),
                    Err(e) => Logger::error_with_component("use_herd", &format!("Failed to delete cow: {}", e)),
                }
                reload.emit(());
            });
        })
    };

    let confirm_insemination = {
        let api_client = api_client.clone();
        let reload = reload.clone();
        use_callback(farmer_id.clone(), move |record_id: String, farmer_id| {
            let Some(farmer_id) = farmer_id.clone() else {
                return;
            };
            let api_client = api_client.clone();
            let reload = reload.clone();
            spawn_local(async move {
                if let Err(e) = api_client.confirm_insemination(&farmer_id, &record_id).await {
                    Logger::error_with_component("use_herd", &format!("Failed to confirm record: {}", e));
                }
                reload.emit(());
            });
        })
    };

    let delete_insemination = {
        let api_client = api_client.clone();
        let reload = reload.clone();
        use_callback(farmer_id, move |record_id: String, farmer_id| {
            let Some(farmer_id) = farmer_id.clone() else {
                return;
            };
            if !gloo::dialogs::confirm("Delete this record?") {
                return;
            }
            let api_client = api_client.clone();
            let reload = reload.clone();
            spawn_local(async move {
                if let Err(e) = api_client.delete_insemination(&farmer_id, &record_id).await {
                    Logger::error_with_component("use_herd", &format!("Failed to delete record: {}", e));
                }
                reload.emit(());
            });
        })
    };

    UseHerdResult {
        state: (*herd).clone(),
        actions: UseHerdActions {
            refresh,
            reload,
            delete_cow,
            confirm_insemination,
            delete_insemination,
        },
    }
}

use shared::{Farmer, LoginRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct UseSessionResult {
    pub farmer: Option<Farmer>,
    /// True until the stored session has been checked
    pub restoring: bool,
    pub error: Option<String>,
    pub login: Callback<LoginRequest>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_session(api_client: &ApiClient) -> UseSessionResult {
    let farmer = use_state(|| Option::<Farmer>::None);
    let restoring = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    // Restore the session once on startup
    {
        let api_client = api_client.clone();
        let farmer = farmer.clone();
        let restoring = restoring.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_session().await {
                    Ok(restored) => farmer.set(restored),
                    Err(e) => Logger::warn_with_component("use_session", &format!("Failed to restore session: {}", e)),
                }
                restoring.set(false);
            });
            || ()
        });
    }

    let login = {
        let api_client = api_client.clone();
        let farmer = farmer.clone();
        let error = error.clone();
        use_callback((), move |request: LoginRequest, _| {
            let api_client = api_client.clone();
            let farmer = farmer.clone();
            let error = error.clone();
            spawn_local(async move {
                match api_client.login(request).await {
                    Ok(logged_in) => {
                        error.set(None);
                        farmer.set(logged_in);
                    }
                    Err(e) => {
                        Logger::error_with_component("use_session", &format!("Login failed: {}", e));
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    let logout = {
        let api_client = api_client.clone();
        let farmer = farmer.clone();
        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let farmer = farmer.clone();
            spawn_local(async move {
                if let Err(e) = api_client.logout().await {
                    Logger::error_with_component("use_session", &format!("Logout failed: {}", e));
                }
                farmer.set(None);
            });
        })
    };

    UseSessionResult {
        farmer: (*farmer).clone(),
        restoring: *restoring,
        error: (*error).clone(),
        login,
        logout,
    }
}

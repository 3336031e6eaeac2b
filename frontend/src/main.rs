use shared::{herd, AppView, Cow};
use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod state;

use components::assistant_panel::AssistantPanel;
use components::bottom_nav::BottomNav;
use components::cow_list::CowList;
use components::cow_modal::CowModalView;
use components::dashboard::Dashboard;
use components::header::Header;
use components::insemination_list::InseminationList;
use components::insemination_modal::InseminationModalView;
use components::login_screen::LoginScreen;
use components::pregnancy_list::PregnancyList;
use components::pull_to_refresh::PullToRefresh;
use hooks::{use_assistant, use_herd, use_session};
use services::api::ApiClient;
use state::{UiAction, UiState};

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let ui = use_reducer(UiState::default);
    let session = use_session(&api_client);
    let farmer_id = session.farmer.as_ref().map(|farmer| farmer.id.clone());
    let herd = use_herd(&api_client, farmer_id.clone());
    let assistant = use_assistant(&api_client, herd.state.cows.clone(), herd.state.records.clone());

    let on_logout = {
        let logout = session.logout.clone();
        let dispatch = ui.dispatcher();
        Callback::from(move |_| {
            logout.emit(());
            dispatch.dispatch(UiAction::Reset);
        })
    };

    if session.restoring {
        return html! { <div class="loading-screen">{"Loading..."}</div> };
    }

    let (Some(farmer), Some(farmer_id)) = (session.farmer.clone(), farmer_id) else {
        return html! { <LoginScreen on_login={session.login.clone()} error={session.error.clone()} /> };
    };

    let dispatch = ui.dispatcher();
    let on_navigate = {
        let dispatch = dispatch.clone();
        Callback::from(move |view: AppView| dispatch.dispatch(UiAction::Navigate(view)))
    };

    let view = if herd.state.loading && herd.state.cows.is_empty() && herd.state.records.is_empty() {
        html! { <div class="loading">{"Loading herd..."}</div> }
    } else {
        match ui.view {
            AppView::Dashboard => {
                let on_confirm_now = {
                    let dispatch = dispatch.clone();
                    Callback::from(move |_| dispatch.dispatch(UiAction::Navigate(AppView::Inseminations)))
                };
                html! { <Dashboard herd={herd.state.clone()} today={herd::today()} {on_confirm_now} /> }
            }
            AppView::Cows => {
                let on_add = {
                    let dispatch = dispatch.clone();
                    Callback::from(move |_| dispatch.dispatch(UiAction::OpenNewCow))
                };
                let on_edit = {
                    let dispatch = dispatch.clone();
                    Callback::from(move |cow: Cow| dispatch.dispatch(UiAction::OpenEditCow(cow)))
                };
                html! {
                    <CowList
                        cows={herd.state.cows.clone()}
                        {on_add}
                        {on_edit}
                        on_delete={herd.actions.delete_cow.clone()}
                    />
                }
            }
            AppView::Inseminations => html! {
                <InseminationList
                    herd={herd.state.clone()}
                    filter={ui.filter.clone()}
                    show_filters={ui.show_filters}
                    dispatch={dispatch.clone()}
                    on_confirm={herd.actions.confirm_insemination.clone()}
                    on_delete={herd.actions.delete_insemination.clone()}
                />
            },
            AppView::Pregnancies => html! { <PregnancyList pregnancies={herd.state.pregnancies()} /> },
            AppView::Assistant => html! { <AssistantPanel assistant={assistant.clone()} /> },
        }
    };

    let on_cow_saved = {
        let dispatch = dispatch.clone();
        let reload = herd.actions.reload.clone();
        Callback::from(move |_| {
            dispatch.dispatch(UiAction::CloseCowModal);
            reload.emit(());
        })
    };

    let on_cow_modal_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.dispatch(UiAction::CloseCowModal))
    };

    html! {
        <div class="app">
            <Header {farmer} {on_logout} />
            <main class="main-content">
                <PullToRefresh on_refresh={herd.actions.refresh.clone()}>
                    {view}
                </PullToRefresh>
            </main>
            <BottomNav active={ui.view} {on_navigate} />

            <CowModalView
                modal={ui.cow_modal.clone()}
                farmer_id={farmer_id.clone()}
                api_client={(*api_client).clone()}
                on_success={on_cow_saved}
                on_close={on_cow_modal_close}
            />
            <InseminationModalView
                modal={ui.insemination_modal.clone()}
                cows={herd.state.cows.clone()}
                {farmer_id}
                api_client={(*api_client).clone()}
                {dispatch}
                on_success={herd.actions.reload.clone()}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

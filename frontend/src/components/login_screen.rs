use shared::LoginRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::LoginForm;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<LoginRequest>,
    pub error: Option<String>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let form = use_state(LoginForm::default);

    let on_mobile_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.mobile = input.value();
            form.set(next);
        })
    };

    let on_farm_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.farm_name = input.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Both fields are required; a blank form sends nothing
            if let Some(request) = form.to_request() {
                on_login.emit(request);
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-card">
                <h1 class="login-title">{"🐄 CowManager"}</h1>
                <p class="login-subtitle">{"Insemination and pregnancy tracking for your herd"}</p>

                {if let Some(error) = &props.error {
                    html! { <div class="login-error">{error}</div> }
                } else {
                    html! {}
                }}

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="login-mobile">{"Mobile Number"}</label>
                        <input
                            id="login-mobile"
                            type="tel"
                            placeholder="Enter mobile number"
                            value={form.mobile.clone()}
                            oninput={on_mobile_input}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-farm-name">{"Farm Name"}</label>
                        <input
                            id="login-farm-name"
                            type="text"
                            placeholder="Enter farm name"
                            value={form.farm_name.clone()}
                            oninput={on_farm_name_input}
                            required=true
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">{"Login"}</button>
                </form>
            </div>
        </div>
    }
}

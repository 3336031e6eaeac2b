use shared::Farmer;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub farmer: Farmer,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="header">
            <div class="header-title">
                <h1>{props.farmer.farm_name.clone()}</h1>
                <span class="header-mobile">{props.farmer.mobile.clone()}</span>
            </div>
            <button class="btn btn-secondary header-logout" onclick={on_logout}>{"Logout"}</button>
        </header>
    }
}

use shared::AppView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BottomNavProps {
    pub active: AppView,
    pub on_navigate: Callback<AppView>,
}

fn icon(view: AppView) -> &'static str {
    match view {
        AppView::Dashboard => "🏠",
        AppView::Cows => "🐄",
        AppView::Inseminations => "💉",
        AppView::Pregnancies => "🤰",
        AppView::Assistant => "🤖",
    }
}

#[function_component(BottomNav)]
pub fn bottom_nav(props: &BottomNavProps) -> Html {
    html! {
        <nav class="bottom-nav">
            {for AppView::ALL.iter().map(|view| {
                let view = *view;
                let onclick = {
                    let on_navigate = props.on_navigate.clone();
                    Callback::from(move |_: MouseEvent| on_navigate.emit(view))
                };
                let class = classes!("nav-item", (view == props.active).then_some("active"));
                html! {
                    <button {class} {onclick}>
                        <span class="nav-icon">{icon(view)}</span>
                        <span class="nav-label">{view.nav_label()}</span>
                    </button>
                }
            })}
        </nav>
    }
}

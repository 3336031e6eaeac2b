use web_sys::Element;
use yew::prelude::*;

use crate::state::PullGesture;

#[derive(Properties, PartialEq)]
pub struct PullToRefreshProps {
    /// Starts a refresh; the inner callback must be emitted when it is done
    pub on_refresh: Callback<Callback<()>>,
    #[prop_or_default]
    pub children: Html,
}

fn first_touch_y(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| touch.client_y() as f64)
}

/// Scrollable container that triggers `on_refresh` when pulled down from the top
#[function_component(PullToRefresh)]
pub fn pull_to_refresh(props: &PullToRefreshProps) -> Html {
    let container = use_node_ref();
    // Touch events fire faster than renders, so the gesture lives outside state
    let gesture = use_mut_ref(PullGesture::default);
    let rerender = use_force_update();

    let on_touch_start = {
        let container = container.clone();
        let gesture = gesture.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(y) = first_touch_y(&e) else {
                return;
            };
            let scroll_top = container
                .cast::<Element>()
                .map(|element| element.scroll_top() as f64)
                .unwrap_or_default();
            gesture.borrow_mut().touch_start(scroll_top, y);
            rerender.force_update();
        })
    };

    let on_touch_move = {
        let gesture = gesture.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(y) = first_touch_y(&e) else {
                return;
            };
            let before = gesture.borrow().progress();
            let pulling = gesture.borrow_mut().touch_move(y);
            if pulling {
                e.prevent_default();
            }
            if gesture.borrow().progress() != before {
                rerender.force_update();
            }
        })
    };

    let on_touch_end = {
        let gesture = gesture.clone();
        let rerender = rerender.clone();
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: TouchEvent| {
            let start_refresh = gesture.borrow_mut().touch_end();
            rerender.force_update();

            if start_refresh {
                let gesture = gesture.clone();
                let rerender = rerender.clone();
                on_refresh.emit(Callback::from(move |_| {
                    gesture.borrow_mut().finish_refresh();
                    rerender.force_update();
                }));
            }
        })
    };

    let (height, refreshing, release_hint) = {
        let gesture = gesture.borrow();
        (
            gesture.indicator_height_rem(),
            gesture.is_refreshing(),
            gesture.show_release_hint(),
        )
    };

    html! {
        <div
            class="pull-to-refresh"
            ref={container}
            ontouchstart={on_touch_start}
            ontouchmove={on_touch_move}
            ontouchend={on_touch_end}
        >
            <div class="pull-indicator" style={format!("height: {}rem", height)}>
                {if refreshing {
                    html! { <span class="spinner">{"⟳"}</span> }
                } else if release_hint {
                    html! { <span class="pull-hint">{"Release to refresh"}</span> }
                } else if height > 0.0 {
                    html! { <span class="pull-hint">{"Pull to refresh"}</span> }
                } else {
                    html! {}
                }}
            </div>
            {props.children.clone()}
        </div>
    }
}

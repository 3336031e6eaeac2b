use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::hooks::UseAssistantResult;

#[derive(Properties, PartialEq)]
pub struct AssistantPanelProps {
    pub assistant: UseAssistantResult,
}

#[function_component(AssistantPanel)]
pub fn assistant_panel(props: &AssistantPanelProps) -> Html {
    let state = &props.assistant.state;

    let on_input = {
        let on_query_change = props.assistant.on_query_change.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_query_change.emit(textarea.value());
        })
    };

    let on_ask = {
        let ask = props.assistant.ask.clone();
        Callback::from(move |_: MouseEvent| ask.emit(()))
    };

    html! {
        <div class="assistant-panel">
            <div class="section-header">
                <h2>{"🤖 Farm Assistant"}</h2>
            </div>
            <p class="assistant-hint">{"Ask about breeding schedules, heat signs or herd health."}</p>

            <textarea
                class="assistant-query"
                rows="4"
                placeholder="Type your question..."
                value={state.query.clone()}
                oninput={on_input}
            />
            <button
                class="btn btn-primary"
                onclick={on_ask}
                disabled={state.query.trim().is_empty()}
            >
                {if state.is_loading() { "Thinking..." } else { "Ask" }}
            </button>

            {if let Some(response) = &state.response {
                html! {
                    <div class="assistant-response">
                        {for response.lines().map(|line| html! { <p>{line.to_string()}</p> })}
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

use shared::{herd, Cow, CreateInseminationRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::ui_state::InseminationModal;
use crate::state::{UiAction, UiState};

#[derive(Properties, PartialEq)]
pub struct InseminationModalViewProps {
    pub modal: InseminationModal,
    pub cows: Vec<Cow>,
    pub farmer_id: String,
    pub api_client: ApiClient,
    pub dispatch: UseReducerDispatcher<UiState>,
    pub on_success: Callback<()>,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct DetailFields {
    date: String,
    doctor_name: String,
    bull_name: String,
    notes: String,
}

impl DetailFields {
    fn missing_field(&self) -> Option<&'static str> {
        if self.date.trim().is_empty() {
            Some("Please enter the insemination date")
        } else if self.doctor_name.trim().is_empty() {
            Some("Please enter the doctor's name")
        } else if self.bull_name.trim().is_empty() {
            Some("Please enter the bull ID or name")
        } else {
            None
        }
    }

    fn to_request(&self, cow_id: &str) -> CreateInseminationRequest {
        let notes = self.notes.trim();

        CreateInseminationRequest {
            cow_id: cow_id.to_string(),
            date: self.date.trim().to_string(),
            doctor_name: self.doctor_name.trim().to_string(),
            bull_name: self.bull_name.trim().to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }
}

fn input_setter(
    fields: &UseStateHandle<DetailFields>,
    apply: fn(&mut DetailFields, String),
) -> Callback<InputEvent> {
    let fields = fields.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*fields).clone();
        apply(&mut next, input.value());
        fields.set(next);
    })
}

#[function_component(InseminationModalView)]
pub fn insemination_modal_view(props: &InseminationModalViewProps) -> Html {
    let fields = use_state(DetailFields::default);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    // Start every new record on today's date
    use_effect_with(props.modal.selected_cow_id.clone(), {
        let fields = fields.clone();
        let error_message = error_message.clone();
        move |_| {
            fields.set(DetailFields {
                date: herd::today().format("%Y-%m-%d").to_string(),
                ..DetailFields::default()
            });
            error_message.set(None);
            || ()
        }
    });

    let on_close = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(UiAction::CloseInseminationModal))
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    if !props.modal.open {
        return html! {};
    }

    let body = match props
        .modal
        .selected_cow_id
        .as_deref()
        .and_then(|id| herd::find_cow(&props.cows, id))
    {
        None => {
            let on_search = {
                let dispatch = props.dispatch.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    dispatch.dispatch(UiAction::SetTagSearch(input.value()));
                })
            };
            let matches = herd::search_by_tag(&props.cows, &props.modal.tag_search);

            html! {
                <div class="cow-search">
                    <input
                        type="text"
                        class="cow-search-input"
                        placeholder="Search by tag number"
                        value={props.modal.tag_search.clone()}
                        oninput={on_search}
                    />
                    {if matches.is_empty() {
                        html! { <p class="empty-state">{"No cows match this tag"}</p> }
                    } else {
                        html! {
                            <ul class="cow-search-results">
                                {for matches.iter().map(|cow| {
                                    let onclick = {
                                        let dispatch = props.dispatch.clone();
                                        let cow_id = cow.id.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            dispatch.dispatch(UiAction::SelectCow(cow_id.clone()))
                                        })
                                    };
                                    html! {
                                        <li key={cow.id.clone()} class="cow-search-item" {onclick}>
                                            <strong>{cow.tag_number.clone()}</strong>
                                            <span>{format!(" {}", cow.name)}</span>
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    }}
                </div>
            }
        }
        Some(cow) => {
            let on_change_cow = {
                let dispatch = props.dispatch.clone();
                Callback::from(move |_: MouseEvent| dispatch.dispatch(UiAction::ClearSelectedCow))
            };

            let on_date_change = {
                let fields = fields.clone();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut next = (*fields).clone();
                    next.date = input.value();
                    fields.set(next);
                })
            };

            let on_notes_input = {
                let fields = fields.clone();
                Callback::from(move |e: InputEvent| {
                    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                    let mut next = (*fields).clone();
                    next.notes = textarea.value();
                    fields.set(next);
                })
            };

            let on_submit = {
                let fields = fields.clone();
                let is_submitting = is_submitting.clone();
                let error_message = error_message.clone();
                let cow_id = cow.id.clone();
                let farmer_id = props.farmer_id.clone();
                let api_client = props.api_client.clone();
                let dispatch = props.dispatch.clone();
                let on_success = props.on_success.clone();

                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();

                    if let Some(message) = fields.missing_field() {
                        error_message.set(Some(message.to_string()));
                        return;
                    }
                    let request = fields.to_request(&cow_id);

                    is_submitting.set(true);
                    error_message.set(None);

                    let farmer_id = farmer_id.clone();
                    let api_client = api_client.clone();
                    let is_submitting = is_submitting.clone();
                    let error_message = error_message.clone();
                    let dispatch = dispatch.clone();
                    let on_success = on_success.clone();

                    spawn_local(async move {
                        let result = api_client.create_insemination(&farmer_id, request).await;
                        is_submitting.set(false);
                        match result {
                            Ok(response) => {
                                Logger::info_with_component("insemination_modal", &response.success_message);
                                dispatch.dispatch(UiAction::CloseInseminationModal);
                                on_success.emit(());
                            }
                            Err(e) => error_message.set(Some(format!("Failed to save record: {}", e))),
                        }
                    });
                })
            };

            html! {
                <form class="modal-form" onsubmit={on_submit}>
                    <div class="selected-cow">
                        <span>{format!("{} ({})", cow.name, cow.tag_number)}</span>
                        <button type="button" class="btn btn-small" onclick={on_change_cow}>{"Change"}</button>
                    </div>
                    <div class="form-group">
                        <label for="insemination-date">{"Date"}</label>
                        <input
                            id="insemination-date"
                            type="date"
                            value={fields.date.clone()}
                            onchange={on_date_change}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="insemination-doctor">{"Doctor Name"}</label>
                        <input
                            id="insemination-doctor"
                            type="text"
                            value={fields.doctor_name.clone()}
                            oninput={input_setter(&fields, |f, v| f.doctor_name = v)}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="insemination-bull">{"Bull ID / Name"}</label>
                        <input
                            id="insemination-bull"
                            type="text"
                            value={fields.bull_name.clone()}
                            oninput={input_setter(&fields, |f, v| f.bull_name = v)}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="insemination-notes">{"Notes"}</label>
                        <textarea
                            id="insemination-notes"
                            rows="3"
                            value={fields.notes.clone()}
                            oninput={on_notes_input}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting { "Saving..." } else { "Save Record" }}
                        </button>
                    </div>
                </form>
            }
        }
    };

    html! {
        <div class="modal-backdrop" onclick={on_close.clone()}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{"New Insemination"}</h3>
                    <button type="button" class="modal-close" onclick={on_close}>{"✕"}</button>
                </div>

                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="modal-error">{error}</div> }
                } else {
                    html! {}
                }}

                {body}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_form_required_fields() {
        let mut fields = DetailFields::default();
        assert_eq!(fields.missing_field(), Some("Please enter the insemination date"));

        fields.date = "2024-06-01".to_string();
        assert_eq!(fields.missing_field(), Some("Please enter the doctor's name"));

        fields.doctor_name = "Dr. Rao".to_string();
        assert_eq!(fields.missing_field(), Some("Please enter the bull ID or name"));

        fields.bull_name = "JER-7".to_string();
        assert_eq!(fields.missing_field(), None);
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let fields = DetailFields {
            date: "2024-06-01".to_string(),
            doctor_name: " Dr. Rao ".to_string(),
            bull_name: "JER-7".to_string(),
            notes: "   ".to_string(),
        };
        let request = fields.to_request("cow::a");
        assert_eq!(request.cow_id, "cow::a");
        assert_eq!(request.doctor_name, "Dr. Rao");
        assert_eq!(request.notes, None);
    }
}

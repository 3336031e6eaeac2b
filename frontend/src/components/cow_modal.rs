use gloo::file::futures::read_as_data_url;
use gloo::file::File;
use shared::SaveCowRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::CowModal;

#[derive(Properties, PartialEq)]
pub struct CowModalViewProps {
    pub modal: CowModal,
    pub farmer_id: String,
    pub api_client: ApiClient,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct CowFormFields {
    tag_number: String,
    name: String,
    dob: String,
}

impl CowFormFields {
    fn missing_field(&self) -> Option<&'static str> {
        if self.tag_number.trim().is_empty() {
            Some("Please enter the tag number")
        } else if self.name.trim().is_empty() {
            Some("Please enter the cow's name")
        } else if self.dob.trim().is_empty() {
            Some("Please enter the date of birth")
        } else {
            None
        }
    }

    /// `image` is the data URL of a newly picked photo, if any
    fn to_request(&self, image: Option<String>) -> SaveCowRequest {
        SaveCowRequest {
            tag_number: self.tag_number.trim().to_string(),
            name: self.name.trim().to_string(),
            dob: self.dob.trim().to_string(),
            image,
        }
    }
}

#[function_component(CowModalView)]
pub fn cow_modal_view(props: &CowModalViewProps) -> Html {
    let fields = use_state(CowFormFields::default);
    let image = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    // Fill the form whenever the modal opens
    use_effect_with(props.modal.clone(), {
        let fields = fields.clone();
        let image = image.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        move |modal| {
            let initial = match modal.editing() {
                Some(cow) => CowFormFields {
                    tag_number: cow.tag_number.clone(),
                    name: cow.name.clone(),
                    dob: cow.dob.clone(),
                },
                None => CowFormFields::default(),
            };
            fields.set(initial);
            image.set(None);
            is_submitting.set(false);
            error_message.set(None);
            || ()
        }
    });

    let on_tag_input = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.tag_number = input.value();
            fields.set(next);
        })
    };

    let on_name_input = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.name = input.value();
            fields.set(next);
        })
    };

    let on_dob_change = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.dob = input.value();
            fields.set(next);
        })
    };

    let on_image_change = {
        let image = image.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let image = image.clone();
            spawn_local(async move {
                let file = File::from(file);
                match read_as_data_url(&file).await {
                    Ok(data_url) => image.set(Some(data_url)),
                    // The save goes ahead with the current or a placeholder image
                    Err(e) => Logger::warn_with_component("cow_modal", &format!("Failed to read image: {}", e)),
                }
            });
        })
    };

    let on_submit = {
        let fields = fields.clone();
        let image = image.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let editing_id = props.modal.editing().map(|cow| cow.id.clone());
        let farmer_id = props.farmer_id.clone();
        let api_client = props.api_client.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(message) = fields.missing_field() {
                error_message.set(Some(message.to_string()));
                return;
            }

            is_submitting.set(true);
            error_message.set(None);

            let request = fields.to_request((*image).clone());
            let editing_id = editing_id.clone();
            let farmer_id = farmer_id.clone();
            let api_client = api_client.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                let result = match &editing_id {
                    Some(cow_id) => api_client.update_cow(&farmer_id, cow_id, request).await,
                    None => api_client.create_cow(&farmer_id, request).await,
                };

                is_submitting.set(false);
                match result {
                    Ok(response) => {
                        Logger::info_with_component("cow_modal", &response.success_message);
                        on_success.emit(());
                    }
                    Err(e) => error_message.set(Some(format!("Failed to save cow: {}", e))),
                }
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.modal.is_open() {
        return html! {};
    }

    let title = if props.modal.editing().is_some() { "Edit Cow" } else { "Register Cow" };
    let preview = (*image)
        .clone()
        .or_else(|| props.modal.editing().and_then(|cow| cow.image.clone()));

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{title}</h3>

                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="modal-error">{error}</div> }
                } else {
                    html! {}
                }}

                <form class="modal-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="cow-tag">{"Tag Number"}</label>
                        <input
                            id="cow-tag"
                            type="text"
                            value={fields.tag_number.clone()}
                            oninput={on_tag_input}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="cow-name">{"Name"}</label>
                        <input
                            id="cow-name"
                            type="text"
                            value={fields.name.clone()}
                            oninput={on_name_input}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="cow-dob">{"Date of Birth"}</label>
                        <input
                            id="cow-dob"
                            type="date"
                            value={fields.dob.clone()}
                            onchange={on_dob_change}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="cow-image">{"Photo"}</label>
                        <input
                            id="cow-image"
                            type="file"
                            accept="image/*"
                            onchange={on_image_change}
                            disabled={*is_submitting}
                        />
                        {if let Some(src) = preview {
                            html! { <img class="cow-image-preview" src={src} alt="Cow photo" /> }
                        } else {
                            html! {}
                        }}
                    </div>

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting { "Saving..." } else { "Save" }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={*is_submitting}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

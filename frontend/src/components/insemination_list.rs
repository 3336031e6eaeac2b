use shared::{InseminationFilter, StatusFilter};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::state::herd_state::{or_not_available, HerdState};
use crate::state::{UiAction, UiState};

#[derive(Properties, PartialEq)]
pub struct InseminationListProps {
    pub herd: HerdState,
    pub filter: InseminationFilter,
    pub show_filters: bool,
    pub dispatch: UseReducerDispatcher<UiState>,
    pub on_confirm: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(InseminationList)]
pub fn insemination_list(props: &InseminationListProps) -> Html {
    let records = props.herd.filtered_records(&props.filter);

    let on_add = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(UiAction::OpenInseminationModal))
    };

    let on_toggle_filters = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(UiAction::ToggleFilters))
    };

    let on_status_change = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(status) = select.value().parse::<StatusFilter>() {
                dispatch.dispatch(UiAction::SetStatusFilter(status));
            }
        })
    };

    let on_start_change = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.dispatch(UiAction::SetStartDate(input.value()));
        })
    };

    let on_end_change = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.dispatch(UiAction::SetEndDate(input.value()));
        })
    };

    let on_reset = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(UiAction::ResetFilters))
    };

    html! {
        <div class="insemination-list">
            <div class="section-header">
                <h2>{"Inseminations"}</h2>
                <div class="section-actions">
                    <button class="btn btn-secondary" onclick={on_toggle_filters}>{"Filter"}</button>
                    <button class="btn btn-primary" onclick={on_add}>{"+ New"}</button>
                </div>
            </div>

            {if props.show_filters {
                html! {
                    <div class="filter-panel">
                        <div class="form-group">
                            <label for="filter-status">{"Status"}</label>
                            <select id="filter-status" onchange={on_status_change}>
                                {for StatusFilter::ALL.iter().map(|status| html! {
                                    <option
                                        value={status.as_str()}
                                        selected={*status == props.filter.status}
                                    >
                                        {status.as_str()}
                                    </option>
                                })}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="filter-start">{"From"}</label>
                            <input
                                id="filter-start"
                                type="date"
                                value={props.filter.start_date.clone().unwrap_or_default()}
                                onchange={on_start_change}
                            />
                        </div>
                        <div class="form-group">
                            <label for="filter-end">{"To"}</label>
                            <input
                                id="filter-end"
                                type="date"
                                value={props.filter.end_date.clone().unwrap_or_default()}
                                onchange={on_end_change}
                            />
                        </div>
                        <button class="btn btn-small" onclick={on_reset}>{"Reset"}</button>
                    </div>
                }
            } else {
                html! {}
            }}

            {if records.is_empty() {
                html! { <p class="empty-state">{"No records found"}</p> }
            } else {
                html! {
                    <div class="record-cards">
                        {for records.iter().map(|record| {
                            let cow = props.herd.find_cow(&record.cow_id);
                            let on_confirm = {
                                let on_confirm = props.on_confirm.clone();
                                let id = record.id.clone();
                                Callback::from(move |_: MouseEvent| on_confirm.emit(id.clone()))
                            };
                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                let id = record.id.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                            };
                            let badge = classes!(
                                "status-badge",
                                if record.is_confirmed { "confirmed" } else { "pending" }
                            );

                            html! {
                                <div class="record-card" key={record.id.clone()}>
                                    <div class="record-header">
                                        <span class="record-reference">{format!("Record #{}", record.short_reference())}</span>
                                        <span class={badge}>{record.status_label()}</span>
                                    </div>
                                    <div class="record-cow">
                                        <strong>{props.herd.record_cow_name(&record.cow_id)}</strong>
                                        {if let Some(cow) = cow {
                                            html! { <span class="cow-tag">{format!(" ({})", cow.tag_number)}</span> }
                                        } else {
                                            html! {}
                                        }}
                                    </div>
                                    <p class="record-date">{format!("Date: {}", record.date)}</p>
                                    <p class="record-doctor">{format!("Doctor: {}", or_not_available(&record.doctor_name))}</p>
                                    <p class="record-bull">{format!("Bull: {}", or_not_available(&record.bull_name))}</p>
                                    {if let Some(notes) = record.notes.as_deref().filter(|n| !n.trim().is_empty()) {
                                        html! { <p class="record-notes">{notes.to_string()}</p> }
                                    } else {
                                        html! {}
                                    }}
                                    <div class="record-actions">
                                        {if !record.is_confirmed {
                                            html! { <button class="btn btn-small btn-success" onclick={on_confirm}>{"Confirm Success"}</button> }
                                        } else {
                                            html! {}
                                        }}
                                        <button class="btn btn-small btn-danger" onclick={on_delete}>{"Delete"}</button>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            }}
        </div>
    }
}

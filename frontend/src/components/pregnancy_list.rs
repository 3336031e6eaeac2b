use shared::PregnancyEntry;
use yew::prelude::*;

use crate::state::herd_state::or_not_available;

#[derive(Properties, PartialEq)]
pub struct PregnancyListProps {
    pub pregnancies: Vec<PregnancyEntry>,
}

#[function_component(PregnancyList)]
pub fn pregnancy_list(props: &PregnancyListProps) -> Html {
    html! {
        <div class="pregnancy-list">
            <div class="section-header">
                <h2>{"Pregnancies"}</h2>
            </div>

            {if props.pregnancies.is_empty() {
                html! { <p class="empty-state">{"No confirmed pregnancies yet"}</p> }
            } else {
                html! {
                    <div class="pregnancy-cards">
                        {for props.pregnancies.iter().map(|entry| html! {
                            <div class="pregnancy-card" key={entry.cow.id.clone()}>
                                <h3>{entry.cow.name.clone()}</h3>
                                <p class="cow-tag">{format!("Tag: {}", entry.cow.tag_number)}</p>
                                {if let Some(record) = &entry.latest_confirmed {
                                    html! {
                                        <div class="pregnancy-details">
                                            <p>{format!("Inseminated: {}", record.date)}</p>
                                            <p>{format!("Doctor: {}", or_not_available(&record.doctor_name))}</p>
                                            <p>{format!("Bull: {}", or_not_available(&record.bull_name))}</p>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }}
                            </div>
                        })}
                    </div>
                }
            }}
        </div>
    }
}

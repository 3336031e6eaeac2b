use chrono::NaiveDate;
use yew::prelude::*;

use crate::state::herd_state::{HerdState, DAILY_TIP};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub herd: HerdState,
    pub today: NaiveDate,
    /// Jump to the inseminations tab from a reminder card
    pub on_confirm_now: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let reminders = props.herd.reminders(props.today);
    let recent = props.herd.recent_records();

    let on_confirm_now = {
        let on_confirm_now = props.on_confirm_now.clone();
        Callback::from(move |_: MouseEvent| on_confirm_now.emit(()))
    };

    html! {
        <div class="dashboard">
            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-label">{"Total Cows"}</span>
                    <span class="stat-value">{props.herd.total_cows()}</span>
                </div>
                <div class="stat-card stat-card-pregnant">
                    <span class="stat-label">{"Pregnant"}</span>
                    <span class="stat-value">{props.herd.pregnant_cows().len()}</span>
                </div>
            </div>

            {if !reminders.is_empty() {
                html! {
                    <section class="heat-check-alerts">
                        <h3>{"⚠️ Heat Check Needed"}</h3>
                        {for reminders.iter().map(|reminder| html! {
                            <div class="alert-card" key={reminder.record.id.clone()}>
                                <div class="alert-text">
                                    <strong>{reminder.cow_name.clone()}</strong>
                                    <span>{format!("{} days since insemination", reminder.days_since_insemination)}</span>
                                </div>
                                <button class="btn btn-small" onclick={on_confirm_now.clone()}>{"Confirm Now"}</button>
                            </div>
                        })}
                    </section>
                }
            } else {
                html! {}
            }}

            <section class="daily-tip">
                <h3>{"💡 Daily Tip"}</h3>
                <p>{DAILY_TIP}</p>
            </section>

            <section class="recent-activity">
                <h3>{"Recent Activity"}</h3>
                {if recent.is_empty() {
                    html! { <p class="empty-state">{"No inseminations recorded yet"}</p> }
                } else {
                    html! {
                        <ul class="activity-list">
                            {for recent.iter().map(|record| {
                                let badge = classes!(
                                    "status-badge",
                                    if record.is_confirmed { "confirmed" } else { "pending" }
                                );
                                html! {
                                    <li class="activity-item" key={record.id.clone()}>
                                        <span class="activity-cow">{props.herd.dashboard_cow_name(&record.cow_id)}</span>
                                        <span class="activity-date">{record.date.clone()}</span>
                                        <span class={badge}>{record.status_label()}</span>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                }}
            </section>
        </div>
    }
}

use shared::Cow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CowListProps {
    pub cows: Vec<Cow>,
    pub on_add: Callback<()>,
    pub on_edit: Callback<Cow>,
    pub on_delete: Callback<Cow>,
}

#[function_component(CowList)]
pub fn cow_list(props: &CowListProps) -> Html {
    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <div class="cow-list">
            <div class="section-header">
                <h2>{"My Cows"}</h2>
                <button class="btn btn-primary" onclick={on_add}>{"+ Add Cow"}</button>
            </div>

            {if props.cows.is_empty() {
                html! { <p class="empty-state">{"No cows registered yet"}</p> }
            } else {
                html! {
                    <div class="cow-cards">
                        {for props.cows.iter().map(|cow| {
                            let on_edit = {
                                let on_edit = props.on_edit.clone();
                                let cow = cow.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(cow.clone()))
                            };
                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                let cow = cow.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(cow.clone()))
                            };

                            html! {
                                <div class="cow-card" key={cow.id.clone()}>
                                    {if let Some(image) = &cow.image {
                                        html! { <img class="cow-image" src={image.clone()} alt={cow.name.clone()} /> }
                                    } else {
                                        html! { <div class="cow-image cow-image-empty">{"🐄"}</div> }
                                    }}
                                    <div class="cow-details">
                                        <h3>{cow.name.clone()}</h3>
                                        <p class="cow-tag">{format!("Tag: {}", cow.tag_number)}</p>
                                        <p class="cow-dob">{format!("Born: {}", cow.dob)}</p>
                                    </div>
                                    <div class="cow-actions">
                                        <button class="btn btn-small" onclick={on_edit}>{"Edit"}</button>
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

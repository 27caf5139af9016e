//! Recommended technologies grouped by category.

use leptos::prelude::*;

use crate::registry::props;

#[component]
pub fn TechStackDisplay(data: props::TechStackProps) -> impl IntoView {
    let groups: Vec<_> = data
        .grouped()
        .into_iter()
        .map(|(category, techs)| {
            let items = techs
                .into_iter()
                .map(|tech| {
                    let alternatives = tech
                        .alternatives
                        .as_ref()
                        .filter(|alts| !alts.is_empty())
                        .map(|alts| format!("Alt: {}", alts.join(", ")));
                    view! {
                        <div class="tambo-tech-stack__item">
                            <strong>{tech.name.clone()}</strong>
                            <p>{tech.rationale.clone()}</p>
                            {alternatives.map(|text| view! { <span class="tambo-tech-stack__alts">{text}</span> })}
                        </div>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="tambo-tech-stack__category">
                    <span class="tambo-tech-stack__category-label">{category.heading()}</span>
                    {items}
                </div>
            }
        })
        .collect();

    view! {
        <div class="tambo-tech-stack">
            <div class="tambo-tech-stack__header">
                <h4>"Recommended Stack"</h4>
                <p class="tambo-card__desc">{data.use_case.clone()}</p>
            </div>
            {groups}
            {data.architecture_note.clone().map(|note| view! { <p class="tambo-tech-stack__note">{note}</p> })}
        </div>
    }
}

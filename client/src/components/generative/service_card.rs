//! Grid of recommended service offerings.

use leptos::prelude::*;

use crate::registry::props;

#[component]
pub fn ServiceCard(data: props::ServiceCardProps) -> impl IntoView {
    let props::ServiceCardProps { services, intro_text } = data;

    view! {
        <div class="tambo-service-card">
            {intro_text.map(|text| view! { <p class="tambo-service-card__intro">{text}</p> })}
            <div class="tambo-service-card__grid">
                {services
                    .into_iter()
                    .map(|service| {
                        view! {
                            <article class="tambo-card" data-service-id=service.id>
                                <h4 class="tambo-card__title">{service.title}</h4>
                                <p class="tambo-card__desc">{service.description}</p>
                                <ul class="tambo-card__list">
                                    {service.deliverables.into_iter().map(|d| view! { <li>{d}</li> }).collect::<Vec<_>>()}
                                </ul>
                                <div class="tambo-card__tags">
                                    {service
                                        .tags
                                        .into_iter()
                                        .map(|tag| view! { <span class="tambo-tag">{tag}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                                {service
                                    .relevance_note
                                    .map(|note| view! { <p class="tambo-card__relevance">{note}</p> })}
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

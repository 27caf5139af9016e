//! Past engagements with headline metrics.

use leptos::prelude::*;

use crate::registry::props;

#[component]
pub fn CaseStudyViewer(data: props::CaseStudyProps) -> impl IntoView {
    let props::CaseStudyProps { studies, context_note } = data;

    view! {
        <div class="tambo-case-study">
            {context_note.map(|note| view! { <p class="tambo-case-study__context">{note}</p> })}
            {studies.into_iter().map(study_card).collect::<Vec<_>>()}
        </div>
    }
}

fn study_card(study: props::CaseStudy) -> impl IntoView {
    let technologies = study.technologies.filter(|t| !t.is_empty()).map(|techs| {
        view! {
            <div class="tambo-card__tags">
                {techs.into_iter().map(|t| view! { <span class="tambo-tag">{t}</span> }).collect::<Vec<_>>()}
            </div>
        }
    });

    view! {
        <article class="tambo-card">
            <span class="tambo-card__category">{study.category}</span>
            <h4 class="tambo-card__title">{study.title}</h4>
            <p class="tambo-card__desc">{study.description}</p>
            <div class="tambo-card__metrics">
                {study
                    .metrics
                    .into_iter()
                    .map(|m| {
                        view! {
                            <div class="tambo-metric">
                                <span class="tambo-metric__value">{m.value}</span>
                                <span class="tambo-metric__label">{m.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {technologies}
            {study.duration.map(|d| view! { <span class="tambo-card__duration">{d}</span> })}
        </article>
    }
}

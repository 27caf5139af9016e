//! Phased delivery plan with a vertical connector.

use leptos::prelude::*;

use crate::registry::props;

#[component]
pub fn TimelineEstimator(data: props::TimelineProps) -> impl IntoView {
    let props::TimelineProps { project_name, total_duration, phases, note } = data;
    let last = phases.len().saturating_sub(1);

    view! {
        <div class="tambo-timeline">
            <div class="tambo-timeline__header">
                <h4>{project_name}</h4>
                <span class="tambo-tag">{total_duration}</span>
            </div>
            <div class="tambo-timeline__phases">
                {phases
                    .into_iter()
                    .enumerate()
                    .map(|(i, phase)| {
                        let active = phase.is_current.unwrap_or(false);
                        view! {
                            <div class="tambo-timeline__phase" class:tambo-timeline__phase--active=active>
                                <div class="tambo-timeline__connector">
                                    <div class="tambo-timeline__dot"></div>
                                    {(i < last).then(|| view! { <div class="tambo-timeline__line"></div> })}
                                </div>
                                <div class="tambo-timeline__content">
                                    <div class="tambo-timeline__phase-header">
                                        <strong>{phase.name}</strong>
                                        <span class="tambo-timeline__duration">{phase.duration}</span>
                                    </div>
                                    <p>{phase.description}</p>
                                    <ul class="tambo-card__list">
                                        {phase
                                            .deliverables
                                            .into_iter()
                                            .map(|d| view! { <li>{d}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {note.map(|text| view! { <p class="tambo-timeline__note">{text}</p> })}
        </div>
    }
}

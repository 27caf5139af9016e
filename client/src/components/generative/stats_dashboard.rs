//! KPI cards with optional trend badges.

use leptos::prelude::*;

use crate::registry::props;

#[component]
pub fn StatsDashboard(data: props::StatsDashboardProps) -> impl IntoView {
    let props::StatsDashboardProps { title, stats, subtitle, note } = data;
    if stats.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="tambo-stats">
            <div class="tambo-stats__header">
                <h4>{title}</h4>
                {subtitle.map(|text| view! { <p class="tambo-card__desc">{text}</p> })}
            </div>
            <div class="tambo-stats__grid">{stats.into_iter().map(stat_card).collect::<Vec<_>>()}</div>
            {note.map(|text| view! { <p class="tambo-stats__note">{text}</p> })}
        </div>
    }
        .into_any()
}

fn stat_card(stat: props::Stat) -> impl IntoView {
    let trend = stat.trend.unwrap_or_default();
    let change = stat.change.map(|change| {
        let arrow = match trend {
            props::Trend::Up => Some(
                view! {
                    <svg viewBox="0 0 12 12" fill="currentColor">
                        <path d="M6 2L10 7H2L6 2Z"></path>
                    </svg>
                }
                    .into_any(),
            ),
            props::Trend::Down => Some(
                view! {
                    <svg viewBox="0 0 12 12" fill="currentColor">
                        <path d="M6 10L2 5H10L6 10Z"></path>
                    </svg>
                }
                    .into_any(),
            ),
            props::Trend::Neutral => None,
        };
        view! {
            <span class=format!("tambo-stats__change tambo-stats__change--{}", trend.modifier())>{arrow} {change}</span>
        }
    });

    view! {
        <div class="tambo-stats__card">
            <span class="tambo-stats__label">{stat.label}</span>
            <div class="tambo-stats__value-row">
                <span class="tambo-stats__value">{stat.value}</span>
                {change}
            </div>
            {stat.description.map(|text| view! { <span class="tambo-stats__desc">{text}</span> })}
        </div>
    }
}

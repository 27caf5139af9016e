//! Investment vs. projected impact summary.

use leptos::prelude::*;

use crate::registry::props;
use crate::util::format::{format_usd, format_usd_range};

#[component]
pub fn RoiCalculator(data: props::RoiCalculatorProps) -> impl IntoView {
    let props::RoiCalculatorProps { project_type, estimated_investment, projected_savings, assumptions, disclaimer } =
        data;
    let investment = format_usd_range(estimated_investment.low, estimated_investment.high);
    let annual = format_usd(projected_savings.annual);

    view! {
        <div class="tambo-roi">
            <div class="tambo-roi__header">
                <span class="tambo-tag">{project_type.label()}</span>
                <h4>"ROI Estimate"</h4>
            </div>

            <div class="tambo-roi__grid">
                <div class="tambo-roi__metric">
                    <span class="tambo-metric__label">"Investment Range"</span>
                    <span class="tambo-metric__value">{investment}</span>
                </div>
                <div class="tambo-roi__metric">
                    <span class="tambo-metric__label">"Projected Annual Impact"</span>
                    <span class="tambo-metric__value tambo-metric__value--accent">{annual}</span>
                </div>
                <div class="tambo-roi__metric">
                    <span class="tambo-metric__label">"Time to Value"</span>
                    <span class="tambo-metric__value">{projected_savings.time_to_value}</span>
                </div>
            </div>

            <div class="tambo-roi__assumptions">
                <strong>"Assumptions:"</strong>
                <ul>{assumptions.into_iter().map(|a| view! { <li>{a}</li> }).collect::<Vec<_>>()}</ul>
            </div>

            {disclaimer.map(|text| view! { <p class="tambo-roi__disclaimer">{text}</p> })}
        </div>
    }
}

//! Bar, line, pie and donut charts drawn with plain HTML and inline SVG.
//!
//! All geometry comes from `util::chart_math`; these views only place the
//! computed rows, points and slice paths.

use leptos::prelude::*;

use crate::registry::props::{self, ChartType, DataPoint};
use crate::util::chart_math::{LINE_HEIGHT, LINE_WIDTH, PIE_CENTER, bar_rows, line_geometry, pie_geometry};

const ACCENT: &str = "#C8A45C";

#[component]
pub fn ChartDisplay(data: props::ChartProps) -> impl IntoView {
    let props::ChartProps { chart_type, title, data, subtitle, value_prefix, value_suffix, note } = data;
    if data.is_empty() {
        return ().into_any();
    }

    let prefix = value_prefix.as_deref();
    let suffix = value_suffix.as_deref();
    let body = match chart_type {
        ChartType::Bar | ChartType::HorizontalBar => bar_chart(&data, prefix, suffix),
        ChartType::Line => line_chart(&data, prefix, suffix),
        ChartType::Pie => pie_chart(&data, false, prefix, suffix),
        ChartType::Donut => pie_chart(&data, true, prefix, suffix),
    };

    view! {
        <div class="tambo-chart">
            <div class="tambo-chart__header">
                <h4>{title}</h4>
                {subtitle.map(|text| view! { <p class="tambo-card__desc">{text}</p> })}
            </div>
            <div class="tambo-chart__body">{body}</div>
            {note.map(|text| view! { <p class="tambo-chart__note">{text}</p> })}
        </div>
    }
        .into_any()
}

fn bar_chart(data: &[DataPoint], prefix: Option<&str>, suffix: Option<&str>) -> AnyView {
    let rows = bar_rows(data, prefix, suffix)
        .into_iter()
        .map(|row| {
            view! {
                <div class="tambo-chart__bar-row">
                    <span class="tambo-chart__bar-label">{row.label}</span>
                    <div class="tambo-chart__bar-track">
                        <div
                            class="tambo-chart__bar-fill"
                            style=format!("width: {}%; background: {}", row.pct, row.color)
                        ></div>
                    </div>
                    <span class="tambo-chart__bar-value">{row.value_text}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();
    view! { <div class="tambo-chart__bars">{rows}</div> }.into_any()
}

fn line_chart(data: &[DataPoint], prefix: Option<&str>, suffix: Option<&str>) -> AnyView {
    let geometry = line_geometry(data, prefix, suffix);
    let axis_y = geometry.baseline_y + 16.0;
    let markers = geometry
        .points
        .into_iter()
        .map(|p| {
            view! {
                <g>
                    <circle cx={p.x.to_string()} cy={p.y.to_string()} r="3.5" fill="#0A0F1C" stroke=ACCENT stroke-width="2"></circle>
                    <text x={p.x.to_string()} y={axis_y.to_string()} text-anchor="middle" class="tambo-chart__axis-label">
                        {p.label}
                    </text>
                    <text x={p.x.to_string()} y={(p.y - 10.0).to_string()} text-anchor="middle" class="tambo-chart__point-label">
                        {p.value_text}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            viewBox=format!("0 0 {LINE_WIDTH} {LINE_HEIGHT}")
            class="tambo-chart__svg"
            preserveAspectRatio="xMidYMid meet"
        >
            <defs>
                <linearGradient id="lineGrad" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0%" stop-color=ACCENT stop-opacity="0.3"></stop>
                    <stop offset="100%" stop-color=ACCENT stop-opacity="0"></stop>
                </linearGradient>
            </defs>
            <path d=geometry.area_path fill="url(#lineGrad)"></path>
            <path
                d=geometry.line_path
                fill="none"
                stroke=ACCENT
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            ></path>
            {markers}
        </svg>
    }
        .into_any()
}

fn pie_chart(data: &[DataPoint], donut: bool, prefix: Option<&str>, suffix: Option<&str>) -> AnyView {
    let geometry = pie_geometry(data, donut, prefix, suffix);
    let paths = geometry
        .slices
        .iter()
        .map(|s| {
            view! { <path d=s.path.clone() fill=s.color.clone() stroke="rgba(10,15,28,0.9)" stroke-width="1.5"></path> }
        })
        .collect::<Vec<_>>();
    let legend = geometry
        .slices
        .into_iter()
        .map(|s| {
            view! {
                <div class="tambo-chart__legend-item">
                    <span class="tambo-chart__legend-dot" style=format!("background: {}", s.color)></span>
                    <span class="tambo-chart__legend-label">{s.label}</span>
                    <span class="tambo-chart__legend-value">{format!("{}%", s.pct)}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();
    let center = geometry.center_text.map(|text| {
        view! {
            <text x={PIE_CENTER.to_string()} y={(PIE_CENTER + 4.0).to_string()} text-anchor="middle" class="tambo-chart__donut-center">
                {text}
            </text>
        }
    });

    view! {
        <div class="tambo-chart__pie-wrap">
            <svg
                viewBox="0 0 200 200"
                class="tambo-chart__svg tambo-chart__svg--pie"
                preserveAspectRatio="xMidYMid meet"
            >
                {paths}
                {center}
            </svg>
            <div class="tambo-chart__legend">{legend}</div>
        </div>
    }
        .into_any()
}

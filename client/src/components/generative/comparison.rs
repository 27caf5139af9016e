//! Side-by-side option table with check/cross glyphs.

use leptos::prelude::*;

use crate::registry::props;
use crate::util::format::{Cell, classify_cell};

const CHECK_PATH: &str = "M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z";
const CROSS_PATH: &str = "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z";

#[component]
pub fn ComparisonTable(data: props::ComparisonProps) -> impl IntoView {
    let props::ComparisonProps { title, row_labels, columns, note } = data;
    if columns.is_empty() {
        return ().into_any();
    }

    let header = columns
        .iter()
        .map(|col| {
            let hl = col.is_highlighted();
            view! {
                <th class="tambo-comparison__col-header" class:tambo-comparison__col-header--hl=hl>
                    <span>{col.header.clone()}</span>
                    {col.subheader.clone().map(|sub| view! { <small>{sub}</small> })}
                    {hl.then(|| view! { <span class="tambo-comparison__badge">"Recommended"</span> })}
                </th>
            }
        })
        .collect::<Vec<_>>();

    let rows = row_labels
        .into_iter()
        .enumerate()
        .map(|(ri, label)| {
            let cells = columns
                .iter()
                .map(|col| {
                    let cell = classify_cell(col.values.get(ri).map(String::as_str));
                    view! {
                        <td class="tambo-comparison__cell" class:tambo-comparison__cell--hl=col.is_highlighted()>
                            {cell_view(cell)}
                        </td>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <tr>
                    <td class="tambo-comparison__row-label">{label}</td>
                    {cells}
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="tambo-comparison">
            <h4 class="tambo-comparison__title">{title}</h4>
            <div class="tambo-comparison__scroll">
                <table class="tambo-comparison__table">
                    <thead>
                        <tr>
                            <th class="tambo-comparison__corner"></th>
                            {header}
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            {note.map(|text| view! { <p class="tambo-comparison__note">{text}</p> })}
        </div>
    }
        .into_any()
}

fn cell_view(cell: Cell) -> AnyView {
    match cell {
        Cell::Check => view! {
            <svg class="tambo-comparison__icon tambo-comparison__icon--check" viewBox="0 0 20 20" fill="currentColor">
                <path fill-rule="evenodd" d=CHECK_PATH clip-rule="evenodd"></path>
            </svg>
        }
            .into_any(),
        Cell::Cross => view! {
            <svg class="tambo-comparison__icon tambo-comparison__icon--cross" viewBox="0 0 20 20" fill="currentColor">
                <path fill-rule="evenodd" d=CROSS_PATH clip-rule="evenodd"></path>
            </svg>
        }
            .into_any(),
        Cell::Empty => "-".into_any(),
        Cell::Text(text) => text.into_any(),
    }
}

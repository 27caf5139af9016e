//! One thread entry in the assistant panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The render plan is computed by `state::panel::render_plan`; this view only
//! maps markdown nodes to elements and hands component blocks to the
//! generative renderers. No assistant text is ever injected as raw HTML.

use leptos::prelude::*;

use crate::components::generative::render_component;
use crate::net::types::Message;
use crate::registry::Registry;
use crate::state::panel::{RenderBlock, render_plan};
use crate::util::markdown::{MdBlock, MdInline};

/// Render a message, or nothing when it has no renderable blocks.
#[component]
pub fn MessageView(message: Message) -> impl IntoView {
    let plan = render_plan(&message, &Registry::builtin());
    if plan.is_empty() {
        return ().into_any();
    }
    let class = format!("tambo-message tambo-message--{}", message.role.as_str());

    view! {
        <div class=class>
            {plan.into_iter().map(render_block).collect::<Vec<_>>()}
        </div>
    }
        .into_any()
}

fn render_block(block: RenderBlock) -> AnyView {
    match block {
        RenderBlock::Markdown(blocks) => view! {
            <div class="tambo-message__text">{blocks.into_iter().map(markdown_block).collect::<Vec<_>>()}</div>
        }
            .into_any(),
        RenderBlock::Component(props) => view! { <div class="tambo-component-wrapper">{render_component(props)}</div> }
            .into_any(),
    }
}

fn markdown_block(block: MdBlock) -> AnyView {
    match block {
        MdBlock::Paragraph(inlines) => view! { <p>{inline_nodes(inlines)}</p> }.into_any(),
        MdBlock::List(items) => view! {
            <ul>{items.into_iter().map(|item| view! { <li>{inline_nodes(item)}</li> }).collect::<Vec<_>>()}</ul>
        }
            .into_any(),
    }
}

fn inline_nodes(inlines: Vec<MdInline>) -> Vec<AnyView> {
    inlines
        .into_iter()
        .map(|node| match node {
            MdInline::Text(text) => text.into_any(),
            MdInline::Bold(text) => view! { <strong>{text}</strong> }.into_any(),
            MdInline::Italic(text) => view! { <em>{text}</em> }.into_any(),
            MdInline::Code(text) => view! { <code>{text}</code> }.into_any(),
            MdInline::Link { text, href } => view! {
                <a href=href target="_blank" rel="noopener noreferrer">
                    {text}
                </a>
            }
                .into_any(),
        })
        .collect()
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::assistant_panel::AssistantPanel;
use crate::pages::home::HomePage;
use crate::state::bus::{Signal, SignalBus};
use crate::state::page::PageState;
use crate::state::panel::AssistantState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="ES Consulting builds custom, end-to-end AI systems. Senior engineers only."
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page, assistant and bus contexts, relays page-raised
/// `Signal::Open` to the panel, and mounts the single route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let assistant = RwSignal::new(AssistantState::default());
    let page = RwSignal::new(PageState::default());
    let bus = SignalBus::new();

    provide_context(assistant);
    provide_context(page);
    provide_context(bus.clone());

    // A query opens and submits; a bare open only shows the panel.
    let relay_bus = bus.clone();
    let relay = bus.subscribe(move |signal| {
        if let Signal::Open { query } = signal {
            match query {
                Some(query) => relay_bus.publish(&Signal::SubmitQuery { query: query.clone() }),
                None => assistant.update(AssistantState::show),
            }
        }
    });
    on_cleanup(move || bus.unsubscribe(relay));

    view! {
        <Title text="ES Consulting | Custom AI Solutions"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <AssistantPanel/>
    }
}

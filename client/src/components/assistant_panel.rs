//! Floating assistant panel: trigger, thread, suggestions and input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `RwSignal<AssistantState>`. Queries raised on
//! the page arrive as `Signal::SubmitQuery` over the `SignalBus`, are staged
//! into the input, and an effect fires the staged submit exactly once. Each
//! submit runs one assistant turn on `spawn_local`; replies are appended as
//! they arrive and the pending flag clears on success or failure.

use leptos::prelude::*;

use crate::components::message_view::MessageView;
use crate::state::bus::{Signal, SignalBus};
use crate::state::panel::{AssistantState, KeyAction, SUGGESTION_SUBMIT_DELAY_MS, SUGGESTIONS, key_action};

#[cfg(feature = "hydrate")]
use crate::net::assistant::{HttpTransport, TurnContext, run_turn};
#[cfg(feature = "hydrate")]
use crate::net::types::Message;
#[cfg(feature = "hydrate")]
use crate::registry::Registry;
#[cfg(feature = "hydrate")]
use crate::state::session::SYSTEM_INSTRUCTIONS;
#[cfg(feature = "hydrate")]
use crate::tools::{BrowserPage, ToolCatalog};
#[cfg(feature = "hydrate")]
use crate::util::storage::SessionStorage;

/// Run one assistant turn for `text` in the background.
fn dispatch_turn(assistant: RwSignal<AssistantState>, text: String) {
    #[cfg(feature = "hydrate")]
    {
        let mut user_key = String::new();
        assistant.update_untracked(|s| user_key = s.ensure_user_key(&SessionStorage));

        leptos::task::spawn_local(async move {
            let host = BrowserPage;
            let ctx = TurnContext {
                user_key: &user_key,
                system_instructions: SYSTEM_INSTRUCTIONS,
                registry: Registry::builtin(),
                tools: ToolCatalog::builtin(),
                host: &host,
            };
            let transport = HttpTransport::default();
            let mut thread_id = assistant.with_untracked(|s| s.thread_id.clone());
            let mut on_messages = |batch: Vec<Message>| assistant.update(|s| s.append_replies(batch));

            if let Err(e) = run_turn(&transport, &ctx, &mut thread_id, &text, &mut on_messages).await {
                log::warn!("assistant turn failed: {e}");
            }
            assistant.update(|s| {
                s.thread_id = thread_id;
                s.finish_submit();
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (assistant, text);
    }
}

/// Submit whatever is in the input line, if allowed.
fn submit_input(assistant: RwSignal<AssistantState>) {
    let mut sent = None;
    assistant.update(|s| sent = s.begin_submit());
    if let Some(text) = sent {
        dispatch_turn(assistant, text);
    }
}

#[component]
pub fn AssistantPanel() -> impl IntoView {
    let assistant = expect_context::<RwSignal<AssistantState>>();
    let bus = expect_context::<SignalBus>();
    let thread_ref = NodeRef::<leptos::html::Div>::new();

    let subscription = bus.subscribe(move |signal| {
        if let Signal::SubmitQuery { query } = signal {
            assistant.update(|s| s.open_with(Some(query.clone())));
        }
    });
    on_cleanup(move || bus.unsubscribe(subscription));

    // Fire a staged query once the input holds it and nothing is in flight.
    Effect::new(move || {
        let ready = assistant.with(|s| !s.pending && s.staged.as_deref().is_some_and(|q| q == s.input));
        if !ready {
            return;
        }
        let mut sent = None;
        assistant.update(|s| sent = s.take_staged_submit());
        if let Some(text) = sent {
            dispatch_turn(assistant, text);
        }
    });

    Effect::new(move || {
        assistant.with(|s| (s.messages.len(), s.pending));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = thread_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        let open = assistant.with_untracked(|s| s.open);
        match key_action(&ev.key(), ev.ctrl_key(), ev.meta_key(), open) {
            KeyAction::Toggle => {
                ev.prevent_default();
                assistant.update(AssistantState::toggle);
            }
            KeyAction::Close => assistant.update(AssistantState::close),
            KeyAction::Ignore => {}
        }
    });

    let on_suggestion = move |text: &'static str| {
        assistant.update(|s| s.set_input(text));
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(SUGGESTION_SUBMIT_DELAY_MS, move || submit_input(assistant)).forget();
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = SUGGESTION_SUBMIT_DELAY_MS;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_input(assistant);
    };

    let is_open = move || assistant.with(|s| s.open);
    let pending = move || assistant.with(|s| s.pending);
    let empty_thread = move || assistant.with(AssistantState::is_empty_thread);
    let can_send = move || assistant.with(|s| !s.pending && !s.input.trim().is_empty());

    view! {
        <button
            class="tambo-trigger"
            class:tambo-trigger--hidden=is_open
            aria-label="Open AI Assistant"
            on:click=move |_| assistant.update(AssistantState::show)
        >
            <svg
                class="tambo-trigger__icon"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <path d="M12 2a7 7 0 0 1 7 7c0 3-1.5 5-3 6.5V18a2 2 0 0 1-2 2h-4a2 2 0 0 1-2-2v-2.5C6.5 14 5 12 5 9a7 7 0 0 1 7-7z"></path>
                <line x1="9" y1="22" x2="15" y2="22"></line>
                <circle cx="12" cy="9" r="2" fill="currentColor" opacity="0.5"></circle>
            </svg>
            <span class="tambo-trigger__pulse"></span>
        </button>

        <div
            class="tambo-panel__backdrop"
            class:is-visible=is_open
            on:click=move |_| assistant.update(AssistantState::close)
        ></div>

        <div class="tambo-panel" class:is-open=is_open role="dialog" aria-label="AI Assistant">
            <div class="tambo-panel__header">
                <div class="tambo-panel__title-row">
                    <span class="tambo-panel__dot"></span>
                    <span class="tambo-panel__title">"ES AI Assistant"</span>
                </div>
                <button
                    class="tambo-panel__close"
                    aria-label="Close"
                    on:click=move |_| assistant.update(AssistantState::close)
                >
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                        <line x1="18" y1="6" x2="6" y2="18"></line>
                        <line x1="6" y1="6" x2="18" y2="18"></line>
                    </svg>
                </button>
            </div>

            <div class="tambo-thread" node_ref=thread_ref>
                {move || empty_thread().then(welcome_card)}
                {move || {
                    assistant
                        .with(|s| s.visible_messages().cloned().collect::<Vec<_>>())
                        .into_iter()
                        .map(|message| view! { <MessageView message=message/> })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    pending()
                        .then(|| {
                            view! {
                                <div class="tambo-message tambo-message--assistant">
                                    <div class="tambo-streaming-indicator">
                                        <span></span>
                                        <span></span>
                                        <span></span>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>

            {move || {
                empty_thread()
                    .then(|| {
                        view! {
                            <div class="tambo-suggestions">
                                {SUGGESTIONS
                                    .iter()
                                    .map(|&text| {
                                        view! {
                                            <button class="tambo-suggestion-chip" on:click=move |_| on_suggestion(text)>
                                                {text}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
            }}

            <form class="tambo-input-area" on:submit=on_submit>
                <div class="tambo-input-wrapper">
                    <input
                        class="tambo-input-field"
                        type="text"
                        placeholder="Ask about our AI services..."
                        disabled=pending
                        prop:value=move || assistant.with(|s| s.input.clone())
                        on:input=move |ev| assistant.update(|s| s.set_input(&event_target_value(&ev)))
                    />
                    <button class="tambo-input-send" type="submit" aria-label="Send" disabled=move || !can_send()>
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                            <line x1="22" y1="2" x2="11" y2="13"></line>
                            <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                        </svg>
                    </button>
                </div>
                <div class="tambo-input-hint">
                    <kbd>"Ctrl"</kbd>
                    "+"
                    <kbd>"K"</kbd>
                    " to toggle"
                </div>
            </form>
        </div>
    }
}

fn welcome_card() -> impl IntoView {
    view! {
        <div class="tambo-welcome">
            <div class="tambo-welcome__icon">
                <svg viewBox="0 0 48 48" fill="none" stroke="currentColor" stroke-width="1.5">
                    <circle cx="24" cy="24" r="18" stroke-dasharray="4 4" opacity="0.3"></circle>
                    <circle cx="24" cy="24" r="8"></circle>
                    <circle cx="24" cy="24" r="2" fill="currentColor"></circle>
                </svg>
            </div>
            <h3>"Ask us anything about AI"</h3>
            <p>
                "I can show you charts, comparisons, dashboards, services, case studies, timelines, and more, all rendered as interactive components."
            </p>
        </div>
    }
}

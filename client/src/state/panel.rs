//! Assistant panel view-model.
//!
//! DESIGN
//! ======
//! One plain struct owns everything the panel shows: visibility, the input
//! line, the pending flag, the staged query and the thread. Components hold
//! it in an `RwSignal` and call these transitions; the transitions never
//! touch the DOM or the network, so the open/stage/submit rules are tested
//! directly.
//!
//! Staging exists because an opened-with-query panel must submit exactly
//! once: the query is written into the input and marked staged, and
//! [`AssistantState::take_staged_submit`] fires only when the input still
//! matches and nothing is in flight.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::net::types::{ContentBlock, Message, Role};
use crate::registry::{ComponentProps, Registry};
use crate::state::session::{KeyValueStore, SYSTEM_INSTRUCTIONS, session_user_key};
use crate::util::markdown::{MdBlock, parse_markdown};

/// Starter prompts shown on an empty thread.
pub const SUGGESTIONS: [&str; 6] = [
    "What AI services do you offer?",
    "Show me a chart of AI market growth",
    "Compare GPT-4 vs Claude vs Gemini",
    "What's the ROI of AI?",
    "Show me AI adoption stats",
    "I'd like to discuss a project",
];

/// Delay between a suggestion chip filling the input and its submit.
pub const SUGGESTION_SUBMIT_DELAY_MS: u32 = 50;

/// Global keyboard outcome for the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Toggle,
    Close,
    Ignore,
}

/// Ctrl/Cmd+K toggles from anywhere; Escape closes an open panel. The key
/// match is exact, so Ctrl+Shift+K (`"K"`) is left to the browser.
#[must_use]
pub fn key_action(key: &str, ctrl: bool, meta: bool, open: bool) -> KeyAction {
    if (ctrl || meta) && key == "k" {
        KeyAction::Toggle
    } else if key == "Escape" && open {
        KeyAction::Close
    } else {
        KeyAction::Ignore
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantState {
    pub open: bool,
    pub input: String,
    pub pending: bool,
    pub staged: Option<String>,
    pub messages: Vec<Message>,
    pub thread_id: Option<String>,
    /// Session token, fixed for the life of this state once read.
    pub user_key: Option<String>,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self {
            open: false,
            input: String::new(),
            pending: false,
            staged: None,
            messages: vec![Message::local(Role::System, vec![ContentBlock::Text(SYSTEM_INSTRUCTIONS.to_owned())])],
            thread_id: None,
            user_key: None,
        }
    }
}

impl AssistantState {
    pub fn show(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn set_input(&mut self, value: &str) {
        value.clone_into(&mut self.input);
    }

    /// Open the panel and stage `query` unless it is already staged. A query
    /// staged while a submit is in flight fires once that submit finishes.
    pub fn open_with(&mut self, query: Option<String>) {
        self.open = true;
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return;
        };
        if self.staged.as_deref() == Some(query.as_str()) {
            return;
        }
        self.input.clone_from(&query);
        self.staged = Some(query);
    }

    /// Fire the staged query if the input still holds it and nothing is
    /// pending. Returns the text to send.
    pub fn take_staged_submit(&mut self) -> Option<String> {
        let staged = self.staged.as_deref()?;
        if self.pending || staged != self.input {
            return None;
        }
        self.staged = None;
        self.begin_submit()
    }

    /// Start a submit from the input line. No-op when blank or pending.
    /// On success the user's message is echoed into the thread.
    pub fn begin_submit(&mut self) -> Option<String> {
        let text = self.input.trim().to_owned();
        if text.is_empty() || self.pending {
            return None;
        }
        self.pending = true;
        self.input.clear();
        self.messages.push(Message::local(Role::User, vec![ContentBlock::Text(text.clone())]));
        Some(text)
    }

    /// The session token for every turn. Read from `store` on first use and
    /// kept here, so a store that drops writes cannot rotate it.
    pub fn ensure_user_key(&mut self, store: &impl KeyValueStore) -> String {
        self.user_key.get_or_insert_with(|| session_user_key(store)).clone()
    }

    pub fn append_replies(&mut self, replies: Vec<Message>) {
        self.messages.extend(replies);
    }

    /// Clear the in-flight flag after success or failure.
    pub fn finish_submit(&mut self) {
        self.pending = false;
    }

    pub fn visible_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role != Role::System)
    }

    /// Welcome card and suggestions show only on an empty thread.
    #[must_use]
    pub fn is_empty_thread(&self) -> bool {
        self.visible_messages().next().is_none()
    }
}

// =============================================================================
// RENDER PLAN
// =============================================================================

/// What the message view draws for one content block.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderBlock {
    Markdown(Vec<MdBlock>),
    Component(ComponentProps),
}

/// Renderable blocks of `message`, in order. Empty for system messages and
/// for messages whose blocks all resolve to nothing.
#[must_use]
pub fn render_plan(message: &Message, registry: &Registry) -> Vec<RenderBlock> {
    if message.role == Role::System {
        return Vec::new();
    }
    message
        .content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text(text) => {
                let blocks = parse_markdown(text);
                (!blocks.is_empty()).then_some(RenderBlock::Markdown(blocks))
            }
            ContentBlock::ComponentRef { name, props } => registry.resolve(name, props).map(RenderBlock::Component),
            ContentBlock::ToolEvent(_) | ContentBlock::Unknown => None,
        })
        .collect()
}

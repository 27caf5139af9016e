//! Hosted assistant client: advance request, transport seam and tool loop.
//!
//! ARCHITECTURE
//! ============
//! One user turn is a sequence of `POST {base}/threads/advance` calls. The
//! first carries the user's text; while the latest reply asks for tools,
//! the client runs them locally and advances again with their results.
//! Replies are handed to the caller as they arrive so the thread fills in
//! delivery order.
//!
//! The transport is a trait so the loop runs against a scripted mock in
//! tests and against `gloo-net` in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{Message, OutgoingBlock, OutgoingMessage};
use crate::registry::Registry;
use crate::state::session::current_page_context;
use crate::tools::{PageHost, ToolCatalog, pick_visible_section};

/// Tool-result advances allowed per user turn.
pub const MAX_TOOL_ROUNDS: usize = 5;

const DEFAULT_BASE_URL: &str = "/api/assistant";

/// Base URL for assistant calls; the same-origin proxy unless overridden at
/// build time.
#[must_use]
pub fn assistant_base_url() -> &'static str {
    option_env!("ASSISTANT_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

#[must_use]
pub fn advance_url(base: &str) -> String {
    format!("{}/threads/advance", base.trim_end_matches('/'))
}

/// Failures of one assistant turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("assistant request failed: {0}")]
    Transport(String),

    #[error("assistant returned status {status}")]
    Status { status: u16, body: String },

    #[error("assistant response parse failed: {0}")]
    Decode(String),

    #[error("assistant still requested tools after {0} rounds")]
    ToolLoopLimit(usize),
}

// =============================================================================
// WIRE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisedComponent {
    pub name: String,
    pub description: String,
    pub props_schema: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisedTool {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    pub output_schema: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub current_page: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceRequest {
    pub user_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    pub system_instructions: String,
    pub context: RequestContext,
    pub components: Vec<AdvertisedComponent>,
    pub tools: Vec<AdvertisedTool>,
    pub message: OutgoingMessage,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceResponse {
    pub thread_id: String,
    #[serde(default)]
    pub messages: Vec<Value>,
}

#[must_use]
pub fn advertised_components(registry: &Registry) -> Vec<AdvertisedComponent> {
    registry
        .descriptors()
        .iter()
        .map(|d| AdvertisedComponent {
            name: d.name.to_owned(),
            description: d.description.to_owned(),
            props_schema: (d.schema)(),
        })
        .collect()
}

#[must_use]
pub fn advertised_tools(catalog: &ToolCatalog) -> Vec<AdvertisedTool> {
    catalog
        .descriptors()
        .iter()
        .map(|t| AdvertisedTool {
            name: t.name.to_owned(),
            description: t.description.to_owned(),
            input_schema: (t.input_schema)(),
            output_schema: (t.output_schema)(),
        })
        .collect()
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Sends one advance request.
#[async_trait::async_trait(?Send)]
pub trait AssistantTransport {
    async fn advance(&self, request: &AdvanceRequest) -> Result<AdvanceResponse, SessionError>;
}

/// `gloo-net` transport against [`assistant_base_url`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(assistant_base_url())
    }
}

impl HttpTransport {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.to_owned() }
    }
}

#[async_trait::async_trait(?Send)]
impl AssistantTransport for HttpTransport {
    async fn advance(&self, request: &AdvanceRequest) -> Result<AdvanceResponse, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&advance_url(&self.base_url))
                .json(request)
                .map_err(|e| SessionError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SessionError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(SessionError::Status { status: resp.status(), body });
            }
            resp.json::<AdvanceResponse>().await.map_err(|e| SessionError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &self.base_url);
            Err(SessionError::Transport("assistant transport is browser-only".into()))
        }
    }
}

// =============================================================================
// TURN
// =============================================================================

/// Everything a turn needs besides the transport.
pub struct TurnContext<'a> {
    pub user_key: &'a str,
    pub system_instructions: &'a str,
    pub registry: Registry,
    pub tools: ToolCatalog,
    pub host: &'a dyn PageHost,
}

impl TurnContext<'_> {
    fn request(&self, thread_id: Option<String>, message: OutgoingMessage) -> AdvanceRequest {
        let section = pick_visible_section(&self.host.section_rects(), self.host.viewport_height());
        AdvanceRequest {
            user_key: self.user_key.to_owned(),
            thread_id,
            system_instructions: self.system_instructions.to_owned(),
            context: RequestContext { current_page: current_page_context(&section) },
            components: advertised_components(&self.registry),
            tools: advertised_tools(&self.tools),
            message,
        }
    }
}

/// Run one user turn to completion.
///
/// `thread_id` is updated from every response so a failed turn still
/// continues the same thread next time. Displayable replies go to
/// `on_messages` in delivery order.
///
/// # Errors
///
/// Transport, status and decode failures end the turn immediately.
/// [`SessionError::ToolLoopLimit`] is returned when the assistant still asks
/// for tools after [`MAX_TOOL_ROUNDS`] result rounds.
pub async fn run_turn(
    transport: &dyn AssistantTransport,
    ctx: &TurnContext<'_>,
    thread_id: &mut Option<String>,
    text: &str,
    on_messages: &mut dyn FnMut(Vec<Message>),
) -> Result<(), SessionError> {
    let mut outgoing = OutgoingMessage::user_text(text);
    let mut rounds = 0;

    loop {
        let request = ctx.request(thread_id.clone(), outgoing);
        let response = transport.advance(&request).await?;
        *thread_id = Some(response.thread_id);

        let messages: Vec<Message> = response.messages.iter().filter_map(Message::from_wire).collect();
        let calls: Vec<(String, String, Value)> = messages
            .last()
            .map(|last| {
                last.tool_uses()
                    .into_iter()
                    .map(|(id, name, input)| (id.to_owned(), name.to_owned(), input.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let displayable: Vec<Message> = messages.into_iter().filter(Message::has_displayable_content).collect();
        if !displayable.is_empty() {
            on_messages(displayable);
        }

        if calls.is_empty() {
            return Ok(());
        }
        if rounds == MAX_TOOL_ROUNDS {
            log::warn!("assistant: tool loop stopped after {rounds} rounds");
            return Err(SessionError::ToolLoopLimit(rounds));
        }
        rounds += 1;
        log::debug!("assistant: tool round {rounds} with {} call(s)", calls.len());
        let results: Vec<OutgoingBlock> =
            calls.iter().map(|(id, name, input)| ctx.tools.run(ctx.host, id, name, input)).collect();
        outgoing = OutgoingMessage::tool_results(results);
    }
}

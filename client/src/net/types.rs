//! Assistant wire types and content ingestion.
//!
//! DESIGN
//! ======
//! The hosted assistant's message content is loosely shaped: a string, a
//! single object, or an array mixing typed blocks, bare strings and
//! `{content}` objects. [`Message::from_wire`] normalises all of it into the
//! closed [`ContentBlock`] enum once, so nothing downstream inspects raw
//! JSON except the registry decoding component props.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
            Self::Tool => "tool",
        }
    }
}

/// Tool traffic carried inside a message. Never rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolEvent {
    Use { id: String, name: String, input: Value },
    Result { tool_use_id: String, content: String, is_error: bool },
}

/// One normalised unit of message content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(String),
    ComponentRef { name: String, props: Value },
    ToolEvent(ToolEvent),
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

fn non_blank(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).filter(|s| !s.trim().is_empty()).map(str::to_owned)
}

fn str_field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| value.get(*k).and_then(Value::as_str))
}

/// `{componentName, props}` (or `{name, props}`) as a component reference.
fn component_ref(value: &Value) -> Option<ContentBlock> {
    let name = str_field(value, &["componentName", "name"])?;
    let props = value.get("props").cloned().unwrap_or(Value::Object(serde_json::Map::new()));
    Some(ContentBlock::ComponentRef { name: name.to_owned(), props })
}

fn ingest_block(block: &Value) -> ContentBlock {
    if let Some(text) = block.as_str() {
        return if text.trim().is_empty() { ContentBlock::Unknown } else { ContentBlock::Text(text.to_owned()) };
    }
    match block.get("type").and_then(Value::as_str) {
        Some("text") => {
            return non_blank(block.get("text")).map_or(ContentBlock::Unknown, ContentBlock::Text);
        }
        Some("component") => {
            return component_ref(block).unwrap_or(ContentBlock::Unknown);
        }
        Some("tool_use") => {
            let id = str_field(block, &["id"]).unwrap_or_default().to_owned();
            let name = str_field(block, &["name"]).unwrap_or_default().to_owned();
            let input = block.get("input").cloned().unwrap_or(Value::Null);
            return ContentBlock::ToolEvent(ToolEvent::Use { id, name, input });
        }
        Some("tool_result") => {
            let tool_use_id = str_field(block, &["toolUseId", "tool_use_id"]).unwrap_or_default().to_owned();
            let content = match block.get("content") {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            };
            let is_error = block.get("isError").and_then(Value::as_bool).unwrap_or(false);
            return ContentBlock::ToolEvent(ToolEvent::Result { tool_use_id, content, is_error });
        }
        _ => {}
    }
    non_blank(block.get("content")).map_or(ContentBlock::Unknown, ContentBlock::Text)
}

/// Normalise raw `content` into blocks. Blank text is dropped.
#[must_use]
pub fn ingest_content(content: &Value) -> Vec<ContentBlock> {
    match content {
        Value::String(s) if !s.trim().is_empty() => vec![ContentBlock::Text(s.clone())],
        Value::Array(blocks) => blocks.iter().map(ingest_block).collect(),
        Value::Object(_) => non_blank(content.get("text"))
            .or_else(|| non_blank(content.get("content")))
            .map(ContentBlock::Text)
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

impl Message {
    /// Build a local message with a fresh id.
    #[must_use]
    pub fn local(role: Role, content: Vec<ContentBlock>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content }
    }

    /// Ingest one raw message. Returns `None` when the role is missing or
    /// unrecognised.
    #[must_use]
    pub fn from_wire(raw: &Value) -> Option<Self> {
        let role: Role = serde_json::from_value(raw.get("role")?.clone()).ok()?;
        let id = str_field(raw, &["id"]).map_or_else(|| uuid::Uuid::new_v4().to_string(), str::to_owned);

        let mut content = Vec::new();
        if let Some(component) = raw.get("component").and_then(component_ref) {
            content.push(component);
        }
        content.extend(raw.get("content").map(ingest_content).unwrap_or_default());
        Some(Self { id, role, content })
    }

    /// Non-system message carrying at least one text or component block.
    #[must_use]
    pub fn has_displayable_content(&self) -> bool {
        self.role != Role::System
            && self.content.iter().any(|b| matches!(b, ContentBlock::Text(_) | ContentBlock::ComponentRef { .. }))
    }

    /// `(id, name, input)` of every tool call in this message.
    #[must_use]
    pub fn tool_uses(&self) -> Vec<(&str, &str, &Value)> {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::ToolEvent(ToolEvent::Use { id, name, input }) => {
                    Some((id.as_str(), name.as_str(), input))
                }
                _ => None,
            })
            .collect()
    }
}

// =============================================================================
// OUTGOING
// =============================================================================

/// Content block the client sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutgoingBlock {
    Text {
        text: String,
    },
    ToolResult {
        #[serde(rename = "toolUseId")]
        tool_use_id: String,
        content: String,
        #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
        is_error: Option<bool>,
    },
}

/// Message the client sends on advance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    pub role: Role,
    pub content: Vec<OutgoingBlock>,
}

impl OutgoingMessage {
    #[must_use]
    pub fn user_text(text: &str) -> Self {
        Self { role: Role::User, content: vec![OutgoingBlock::Text { text: text.to_owned() }] }
    }

    #[must_use]
    pub fn tool_results(results: Vec<OutgoingBlock>) -> Self {
        Self { role: Role::Tool, content: results }
    }
}

//! Client-side tools the hosted assistant may call.
//!
//! ARCHITECTURE
//! ============
//! Two tools, both about page position. Handlers never touch the DOM
//! directly; they go through [`PageHost`], which the browser implements
//! under `hydrate` and tests implement with plain data.
//!
//! A bad call is not a fault of the turn: [`ToolCatalog::run`] always yields
//! a tool result, flagged `isError` when the handler refused.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::net::types::OutgoingBlock;

/// Why a tool call could not be served.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid input for {tool}: {reason}")]
    InvalidInput { tool: &'static str, reason: String },
}

/// Page sections the assistant may scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Hero,
    Clients,
    WhatWeDo,
    Services,
    WhyUs,
    CaseStudies,
    Industries,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 8] = [
        Self::Hero,
        Self::Clients,
        Self::WhatWeDo,
        Self::Services,
        Self::WhyUs,
        Self::CaseStudies,
        Self::Industries,
        Self::Contact,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Clients => "clients",
            Self::WhatWeDo => "what-we-do",
            Self::Services => "services",
            Self::WhyUs => "why-us",
            Self::CaseStudies => "case-studies",
            Self::Industries => "industries",
            Self::Contact => "contact",
        }
    }
}

/// Viewport-relative bounds of one `section[id]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRect {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// What the tools need from the page.
pub trait PageHost {
    /// Every `section[id]` in document order.
    fn section_rects(&self) -> Vec<SectionRect>;
    fn viewport_height(&self) -> f64;
    /// Smooth-scroll the element with `id` into view; `false` if absent.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// The last section whose top is at or above mid-viewport and whose bottom
/// has not scrolled off the top. Defaults to `hero`.
#[must_use]
pub fn pick_visible_section(rects: &[SectionRect], viewport_height: f64) -> String {
    rects
        .iter()
        .rev()
        .find(|r| r.top <= viewport_height / 2.0 && r.bottom >= 0.0)
        .map_or_else(|| SectionId::Hero.as_str().to_owned(), |r| r.id.clone())
}

// =============================================================================
// CATALOG
// =============================================================================

pub type ToolHandler = fn(&dyn PageHost, &Value) -> Result<Value, ToolError>;

#[derive(Clone, Copy)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: fn() -> Value,
    pub output_schema: fn() -> Value,
    pub handler: ToolHandler,
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor").field("name", &self.name).finish_non_exhaustive()
    }
}

fn get_visible_section(host: &dyn PageHost, input: &Value) -> Result<Value, ToolError> {
    if !(input.is_object() || input.is_null()) {
        return Err(ToolError::InvalidInput { tool: "getVisibleSection", reason: "expected an object".into() });
    }
    let current = pick_visible_section(&host.section_rects(), host.viewport_height());
    Ok(json!({ "currentSection": current }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScrollInput {
    section_id: SectionId,
}

fn scroll_to_section(host: &dyn PageHost, input: &Value) -> Result<Value, ToolError> {
    let parsed: ScrollInput = serde_json::from_value(input.clone())
        .map_err(|e| ToolError::InvalidInput { tool: "scrollToSection", reason: e.to_string() })?;
    let id = parsed.section_id.as_str();
    if host.scroll_into_view(id) {
        Ok(json!({ "success": true, "scrolledTo": id }))
    } else {
        Ok(json!({ "success": false, "scrolledTo": null }))
    }
}

static BUILTIN: [ToolDescriptor; 2] = [
    ToolDescriptor {
        name: "getVisibleSection",
        description: "Returns which section of the website the user is currently viewing.",
        input_schema: || json!({ "type": "object", "properties": {} }),
        output_schema: || {
            json!({
                "type": "object",
                "properties": { "currentSection": { "type": "string" } },
                "required": ["currentSection"]
            })
        },
        handler: get_visible_section,
    },
    ToolDescriptor {
        name: "scrollToSection",
        description: "Scrolls the page to a specific section.",
        input_schema: || {
            json!({
                "type": "object",
                "properties": {
                    "sectionId": {
                        "type": "string",
                        "enum": SectionId::ALL.map(SectionId::as_str)
                    }
                },
                "required": ["sectionId"]
            })
        },
        output_schema: || {
            json!({
                "type": "object",
                "properties": {
                    "success": { "type": "boolean" },
                    "scrolledTo": { "type": ["string", "null"] }
                },
                "required": ["success", "scrolledTo"]
            })
        },
        handler: scroll_to_section,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ToolCatalog {
    tools: &'static [ToolDescriptor],
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ToolCatalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self { tools: &BUILTIN }
    }

    #[must_use]
    pub fn descriptors(&self) -> &'static [ToolDescriptor] {
        self.tools
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Execute `name` against `host`.
    ///
    /// # Errors
    ///
    /// [`ToolError::UnknownTool`] for an unregistered name, or the handler's
    /// [`ToolError::InvalidInput`].
    pub fn execute(&self, host: &dyn PageHost, name: &str, input: &Value) -> Result<Value, ToolError> {
        let tool = self.lookup(name).ok_or_else(|| ToolError::UnknownTool(name.to_owned()))?;
        (tool.handler)(host, input)
    }

    /// Execute a tool call and package the outcome as a `tool_result` block.
    #[must_use]
    pub fn run(&self, host: &dyn PageHost, tool_use_id: &str, name: &str, input: &Value) -> OutgoingBlock {
        match self.execute(host, name, input) {
            Ok(output) => OutgoingBlock::ToolResult {
                tool_use_id: tool_use_id.to_owned(),
                content: output.to_string(),
                is_error: None,
            },
            Err(e) => {
                log::warn!("tool {name} failed: {e}");
                OutgoingBlock::ToolResult { tool_use_id: tool_use_id.to_owned(), content: e.to_string(), is_error: Some(true) }
            }
        }
    }
}

// =============================================================================
// BROWSER HOST
// =============================================================================

/// [`PageHost`] over the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl PageHost for BrowserPage {
    fn section_rects(&self) -> Vec<SectionRect> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                return Vec::new();
            };
            let Ok(list) = doc.query_selector_all("section[id]") else {
                return Vec::new();
            };
            (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
                .map(|el| {
                    let rect = el.get_bounding_client_rect();
                    SectionRect { id: el.id(), top: rect.top(), bottom: rect.bottom() }
                })
                .collect()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Vec::new()
        }
    }

    fn viewport_height(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.inner_height().ok()).and_then(|v| v.as_f64()).unwrap_or(0.0)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
                return false;
            };
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            false
        }
    }
}

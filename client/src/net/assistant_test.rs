use super::*;
use std::cell::RefCell;

use futures::executor::block_on;
use serde_json::json;

use crate::net::types::{ContentBlock, Role};
use crate::tools::SectionRect;

// =========================================================================
// MockTransport + StaticPage
// =========================================================================

struct MockTransport {
    responses: RefCell<Vec<Result<AdvanceResponse, SessionError>>>,
    requests: RefCell<Vec<AdvanceRequest>>,
}

impl MockTransport {
    fn new(responses: Vec<Result<AdvanceResponse, SessionError>>) -> Self {
        Self { responses: RefCell::new(responses), requests: RefCell::new(Vec::new()) }
    }
}

#[async_trait::async_trait(?Send)]
impl AssistantTransport for MockTransport {
    async fn advance(&self, request: &AdvanceRequest) -> Result<AdvanceResponse, SessionError> {
        self.requests.borrow_mut().push(request.clone());
        let mut responses = self.responses.borrow_mut();
        if responses.is_empty() {
            Ok(reply("thread-1", vec![json!({ "role": "assistant", "content": "done" })]))
        } else {
            responses.remove(0)
        }
    }
}

struct StaticPage;

impl PageHost for StaticPage {
    fn section_rects(&self) -> Vec<SectionRect> {
        vec![SectionRect { id: "services".into(), top: 0.0, bottom: 600.0 }]
    }

    fn viewport_height(&self) -> f64 {
        800.0
    }

    fn scroll_into_view(&self, _id: &str) -> bool {
        true
    }
}

fn reply(thread: &str, messages: Vec<Value>) -> AdvanceResponse {
    AdvanceResponse { thread_id: thread.into(), messages }
}

fn tool_call(id: &str) -> Value {
    json!({
        "role": "assistant",
        "content": [{ "type": "tool_use", "id": id, "name": "getVisibleSection", "input": {} }]
    })
}

fn run(transport: &MockTransport, thread_id: &mut Option<String>) -> (Result<(), SessionError>, Vec<Message>) {
    let ctx = TurnContext {
        user_key: "anon_test",
        system_instructions: "be brief",
        registry: Registry::builtin(),
        tools: ToolCatalog::builtin(),
        host: &StaticPage,
    };
    let mut received = Vec::new();
    let result = block_on(run_turn(transport, &ctx, thread_id, "What AI services do you offer?", &mut |batch: Vec<Message>| {
        received.extend(batch);
    }));
    (result, received)
}

// =========================================================================
// request shape
// =========================================================================

#[test]
fn first_request_carries_catalog_context_and_user_text() {
    let transport = MockTransport::new(vec![]);
    let mut thread_id = None;
    let (result, _) = run(&transport, &mut thread_id);
    assert!(result.is_ok());

    let requests = transport.requests.borrow();
    let body = serde_json::to_value(&requests[0]).unwrap();
    assert_eq!(body["userKey"], "anon_test");
    assert!(body.get("threadId").is_none());
    assert_eq!(body["systemInstructions"], "be brief");
    assert_eq!(body["context"]["currentPage"], "User is viewing the \"services\" section of the ES Consulting website.");
    assert_eq!(body["components"].as_array().map(Vec::len), Some(9));
    assert!(body["components"][0]["propsSchema"].is_object());
    assert_eq!(body["tools"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["tools"][1]["inputSchema"]["required"], json!(["sectionId"]));
    assert_eq!(body["message"], json!({ "role": "user", "content": [{ "type": "text", "text": "What AI services do you offer?" }] }));
}

#[test]
fn thread_id_is_recorded_and_reused() {
    let transport = MockTransport::new(vec![]);
    let mut thread_id = None;
    let _ = run(&transport, &mut thread_id);
    assert_eq!(thread_id.as_deref(), Some("thread-1"));

    let _ = run(&transport, &mut thread_id);
    assert_eq!(transport.requests.borrow()[1].thread_id.as_deref(), Some("thread-1"));
}

#[test]
fn advance_url_joins_base() {
    assert_eq!(advance_url("/api/assistant"), "/api/assistant/threads/advance");
    assert_eq!(advance_url("https://api.tambo.co/"), "https://api.tambo.co/threads/advance");
}

// =========================================================================
// replies
// =========================================================================

#[test]
fn replies_are_ingested_and_filtered() {
    let transport = MockTransport::new(vec![Ok(reply(
        "t",
        vec![
            json!({ "role": "system", "content": "hidden" }),
            json!({ "role": "assistant", "content": [{ "type": "text", "text": "Here you go" }] }),
            json!({ "role": "assistant", "content": [] }),
        ],
    ))]);
    let (result, received) = run(&transport, &mut None);
    assert!(result.is_ok());
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].role, Role::Assistant);
    assert_eq!(received[0].content, vec![ContentBlock::Text("Here you go".into())]);
}

// =========================================================================
// tool loop
// =========================================================================

#[test]
fn tool_use_is_executed_and_result_sent() {
    let transport = MockTransport::new(vec![
        Ok(reply("t", vec![tool_call("tu_1")])),
        Ok(reply("t", vec![json!({ "role": "assistant", "content": "You are on services." })])),
    ]);
    let (result, received) = run(&transport, &mut None);
    assert!(result.is_ok());

    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 2);
    let second = serde_json::to_value(&requests[1].message).unwrap();
    assert_eq!(
        second,
        json!({
            "role": "tool",
            "content": [{ "type": "tool_result", "toolUseId": "tu_1", "content": "{\"currentSection\":\"services\"}" }]
        })
    );
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].content, vec![ContentBlock::Text("You are on services.".into())]);
}

#[test]
fn unknown_tool_is_answered_with_error_result() {
    let transport = MockTransport::new(vec![Ok(reply(
        "t",
        vec![json!({ "role": "assistant", "content": [{ "type": "tool_use", "id": "x", "name": "nope", "input": {} }] })],
    ))]);
    let (result, _) = run(&transport, &mut None);
    assert!(result.is_ok());
    let second = serde_json::to_value(&transport.requests.borrow()[1].message).unwrap();
    assert_eq!(second["content"][0]["isError"], true);
}

#[test]
fn tool_loop_stops_at_round_limit() {
    let responses = (0..10).map(|i| Ok(reply("t", vec![tool_call(&format!("tu_{i}"))]))).collect();
    let transport = MockTransport::new(responses);
    let (result, _) = run(&transport, &mut None);
    assert_eq!(result, Err(SessionError::ToolLoopLimit(MAX_TOOL_ROUNDS)));
    assert_eq!(transport.requests.borrow().len(), MAX_TOOL_ROUNDS + 1);
}

#[test]
fn transport_error_ends_turn() {
    let transport = MockTransport::new(vec![Err(SessionError::Status { status: 502, body: "bad gateway".into() })]);
    let mut thread_id = None;
    let (result, received) = run(&transport, &mut thread_id);
    assert!(matches!(result, Err(SessionError::Status { status: 502, .. })));
    assert!(received.is_empty());
    assert!(thread_id.is_none());
}

#[test]
fn response_decodes_with_missing_messages() {
    let resp: AdvanceResponse = serde_json::from_value(json!({ "threadId": "abc" })).unwrap();
    assert_eq!(resp.thread_id, "abc");
    assert!(resp.messages.is_empty());
}

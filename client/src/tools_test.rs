use super::*;
use std::cell::RefCell;

struct FakePage {
    rects: Vec<SectionRect>,
    height: f64,
    present: Vec<&'static str>,
    scrolled: RefCell<Vec<String>>,
}

impl FakePage {
    fn new(rects: Vec<SectionRect>) -> Self {
        Self { rects, height: 800.0, present: vec!["hero", "services", "contact"], scrolled: RefCell::new(Vec::new()) }
    }
}

impl PageHost for FakePage {
    fn section_rects(&self) -> Vec<SectionRect> {
        self.rects.clone()
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        self.scrolled.borrow_mut().push(id.to_owned());
        self.present.contains(&id)
    }
}

fn rect(id: &str, top: f64, bottom: f64) -> SectionRect {
    SectionRect { id: id.to_owned(), top, bottom }
}

// =============================================================================
// pick_visible_section
// =============================================================================

#[test]
fn picks_last_section_past_mid_viewport() {
    let rects = vec![rect("hero", -900.0, -100.0), rect("services", -100.0, 300.0), rect("why-us", 300.0, 900.0)];
    assert_eq!(pick_visible_section(&rects, 800.0), "why-us");
}

#[test]
fn ignores_sections_scrolled_off_or_below_mid() {
    let rects = vec![rect("hero", -900.0, -10.0), rect("services", -10.0, 500.0), rect("contact", 401.0, 900.0)];
    assert_eq!(pick_visible_section(&rects, 800.0), "services");
}

#[test]
fn defaults_to_hero() {
    assert_eq!(pick_visible_section(&[], 800.0), "hero");
    assert_eq!(pick_visible_section(&[rect("contact", 700.0, 1200.0)], 800.0), "hero");
}

// =============================================================================
// catalog
// =============================================================================

#[test]
fn catalog_lists_two_tools_with_schemas() {
    let catalog = ToolCatalog::builtin();
    let names: Vec<&str> = catalog.descriptors().iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["getVisibleSection", "scrollToSection"]);
    let scroll = catalog.lookup("scrollToSection").unwrap();
    let enum_values = (scroll.input_schema)()["properties"]["sectionId"]["enum"].clone();
    assert_eq!(enum_values.as_array().map(Vec::len), Some(8));
    assert_eq!((scroll.output_schema)()["required"], json!(["success", "scrolledTo"]));
}

#[test]
fn get_visible_section_reports_current() {
    let page = FakePage::new(vec![rect("hero", -500.0, 100.0), rect("services", 100.0, 700.0)]);
    let out = ToolCatalog::builtin().execute(&page, "getVisibleSection", &json!({})).unwrap();
    assert_eq!(out, json!({ "currentSection": "services" }));
}

#[test]
fn scroll_to_known_section_succeeds() {
    let page = FakePage::new(Vec::new());
    let out = ToolCatalog::builtin().execute(&page, "scrollToSection", &json!({ "sectionId": "contact" })).unwrap();
    assert_eq!(out, json!({ "success": true, "scrolledTo": "contact" }));
    assert_eq!(page.scrolled.borrow().as_slice(), ["contact".to_owned()]);
}

#[test]
fn scroll_to_missing_element_reports_failure() {
    let page = FakePage::new(Vec::new());
    let out = ToolCatalog::builtin().execute(&page, "scrollToSection", &json!({ "sectionId": "industries" })).unwrap();
    assert_eq!(out, json!({ "success": false, "scrolledTo": null }));
}

#[test]
fn scroll_rejects_unlisted_section() {
    let page = FakePage::new(Vec::new());
    let err = ToolCatalog::builtin().execute(&page, "scrollToSection", &json!({ "sectionId": "pricing" })).unwrap_err();
    assert!(matches!(err, ToolError::InvalidInput { tool: "scrollToSection", .. }));
    assert!(page.scrolled.borrow().is_empty());
}

#[test]
fn unknown_tool_is_an_error() {
    let page = FakePage::new(Vec::new());
    let err = ToolCatalog::builtin().execute(&page, "deleteEverything", &json!({})).unwrap_err();
    assert_eq!(err, ToolError::UnknownTool("deleteEverything".into()));
}

#[test]
fn run_wraps_outcomes_as_tool_results() {
    let page = FakePage::new(vec![rect("hero", 0.0, 800.0)]);
    let catalog = ToolCatalog::builtin();

    let ok = catalog.run(&page, "tu_1", "getVisibleSection", &json!({}));
    assert_eq!(
        ok,
        OutgoingBlock::ToolResult {
            tool_use_id: "tu_1".into(),
            content: "{\"currentSection\":\"hero\"}".into(),
            is_error: None,
        }
    );

    let bad = catalog.run(&page, "tu_2", "nope", &json!({}));
    let OutgoingBlock::ToolResult { is_error, content, .. } = bad else {
        panic!("expected tool result");
    };
    assert_eq!(is_error, Some(true));
    assert!(content.contains("unknown tool"));
}

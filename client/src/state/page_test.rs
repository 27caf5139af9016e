use super::*;

#[test]
fn scroll_toggles_nav_state_both_ways() {
    let mut page = PageState::default();
    page.on_scroll(120.0);
    assert!(page.nav_scrolled);
    page.on_scroll(10.0);
    assert!(!page.nav_scrolled);
}

#[test]
fn menu_toggle_and_link_close() {
    let mut page = PageState::default();
    page.toggle_menu();
    assert!(page.menu_open);
    page.close_menu();
    assert!(!page.menu_open);
    page.toggle_menu();
    page.toggle_menu();
    assert!(!page.menu_open);
}

#[test]
fn active_section_tracks_latest() {
    let mut page = PageState::default();
    page.set_active_section("services");
    page.set_active_section("contact");
    assert_eq!(page.active_section.as_deref(), Some("contact"));
}

#[test]
fn contact_stub_cannot_restart_while_running() {
    let mut page = PageState::default();
    assert!(page.start_contact());
    assert_eq!(page.contact, ContactPhase::Sending);
    assert!(!page.start_contact());
    page.contact = ContactPhase::Idle;
    assert!(page.start_contact());
}

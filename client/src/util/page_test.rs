use super::*;

// =============================================================================
// counters
// =============================================================================

#[test]
fn ease_out_cubic_hits_endpoints_and_front_loads() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!(ease_out_cubic(0.5) > 0.5);
    assert_eq!(ease_out_cubic(2.0), 1.0);
}

#[test]
fn counter_frame_rounds_and_finishes_at_duration() {
    assert_eq!(counter_frame(150, 0.0), (0, false));
    assert_eq!(counter_frame(150, 1000.0), (131, false));
    assert_eq!(counter_frame(150, 2000.0), (150, true));
    assert_eq!(counter_frame(150, 5000.0), (150, true));
}

// =============================================================================
// attributes + scroll
// =============================================================================

#[test]
fn reveal_delay_parses_leading_integer() {
    assert_eq!(reveal_delay_ms(None), 0);
    assert_eq!(reveal_delay_ms(Some("200")), 200);
    assert_eq!(reveal_delay_ms(Some("150ms")), 150);
    assert_eq!(reveal_delay_ms(Some("abc")), 0);
    assert_eq!(reveal_delay_ms(Some("-40")), 0);
    assert_eq!(parse_leading_int(Some(" -12px")), -12);
}

#[test]
fn nav_scrolled_is_strictly_above_threshold() {
    assert!(!nav_scrolled(0.0));
    assert!(!nav_scrolled(50.0));
    assert!(nav_scrolled(50.5));
}

#[test]
fn anchor_scroll_leaves_nav_offset() {
    assert_eq!(anchor_scroll_top(300.0, 1000.0), 1220.0);
}

#[test]
fn nav_link_matches_hash_href_only() {
    assert!(nav_link_active("#services", "services"));
    assert!(!nav_link_active("services", "services"));
    assert!(!nav_link_active("#contact", "services"));
}

#[test]
fn hero_query_trims_and_rejects_blank() {
    assert_eq!(hero_query("  hello  "), Some("hello".to_owned()));
    assert_eq!(hero_query("   "), None);
}

// =============================================================================
// word reveal
// =============================================================================

#[test]
fn word_reveal_marks_last_four_as_accent_with_break() {
    let mut zero = || 0.0;
    let words = plan_word_reveal("We Build the AI Others Only Talk About", &mut zero);
    assert_eq!(words.len(), 8);
    assert!(words[..4].iter().all(|w| !w.accent));
    assert!(words[4..].iter().all(|w| w.accent));
    assert!(words[4].break_before);
    assert_eq!(words.iter().filter(|w| w.break_before).count(), 1);
    assert_eq!(words[0].delay_ms, 200.0);
    assert_eq!(words[3].delay_ms, 440.0);
}

#[test]
fn word_reveal_jitter_stays_under_sixty_ms() {
    let mut almost_one = || 0.999;
    let words = plan_word_reveal("one two", &mut almost_one);
    assert!(words[0].delay_ms >= 200.0 && words[0].delay_ms < 260.0);
}

#[test]
fn rerolled_jitter_changes_only_delays() {
    let headline = "We Build the AI Others Only Talk About";
    let mut steady = || 0.5;
    let server = plan_word_reveal(headline, &mut steady);
    let mut rolls = [0.1, 0.9, 0.3, 0.7, 0.0, 0.2, 0.8, 0.4].into_iter();
    let mut seq = move || rolls.next().unwrap_or(0.0);
    let browser = plan_word_reveal(headline, &mut seq);

    assert_eq!(server.len(), browser.len());
    for (s, b) in server.iter().zip(&browser) {
        assert_eq!((&s.text, s.accent, s.break_before), (&b.text, b.accent, b.break_before));
    }
    assert_eq!(server[1].delay_ms, 310.0);
    assert_eq!(browser[1].delay_ms, 334.0);
}

#[test]
fn short_headline_is_all_accent_without_break() {
    let mut zero = || 0.0;
    let words = plan_word_reveal("Hi  there", &mut zero);
    assert!(words.iter().all(|w| w.accent && !w.break_before));
}

// =============================================================================
// contact stub
// =============================================================================

#[test]
fn contact_phases_cycle_back_to_idle() {
    let phase = ContactPhase::Sending;
    assert_eq!(phase.label("Send Message"), "Sending...");
    assert!(phase.disabled());

    let (next, after) = phase.advance().unwrap();
    assert_eq!((next, after), (ContactPhase::Sent, 1500));
    assert_eq!(next.label("Send Message"), "Message Sent!");

    let (back, after) = next.advance().unwrap();
    assert_eq!((back, after), (ContactPhase::Idle, 3000));
    assert_eq!(back.label("Send Message"), "Send Message");
    assert!(!back.disabled());
    assert!(back.advance().is_none());
}

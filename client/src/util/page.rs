//! Timing and layout rules for the static page behaviors.
//!
//! The browser glue in `pages::home` reads clocks, scroll offsets and data
//! attributes, then asks these helpers what to do with them.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;
pub const ANCHOR_OFFSET: f64 = 80.0;
pub const WORD_REVEAL_AFTER_MS: u32 = 400;
pub const ACCENT_WORDS: usize = 4;
pub const CONTACT_SENDING_MS: u32 = 1500;
pub const CONTACT_SENT_MS: u32 = 3000;

#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress.clamp(0.0, 1.0)).powi(3)
}

/// Counter text value at `elapsed_ms`, and whether the animation is done.
#[must_use]
pub fn counter_frame(target: i64, elapsed_ms: f64) -> (i64, bool) {
    let progress = (elapsed_ms / COUNTER_DURATION_MS).clamp(0.0, 1.0);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let value = (target as f64 * ease_out_cubic(progress)).round() as i64;
    (value, progress >= 1.0)
}

/// Leading-integer parse of a `data-*` attribute; anything else is 0.
#[must_use]
pub fn parse_leading_int(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else { return 0 };
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i64>().map_or(0, |n| sign * n)
}

/// Reveal delay in ms from `data-delay`; negative values fire immediately.
#[must_use]
pub fn reveal_delay_ms(raw: Option<&str>) -> u32 {
    u32::try_from(parse_leading_int(raw).max(0)).unwrap_or(u32::MAX)
}

#[must_use]
pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD
}

/// Absolute scroll target for an in-page anchor, leaving room for the nav.
#[must_use]
pub fn anchor_scroll_top(target_rect_top: f64, scroll_y: f64) -> f64 {
    target_rect_top + scroll_y - ANCHOR_OFFSET
}

/// Whether the nav link `href` points at section `id`.
#[must_use]
pub fn nav_link_active(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Trimmed hero query, or `None` when there is nothing to ask.
#[must_use]
pub fn hero_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

// =============================================================================
// WORD REVEAL
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RevealWord {
    pub text: String,
    pub accent: bool,
    /// Insert a line break before this word.
    pub break_before: bool,
    pub delay_ms: f64,
}

/// Split a headline into staggered words. The last four are accents, with a
/// break before the first accent. `jitter` yields values in `[0, 1)`.
pub fn plan_word_reveal(text: &str, jitter: &mut impl FnMut() -> f64) -> Vec<RevealWord> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let accent_start = words.len().saturating_sub(ACCENT_WORDS);
    let has_break = words.len() >= ACCENT_WORDS;
    words
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            #[allow(clippy::cast_precision_loss)]
            let delay_ms = 200.0 + i as f64 * 80.0 + jitter() * 60.0;
            RevealWord {
                text: word.to_owned(),
                accent: i >= accent_start,
                break_before: has_break && i == accent_start,
                delay_ms,
            }
        })
        .collect()
}

// =============================================================================
// CONTACT STUB
// =============================================================================

/// Submit button phases for the on-page contact form. Nothing is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl ContactPhase {
    #[must_use]
    pub fn label(self, idle_label: &str) -> &str {
        match self {
            Self::Idle => idle_label,
            Self::Sending => "Sending...",
            Self::Sent => "Message Sent!",
        }
    }

    #[must_use]
    pub fn disabled(self) -> bool {
        self != Self::Idle
    }

    /// Next phase and how long the current one lasts, if it times out.
    #[must_use]
    pub fn advance(self) -> Option<(Self, u32)> {
        match self {
            Self::Idle => None,
            Self::Sending => Some((Self::Sent, CONTACT_SENDING_MS)),
            Self::Sent => Some((Self::Idle, CONTACT_SENT_MS)),
        }
    }
}

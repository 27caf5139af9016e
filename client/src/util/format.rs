//! Display formatting shared by the generative components.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Whole-dollar USD with thousands separators, e.g. `$1,250,000`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_owned();
    }
    #[allow(clippy::cast_possible_truncation)]
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.unsigned_abs()))
}

/// `1234567` -> `1,234,567`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Investment range as `low - high`.
#[must_use]
pub fn format_usd_range(low: f64, high: f64) -> String {
    format!("{} - {}", format_usd(low), format_usd(high))
}

/// Comparison cell glyph kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Check,
    Cross,
    Empty,
    Text(String),
}

/// Classify a comparison table value. Missing or empty cells show a dash.
#[must_use]
pub fn classify_cell(value: Option<&str>) -> Cell {
    match value {
        None | Some("") => Cell::Empty,
        Some("true" | "yes" | "Yes") => Cell::Check,
        Some("false" | "no" | "No") => Cell::Cross,
        Some(other) => Cell::Text(other.to_owned()),
    }
}

use super::*;

#[test]
fn usd_groups_and_rounds() {
    assert_eq!(format_usd(0.0), "$0");
    assert_eq!(format_usd(999.4), "$999");
    assert_eq!(format_usd(1_000.0), "$1,000");
    assert_eq!(format_usd(1_250_000.6), "$1,250,001");
    assert_eq!(format_usd(-45_000.0), "-$45,000");
    assert_eq!(format_usd(f64::NAN), "$0");
}

#[test]
fn usd_range_joins_with_dash() {
    assert_eq!(format_usd_range(50_000.0, 150_000.0), "$50,000 - $150,000");
}

#[test]
fn group_thousands_handles_short_numbers() {
    assert_eq!(group_thousands(7), "7");
    assert_eq!(group_thousands(123), "123");
    assert_eq!(group_thousands(1234), "1,234");
    assert_eq!(group_thousands(123_456), "123,456");
}

#[test]
fn comparison_cells_map_to_glyphs() {
    for yes in ["true", "yes", "Yes"] {
        assert_eq!(classify_cell(Some(yes)), Cell::Check);
    }
    for no in ["false", "no", "No"] {
        assert_eq!(classify_cell(Some(no)), Cell::Cross);
    }
    assert_eq!(classify_cell(None), Cell::Empty);
    assert_eq!(classify_cell(Some("")), Cell::Empty);
    assert_eq!(classify_cell(Some("YES")), Cell::Text("YES".into()));
    assert_eq!(classify_cell(Some("$20/mo")), Cell::Text("$20/mo".into()));
}

use super::*;

fn points(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| DataPoint { label: format!("p{i}"), value: *v, color: None })
        .collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================================
// format_value
// =============================================================================

#[test]
fn format_value_compacts_thousands_and_millions() {
    assert_eq!(format_value(2_500_000.0, Some("$"), None), "$2.5M");
    assert_eq!(format_value(1_000.0, None, None), "1.0K");
    assert_eq!(format_value(999.0, None, Some("%")), "999%");
    assert_eq!(format_value(3.25, None, Some("x")), "3.25x");
    assert_eq!(format_value(-4_000.0, None, None), "-4000");
}

#[test]
fn point_color_cycles_palette_and_honors_override() {
    let mut data = points(&[1.0; 14]);
    data[1].color = Some("red".into());
    assert_eq!(point_color(0, &data[0]), "#C8A45C");
    assert_eq!(point_color(1, &data[1]), "red");
    assert_eq!(point_color(12, &data[12]), "#C8A45C");
    assert_eq!(point_color(13, &data[13]), "#5B8DEF");
}

// =============================================================================
// bar
// =============================================================================

#[test]
fn bar_max_is_full_width_and_order_is_monotone() {
    let pcts = bar_percentages(&[10.0, 40.0, 20.0]);
    assert!(close(pcts[1], 100.0));
    assert!(close(pcts[0], 25.0));
    assert!(close(pcts[2], 50.0));
    assert!(pcts[0] < pcts[2] && pcts[2] < pcts[1]);
}

#[test]
fn bar_nonpositive_max_gives_zero_widths() {
    assert_eq!(bar_percentages(&[0.0, 0.0]), vec![0.0, 0.0]);
    assert_eq!(bar_percentages(&[-3.0, -1.0]), vec![0.0, 0.0]);
}

#[test]
fn bar_negative_values_clamp_to_zero() {
    let pcts = bar_percentages(&[-5.0, 10.0]);
    assert_eq!(pcts, vec![0.0, 100.0]);
}

#[test]
fn bar_rows_carry_labels_colors_and_text() {
    let rows = bar_rows(&points(&[1500.0, 3000.0]), Some("$"), None);
    assert_eq!(rows[0].label, "p0");
    assert_eq!(rows[1].value_text, "$3.0K");
    assert_eq!(rows[1].color, PALETTE[1]);
    assert!(close(rows[0].pct, 50.0));
}

// =============================================================================
// line
// =============================================================================

#[test]
fn line_spans_plot_box_left_to_right() {
    let geo = line_geometry(&points(&[0.0, 5.0, 10.0]), None, None);
    assert!(close(geo.points[0].x, 10.0));
    assert!(close(geo.points[2].x, 350.0));
    assert!(close(geo.points[1].x, 180.0));
    // min sits on the floor, max at the top padding
    assert!(close(geo.points[0].y, 130.0));
    assert!(close(geo.points[2].y, 10.0));
    assert!(close(geo.baseline_y, 130.0));
}

#[test]
fn line_flat_series_uses_unit_range() {
    let geo = line_geometry(&points(&[7.0, 7.0]), None, None);
    assert!(geo.points.iter().all(|p| close(p.y, 130.0)));
}

#[test]
fn line_single_point_is_centered_and_finite() {
    let geo = line_geometry(&points(&[42.0]), None, None);
    assert!(close(geo.points[0].x, 180.0));
    assert!(geo.points[0].y.is_finite());
}

#[test]
fn line_paths_start_with_move_and_close_area() {
    let geo = line_geometry(&points(&[1.0, 2.0]), None, None);
    assert!(geo.line_path.starts_with("M10,"));
    assert_eq!(geo.line_path.matches('L').count(), 1);
    assert!(geo.area_path.starts_with(&geo.line_path));
    assert!(geo.area_path.ends_with(" L10,130 Z"));
}

// =============================================================================
// pie / donut
// =============================================================================

#[test]
fn pie_angles_sum_to_full_turn_from_twelve_oclock() {
    let angles = slice_angles(&[1.0, 2.0, 3.0, 4.0]);
    assert!(close(angles[0].0, -FRAC_PI_2));
    let swept: f64 = angles.iter().map(|(s, e)| e - s).sum();
    assert!(close(swept, TAU));
    for pair in angles.windows(2) {
        assert!(close(pair[0].1, pair[1].0));
    }
}

#[test]
fn pie_zero_total_gives_zero_angles() {
    let angles = slice_angles(&[0.0, 0.0, 0.0]);
    assert!(angles.iter().all(|(s, e)| close(e - s, 0.0)));
}

#[test]
fn pie_percentages_round() {
    let geo = pie_geometry(&points(&[1.0, 2.0]), false, None, None);
    assert_eq!(geo.slices.iter().map(|s| s.pct).collect::<Vec<_>>(), vec![33, 67]);
    assert!(geo.center_text.is_none());
    assert!(geo.slices[0].path.starts_with("M100,100 L"));
}

#[test]
fn donut_shows_formatted_total_and_inner_arc() {
    let geo = pie_geometry(&points(&[600.0, 600.0]), true, Some("$"), None);
    assert_eq!(geo.center_text.as_deref(), Some("$1.2K"));
    assert!(geo.slices[0].path.contains("A50,50"));
}

#[test]
fn full_turn_slice_draws_two_arcs() {
    let geo = pie_geometry(&points(&[5.0, 0.0]), false, None, None);
    assert_eq!(geo.slices[0].pct, 100);
    assert_eq!(geo.slices[0].path.matches('A').count(), 2);
}

//! Chart geometry for the chart display component.
//!
//! Pure functions from data points to percentages, SVG coordinates and path
//! strings so the view layer only has to emit elements.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::registry::props::DataPoint;

/// Slice and bar colors, cycled by index unless a point sets its own.
pub const PALETTE: [&str; 12] = [
    "#C8A45C", "#5B8DEF", "#22c55e", "#F59E0B", "#EC4899", "#8B5CF6", "#14B8A6", "#F97316", "#6366F1", "#EF4444",
    "#06B6D4", "#84CC16",
];

pub const LINE_WIDTH: f64 = 360.0;
pub const LINE_HEIGHT: f64 = 160.0;
pub const LINE_PAD_TOP: f64 = 10.0;
pub const LINE_PAD_RIGHT: f64 = 10.0;
pub const LINE_PAD_BOTTOM: f64 = 30.0;
pub const LINE_PAD_LEFT: f64 = 10.0;

pub const PIE_CENTER: f64 = 100.0;
pub const PIE_RADIUS: f64 = 80.0;
pub const DONUT_INNER_RADIUS: f64 = 50.0;

#[must_use]
pub fn point_color(index: usize, point: &DataPoint) -> String {
    point.color.clone().unwrap_or_else(|| PALETTE[index % PALETTE.len()].to_owned())
}

/// Compact number: `1.5M`, `2.3K`, otherwise the plain value.
#[must_use]
pub fn format_value(value: f64, prefix: Option<&str>, suffix: Option<&str>) -> String {
    let num = if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value}")
    };
    format!("{}{num}{}", prefix.unwrap_or_default(), suffix.unwrap_or_default())
}

// =============================================================================
// BAR
// =============================================================================

/// Width percentage per value relative to the maximum, in `[0, 100]`.
#[must_use]
pub fn bar_percentages(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values
        .iter()
        .map(|v| if max > 0.0 { (v / max * 100.0).clamp(0.0, 100.0) } else { 0.0 })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub label: String,
    pub pct: f64,
    pub color: String,
    pub value_text: String,
}

#[must_use]
pub fn bar_rows(data: &[DataPoint], prefix: Option<&str>, suffix: Option<&str>) -> Vec<BarRow> {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    bar_percentages(&values)
        .into_iter()
        .zip(data.iter().enumerate())
        .map(|(pct, (i, d))| BarRow {
            label: d.label.clone(),
            pct,
            color: point_color(i, d),
            value_text: format_value(d.value, prefix, suffix),
        })
        .collect()
}

// =============================================================================
// LINE
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineGeometry {
    pub points: Vec<LinePoint>,
    pub line_path: String,
    pub area_path: String,
    /// Y of the plot floor; axis labels sit just below it.
    pub baseline_y: f64,
}

#[must_use]
pub fn line_geometry(data: &[DataPoint], prefix: Option<&str>, suffix: Option<&str>) -> LineGeometry {
    let plot_w = LINE_WIDTH - LINE_PAD_LEFT - LINE_PAD_RIGHT;
    let plot_h = LINE_HEIGHT - LINE_PAD_TOP - LINE_PAD_BOTTOM;
    let baseline_y = LINE_PAD_TOP + plot_h;

    let max = data.iter().map(|d| d.value).fold(f64::NEG_INFINITY, f64::max);
    let min = data.iter().map(|d| d.value).fold(f64::INFINITY, f64::min);
    let range = if max > min { max - min } else { 1.0 };

    #[allow(clippy::cast_precision_loss)]
    let last = data.len().saturating_sub(1) as f64;
    let points: Vec<LinePoint> = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            #[allow(clippy::cast_precision_loss)]
            let frac = if last > 0.0 { i as f64 / last } else { 0.5 };
            LinePoint {
                x: LINE_PAD_LEFT + frac * plot_w,
                y: baseline_y - (d.value - min) / range * plot_h,
                label: d.label.clone(),
                value_text: format_value(d.value, prefix, suffix),
            }
        })
        .collect();

    let line_path = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}{},{}", if i == 0 { 'M' } else { 'L' }, p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    let area_path = match (points.first(), points.last()) {
        (Some(first), Some(last)) => {
            format!("{line_path} L{},{baseline_y} L{},{baseline_y} Z", last.x, first.x)
        }
        _ => String::new(),
    };

    LineGeometry { points, line_path, area_path, baseline_y }
}

// =============================================================================
// PIE / DONUT
// =============================================================================

/// `(start, end)` angle per value, clockwise from 12 o'clock.
#[must_use]
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    let mut cursor = -FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            let angle = if total > 0.0 { v / total * TAU } else { 0.0 };
            let start = cursor;
            cursor += angle;
            (start, cursor)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub path: String,
    pub color: String,
    pub label: String,
    /// Share of the total, rounded to a whole percent.
    pub pct: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieGeometry {
    pub slices: Vec<PieSlice>,
    /// Formatted total for the donut hole; `None` for a plain pie.
    pub center_text: Option<String>,
}

fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (PIE_CENTER + radius * angle.cos(), PIE_CENTER + radius * angle.sin())
}

fn slice_path(start: f64, end: f64, inner: f64) -> String {
    let angle = end - start;
    // A full turn has coincident endpoints, which SVG arcs skip; split it.
    if angle >= TAU - 1e-9 {
        let mid = start + PI;
        let outer = format!(
            "M{},{} A{r},{r} 0 1 1 {},{} A{r},{r} 0 1 1 {},{}",
            polar(PIE_RADIUS, start).0,
            polar(PIE_RADIUS, start).1,
            polar(PIE_RADIUS, mid).0,
            polar(PIE_RADIUS, mid).1,
            polar(PIE_RADIUS, start).0,
            polar(PIE_RADIUS, start).1,
            r = PIE_RADIUS,
        );
        if inner <= 0.0 {
            return format!("{outer} Z");
        }
        let (ix, iy) = polar(inner, start);
        let (mx, my) = polar(inner, mid);
        return format!("{outer} M{ix},{iy} A{inner},{inner} 0 1 0 {mx},{my} A{inner},{inner} 0 1 0 {ix},{iy} Z");
    }

    let large_arc = u8::from(angle > PI);
    let (x1, y1) = polar(PIE_RADIUS, start);
    let (x2, y2) = polar(PIE_RADIUS, end);
    let r = PIE_RADIUS;
    if inner > 0.0 {
        let (ix1, iy1) = polar(inner, start);
        let (ix2, iy2) = polar(inner, end);
        format!(
            "M{x1},{y1} A{r},{r} 0 {large_arc} 1 {x2},{y2} L{ix2},{iy2} A{inner},{inner} 0 {large_arc} 0 {ix1},{iy1} Z"
        )
    } else {
        format!("M{PIE_CENTER},{PIE_CENTER} L{x1},{y1} A{r},{r} 0 {large_arc} 1 {x2},{y2} Z")
    }
}

#[must_use]
pub fn pie_geometry(data: &[DataPoint], donut: bool, prefix: Option<&str>, suffix: Option<&str>) -> PieGeometry {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let total: f64 = values.iter().sum();
    let inner = if donut { DONUT_INNER_RADIUS } else { 0.0 };

    let slices = slice_angles(&values)
        .into_iter()
        .zip(data.iter().enumerate())
        .map(|((start, end), (i, d))| {
            #[allow(clippy::cast_possible_truncation)]
            let pct = if total > 0.0 { (d.value / total * 100.0).round() as i64 } else { 0 };
            PieSlice { path: slice_path(start, end, inner), color: point_color(i, d), label: d.label.clone(), pct }
        })
        .collect();

    PieGeometry { slices, center_text: donut.then(|| format_value(total, prefix, suffix)) }
}

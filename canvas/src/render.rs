//! Rendering: draws the particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the field and produces pixels; it does
//! not mutate any simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{GOLD_RGB, LINK_WIDTH};
use crate::particle::ParticleField;

/// Draw the full scene: particles first, then links between close pairs.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, dpr: f64) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());

    let particles = field.particles();
    for p in particles {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.radius, 0.0, TAU)?;
        ctx.set_fill_style_str(&gold(p.opacity));
        ctx.fill();
    }

    ctx.set_line_width(LINK_WIDTH);
    for link in field.links() {
        let (a, b) = (particles[link.a], particles[link.b]);
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.set_stroke_style_str(&gold(link.alpha));
        ctx.stroke();
    }

    Ok(())
}

fn gold(alpha: f64) -> String {
    let (r, g, b) = GOLD_RGB;
    format!("rgba({r}, {g}, {b}, {alpha:.3})")
}

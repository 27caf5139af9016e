use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::PARTICLE_COUNT;
use crate::particle::{ParticleField, Point};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What the host should do with its animation-frame loop after a
/// visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    /// Schedule the first frame of a new run.
    Start,
    /// Cancel the pending frame; nothing is buffered while stopped.
    Stop,
    /// Visibility did not change.
    Keep,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub field: ParticleField,
    pub running: bool,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            field: ParticleField::default(),
            running: true,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update viewport dimensions and reseed the particle field.
    pub fn resize(&mut self, width_css: f64, height_css: f64, dpr: f64, rng: &mut impl FnMut() -> f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        let pointer = self.field.pointer();
        self.field = ParticleField::seeded(PARTICLE_COUNT, self.viewport_width, self.viewport_height, rng);
        self.field.set_pointer(pointer);
    }

    /// Track the pointer in canvas-local CSS pixels.
    pub fn set_pointer(&mut self, pt: Point) {
        self.field.set_pointer(Some(pt));
    }

    /// Forget the pointer once it leaves the hero.
    pub fn clear_pointer(&mut self) {
        self.field.set_pointer(None);
    }

    /// Record page visibility and tell the host how to adjust its loop.
    pub fn set_visible(&mut self, visible: bool) -> LoopCommand {
        match (self.running, visible) {
            (false, true) => {
                self.running = true;
                LoopCommand::Start
            }
            (true, false) => {
                self.running = false;
                LoopCommand::Stop
            }
            _ => LoopCommand::Keep,
        }
    }

    /// Advance one frame. Returns `true` when another frame should be
    /// scheduled.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.field.step();
        true
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new() })
    }

    /// Match the backing store to the element's CSS size and reseed.
    pub fn resize(&mut self) {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let width_css = f64::from(self.canvas.offset_width());
        let height_css = f64::from(self.canvas.offset_height());
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.canvas.set_width((width_css * dpr).round().max(0.0) as u32);
            self.canvas.set_height((height_css * dpr).round().max(0.0) as u32);
        }
        let mut rng = js_sys::Math::random;
        self.core.resize(width_css, height_css, dpr, &mut rng);
    }

    pub fn set_pointer(&mut self, pt: Point) {
        self.core.set_pointer(pt);
    }

    pub fn clear_pointer(&mut self) {
        self.core.clear_pointer();
    }

    pub fn set_visible(&mut self, visible: bool) -> LoopCommand {
        self.core.set_visible(visible)
    }

    /// Step the simulation and draw it. Returns whether to keep looping.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<bool, JsValue> {
        if !self.core.tick() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core.field, self.core.dpr)
    }

    /// Canvas-local CSS coordinates for a viewport-space pointer position.
    #[must_use]
    pub fn local_point(&self, client_x: f64, client_y: f64) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(client_x - rect.left(), client_y - rect.top())
    }
}

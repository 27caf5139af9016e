//! Particle background engine for the marketing site hero.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! particle simulation (integration, wall bounce, pointer impulse, damping)
//! and draws the field plus its proximity links onto a 2D canvas. The host
//! Leptos layer is responsible only for wiring DOM events (resize, pointer,
//! visibility) to the engine and scheduling animation frames.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`particle`] | Particle state, stepping, and link detection |
//! | [`render`] | Scene rendering onto `CanvasRenderingContext2d` |
//! | [`consts`] | Shared numeric constants (counts, radii, damping, etc.) |

pub mod consts;
pub mod engine;
pub mod particle;
pub mod render;

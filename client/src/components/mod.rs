//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state from Leptos context providers.
//! `generative` holds the renderers the hosted assistant can choose from.

pub mod assistant_panel;
pub mod generative;
pub mod message_view;
pub mod particle_canvas;

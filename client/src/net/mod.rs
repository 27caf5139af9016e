//! Networking for the hosted assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` normalises the assistant's loosely shaped messages, and
//! `assistant` drives the advance/tool-result loop over a transport seam.

pub mod assistant;
pub mod types;

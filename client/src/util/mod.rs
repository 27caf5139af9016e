//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure math and formatting live here so components stay thin and the rules
//! stay testable without a browser. `storage` is the one browser-facing
//! module.

pub mod chart_math;
pub mod format;
pub mod markdown;
pub mod page;
pub mod storage;

//! Client-side state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `panel` owns the assistant thread and its open/stage/submit rules,
//! `session` the anonymous token and request context, `bus` the page-to-panel
//! signals, and `page` the scroll-derived chrome.

pub mod bus;
pub mod page;
pub mod panel;
pub mod session;

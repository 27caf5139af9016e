//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single route. `home` owns page-scoped orchestration and
//! delegates the particle field and the assistant panel to `components`.

pub mod home;

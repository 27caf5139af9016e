//! Browser `sessionStorage` access for tab-scoped values.
//!
//! SYSTEM CONTEXT
//! ==============
//! The assistant session token lives for one tab session. These helpers keep
//! the hydrate-only web-sys calls in one place; SSR builds see an empty
//! store that drops writes.

use crate::state::session::KeyValueStore;

/// `window.sessionStorage`, or nothing outside the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStorage;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl KeyValueStore for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = session_storage() else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("sessionStorage write failed for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

//! Scroll- and menu-derived page chrome state.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::util::page::{ContactPhase, nav_scrolled};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub nav_scrolled: bool,
    pub menu_open: bool,
    /// Section id the scroll spy last saw enter the viewport.
    pub active_section: Option<String>,
    pub contact: ContactPhase,
}

impl PageState {
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.nav_scrolled = nav_scrolled(scroll_y);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn set_active_section(&mut self, id: &str) {
        self.active_section = Some(id.to_owned());
    }

    /// Start the contact stub. Returns `false` if it is already running.
    pub fn start_contact(&mut self) -> bool {
        if self.contact.disabled() {
            return false;
        }
        self.contact = ContactPhase::Sending;
        true
    }
}

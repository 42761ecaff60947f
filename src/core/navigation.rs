//! # Navigation State
//!
//! Which tab is showing and which tab the pointer is over. The two are
//! independent: hovering never changes the active tab, and the hovered tab
//! may be the active one.

use crate::core::layout;
use crate::core::tab::Tab;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    active: Tab,
    hover: Option<Tab>,
}

impl NavigationState {
    /// Starts on the first tab with nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn hover(&self) -> Option<Tab> {
        self.hover
    }

    /// Advance to the next tab, wrapping after the last.
    pub fn next(&mut self) -> Tab {
        self.active = self.active.next();
        self.active
    }

    /// Step back to the previous tab, wrapping before the first.
    pub fn prev(&mut self) -> Tab {
        self.active = self.active.prev();
        self.active
    }

    /// Jump to `tab`. Returns false if it was already active.
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }

    pub fn set_hover(&mut self, hover: Option<Tab>) {
        self.hover = hover;
    }

    /// Tab under pointer column `x` in the tab bar.
    pub fn hit_test(x: u16) -> Option<Tab> {
        layout::hit_test(&Tab::labels(), x).and_then(Tab::from_index)
    }
}

//! # TabBar Component
//!
//! The two rows at the top of the screen: every tab label, then an
//! underline rule across the full width.
//!
//! ## Geometry
//!
//! Tab positions come from [`layout::tab_extents`], the same function the
//! pointer hit-test walks, so a click always lands on the tab drawn under
//! it. Tabs that run past the right edge are clipped, never wrapped.
//!
//! ## Styling
//!
//! Active and hovered are independent props. A tab can be either, both, or
//! neither; see [`Theme::tab`].

use ratatui::layout::Rect;

use crate::core::layout::{self, TAB_PADDING};
use crate::core::tab::Tab;
use crate::tui::component::Component;
use crate::tui::frame::Frame;
use crate::tui::theme::Theme;

pub struct TabBar<'a> {
    pub active: Tab,
    pub hover: Option<Tab>,
    pub theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: Tab, hover: Option<Tab>, theme: &'a Theme) -> Self {
        Self {
            active,
            hover,
            theme,
        }
    }
}

impl Component for TabBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let buf = frame.buffer_mut();
        let padding = " ".repeat(TAB_PADDING);

        for (tab, extent) in Tab::ALL.iter().zip(layout::tab_extents(&Tab::labels())) {
            let Ok(offset) = u16::try_from(extent.start) else {
                break;
            };
            if offset >= area.width {
                break;
            }
            let style = self
                .theme
                .tab(*tab == self.active, Some(*tab) == self.hover);
            let text = format!("{padding}{}{padding}", tab.label());
            buf.set_stringn(
                area.x + offset,
                area.y,
                text,
                (area.width - offset) as usize,
                style,
            );
        }

        if area.height > 1 {
            buf.set_string(
                area.x,
                area.y + 1,
                "─".repeat(area.width as usize),
                self.theme.tab_rule,
            );
        }
    }
}

//! # View Model
//!
//! One session's screen state and the transitions between states. Every
//! input event goes through [`ViewModel::update`], which mutates the state
//! and reports whether the session should continue; [`ViewModel::frame`]
//! then renders the whole screen from scratch.
//!
//! ```text
//! Event  →  update()  →  Effect
//!                ↓
//!            frame()  →  ANSI string
//! ```
//!
//! ## Transitions
//!
//! | Event | Effect |
//! |-------|--------|
//! | resize | store dimensions, create or resize the viewport, reformat |
//! | `tab` / `→` / `l` | next tab, reformat, scroll to top |
//! | `shift+tab` / `←` / `h` | previous tab, reformat, scroll to top |
//! | `q` / `ctrl+c` | quit |
//! | pointer over the tab bar | hover the tab under it |
//! | left press on another tab | jump to it, reformat, scroll to top |
//! | anything else | forwarded to the viewport |
//!
//! Nothing here can fail. Until the first resize arrives the viewport does
//! not exist and the frame is a placeholder.

use std::sync::Arc;

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::content::ContentStore;
use crate::core::layout::Dimensions;
use crate::core::navigation::NavigationState;
use crate::core::tab::Tab;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Footer, TabBar};
use crate::tui::event::{KeyAction, key_action};
use crate::tui::frame::Frame;
use crate::tui::tabs;
use crate::tui::theme::Theme;
use crate::tui::viewport::Viewport;

/// Columns of padding on each side of the content.
const CONTENT_PADDING_X: u16 = 2;

/// What the session loop should do after an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub struct ViewModel {
    store: Arc<ContentStore>,
    theme: Theme,
    nav: NavigationState,
    size: Dimensions,
    /// `None` until the first resize.
    viewport: Option<Viewport>,
}

impl ViewModel {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self {
            store,
            theme: Theme::default(),
            nav: NavigationState::new(),
            size: Dimensions::default(),
            viewport: None,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.nav.active()
    }

    pub fn hover_tab(&self) -> Option<Tab> {
        self.nav.hover()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.size
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.viewport.is_some()
    }

    /// Apply one input event.
    pub fn update(&mut self, event: &Event) -> Effect {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Release => return Effect::None,
            Event::Resize(width, height) => {
                self.resize(*width, *height);
                return Effect::None;
            }
            Event::Key(key) => match key_action(key) {
                Some(KeyAction::Quit) => return Effect::Quit,
                Some(KeyAction::NextTab) => {
                    self.nav.next();
                    self.tab_changed();
                    return Effect::None;
                }
                Some(KeyAction::PrevTab) => {
                    self.nav.prev();
                    self.tab_changed();
                    return Effect::None;
                }
                None => {}
            },
            Event::Mouse(mouse) => {
                if self.pointer(mouse) {
                    return Effect::None;
                }
            }
            _ => {}
        }

        if let Some(viewport) = self.viewport.as_mut() {
            viewport.handle_event(event);
        }
        Effect::None
    }

    /// Update hover from the pointer position and handle tab clicks.
    /// Returns true when the event switched tabs.
    fn pointer(&mut self, mouse: &MouseEvent) -> bool {
        let hover = if mouse.row < self.size.rows().tab_bar {
            NavigationState::hit_test(mouse.column)
        } else {
            None
        };
        self.nav.set_hover(hover);

        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && let Some(tab) = hover
            && self.nav.select(tab)
        {
            self.tab_changed();
            return true;
        }
        false
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.size = Dimensions::new(width, height);
        let (width, height) = self.viewport_size();
        match self.viewport.as_mut() {
            Some(viewport) => viewport.set_size(width, height),
            None => self.viewport = Some(Viewport::new(width, height)),
        }
        debug!(
            "resize to {}x{}, viewport {width}x{height}",
            self.size.width, self.size.height
        );
        self.reload();
    }

    fn tab_changed(&mut self) {
        debug!("tab changed to {:?}", self.nav.active());
        self.reload();
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.goto_top();
        }
    }

    /// Reformat the active tab for the current width.
    fn reload(&mut self) {
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };
        let content = tabs::render(self.nav.active(), &self.store, &self.theme, self.size.width);
        viewport.set_content(content);
    }

    fn viewport_size(&self) -> (u16, u16) {
        (
            self.size.width.saturating_sub(2 * CONTENT_PADDING_X),
            self.size.usable_height(),
        )
    }

    /// Draw the current state into a fresh frame.
    pub fn draw(&mut self) -> Frame {
        let area = Rect::new(0, 0, self.size.width, self.size.height);
        let mut frame = Frame::new(area);
        self.render(&mut frame, area);
        frame
    }

    /// The complete screen as one ANSI string.
    pub fn frame(&mut self) -> String {
        self.draw().to_ansi()
    }
}

impl Component for ViewModel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(viewport) = self.viewport.as_mut() else {
            let placeholder = Text::from(vec![Line::default(), Line::from("  Initializing...")]);
            frame.render_widget(Paragraph::new(placeholder), area);
            return;
        };

        // Same split the viewport was sized from, so its rows are always drawn.
        let rows = self.size.rows();
        let [tab_area, _, content_area, _, footer_area] = Layout::vertical([
            Constraint::Length(rows.tab_bar),
            Constraint::Length(rows.padding_top),
            Constraint::Length(rows.content),
            Constraint::Length(rows.padding_bottom),
            Constraint::Length(rows.footer),
        ])
        .areas(area);

        TabBar::new(self.nav.active(), self.nav.hover(), &self.theme).render(frame, tab_area);

        let inner = Block::default()
            .padding(Padding::horizontal(CONTENT_PADDING_X))
            .inner(content_area);
        viewport.render(frame, inner);

        let percent = viewport
            .is_scrollable()
            .then(|| viewport.scroll_percent());
        Footer::new(&self.theme, percent).render(frame, footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{click, key, key_with, mouse, ready_view, row_text};
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_placeholder_before_first_resize() {
        let mut view = ViewModel::new(Arc::new(ContentStore::builtin()));
        assert!(!view.is_ready());
        let frame = view.draw();
        assert_eq!(row_text(&frame, 1).trim_end(), "  Initializing...");
    }

    #[test]
    fn test_input_before_resize_is_harmless() {
        let mut view = ViewModel::new(Arc::new(ContentStore::builtin()));
        assert_eq!(view.update(&key(KeyCode::Down)), Effect::None);
        assert_eq!(view.update(&key(KeyCode::Tab)), Effect::None);
        assert_eq!(view.active_tab(), Tab::Experience);
        assert!(view.viewport().is_none());
    }

    #[test]
    fn test_first_resize_makes_view_ready() {
        let view = ready_view(80, 24);
        let viewport = view.viewport().unwrap();
        assert_eq!(viewport.width(), 76);
        assert_eq!(viewport.height(), 18);
        assert!(viewport.line_count() > 0);
    }

    #[test]
    fn test_zero_size_is_floored() {
        let view = ready_view(0, 0);
        assert_eq!(view.dimensions(), Dimensions::new(80, 24));
    }

    #[test]
    fn test_quit_keys() {
        let mut view = ready_view(80, 24);
        assert_eq!(view.update(&key(KeyCode::Char('q'))), Effect::Quit);
        assert_eq!(
            view.update(&key_with(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Effect::Quit
        );
        assert_eq!(view.active_tab(), Tab::About);
    }

    #[test]
    fn test_tab_change_resets_scroll() {
        let mut view = ready_view(80, 24);
        view.update(&key(KeyCode::Right));
        view.update(&key(KeyCode::End));
        assert!(view.viewport().unwrap().y_offset() > 0);

        view.update(&key(KeyCode::Right));
        assert_eq!(view.viewport().unwrap().y_offset(), 0);
    }

    #[test]
    fn test_hover_only_in_tab_band() {
        let mut view = ready_view(80, 24);
        view.update(&mouse(MouseEventKind::Moved, 12, 0));
        assert_eq!(view.hover_tab(), Some(Tab::Experience));
        view.update(&mouse(MouseEventKind::Moved, 12, 1));
        assert_eq!(view.hover_tab(), Some(Tab::Experience));
        view.update(&mouse(MouseEventKind::Moved, 12, 2));
        assert_eq!(view.hover_tab(), None);
        view.update(&mouse(MouseEventKind::Moved, 79, 0));
        assert_eq!(view.hover_tab(), None);
    }

    #[test]
    fn test_wheel_updates_hover_and_scrolls() {
        let mut view = ready_view(80, 24);
        view.update(&key(KeyCode::Right));
        view.update(&mouse(MouseEventKind::Moved, 12, 0));
        view.update(&mouse(MouseEventKind::ScrollDown, 30, 10));
        assert_eq!(view.hover_tab(), None);
        assert_eq!(view.viewport().unwrap().y_offset(), 3);
    }

    #[test]
    fn test_click_jumps_to_tab() {
        let mut view = ready_view(80, 24);
        // "  Projects  " starts at column 23
        assert_eq!(view.update(&click(25, 0)), Effect::None);
        assert_eq!(view.active_tab(), Tab::Projects);
        assert_eq!(view.hover_tab(), Some(Tab::Projects));
    }

    #[test]
    fn test_click_below_tab_bar_does_not_switch() {
        let mut view = ready_view(80, 24);
        view.update(&click(25, 5));
        assert_eq!(view.active_tab(), Tab::About);
    }

    #[test]
    fn test_click_on_active_tab_keeps_scroll() {
        let mut view = ready_view(80, 24);
        view.update(&key(KeyCode::Right));
        view.update(&key(KeyCode::Down));
        view.update(&click(12, 0));
        assert_eq!(view.active_tab(), Tab::Experience);
        assert_eq!(view.viewport().unwrap().y_offset(), 1);
    }

    #[test]
    fn test_frame_layout() {
        let mut view = ready_view(80, 24);
        let frame = view.draw();
        assert!(row_text(&frame, 0).starts_with("  About    Experience  "));
        assert_eq!(row_text(&frame, 1), "─".repeat(80));
        // one row of top padding, then content indented by two columns
        assert_eq!(row_text(&frame, 2).trim(), "");
        assert!(row_text(&frame, 3).starts_with("      _       _"));
        assert_eq!(row_text(&frame, 22).trim(), "");
        assert!(row_text(&frame, 23).contains("q quit"));
    }

    #[test]
    fn test_short_screen_hover_band_is_label_row_only() {
        let mut view = ready_view(80, 3);
        view.update(&mouse(MouseEventKind::Moved, 12, 0));
        assert_eq!(view.hover_tab(), Some(Tab::Experience));
        // row 1 is content at this height
        view.update(&mouse(MouseEventKind::Moved, 12, 1));
        assert_eq!(view.hover_tab(), None);
    }

    #[test]
    fn test_short_screen_rows() {
        let mut view = ready_view(80, 4);
        let frame = view.draw();
        assert!(row_text(&frame, 0).starts_with("  About  "));
        assert_eq!(row_text(&frame, 1), "─".repeat(80));
        assert!(row_text(&frame, 2).starts_with("  "));
        assert!(row_text(&frame, 3).contains("q quit"));
    }

    #[test]
    fn test_hovered_tab_changes_frame() {
        let mut view = ready_view(80, 24);
        let before = view.frame();
        view.update(&mouse(MouseEventKind::Moved, 12, 0));
        assert_ne!(view.frame(), before);
        view.update(&mouse(MouseEventKind::Moved, 12, 10));
        assert_eq!(view.frame(), before);
    }

    #[test]
    fn test_frame_carries_contact_links() {
        let mut view = ready_view(100, 40);
        view.update(&key(KeyCode::BackTab));
        assert_eq!(view.active_tab(), Tab::Contact);
        let frame = view.frame();
        assert!(frame.contains("\x1b]8;;mailto:ada@example.dev\x1b\\"));
        assert!(frame.contains("\x1b]8;;ssh://example.dev\x1b\\"));
    }
}

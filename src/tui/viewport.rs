//! # Viewport
//!
//! The scrollable window onto the active tab's [`Document`].
//!
//! ## Invariant
//!
//! `y_offset` always lies in `0..=max_y_offset()`, where
//! `max_y_offset = line_count − height` (or 0 when everything fits). Every
//! mutation ends by clamping, so resizes and content swaps can never leave
//! the window hanging past the end of the text.
//!
//! ## Key Map
//!
//! | Keys | Action |
//! |------|--------|
//! | `↓`, `j` | down one line |
//! | `↑`, `k` | up one line |
//! | `PgDn`, `Space`, `f` | down one page |
//! | `PgUp`, `b` | up one page |
//! | `d`, `Ctrl+d` | down half a page |
//! | `u`, `Ctrl+u` | up half a page |
//! | `Home`, `g` | top |
//! | `End`, `G` | bottom |
//! | mouse wheel | three lines |

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::frame::Frame;
use crate::tui::text::Document;

/// Lines moved per mouse wheel notch.
pub const MOUSE_WHEEL_DELTA: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scroll {
    LineDown,
    LineUp,
    PageDown,
    PageUp,
    HalfPageDown,
    HalfPageUp,
    Top,
    Bottom,
    WheelDown,
    WheelUp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    width: u16,
    height: u16,
    y_offset: usize,
    content: Document,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            y_offset: 0,
            content: Document::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    pub fn content(&self) -> &Document {
        &self.content
    }

    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    /// Replace the content, keeping the offset where possible.
    pub fn set_content(&mut self, content: Document) {
        self.content = content;
        self.clamp();
    }

    pub fn max_y_offset(&self) -> usize {
        self.line_count().saturating_sub(self.height as usize)
    }

    pub fn set_y_offset(&mut self, offset: usize) {
        self.y_offset = offset.min(self.max_y_offset());
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.set_y_offset(self.y_offset.saturating_add(lines));
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.set_y_offset(self.y_offset.saturating_sub(lines));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down((self.height as usize / 2).max(1));
    }

    pub fn half_page_up(&mut self) {
        self.scroll_up((self.height as usize / 2).max(1));
    }

    pub fn goto_top(&mut self) {
        self.y_offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.y_offset = self.max_y_offset();
    }

    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    /// Whether the content is taller than the window.
    pub fn is_scrollable(&self) -> bool {
        self.max_y_offset() > 0
    }

    /// Vertical scroll progress from 0.0 to 1.0. Content that fits counts as
    /// fully scrolled.
    pub fn scroll_percent(&self) -> f64 {
        let max = self.max_y_offset();
        if max == 0 {
            return 1.0;
        }
        self.y_offset as f64 / max as f64
    }

    /// The lines currently inside the window.
    pub fn visible_lines(&self) -> &[Line<'static>] {
        let lines = self.content.lines();
        let start = self.y_offset.min(lines.len());
        let end = (start + self.height as usize).min(lines.len());
        &lines[start..end]
    }

    fn clamp(&mut self) {
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }

    fn apply(&mut self, scroll: Scroll) {
        match scroll {
            Scroll::LineDown => self.scroll_down(1),
            Scroll::LineUp => self.scroll_up(1),
            Scroll::PageDown => self.page_down(),
            Scroll::PageUp => self.page_up(),
            Scroll::HalfPageDown => self.half_page_down(),
            Scroll::HalfPageUp => self.half_page_up(),
            Scroll::Top => self.goto_top(),
            Scroll::Bottom => self.goto_bottom(),
            Scroll::WheelDown => self.scroll_down(MOUSE_WHEEL_DELTA),
            Scroll::WheelUp => self.scroll_up(MOUSE_WHEEL_DELTA),
        }
    }
}

fn key_scroll(key: &KeyEvent) -> Option<Scroll> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('d') if ctrl => Some(Scroll::HalfPageDown),
        KeyCode::Char('u') if ctrl => Some(Scroll::HalfPageUp),
        _ if ctrl => None,
        KeyCode::Down | KeyCode::Char('j') => Some(Scroll::LineDown),
        KeyCode::Up | KeyCode::Char('k') => Some(Scroll::LineUp),
        KeyCode::PageDown | KeyCode::Char(' ') | KeyCode::Char('f') => Some(Scroll::PageDown),
        KeyCode::PageUp | KeyCode::Char('b') => Some(Scroll::PageUp),
        KeyCode::Char('d') => Some(Scroll::HalfPageDown),
        KeyCode::Char('u') => Some(Scroll::HalfPageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(Scroll::Top),
        KeyCode::End | KeyCode::Char('G') => Some(Scroll::Bottom),
        _ => None,
    }
}

fn mouse_scroll(mouse: &MouseEvent) -> Option<Scroll> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Scroll::WheelDown),
        MouseEventKind::ScrollUp => Some(Scroll::WheelUp),
        _ => None,
    }
}

impl EventHandler for Viewport {
    /// Whether the event was a scroll input.
    type Outcome = bool;

    fn handle_event(&mut self, event: &Event) -> bool {
        let scroll = match event {
            Event::Key(key) => key_scroll(key),
            Event::Mouse(mouse) => mouse_scroll(mouse),
            _ => None,
        };
        match scroll {
            Some(scroll) => {
                self.apply(scroll);
                true
            }
            None => false,
        }
    }
}

impl Component for Viewport {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible = self.visible_lines();
        frame.render_widget(Paragraph::new(Text::from(visible.to_vec())), area);

        let first = self.y_offset;
        let last = first + visible.len();
        let links: Vec<_> = self
            .content
            .links()
            .iter()
            .filter(|link| (first..last).contains(&link.line))
            .cloned()
            .collect();
        for link in links {
            let y = area.y + (link.line - first) as u16;
            let Ok(column) = u16::try_from(link.column) else {
                continue;
            };
            if column >= area.width {
                continue;
            }
            let width = (link.width as u16).min(area.width - column);
            frame.add_link(area.x + column, y, width, &link.url);
        }
    }
}

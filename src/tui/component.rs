//! Component traits. `render` takes this crate's [`Frame`], not
//! `ratatui::Frame`: every repaint covers the whole screen, and links are
//! spliced in as OSC-8 sequences when the frame is encoded.

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::tui::frame::Frame;

/// Something that draws itself into part of a [`Frame`].
///
/// Chrome like the tab bar is rebuilt from props for every frame. The
/// viewport and the view model keep state between frames, which is why
/// `render` takes `&mut self`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Consumes raw terminal events.
pub trait EventHandler {
    /// What the caller learns from handling one event.
    type Outcome;

    fn handle_event(&mut self, event: &Event) -> Self::Outcome;
}

//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::content::ContentStore;
use crate::tui::frame::Frame;
use crate::tui::view_model::ViewModel;

/// The small portfolio shipped in `assets/`: one entry per table, so
/// rendered output is short enough to assert on line by line.
pub fn sample_store() -> ContentStore {
    ContentStore::from_toml_str(include_str!("../assets/portfolio.example.toml"))
        .expect("bundled example portfolio parses")
}

/// A view model over the built-in portfolio that has already seen its first
/// resize.
pub fn ready_view(width: u16, height: u16) -> ViewModel {
    let mut view = ViewModel::new(Arc::new(ContentStore::builtin()));
    view.update(&Event::Resize(width, height));
    view
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn click(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// The symbols of one buffer row, concatenated.
pub fn row_text(frame: &Frame, y: u16) -> String {
    let area = frame.area();
    (area.left()..area.right())
        .map(|x| frame.buffer()[(x, y)].symbol().to_string())
        .collect()
}

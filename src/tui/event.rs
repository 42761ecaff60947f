//! Key bindings for the view model and the terminal event source.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;

/// What a key press means to the view model. Keys that map to nothing here
/// are passed on to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    NextTab,
    PrevTab,
    Quit,
}

/// Classify a key press. Releases never map to an action.
pub fn key_action(key: &KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(KeyAction::Quit),
        _ if ctrl => None,
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::BackTab => Some(KeyAction::PrevTab),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(KeyAction::PrevTab),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(KeyAction::NextTab),
        KeyCode::Left | KeyCode::Char('h') => Some(KeyAction::PrevTab),
        _ => None,
    }
}

/// Terminal input in arrival order.
pub struct EventSource {
    stream: EventStream,
}

impl EventSource {
    pub fn new() -> Self {
        Self {
            stream: EventStream::new(),
        }
    }

    /// Wait for the next event. `None` once the terminal input is closed.
    pub async fn next(&mut self) -> Option<std::io::Result<Event>> {
        self.stream.next().await
    }
}

impl Default for EventSource {
    fn default() -> Self {
        Self::new()
    }
}

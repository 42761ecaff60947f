//! # TUI Adapter
//!
//! The ratatui/crossterm layer. Owns the terminal for the length of one
//! session, feeds input events to the [`ViewModel`] in arrival order and
//! writes a complete frame after each one.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! There is no animation, so the loop sleeps until something happens:
//!
//! - **Input** (key, mouse, resize): update the view model, repaint.
//! - **SIGTERM / SIGHUP**: end the session. A dropped SSH connection
//!   delivers SIGHUP to its forced command.
//! - **Input closed**: end the session.
//!
//! Every repaint writes every cell inside a synchronized update, so a
//! frame never depends on what the terminal showed before it.

pub mod component;
pub mod components;
pub mod event;
pub mod frame;
pub mod tabs;
pub mod text;
pub mod theme;
pub mod view_model;
pub mod viewport;

use log::{error, info};
use std::io::{self, Write, stdout};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use uuid::Uuid;

use crate::core::config::ResolvedConfig;
use crate::core::content::ContentStore;
use crate::core::layout::{Dimensions, MIN_HEIGHT};
use crate::core::tab::Tab;
use crate::tui::event::EventSource;
use crate::tui::view_model::{Effect, ViewModel};

/// Puts the terminal into the session's modes and restores it on drop,
/// including when the loop exits with an error.
struct TerminalModeGuard {
    alt_screen: bool,
    mouse: bool,
}

impl TerminalModeGuard {
    fn new(config: &ResolvedConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self {
            alt_screen: config.alt_screen,
            mouse: config.mouse,
        };

        let mut out = stdout();
        if guard.alt_screen {
            execute!(out, EnterAlternateScreen)?;
        }
        if guard.mouse {
            // All-motion tracking, needed for hover.
            execute!(out, EnableMouseCapture)?;
        }
        // Ignored by terminals without the Kitty protocol. Lets shift+tab
        // arrive unambiguously; the release events it adds are dropped by
        // the view model.
        execute!(
            out,
            Hide,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (raw, alt screen: {}, mouse: {})",
            guard.alt_screen, guard.mouse
        );
        Ok(guard)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = execute!(out, PopKeyboardEnhancementFlags, Show);
        if self.mouse {
            let _ = execute!(out, DisableMouseCapture);
        }
        if self.alt_screen {
            let _ = execute!(out, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(unix)]
async fn recv_or_pending(signal: Option<&mut tokio::signal::unix::Signal>) {
    match signal {
        Some(signal) => {
            signal.recv().await;
        }
        None => std::future::pending().await,
    }
}

/// Resolves when the process is asked to stop.
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let install = |kind: SignalKind, name: &str| match signal(kind) {
        Ok(stream) => Some(stream),
        Err(err) => {
            log::warn!("failed to install {name} handler: {err}");
            None
        }
    };
    let mut sigterm = install(SignalKind::terminate(), "SIGTERM");
    let mut sighup = install(SignalKind::hangup(), "SIGHUP");

    tokio::select! {
        _ = recv_or_pending(sigterm.as_mut()) => info!("SIGTERM received"),
        _ = recv_or_pending(sighup.as_mut()) => info!("SIGHUP received"),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("failed to listen for interrupt: {err}");
        std::future::pending::<()>().await;
    }
}

fn draw(out: &mut impl Write, view: &mut ViewModel) -> io::Result<()> {
    queue!(out, BeginSynchronizedUpdate)?;
    out.write_all(view.frame().as_bytes())?;
    queue!(out, EndSynchronizedUpdate)?;
    out.flush()
}

/// Run one interactive session on the controlling terminal.
pub async fn run(store: Arc<ContentStore>, config: &ResolvedConfig) -> io::Result<()> {
    let session = Uuid::new_v4();
    info!("Session {session} started");

    let _terminal_mode_guard = TerminalModeGuard::new(config)?;
    let mut out = stdout();
    let mut view = ViewModel::new(store);
    let mut events = EventSource::new();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    // The event stream only reports changes, so seed the initial size.
    let (width, height) = terminal::size()?;
    view.update(&Event::Resize(width, height));
    draw(&mut out, &mut view)?;

    loop {
        let event = tokio::select! {
            _ = &mut shutdown => break,
            event = events.next() => event,
        };
        let event = match event {
            Some(Ok(event)) => event,
            Some(Err(err)) => {
                error!("Session {session}: terminal input failed: {err}");
                return Err(err);
            }
            None => {
                info!("Session {session}: input closed");
                break;
            }
        };

        if view.update(&event) == Effect::Quit {
            break;
        }
        draw(&mut out, &mut view)?;
    }

    info!("Session {session} ended on {:?}", view.active_tab());
    Ok(())
}

/// Plain-text rendering of one tab, or of every tab in order, for output
/// that isn't a terminal.
pub fn render_plain(store: &ContentStore, tab: Option<Tab>, width: u16) -> String {
    let width = Dimensions::new(width, MIN_HEIGHT).width;
    match tab {
        Some(tab) => tabs::render_plain(tab, store, width),
        None => Tab::ALL
            .iter()
            .map(|tab| {
                format!(
                    "== {} ==\n\n{}",
                    tab.label(),
                    tabs::render_plain(*tab, store, width)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_store;

    #[test]
    fn test_render_plain_single_tab() {
        let text = render_plain(&sample_store(), Some(Tab::Skills), 80);
        assert!(text.starts_with("Skills & Technologies\n"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_render_plain_all_tabs_in_order() {
        let text = render_plain(&sample_store(), None, 80);
        let positions: Vec<usize> = Tab::ALL
            .iter()
            .map(|tab| text.find(&format!("== {} ==", tab.label())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_plain_zero_width_uses_floor() {
        let store = sample_store();
        assert_eq!(
            render_plain(&store, Some(Tab::About), 0),
            render_plain(&store, Some(Tab::About), 80)
        );
    }

    #[test]
    fn test_draw_wraps_frame_in_synchronized_update() {
        let mut view = crate::test_support::ready_view(80, 24);
        let mut out = Vec::new();
        draw(&mut out, &mut view).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("\x1b[?2026h"));
        assert!(written.ends_with("\x1b[?2026l"));
    }
}

//! # Tab Content Renderers
//!
//! One pure formatter per tab: `(content, theme, width) -> Document`. The
//! width passed in is the full terminal width; each formatter picks its own
//! text column from it, so the same tab at the same width always produces
//! the same document.
//!
//! Formatters never fail. Widths too narrow for a layout shrink it down to
//! a single column rather than panicking; whatever is still too wide is
//! clipped by the viewport.

mod about;
mod contact;
mod education;
mod experience;
mod projects;
mod skills;

use ratatui::text::Span;

use crate::core::content::ContentStore;
use crate::core::tab::Tab;
use crate::tui::text::Document;
use crate::tui::theme::Theme;

/// Widest text column any tab uses.
const MAX_CONTENT_WIDTH: usize = 72;

/// Format the content for `tab` at terminal width `width`.
pub fn render(tab: Tab, store: &ContentStore, theme: &Theme, width: u16) -> Document {
    let width = width as usize;
    match tab {
        Tab::About => about::render(&store.profile, theme, width),
        Tab::Experience => experience::render(&store.experiences, theme, width),
        Tab::Projects => projects::render(&store.projects, theme, width),
        Tab::Skills => skills::render(&store.skill_groups, theme, width),
        Tab::Education => education::render(&store.education, theme, width),
        Tab::Contact => contact::render(&store.contacts, theme, width),
    }
}

/// Unstyled text for `tab`, for terminals (or readers) that can't use the
/// interactive screen.
pub fn render_plain(tab: Tab, store: &ContentStore, width: u16) -> String {
    render(tab, store, &Theme::default(), width).plain_text()
}

/// Text column for tabs laid out flush against the content padding.
fn content_width(width: usize) -> usize {
    width.saturating_sub(4).min(MAX_CONTENT_WIDTH).max(1)
}

fn section_header(doc: &mut Document, title: &str, theme: &Theme) {
    doc.push_line(Span::styled(title.to_string(), theme.section_header));
    doc.blank();
}

use ratatui::text::Span;

use super::section_header;
use crate::core::content::Project;
use crate::tui::text::{Document, LineBuilder, tag_rows, wrap, wrap_styled};
use crate::tui::theme::Theme;

const MAX_CARD_WIDTH: usize = 68;
const MARKER: &str = "◈  ";

pub(super) fn render(projects: &[Project], theme: &Theme, width: usize) -> Document {
    let mut doc = Document::new();
    section_header(&mut doc, "Projects", theme);

    // The card width includes its horizontal padding.
    let card_width = width.saturating_sub(8).min(MAX_CARD_WIDTH);
    let inner_width = card_width.saturating_sub(4).max(1);

    for project in projects {
        doc.append(card(project, theme, inner_width));
    }
    doc
}

fn card(project: &Project, theme: &Theme, inner_width: usize) -> Document {
    let mut inner = Document::new();
    // Continuation lines of a long name hang under its first character.
    let name_width = inner_width.saturating_sub(MARKER.chars().count()).max(1);
    for (n, line) in wrap(&project.name, name_width).into_iter().enumerate() {
        let lead = if n == 0 { MARKER } else { "   " };
        inner.push(LineBuilder::new().styled(format!("{lead}{line}"), theme.accent_text));
    }
    inner.blank();
    for line in wrap_styled(&project.description, inner_width, theme.body_text) {
        inner.push_line(line);
    }
    inner.blank();
    for row in tag_rows(&project.tech, theme.tag, inner_width) {
        inner.push(LineBuilder::new().spans(row));
    }
    inner.push(
        LineBuilder::new()
            .styled("→ ", theme.dim_text)
            .link(
                Span::styled(project.url.clone(), theme.secondary_text),
                format!("https://{}", project.url),
            ),
    );
    inner.boxed(inner_width, 1, 2, theme.border)
}

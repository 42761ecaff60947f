use ratatui::style::Modifier;
use ratatui::text::Span;

use super::{content_width, section_header};
use crate::core::content::Experience;
use crate::tui::text::{Document, LineBuilder, wrap};
use crate::tui::theme::Theme;

const RAIL: &str = "│";

pub(super) fn render(experiences: &[Experience], theme: &Theme, width: usize) -> Document {
    let mut doc = Document::new();
    section_header(&mut doc, "Work Experience", theme);

    let content_width = content_width(width);
    let description_width = content_width.saturating_sub(6).max(1);
    let highlight_width = content_width.saturating_sub(8).max(1);
    let description_style = theme.body_text.add_modifier(Modifier::ITALIC);
    let rail = || LineBuilder::new().styled(RAIL, theme.dim_text);

    for (i, exp) in experiences.iter().enumerate() {
        doc.push(
            LineBuilder::new()
                .styled("●", theme.green_text)
                .raw("  ")
                .styled(exp.title.clone(), theme.accent_text),
        );
        doc.push(
            rail()
                .raw("  ")
                .styled(exp.company.clone(), theme.secondary_text)
                .raw("  ")
                .styled(format!(" {} ", exp.period), theme.period_badge),
        );
        doc.push(rail());

        for line in wrap(&exp.description, description_width) {
            doc.push(rail().raw("  ").styled(line, description_style));
        }

        for highlight in &exp.highlights {
            for (n, line) in wrap(highlight, highlight_width).into_iter().enumerate() {
                let marker = if n == 0 {
                    Span::styled("▸ ", theme.bullet)
                } else {
                    Span::raw("  ")
                };
                doc.push(
                    rail()
                        .raw("  ")
                        .span(marker)
                        .styled(line, theme.muted_text),
                );
            }
        }

        if i + 1 < experiences.len() {
            doc.push(rail());
        } else {
            doc.push(LineBuilder::new().styled("╵", theme.dim_text));
        }
    }

    doc
}

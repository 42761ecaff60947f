use ratatui::style::Color;
use ratatui::text::Span;

use super::{content_width, section_header};
use crate::core::content::SkillGroup;
use crate::tui::text::{Document, LineBuilder, tag_rows};
use crate::tui::theme::{GREEN, ORANGE, PINK, SECONDARY, Theme, YELLOW};

/// Category header colours, cycled.
const CATEGORY_COLORS: [Color; 5] = [YELLOW, GREEN, PINK, ORANGE, SECONDARY];

pub(super) fn render(groups: &[SkillGroup], theme: &Theme, width: usize) -> Document {
    let mut doc = Document::new();
    section_header(&mut doc, "Skills & Technologies", theme);

    let content_width = content_width(width);
    let tag_width = content_width.saturating_sub(2).max(1);
    let separator = "·".repeat(content_width.saturating_sub(4));

    for (i, group) in groups.iter().enumerate() {
        let color = CATEGORY_COLORS[i % CATEGORY_COLORS.len()];
        doc.push_line(Span::styled(
            format!("■ {}", group.category),
            Theme::bold(color),
        ));
        for row in tag_rows(&group.skills, theme.tag, tag_width) {
            doc.push(LineBuilder::new().raw("  ").spans(row));
        }
        if i + 1 < groups.len() {
            doc.push_line(Span::styled(format!("  {separator}"), theme.dim_text));
        }
    }
    doc
}

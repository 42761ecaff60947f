use ratatui::style::{Color, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use super::{content_width, section_header};
use crate::core::content::ContactInfo;
use crate::tui::text::{Document, LineBuilder, wrap_styled};
use crate::tui::theme::{ACCENT, GREEN, MUTED, ORANGE, PINK, SECONDARY, TEXT, Theme};

const INTRO: &str = "I'm always interested in hearing about new opportunities, \
                     collaborations, or just connecting with fellow engineers.";

const LABEL_WIDTH: usize = 12;

/// Row colours, cycled by position.
const LABEL_COLORS: [Color; 7] = [PINK, GREEN, GREEN, SECONDARY, MUTED, ACCENT, ORANGE];

fn icon(label: &str) -> &'static str {
    match label {
        "Email" => "✉",
        "Phone" => "☎",
        "Office" => "☏",
        "Portfolio" => "⌂",
        "GitHub" => "◆",
        "LinkedIn" => "∞",
        "Location" => "◉",
        _ => "→",
    }
}

pub(super) fn render(contacts: &[ContactInfo], theme: &Theme, width: usize) -> Document {
    let mut doc = Document::new();
    section_header(&mut doc, "Get In Touch", theme);

    for line in wrap_styled(INTRO, content_width(width), theme.body_text) {
        doc.push_line(line);
    }
    doc.blank();

    let value_style = Theme::bold(TEXT);
    for (i, contact) in contacts.iter().enumerate() {
        let color = Theme::bold(LABEL_COLORS[i % LABEL_COLORS.len()]);
        let label_fill = LABEL_WIDTH.saturating_sub(contact.label.width());
        let mut row = LineBuilder::new()
            .raw("  ")
            .styled(icon(&contact.label), color)
            .raw("  ")
            .styled(
                format!("{}{}", contact.label, " ".repeat(label_fill)),
                color,
            )
            .raw("  ");

        row = match contact.url() {
            Some(url) => row.link(Span::styled(contact.value.clone(), value_style), url),
            None => row.styled(contact.value.clone(), value_style),
        };
        if let Some(ssh) = contact.ssh_url() {
            row = portfolio_suffix(row, contact, &ssh, value_style, theme.dim_text);
        }
        doc.push(row);
    }

    doc.blank();
    doc.push(
        LineBuilder::new()
            .styled("  Thanks for stopping by! ", theme.dim_text)
            .styled("👋", theme.highlight_text),
    );
    doc
}

/// ` (HTTPS or SSH)  // you're already here!`
fn portfolio_suffix(
    row: LineBuilder,
    contact: &ContactInfo,
    ssh: &str,
    link_style: Style,
    dim: Style,
) -> LineBuilder {
    row.styled(" (", dim)
        .link(
            Span::styled("HTTPS", link_style),
            format!("https://{}", contact.value),
        )
        .styled(" or ", dim)
        .link(Span::styled("SSH", link_style), ssh)
        .styled(")", dim)
        .styled("  // you're already here!", dim)
}

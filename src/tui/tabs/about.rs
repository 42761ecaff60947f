use ratatui::text::Span;

use crate::core::content::Profile;
use crate::tui::text::{Document, LineBuilder, wrap_styled};
use crate::tui::theme::{BANNER, Theme};

const MAX_BIO_WIDTH: usize = 70;

pub(super) fn render(profile: &Profile, theme: &Theme, width: usize) -> Document {
    let mut doc = Document::new();

    let fallback = [profile.name.clone()];
    let banner: &[String] = if profile.banner.is_empty() {
        &fallback
    } else {
        &profile.banner
    };
    for (i, line) in banner.iter().enumerate() {
        let color = BANNER[i % BANNER.len()];
        doc.push_line(Span::styled(line.clone(), Theme::bold(color)));
    }
    doc.blank();

    doc.push(
        LineBuilder::new()
            .styled(profile.role.clone(), theme.green_text)
            .styled("  ◆  ", theme.dim_text)
            .styled(profile.location.clone(), theme.secondary_text),
    );
    doc.blank();

    let bio_width = width.saturating_sub(8).min(MAX_BIO_WIDTH).max(1);
    let mut bio = Document::new();
    for line in wrap_styled(&profile.bio, bio_width, theme.body_text) {
        bio.push_line(line);
    }
    doc.append(bio.boxed(bio_width, 1, 2, theme.border));

    doc
}

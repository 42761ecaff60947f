use super::{content_width, section_header};
use crate::core::content::Education;
use crate::tui::text::{Document, LineBuilder, wrap};
use crate::tui::theme::Theme;

const INDENT: &str = "   ";

pub(super) fn render(education: &[Education], theme: &Theme, width: usize) -> Document {
    let mut doc = Document::new();
    section_header(&mut doc, "Education & Certifications", theme);

    let details_width = content_width(width).saturating_sub(6).max(1);

    for (i, edu) in education.iter().enumerate() {
        doc.push(
            LineBuilder::new()
                .styled("🎓 ", theme.highlight_text)
                .styled(edu.degree.clone(), theme.accent_text),
        );
        doc.push(
            LineBuilder::new()
                .raw(INDENT)
                .styled(edu.institution.clone(), theme.secondary_text)
                .raw("  ")
                .styled(format!("({})", edu.period), theme.dim_text),
        );
        if !edu.details.trim().is_empty() {
            for line in wrap(&edu.details, details_width) {
                doc.push(LineBuilder::new().raw(INDENT).styled(line, theme.muted_text));
            }
        }
        if i + 1 < education.len() {
            doc.blank();
        }
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_store;

    #[test]
    fn test_entry_layout() {
        let store = sample_store();
        let text = render(&store.education, &Theme::default(), 80).plain_text();
        assert_eq!(
            text,
            "Education & Certifications\n\n\
             🎓 B.S. Mathematics\n   \
             Example College  (May 2019)\n   \
             Minor in Computer Science.\n"
        );
    }

    #[test]
    fn test_entries_separated_by_blank_line() {
        let entry = |degree: &str| Education {
            degree: degree.to_string(),
            institution: "Somewhere".to_string(),
            period: "2020".to_string(),
            details: String::new(),
        };
        let doc = render(&[entry("A"), entry("B")], &Theme::default(), 80);
        let rows: Vec<String> = doc.plain_text().lines().map(str::to_string).collect();
        assert_eq!(rows.len(), 2 + 2 + 1 + 2);
        assert_eq!(rows[4], "");
        assert_eq!(rows[5], "🎓 B");
    }
}

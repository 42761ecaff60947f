//! # Styled Text Blocks
//!
//! Tab renderers produce a [`Document`]: pre-wrapped ratatui lines plus the
//! positions of any hyperlinks inside them. Links are kept out of the span
//! text itself so that width arithmetic only ever sees printable cells; the
//! OSC-8 escapes are added when the frame is encoded (see `frame.rs`).

use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// A hyperlink covering `width` cells of one line, starting at `column`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub line: usize,
    pub column: usize,
    pub width: usize,
    pub url: String,
}

/// One line under construction, tracking its width and any linked spans.
#[derive(Clone, Debug, Default)]
pub struct LineBuilder {
    spans: Vec<Span<'static>>,
    links: Vec<(usize, usize, String)>,
    width: usize,
}

impl LineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn span(mut self, span: Span<'static>) -> Self {
        self.width += span.width();
        self.spans.push(span);
        self
    }

    pub fn spans(self, spans: impl IntoIterator<Item = Span<'static>>) -> Self {
        spans.into_iter().fold(self, LineBuilder::span)
    }

    pub fn styled(self, content: impl Into<String>, style: Style) -> Self {
        self.span(Span::styled(content.into(), style))
    }

    pub fn raw(self, content: impl Into<String>) -> Self {
        self.span(Span::raw(content.into()))
    }

    /// Append a span that should be clickable, pointing at `url`.
    pub fn link(mut self, span: Span<'static>, url: impl Into<String>) -> Self {
        self.links.push((self.width, span.width(), url.into()));
        self.span(span)
    }

    /// Display width in cells.
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Pre-wrapped, styled lines ready to be placed in a viewport.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    lines: Vec<Line<'static>>,
    links: Vec<Link>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push_line(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn push(&mut self, line: LineBuilder) {
        let row = self.lines.len();
        self.links
            .extend(line.links.into_iter().map(|(column, width, url)| Link {
                line: row,
                column,
                width,
                url,
            }));
        self.lines.push(Line::from(line.spans));
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Append `other` below this document, keeping its links attached to
    /// their lines.
    pub fn append(&mut self, other: Document) {
        let offset = self.lines.len();
        self.links.extend(other.links.into_iter().map(|link| Link {
            line: link.line + offset,
            ..link
        }));
        self.lines.extend(other.lines);
    }

    /// Surround the document with a rounded border.
    ///
    /// `inner_width` is the text width; `vertical` and `horizontal` blank
    /// padding sit between the text and the border. Lines are padded so the
    /// right edge of the border lines up.
    pub fn boxed(
        self,
        inner_width: usize,
        vertical: usize,
        horizontal: usize,
        border: Style,
    ) -> Document {
        let span_width = inner_width + 2 * horizontal;
        let edge = "─".repeat(span_width);
        let blank_row = || {
            LineBuilder::new()
                .styled("│", border)
                .raw(" ".repeat(span_width))
                .styled("│", border)
        };

        let mut boxed = Document::new();
        boxed.push_line(Span::styled(format!("╭{edge}╮"), border));
        for _ in 0..vertical {
            boxed.push(blank_row());
        }

        let body_start = boxed.len();
        for line in self.lines {
            let fill = (inner_width + horizontal).saturating_sub(line.width());
            boxed.push(
                LineBuilder::new()
                    .styled("│", border)
                    .raw(" ".repeat(horizontal))
                    .spans(line.spans)
                    .raw(" ".repeat(fill))
                    .styled("│", border),
            );
        }
        boxed.links.extend(self.links.into_iter().map(|link| Link {
            line: link.line + body_start,
            column: link.column + 1 + horizontal,
            ..link
        }));

        for _ in 0..vertical {
            boxed.push(blank_row());
        }
        boxed.push_line(Span::styled(format!("╰{edge}╯"), border));
        boxed
    }

    /// The text without styles or links, one line per row.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            for span in &line.spans {
                out.push_str(&span.content);
            }
            out.push('\n');
        }
        out
    }
}

/// Wrap `text` to `width` columns. Existing newlines are kept as hard breaks.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let options = textwrap::Options::new(width.max(1)).break_words(true);
    textwrap::wrap(text.trim(), options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Wrap `text` and style every resulting line the same way.
pub fn wrap_styled(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

/// Lay out tags left to right, starting a new row whenever the next tag
/// would overflow `max_width`. A tag wider than `max_width` gets a row of
/// its own.
pub fn tag_rows(tags: &[String], style: Style, max_width: usize) -> Vec<Vec<Span<'static>>> {
    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for tag in tags {
        let span = Span::styled(format!(" {tag} "), style);
        let width = span.width();
        if !current.is_empty() && used + width > max_width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        used += width;
        current.push(span);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

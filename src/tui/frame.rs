//! # Frames
//!
//! A [`Frame`] is one complete screen: a ratatui [`Buffer`] the components
//! draw into, plus the hyperlink regions they registered. [`Frame::to_ansi`]
//! turns it into a single self-contained string that repaints every cell,
//! so the session layer never has to diff or remember anything.
//!
//! ## Hyperlinks
//!
//! OSC-8 escapes (`ESC ] 8 ; ; url ESC \ text ESC ] 8 ; ; ESC \`) are
//! zero-width on terminals that understand them and ignored by those that
//! don't. Putting them inside cell symbols would poison every width
//! calculation, so links live beside the buffer and are spliced in while
//! encoding.

use crossterm::Command;
use crossterm::cursor::MoveTo;
use crossterm::style::{
    Attribute, Color as CColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

const OSC8_CLOSE: &str = "\x1b]8;;\x1b\\";

/// Opening half of an OSC-8 hyperlink.
fn osc8_open(url: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\")
}

/// A clickable run of cells on one screen row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct Frame {
    buffer: Buffer,
    links: Vec<LinkRegion>,
}

impl Frame {
    pub fn new(area: Rect) -> Self {
        Self {
            buffer: Buffer::empty(area),
            links: Vec::new(),
        }
    }

    pub fn area(&self) -> Rect {
        self.buffer.area
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    pub fn links(&self) -> &[LinkRegion] {
        &self.links
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        widget.render(area, &mut self.buffer);
    }

    /// Register a hyperlink. The region is clipped to the frame; a region
    /// that falls entirely outside it is dropped.
    pub fn add_link(&mut self, x: u16, y: u16, width: u16, url: &str) {
        let area = self.area();
        if y < area.top() || y >= area.bottom() || x < area.left() || x >= area.right() {
            return;
        }
        let width = width.min(area.right() - x);
        if width == 0 {
            return;
        }
        self.links.push(LinkRegion {
            x,
            y,
            width,
            url: url.to_string(),
        });
    }

    /// Encode the whole frame as ANSI text.
    ///
    /// Each row starts with an absolute cursor move, SGR sequences are only
    /// emitted when the style changes, and every row ends with the
    /// attributes reset.
    pub fn to_ansi(&self) -> String {
        let area = self.area();
        let mut out = String::with_capacity(area.area() as usize * 4);

        for y in area.top()..area.bottom() {
            push_command(&mut out, MoveTo(area.x, y));
            let row_links: Vec<&LinkRegion> = self.links.iter().filter(|l| l.y == y).collect();

            let mut current: Option<(Color, Color, Modifier)> = None;
            let mut link_end: Option<u16> = None;
            let mut to_skip = 0usize;

            for x in area.left()..area.right() {
                if link_end.is_some_and(|end| x >= end) {
                    out.push_str(OSC8_CLOSE);
                    link_end = None;
                }
                if to_skip > 0 {
                    to_skip -= 1;
                    continue;
                }
                if link_end.is_none()
                    && let Some(link) = row_links.iter().find(|l| l.x == x)
                {
                    out.push_str(&osc8_open(&link.url));
                    link_end = Some(x + link.width);
                }

                let cell = &self.buffer[(x, y)];
                let style = (cell.fg, cell.bg, cell.modifier);
                if current != Some(style) {
                    push_style(&mut out, style);
                    current = Some(style);
                }
                out.push_str(cell.symbol());
                // The next cells are covered by a wide glyph.
                to_skip = cell.symbol().width().saturating_sub(1);
            }

            if link_end.is_some() {
                out.push_str(OSC8_CLOSE);
            }
            push_command(&mut out, SetAttribute(Attribute::Reset));
        }
        out
    }
}

fn push_command(out: &mut String, command: impl Command) {
    // Writing into a String cannot fail.
    let _ = command.write_ansi(out);
}

fn push_style(out: &mut String, (fg, bg, modifier): (Color, Color, Modifier)) {
    push_command(out, SetAttribute(Attribute::Reset));
    if fg != Color::Reset {
        push_command(out, SetForegroundColor(to_crossterm(fg)));
    }
    if bg != Color::Reset {
        push_command(out, SetBackgroundColor(to_crossterm(bg)));
    }
    for (flag, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::SLOW_BLINK, Attribute::SlowBlink),
        (Modifier::RAPID_BLINK, Attribute::RapidBlink),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::HIDDEN, Attribute::Hidden),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ] {
        if modifier.contains(flag) {
            push_command(out, SetAttribute(attribute));
        }
    }
}

fn to_crossterm(color: Color) -> CColor {
    match color {
        Color::Reset => CColor::Reset,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightBlue => CColor::Blue,
        Color::LightYellow => CColor::Yellow,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Indexed(i) => CColor::AnsiValue(i),
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
    }
}

/// Strip every escape sequence from encoded output, leaving the visible
/// characters. Test helper for asserting on frame text.
#[cfg(test)]
pub fn strip_ansi(encoded: &str) -> String {
    let mut out = String::new();
    let mut chars = encoded.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            // CSI: parameters until a final byte in @..~
            Some('[') => {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            // OSC: until ESC \
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    out
}

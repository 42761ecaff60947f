//! Palette and named styles shared by every renderer.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0xDC, 0x26, 0x26);
pub const ACCENT_DIM: Color = Color::Rgb(0xF8, 0x71, 0x71);
pub const SECONDARY: Color = Color::Rgb(0x06, 0xB6, 0xD4);
pub const GREEN: Color = Color::Rgb(0x10, 0xB9, 0x81);
pub const PINK: Color = Color::Rgb(0xEC, 0x48, 0x99);
pub const ORANGE: Color = Color::Rgb(0xF9, 0x73, 0x16);
pub const YELLOW: Color = Color::Rgb(0xFB, 0xBF, 0x24);
pub const TEXT: Color = Color::Rgb(0xE2, 0xE8, 0xF0);
pub const MUTED: Color = Color::Rgb(0x94, 0xA3, 0xB8);
pub const DIM: Color = Color::Rgb(0x64, 0x74, 0x8B);
pub const SUBTLE: Color = Color::Rgb(0x33, 0x41, 0x55);
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const TAG_BG: Color = Color::Rgb(0x0E, 0x3A, 0x4A);

/// Banner gradient, one colour per line (cycled).
pub const BANNER: [Color; 6] = [
    Color::Rgb(0xF8, 0x71, 0x71),
    Color::Rgb(0xDC, 0x26, 0x26),
    Color::Rgb(0xB9, 0x1C, 0x1C),
    Color::Rgb(0xDC, 0x26, 0x26),
    Color::Rgb(0xF8, 0x71, 0x71),
    Color::Rgb(0xFC, 0xA5, 0xA5),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub section_header: Style,
    pub accent_text: Style,
    pub secondary_text: Style,
    pub muted_text: Style,
    pub dim_text: Style,
    pub body_text: Style,
    pub highlight_text: Style,
    pub green_text: Style,
    pub tag: Style,
    pub period_badge: Style,
    pub active_tab: Style,
    pub inactive_tab: Style,
    /// Layered on top of the active or inactive style.
    pub hover_tab: Style,
    pub tab_rule: Style,
    pub footer_key: Style,
    pub footer_desc: Style,
    pub bullet: Style,
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            section_header: bold.fg(ACCENT).add_modifier(Modifier::UNDERLINED),
            accent_text: bold.fg(ACCENT),
            secondary_text: bold.fg(SECONDARY),
            muted_text: Style::default().fg(MUTED),
            dim_text: Style::default().fg(DIM),
            body_text: Style::default().fg(TEXT),
            highlight_text: bold.fg(YELLOW),
            green_text: bold.fg(GREEN),
            tag: bold.fg(SECONDARY).bg(TAG_BG),
            period_badge: bold.fg(WHITE).bg(SUBTLE),
            active_tab: bold.fg(WHITE).bg(ACCENT),
            inactive_tab: Style::default().fg(MUTED),
            hover_tab: Style::default()
                .fg(ACCENT_DIM)
                .add_modifier(Modifier::UNDERLINED),
            tab_rule: Style::default().fg(ACCENT),
            footer_key: bold.fg(ACCENT_DIM),
            footer_desc: Style::default().fg(DIM),
            bullet: bold.fg(GREEN),
            border: Style::default().fg(SUBTLE),
        }
    }
}

impl Theme {
    /// Bold text in an arbitrary colour (category headers, contact icons).
    pub fn bold(color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Style for one tab given whether it is active and whether it is hovered.
    pub fn tab(&self, active: bool, hovered: bool) -> Style {
        match (active, hovered) {
            (true, false) => self.active_tab,
            // Keep the active colours; only pick up the underline.
            (true, true) => self.active_tab.add_modifier(Modifier::UNDERLINED),
            (false, true) => self.inactive_tab.patch(self.hover_tab),
            (false, false) => self.inactive_tab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_styles_are_distinct() {
        let theme = Theme::default();
        let styles = [
            theme.tab(false, false),
            theme.tab(false, true),
            theme.tab(true, false),
            theme.tab(true, true),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_hovered_active_tab_keeps_active_background() {
        let theme = Theme::default();
        assert_eq!(theme.tab(true, true).bg, Some(ACCENT));
        assert!(
            theme
                .tab(true, true)
                .add_modifier
                .contains(Modifier::UNDERLINED)
        );
    }
}

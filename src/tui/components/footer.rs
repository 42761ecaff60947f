//! # Footer Component
//!
//! A blank margin row followed by the centred key legend. When the
//! viewport can scroll, the legend also carries the scroll position.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::frame::Frame;
use crate::tui::theme::Theme;

const SEPARATOR: &str = "  •  ";

pub struct Footer<'a> {
    pub theme: &'a Theme,
    /// Scroll progress in `0.0..=1.0`, `None` when the content fits.
    pub scroll_percent: Option<f64>,
}

impl<'a> Footer<'a> {
    pub fn new(theme: &'a Theme, scroll_percent: Option<f64>) -> Self {
        Self {
            theme,
            scroll_percent,
        }
    }

    fn legend(&self) -> Line<'static> {
        let theme = self.theme;
        let separator = || Span::styled(SEPARATOR, theme.dim_text);
        let mut spans = vec![
            Span::styled("←/→", theme.footer_key),
            Span::styled(" navigate", theme.footer_desc),
            separator(),
            Span::styled("↑/↓", theme.footer_key),
            Span::styled(" scroll", theme.footer_desc),
            separator(),
            Span::styled("q", theme.footer_key),
            Span::styled(" quit", theme.footer_desc),
        ];
        if let Some(percent) = self.scroll_percent {
            spans.push(separator());
            spans.push(Span::styled(
                format!("{:>3.0}%", percent * 100.0),
                theme.footer_desc,
            ));
        }
        Line::from(spans)
    }
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        // First row is margin.
        let legend_row = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(self.legend()).alignment(Alignment::Center),
            legend_row,
        );
    }
}

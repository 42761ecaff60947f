//! # Screen Layout Arithmetic
//!
//! Terminal dimensions and the tab-bar geometry shared by rendering and
//! pointer hit-testing.
//!
//! ```text
//! row 0        │  About  │  Experience  │  Projects  │ ...   tab row
//! row 1        ────────────────────────────────────────────  tab underline
//! row 2        (content padding)
//! rows 3..h-3  viewport
//! row h-3      (content padding)
//! row h-2      (footer margin)
//! row h-1      ←/→ navigate  •  ↑/↓ scroll  •  q quit
//! ```
//!
//! The renderer and the hit-test both walk [`tab_extents`], so the two can
//! never disagree about where a tab starts and ends.
//!
//! On short terminals [`Dimensions::rows`] gives the viewport its rows
//! first, then hands what is left to the chrome in priority order: tab
//! labels, legend, underline, top padding, bottom padding, footer margin.

use std::ops::Range;

use unicode_width::UnicodeWidthStr;

/// Blank cells on each side of a tab label.
pub const TAB_PADDING: usize = 2;
/// Rows taken by the tab bar (label row + underline).
pub const TAB_BAR_HEIGHT: u16 = 2;
/// Tab bar plus the content block's top and bottom padding.
pub const HEADER_HEIGHT: u16 = TAB_BAR_HEIGHT + 2;
/// Margin row plus the key legend.
pub const FOOTER_HEIGHT: u16 = 2;

/// Substituted when the terminal reports a zero width.
pub const MIN_WIDTH: u16 = 80;
/// Substituted when the terminal reports a zero height.
pub const MIN_HEIGHT: u16 = 24;

/// Terminal size as seen by the view model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: MIN_WIDTH,
            height: MIN_HEIGHT,
        }
    }
}

impl Dimensions {
    /// Build dimensions from a terminal report. A zero on either axis is
    /// replaced by the matching minimum; other values are taken as-is.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: if width == 0 { MIN_WIDTH } else { width },
            height: if height == 0 { MIN_HEIGHT } else { height },
        }
    }

    /// Rows left for the scrollable content, never less than one.
    pub fn usable_height(&self) -> u16 {
        self.height
            .saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT)
            .max(1)
    }

    /// How the screen's rows are split between the bands, top to bottom.
    /// The bands always sum to `height` and `content` is always
    /// [`usable_height`](Self::usable_height).
    pub fn rows(&self) -> RowBudget {
        let content = self.usable_height();
        let mut spare = self.height.saturating_sub(content);
        let mut take = || {
            let row = spare.min(1);
            spare -= row;
            row
        };
        let tab_labels = take();
        let legend = take();
        let underline = take();
        let padding_top = take();
        let padding_bottom = take();
        let margin = take();
        RowBudget {
            tab_bar: tab_labels + underline,
            padding_top,
            content,
            padding_bottom,
            footer: margin + legend,
        }
    }
}

/// Rows given to each horizontal band of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowBudget {
    /// Label row, then the underline when there is room for it.
    pub tab_bar: u16,
    pub padding_top: u16,
    pub content: u16,
    pub padding_bottom: u16,
    /// Margin row when there is room for it, then the legend.
    pub footer: u16,
}

impl RowBudget {
    pub fn total(&self) -> u16 {
        self.tab_bar + self.padding_top + self.content + self.padding_bottom + self.footer
    }
}

/// Rendered width of a single tab: label plus padding on both sides.
pub fn tab_width(label: &str) -> usize {
    label.width() + 2 * TAB_PADDING
}

/// Horizontal cell range of every tab, left to right, starting at column 0.
pub fn tab_extents(labels: &[&str]) -> Vec<Range<usize>> {
    let mut start = 0;
    labels
        .iter()
        .map(|label| {
            let end = start + tab_width(label);
            let range = start..end;
            start = end;
            range
        })
        .collect()
}

/// Map a pointer column to the tab under it.
///
/// Returns `None` when `x` lies past the last tab.
pub fn hit_test(labels: &[&str], x: u16) -> Option<usize> {
    let x = x as usize;
    let mut end = 0;
    for (index, label) in labels.iter().enumerate() {
        end += tab_width(label);
        if x < end {
            return Some(index);
        }
    }
    None
}

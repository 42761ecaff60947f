//! # Tabs
//!
//! The fixed, ordered set of content views. Navigation is modular arithmetic
//! over [`Tab::ALL`], so an out-of-range tab simply cannot be constructed.

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Tab {
    #[default]
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Contact,
}

impl Tab {
    /// Every tab, in tab-bar order.
    pub const ALL: [Tab; 6] = [
        Tab::About,
        Tab::Experience,
        Tab::Projects,
        Tab::Skills,
        Tab::Education,
        Tab::Contact,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in the tab bar (0-based).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    /// Label shown in the tab bar
    pub fn label(self) -> &'static str {
        match self {
            Tab::About => "About",
            Tab::Experience => "Experience",
            Tab::Projects => "Projects",
            Tab::Skills => "Skills",
            Tab::Education => "Education",
            Tab::Contact => "Contact",
        }
    }

    /// Cycles to the next tab (wraps around)
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Cycles to the previous tab (wraps around)
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    /// Labels of all tabs in order.
    pub fn labels() -> [&'static str; Self::COUNT] {
        Self::ALL.map(Tab::label)
    }
}

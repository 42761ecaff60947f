//! # TUI Components
//!
//! The fixed chrome around the viewport.
//!
//! Both components are stateless: they receive everything they draw as
//! props and are rebuilt for every frame. The stateful pieces of the screen
//! (the viewport and the view model that owns it) live one level up.
//!
//! ```text
//! components/
//! ├── mod.rs      (this file)
//! ├── tab_bar.rs  (tab labels + underline rule)
//! └── footer.rs   (margin row + key legend)
//! ```

pub mod footer;
pub mod tab_bar;

pub use footer::Footer;
pub use tab_bar::TabBar;

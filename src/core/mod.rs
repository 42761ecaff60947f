//! # Core Application Logic
//!
//! Everything termfolio knows that is independent of a terminal: the
//! portfolio data, the tab set, navigation state and the layout arithmetic
//! the view model builds on.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Content (read-only)  │
//!                    │  • Tab / Navigation     │
//!                    │  • Layout arithmetic    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`content`]: The `ContentStore`: portfolio tables, one per tab
//! - [`tab`]: The `Tab` enum, the fixed, ordered set of views
//! - [`navigation`]: Active and hovered tab
//! - [`layout`]: Terminal dimensions and tab-bar geometry
//! - [`config`]: Settings file, env vars and CLI overrides
//!
//! `config` is the exception to "no I/O": it reads `~/.termfolio/` once at
//! start-up, before any session state exists.

pub mod config;
pub mod content;
pub mod layout;
pub mod navigation;
pub mod tab;

//! TUI presentation layer.

pub mod setup;
pub mod theme;
pub mod widgets;

pub use setup::TerminalEventGuard;
pub use theme::{Spacing, Theme};

//! Interactive TUI for the demo terminal (ratatui/crossterm).
//!
//! - `app`: event loop, key routing, scoped terminal session guard
//! - `ui`: transcript + input bar rendering
//! - `theme`: colors for TUI and CLI output

pub mod app;
pub mod theme;
pub mod ui;

pub use app::{run, InputResult, TerminalSession};
pub use theme::Theme;

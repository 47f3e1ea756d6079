//! UI Module - terminal output
//!
//! - [`theme`] - Colors and column widths
//! - [`output`] - Tagged status lines and the terminal [`Reporter`](nex_core::Reporter)
//! - [`list`] - Row formatting for `list` and `search`

pub mod list;
pub mod output;
pub mod theme;

pub use output::TerminalReporter;
pub use theme::Theme;

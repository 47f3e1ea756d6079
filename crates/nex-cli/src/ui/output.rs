//! Tagged status lines.
//!
//! Progress goes to stdout; warnings and errors go to stderr so that
//! scripted callers can still parse regular output.

use super::theme::Theme;
use crossterm::style::Stylize;
use nex_core::Reporter;

fn tag(label: &str, color: crossterm::style::Color) -> String {
    format!("[{label}]").with(color).bold().to_string()
}

/// Print `[INFO] msg` to stdout.
pub fn print_info(msg: &str) {
    println!("{} {msg}", tag("INFO", Theme::default().colors.info));
}

/// Print `[OK] msg` to stdout.
pub fn print_success(msg: &str) {
    println!("{} {msg}", tag("OK", Theme::default().colors.success));
}

/// Print `[WARN] msg` to stderr.
pub fn print_warning(msg: &str) {
    eprintln!("{} {msg}", tag("WARN", Theme::default().colors.warning));
}

/// Print `[ERROR] msg` to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {msg}", tag("ERROR", Theme::default().colors.error));
}

/// [`Reporter`] writing tagged lines to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn info(&self, msg: &str) {
        print_info(msg);
    }

    fn success(&self, msg: &str) {
        print_success(msg);
    }

    fn warning(&self, msg: &str) {
        print_warning(msg);
    }

    fn error(&self, msg: &str) {
        print_error(msg);
    }
}

//! List output formatting

use super::theme::Theme;
use crossterm::style::Stylize;

/// Print a section title followed by a blank line.
pub fn print_list_header(title: &str) {
    println!();
    println!("  {}", title.dark_grey());
    println!();
}

/// Print one `id  version  detail` row.
pub fn print_list_row(name: &str, version: &str, detail: &str) {
    println!("  {}", format_list_row(name, version, detail));
}

/// The styled text of one list row, without indentation.
pub fn format_list_row(name: &str, version: &str, detail: &str) -> String {
    let theme = Theme::default();
    let name_part = format!("{name: <width$}", width = theme.layout.name_width);
    let version_part = format!("{version: <width$}", width = theme.layout.version_width);
    format!(
        "{} {} {}",
        name_part.with(theme.colors.package_name),
        version_part.with(theme.colors.version),
        detail.with(theme.colors.secondary)
    )
}

/// Print the `N packages total` footer.
pub fn print_list_footer(count: usize, noun: &str) {
    println!();
    let plural = if count == 1 { "" } else { "s" };
    println!("  {}", format!("{count} {noun}{plural}").dark_grey());
    println!();
}

/// Print `label  value` with the label in the header color.
pub fn print_field(label: &str, value: &str) {
    let theme = Theme::default();
    let label = format!("{label: <width$}", width = theme.layout.label_width);
    println!("  {}{value}", label.with(theme.colors.header));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_contains_all_columns() {
        let row = format_list_row("alice.hello", "1.0.0", "2026-01-01");
        assert!(row.contains("alice.hello"));
        assert!(row.contains("1.0.0"));
        assert!(row.contains("2026-01-01"));
    }
}

//! List command

use crate::ui::list::{print_list_footer, print_list_header, print_list_row};
use crossterm::style::Stylize;
use nex_core::Context;
use nex_core::ops::is_installed;

/// List installed packages
pub fn list(ctx: &Context) {
    let records = ctx.installed().list();

    if records.is_empty() {
        println!();
        println!("  No packages installed.");
        println!("  Run 'nex install <package>' to get started.");
        return;
    }

    print_list_header("Installed packages");

    for record in &records {
        let date = record
            .installed_at
            .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        let detail = if is_installed(&ctx.paths, &record.id) {
            date
        } else {
            format!("{date} {}", "missing".red())
        };
        print_list_row(&record.id.to_string(), &record.version, detail.trim_start());
    }

    print_list_footer(records.len(), "package");
}

//! Search command

use crate::ui::list::{print_list_footer, print_list_row};
use anyhow::Result;
use crossterm::style::Stylize;
use nex_core::Context;
use nex_core::ops;

/// Search the registry index
pub async fn search(ctx: &Context, query: &str) -> Result<()> {
    let results = ops::search(ctx, query).await?;

    if results.is_empty() {
        println!();
        println!("  No packages found matching '{}'", query.white());
        println!();
        return Ok(());
    }

    println!();
    for entry in &results {
        let short = entry.short_name.as_deref().unwrap_or("");
        let description = entry.description.as_deref().unwrap_or("");
        print_list_row(&entry.id, short, description);
    }
    print_list_footer(results.len(), "result");

    Ok(())
}

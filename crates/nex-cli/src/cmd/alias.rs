//! Alias command

use anyhow::{Result, bail};
use crossterm::style::Stylize;
use nex_core::Context;
use nex_core::ops;

/// List, show, set or remove aliases.
///
/// - no arguments: list every alias
/// - `short`: show its target
/// - `short package`: point `short` at the resolved id of `package`
/// - `--remove short`: delete it
pub async fn alias(
    ctx: &Context,
    remove: bool,
    short: Option<&str>,
    package: Option<&str>,
) -> Result<()> {
    let store = ctx.aliases();

    match (remove, short, package) {
        (true, None, _) => bail!("Usage: nex alias --remove <alias>"),
        (true, Some(short), _) => {
            let target = store.unset(short)?;
            ctx.reporter
                .success(&format!("Removed alias '{short}' (was {target})"));
        }
        (false, None, _) => {
            let aliases = store.load();
            if aliases.is_empty() {
                println!("No aliases defined.");
                println!("Create one with: nex alias <short> <package>");
                return Ok(());
            }
            println!();
            for (name, target) in aliases.iter() {
                println!("  {} -> {}", name.cyan(), target);
            }
            println!();
        }
        (false, Some(short), None) => match store.lookup(short) {
            Some(target) => println!("{short} -> {target}"),
            None => bail!("Alias '{short}' does not exist"),
        },
        (false, Some(short), Some(package)) => {
            let id = ops::resolve(ctx, package).await?;
            store.set(short, &id)?;
            ctx.reporter.success(&format!("Alias '{short}' -> {id}"));
        }
    }
    Ok(())
}

//! Config command

use crate::ui::list::print_field;
use anyhow::{Result, bail};
use crossterm::style::Stylize;
use nex_core::Context;
use nex_core::store::ConfigValue;
use nex_core::store::config::KNOWN_KEYS;

/// List, show, set or unset configuration keys.
pub fn config(ctx: &Context, unset: bool, key: Option<&str>, value: Option<&str>) -> Result<()> {
    let store = ctx.config();

    match (unset, key, value) {
        (true, None, _) => bail!("Usage: nex config --unset <key>"),
        (true, Some(key), _) => {
            if store.unset(key)? {
                ctx.reporter.success(&format!("Removed '{key}'"));
            } else {
                ctx.reporter.info(&format!("'{key}' was not set"));
            }
        }
        (false, None, _) => {
            let config = store.load();
            println!();
            let mut any = false;
            for (key, value) in config.entries() {
                print_field(key, &value.to_string());
                any = true;
            }
            if !any {
                println!("  {}", "No configuration set.".dark_grey());
            }
            println!();
            println!("  {}", "Available keys".dark_grey());
            for (key, description) in KNOWN_KEYS {
                print_field(key, description);
            }
            println!();
        }
        (false, Some(key), None) => match store.load().get(key) {
            Some(value) => println!("{value}"),
            None => println!("(not set)"),
        },
        (false, Some(key), Some(raw)) => {
            let value = ConfigValue::parse(raw);
            store.set(key, value.clone())?;
            ctx.reporter.success(&format!("Set {key} = {value}"));
        }
    }
    Ok(())
}

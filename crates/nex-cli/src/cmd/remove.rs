//! Remove command

use anyhow::Result;
use nex_core::Context;
use nex_core::ops;

/// Remove an installed package given by alias, id, or installed short name.
pub async fn remove(ctx: &Context, package: &str) -> Result<()> {
    let id = ops::resolve_installed(ctx, package).await?;
    ops::remove(ctx, &id)?;
    Ok(())
}

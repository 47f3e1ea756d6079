//! Install command

use anyhow::Result;
use nex_core::Context;
use nex_core::ops::{self, InstallOutcome};

/// Resolve and install a package.
pub async fn install(ctx: &Context, package: &str) -> Result<()> {
    let id = ops::resolve(ctx, package).await?;
    if let InstallOutcome::Installed { .. } = ops::install(ctx, &id).await? {
        ctx.reporter.info(&format!("Run with: nex run {id}"));
    }
    Ok(())
}

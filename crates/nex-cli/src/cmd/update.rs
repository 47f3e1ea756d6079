//! Update command

use anyhow::{Result, bail};
use nex_core::Context;
use nex_core::ops::{self, UpdateOutcome, is_installed};
use nex_schema::PackageId;

/// Update one package, or every installed package when none is given.
pub async fn update(ctx: &Context, package: Option<&str>, force: bool) -> Result<()> {
    let targets: Vec<PackageId> = match package {
        Some(name) => vec![ops::resolve_installed(ctx, name).await?],
        None => ctx
            .installed()
            .list()
            .into_iter()
            .map(|record| record.id)
            .filter(|id| is_installed(&ctx.paths, id))
            .collect(),
    };

    if targets.is_empty() {
        ctx.reporter.info("No packages installed.");
        return Ok(());
    }

    let single = package.is_some();
    let mut failed = 0usize;
    for id in &targets {
        match ops::update(ctx, id, force).await {
            Ok(UpdateOutcome::UpToDate { version }) => {
                ctx.reporter
                    .info(&format!("{id} is up to date (v{version})"));
            }
            Ok(UpdateOutcome::Updated { from, to }) => {
                ctx.reporter.success(&format!("Updated {id}: {from} -> {to}"));
            }
            Err(e) if single => return Err(e.into()),
            Err(e) => {
                ctx.reporter.error(&format!("{id}: {e}"));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} packages failed to update", targets.len());
    }
    Ok(())
}

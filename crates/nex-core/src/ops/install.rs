//! Installing a package: fetch manifest, clone, record.

use crate::registry::FetchedManifest;
use crate::{Context, NexError, NexPaths, Result, process};
use nex_schema::{LocalInstallation, Manifest, PackageId};
use std::path::PathBuf;

/// Whether `id` is installed. The package directory is the ground truth;
/// `installed.json` is not consulted.
pub fn is_installed(paths: &NexPaths, id: &PackageId) -> bool {
    paths.package_dir(id).is_dir()
}

/// What happened to the `install` command of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// The manifest has no `install` command.
    NotDeclared,
    /// The hook exited with status 0.
    Succeeded,
    /// The hook failed with this exit code. The package is still installed.
    Failed(i32),
}

/// Result of a successful [`install`].
#[derive(Debug, Clone)]
pub enum InstallOutcome {
    /// The package was cloned and recorded.
    Installed {
        /// The manifest it was installed from.
        manifest: Box<Manifest>,
        /// Outcome of the post-clone hook.
        hook: HookStatus,
    },
    /// The package directory already existed; nothing was changed.
    AlreadyInstalled(PathBuf),
}

/// Install `id` from the registry.
///
/// Re-installing is a no-op: if `packages/<id>/` exists the call succeeds
/// with [`InstallOutcome::AlreadyInstalled`]. A failing `install` hook is
/// reported as a warning and does not fail the install.
///
/// # Errors
///
/// Returns registry errors from fetching the manifest,
/// [`NexError::Subprocess`] if the clone fails, or I/O errors writing the
/// install tree and `installed.json`.
pub async fn install(ctx: &Context, id: &PackageId) -> Result<InstallOutcome> {
    ctx.reporter
        .info(&format!("Fetching package info for {id}..."));
    let fetched = ctx.registry.fetch_manifest(&ctx.http, id).await?;
    install_fetched(ctx, id, fetched).await
}

/// Install `id` from an already fetched manifest.
///
/// # Errors
///
/// As [`install`], minus the registry errors.
pub async fn install_fetched(
    ctx: &Context,
    id: &PackageId,
    fetched: FetchedManifest,
) -> Result<InstallOutcome> {
    let FetchedManifest { manifest, raw } = fetched;
    if &manifest.id != id {
        tracing::warn!("Manifest for {id} declares id {}", manifest.id);
    }

    let install_path = ctx.paths.package_dir(id);
    if install_path.exists() {
        ctx.reporter.info(&format!(
            "{id} is already installed at {}",
            install_path.display()
        ));
        return Ok(InstallOutcome::AlreadyInstalled(install_path));
    }
    ctx.paths.ensure_directories()?;

    ctx.reporter.info(&format!(
        "Downloading {} v{}...",
        manifest.name, manifest.version
    ));
    ctx.cloner
        .clone_repo(&manifest.repository, &install_path)
        .await?;

    let manifest_path = install_path.join("manifest.json");
    tokio::fs::write(&manifest_path, &raw)
        .await
        .map_err(|e| NexError::io("Failed to write manifest", &manifest_path, e))?;

    let hook = match manifest.install_hook() {
        None => HookStatus::NotDeclared,
        Some(script) => {
            ctx.reporter.info("Running install script...");
            match process::run_shell(script, Some(&install_path)).await {
                Ok(0) => HookStatus::Succeeded,
                Ok(code) => {
                    ctx.reporter
                        .warning(&format!("Install script exited with status {code}"));
                    HookStatus::Failed(code)
                }
                Err(e) => {
                    ctx.reporter
                        .warning(&format!("Install script could not be run: {e}"));
                    HookStatus::Failed(1)
                }
            }
        }
    };

    ctx.installed().upsert(LocalInstallation {
        id: id.clone(),
        version: manifest.version.clone(),
        install_path: install_path.clone(),
        is_installed: true,
        installed_at: Some(chrono::Utc::now().timestamp()),
    })?;

    ctx.reporter.success(&format!(
        "Installed {} v{}",
        manifest.name, manifest.version
    ));
    tracing::debug!("{id} installed to {}", install_path.display());

    Ok(InstallOutcome::Installed {
        manifest: Box::new(manifest),
        hook,
    })
}

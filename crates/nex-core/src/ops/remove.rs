//! Removing an installed package.

use crate::{Context, NexError, Result};
use nex_schema::PackageId;
use std::path::PathBuf;

/// Delete `packages/<id>/` and its `installed.json` record.
///
/// Returns the directory that was removed.
///
/// # Errors
///
/// Returns [`NexError::NotInstalled`] if the directory does not exist (a
/// stale record for it is pruned first), or I/O errors from the delete.
pub fn remove(ctx: &Context, id: &PackageId) -> Result<PathBuf> {
    let dir = ctx.paths.package_dir(id);
    if !dir.is_dir() {
        if ctx.installed().remove(id)? {
            tracing::warn!("Pruned stale installed.json entry for {id}");
        }
        return Err(NexError::NotInstalled(id.clone()));
    }

    ctx.reporter.info(&format!("Removing {id}..."));
    tracing::debug!("Deleting {}", dir.display());
    std::fs::remove_dir_all(&dir).map_err(|e| NexError::io("Failed to remove", &dir, e))?;
    ctx.installed().remove(id)?;
    ctx.reporter.success(&format!("Removed {id}"));
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::TestEnv;
    use crate::ops::install::tests::{HELLO_MANIFEST, registry_with};
    use crate::ops::{install, is_installed};
    use nex_schema::LocalInstallation;

    #[tokio::test]
    async fn test_remove_after_install() {
        let (server, _, _) = registry_with(HELLO_MANIFEST).await;
        let env = TestEnv::new(&server.url(), &[]);
        let id = PackageId::parse("alice.hello").unwrap();
        install(&env.ctx, &id).await.unwrap();

        let dir = remove(&env.ctx, &id).unwrap();
        assert!(!dir.exists());
        assert!(!is_installed(&env.ctx.paths, &id));
        assert!(env.ctx.installed().get(&id).is_none());
    }

    #[test]
    fn test_remove_absent_prunes_stale_record() {
        let env = TestEnv::new("http://127.0.0.1:9", &[]);
        let id = PackageId::parse("alice.hello").unwrap();
        env.ctx
            .installed()
            .upsert(LocalInstallation {
                id: id.clone(),
                version: "1".into(),
                install_path: env.ctx.paths.package_dir(&id),
                is_installed: true,
                installed_at: None,
            })
            .unwrap();

        assert!(matches!(
            remove(&env.ctx, &id),
            Err(NexError::NotInstalled(missing)) if missing == id
        ));
        assert!(env.ctx.installed().list().is_empty());
    }
}

//! Explicit upgrade of an installed package.

use crate::ops::install::install_fetched;
use crate::ops::run::load_local_manifest;
use crate::ops::is_installed;
use crate::{Context, NexError, Result};
use nex_schema::PackageId;
use std::path::Path;

/// Result of [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The registry version matches the installed one.
    UpToDate {
        /// Installed version.
        version: String,
    },
    /// The package was cloned and installed again.
    Updated {
        /// Version before the update.
        from: String,
        /// Version now installed.
        to: String,
    },
}

/// Re-install `id` if the registry manifest carries a different version,
/// or unconditionally with `force`.
///
/// The current working tree is moved aside while the new one is cloned and
/// restored if the install fails, so a failed update leaves the old version
/// in place.
///
/// # Errors
///
/// Returns [`NexError::NotInstalled`] if the package is absent, plus any
/// registry, filesystem or install error.
pub async fn update(ctx: &Context, id: &PackageId, force: bool) -> Result<UpdateOutcome> {
    if !is_installed(&ctx.paths, id) {
        return Err(NexError::NotInstalled(id.clone()));
    }

    let current = match ctx.installed().get(id) {
        Some(record) => record.version,
        None => load_local_manifest(&ctx.paths.package_dir(id))
            .map(|m| m.version)
            .unwrap_or_default(),
    };

    ctx.reporter.info(&format!("Checking {id}..."));
    let fetched = ctx.registry.fetch_manifest(&ctx.http, id).await?;
    let latest = fetched.manifest.version.clone();

    if !force && latest == current {
        return Ok(UpdateOutcome::UpToDate { version: current });
    }

    let dir = ctx.paths.package_dir(id);
    let previous = ctx.paths.packages_dir().join(format!(".{id}.previous"));
    if previous.exists() {
        remove_tree(&previous)?;
    }
    std::fs::rename(&dir, &previous)
        .map_err(|e| NexError::io("Failed to move aside", &dir, e))?;
    tracing::debug!("Moved {} to {}", dir.display(), previous.display());

    if let Err(e) = install_fetched(ctx, id, fetched).await {
        if dir.exists() {
            remove_tree(&dir)?;
        }
        std::fs::rename(&previous, &dir)
            .map_err(|e| NexError::io("Failed to restore", &previous, e))?;
        ctx.reporter
            .warning(&format!("Update of {id} failed; kept version {current}"));
        return Err(e);
    }

    if let Err(e) = remove_tree(&previous) {
        tracing::warn!("Leftover {}: {e}", previous.display());
    }
    Ok(UpdateOutcome::Updated {
        from: current,
        to: latest,
    })
}

fn remove_tree(path: &Path) -> Result<()> {
    std::fs::remove_dir_all(path).map_err(|e| NexError::io("Failed to remove", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::TestEnv;
    use crate::git::testing::FakeCloner;
    use crate::ops::install;
    use crate::ops::install::tests::{HELLO_MANIFEST, registry_with};
    use nex_schema::LocalInstallation;

    #[tokio::test]
    async fn test_up_to_date_is_left_alone() {
        let (server, _, _) = registry_with(HELLO_MANIFEST).await;
        let env = TestEnv::new(&server.url(), &[]);
        let id = PackageId::parse("alice.hello").unwrap();
        install(&env.ctx, &id).await.unwrap();

        let outcome = update(&env.ctx, &id, false).await.unwrap();
        assert_eq!(
            outcome,
            UpdateOutcome::UpToDate {
                version: "1.0.0".into()
            }
        );
        assert_eq!(env.cloner.call_count(), 1);
    }

    #[tokio::test]
    async fn test_new_version_reinstalls() {
        let (server, _, _) = registry_with(HELLO_MANIFEST).await;
        let env = TestEnv::new(&server.url(), &[]);
        let id = PackageId::parse("alice.hello").unwrap();
        install(&env.ctx, &id).await.unwrap();

        let mut record = env.ctx.installed().get(&id).unwrap();
        record.version = "0.9.0".into();
        env.ctx.installed().upsert(record).unwrap();

        let outcome = update(&env.ctx, &id, false).await.unwrap();
        assert_eq!(
            outcome,
            UpdateOutcome::Updated {
                from: "0.9.0".into(),
                to: "1.0.0".into()
            }
        );
        assert_eq!(env.cloner.call_count(), 2);
        assert_eq!(env.ctx.installed().get(&id).unwrap().version, "1.0.0");
        assert!(!env.ctx.paths.packages_dir().join(".alice.hello.previous").exists());
    }

    #[tokio::test]
    async fn test_failed_clone_keeps_previous_version() {
        let (server, _, _) = registry_with(HELLO_MANIFEST).await;
        let env = TestEnv::with_cloner(&server.url(), &[], FakeCloner::failing(128));
        let id = PackageId::parse("alice.hello").unwrap();

        let dir = env.ctx.paths.package_dir(&id);
        std::fs::create_dir_all(&dir).unwrap();
        let old_manifest = r#"{"id":"alice.hello","version":"0.9.0","repository":"r"}"#;
        std::fs::write(dir.join("manifest.json"), old_manifest).unwrap();
        std::fs::write(dir.join("tool.sh"), "echo old").unwrap();
        env.ctx
            .installed()
            .upsert(LocalInstallation {
                id: id.clone(),
                version: "0.9.0".into(),
                install_path: dir.clone(),
                is_installed: true,
                installed_at: None,
            })
            .unwrap();

        assert!(matches!(
            update(&env.ctx, &id, false).await,
            Err(NexError::Subprocess { code: 128, .. })
        ));
        assert_eq!(std::fs::read_to_string(dir.join("tool.sh")).unwrap(), "echo old");
        assert_eq!(
            std::fs::read_to_string(dir.join("manifest.json")).unwrap(),
            old_manifest
        );
        assert_eq!(env.ctx.installed().get(&id).unwrap().version, "0.9.0");
        assert!(!env.ctx.paths.packages_dir().join(".alice.hello.previous").exists());
        assert!(
            env.reporter
                .messages("warning")
                .iter()
                .any(|m| m.contains("kept version 0.9.0"))
        );
    }

    #[tokio::test]
    async fn test_force_and_not_installed() {
        let (server, _, _) = registry_with(HELLO_MANIFEST).await;
        let env = TestEnv::new(&server.url(), &[]);
        let id = PackageId::parse("alice.hello").unwrap();

        assert!(matches!(
            update(&env.ctx, &id, true).await,
            Err(NexError::NotInstalled(_))
        ));

        install(&env.ctx, &id).await.unwrap();
        assert!(matches!(
            update(&env.ctx, &id, true).await.unwrap(),
            UpdateOutcome::Updated { .. }
        ));
        assert_eq!(env.cloner.call_count(), 2);
    }
}

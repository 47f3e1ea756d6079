//! Engine context threaded through every operation.

use crate::git::{GitCloner, RepoCloner};
use crate::http::HttpFetcher;
use crate::probe::{PathProbe, RuntimeProbe};
use crate::registry::Registry;
use crate::store::{AliasStore, ConfigStore, InstalledStore};
use crate::{NexPaths, Reporter, Result};
use std::sync::Arc;

/// Everything an operation needs: where the home is, which registry to
/// talk to, and the seams to the outside world.
#[derive(Clone)]
pub struct Context {
    /// On-disk layout.
    pub paths: NexPaths,
    /// Registry URL layout.
    pub registry: Registry,
    /// HTTP client.
    pub http: HttpFetcher,
    /// `PATH` lookups.
    pub probe: Arc<dyn RuntimeProbe>,
    /// Repository cloner.
    pub cloner: Arc<dyn RepoCloner>,
    /// User-facing progress sink.
    pub reporter: Arc<dyn Reporter>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("paths", &self.paths)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Build the production context: registry from `config.json` (or the
    /// default), `PATH` probe, and the system `git`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NexError::Transport`] if the HTTP client cannot be
    /// built.
    pub fn new(paths: NexPaths, reporter: Arc<dyn Reporter>) -> Result<Self> {
        let base = ConfigStore::new(&paths)
            .load()
            .registry_url()
            .unwrap_or_else(|| crate::DEFAULT_REGISTRY_URL.to_string());
        tracing::debug!("Using registry {base}");

        Ok(Self {
            paths,
            registry: Registry::new(base),
            http: HttpFetcher::new()?,
            probe: Arc::new(PathProbe),
            cloner: Arc::new(GitCloner),
            reporter,
        })
    }

    /// Replace the registry.
    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the `PATH` probe.
    #[must_use]
    pub fn with_probe(mut self, probe: Arc<dyn RuntimeProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Replace the repository cloner.
    #[must_use]
    pub fn with_cloner(mut self, cloner: Arc<dyn RepoCloner>) -> Self {
        self.cloner = cloner;
        self
    }

    /// The alias store of this home.
    pub fn aliases(&self) -> AliasStore {
        AliasStore::new(&self.paths)
    }

    /// The config store of this home.
    pub fn config(&self) -> ConfigStore {
        ConfigStore::new(&self.paths)
    }

    /// The installed-package index of this home.
    pub fn installed(&self) -> InstalledStore {
        InstalledStore::new(&self.paths)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::NullReporter;
    use crate::store::{ConfigValue, config::REGISTRY_URL};

    #[test]
    fn test_registry_comes_from_config() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = NexPaths::new(tmp.path());
        ConfigStore::new(&paths)
            .set(REGISTRY_URL, ConfigValue::parse("https://mirror.example/reg/"))
            .unwrap();

        let ctx = Context::new(paths, Arc::new(NullReporter)).unwrap();
        assert_eq!(ctx.registry.base(), "https://mirror.example/reg");
    }

    #[test]
    fn test_default_registry() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = Context::new(NexPaths::new(tmp.path()), Arc::new(NullReporter)).unwrap();
        assert_eq!(ctx.registry.base(), crate::DEFAULT_REGISTRY_URL);
        assert!(format!("{ctx:?}").contains("Context"));
    }
}

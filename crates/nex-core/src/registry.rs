//! Registry client.
//!
//! A registry is a static file tree:
//!
//! ```text
//! <base>/index.json
//! <base>/packages/<l>/<author>/<name>/manifest.json
//! ```
//!
//! where `<l>` is the lower-cased first character of the author.

use crate::http::HttpFetcher;
use crate::{NexError, Result};
use bytes::Bytes;
use nex_schema::{Manifest, PackageId, RegistryIndex};

/// A manifest as fetched from the registry, with the bytes it was parsed
/// from.
#[derive(Debug, Clone)]
pub struct FetchedManifest {
    /// Parsed, validated manifest.
    pub manifest: Manifest,
    /// Exact bytes served by the registry.
    pub raw: Bytes,
}

/// URL layout of one registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    base: String,
}

impl Registry {
    /// Registry rooted at `base`. A trailing `/` is ignored.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `<base>/index.json`
    pub fn index_url(&self) -> String {
        format!("{}/index.json", self.base)
    }

    /// `<base>/packages/<l>/<author>/<name>/manifest.json`
    pub fn manifest_url(&self, id: &PackageId) -> String {
        format!(
            "{}/packages/{}/{}/{}/manifest.json",
            self.base,
            id.shard(),
            id.author(),
            id.name()
        )
    }

    /// Download and parse `index.json`.
    ///
    /// # Errors
    ///
    /// Returns [`NexError::Transport`], [`NexError::Http`], or
    /// [`NexError::Parse`] for an invalid document.
    pub async fn fetch_index(&self, http: &HttpFetcher) -> Result<RegistryIndex> {
        let body = http.get_ok(&self.index_url()).await?;
        RegistryIndex::from_slice(&body)
            .map_err(|e| NexError::Parse(format!("Invalid registry index: {e}")))
    }

    /// Download and validate the manifest of `id`, keeping its raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`NexError::Transport`], [`NexError::Http`] (404 when the
    /// package does not exist), or [`NexError::Parse`].
    pub async fn fetch_manifest(&self, http: &HttpFetcher, id: &PackageId) -> Result<FetchedManifest> {
        let raw = http.get_ok(&self.manifest_url(id)).await?;
        let manifest = Manifest::from_slice(&raw)
            .map_err(|e| NexError::Parse(format!("Invalid manifest for {id}: {e}")))?;
        Ok(FetchedManifest { manifest, raw })
    }
}

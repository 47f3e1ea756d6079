//! Index of installed packages (`installed.json`).

use super::{load_json, save_json};
use crate::{NexPaths, Result};
use nex_schema::{LocalInstallation, PackageId};
use serde_json::Value;
use std::path::PathBuf;

/// Reads and rewrites `installed.json`.
///
/// This list accelerates `list`; whether a package is installed is decided
/// by its directory (see [`crate::ops::install::is_installed`]).
#[derive(Debug, Clone)]
pub struct InstalledStore {
    path: PathBuf,
}

impl InstalledStore {
    /// Store rooted at the given Nex home.
    pub fn new(paths: &NexPaths) -> Self {
        Self {
            path: paths.installed_file(),
        }
    }

    /// Every well-formed record. Malformed records are skipped.
    pub fn list(&self) -> Vec<LocalInstallation> {
        let raw: Vec<Value> = load_json(&self.path);
        raw.into_iter()
            .filter_map(|v| match serde_json::from_value(v) {
                Ok(rec) => Some(rec),
                Err(e) => {
                    tracing::warn!("Skipping malformed entry in {}: {e}", self.path.display());
                    None
                }
            })
            .collect()
    }

    /// Record for `id`, if listed.
    pub fn get(&self, id: &PackageId) -> Option<LocalInstallation> {
        self.list().into_iter().find(|r| &r.id == id)
    }

    /// Append `record`, replacing any existing record with the same id.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn upsert(&self, record: LocalInstallation) -> Result<()> {
        let mut records = self.list();
        records.retain(|r| r.id != record.id);
        records.push(record);
        save_json(&self.path, &records)
    }

    /// Drop the record for `id`. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn remove(&self, id: &PackageId) -> Result<bool> {
        let mut records = self.list();
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        save_json(&self.path, &records)?;
        Ok(true)
    }
}

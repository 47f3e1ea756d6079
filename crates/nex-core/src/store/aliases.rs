//! User-defined package shortcuts (`aliases.json`).

use super::{load_json, save_json};
use crate::{NexError, NexPaths, Result};
use nex_schema::PackageId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// The alias document: shortcut to package identifier, in insertion order.
///
/// Lookups are case-sensitive. Entries whose value is not a string are kept
/// on disk but ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aliases(Map<String, Value>);

impl Aliases {
    /// Target of `shortcut`, if defined.
    pub fn get(&self, shortcut: &str) -> Option<&str> {
        self.0.get(shortcut).and_then(Value::as_str)
    }

    /// All `(shortcut, target)` pairs with string targets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|t| (k.as_str(), t)))
    }

    /// Whether no usable alias is defined.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Define or replace `shortcut`.
    ///
    /// # Errors
    ///
    /// Returns [`NexError::InvalidAlias`] if the shortcut is empty or
    /// contains a `.`.
    pub fn insert(&mut self, shortcut: &str, id: &PackageId) -> Result<()> {
        validate_shortcut(shortcut)?;
        // Replace rather than update in place so the entry moves to the end.
        self.0.shift_remove(shortcut);
        self.0.insert(shortcut.to_string(), Value::String(id.to_string()));
        Ok(())
    }

    /// Delete `shortcut`, returning its previous target.
    pub fn remove(&mut self, shortcut: &str) -> Option<Value> {
        self.0.shift_remove(shortcut)
    }
}

fn validate_shortcut(shortcut: &str) -> Result<()> {
    if shortcut.trim().is_empty() {
        return Err(NexError::InvalidAlias("Alias cannot be empty".to_string()));
    }
    if shortcut.contains('.') {
        return Err(NexError::InvalidAlias(
            "Alias cannot contain '.' character".to_string(),
        ));
    }
    Ok(())
}

/// Reads and rewrites `aliases.json`.
#[derive(Debug, Clone)]
pub struct AliasStore {
    path: PathBuf,
}

impl AliasStore {
    /// Store rooted at the given Nex home.
    pub fn new(paths: &NexPaths) -> Self {
        Self {
            path: paths.aliases_file(),
        }
    }

    /// Current aliases; empty if the file is missing or corrupt.
    pub fn load(&self) -> Aliases {
        load_json(&self.path)
    }

    /// Target of `shortcut`, if defined.
    pub fn lookup(&self, shortcut: &str) -> Option<String> {
        self.load().get(shortcut).map(str::to_string)
    }

    /// Define or replace `shortcut` and persist.
    ///
    /// # Errors
    ///
    /// Returns [`NexError::InvalidAlias`] for a bad shortcut, or an I/O
    /// error if the file cannot be written.
    pub fn set(&self, shortcut: &str, id: &PackageId) -> Result<()> {
        let mut aliases = self.load();
        aliases.insert(shortcut, id)?;
        save_json(&self.path, &aliases)
    }

    /// Delete `shortcut` and persist, returning its former target.
    ///
    /// # Errors
    ///
    /// Returns [`NexError::InvalidAlias`] if the alias does not exist.
    pub fn unset(&self, shortcut: &str) -> Result<String> {
        let mut aliases = self.load();
        let previous = aliases
            .remove(shortcut)
            .ok_or_else(|| NexError::InvalidAlias(format!("Alias '{shortcut}' does not exist")))?;
        save_json(&self.path, &aliases)?;
        Ok(previous.as_str().unwrap_or_default().to_string())
    }
}

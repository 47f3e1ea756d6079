//! Local JSON stores.
//!
//! `config.json`, `aliases.json` and `installed.json` are small documents
//! rewritten whole on every mutation. Reads never fail: a missing or
//! corrupted file reads as the empty document so that a half-written store
//! degrades to defaults instead of blocking every command.

pub mod aliases;
pub mod config;
pub mod installed;

pub use aliases::{AliasStore, Aliases};
pub use config::{Config, ConfigStore, ConfigValue};
pub use installed::InstalledStore;

use crate::{NexError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON document, falling back to `T::default()` if the file is
/// absent or cannot be parsed.
pub fn load_json<T: DeserializeOwned + Default>(path: &Path) -> T {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            tracing::warn!("Could not read {}: {e}; treating as empty", path.display());
            return T::default();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring corrupt {}: {e}", path.display());
            T::default()
        }
    }
}

/// Pretty-print `value` to `path`, replacing the file atomically.
///
/// The document is first written to a sibling temporary file and then
/// renamed so that readers never observe a partially written store.
///
/// # Errors
///
/// Returns [`NexError::Io`] if the directory, temp file, or rename fails.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_vec_pretty(value)
        .map_err(|e| NexError::Parse(format!("Failed to encode {}: {e}", path.display())))?;
    content.push(b'\n');

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| NexError::io("Failed to create directory", parent, e))?;
    }

    // Atomic write: write to temp file, then rename
    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, &content)
        .map_err(|e| NexError::io("Failed to write", &temp_path, e))?;
    std::fs::rename(&temp_path, path).map_err(|e| NexError::io("Failed to replace", path, e))?;

    Ok(())
}

//! Filesystem layout of the Nex home.

use crate::{NexError, Result};
use nex_schema::PackageId;
use std::path::{Path, PathBuf};

/// Name of the Nex home directory inside the user's home.
pub const HOME_DIR_NAME: &str = ".nex";

/// Resolve the user's home directory.
///
/// Consults `HOME` on POSIX and `USERPROFILE` on Windows, then falls back to
/// the platform lookup.
pub fn user_home() -> Option<PathBuf> {
    let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Locations of everything Nex keeps on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NexPaths {
    home: PathBuf,
}

impl NexPaths {
    /// Use `home` as the Nex home directory (normally `~/.nex`).
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Locate `~/.nex` for the current user.
    ///
    /// # Errors
    ///
    /// Returns [`NexError::HomeNotFound`] if no home directory can be found.
    pub fn discover() -> Result<Self> {
        user_home()
            .map(|h| Self::new(h.join(HOME_DIR_NAME)))
            .ok_or(NexError::HomeNotFound)
    }

    /// Nex home: ~/.nex
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Package working trees: ~/.nex/packages
    pub fn packages_dir(&self) -> PathBuf {
        self.home.join("packages")
    }

    /// Working tree of one package: ~/.nex/packages/<author.name>
    pub fn package_dir(&self, id: &PackageId) -> PathBuf {
        self.packages_dir().join(id.to_string())
    }

    /// ~/.nex/config.json
    pub fn config_file(&self) -> PathBuf {
        self.home.join("config.json")
    }

    /// ~/.nex/aliases.json
    pub fn aliases_file(&self) -> PathBuf {
        self.home.join("aliases.json")
    }

    /// ~/.nex/installed.json
    pub fn installed_file(&self) -> PathBuf {
        self.home.join("installed.json")
    }

    /// Create the home and packages directories if missing. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`NexError::Io`] if a directory cannot be created.
    pub fn ensure_directories(&self) -> Result<()> {
        let packages = self.packages_dir();
        std::fs::create_dir_all(&packages)
            .map_err(|e| NexError::io("Failed to create directory", &packages, e))
    }
}

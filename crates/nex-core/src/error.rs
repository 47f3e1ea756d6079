//! Domain-specific errors for engine operations

use nex_schema::{PackageId, Runtime, SchemaError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenience alias used throughout the engine.
pub type Result<T, E = NexError> = std::result::Result<T, E>;

/// Every failure the engine distinguishes.
#[derive(Error, Debug)]
pub enum NexError {
    /// The HTTP request did not complete.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The HTTP request completed with a non-2xx status.
    #[error("HTTP {status} fetching {url}")]
    Http {
        /// Response status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// A manifest or index document is malformed or incomplete.
    #[error("{0}")]
    Parse(String),

    /// A package identifier does not have the `author.name` shape.
    #[error("{0}")]
    InvalidId(String),

    /// No registry entry matches the requested name.
    #[error("Package '{0}' not found in registry")]
    NotFound(String),

    /// More than one registry entry matches the requested short name.
    #[error(
        "Multiple packages match '{name}' ({}). Use the full ID (author.package-name)",
        candidates.join(", ")
    )]
    Ambiguous {
        /// The short name as typed.
        name: String,
        /// Every matching identifier, in registry order.
        candidates: Vec<String>,
    },

    /// The package directory does not exist.
    #[error("Package '{0}' is not installed")]
    NotInstalled(PackageId),

    /// The requested command is not declared and cannot be synthesised.
    #[error("No command '{command}' found for package {id}")]
    NoSuchCommand {
        /// Package identifier.
        id: PackageId,
        /// Requested command name.
        command: String,
    },

    /// The declared runtime is not on `PATH`.
    #[error("{runtime} is required but was not found on PATH.\n{instructions}")]
    RuntimeMissing {
        /// The missing runtime.
        runtime: Runtime,
        /// How to install it.
        instructions: &'static str,
    },

    /// A child process exited unsuccessfully.
    #[error("{program} exited with status {code}")]
    Subprocess {
        /// What was run (`git`, `install hook`, ...).
        program: String,
        /// Its exit code.
        code: i32,
    },

    /// An alias operation was rejected.
    #[error("{0}")]
    InvalidAlias(String),

    /// A configuration value was rejected.
    #[error("{0}")]
    InvalidConfig(String),

    /// Neither `HOME`/`USERPROFILE` nor the platform lookup yielded a home.
    #[error("Could not determine home directory")]
    HomeNotFound,

    /// Filesystem or process-spawn failure.
    #[error("{context} ({}): {source}", path.display())]
    Io {
        /// What was being attempted.
        context: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl NexError {
    /// Wrap an I/O error with the attempted action and the path involved.
    pub fn io(context: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<SchemaError> for NexError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::InvalidId { .. } => Self::InvalidId(err.to_string()),
            other => Self::Parse(other.to_string()),
        }
    }
}

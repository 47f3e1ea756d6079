//! Shared types and wire format for Nex.
//!
//! Everything in this crate is pure: it parses and validates the JSON
//! documents served by a registry and the records Nex keeps on disk, but it
//! never touches the network or the filesystem.

pub mod error;
pub mod id;
pub mod index;
pub mod installed;
pub mod manifest;
pub mod runtime;

// Re-exports
pub use error::SchemaError;
pub use id::PackageId;
pub use index::{IndexEntry, RegistryIndex};
pub use installed::LocalInstallation;
pub use manifest::{Author, Manifest, RuntimeSpec};
pub use runtime::Runtime;

/// Name of the command run when the user does not name one.
pub const DEFAULT_COMMAND: &str = "default";

/// Name of the command run once, right after a package is cloned.
pub const INSTALL_COMMAND: &str = "install";

//! Records of `installed.json`.

use crate::PackageId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One record of `installed.json`.
///
/// The list is an index for fast enumeration; the package directory on disk
/// remains the source of truth for whether something is installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalInstallation {
    /// Package identifier.
    pub id: PackageId,
    /// Manifest version at install time.
    pub version: String,
    /// Absolute path of the cloned working tree.
    pub install_path: PathBuf,
    /// Always `true` for records written by the installer.
    pub is_installed: bool,
    /// Unix timestamp of the install, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_timestamp() {
        let json = r#"{"id":"alice.hello","version":"1.0","install_path":"/h/.nex/packages/alice.hello","is_installed":true}"#;
        let rec: LocalInstallation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id.to_string(), "alice.hello");
        assert!(rec.installed_at.is_none());

        let back = serde_json::to_string(&rec).unwrap();
        assert!(!back.contains("installed_at"));
    }
}

//! Runtimes a manifest can declare.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Language runtime a package declares in its manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Runtime {
    /// `CPython` (`python`, or `python3` on POSIX hosts).
    Python,
    /// Node.js. The manifest tags `node` and `nodejs` both map here.
    Node,
    /// GNU Bash.
    Bash,
    /// Windows `PowerShell` or `pwsh`.
    PowerShell,
    /// The entrypoint is executed directly.
    Binary,
    /// The Go toolchain.
    Go,
    /// Missing or unrecognised tag. Valid, but never probed or provisioned.
    #[default]
    Unknown,
}

impl Runtime {
    /// Every runtime that names a real interpreter.
    pub const PROBED: [Runtime; 5] = [
        Runtime::Python,
        Runtime::Node,
        Runtime::Bash,
        Runtime::PowerShell,
        Runtime::Go,
    ];

    /// Parse a manifest tag. Case-insensitive; unknown tags become
    /// [`Runtime::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "python" => Self::Python,
            "node" | "nodejs" => Self::Node,
            "bash" => Self::Bash,
            "powershell" => Self::PowerShell,
            "binary" => Self::Binary,
            "go" => Self::Go,
            _ => Self::Unknown,
        }
    }

    /// Canonical lower-case tag, as written back to JSON.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Node => "node",
            Self::Bash => "bash",
            Self::PowerShell => "powershell",
            Self::Binary => "binary",
            Self::Go => "go",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the executor must find an interpreter on `PATH` first.
    pub fn needs_probe(self) -> bool {
        !matches!(self, Self::Binary | Self::Unknown)
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Python => "Python",
            Self::Node => "Node.js",
            Self::Bash => "Bash",
            Self::PowerShell => "PowerShell",
            Self::Binary => "Binary",
            Self::Go => "Go",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

impl Serialize for Runtime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Runtime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&raw))
    }
}

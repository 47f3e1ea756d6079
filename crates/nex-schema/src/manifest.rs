//! Package manifest parsing.
//!
//! A manifest (`manifest.json` in the registry, or `nex.json` inside a
//! repository) declares a package's identity, where to clone it from, which
//! runtime it needs and the commands it exposes.
//!
//! Parsing happens in two steps: serde decodes a permissive raw form, then
//! [`Manifest::from_slice`] validates required fields and normalises the
//! optional ones to empty values.

use crate::{PackageId, Runtime, SchemaError};
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A validated package manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Canonical package identifier.
    pub id: PackageId,
    /// Display name. Defaults to the identifier.
    pub name: String,
    /// Opaque version string.
    pub version: String,
    /// One-line description.
    pub description: String,
    /// Author, normalised from either encoding of the `author` field.
    pub author: String,
    /// License expression.
    pub license: String,
    /// Git-cloneable repository URL.
    pub repository: String,
    /// Entry point, relative to the repository root.
    pub entrypoint: String,
    /// Declared runtime.
    pub runtime: RuntimeSpec,
    /// Command name to shell template, in manifest order.
    pub commands: IndexMap<String, String>,
    /// Search keywords, in manifest order.
    pub keywords: Vec<String>,
}

/// The `runtime` object of a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Runtime tag.
    #[serde(rename = "type", default)]
    pub kind: Runtime,
    /// Requested runtime version, informational only.
    #[serde(default)]
    pub version: Option<String>,
}

/// The two accepted encodings of the `author` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    /// `"author": "Alice"`
    Name(String),
    /// `"author": { "name": "Alice", "github": "alice" }`
    Detailed {
        /// Display name.
        #[serde(default)]
        name: Option<String>,
        /// GitHub handle.
        #[serde(default)]
        github: Option<String>,
    },
}

impl Author {
    /// Collapse either encoding into one display string.
    pub fn into_display(self) -> String {
        match self {
            Self::Name(name) => name,
            Self::Detailed { name, github } => name.or(github).unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct RawManifest {
    id: Option<String>,
    version: Option<String>,
    repository: Option<String>,
    name: Option<String>,
    description: Option<String>,
    author: Option<Author>,
    license: Option<String>,
    runtime: Option<RuntimeSpec>,
    entrypoint: Option<String>,
    #[serde(default, deserialize_with = "unique_commands")]
    commands: IndexMap<String, String>,
    #[serde(default)]
    keywords: Vec<String>,
}

impl Manifest {
    /// Parse and validate a manifest from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] for malformed JSON or wrongly typed
    /// fields (including duplicate or non-string commands),
    /// [`SchemaError::MissingField`] if `id`, `version` or `repository` is
    /// absent or empty, and [`SchemaError::InvalidId`] if `id` is not a
    /// valid package identifier.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        let raw: RawManifest = serde_json::from_slice(bytes)?;

        let id = required(raw.id, "id")?;
        let version = required(raw.version, "version")?;
        let repository = required(raw.repository, "repository")?;
        let id = PackageId::parse(&id)?;

        Ok(Self {
            name: raw.name.unwrap_or_else(|| id.to_string()),
            id,
            version,
            description: raw.description.unwrap_or_default(),
            author: raw.author.map(Author::into_display).unwrap_or_default(),
            license: raw.license.unwrap_or_default(),
            repository,
            entrypoint: raw.entrypoint.unwrap_or_default(),
            runtime: raw.runtime.unwrap_or_default(),
            commands: raw.commands,
            keywords: raw.keywords,
        })
    }

    /// Look up a command template by name.
    pub fn command(&self, name: &str) -> Option<&str> {
        self.commands.get(name).map(String::as_str)
    }

    /// The post-clone hook, if the manifest declares one.
    pub fn install_hook(&self) -> Option<&str> {
        self.command(crate::INSTALL_COMMAND)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, SchemaError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SchemaError::MissingField(field)),
    }
}

/// Deserialize `commands`, rejecting duplicate names instead of letting the
/// last one win.
fn unique_commands<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CommandsVisitor;

    impl<'de> Visitor<'de> for CommandsVisitor {
        type Value = IndexMap<String, String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object mapping command names to strings")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut commands = IndexMap::new();
            while let Some((name, template)) = map.next_entry::<String, String>()? {
                if commands.contains_key(&name) {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate command '{name}'"
                    )));
                }
                commands.insert(name, template);
            }
            Ok(commands)
        }
    }

    deserializer.deserialize_map(CommandsVisitor)
}

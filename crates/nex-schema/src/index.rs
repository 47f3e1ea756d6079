//! Registry index (`index.json`).

use crate::SchemaError;
use serde::{Deserialize, Deserializer, Serialize};

/// The registry's top-level `index.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIndex {
    /// Every well-formed published package, in registry order.
    #[serde(deserialize_with = "well_formed_entries")]
    pub packages: Vec<IndexEntry>,
}

/// Keep the entries that decode, drop the rest.
fn well_formed_entries<'de, D>(deserializer: D) -> Result<Vec<IndexEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect())
}

/// One package as listed in the registry index.
///
/// `id` is kept as a raw string: the index is third-party data and a single
/// malformed entry must not make the whole document unusable. Entries with
/// a missing `id` or a non-string field are skipped when the index is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    /// Package identifier, normally `author.name`.
    pub id: String,
    /// Preferred short name used for resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// One-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Search keywords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl RegistryIndex {
    /// Parse an index document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] if the bytes are not JSON or the
    /// `packages` array is missing. Malformed entries inside it are skipped.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Entries a short name refers to.
    ///
    /// An entry matches if its `shortName` equals `short` case-insensitively,
    /// or, failing that, if the part of its `id` after the first `.` does.
    /// Each entry is counted at most once.
    pub fn matching_short_name(&self, short: &str) -> Vec<&IndexEntry> {
        self.packages
            .iter()
            .filter(|entry| entry.answers_to(short))
            .collect()
    }

    /// Entries whose id, names, description or keywords contain `query`
    /// (case-insensitive).
    pub fn search(&self, query: &str) -> Vec<&IndexEntry> {
        let needle = query.to_lowercase();
        self.packages
            .iter()
            .filter(|entry| entry.mentions(&needle))
            .collect()
    }
}

impl IndexEntry {
    /// The name part of `id` (after the first `.`), if any.
    pub fn id_name(&self) -> Option<&str> {
        self.id.split_once('.').map(|(_, name)| name)
    }

    fn answers_to(&self, short: &str) -> bool {
        if self
            .short_name
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(short))
        {
            return true;
        }
        self.id_name().is_some_and(|n| n.eq_ignore_ascii_case(short))
    }

    fn mentions(&self, needle: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle);
        hit(&self.id)
            || self.short_name.as_deref().is_some_and(hit)
            || self.name.as_deref().is_some_and(hit)
            || self.description.as_deref().is_some_and(hit)
            || self.keywords.iter().any(|k| hit(k))
    }
}

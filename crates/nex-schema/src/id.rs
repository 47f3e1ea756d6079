//! Package identifiers (`author.name`).

use crate::SchemaError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A canonical package identifier in `author.name` form.
///
/// Both parts are lower-cased and restricted to `[a-z0-9-]`. The identifier
/// is the primary key for every local store and the path segment used
/// against the registry.
///
/// # Example
///
/// ```
/// use nex_schema::PackageId;
///
/// let id = PackageId::parse("Alice.Hello").unwrap();
/// assert_eq!(id.author(), "alice");
/// assert_eq!(id.name(), "hello");
/// assert_eq!(id.to_string(), "alice.hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId {
    author: String,
    name: String,
}

impl PackageId {
    /// Parse and canonicalise an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidId`] if the input is not exactly two
    /// non-empty dot-separated parts drawn from `[a-z0-9-]` (after
    /// lower-casing).
    pub fn parse(input: &str) -> Result<Self, SchemaError> {
        let invalid = |reason| SchemaError::InvalidId {
            input: input.to_string(),
            reason,
        };

        let lowered = input.trim().to_ascii_lowercase();
        let (author, name) = lowered
            .split_once('.')
            .ok_or_else(|| invalid("expected 'author.name'"))?;

        if name.contains('.') {
            return Err(invalid("more than one '.' separator"));
        }
        if author.is_empty() || name.is_empty() {
            return Err(invalid("author and name must both be non-empty"));
        }
        if !is_segment(author) || !is_segment(name) {
            return Err(invalid("only [a-z0-9-] characters are allowed"));
        }

        Ok(Self {
            author: author.to_string(),
            name: name.to_string(),
        })
    }

    /// The author (namespace) part.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The package name part.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The one-letter registry shard: the first character of the author.
    pub fn shard(&self) -> char {
        // parse() guarantees a non-empty ASCII author
        self.author.chars().next().unwrap_or('_')
    }
}

fn is_segment(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.author, self.name)
    }
}

impl FromStr for PackageId {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for PackageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PackageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        let id = PackageId::parse("alice.hello-world").unwrap();
        assert_eq!(id.author(), "alice");
        assert_eq!(id.name(), "hello-world");
        assert_eq!(id.shard(), 'a');
    }

    #[test]
    fn test_parse_lowercases() {
        let id = PackageId::parse("Bob.Tool2").unwrap();
        assert_eq!(id.to_string(), "bob.tool2");
        assert_eq!(id.shard(), 'b');
    }

    #[test]
    fn test_rejects_bad_shapes() {
        for bad in ["hello", ".hello", "alice.", "a.b.c", "alice.he llo", "al_ice.x", ""] {
            assert!(PackageId::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_serde_as_string() {
        let id = PackageId::parse("alice.hello").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"alice.hello\"");

        let back: PackageId = serde_json::from_str("\"ALICE.hello\"").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<PackageId>("\"nodot\"").is_err());
    }
}

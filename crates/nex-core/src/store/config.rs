//! User settings (`config.json`).

use super::{load_json, save_json};
use crate::{NexError, NexPaths, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;

/// Key overriding the registry base URL.
pub const REGISTRY_URL: &str = "registry_url";
/// Key recording a path for global packages.
pub const GLOBAL_PATH: &str = "global_path";
/// Key toggling CLI update checks.
pub const AUTO_UPDATE: &str = "auto_update";

/// Recognised keys with a one-line description each.
pub const KNOWN_KEYS: [(&str, &str); 3] = [
    (REGISTRY_URL, "Custom registry URL"),
    (GLOBAL_PATH, "Path for global packages"),
    (AUTO_UPDATE, "Auto-check for CLI updates (true/false)"),
];

/// A configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// `true` / `false`
    Bool(bool),
    /// Anything else
    String(String),
}

impl ConfigValue {
    /// Interpret a command-line value: the literals `true` and `false`
    /// become booleans, everything else stays a string.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            other => Self::String(other.to_string()),
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::String(s) => Some(Self::String(s.clone())),
            _ => None,
        }
    }

    fn into_json(self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(b),
            Self::String(s) => Value::String(s),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// The configuration document. Unknown keys are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config(Map<String, Value>);

impl Config {
    /// Value of `key`, if it is set to a string or boolean.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.0.get(key).and_then(ConfigValue::from_json)
    }

    /// All string/boolean entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, ConfigValue)> {
        self.0
            .iter()
            .filter_map(|(k, v)| ConfigValue::from_json(v).map(|cv| (k.as_str(), cv)))
    }

    /// Set `key`, validating known keys.
    ///
    /// # Errors
    ///
    /// Returns [`NexError::InvalidConfig`] if `registry_url` is not an
    /// http(s) URL or `auto_update` is not a boolean.
    pub fn set(&mut self, key: &str, value: ConfigValue) -> Result<()> {
        match key {
            REGISTRY_URL
                if !matches!(&value, ConfigValue::String(url)
                    if url.starts_with("https://") || url.starts_with("http://")) =>
            {
                return Err(NexError::InvalidConfig(format!(
                    "{REGISTRY_URL} must be an http(s) URL"
                )));
            }
            AUTO_UPDATE if !matches!(value, ConfigValue::Bool(_)) => {
                return Err(NexError::InvalidConfig(format!(
                    "{AUTO_UPDATE} must be true or false"
                )));
            }
            _ => {}
        }
        self.0.shift_remove(key);
        self.0.insert(key.to_string(), value.into_json());
        Ok(())
    }

    /// Remove `key`. Returns whether it was present.
    pub fn unset(&mut self, key: &str) -> bool {
        self.0.shift_remove(key).is_some()
    }

    /// Configured registry base URL, without a trailing `/`.
    pub fn registry_url(&self) -> Option<String> {
        match self.get(REGISTRY_URL)? {
            ConfigValue::String(url) if !url.trim().is_empty() => {
                Some(url.trim().trim_end_matches('/').to_string())
            }
            _ => None,
        }
    }

    /// Configured global package path.
    pub fn global_path(&self) -> Option<String> {
        match self.get(GLOBAL_PATH)? {
            ConfigValue::String(p) => Some(p),
            ConfigValue::Bool(_) => None,
        }
    }

    /// Whether update checks are enabled. Defaults to `false`.
    pub fn auto_update(&self) -> bool {
        matches!(self.get(AUTO_UPDATE), Some(ConfigValue::Bool(true)))
    }
}

/// Reads and rewrites `config.json`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store rooted at the given Nex home.
    pub fn new(paths: &NexPaths) -> Self {
        Self {
            path: paths.config_file(),
        }
    }

    /// Current configuration; empty if the file is missing or corrupt.
    pub fn load(&self) -> Config {
        load_json(&self.path)
    }

    /// Persist `config`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn save(&self, config: &Config) -> Result<()> {
        save_json(&self.path, config)
    }

    /// Load, set one key, and persist.
    ///
    /// # Errors
    ///
    /// See [`Config::set`] and [`ConfigStore::save`].
    pub fn set(&self, key: &str, value: ConfigValue) -> Result<()> {
        let mut config = self.load();
        config.set(key, value)?;
        self.save(&config)
    }

    /// Load, remove one key, and persist. Returns whether it was present.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn unset(&self, key: &str) -> Result<bool> {
        let mut config = self.load();
        let existed = config.unset(key);
        self.save(&config)?;
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_parsing() {
        assert_eq!(ConfigValue::parse("true"), ConfigValue::Bool(true));
        assert_eq!(ConfigValue::parse("false"), ConfigValue::Bool(false));
        assert_eq!(
            ConfigValue::parse("True"),
            ConfigValue::String("True".into())
        );
    }

    #[test]
    fn test_known_key_validation() {
        let mut config = Config::default();
        assert!(
            config
                .set(REGISTRY_URL, ConfigValue::parse("ftp://nope"))
                .is_err()
        );
        assert!(config.set(AUTO_UPDATE, ConfigValue::parse("yes")).is_err());
        config
            .set(REGISTRY_URL, ConfigValue::parse("https://reg.example/"))
            .unwrap();
        config.set(AUTO_UPDATE, ConfigValue::parse("true")).unwrap();
        assert_eq!(
            config.registry_url().as_deref(),
            Some("https://reg.example")
        );
        assert!(config.auto_update());
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = NexPaths::new(tmp.path());
        std::fs::write(
            paths.config_file(),
            br#"{"custom":{"nested":1},"editor":"vim"}"#,
        )
        .unwrap();

        let store = ConfigStore::new(&paths);
        store.set(GLOBAL_PATH, ConfigValue::parse("/opt/nex")).unwrap();

        let text = std::fs::read_to_string(paths.config_file()).unwrap();
        assert!(text.contains("nested"));

        let config = store.load();
        assert_eq!(
            config.get("editor"),
            Some(ConfigValue::String("vim".into()))
        );
        assert_eq!(config.global_path().as_deref(), Some("/opt/nex"));
        assert!(store.unset("editor").unwrap());
        assert!(!store.unset("editor").unwrap());
    }
}

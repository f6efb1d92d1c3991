//! Raw settings store abstraction and the TOML-backed adapter.
//!
//! The loader never parses config text itself. It talks to a
//! [`SettingsStore`], which hands back raw values addressed by
//! `(group, key)` and classifies its own failures so the loader can tell
//! "not configured" apart from "broken".

use thiserror::Error;

/// Failure reported by a raw store lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("group '{0}' not found")]
    GroupNotFound(String),

    #[error("key '{0}' not found")]
    KeyNotFound(String),

    /// Anything that is not plain absence: wrong value shape, parse failure,
    /// I/O trouble inside the store.
    #[error("{0}")]
    Invalid(String),
}

impl StoreError {
    /// `true` for the benign "not configured" cases.
    pub fn is_absence(&self) -> bool {
        matches!(self, Self::GroupNotFound(_) | Self::KeyNotFound(_))
    }
}

/// Minimal capability set the loader needs from a parsed config document.
///
/// A `group` is a named section, a `key` a setting within it. Values come
/// back in raw textual form; typed conversion is the loader's job.
///
/// Implementations only need shared access, so a store may be read
/// concurrently by any number of loaders.
pub trait SettingsStore {
    /// Raw value of a single setting.
    fn get_value(&self, group: &str, key: &str) -> Result<String, StoreError>;

    /// Raw values of a list-typed setting.
    fn get_value_list(&self, group: &str, key: &str) -> Result<Vec<String>, StoreError>;
}

/// Store adapter over a parsed TOML document.
///
/// Top-level tables are groups. Scalar entries are rendered to their raw
/// textual form: strings verbatim, booleans as `true`/`false`, integers and
/// floats in their decimal notation. String arrays back
/// [`SettingsStore::get_value_list`]. Any other shape is
/// [`StoreError::Invalid`].
#[derive(Debug, Clone)]
pub struct TomlStore {
    table: toml::Table,
}

impl TomlStore {
    /// Wrap an already-parsed document.
    pub fn new(table: toml::Table) -> Self {
        Self { table }
    }

    /// Parse `text` as TOML and wrap the resulting document.
    pub fn parse(text: &str) -> Result<Self, StoreError> {
        let table = text
            .parse::<toml::Table>()
            .map_err(|e| StoreError::Invalid(format!("toml parse error: {e}")))?;
        Ok(Self::new(table))
    }

    fn entry(&self, group: &str, key: &str) -> Result<&toml::Value, StoreError> {
        let section = self
            .table
            .get(group)
            .ok_or_else(|| StoreError::GroupNotFound(group.to_string()))?;
        let toml::Value::Table(section) = section else {
            return Err(StoreError::Invalid(format!("'{group}' is not a section")));
        };
        section
            .get(key)
            .ok_or_else(|| StoreError::KeyNotFound(key.to_string()))
    }
}

impl SettingsStore for TomlStore {
    fn get_value(&self, group: &str, key: &str) -> Result<String, StoreError> {
        match self.entry(group, key)? {
            toml::Value::String(s) => Ok(s.clone()),
            toml::Value::Boolean(b) => Ok(b.to_string()),
            toml::Value::Integer(i) => Ok(i.to_string()),
            toml::Value::Float(f) => Ok(f.to_string()),
            other => Err(StoreError::Invalid(format!(
                "value has type {}, expected a scalar",
                other.type_str()
            ))),
        }
    }

    fn get_value_list(&self, group: &str, key: &str) -> Result<Vec<String>, StoreError> {
        match self.entry(group, key)? {
            toml::Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    toml::Value::String(s) => Ok(s.clone()),
                    other => Err(StoreError::Invalid(format!(
                        "list element has type {}, expected string",
                        other.type_str()
                    ))),
                })
                .collect(),
            other => Err(StoreError::Invalid(format!(
                "value has type {}, expected an array",
                other.type_str()
            ))),
        }
    }
}

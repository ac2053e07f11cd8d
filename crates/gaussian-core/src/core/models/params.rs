use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// A scalar option value as supplied by the host.
///
/// Values are substituted into the input deck literally, so the only thing
/// this type has to get right is its textual rendering.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ParameterValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParameterValue {
    /// Interprets the value as a flag. Text is truthy only when it reads "true"
    /// (any casing), numbers when they are non-zero.
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{:?}", x),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A flat mapping from option name to scalar value.
///
/// Keys are stored as supplied; [`ParameterSet::normalized`] produces the
/// uppercase, space-free view that option lookup works on.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: BTreeMap<String, ParameterValue>,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Uppercases an option name and drops every whitespace character in it.
pub fn normalize_key(key: &str) -> String {
    key.split_whitespace().collect::<String>().to_uppercase()
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a parameter set from a TOML file of top-level scalar keys.
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ParameterValue>) -> &mut Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a new set whose keys went through [`normalize_key`].
    ///
    /// Values are not uppercased, so titles and method names reach the input
    /// deck exactly as supplied.
    ///
    /// The receiver is left untouched. When two keys collapse onto the same
    /// normalized name, the one that sorts last in the receiver wins.
    pub fn normalized(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(k, v)| (normalize_key(k), v.clone()))
            .collect();
        Self { entries }
    }
}

//! Declarative index layouts.
//!
//! Key layouts (name, kind, prefixes and field lists) can live in TOML next
//! to the rest of an application's config. Transforms and encoding methods
//! are code, so they are attached after loading via `IndexBuilder::from_config`.


use crate::index::IndexKind;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid index config: {0}")]
    Toml(#[from] toml::de::Error),
}

///
/// IndexConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    pub name: String,

    #[serde(default)]
    pub kind: IndexKind,

    pub partition_key: KeySpecConfig,
    pub sort_key: KeySpecConfig,
}

impl IndexConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::from)
    }
}

///
/// KeySpecConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KeySpecConfig {
    pub prefix: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

///
/// IndexSetConfig
///
/// Several indexes in one document, as `[[index]]` tables.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IndexSetConfig {
    #[serde(default, rename = "index")]
    pub indexes: Vec<IndexConfig>,
}

impl IndexSetConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::from)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IndexConfig> {
        self.indexes.iter().find(|index| index.name == name)
    }
}

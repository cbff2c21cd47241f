//! Config map and secret models

use super::Resource;
use crate::types::{JsonObject, StringMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Non-sensitive key/value configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMap {
    /// Config map name
    pub name: String,
    /// Key/value pairs
    #[serde(default)]
    pub data: Option<StringMap>,
    /// Version tag required by replace calls
    #[serde(default)]
    pub entity_tag: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Resource for ConfigMap {
    const COLLECTION: &'static str = "config_maps";
}

/// Request body for creating a config map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigMapPrototype {
    /// Config map name
    pub name: String,
    /// Key/value pairs
    #[serde(default)]
    pub data: StringMap,
}

/// Request body for replacing a config map's data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigMapReplace {
    /// New key/value pairs
    #[serde(default)]
    pub data: StringMap,
}

/// Sensitive configuration
///
/// List and get responses omit `data` for most formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    /// Secret name
    pub name: String,
    /// Secret format, e.g. `generic`, `registry`, `ssh_auth`
    #[serde(default)]
    pub format: Option<String>,
    /// Key/value pairs, when returned
    #[serde(default)]
    pub data: Option<StringMap>,
    /// Version tag required by replace calls
    #[serde(default)]
    pub entity_tag: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Resource for Secret {
    const COLLECTION: &'static str = "secrets";
}

/// Request body for creating a secret
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretPrototype {
    /// Secret name
    pub name: String,
    /// Secret format
    pub format: String,
    /// Key/value pairs
    #[serde(default)]
    pub data: StringMap,
}

/// Request body for replacing a secret's data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretReplace {
    /// Secret format, must match the existing secret
    pub format: String,
    /// New key/value pairs
    #[serde(default)]
    pub data: StringMap,
}

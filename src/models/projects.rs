//! Project models

use super::Resource;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project groups apps, jobs, builds and their configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project ID (GUID)
    pub id: String,
    /// Project name
    pub name: String,
    /// Region the project lives in
    #[serde(default)]
    pub region: Option<String>,
    /// Owning resource group
    #[serde(default)]
    pub resource_group_id: Option<String>,
    /// Cloud resource name
    #[serde(default)]
    pub crn: Option<String>,
    /// Lifecycle status, e.g. `active`
    #[serde(default)]
    pub status: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Self link
    #[serde(default)]
    pub href: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Resource for Project {
    const COLLECTION: &'static str = "projects";
}

/// Request body for creating a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPrototype {
    /// Project name
    pub name: String,
    /// Resource group, defaults to the account's default group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    /// User tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ProjectPrototype {
    /// Create a prototype with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the resource group
    #[must_use]
    pub fn with_resource_group(mut self, id: impl Into<String>) -> Self {
        self.resource_group_id = Some(id.into());
        self
    }
}

/// Readiness details of a project's underlying infrastructure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectStatusDetails {
    /// Project readiness, e.g. `enabled`
    #[serde(default)]
    pub project: Option<String>,
    /// Domain readiness, e.g. `ready`
    #[serde(default)]
    pub domain: Option<String>,
    /// Whether private endpoint access is not yet enabled
    #[serde(default)]
    pub vpe_not_enabled: Option<bool>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

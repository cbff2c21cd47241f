//! Application and revision models

use super::Resource;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A long-running, autoscaled application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// App name, unique within the project
    pub name: String,
    /// Server-assigned ID
    #[serde(default)]
    pub id: Option<String>,
    /// Owning project
    #[serde(default)]
    pub project_id: Option<String>,
    /// Container image
    #[serde(default)]
    pub image_reference: Option<String>,
    /// Public URL
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Lifecycle status, e.g. `ready`
    #[serde(default)]
    pub status: Option<String>,
    /// Version tag required by update calls
    #[serde(default)]
    pub entity_tag: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Resource for App {
    const COLLECTION: &'static str = "apps";
}

/// Request body for creating an app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppPrototype {
    /// App name
    pub name: String,
    /// Container image
    pub image_reference: String,
    /// Additional settings such as `image_port` or `scale_min_instances`
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl AppPrototype {
    /// Create a prototype for the given name and image
    pub fn new(name: impl Into<String>, image_reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_reference: image_reference.into(),
            extra: JsonObject::new(),
        }
    }

    /// Set an additional field
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// An immutable snapshot of an app's configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRevision {
    /// Revision name, e.g. `my-app-00001`
    pub name: String,
    /// App this revision belongs to
    #[serde(default)]
    pub app_name: Option<String>,
    /// Container image
    #[serde(default)]
    pub image_reference: Option<String>,
    /// Lifecycle status
    #[serde(default)]
    pub status: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Resource for AppRevision {
    const COLLECTION: &'static str = "revisions";
}

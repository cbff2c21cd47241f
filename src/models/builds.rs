//! Build and build run models

use super::Resource;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A build configuration turning source into a container image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    /// Build name
    pub name: String,
    /// Source repository
    #[serde(default)]
    pub source_url: Option<String>,
    /// Build strategy, e.g. `dockerfile` or `buildpacks`
    #[serde(default)]
    pub strategy_type: Option<String>,
    /// Image the build pushes
    #[serde(default)]
    pub output_image: Option<String>,
    /// Lifecycle status
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

impl Resource for Build {
    const COLLECTION: &'static str = "builds";
}

/// Request body for creating a build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildPrototype {
    /// Build name
    pub name: String,
    /// Image the build pushes
    pub output_image: String,
    /// Registry secret used to push the image
    pub output_secret: String,
    /// Build strategy
    pub strategy_type: String,
    /// Source repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Additional settings
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// One execution of a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRun {
    /// Run name
    pub name: String,
    /// Build the run was started from, if any
    #[serde(default)]
    pub build_name: Option<String>,
    /// Lifecycle status, e.g. `succeeded`
    #[serde(default)]
    pub status: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Resource for BuildRun {
    const COLLECTION: &'static str = "build_runs";
}

/// Request body for starting a build run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildRunPrototype {
    /// Build to run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_name: Option<String>,
    /// Explicit run name; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Overrides for the build's settings
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl BuildRunPrototype {
    /// Run an existing build
    pub fn for_build(build_name: impl Into<String>) -> Self {
        Self {
            build_name: Some(build_name.into()),
            ..Default::default()
        }
    }
}

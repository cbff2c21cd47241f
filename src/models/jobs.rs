//! Job and job run models

use super::Resource;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A batch job definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job name, unique within the project
    pub name: String,
    /// Server-assigned ID
    #[serde(default)]
    pub id: Option<String>,
    /// Container image
    #[serde(default)]
    pub image_reference: Option<String>,
    /// `task` or `daemon`
    #[serde(default)]
    pub run_mode: Option<String>,
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

impl Resource for Job {
    const COLLECTION: &'static str = "jobs";
}

/// Request body for creating a job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPrototype {
    /// Job name
    pub name: String,
    /// Container image
    pub image_reference: String,
    /// Additional settings such as `scale_array_spec`
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl JobPrototype {
    /// Create a prototype for the given name and image
    pub fn new(name: impl Into<String>, image_reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_reference: image_reference.into(),
            extra: JsonObject::new(),
        }
    }
}

/// One execution of a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRun {
    /// Run name
    pub name: String,
    /// Job the run was started from, if any
    #[serde(default)]
    pub job_name: Option<String>,
    /// Lifecycle status, e.g. `completed`
    #[serde(default)]
    pub status: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Resource for JobRun {
    const COLLECTION: &'static str = "job_runs";
}

/// Request body for starting a job run
///
/// Either `job_name` or an inline `image_reference` in `extra` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRunPrototype {
    /// Job to run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// Explicit run name; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Overrides for the job's settings
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl JobRunPrototype {
    /// Run an existing job
    pub fn for_job(job_name: impl Into<String>) -> Self {
        Self {
            job_name: Some(job_name.into()),
            ..Default::default()
        }
    }
}

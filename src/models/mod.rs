//! Resource models
//!
//! Each resource type keeps the fields callers commonly inspect and carries
//! every other field of the response in a flattened `extra` map, so nothing
//! the server sends is lost.

mod apps;
mod bindings;
mod builds;
mod configuration;
mod domain_mappings;
mod jobs;
mod projects;

pub use apps::{App, AppPrototype, AppRevision};
pub use bindings::{Binding, BindingPrototype};
pub use builds::{Build, BuildPrototype, BuildRun, BuildRunPrototype};
pub use configuration::{
    ConfigMap, ConfigMapPrototype, ConfigMapReplace, Secret, SecretPrototype, SecretReplace,
};
pub use domain_mappings::{DomainMapping, DomainMappingPrototype};
pub use jobs::{Job, JobPrototype, JobRun, JobRunPrototype};
pub use projects::{Project, ProjectPrototype, ProjectStatusDetails};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A resource kind served by a paginated list endpoint
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Key of the item array in list responses (e.g. `"apps"`)
    const COLLECTION: &'static str;
}

/// Reference from a binding or domain mapping to the component it targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRef {
    /// Component name
    pub name: String,
    /// Component kind, e.g. `app_v2`
    pub resource_type: String,
}

impl ComponentRef {
    /// Reference an application by name
    pub fn app(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: "app_v2".to_string(),
        }
    }

    /// Reference a job by name
    pub fn job(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: "job_v2".to_string(),
        }
    }
}

/// `first` / `next` link objects of a list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLink {
    /// Absolute URL of the page
    #[serde(default)]
    pub href: Option<String>,
    /// Continuation token for the page
    #[serde(default)]
    pub start: Option<String>,
}

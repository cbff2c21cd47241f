//! Service binding models

use super::{ComponentRef, Resource};
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};

/// Binds a service credential secret into a component's environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    /// Binding ID
    pub id: String,
    /// Bound component
    #[serde(default)]
    pub component: Option<ComponentRef>,
    /// Prefix for injected environment variables
    #[serde(default)]
    pub prefix: Option<String>,
    /// Service access secret
    #[serde(default)]
    pub secret_name: Option<String>,
    /// Lifecycle status
    #[serde(default)]
    pub status: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Resource for Binding {
    const COLLECTION: &'static str = "bindings";
}

/// Request body for creating a binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingPrototype {
    /// Component to bind to
    pub component: ComponentRef,
    /// Prefix for injected environment variables
    pub prefix: String,
    /// Service access secret
    pub secret_name: String,
}

//! Domain mapping models

use super::{ComponentRef, Resource};
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};

/// Routes a custom domain to an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainMapping {
    /// Fully qualified domain name
    pub name: String,
    /// Target component
    #[serde(default)]
    pub component: Option<ComponentRef>,
    /// CNAME record value the domain must point at
    #[serde(default)]
    pub cname_target: Option<String>,
    /// TLS secret serving the domain
    #[serde(default)]
    pub tls_secret: Option<String>,
    /// Lifecycle status
    #[serde(default)]
    pub status: Option<String>,
    /// Version tag required by update calls
    #[serde(default)]
    pub entity_tag: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Resource for DomainMapping {
    const COLLECTION: &'static str = "domain_mappings";
}

/// Request body for creating a domain mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainMappingPrototype {
    /// Fully qualified domain name
    pub name: String,
    /// Target component
    pub component: ComponentRef,
    /// TLS secret serving the domain
    pub tls_secret: String,
}

//! Domain mapping operations

use super::{CodeEngineService, ListEndpoint, ListOptions};
use crate::error::Result;
use crate::models::{DomainMapping, DomainMappingPrototype};
use crate::pagination::{Page, Pager};
use crate::path;
use crate::types::JsonObject;

const DOMAIN_MAPPINGS: &str = "/projects/{project_id}/domain_mappings";
const DOMAIN_MAPPING: &str = "/projects/{project_id}/domain_mappings/{name}";

impl CodeEngineService {
    pub async fn list_domain_mappings(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Page<DomainMapping>> {
        let path = path::render(DOMAIN_MAPPINGS, &[("project_id", project_id)])?;
        self.list_page(path, options).await
    }

    pub fn domain_mappings_pager(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Pager<ListEndpoint<DomainMapping>>> {
        let path = path::render(DOMAIN_MAPPINGS, &[("project_id", project_id)])?;
        self.pager(path, options)
    }

    /// Map a custom domain onto an application
    ///
    /// `name` is the fully qualified domain and `tls_secret` a TLS secret in
    /// the same project.
    pub async fn create_domain_mapping(
        &self,
        project_id: &str,
        prototype: &DomainMappingPrototype,
    ) -> Result<DomainMapping> {
        let path = path::render(DOMAIN_MAPPINGS, &[("project_id", project_id)])?;
        path::require("name", &prototype.name)?;
        path::require("component.name", &prototype.component.name)?;
        path::require("tls_secret", &prototype.tls_secret)?;
        self.create(&path, prototype).await
    }

    pub async fn get_domain_mapping(&self, project_id: &str, name: &str) -> Result<DomainMapping> {
        let path = path::render(DOMAIN_MAPPING, &[("project_id", project_id), ("name", name)])?;
        self.fetch(&path).await
    }

    pub async fn update_domain_mapping(
        &self,
        project_id: &str,
        name: &str,
        patch: &JsonObject,
        if_match: &str,
    ) -> Result<DomainMapping> {
        let path = path::render(DOMAIN_MAPPING, &[("project_id", project_id), ("name", name)])?;
        self.merge_patch(&path, patch, if_match).await
    }

    pub async fn delete_domain_mapping(&self, project_id: &str, name: &str) -> Result<()> {
        let path = path::render(DOMAIN_MAPPING, &[("project_id", project_id), ("name", name)])?;
        self.remove(&path).await
    }
}

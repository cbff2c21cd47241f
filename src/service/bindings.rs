//! Service binding operations

use super::{CodeEngineService, ListEndpoint, ListOptions};
use crate::error::Result;
use crate::models::{Binding, BindingPrototype};
use crate::pagination::{Page, Pager};
use crate::path;

const BINDINGS: &str = "/projects/{project_id}/bindings";
const BINDING: &str = "/projects/{project_id}/bindings/{id}";

impl CodeEngineService {
    pub async fn list_bindings(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Page<Binding>> {
        let path = path::render(BINDINGS, &[("project_id", project_id)])?;
        self.list_page(path, options).await
    }

    pub fn bindings_pager(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Pager<ListEndpoint<Binding>>> {
        let path = path::render(BINDINGS, &[("project_id", project_id)])?;
        self.pager(path, options)
    }

    /// Bind a service access secret to an app or job
    ///
    /// The secret's credentials are injected into the component as
    /// environment variables named with `prefix`.
    pub async fn create_binding(
        &self,
        project_id: &str,
        prototype: &BindingPrototype,
    ) -> Result<Binding> {
        let path = path::render(BINDINGS, &[("project_id", project_id)])?;
        path::require("component.name", &prototype.component.name)?;
        path::require("component.resource_type", &prototype.component.resource_type)?;
        path::require("prefix", &prototype.prefix)?;
        path::require("secret_name", &prototype.secret_name)?;
        self.create(&path, prototype).await
    }

    pub async fn get_binding(&self, project_id: &str, id: &str) -> Result<Binding> {
        let path = path::render(BINDING, &[("project_id", project_id), ("id", id)])?;
        self.fetch(&path).await
    }

    pub async fn delete_binding(&self, project_id: &str, id: &str) -> Result<()> {
        let path = path::render(BINDING, &[("project_id", project_id), ("id", id)])?;
        self.remove(&path).await
    }
}

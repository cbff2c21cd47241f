//! Project operations

use super::{CodeEngineService, ListEndpoint, ListOptions};
use crate::error::Result;
use crate::models::{Project, ProjectPrototype, ProjectStatusDetails};
use crate::pagination::{Page, Pager};
use crate::path;

const PROJECTS: &str = "/projects";
const PROJECT: &str = "/projects/{project_id}";
const PROJECT_STATUS_DETAILS: &str = "/projects/{project_id}/status_details";

impl CodeEngineService {
    /// List one page of projects
    pub async fn list_projects(&self, options: &ListOptions) -> Result<Page<Project>> {
        self.list_page(PROJECTS.to_string(), options).await
    }

    /// Page through all projects
    pub fn projects_pager(&self, options: &ListOptions) -> Result<Pager<ListEndpoint<Project>>> {
        self.pager(PROJECTS.to_string(), options)
    }

    /// Create a project
    ///
    /// The project is provisioned asynchronously; poll [`get_project`](Self::get_project)
    /// until its status is `active`.
    pub async fn create_project(&self, prototype: &ProjectPrototype) -> Result<Project> {
        path::require("name", &prototype.name)?;
        self.create(PROJECTS, prototype).await
    }

    pub async fn get_project(&self, project_id: &str) -> Result<Project> {
        let path = path::render(PROJECT, &[("project_id", project_id)])?;
        self.fetch(&path).await
    }

    /// Delete a project and everything in it
    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        let path = path::render(PROJECT, &[("project_id", project_id)])?;
        self.remove(&path).await
    }

    /// Readiness of the project's infrastructure
    pub async fn get_project_status_details(
        &self,
        project_id: &str,
    ) -> Result<ProjectStatusDetails> {
        let path = path::render(PROJECT_STATUS_DETAILS, &[("project_id", project_id)])?;
        self.fetch(&path).await
    }
}

//! Application and app revision operations

use super::{CodeEngineService, ListEndpoint, ListOptions};
use crate::error::Result;
use crate::models::{App, AppPrototype, AppRevision};
use crate::pagination::{Page, Pager};
use crate::path;
use crate::types::JsonObject;

const APPS: &str = "/projects/{project_id}/apps";
const APP: &str = "/projects/{project_id}/apps/{app_name}";
const REVISIONS: &str = "/projects/{project_id}/apps/{app_name}/revisions";
const REVISION: &str = "/projects/{project_id}/apps/{app_name}/revisions/{revision_name}";

impl CodeEngineService {
    /// List one page of applications in a project
    pub async fn list_apps(&self, project_id: &str, options: &ListOptions) -> Result<Page<App>> {
        let path = path::render(APPS, &[("project_id", project_id)])?;
        self.list_page(path, options).await
    }

    /// Page through the applications in a project
    pub fn apps_pager(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Pager<ListEndpoint<App>>> {
        let path = path::render(APPS, &[("project_id", project_id)])?;
        self.pager(path, options)
    }

    /// Deploy a new application
    pub async fn create_app(&self, project_id: &str, prototype: &AppPrototype) -> Result<App> {
        let path = path::render(APPS, &[("project_id", project_id)])?;
        path::require("name", &prototype.name)?;
        path::require("image_reference", &prototype.image_reference)?;
        self.create(&path, prototype).await
    }

    pub async fn get_app(&self, project_id: &str, app_name: &str) -> Result<App> {
        let path = path::render(APP, &[("project_id", project_id), ("app_name", app_name)])?;
        self.fetch(&path).await
    }

    /// Apply a JSON merge patch to an application
    ///
    /// `if_match` is the `entity_tag` of the version being changed; the call
    /// fails with 412 if the app was modified since.
    pub async fn update_app(
        &self,
        project_id: &str,
        app_name: &str,
        patch: &JsonObject,
        if_match: &str,
    ) -> Result<App> {
        let path = path::render(APP, &[("project_id", project_id), ("app_name", app_name)])?;
        self.merge_patch(&path, patch, if_match).await
    }

    pub async fn delete_app(&self, project_id: &str, app_name: &str) -> Result<()> {
        let path = path::render(APP, &[("project_id", project_id), ("app_name", app_name)])?;
        self.remove(&path).await
    }

    /// List one page of an application's revisions
    pub async fn list_app_revisions(
        &self,
        project_id: &str,
        app_name: &str,
        options: &ListOptions,
    ) -> Result<Page<AppRevision>> {
        let path = path::render(
            REVISIONS,
            &[("project_id", project_id), ("app_name", app_name)],
        )?;
        self.list_page(path, options).await
    }

    /// Page through an application's revisions
    pub fn app_revisions_pager(
        &self,
        project_id: &str,
        app_name: &str,
        options: &ListOptions,
    ) -> Result<Pager<ListEndpoint<AppRevision>>> {
        let path = path::render(
            REVISIONS,
            &[("project_id", project_id), ("app_name", app_name)],
        )?;
        self.pager(path, options)
    }

    pub async fn get_app_revision(
        &self,
        project_id: &str,
        app_name: &str,
        revision_name: &str,
    ) -> Result<AppRevision> {
        let path = path::render(
            REVISION,
            &[
                ("project_id", project_id),
                ("app_name", app_name),
                ("revision_name", revision_name),
            ],
        )?;
        self.fetch(&path).await
    }

    pub async fn delete_app_revision(
        &self,
        project_id: &str,
        app_name: &str,
        revision_name: &str,
    ) -> Result<()> {
        let path = path::render(
            REVISION,
            &[
                ("project_id", project_id),
                ("app_name", app_name),
                ("revision_name", revision_name),
            ],
        )?;
        self.remove(&path).await
    }
}

//! Build and build run operations

use super::{CodeEngineService, ListEndpoint, ListOptions};
use crate::error::Result;
use crate::models::{Build, BuildPrototype, BuildRun, BuildRunPrototype};
use crate::pagination::{Page, Pager};
use crate::path;
use crate::types::JsonObject;

const BUILDS: &str = "/projects/{project_id}/builds";
const BUILD: &str = "/projects/{project_id}/builds/{build_name}";
const BUILD_RUNS: &str = "/projects/{project_id}/build_runs";
const BUILD_RUN: &str = "/projects/{project_id}/build_runs/{build_run_name}";

impl CodeEngineService {
    pub async fn list_builds(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Page<Build>> {
        let path = path::render(BUILDS, &[("project_id", project_id)])?;
        self.list_page(path, options).await
    }

    pub fn builds_pager(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Pager<ListEndpoint<Build>>> {
        let path = path::render(BUILDS, &[("project_id", project_id)])?;
        self.pager(path, options)
    }

    /// Create a build configuration
    ///
    /// `name`, `output_image`, `output_secret` and `strategy_type` must be set.
    pub async fn create_build(
        &self,
        project_id: &str,
        prototype: &BuildPrototype,
    ) -> Result<Build> {
        let path = path::render(BUILDS, &[("project_id", project_id)])?;
        path::require("name", &prototype.name)?;
        path::require("output_image", &prototype.output_image)?;
        path::require("output_secret", &prototype.output_secret)?;
        path::require("strategy_type", &prototype.strategy_type)?;
        self.create(&path, prototype).await
    }

    pub async fn get_build(&self, project_id: &str, build_name: &str) -> Result<Build> {
        let path = path::render(
            BUILD,
            &[("project_id", project_id), ("build_name", build_name)],
        )?;
        self.fetch(&path).await
    }

    pub async fn update_build(
        &self,
        project_id: &str,
        build_name: &str,
        patch: &JsonObject,
        if_match: &str,
    ) -> Result<Build> {
        let path = path::render(
            BUILD,
            &[("project_id", project_id), ("build_name", build_name)],
        )?;
        self.merge_patch(&path, patch, if_match).await
    }

    pub async fn delete_build(&self, project_id: &str, build_name: &str) -> Result<()> {
        let path = path::render(
            BUILD,
            &[("project_id", project_id), ("build_name", build_name)],
        )?;
        self.remove(&path).await
    }

    /// List one page of build runs, optionally filtered with
    /// [`ListOptions::build_name`]
    pub async fn list_build_runs(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Page<BuildRun>> {
        let path = path::render(BUILD_RUNS, &[("project_id", project_id)])?;
        self.list_page(path, options).await
    }

    pub fn build_runs_pager(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Pager<ListEndpoint<BuildRun>>> {
        let path = path::render(BUILD_RUNS, &[("project_id", project_id)])?;
        self.pager(path, options)
    }

    pub async fn create_build_run(
        &self,
        project_id: &str,
        prototype: &BuildRunPrototype,
    ) -> Result<BuildRun> {
        let path = path::render(BUILD_RUNS, &[("project_id", project_id)])?;
        self.create(&path, prototype).await
    }

    pub async fn get_build_run(&self, project_id: &str, build_run_name: &str) -> Result<BuildRun> {
        let path = path::render(
            BUILD_RUN,
            &[("project_id", project_id), ("build_run_name", build_run_name)],
        )?;
        self.fetch(&path).await
    }

    pub async fn delete_build_run(&self, project_id: &str, build_run_name: &str) -> Result<()> {
        let path = path::render(
            BUILD_RUN,
            &[("project_id", project_id), ("build_run_name", build_run_name)],
        )?;
        self.remove(&path).await
    }
}

//! Job and job run operations

use super::{CodeEngineService, ListEndpoint, ListOptions};
use crate::error::Result;
use crate::models::{Job, JobPrototype, JobRun, JobRunPrototype};
use crate::pagination::{Page, Pager};
use crate::path;
use crate::types::JsonObject;

const JOBS: &str = "/projects/{project_id}/jobs";
const JOB: &str = "/projects/{project_id}/jobs/{job_name}";
const JOB_RUNS: &str = "/projects/{project_id}/job_runs";
const JOB_RUN: &str = "/projects/{project_id}/job_runs/{job_run_name}";

impl CodeEngineService {
    pub async fn list_jobs(&self, project_id: &str, options: &ListOptions) -> Result<Page<Job>> {
        let path = path::render(JOBS, &[("project_id", project_id)])?;
        self.list_page(path, options).await
    }

    pub fn jobs_pager(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Pager<ListEndpoint<Job>>> {
        let path = path::render(JOBS, &[("project_id", project_id)])?;
        self.pager(path, options)
    }

    pub async fn create_job(&self, project_id: &str, prototype: &JobPrototype) -> Result<Job> {
        let path = path::render(JOBS, &[("project_id", project_id)])?;
        path::require("name", &prototype.name)?;
        path::require("image_reference", &prototype.image_reference)?;
        self.create(&path, prototype).await
    }

    pub async fn get_job(&self, project_id: &str, job_name: &str) -> Result<Job> {
        let path = path::render(JOB, &[("project_id", project_id), ("job_name", job_name)])?;
        self.fetch(&path).await
    }

    /// Apply a JSON merge patch to a job definition
    pub async fn update_job(
        &self,
        project_id: &str,
        job_name: &str,
        patch: &JsonObject,
        if_match: &str,
    ) -> Result<Job> {
        let path = path::render(JOB, &[("project_id", project_id), ("job_name", job_name)])?;
        self.merge_patch(&path, patch, if_match).await
    }

    pub async fn delete_job(&self, project_id: &str, job_name: &str) -> Result<()> {
        let path = path::render(JOB, &[("project_id", project_id), ("job_name", job_name)])?;
        self.remove(&path).await
    }

    /// List one page of job runs
    ///
    /// Use [`ListOptions::job_name`] to restrict the list to one job.
    pub async fn list_job_runs(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Page<JobRun>> {
        let path = path::render(JOB_RUNS, &[("project_id", project_id)])?;
        self.list_page(path, options).await
    }

    pub fn job_runs_pager(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Pager<ListEndpoint<JobRun>>> {
        let path = path::render(JOB_RUNS, &[("project_id", project_id)])?;
        self.pager(path, options)
    }

    /// Start a job run, either of a named job or of an ad-hoc image
    pub async fn create_job_run(
        &self,
        project_id: &str,
        prototype: &JobRunPrototype,
    ) -> Result<JobRun> {
        let path = path::render(JOB_RUNS, &[("project_id", project_id)])?;
        self.create(&path, prototype).await
    }

    pub async fn get_job_run(&self, project_id: &str, job_run_name: &str) -> Result<JobRun> {
        let path = path::render(
            JOB_RUN,
            &[("project_id", project_id), ("job_run_name", job_run_name)],
        )?;
        self.fetch(&path).await
    }

    pub async fn delete_job_run(&self, project_id: &str, job_run_name: &str) -> Result<()> {
        let path = path::render(
            JOB_RUN,
            &[("project_id", project_id), ("job_run_name", job_run_name)],
        )?;
        self.remove(&path).await
    }
}

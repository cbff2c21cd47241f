//! Config map and secret operations
//!
//! Unlike apps and jobs these resources are updated by replacing their
//! whole data set with PUT.

use super::{CodeEngineService, ListEndpoint, ListOptions};
use crate::error::Result;
use crate::models::{
    ConfigMap, ConfigMapPrototype, ConfigMapReplace, Secret, SecretPrototype, SecretReplace,
};
use crate::pagination::{Page, Pager};
use crate::path;

const CONFIG_MAPS: &str = "/projects/{project_id}/config_maps";
const CONFIG_MAP: &str = "/projects/{project_id}/config_maps/{config_map_name}";
const SECRETS: &str = "/projects/{project_id}/secrets";
const SECRET: &str = "/projects/{project_id}/secrets/{secret_name}";

impl CodeEngineService {
    pub async fn list_config_maps(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Page<ConfigMap>> {
        let path = path::render(CONFIG_MAPS, &[("project_id", project_id)])?;
        self.list_page(path, options).await
    }

    pub fn config_maps_pager(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Pager<ListEndpoint<ConfigMap>>> {
        let path = path::render(CONFIG_MAPS, &[("project_id", project_id)])?;
        self.pager(path, options)
    }

    pub async fn create_config_map(
        &self,
        project_id: &str,
        prototype: &ConfigMapPrototype,
    ) -> Result<ConfigMap> {
        let path = path::render(CONFIG_MAPS, &[("project_id", project_id)])?;
        path::require("name", &prototype.name)?;
        self.create(&path, prototype).await
    }

    pub async fn get_config_map(
        &self,
        project_id: &str,
        config_map_name: &str,
    ) -> Result<ConfigMap> {
        let path = path::render(
            CONFIG_MAP,
            &[("project_id", project_id), ("config_map_name", config_map_name)],
        )?;
        self.fetch(&path).await
    }

    /// Replace a config map's data
    ///
    /// `if_match` is the config map's current `entity_tag`.
    pub async fn replace_config_map(
        &self,
        project_id: &str,
        config_map_name: &str,
        replacement: &ConfigMapReplace,
        if_match: &str,
    ) -> Result<ConfigMap> {
        let path = path::render(
            CONFIG_MAP,
            &[("project_id", project_id), ("config_map_name", config_map_name)],
        )?;
        self.replace(&path, replacement, if_match).await
    }

    pub async fn delete_config_map(&self, project_id: &str, config_map_name: &str) -> Result<()> {
        let path = path::render(
            CONFIG_MAP,
            &[("project_id", project_id), ("config_map_name", config_map_name)],
        )?;
        self.remove(&path).await
    }

    pub async fn list_secrets(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Page<Secret>> {
        let path = path::render(SECRETS, &[("project_id", project_id)])?;
        self.list_page(path, options).await
    }

    pub fn secrets_pager(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<Pager<ListEndpoint<Secret>>> {
        let path = path::render(SECRETS, &[("project_id", project_id)])?;
        self.pager(path, options)
    }

    pub async fn create_secret(
        &self,
        project_id: &str,
        prototype: &SecretPrototype,
    ) -> Result<Secret> {
        let path = path::render(SECRETS, &[("project_id", project_id)])?;
        path::require("name", &prototype.name)?;
        path::require("format", &prototype.format)?;
        self.create(&path, prototype).await
    }

    pub async fn get_secret(&self, project_id: &str, secret_name: &str) -> Result<Secret> {
        let path = path::render(
            SECRET,
            &[("project_id", project_id), ("secret_name", secret_name)],
        )?;
        self.fetch(&path).await
    }

    /// Replace a secret's data; the format cannot change
    pub async fn replace_secret(
        &self,
        project_id: &str,
        secret_name: &str,
        replacement: &SecretReplace,
        if_match: &str,
    ) -> Result<Secret> {
        let path = path::render(
            SECRET,
            &[("project_id", project_id), ("secret_name", secret_name)],
        )?;
        path::require("format", &replacement.format)?;
        self.replace(&path, replacement, if_match).await
    }

    pub async fn delete_secret(&self, project_id: &str, secret_name: &str) -> Result<()> {
        let path = path::render(
            SECRET,
            &[("project_id", project_id), ("secret_name", secret_name)],
        )?;
        self.remove(&path).await
    }
}

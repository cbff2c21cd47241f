//! Code Engine service client
//!
//! [`CodeEngineService`] exposes one method per API operation, grouped by
//! resource in the submodules. Every list operation comes in two shapes:
//!
//! - `list_*` fetches a single page, starting at `options.start` if set
//! - `*_pager` returns a [`Pager`] that follows cursors until the last page
//!
//! Path parameters and request bodies are validated before any request is
//! sent.

mod apps;
mod bindings;
mod builds;
mod configuration;
mod domain_mappings;
mod jobs;
mod list;
mod projects;

pub use list::{decode_page, ListEndpoint, ListOptions, MAX_LIMIT};

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::models::Resource;
use crate::pagination::{Page, PageFetcher, Pager};
use crate::types::{JsonObject, JsonValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Content type of JSON merge-patch update bodies
pub const MERGE_PATCH_CONTENT_TYPE: &str = "application/merge-patch+json";

/// Client for the Code Engine v2 API
///
/// Cloning is cheap; clones share the connection pool, rate limiter and
/// token cache.
#[derive(Clone)]
pub struct CodeEngineService {
    http: Arc<HttpClient>,
}

impl CodeEngineService {
    /// Create a client from configuration
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let http = HttpClient::with_auth(config.http, config.auth)?;
        Ok(Self::from_http_client(http))
    }

    /// Wrap an already configured HTTP client
    ///
    /// The client's base URL must point at the service root (`.../v2`).
    pub fn from_http_client(http: HttpClient) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    /// The HTTP client requests go through
    pub fn http_client(&self) -> &HttpClient {
        &self.http
    }

    fn endpoint<T: Resource>(&self, path: String, options: &ListOptions) -> ListEndpoint<T> {
        ListEndpoint::new(Arc::clone(&self.http), path, options.base_query())
    }

    async fn list_page<T: Resource>(&self, path: String, options: &ListOptions) -> Result<Page<T>> {
        options.validate()?;
        let cursor = options.start_cursor();
        let endpoint = self.endpoint::<T>(path, options);
        endpoint.fetch_page(cursor.as_ref()).await
    }

    fn pager<T: Resource>(
        &self,
        path: String,
        options: &ListOptions,
    ) -> Result<Pager<ListEndpoint<T>>> {
        options.validate()?;
        if options.start_cursor().is_some() {
            return Err(Error::invalid_param(
                "start",
                "a pager always begins at the first page",
            ));
        }
        Ok(Pager::new(self.endpoint(path, options)))
    }

    async fn create<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.http
            .request_json(Method::POST, path, RequestConfig::new().json(body))
            .await
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.http.get_json(path).await
    }

    async fn merge_patch<T: DeserializeOwned>(
        &self,
        path: &str,
        patch: &JsonObject,
        if_match: &str,
    ) -> Result<T> {
        crate::path::require("if_match", if_match)?;
        let config = RequestConfig::new()
            .header("Content-Type", MERGE_PATCH_CONTENT_TYPE)
            .header("If-Match", if_match)
            .json(JsonValue::Object(patch.clone()));
        self.http.request_json(Method::PATCH, path, config).await
    }

    async fn replace<B, T>(&self, path: &str, body: &B, if_match: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        crate::path::require("if_match", if_match)?;
        let config = RequestConfig::new()
            .header("If-Match", if_match)
            .json(serde_json::to_value(body)?);
        self.http.request_json(Method::PUT, path, config).await
    }

    /// Delete calls answer 202 with an empty body
    async fn remove(&self, path: &str) -> Result<()> {
        self.http
            .request_json_opt::<JsonValue>(Method::DELETE, path, RequestConfig::new())
            .await?;
        Ok(())
    }
}

impl fmt::Debug for CodeEngineService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeEngineService")
            .field("service_url", &self.http.config().base_url)
            .finish_non_exhaustive()
    }
}

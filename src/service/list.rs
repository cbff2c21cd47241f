//! List options and the generic list-endpoint fetcher

use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::models::{PaginationLink, Resource};
use crate::pagination::{Cursor, Page, PageFetcher};
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::warn;
use url::Url;

/// Largest page size the service accepts
pub const MAX_LIMIT: u32 = 100;

/// Query parameters the client manages itself
const RESERVED_PARAMS: [&str; 2] = ["limit", "start"];

/// Query parameters shared by every list operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Page size, 1 to [`MAX_LIMIT`]; the server default applies when unset
    pub limit: Option<u32>,
    /// Cursor of the page to return; only honoured by single-page calls
    pub start: Option<String>,
    /// Resource-specific filters such as `job_name`
    pub filters: StringMap,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resume at a cursor taken from an earlier page
    #[must_use]
    pub fn start(mut self, cursor: impl Into<String>) -> Self {
        self.start = Some(cursor.into());
        self
    }

    /// Add a filter parameter
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Only runs of this job
    #[must_use]
    pub fn job_name(self, name: impl Into<String>) -> Self {
        self.filter("job_name", name)
    }

    /// Only runs of this build
    #[must_use]
    pub fn build_name(self, name: impl Into<String>) -> Self {
        self.filter("build_name", name)
    }

    /// Check values before any request is made
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_LIMIT {
                return Err(Error::invalid_param(
                    "limit",
                    format!("must be between 1 and {MAX_LIMIT}, got {limit}"),
                ));
            }
        }
        for (key, value) in &self.filters {
            if RESERVED_PARAMS.contains(&key.as_str()) {
                return Err(Error::invalid_param(
                    key.as_str(),
                    format!("'{key}' is not a filter; use ListOptions::{key}"),
                ));
            }
            if value.is_empty() {
                return Err(Error::invalid_param(key.as_str(), "filter value is empty"));
            }
        }
        Ok(())
    }

    /// Parameters sent with every page: the limit and the filters
    pub(crate) fn base_query(&self) -> StringMap {
        let mut query = self.filters.clone();
        if let Some(limit) = self.limit {
            query.insert("limit".to_string(), limit.to_string());
        }
        query
    }

    /// The explicit start cursor, ignoring an empty string
    pub(crate) fn start_cursor(&self) -> Option<Cursor> {
        self.start
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(Cursor::from)
    }
}

/// [`PageFetcher`] for one list endpoint and one set of base query parameters
pub struct ListEndpoint<T> {
    http: Arc<HttpClient>,
    path: String,
    query: StringMap,
    _item: PhantomData<fn() -> T>,
}

impl<T> ListEndpoint<T> {
    pub(crate) fn new(http: Arc<HttpClient>, path: String, query: StringMap) -> Self {
        Self {
            http,
            path,
            query,
            _item: PhantomData,
        }
    }

    /// Resource path the endpoint lists
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base query parameters sent with every page
    pub fn query(&self) -> &StringMap {
        &self.query
    }
}

impl<T> fmt::Debug for ListEndpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListEndpoint")
            .field("base_url", &self.http.config().base_url)
            .field("path", &self.path)
            .field("query", &self.query)
            .finish()
    }
}

#[async_trait]
impl<T: Resource> PageFetcher for ListEndpoint<T> {
    type Item = T;

    async fn fetch_page(&self, cursor: Option<&Cursor>) -> Result<Page<T>> {
        let config = self
            .query
            .iter()
            .fold(RequestConfig::new(), |config, (key, value)| {
                config.query(key.as_str(), value.as_str())
            })
            .query_opt("start", cursor.map(Cursor::as_str));

        let body: JsonValue = self.http.get_json_with_config(&self.path, config).await?;
        decode_page(body)
    }
}

/// Split a list response into its items and continuation cursor
///
/// The items live under the resource's collection key. The cursor is
/// `next.start`, or the `start` query parameter of `next.href` when the
/// server only sent the link.
pub fn decode_page<T: Resource>(body: JsonValue) -> Result<Page<T>> {
    let JsonValue::Object(mut body) = body else {
        return Err(Error::protocol("list response is not a JSON object"));
    };

    let items = match body.remove(T::COLLECTION) {
        Some(JsonValue::Array(items)) => items,
        Some(other) => {
            return Err(Error::protocol(format!(
                "'{}' is a {}, expected an array",
                T::COLLECTION,
                json_kind(&other)
            )))
        }
        None => {
            return Err(Error::protocol(format!(
                "list response has no '{}' array",
                T::COLLECTION
            )))
        }
    };

    let items = items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|e| Error::protocol(format!("invalid item in '{}': {e}", T::COLLECTION)))?;

    let next = match body.remove("next") {
        None | Some(JsonValue::Null) => None,
        Some(link) => {
            let link: PaginationLink = serde_json::from_value(link)
                .map_err(|e| Error::protocol(format!("invalid 'next' link: {e}")))?;
            let cursor = next_cursor(&link);
            if cursor.is_none() {
                warn!("'next' link without a start token, ending traversal");
            }
            cursor
        }
    };

    let mut page = Page::new(items, next);
    page.limit = body
        .get("limit")
        .and_then(JsonValue::as_u64)
        .and_then(|n| u32::try_from(n).ok());
    page.total_count = body.get("total_count").and_then(JsonValue::as_u64);
    Ok(page)
}

fn next_cursor(link: &PaginationLink) -> Option<Cursor> {
    if let Some(start) = link.start.as_deref().filter(|s| !s.is_empty()) {
        return Some(Cursor::from(start));
    }

    let href = Url::parse(link.href.as_deref()?).ok()?;
    href.query_pairs()
        .find(|(key, _)| key == "start")
        .map(|(_, value)| value.into_owned())
        .filter(|s| !s.is_empty())
        .map(Cursor::from)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

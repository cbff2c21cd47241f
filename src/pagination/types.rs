//! Pagination types and traits
//!
//! Defines the page, cursor and fetcher abstractions the pager is generic over.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

/// Opaque continuation token issued by the server
///
/// Only the server understands its contents. The client copies it from one
/// response into the next request unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the raw token
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One batch of items returned by a single list call
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Cursor for the following page, absent on the last page
    pub next: Option<Cursor>,
    /// Page size the server applied (advisory)
    pub limit: Option<u32>,
    /// Total number of matching items, when the server reports it (advisory)
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    /// Create a page with an optional continuation cursor
    pub fn new(items: Vec<T>, next: Option<Cursor>) -> Self {
        Self {
            items,
            next,
            limit: None,
            total_count: None,
        }
    }

    /// Create a page that is followed by another one
    pub fn more(items: Vec<T>, next: impl Into<Cursor>) -> Self {
        Self::new(items, Some(next.into()))
    }

    /// Create the final page of a traversal
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// Set the applied page size
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the reported total count
    #[must_use]
    pub fn with_total_count(mut self, total: u64) -> Self {
        self.total_count = Some(total);
        self
    }

    /// Whether the server signalled a further page
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fetches single pages of one logical list query
///
/// Implementations are bound to one endpoint and one set of base query
/// parameters. The only per-call input is the cursor: `None` for the first
/// page, otherwise the cursor taken from the previous page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Item type of the bound list endpoint
    type Item: Send;

    /// Fetch the page that starts at `cursor`
    async fn fetch_page(&self, cursor: Option<&Cursor>) -> Result<Page<Self::Item>>;
}

/// [`PageFetcher`] backed by an async closure
pub struct FnFetcher<F, T> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

/// Build a [`PageFetcher`] from a closure receiving the cursor
///
/// ```rust,ignore
/// let pager = Pager::new(fetch_fn(|cursor| async move {
///     Ok(Page::last(vec![1, 2, 3]))
/// }));
/// ```
pub fn fetch_fn<F, Fut, T>(f: F) -> FnFetcher<F, T>
where
    F: Fn(Option<Cursor>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T>>> + Send,
    T: Send,
{
    FnFetcher {
        f,
        _item: PhantomData,
    }
}

#[async_trait]
impl<F, Fut, T> PageFetcher for FnFetcher<F, T>
where
    F: Fn(Option<Cursor>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T>>> + Send,
    T: Send,
{
    type Item = T;

    async fn fetch_page(&self, cursor: Option<&Cursor>) -> Result<Page<T>> {
        (self.f)(cursor.cloned()).await
    }
}

impl<F, T> fmt::Debug for FnFetcher<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFetcher").finish_non_exhaustive()
    }
}

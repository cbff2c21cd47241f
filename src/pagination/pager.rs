//! Cursor-following pager

use super::types::{Cursor, PageFetcher};
use crate::error::Result;
use futures::stream::{self, Stream, TryStreamExt};
use tracing::debug;

/// Stateful iterator over the pages of one list query
///
/// A pager starts with more pages available and no cursor. Each successful
/// fetch either stores the cursor the server returned or, when the page came
/// back without one, marks the pager exhausted. Exhaustion is terminal:
/// afterwards [`next_page`](Self::next_page) returns an empty `Vec` and never
/// touches the network.
///
/// A failed fetch leaves the pager exactly as it was, so calling
/// [`next_page`](Self::next_page) again retries the same cursor. If the
/// server advanced its own state before the failure was observed, the retry
/// can return items the caller has already seen.
///
/// Fetching takes `&mut self`, so one pager never has two requests in
/// flight. Sharing a pager between tasks requires external locking.
/// Dropping an in-progress [`next_page`](Self::next_page) future cancels the
/// request and leaves the cursor unchanged.
#[derive(Debug)]
pub struct Pager<F: PageFetcher> {
    fetcher: F,
    cursor: Option<Cursor>,
    exhausted: bool,
    pages_fetched: usize,
    items_fetched: usize,
}

impl<F: PageFetcher> Pager<F> {
    /// Create a pager positioned before the first page
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cursor: None,
            exhausted: false,
            pages_fetched: 0,
            items_fetched: 0,
        }
    }

    /// Whether another page may be fetched. Never performs I/O.
    pub fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// Cursor that the next fetch will send, if any
    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    /// Number of pages fetched successfully so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Number of items returned so far
    pub fn items_fetched(&self) -> usize {
        self.items_fetched
    }

    /// The fetcher this pager drives
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch the next page of items
    ///
    /// Returns an empty `Vec` without fetching once the pager is exhausted.
    /// An empty page in the middle of a traversal does not end it; only a
    /// missing cursor does.
    pub async fn next_page(&mut self) -> Result<Vec<F::Item>> {
        if self.exhausted {
            return Ok(Vec::new());
        }

        let page = self.fetcher.fetch_page(self.cursor.as_ref()).await?;

        self.pages_fetched += 1;
        self.items_fetched += page.items.len();

        match page.next {
            Some(next) => self.cursor = Some(next),
            None => {
                self.cursor = None;
                self.exhausted = true;
            }
        }

        debug!(
            "Page {}: fetched {} items, more: {}",
            self.pages_fetched,
            page.items.len(),
            !self.exhausted
        );

        Ok(page.items)
    }

    /// Drain every remaining page, concatenating items in fetch order
    ///
    /// Continues from the current position; pages already consumed are not
    /// fetched again. On error, items gathered by this call are discarded
    /// and the pager stays at the page that failed.
    pub async fn all_pages(&mut self) -> Result<Vec<F::Item>> {
        let mut items = Vec::new();
        while self.has_next() {
            items.extend(self.next_page().await?);
        }
        Ok(items)
    }

    /// Turn the pager into a stream of pages
    ///
    /// The stream ends after the last page or after yielding the first
    /// error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<F::Item>>> {
        stream::unfold(Some(self), |state| async move {
            let mut pager = state?;
            if !pager.has_next() {
                return None;
            }
            match pager.next_page().await {
                Ok(items) => Some((Ok(items), Some(pager))),
                Err(e) => Some((Err(e), None)),
            }
        })
    }

    /// Turn the pager into a stream of individual items
    pub fn into_item_stream(self) -> impl Stream<Item = Result<F::Item>> {
        self.into_stream()
            .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
            .try_flatten()
    }
}

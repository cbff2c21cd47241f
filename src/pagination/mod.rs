//! Pagination module
//!
//! Cursor-based pagination over list endpoints.
//!
//! # Overview
//!
//! A [`Pager`] drives one logical list query to completion. It owns a
//! [`PageFetcher`] bound to an endpoint and a fixed set of base query
//! parameters, remembers the opaque [`Cursor`] returned with each page, and
//! hands it back verbatim on the next fetch. Traversal ends when a page
//! arrives without a cursor.
//!
//! Items are returned in server order with no client-side reordering or
//! deduplication. If the underlying collection changes between fetches, a
//! traversal may skip or repeat items; that is inherent to cursor
//! pagination.
//!
//! ```rust,ignore
//! let mut pager = service.apps_pager("project-id", &ListOptions::new().limit(50))?;
//! while pager.has_next() {
//!     for app in pager.next_page().await? {
//!         println!("{}", app.name);
//!     }
//! }
//! ```

mod pager;
mod types;

pub use pager::Pager;
pub use types::{fetch_fn, Cursor, FnFetcher, Page, PageFetcher};

// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Code Engine Client
//!
//! An async client for the Code Engine v2 REST API, built around a generic
//! cursor-following [`Pager`].
//!
//! ## Features
//!
//! - **Typed Operations**: Projects, apps, revisions, jobs, job runs, builds,
//!   build runs, bindings, config maps, secrets and domain mappings
//! - **Cursor Pagination**: One [`Pager`] drives any list endpoint to completion
//! - **Auth**: Bearer token, basic, custom headers, or IAM API key exchange
//!   with token caching
//! - **Resilient Transport**: Retries with backoff and client-side rate limiting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use codeengine_client::{AuthConfig, CodeEngineService, ListOptions, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> codeengine_client::Result<()> {
//!     let config = ServiceConfig::builder()
//!         .region("us-east")?
//!         .auth(AuthConfig::iam_api_key(std::env::var("IBMCLOUD_API_KEY").unwrap()))
//!         .build()?;
//!     let service = CodeEngineService::new(config)?;
//!
//!     let mut pager = service.apps_pager("my-project-id", &ListOptions::new().limit(50))?;
//!     while pager.has_next() {
//!         for app in pager.next_page().await? {
//!             println!("{} {:?}", app.name, app.status);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      CodeEngineService                          │
//! │  list_*() → Page<T>    *_pager() → Pager<ListEndpoint<T>>       │
//! │  create_*  get_*  update_* (merge patch)  replace_*  delete_*   │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │   Auth   │   HTTP    │   Paginate    │   Path    │   Models    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Bearer   │ GET/POST  │ Pager         │ {param}   │ Resource    │
//! │ Basic    │ PATCH/PUT │ PageFetcher   │ encoding  │ Prototype   │
//! │ IAM key  │ Retry     │ Cursor        │ required  │ extra map   │
//! │ Headers  │ Rate Limit│ fetch_fn      │ fields    │             │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Resource models
pub mod models;

/// Endpoint path templates
pub mod path;

/// Service configuration
pub mod config;

/// The API client
pub mod service;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use auth::AuthConfig;
pub use config::{ServiceConfig, ServiceConfigBuilder, DEFAULT_SERVICE_URL};
pub use pagination::{fetch_fn, Cursor, Page, PageFetcher, Pager};
pub use service::{CodeEngineService, ListEndpoint, ListOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

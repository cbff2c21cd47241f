//! Authentication module
//!
//! Supports: Bearer, Basic, IAM API key exchange, Custom Headers
//!
//! The `Authenticator` applies credentials to outgoing requests and caches
//! the access token obtained from an API key until shortly before it expires.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken, DEFAULT_IAM_TOKEN_URL};

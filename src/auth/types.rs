//! Auth configuration types

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Default token endpoint for API key exchange
pub const DEFAULT_IAM_TOKEN_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Bearer token authentication with a pre-obtained token
    Bearer {
        /// The bearer token
        token: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// API key exchanged for a short-lived access token
    IamApiKey {
        /// The API key
        api_key: String,
        /// Token endpoint URL
        token_url: String,
    },

    /// Custom headers
    CustomHeaders {
        /// Headers to add to each request
        headers: HashMap<String, String>,
    },
}

impl AuthConfig {
    /// Create a bearer token config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Create an API key config against the default token endpoint
    pub fn iam_api_key(api_key: impl Into<String>) -> Self {
        Self::IamApiKey {
            api_key: api_key.into(),
            token_url: DEFAULT_IAM_TOKEN_URL.to_string(),
        }
    }

    /// Override the token endpoint of an API key config
    #[must_use]
    pub fn with_token_url(self, url: impl Into<String>) -> Self {
        match self {
            Self::IamApiKey { api_key, .. } => Self::IamApiKey {
                api_key,
                token_url: url.into(),
            },
            other => other,
        }
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false,
        }
    }
}

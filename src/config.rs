//! Service configuration
//!
//! Configuration is built in code; the library reads no files or
//! environment variables.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, HttpClientConfigBuilder, RateLimiterConfig};
use crate::types::BackoffType;
use std::time::Duration;
use url::Url;

/// Service URL used when none is configured
pub const DEFAULT_SERVICE_URL: &str = "https://api.au-syd.codeengine.cloud.ibm.com/v2";

/// Service URL for a region, e.g. `us-east` or `eu-de`
pub fn url_for_region(region: &str) -> Result<String> {
    if region.is_empty() {
        return Err(Error::missing_param("region"));
    }
    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(Error::invalid_param(
            "region",
            format!("'{region}' is not a valid region name"),
        ));
    }
    Ok(format!("https://api.{region}.codeengine.cloud.ibm.com/v2"))
}

/// Complete configuration for [`CodeEngineService`](crate::CodeEngineService)
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Transport settings; `base_url` is the service URL
    pub http: HttpClientConfig,
    /// Credentials
    pub auth: AuthConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            http: HttpClientConfig::builder()
                .base_url(DEFAULT_SERVICE_URL)
                .build(),
            auth: AuthConfig::None,
        }
    }
}

impl ServiceConfig {
    /// Create a new config builder
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Default settings against a regional endpoint
    pub fn for_region(region: &str) -> Result<Self> {
        ServiceConfig::builder().region(region)?.build()
    }

    /// The configured service URL
    pub fn service_url(&self) -> &str {
        self.http.base_url.as_deref().unwrap_or(DEFAULT_SERVICE_URL)
    }
}

/// Builder for service config
pub struct ServiceConfigBuilder {
    http: HttpClientConfigBuilder,
    service_url: Option<String>,
    auth: AuthConfig,
}

impl Default for ServiceConfigBuilder {
    fn default() -> Self {
        Self {
            http: HttpClientConfig::builder(),
            service_url: None,
            auth: AuthConfig::None,
        }
    }
}

impl ServiceConfigBuilder {
    /// Set the service URL
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Target the regional endpoint
    pub fn region(self, region: &str) -> Result<Self> {
        Ok(self.service_url(url_for_region(region)?))
    }

    /// Set credentials
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http = self.http.timeout(timeout);
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.http = self.http.max_retries(retries);
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.http = self.http.backoff(backoff_type, initial, max);
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.http = self.http.rate_limit(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.http = self.http.no_rate_limit();
        self
    }

    /// Add a header sent with every request
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.http = self.http.header(key, value);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.http = self.http.user_agent(agent);
        self
    }

    /// Build the config, validating the service URL
    pub fn build(self) -> Result<ServiceConfig> {
        let url = self
            .service_url
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        let parsed = Url::parse(&url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Service URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        Ok(ServiceConfig {
            http: self.http.base_url(url.trim_end_matches('/')).build(),
            auth: self.auth,
        })
    }
}

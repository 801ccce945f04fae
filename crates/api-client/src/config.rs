//! Configuration for the TGTG API client
//!
//! Covers the transport side only (where to send requests and how long to
//! wait). Credentials and locale live in [`Session`](crate::session::Session).

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Production API base URL
pub const DEFAULT_BASE_URL: &str = "https://apptoogoodtogo.com/api";

/// User agent of the iOS app build the API expects
pub const DEFAULT_USER_AGENT: &str =
    "TooGoodToGo/23.1.0 (6188) (iPhone/iPhone 12 (GSM); iOS 15.7.2; Scale/2.00/iOS)";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every endpoint suffix is appended to
    pub base_url: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `TGTG_API_URL`: Base URL (defaults to the production API)
    /// - `TGTG_TIMEOUT_SECS`: Request timeout in seconds
    /// - `TGTG_USER_AGENT`: Override for the mobile app user agent
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup
    ///
    /// A timeout that is not a whole number of seconds is rejected, as is
    /// anything [`validate`](Self::validate) refuses.
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("TGTG_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup("TGTG_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map(Duration::from_secs).map_err(|_| {
                ApiError::config(format!("TGTG_TIMEOUT_SECS must be whole seconds, got '{raw}'"))
            })?,
            None => DEFAULT_TIMEOUT,
        };

        let user_agent =
            lookup("TGTG_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let config = Self {
            base_url,
            timeout,
            user_agent,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the full URL for an endpoint suffix such as `/order/v6/active`
    #[must_use]
    pub fn endpoint_url(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), suffix)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ApiError::config("user_agent cannot be empty"));
        }

        Ok(())
    }
}

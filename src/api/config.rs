//! Client configuration parsed from environment variables.

use super::error::ApiError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Optional request/connect timeouts. `None` leaves reqwest's default
/// (no timeout) in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientTimeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

impl ClientTimeouts {
    /// Read `SHADOWSCAN_REQUEST_TIMEOUT_SECS` / `SHADOWSCAN_CONNECT_TIMEOUT_SECS`.
    /// Unset, unparsable or `0` means no timeout.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            request_secs: env_parse_secs("SHADOWSCAN_REQUEST_TIMEOUT_SECS"),
            connect_secs: env_parse_secs("SHADOWSCAN_CONNECT_TIMEOUT_SECS"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeouts: ClientTimeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), timeouts: ClientTimeouts::default() }
    }
}

impl ClientConfig {
    /// Config for an explicit base URL with no timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] unless the URL is `http(s)://`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self { base_url: normalize_base_url(base_url)?, timeouts: ClientTimeouts::default() })
    }

    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `SHADOWSCAN_API_BASE_URL`: default `http://localhost:3000/api`
    /// - `SHADOWSCAN_REQUEST_TIMEOUT_SECS`: unset means no timeout
    /// - `SHADOWSCAN_CONNECT_TIMEOUT_SECS`: unset means no timeout
    ///
    /// A timeout of `0` is treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the base URL is not `http(s)://`.
    pub fn from_env() -> Result<Self, ApiError> {
        let raw = std::env::var("SHADOWSCAN_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());
        let base_url = normalize_base_url(&raw)?;
        Ok(Self { base_url, timeouts: ClientTimeouts::from_env() })
    }

    /// Replace the base URL, keeping the timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] unless the URL is `http(s)://`.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ApiError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: ClientTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

fn env_parse_secs(key: &str) -> Option<u64> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|&secs| secs > 0)
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ApiError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! API client façade for the ShadowScan REST service.
//!
//! DESIGN
//! ======
//! Every outbound HTTP call goes through [`ApiClient`]. It owns the base URL
//! and one pooled `reqwest::Client`; endpoint methods only name a path, a
//! body and an optional bearer token. Each call is a single request: no
//! retry, no de-duplication, no caching. Dropping the future abandons the
//! request.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as a tagged [`ApiError`]. Non-2xx responses keep their
//! status alongside the server-supplied message; transport failures are a
//! separate variant whose message is always `Network error occurred`.

pub mod config;
pub mod error;
mod request;
pub mod types;

use std::time::Duration;

use uuid::Uuid;

use config::ClientConfig;
use error::ApiError;
use types::{
    AuthResponse, FeedbackRequest, LoginRequest, RegisterRequest, ScanReport, ScanRequest, ScanResponse,
    StatusResponse,
};

// =============================================================================
// CLIENT
// =============================================================================

/// Handle to the ShadowScan API. Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from a typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails to build.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base_url = config::normalize_base_url(&config.base_url)?;
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    /// Build a client from `SHADOWSCAN_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`] and [`ApiClient::new`].
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Normalized base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] when the server rejects the credentials.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/login", credentials, None).await
    }

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] when the email or username is taken or invalid.
    pub async fn register(&self, user: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/register", user, None).await
    }

    /// `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the service is unreachable.
    pub async fn health_check(&self) -> Result<StatusResponse, ApiError> {
        self.get("/health", None).await
    }

    /// `POST /scan`. The server requires a token; without one no
    /// `Authorization` header is sent and the server's rejection is returned.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn start_scan(&self, request: &ScanRequest, token: Option<&str>) -> Result<ScanResponse, ApiError> {
        self.post("/scan", request, token).await
    }

    /// `GET /results/{user_id}` as raw JSON values.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn get_scan_results(
        &self,
        user_id: Uuid,
        token: Option<&str>,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        self.get(&results_path(user_id), token).await
    }

    /// `GET /results/{user_id}` decoded into [`ScanReport`]s.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get_scan_results`], plus [`ApiError::Decode`]
    /// when an element does not match the report shape.
    pub async fn get_scan_reports(&self, user_id: Uuid, token: Option<&str>) -> Result<Vec<ScanReport>, ApiError> {
        self.get(&results_path(user_id), token).await
    }

    /// `POST /feedback`. Anonymous; no token is sent.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn submit_feedback(&self, feedback: &FeedbackRequest) -> Result<StatusResponse, ApiError> {
        self.post("/feedback", feedback, None).await
    }
}

fn results_path(user_id: Uuid) -> String {
    format!("/results/{user_id}")
}

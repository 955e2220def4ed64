//! ShadowScan API client.
//!
//! Typed access to the ShadowScan privacy-scan service: authentication,
//! scan submission, result retrieval and false-positive feedback. All
//! outbound HTTP lives in [`api`]; callers build request records from
//! [`api::types`] and branch on [`ApiError`] variants.

pub mod api;

pub use api::ApiClient;
pub use api::config::{ClientConfig, ClientTimeouts, DEFAULT_API_BASE_URL};
pub use api::error::ApiError;
pub use api::types::{
    AuthResponse, FeedbackRequest, LoginRequest, RegisterRequest, ScanFinding, ScanRecord, ScanReport, ScanRequest,
    ScanResponse, StatusResponse,
};

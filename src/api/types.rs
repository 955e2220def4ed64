//! Wire records for the ShadowScan REST API.
//!
//! Request types serialize; response types also serialize so callers can
//! re-emit them. Nothing here is validated client-side: the server owns
//! field rules such as email format and password length.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// AUTH
// =============================================================================

/// Credentials for `POST /login`.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration payload for `POST /register`.
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), email: email.into(), password: password.into() }
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Returned by both login and register. The token is opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

// =============================================================================
// SCANS
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ScanRequest {
    pub email_to_scan: String,
}

impl ScanRequest {
    #[must_use]
    pub fn new(email_to_scan: impl Into<String>) -> Self {
        Self { email_to_scan: email_to_scan.into() }
    }
}

/// Acknowledgement for an accepted scan. The scan itself runs server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub scan_id: Uuid,
    pub message: String,
}

/// A scan row as stored by the server.
///
/// `status` is one of `pending`, `in_progress`, `completed` or `failed`.
/// Timestamps are kept as the RFC 3339 strings the server sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A single exposure found by a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanFinding {
    pub id: Uuid,
    pub scan_id: Uuid,
    /// e.g. `email_leak`, `password_leak`, `social_media`.
    pub finding_type: String,
    /// Free-form, finding-type specific.
    pub details: serde_json::Value,
    /// e.g. `low`, `medium`, `high`, `critical`.
    pub risk_level: String,
    #[serde(default)]
    pub source_link: Option<String>,
    pub found_at: String,
}

/// One element of the `/results/{userId}` array: the scan fields flattened
/// alongside its findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    #[serde(flatten)]
    pub scan: ScanRecord,
    #[serde(default)]
    pub results: Vec<ScanFinding>,
}

// =============================================================================
// FEEDBACK / STATUS
// =============================================================================

/// Free-text feedback, optionally flagging a finding as a false positive.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest {
    pub message: String,
    pub is_false_positive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_result_id: Option<Uuid>,
}

impl FeedbackRequest {
    #[must_use]
    pub fn new(message: impl Into<String>, is_false_positive: bool) -> Self {
        Self { message: message.into(), is_false_positive, related_result_id: None }
    }

    #[must_use]
    pub fn related_to(mut self, result_id: Uuid) -> Self {
        self.related_result_id = Some(result_id);
        self
    }
}

/// `{ "status": ... }` body returned by `/health` and `/feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

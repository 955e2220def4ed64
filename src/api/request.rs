//! Request construction and response normalization shared by every endpoint.
//!
//! Pure helpers (`build_headers`, `interpret_response`, `error_message`) are
//! split from the I/O so the failure mapping can be tested without a socket.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ApiClient;
use super::error::ApiError;

// =============================================================================
// TRANSPORT
// =============================================================================

impl ApiClient {
    pub(super) async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path, token)?;
        execute(request, &Method::GET, path).await
    }

    pub(super) async fn post<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        let request = self.request(Method::POST, path, token)?.body(payload);
        execute(request, &Method::POST, path).await
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> Result<reqwest::RequestBuilder, ApiError> {
        let url = format!("{}{path}", self.base_url);
        Ok(self.http.request(method, url).headers(build_headers(token)?))
    }
}

async fn execute<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    method: &Method,
    path: &str,
) -> Result<T, ApiError> {
    tracing::debug!(%method, path, "api request");

    let response = request.send().await.map_err(|e| {
        tracing::warn!(%method, path, error = %e, "api request failed before response");
        ApiError::Network(e)
    })?;

    let status = response.status().as_u16();
    let text = response.text().await.map_err(|e| {
        tracing::warn!(%method, path, status, error = %e, "api response body read failed");
        ApiError::Network(e)
    })?;

    let result = interpret_response(status, &text);
    match &result {
        Ok(_) => tracing::debug!(%method, path, status, "api response"),
        Err(e) => tracing::warn!(%method, path, status, error = %e, "api response error"),
    }
    result
}

// =============================================================================
// PURE HELPERS
// =============================================================================

/// JSON content type on every request; bearer auth only when a token is given.
pub(crate) fn build_headers(token: Option<&str>) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

pub(crate) fn interpret_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Http { status, message: error_message(status, body) });
    }
    serde_json::from_str(body).map_err(|source| ApiError::Decode { status, source })
}

/// Server `message`, then server `error`, then a generic text with the status.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    parsed
        .as_ref()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(serde_json::Value::as_str).filter(|s| !s.is_empty()))
        })
        .map_or_else(|| format!("HTTP error! status: {status}"), str::to_owned)
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;

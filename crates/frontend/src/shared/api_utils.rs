//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Every dashboard endpoint answers with a `{ "data": ... }` envelope.

use contracts::shared::api_response::{ApiResponse, ServerFieldErrors};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Backend port, the API is served next to the dashboard host.
pub const API_PORT: u16 = 3000;

/// Prefix of the admin/seller dashboard API.
pub const API_PREFIX: &str = "/api/v1/dashboard";

/// localStorage key holding the bearer token.
const TOKEN_KEY: &str = "token";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path relative to [`API_PREFIX`]
///
/// # Example
/// ```rust,ignore
/// let url = api_url("seller/subscriptions");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), api_path(path))
}

/// Path part of an API URL, `"seller/subscriptions"` -> `"/api/v1/dashboard/seller/subscriptions"`
pub fn api_path(path: &str) -> String {
    format!("{}/{}", API_PREFIX, path.trim_start_matches('/'))
}

/// Append query parameters serialized with `serde_qs`
pub fn with_query<P: Serialize>(url: &str, params: &P) -> Result<String, ApiError> {
    let query = serde_qs::to_string(params)
        .map_err(|e| ApiError::message(format!("Failed to encode query: {}", e)))?;
    if query.is_empty() {
        Ok(url.to_string())
    } else {
        Ok(format!("{}?{}", url, query))
    }
}

/// Request failure: a message plus per-field server validation errors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiError {
    pub message: String,
    pub fields: ServerFieldErrors,
}

impl ApiError {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: ServerFieldErrors::default(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Error body of a rejected request
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    params: Option<ServerFieldErrors>,
}

fn error_from_body(status: u16, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    ApiError {
        message: parsed
            .message
            .unwrap_or_else(|| format!("HTTP {}", status)),
        fields: parsed.params.unwrap_or_default(),
    }
}

fn auth_header() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .map(|token| format!("Bearer {}", token))
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match auth_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("request to {} failed: HTTP {}", response.url(), status);
        return Err(error_from_body(status, &body));
    }
    let envelope: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))?;
    Ok(envelope.data)
}

/// GET `url` and unwrap the `data` envelope
pub async fn get_data<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = authorized(Request::get(url))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;
    read_data(response).await
}

/// POST a JSON body and unwrap the `data` envelope of the answer
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let response = authorized(Request::post(url))
        .json(body)
        .map_err(|e| ApiError::message(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;
    read_data(response).await
}

/// PUT a JSON body and unwrap the `data` envelope of the answer
pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let response = authorized(Request::put(url))
        .json(body)
        .map_err(|e| ApiError::message(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;
    read_data(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_params::ListParams;

    #[test]
    fn test_api_path() {
        assert_eq!(api_path("seller/subscriptions"), "/api/v1/dashboard/seller/subscriptions");
        assert_eq!(api_path("/admin/shops/1"), "/api/v1/dashboard/admin/shops/1");
    }

    #[test]
    fn test_with_query_uses_camel_case_page_size() {
        let params = ListParams::new(10).with_search("baker");
        let url = with_query("/x", &params).unwrap();
        assert_eq!(url, "/x?search=baker&perPage=10&page=1");
    }

    #[test]
    fn test_with_query_skips_empty_search() {
        let params = ListParams::new(100).with_search("  ").with_kind("shop");
        let url = with_query("/c", &params).unwrap();
        assert_eq!(url, "/c?perPage=100&page=1&type=shop");
    }

    #[test]
    fn test_error_from_body() {
        let err = error_from_body(
            422,
            r#"{"message":"Validation failed","params":{"title.en":["already taken"]}}"#,
        );
        assert_eq!(err.message, "Validation failed");
        assert_eq!(err.fields.first("title.en"), Some("already taken"));

        let err = error_from_body(500, "<html>oops</html>");
        assert_eq!(err.to_string(), "HTTP 500");
        assert!(err.fields.is_empty());
    }
}

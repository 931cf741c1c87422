//! HTTP API Client
//!
//! Every backend call goes through `ApiClient`. It builds the URL from the
//! configured base, attaches the stored bearer token, applies the request
//! timeout, and turns non-2xx answers into `ApiError::Status` carrying the
//! backend's own message.
//!
//! Resource functions live in `pokemon_api` and `auth`; they are thin
//! typed wrappers over `request` + `send_json`.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::egui_app::storage::{KeyValueStorage, TOKEN_KEY};

/// Failures surfaced by the API client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status
    #[error("Request failed: {status} - {message}")]
    Status { status: u16, message: String },
    /// The body could not be decoded into the expected type
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Missing, expired or rejected credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Backend message for status errors, the display text otherwise.
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Error body shape used by the backend (`{"status":..,"error":..,"message":..}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn error_message(status: StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.filter(|m| !m.is_empty()).or(b.error));
    match parsed {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string()),
    }
}

/// Shared HTTP client for all resources.
#[derive(Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
    storage: Arc<dyn KeyValueStorage>,
}

impl ApiClient {
    pub fn new(config: Config, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            config,
            client: Client::new(),
            storage,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Stored bearer token, if any. A storage failure is treated as no token.
    pub fn token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Could not read stored token: {}", e);
                None
            }
        }
    }

    /// Start a request to `path` with credentials and timeout attached.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.api_url(path);
        tracing::debug!("{} {}", method, url);

        let request = self
            .client
            .request(method, &url)
            .timeout(self.config.request_timeout());

        match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send and decode a JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and ignore any body.
    pub async fn send_no_content(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        tracing::warn!("Request failed: {} - {}", status, message);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

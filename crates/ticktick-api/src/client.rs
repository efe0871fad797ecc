//! HTTP client wrapper for the TickTick web API.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE, SET_COOKIE};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, Error, Result};
use crate::models::{BatchRequest, BatchResponse, MainResponse, Project};

/// Base URL for the TickTick web API v2.
pub const BASE_URL: &str = "https://api.ticktick.com/api/v2";

/// Device descriptor the web API requires on every request.
const X_DEVICE: &str = r#"{"platform":"web","os":"macOS 10.15.7","device":"Chrome 121.0.0.0","name":"","version":5070,"id":"65bcdf6491ea1a2e7db71fbe","channel":"website","campaign":"","websocket":""}"#;

/// Client for interacting with the TickTick API.
///
/// Authentication is cookie based: [`TickTickClient::login`] returns the
/// session cookie, which is persisted by [`crate::session::SessionStore`] and
/// handed back to [`TickTickClient::new`] on later runs.
#[derive(Clone)]
pub struct TickTickClient {
    cookie: String,
    http_client: reqwest::Client,
    base_url: String,
}

/// Login failure body returned by `/user/signon`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginErrorBody {
    #[serde(default)]
    error_id: String,
    #[serde(default)]
    error_code: String,
    #[serde(default)]
    error_message: String,
    #[serde(default)]
    data: Option<LoginErrorData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginErrorData {
    #[serde(default)]
    remainder_times: Option<i64>,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

impl TickTickClient {
    /// Creates a new client that sends the given session cookie.
    pub fn new(cookie: impl Into<String>) -> Result<Self> {
        Self::with_base_url(cookie, BASE_URL)
    }

    /// Creates a new client against a custom base URL (used by tests and
    /// self-hosted proxies).
    pub fn with_base_url(cookie: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-device", HeaderValue::from_static(X_DEVICE));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            cookie: cookie.into(),
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the session cookie.
    pub fn cookie(&self) -> &str {
        &self.cookie
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the full account state: inbox id, open tasks, lists and filters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInboxId`] if the response has no string inbox id.
    pub async fn get_snapshot(&self) -> Result<MainResponse> {
        let response: MainResponse = self.get("/batch/check/0").await?;
        if response.inbox_id().is_none() {
            return Err(Error::MissingInboxId);
        }
        debug!(
            tasks = response.sync_task_bean.update.len(),
            projects = response.project_profiles.len(),
            filters = response.filters.len(),
            "fetched snapshot"
        );
        Ok(response)
    }

    /// Sends a batch of add/update/delete operations.
    ///
    /// Per-task failures are reported in [`BatchResponse::id2error`], not as an `Err`.
    pub async fn batch_tasks(&self, request: &BatchRequest) -> Result<BatchResponse> {
        debug!(
            add = request.add.len(),
            update = request.update.len(),
            delete = request.delete.len(),
            "sending task batch"
        );
        self.post("/batch/task", request).await
    }

    /// Lists every project of the account.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.get("/projects").await
    }

    /// Signs in with email and password and returns the session cookie.
    ///
    /// Only the `name=value` part of every `Set-Cookie` header is kept.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let url = format!("{}/user/signon?wc=true&remember=true", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .json(&LoginBody { username, password })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(parse_login_error(response).await);
        }

        let cookie = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| value.split(';').next())
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .collect::<Vec<_>>()
            .join("; ");

        if cookie.is_empty() {
            return Err(ApiError::Auth {
                message: "login succeeded but no session cookie was returned".to_string(),
            }
            .into());
        }
        Ok(cookie)
    }

    /// Performs a GET request to the given endpoint.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http_client
            .get(&url)
            .header(COOKIE, &self.cookie)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Performs a POST request to the given endpoint with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http_client
            .post(&url)
            .header(COOKIE, &self.cookie)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, converting it to our error types.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        if response.status().is_success() {
            let body = response.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }

        Err(parse_error_response(response).await)
    }
}

/// Parses an error response into our error types.
async fn parse_error_response(response: reqwest::Response) -> Error {
    let status = response.status();
    let status_code = status.as_u16();

    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let message = response.text().await.unwrap_or_default();

    let api_error = match status_code {
        401 | 403 => ApiError::Auth {
            message: if message.is_empty() {
                "Session expired, please log in again".to_string()
            } else {
                message
            },
        },
        404 => ApiError::NotFound {
            resource: "resource".to_string(),
        },
        429 => ApiError::RateLimit { retry_after },
        400 => ApiError::Validation {
            message: if message.is_empty() {
                "Bad request".to_string()
            } else {
                message
            },
        },
        _ => ApiError::Http {
            status: status_code,
            message: if message.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                message
            },
        },
    };

    Error::Api(api_error)
}

/// Turns a failed sign-on into an [`ApiError::Auth`] with the service's code and message.
async fn parse_login_error(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<LoginErrorBody>(&body) {
        Ok(err) => {
            let mut message = format!(
                "Login failed! Code: {}, Message: {}, ID: {}",
                err.error_code, err.error_message, err.error_id
            );
            if let Some(remaining) = err.data.and_then(|d| d.remainder_times) {
                message.push_str(&format!(" (remaining attempts: {remaining})"));
            }
            ApiError::Auth { message }.into()
        }
        Err(_) => ApiError::Http {
            status,
            message: body,
        }
        .into(),
    }
}

impl fmt::Debug for TickTickClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickTickClient")
            .field("cookie", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

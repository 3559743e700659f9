//! # Grist Client
//!
//! This module implements the typed operations of the Grist REST API.
//!
//! The [`GristClient`] is generic over the [`Transport`] used to reach the server. Operations are
//! grouped by resource, each in its own module:
//!
//! * [`orgs`]: list, describe, rename and delete organizations, list their users.
//! * [`workspaces`]: list, create, describe, rename and delete workspaces.
//! * [`docs`]: create, describe, rename and delete documents.
//! * [`tables`], [`columns`] and [`records`]: the contents of a document.
//!
//! Every operation performs exactly one HTTP request. A response with a status other than
//! `200 OK` is returned as [`ApiError`], untouched.
//!
//! ## Example
//!
//! ```rust,no_run
//! use grist_core::client::{ClientConfig, GristClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GristClient::new(ClientConfig::new("http://localhost:8484", "my-api-key"))?;
//!
//! for org in client.list_orgs().await? {
//!     println!("{} ({})", org.name, org.id);
//! }
//! # Ok(())
//! # }
//! ```
pub mod columns;
pub mod docs;
pub mod orgs;
pub mod records;
pub mod tables;
pub mod workspaces;
mod types;

pub use types::*;

use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
use http::{
    HeaderValue, Method, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use reqwest::Url;
use serde::{Serialize, de::DeserializeOwned};
use std::{fmt, time::Duration};

const API_PATH: &str = "/api";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Idle connections kept per host when none is configured.
pub const DEFAULT_MAX_IDLE_CONNECTIONS: usize = 10;

/// Errors that can occur when building a [`GristClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("endpoint cannot be empty")]
    EmptyEndpoint,
    #[error("API key cannot be empty")]
    EmptyApiKey,
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("API key contains characters that are not allowed in an HTTP header")]
    InvalidApiKey,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors that can occur while performing an API operation.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Failed to encode request body: '{0}'")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to decode response from '{url}': '{source}'")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The server answered with an unexpected status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    /// The response body, trimmed.
    pub body: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            write!(f, "api error: {}", self.status)
        } else {
            write!(f, "api error: {} - {}", self.status, self.body)
        }
    }
}

impl std::error::Error for ApiError {}

/// Connection settings for a [`GristClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the Grist instance (e.g. `https://docs.getgrist.com`).
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
    pub max_idle_connections: usize,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_idle_connections(mut self, max_idle_connections: usize) -> Self {
        self.max_idle_connections = max_idle_connections;
        self
    }
}

/// The Grist API client.
#[derive(Debug, Clone)]
pub struct GristClient<T = ReqwestTransport> {
    transport: T,
    endpoint: String,
    api_url: Url,
    auth: HeaderValue,
}

impl GristClient<ReqwestTransport> {
    /// Creates a client backed by a `reqwest` connection pool.
    ///
    /// # Returns
    ///
    /// * `Ok(GristClient)` - The client, no request has been sent yet.
    /// * `Err(ClientBuildError)` - If the endpoint or the API key are empty or invalid.
    pub fn new(config: ClientConfig) -> Result<Self, ClientBuildError> {
        let transport = ReqwestTransport::new(config.timeout, config.max_idle_connections)?;
        Self::with_transport(config, transport)
    }
}

impl<T> GristClient<T>
where
    T: Transport,
{
    /// Creates a client that sends its requests through `transport`.
    ///
    /// `config.timeout` and `config.max_idle_connections` are left to the transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ClientBuildError> {
        if config.endpoint.is_empty() {
            return Err(ClientBuildError::EmptyEndpoint);
        }
        if config.api_key.is_empty() {
            return Err(ClientBuildError::EmptyApiKey);
        }

        // API_PATH already starts with '/'
        let endpoint = config.endpoint.trim_end_matches('/').to_string();

        let api_url = Url::parse(&format!("{endpoint}{API_PATH}")).map_err(|e| {
            ClientBuildError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: e.to_string(),
            }
        })?;
        if api_url.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidEndpoint {
                endpoint: config.endpoint,
                reason: "not a hierarchical URL".to_string(),
            });
        }
        if api_url.query().is_some() || api_url.fragment().is_some() {
            return Err(ClientBuildError::InvalidEndpoint {
                endpoint: config.endpoint,
                reason: "query strings and fragments are not allowed".to_string(),
            });
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| ClientBuildError::InvalidApiKey)?;
        auth.set_sensitive(true);

        Ok(Self {
            transport,
            endpoint,
            api_url,
            auth,
        })
    }

    /// The base URL of the Grist instance, without trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The base URL of the API (endpoint followed by `/api`).
    pub fn api_endpoint(&self) -> String {
        format!("{}{}", self.endpoint, API_PATH)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds an API URL from raw path segments. Segments are percent-encoded.
    pub(crate) fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        // `api_url` was checked to be a base URL in `with_transport`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a bodiless request and decodes the JSON response.
    pub(crate) async fn fetch<R>(&self, method: Method, url: Url) -> Result<R, RequestError>
    where
        R: DeserializeOwned,
    {
        let request = self.request(method, url);
        let url = request.url.to_string();
        let response = self.execute(request).await?;
        decode_json(&url, &response)
    }

    /// Sends `body` as JSON and decodes the JSON response.
    pub(crate) async fn exchange<B, R>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<R, RequestError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = with_json_body(self.request(method, url), body)?;
        let url = request.url.to_string();
        let response = self.execute(request).await?;
        decode_json(&url, &response)
    }

    /// Sends an optional JSON body and only checks the response status.
    pub(crate) async fn send<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<HttpResponse, RequestError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.request(method, url);
        if let Some(body) = body {
            request = with_json_body(request, body)?;
        }
        self.execute(request).await
    }

    fn request(&self, method: Method, url: Url) -> HttpRequest {
        let mut request = HttpRequest::new(method, url);
        request.headers.insert(AUTHORIZATION, self.auth.clone());
        request
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let method = request.method.clone();
        let url = request.url.clone();

        tracing::debug!(%method, %url, "sending request");
        let response = self.transport.send(request).await?;
        tracing::debug!(%method, %url, status = %response.status, "received response");

        if response.status != StatusCode::OK {
            return Err(RequestError::Api(ApiError {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).trim().to_string(),
            }));
        }
        Ok(response)
    }
}

fn with_json_body<B>(mut request: HttpRequest, body: &B) -> Result<HttpRequest, RequestError>
where
    B: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(body).map_err(RequestError::Encode)?;
    request
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    request.body = Some(bytes.into());
    Ok(request)
}

fn decode_json<R>(url: &str, response: &HttpResponse) -> Result<R, RequestError>
where
    R: DeserializeOwned,
{
    serde_json::from_slice(&response.body).map_err(|source| RequestError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Reads an identifier that the server returns as a bare (possibly quoted) string.
pub(crate) fn raw_id(response: &HttpResponse) -> String {
    let text = String::from_utf8_lossy(&response.body);
    let text = text.trim();
    let text = text.strip_prefix('"').unwrap_or(text);
    let text = text.strip_suffix('"').unwrap_or(text);
    text.to_string()
}

pub(crate) fn require_non_empty(what: &str, value: &str) -> Result<(), RequestError> {
    if value.trim().is_empty() {
        return Err(RequestError::InvalidArgument(format!(
            "{what} cannot be empty"
        )));
    }
    Ok(())
}

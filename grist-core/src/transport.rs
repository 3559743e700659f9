//! # HTTP Transport
//!
//! This module contains the seam between the typed client and the network.
//!
//! The [`GristClient`](crate::client::GristClient) builds an [`HttpRequest`] per operation and
//! hands it to a [`Transport`]. The transport only moves bytes: it does not look at status codes
//! and does not decode bodies, both are done by the client.
//!
//! [`ReqwestTransport`] is the implementation used by default.
mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::future::Future;

/// Failures that happen before a response status could be read, or while reading the body.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to build the HTTP client: '{0}'")]
    Build(#[source] reqwest::Error),
    #[error("Request to '{url}' failed: '{source}'")]
    Send {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read the response body from '{url}': '{source}'")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Transport failure: '{0}'")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps a failure raised by a [`Transport`] that is not backed by `reqwest`.
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(err.into())
    }
}

/// A fully built request, ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: reqwest::Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// The status and raw body of a response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl HttpRequest {
    pub fn new(method: Method, url: reqwest::Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Returns the body as UTF-8 text, if any.
    pub fn body_str(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| std::str::from_utf8(b).ok())
    }
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a single request and returns the raw response.
///
/// Implementations must not retry and must not interpret the status code.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

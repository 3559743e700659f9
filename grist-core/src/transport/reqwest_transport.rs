use super::{HttpRequest, HttpResponse, Transport, TransportError};
use std::{future::Future, time::Duration};

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with a per-request `timeout` and at most `max_idle_connections`
    /// idle connections kept per host.
    pub fn new(timeout: Duration, max_idle_connections: usize) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(max_idle_connections)
            .build()
            .map_err(TransportError::Build)?;
        Ok(Self { http })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        async move {
            let url = request.url.to_string();

            let mut builder = self
                .http
                .request(request.method, request.url)
                .headers(request.headers);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let resp = builder
                .send()
                .await
                .map_err(|source| TransportError::Send {
                    url: url.clone(),
                    source,
                })?;

            let status = resp.status();
            let body = resp
                .bytes()
                .await
                .map_err(|source| TransportError::Body { url, source })?;

            Ok(HttpResponse { status, body })
        }
    }
}

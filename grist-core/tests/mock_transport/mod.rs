#![allow(dead_code)]

use grist_core::client::{ClientConfig, GristClient};
use grist_core::http::StatusCode;
use grist_core::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

pub const ENDPOINT: &str = "https://grist.example.com";
pub const API_KEY: &str = "secret-key";

// An in-memory transport that records every request and answers with canned responses,
// in the order they were queued.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: StatusCode, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body.to_string())));
        self
    }

    pub fn fail(self, err: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn respond_json(self, body: serde_json::Value) -> Self {
        self.respond(StatusCode::OK, &body.to_string())
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn last_body(&self) -> serde_json::Value {
        let request = self.last_request();
        serde_json::from_str(request.body_str().expect("request has no body"))
            .expect("request body is not JSON")
    }
}

impl Transport for MockTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        async move {
            self.requests.lock().unwrap().push(request);
            self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
                Ok(HttpResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "no response queued",
                ))
            })
        }
    }
}

pub fn client(transport: MockTransport) -> GristClient<MockTransport> {
    GristClient::with_transport(ClientConfig::new(ENDPOINT, API_KEY), transport).unwrap()
}

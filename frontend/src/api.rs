//! Outbound calls to the agency backend.
//!
//! `BackendClient` builds requests and interprets responses as plain data; a
//! `Transport` does the actual round-trip. In the browser that is `fetch`
//! through gloo-net. One attempt per call: no retry, no timeout, no cache.

use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::models::{LeadSubmission, Service};

pub const LEAD_SOURCE: &str = "website";
pub const LEAD_REJECTED_MESSAGE: &str = "Failed to submit. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response. Carries the transport's message.
    #[error("{0}")]
    Network(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    /// The lead endpoint answered outside 2xx.
    #[error("{}", LEAD_REJECTED_MESSAGE)]
    Rejected { status: u16 },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        // An unreadable body is treated as empty; callers that need it fail on decode.
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}

#[derive(Serialize)]
struct LeadPayload<'a> {
    #[serde(flatten)]
    lead: &'a LeadSubmission,
    source: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendClient<T = FetchTransport> {
    base_url: String,
    transport: T,
}

impl BackendClient<FetchTransport> {
    pub fn from_config() -> Self {
        Self::new(config::get_backend_url(), FetchTransport)
    }
}

impl<T: Transport> BackendClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub fn services_request(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/api/services", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn lead_request(&self, lead: &LeadSubmission) -> Result<HttpRequest, ApiError> {
        let payload = LeadPayload { lead, source: LEAD_SOURCE };
        let body = serde_json::to_string(&payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/api/leads", self.base_url),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        let request = self.services_request();
        debug!("GET {}", request.url);
        let response = self.transport.send(request).await?;
        parse_services(response)
    }

    pub async fn submit_lead(&self, lead: &LeadSubmission) -> Result<(), ApiError> {
        let request = self.lead_request(lead)?;
        debug!("POST {}", request.url);
        let response = self.transport.send(request).await?;
        check_lead_response(&response)
    }
}

pub fn parse_services(response: HttpResponse) -> Result<Vec<Service>, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Any 2xx is acceptance; the body is never read.
pub fn check_lead_response(response: &HttpResponse) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Rejected { status: response.status })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned results in order and records every request it receives.
    #[derive(Default)]
    pub struct FakeTransport {
        replies: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        pub sent: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        pub fn replying(reply: Result<HttpResponse, ApiError>) -> Self {
            let fake = Self::default();
            fake.replies.borrow_mut().push_back(reply);
            fake
        }

        pub fn status(status: u16, body: &str) -> Self {
            Self::replying(Ok(HttpResponse { status, body: body.to_string() }))
        }

        pub fn requests(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no reply queued".to_string())))
        }
    }
}

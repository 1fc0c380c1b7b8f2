//! HTTP transport seam
//!
//! The client speaks to the store through [`Transport`] so tests can swap the
//! network for canned replies. [`ReqwestTransport`] is the real thing.

use crate::error::{Result, StoreError};
use std::future::Future;
use std::time::Duration;

/// HTTP verbs used by the store
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Method {
    Get,
    Put,
    Post,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// Outgoing request
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token for the Authorization header
    pub bearer: Option<String>,
    /// JSON body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    pub fn json_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Response status and raw body
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever the server answered.
///
/// Only failures to obtain a response are errors; non-2xx statuses are
/// returned as normal responses.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StoreError::Setup(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send {
        let client = self.client.clone();
        async move {
            let mut builder = client
                .request(request.method.into(), &request.url)
                .header("accept", "application/json");
            if let Some(token) = &request.bearer {
                builder = builder.bearer_auth(token);
            }
            if let Some(body) = request.body {
                builder = builder.header("content-type", "application/json").body(body);
            }

            let resp = builder
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            let status = resp.status().as_u16();
            // `reqwest` is built without the `json` feature, so decode in the client.
            let body = resp
                .bytes()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;

            Ok(HttpResponse {
                status,
                body: body.to_vec(),
            })
        }
    }
}

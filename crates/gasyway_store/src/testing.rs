//! In-memory transport for tests
//!
//! Routes are matched on method and URL path suffix. Each route answers the
//! same reply every time; unrouted requests fail as unreachable.

use crate::error::{Result, StoreError};
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use std::future::{ready, Future};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Canned answer for a route
#[derive(Clone, Debug)]
pub enum MockReply {
    Response(HttpResponse),
    Unreachable(String),
}

impl MockReply {
    /// Reply with `status` and a JSON body
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        MockReply::Response(HttpResponse {
            status,
            body: body.to_string().into_bytes(),
        })
    }

    /// Reply with `status` and a raw body
    pub fn raw(status: u16, body: impl Into<Vec<u8>>) -> Self {
        MockReply::Response(HttpResponse {
            status,
            body: body.into(),
        })
    }
}

/// [`Transport`] answering from a route table and recording every request
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<Vec<(Method, String, MockReply)>>,
    requests: Mutex<Vec<HttpRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MockTransport::set`]
    pub fn on(self, method: Method, path: &str, reply: MockReply) -> Self {
        self.set(method, path, reply);
        self
    }

    /// Install or replace the reply for `method` + `path`
    pub fn set(&self, method: Method, path: &str, reply: MockReply) {
        let mut routes = lock(&self.routes);
        routes.retain(|(m, p, _)| !(*m == method && p == path));
        routes.push((method, path.to_string(), reply));
    }

    /// Every request sent so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Requests whose URL ends with `path`
    pub fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        lock(&self.requests)
            .iter()
            .filter(|request| request.url.ends_with(path))
            .cloned()
            .collect()
    }

    fn reply_for(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let routes = lock(&self.routes);
        let reply = routes
            .iter()
            .find(|(method, path, _)| *method == request.method && request.url.ends_with(path))
            .map(|(_, _, reply)| reply.clone());

        match reply {
            Some(MockReply::Response(resp)) => Ok(resp),
            Some(MockReply::Unreachable(reason)) => Err(StoreError::Transport(reason)),
            None => Err(StoreError::Transport(format!(
                "no route for {:?} {}",
                request.method, request.url
            ))),
        }
    }
}

impl Transport for MockTransport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send {
        let result = self.reply_for(&request);
        lock(&self.requests).push(request);
        ready(result)
    }
}

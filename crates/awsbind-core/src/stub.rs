//! In-memory transport for tests and offline use.
//!
//! Replies are served in FIFO order; every request is recorded so tests can
//! assert on exactly what went over the "wire".

use crate::http::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
enum StubReply {
    Response(HttpResponse),
    Failure(TransportError),
}

/// A fully in-memory transport.
#[derive(Debug, Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<StubReply>>,
    requests: Mutex<Vec<HttpRequest>>,
    echo: AtomicBool,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// When the queue is empty, answer 200 with the request body.
    pub fn set_echo(&self, enabled: bool) {
        self.echo.store(enabled, Ordering::SeqCst);
    }

    pub fn push_response(&self, response: HttpResponse) {
        self.lock_replies().push_back(StubReply::Response(response));
    }

    /// Queue a JSON response with a generated request id.
    pub fn push_json(&self, status: u16, body: &str) {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert(
            "x-amzn-requestid".to_string(),
            format!("stub-{}", self.lock_replies().len() + self.lock_requests().len()),
        );
        self.push_response(HttpResponse::new(status, headers, body.as_bytes().to_vec()));
    }

    /// Queue an AWS JSON error body (`__type` + `message`).
    pub fn push_service_error(&self, status: u16, code: &str, message: &str) {
        let body = serde_json::json!({ "__type": code, "message": message });
        self.push_json(status, &body.to_string());
    }

    /// Queue a transport failure.
    pub fn push_failure(&self, error: TransportError) {
        self.lock_replies().push_back(StubReply::Failure(error));
    }

    /// All requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock_requests().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.lock_requests().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.lock_requests().len()
    }

    /// Replies still queued.
    pub fn pending(&self) -> usize {
        self.lock_replies().len()
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, VecDeque<StubReply>> {
        self.replies.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_requests(&self) -> std::sync::MutexGuard<'_, Vec<HttpRequest>> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl HttpTransport for StubTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let echo_body = request.body.clone();
        self.lock_requests().push(request);

        match self.lock_replies().pop_front() {
            Some(StubReply::Response(resp)) => Ok(resp),
            Some(StubReply::Failure(err)) => Err(err),
            None if self.echo.load(Ordering::SeqCst) => {
                let mut headers = BTreeMap::new();
                headers.insert("content-type".to_string(), "application/json".to_string());
                Ok(HttpResponse::new(200, headers, echo_body))
            }
            None => Err(TransportError::Io("stub transport has no queued reply".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn request(body: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: "https://example.com/".to_string(),
            headers: BTreeMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn replies_in_fifo_order() {
        let stub = StubTransport::new();
        stub.push_json(200, "{\"a\":1}");
        stub.push_failure(TransportError::Timeout("slow".into()));

        let first = stub.send(request("")).unwrap();
        assert_eq!(first.body, b"{\"a\":1}");
        assert!(first.request_id().is_some());
        assert!(matches!(stub.send(request("")), Err(TransportError::Timeout(_))));
        assert_eq!(stub.request_count(), 2);
        assert_eq!(stub.pending(), 0);
    }

    #[test]
    fn echo_mode_returns_body() {
        let stub = StubTransport::new();
        stub.set_echo(true);
        let resp = stub.send(request("{\"x\":true}")).unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, b"{\"x\":true}");
    }

    #[test]
    fn empty_queue_is_an_error() {
        let stub = StubTransport::new();
        assert!(matches!(stub.send(request("")), Err(TransportError::Io(_))));
        assert_eq!(stub.last_request().map(|r| r.url), Some("https://example.com/".to_string()));
    }

    #[test]
    fn service_error_body() {
        let stub = StubTransport::new();
        stub.push_service_error(400, "BadRequestException", "nope");
        let resp = stub.send(request("")).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(v["__type"], "BadRequestException");
        assert_eq!(v["message"], "nope");
    }
}

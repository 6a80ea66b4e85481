//! Retry wrapper around any [`HttpTransport`].
//!
//! Retries transport failures that are transient and responses whose
//! status/code is throttling or a server fault, with capped exponential
//! backoff. The final attempt's outcome is returned unchanged.

use crate::config::{RetryConfig, RetryMode};
use crate::error::ServiceError;
use crate::http::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use rand::Rng;
use std::time::Duration;

pub struct RetryingTransport<T> {
    inner: T,
    config: RetryConfig,
}

impl<T: HttpTransport> RetryingTransport<T> {
    pub fn new(inner: T, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Calculate exponential backoff with jitter.
    fn calculate_backoff(&self, attempt: u32) -> u64 {
        let base = self.config.initial_backoff_ms;
        let max = self.config.max_backoff_ms;
        let exponential = base.saturating_mul(2u64.saturating_pow(attempt));
        let capped = exponential.min(max);

        match self.config.mode {
            RetryMode::Adaptive | RetryMode::Standard => {
                // Full jitter: random between 0 and capped
                rand::thread_rng().gen_range(0..=capped)
            }
            RetryMode::Legacy => capped,
        }
    }

    fn response_is_retryable(response: &HttpResponse) -> bool {
        if response.is_success() {
            return false;
        }
        ServiceError::from_response("", response).retryable
    }
}

impl<T: HttpTransport> HttpTransport for RetryingTransport<T> {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            let outcome = self.inner.send(request.clone());
            attempt += 1;
            if attempt >= max_attempts {
                return outcome;
            }

            let reason = match outcome {
                Ok(ref response) if Self::response_is_retryable(response) => {
                    format!("HTTP {}", response.status)
                }
                Err(ref e) if e.is_retryable() => e.to_string(),
                _ => return outcome,
            };

            let delay = self.calculate_backoff(attempt - 1);
            log::warn!(
                "{} {} failed (attempt {}/{}): {} - retrying in {}ms",
                request.method,
                request.url,
                attempt,
                max_attempts,
                reason,
                delay
            );
            std::thread::sleep(Duration::from_millis(delay));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::stub::StubTransport;
    use std::collections::BTreeMap;

    fn fast(max_attempts: u32) -> RetryConfig {
        RetryConfig {
            max_attempts,
            mode: RetryMode::Standard,
            initial_backoff_ms: 0,
            max_backoff_ms: 0,
        }
    }

    fn request() -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: "https://guardduty.us-east-1.amazonaws.com/detector".to_string(),
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    #[test]
    fn retries_throttling_then_succeeds() {
        let stub = StubTransport::new();
        stub.push_service_error(400, "ThrottlingException", "slow down");
        stub.push_service_error(503, "ServiceUnavailable", "busy");
        stub.push_json(200, "{}");

        let transport = RetryingTransport::new(stub.clone(), fast(3));
        let resp = transport.send(request()).unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(stub.request_count(), 3);
    }

    #[test]
    fn does_not_retry_client_errors() {
        let stub = StubTransport::new();
        stub.push_service_error(400, "BadRequestException", "bad");
        stub.push_json(200, "{}");

        let transport = RetryingTransport::new(stub.clone(), fast(3));
        let resp = transport.send(request()).unwrap();
        assert_eq!(resp.status, 400);
        assert_eq!(stub.request_count(), 1);
    }

    #[test]
    fn returns_last_failure_when_exhausted() {
        let stub = StubTransport::new();
        stub.push_failure(TransportError::Connect("refused".into()));
        stub.push_failure(TransportError::Timeout("slow".into()));

        let transport = RetryingTransport::new(stub.clone(), fast(2));
        let err = transport.send(request()).unwrap_err();
        assert!(matches!(err, TransportError::Timeout(_)));
        assert_eq!(stub.request_count(), 2);
    }

    #[test]
    fn single_attempt_when_disabled() {
        let stub = StubTransport::new();
        stub.push_service_error(500, "InternalServerErrorException", "boom");

        let transport = RetryingTransport::new(stub.clone(), RetryConfig::disabled());
        let resp = transport.send(request()).unwrap();
        assert_eq!(resp.status, 500);
        assert_eq!(stub.request_count(), 1);
    }

    #[test]
    fn legacy_backoff_is_capped_without_jitter() {
        let transport = RetryingTransport::new(
            StubTransport::new(),
            RetryConfig {
                max_attempts: 5,
                mode: RetryMode::Legacy,
                initial_backoff_ms: 100,
                max_backoff_ms: 300,
            },
        );
        assert_eq!(transport.calculate_backoff(0), 100);
        assert_eq!(transport.calculate_backoff(1), 200);
        assert_eq!(transport.calculate_backoff(4), 300);
    }
}

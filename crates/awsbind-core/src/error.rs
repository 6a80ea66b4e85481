//! Error model shared by every service client.
//!
//! A failed call surfaces as [`SdkError`]: either a client-side
//! [`ClientError`] (the request never produced a usable response) or the
//! service's own typed error enum, built from a [`ServiceError`] payload by
//! the per-service error table (see [`crate::unmarshal::ErrorTable`]).

use crate::credentials::CredentialsError;
use crate::http::{HttpResponse, TransportError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw error payload returned by an AWS JSON endpoint on a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    /// The AWS error code (e.g. "BadRequestException").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// The HTTP status code returned by the endpoint.
    pub status_code: u16,
    /// Request ID echoed in the response headers.
    pub request_id: Option<String>,
    /// Signing name of the service that returned the error.
    pub service: String,
    /// The operation that failed.
    pub operation: Option<String>,
    /// Whether the status/code pair is considered transient.
    pub retryable: bool,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error [{}]: {} (HTTP {})",
            self.service, self.code, self.message, self.status_code
        )?;
        if let Some(ref req_id) = self.request_id {
            write!(f, " [RequestId: {}]", req_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Create a new service error.
    pub fn new(service: &str, code: &str, message: &str, status_code: u16) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            status_code,
            request_id: None,
            service: service.to_string(),
            operation: None,
            retryable: Self::is_retryable_code(code, status_code),
        }
    }

    /// With request ID.
    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// With operation name.
    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    /// Determine if an error code/status is retryable per the AWS SDK retry policy.
    pub fn is_retryable_code(code: &str, status_code: u16) -> bool {
        if matches!(status_code, 429 | 500 | 502 | 503 | 504) {
            return true;
        }
        matches!(
            code,
            "Throttling"
                | "ThrottlingException"
                | "ThrottledException"
                | "RequestThrottledException"
                | "TooManyRequestsException"
                | "ProvisionedThroughputExceededException"
                | "TransactionInProgressException"
                | "RequestLimitExceeded"
                | "BandwidthLimitExceeded"
                | "RequestThrottled"
                | "SlowDown"
                | "InternalError"
                | "InternalFailure"
                | "ServiceUnavailable"
                | "RequestTimeout"
                | "RequestTimeoutException"
        )
    }

    /// Build the error payload for a non-2xx response.
    ///
    /// The code comes from the `x-amzn-ErrorType` header when present,
    /// otherwise from the body's `__type` / `code` member.
    pub fn from_response(service: &str, response: &HttpResponse) -> Self {
        let body = String::from_utf8_lossy(&response.body);
        let mut err = Self::parse_json_error(service, response.status, &body);
        if let Some(header) = response.header("x-amzn-errortype") {
            let code = sanitize_error_code(header);
            if !code.is_empty() {
                err.retryable = Self::is_retryable_code(&code, response.status);
                err.code = code;
            }
        }
        if let Some(id) = response.request_id() {
            err.request_id = Some(id.to_string());
        }
        err
    }

    /// Parse an AWS JSON error body.
    ///
    /// ```json
    /// {
    ///   "__type": "com.amazon.coral.service#ResourceNotFoundException",
    ///   "Message": "Cost category not found"
    /// }
    /// ```
    pub fn parse_json_error(service: &str, status_code: u16, body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::new(
                service,
                "UnknownError",
                &format!("HTTP {} with an empty body", status_code),
                status_code,
            );
        }
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(val) => {
                let code = val
                    .get("__type")
                    .or_else(|| val.get("code"))
                    .or_else(|| val.get("Code"))
                    .and_then(|v| v.as_str())
                    .map(sanitize_error_code)
                    .unwrap_or_else(|| "UnknownError".to_string());
                let message = val
                    .get("message")
                    .or_else(|| val.get("Message"))
                    .or_else(|| val.get("errorMessage"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string();
                Self::new(service, &code, &message, status_code)
            }
            Err(_) => {
                let preview: String = body.chars().take(200).collect();
                Self::new(
                    service,
                    "ParseError",
                    &format!("Failed to parse error response: {}", preview),
                    status_code,
                )
            }
        }
    }
}

/// Strip the namespace prefix (`aws.protocols#`) and the documentation
/// suffix (`:http://internal.amazon.com/...`) from a raw error type.
fn sanitize_error_code(raw: &str) -> String {
    let without_suffix = raw.split(':').next().unwrap_or(raw);
    without_suffix
        .rsplit('#')
        .next()
        .unwrap_or(without_suffix)
        .trim()
        .to_string()
}

/// Access to the [`ServiceError`] payload carried by every typed service error.
pub trait ProvideErrorMetadata {
    /// The raw payload.
    fn meta(&self) -> &ServiceError;

    /// The AWS error code.
    fn code(&self) -> &str {
        &self.meta().code
    }

    /// The service-provided message.
    fn message(&self) -> &str {
        &self.meta().message
    }

    /// The request ID, when the service returned one.
    fn request_id(&self) -> Option<&str> {
        self.meta().request_id.as_deref()
    }
}

impl ProvideErrorMetadata for ServiceError {
    fn meta(&self) -> &ServiceError {
        self
    }
}

/// Failures that happen on the client side of the wire.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{operation}: required member `{member}` is not set")]
    MissingMember {
        operation: &'static str,
        member: &'static str,
    },
    #[error("{operation}: failed to serialize request: {source}")]
    Serialize {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{operation}: failed to parse response body: {source}")]
    Unmarshall {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("credentials: {0}")]
    Credentials(#[from] CredentialsError),
    #[error("transport: {0}")]
    Transport(#[from] TransportError),
    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl ClientError {
    pub fn missing(operation: &'static str, member: &'static str) -> Self {
        Self::MissingMember { operation, member }
    }
}

/// Error returned by every operation method.
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request could not be built, sent, or its response read.
    Client(ClientError),
    /// The service answered with an error status.
    Service(E),
}

impl<E> SdkError<E> {
    /// The typed service error, if this is one.
    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            Self::Service(e) => Some(e),
            Self::Client(_) => None,
        }
    }

    /// Consume into the typed service error, if this is one.
    pub fn into_service_error(self) -> Option<E> {
        match self {
            Self::Service(e) => Some(e),
            Self::Client(_) => None,
        }
    }

    /// The client-side error, if this is one.
    pub fn as_client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(e) => Some(e),
            Self::Service(_) => None,
        }
    }
}

impl<E: ProvideErrorMetadata> SdkError<E> {
    /// Whether a retry has a reasonable chance of succeeding.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Service(e) => e.meta().retryable,
            Self::Client(ClientError::Transport(t)) => t.is_retryable(),
            Self::Client(_) => false,
        }
    }
}

impl<E> From<ClientError> for SdkError<E> {
    fn from(err: ClientError) -> Self {
        Self::Client(err)
    }
}

impl<E: fmt::Display> fmt::Display for SdkError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(e) => write!(f, "client error: {}", e),
            Self::Service(e) => write!(f, "service error: {}", e),
        }
    }
}

impl<E> std::error::Error for SdkError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(e) => Some(e),
            Self::Service(e) => Some(e),
        }
    }
}

//! Response unmarshalling.
//!
//! Successful bodies are decoded straight into the operation's result type.
//! Error bodies are matched against a static per-service [`ErrorTable`]:
//! the first entry whose code equals the response's error code builds the
//! typed variant, otherwise the table's fallback wraps the raw payload.

use crate::error::{ClientError, ServiceError};
use serde::de::DeserializeOwned;

/// One named exception of a service.
pub struct ErrorEntry<E> {
    pub code: &'static str,
    pub build: fn(ServiceError) -> E,
}

/// The fixed exception table of a service.
pub struct ErrorTable<E: 'static> {
    pub entries: &'static [ErrorEntry<E>],
    pub fallback: fn(ServiceError) -> E,
}

impl<E> ErrorTable<E> {
    /// Map a raw error payload to the service's typed error.
    pub fn unmarshall(&self, error: ServiceError) -> E {
        match self.entries.iter().find(|entry| entry.code == error.code) {
            Some(entry) => (entry.build)(error),
            None => (self.fallback)(error),
        }
    }

    /// Codes with a dedicated variant, in table order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.code)
    }
}

/// Decode a 2xx JSON body. An empty body decodes as `{}`.
pub fn unmarshall_json<T: DeserializeOwned>(
    operation: &'static str,
    body: &[u8],
) -> Result<T, ClientError> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|source| ClientError::Unmarshall { operation, source })
}

//! GuardDuty error table.
//!
//! GuardDuty declares two exceptions for every operation. Anything else the
//! service returns (access denied, throttling, unknown future codes) lands in
//! [`GuardDutyError::Unhandled`] with the raw payload intact.

use awsbind_core::error::{ProvideErrorMetadata, ServiceError};
use awsbind_core::unmarshal::{ErrorEntry, ErrorTable};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardDutyError {
    /// The request was rejected as malformed (HTTP 400).
    #[error(transparent)]
    BadRequest(ServiceError),
    /// The service failed internally (HTTP 500).
    #[error(transparent)]
    InternalServerError(ServiceError),
    /// An error code with no dedicated variant.
    #[error(transparent)]
    Unhandled(ServiceError),
}

impl GuardDutyError {
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::BadRequest(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(self, Self::InternalServerError(_))
    }

    pub fn into_meta(self) -> ServiceError {
        match self {
            Self::BadRequest(e) | Self::InternalServerError(e) | Self::Unhandled(e) => e,
        }
    }
}

impl ProvideErrorMetadata for GuardDutyError {
    fn meta(&self) -> &ServiceError {
        match self {
            Self::BadRequest(e) | Self::InternalServerError(e) | Self::Unhandled(e) => e,
        }
    }
}

pub(crate) static ERRORS: ErrorTable<GuardDutyError> = ErrorTable {
    entries: &[
        ErrorEntry {
            code: "BadRequestException",
            build: GuardDutyError::BadRequest,
        },
        ErrorEntry {
            code: "InternalServerErrorException",
            build: GuardDutyError::InternalServerError,
        },
    ],
    fallback: GuardDutyError::Unhandled,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_declared_exceptions() {
        assert_eq!(
            ERRORS.codes().collect::<Vec<_>>(),
            vec!["BadRequestException", "InternalServerErrorException"]
        );
    }

    #[test]
    fn unknown_code_is_unhandled() {
        let err = ERRORS.unmarshall(ServiceError::new(
            "guardduty",
            "AccessDeniedException",
            "not allowed",
            403,
        ));
        assert!(matches!(err, GuardDutyError::Unhandled(_)));
        assert_eq!(err.code(), "AccessDeniedException");
        assert_eq!(err.into_meta().status_code, 403);
    }

    #[test]
    fn display_is_transparent() {
        let err = ERRORS.unmarshall(
            ServiceError::new("guardduty", "BadRequestException", "The request is rejected", 400)
                .with_request_id("req-1"),
        );
        assert!(err.is_bad_request());
        assert_eq!(
            err.to_string(),
            "guardduty error [BadRequestException]: The request is rejected (HTTP 400) [RequestId: req-1]"
        );
    }
}

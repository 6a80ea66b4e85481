//! Cost Explorer error table.

use awsbind_core::error::{ProvideErrorMetadata, ServiceError};
use awsbind_core::unmarshal::{ErrorEntry, ErrorTable};

/// Every exception Cost Explorer declares, plus a catch-all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CostExplorerError {
    /// The requested report expired; update the request.
    #[error(transparent)]
    BillExpiration(ServiceError),
    /// The requested data is not available yet.
    #[error(transparent)]
    DataUnavailable(ServiceError),
    /// The pagination token is invalid; restart without it.
    #[error(transparent)]
    InvalidNextToken(ServiceError),
    /// Too many requests; back off.
    #[error(transparent)]
    LimitExceeded(ServiceError),
    /// Paging parameters changed between calls.
    #[error(transparent)]
    RequestChanged(ServiceError),
    /// The cost category does not exist.
    #[error(transparent)]
    ResourceNotFound(ServiceError),
    /// The account reached its cost category quota.
    #[error(transparent)]
    ServiceQuotaExceeded(ServiceError),
    /// `GetUsageForecast` could not resolve the usage unit of the filter.
    #[error(transparent)]
    UnresolvableUsageUnit(ServiceError),
    #[error(transparent)]
    Unhandled(ServiceError),
}

impl CostExplorerError {
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable(_))
    }

    pub fn is_invalid_next_token(&self) -> bool {
        matches!(self, Self::InvalidNextToken(_))
    }

    pub fn is_limit_exceeded(&self) -> bool {
        matches!(self, Self::LimitExceeded(_))
    }

    pub fn is_resource_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound(_))
    }

    pub fn into_meta(self) -> ServiceError {
        match self {
            Self::BillExpiration(e)
            | Self::DataUnavailable(e)
            | Self::InvalidNextToken(e)
            | Self::LimitExceeded(e)
            | Self::RequestChanged(e)
            | Self::ResourceNotFound(e)
            | Self::ServiceQuotaExceeded(e)
            | Self::UnresolvableUsageUnit(e)
            | Self::Unhandled(e) => e,
        }
    }
}

impl ProvideErrorMetadata for CostExplorerError {
    fn meta(&self) -> &ServiceError {
        match self {
            Self::BillExpiration(e)
            | Self::DataUnavailable(e)
            | Self::InvalidNextToken(e)
            | Self::LimitExceeded(e)
            | Self::RequestChanged(e)
            | Self::ResourceNotFound(e)
            | Self::ServiceQuotaExceeded(e)
            | Self::UnresolvableUsageUnit(e)
            | Self::Unhandled(e) => e,
        }
    }
}

pub(crate) static ERRORS: ErrorTable<CostExplorerError> = ErrorTable {
    entries: &[
        ErrorEntry {
            code: "BillExpirationException",
            build: CostExplorerError::BillExpiration,
        },
        ErrorEntry {
            code: "DataUnavailableException",
            build: CostExplorerError::DataUnavailable,
        },
        ErrorEntry {
            code: "InvalidNextTokenException",
            build: CostExplorerError::InvalidNextToken,
        },
        ErrorEntry {
            code: "LimitExceededException",
            build: CostExplorerError::LimitExceeded,
        },
        ErrorEntry {
            code: "RequestChangedException",
            build: CostExplorerError::RequestChanged,
        },
        ErrorEntry {
            code: "ResourceNotFoundException",
            build: CostExplorerError::ResourceNotFound,
        },
        ErrorEntry {
            code: "ServiceQuotaExceededException",
            build: CostExplorerError::ServiceQuotaExceeded,
        },
        ErrorEntry {
            code: "UnresolvableUsageUnitException",
            build: CostExplorerError::UnresolvableUsageUnit,
        },
    ],
    fallback: CostExplorerError::Unhandled,
};

//! # awsbind-core – shared request pipeline for awsbind service clients
//!
//! Everything a generated service client needs to turn a typed request into
//! a typed result over a blocking HTTP call.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Service client  (awsbind-guardduty, …)          │
//! │  └── one method per operation                    │
//! ├──────────────────────────────────────────────────┤
//! │  OperationInvoker  (invoker.rs)                  │
//! │  ├── Operation::marshall   (protocol.rs)         │
//! │  ├── ProvideCredentials    (credentials.rs)      │
//! │  ├── RequestSigner         (signing.rs)          │
//! │  ├── HttpTransport         (http.rs, retry.rs)   │
//! │  ├── ErrorTable            (unmarshal.rs)        │
//! │  └── MetricsWindow         (metrics.rs)          │
//! ├──────────────────────────────────────────────────┤
//! │  ClientConfig · Region · ProfileSet              │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## API Protocols
//!
//! | Protocol    | Services       |
//! |-------------|----------------|
//! | REST + JSON | GuardDuty      |
//! | AWS JSON 1.1| Cost Explorer  |

// ── Sub-modules ─────────────────────────────────────────────────────────

pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod invoker;
pub mod metrics;
pub mod model;
pub mod profile;
pub mod protocol;
pub mod retry;
pub mod signing;
pub mod stub;
pub mod unmarshal;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use config::{ClientConfig, Region, RetryConfig, RetryMode};
pub use credentials::{
    Credentials, CredentialsError, DefaultCredentialsChain, EnvironmentCredentialsProvider,
    InstanceMetadataCredentialsProvider, ProfileCredentialsProvider, ProvideCredentials,
    StaticCredentialsProvider,
};
pub use error::{ClientError, ProvideErrorMetadata, SdkError, ServiceError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
pub use invoker::{CallOptions, InvokerBuilder, Operation, OperationInvoker, ServiceMetadata};
pub use metrics::{MetricField, MetricsWindow, Outcome, RequestMetrics};
pub use model::UnknownVariantError;
pub use retry::RetryingTransport;
pub use signing::{RequestSigner, SigV4Signer, SigningParams};
pub use stub::StubTransport;

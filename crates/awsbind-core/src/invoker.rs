//! The operation invoker.
//!
//! One call runs the same pipeline for every operation of every service:
//!
//! ```text
//! Operation::marshall ─► credentials ─► sign ─► transport ─► unmarshall
//!        │                   │                      │             │
//!   ClientError         ClientError            ClientError   Output | E
//! ```
//!
//! The invoker never retries; retry belongs to the transport
//! ([`crate::retry::RetryingTransport`]).

use crate::config::{ClientConfig, Region};
use crate::credentials::{
    Credentials, DefaultCredentialsChain, ProvideCredentials, StaticCredentialsProvider,
};
use crate::error::{ClientError, ProvideErrorMetadata, SdkError, ServiceError};
use crate::http::{HttpResponse, HttpTransport, ReqwestTransport};
use crate::metrics::{MetricField, MetricsWindow, Outcome, RequestMetrics};
use crate::protocol::ProtocolRequest;
use crate::retry::RetryingTransport;
use crate::signing::{RequestSigner, SigV4Signer, SigningParams};
use crate::unmarshal::{unmarshall_json, ErrorTable};
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// A request type that knows how to put itself on the wire.
pub trait Operation {
    /// Result type decoded from a 2xx response.
    type Output: DeserializeOwned;

    /// Wire name of the operation, e.g. `"CreateDetector"`.
    const NAME: &'static str;

    /// Build the protocol request. Fails on missing required members.
    fn marshall(&self) -> Result<ProtocolRequest, ClientError>;

    fn unmarshall(response: &HttpResponse) -> Result<Self::Output, ClientError> {
        unmarshall_json(Self::NAME, &response.body)
    }
}

/// Static identity of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// SigV4 signing name.
    pub signing_name: &'static str,
    /// First DNS label of the regional endpoint.
    pub endpoint_prefix: &'static str,
}

/// Per-call overrides.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Used instead of the client's credentials provider for this call only.
    pub credentials: Option<Credentials>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Runs operations of one service against one endpoint.
pub struct OperationInvoker<E: 'static> {
    metadata: ServiceMetadata,
    region: Region,
    endpoint: String,
    user_agent: String,
    credentials: Arc<dyn ProvideCredentials>,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<dyn RequestSigner>,
    errors: &'static ErrorTable<E>,
    metrics: Arc<MetricsWindow>,
}

impl<E> Clone for OperationInvoker<E> {
    fn clone(&self) -> Self {
        Self {
            metadata: self.metadata,
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
            user_agent: self.user_agent.clone(),
            credentials: Arc::clone(&self.credentials),
            transport: Arc::clone(&self.transport),
            signer: Arc::clone(&self.signer),
            errors: self.errors,
            metrics: Arc::clone(&self.metrics),
        }
    }
}

impl<E> fmt::Debug for OperationInvoker<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationInvoker")
            .field("service", &self.metadata.signing_name)
            .field("region", &self.region.name())
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl<E: ProvideErrorMetadata> OperationInvoker<E> {
    pub fn builder(metadata: ServiceMetadata, errors: &'static ErrorTable<E>) -> InvokerBuilder<E> {
        InvokerBuilder {
            metadata,
            errors,
            config: ClientConfig::default(),
            credentials: None,
            transport: None,
            signer: None,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn metadata(&self) -> ServiceMetadata {
        self.metadata
    }

    /// Metrics of recent calls, shared by every clone of this invoker.
    pub fn metrics(&self) -> &MetricsWindow {
        &self.metrics
    }

    /// Run `operation` with the client's credentials.
    pub fn invoke<O: Operation>(&self, operation: &O) -> Result<O::Output, SdkError<E>> {
        self.invoke_with(operation, &CallOptions::default())
    }

    /// Run `operation` with per-call overrides.
    pub fn invoke_with<O: Operation>(
        &self,
        operation: &O,
        options: &CallOptions,
    ) -> Result<O::Output, SdkError<E>> {
        let mut metrics = RequestMetrics::start(self.metadata.signing_name, O::NAME);
        let started = Instant::now();
        let result = self.execute(operation, options, &mut metrics);
        metrics.record(MetricField::ClientExecuteTime, started.elapsed());

        metrics.outcome = match &result {
            Ok(_) => Outcome::Success,
            Err(SdkError::Service(e)) => Outcome::ServiceError {
                code: e.code().to_string(),
            },
            Err(SdkError::Client(e)) => Outcome::ClientError {
                reason: e.to_string(),
            },
        };
        match &metrics.outcome {
            Outcome::ServiceError { code } => log::debug!(
                "{}.{} failed with {} (HTTP {:?}, request id {:?})",
                self.metadata.signing_name,
                O::NAME,
                code,
                metrics.status,
                metrics.request_id
            ),
            Outcome::ClientError { reason } => {
                log::debug!("{}.{} failed: {}", self.metadata.signing_name, O::NAME, reason)
            }
            _ => log::trace!(
                "{}.{} completed in {:?}",
                self.metadata.signing_name,
                O::NAME,
                started.elapsed()
            ),
        }

        self.metrics.record(metrics);
        result
    }

    fn execute<O: Operation>(
        &self,
        operation: &O,
        options: &CallOptions,
        metrics: &mut RequestMetrics,
    ) -> Result<O::Output, SdkError<E>> {
        let protocol = metrics.time(MetricField::RequestMarshallTime, || operation.marshall())?;

        let credentials = match &options.credentials {
            Some(creds) => creds.clone(),
            None => metrics
                .time(MetricField::CredentialsRequestTime, || {
                    self.credentials.provide_credentials()
                })
                .map_err(ClientError::from)?,
        };

        let mut request = protocol.into_http(&self.endpoint);
        request
            .headers
            .insert("user-agent".to_string(), self.user_agent.clone());
        metrics.request_bytes = request.body.len();

        let params = SigningParams {
            credentials: &credentials,
            region: self.region.name(),
            service: self.metadata.signing_name,
            time: Utc::now(),
        };
        metrics.time(MetricField::RequestSigningTime, || {
            self.signer.sign(&mut request, &params)
        });

        log::trace!("{} {} {}", O::NAME, request.method, request.url);
        let response = metrics
            .time(MetricField::HttpRequestTime, || self.transport.send(request))
            .map_err(ClientError::from)?;

        metrics.status = Some(response.status);
        metrics.response_bytes = response.body.len();
        metrics.request_id = response.request_id().map(str::to_string);

        metrics.time(MetricField::ResponseProcessingTime, || {
            if response.is_success() {
                O::unmarshall(&response).map_err(SdkError::Client)
            } else {
                let error = ServiceError::from_response(self.metadata.signing_name, &response)
                    .with_operation(O::NAME);
                Err(SdkError::Service(self.errors.unmarshall(error)))
            }
        })
    }
}

/// Assembles an [`OperationInvoker`]; unset parts fall back to the defaults.
pub struct InvokerBuilder<E: 'static> {
    metadata: ServiceMetadata,
    errors: &'static ErrorTable<E>,
    config: ClientConfig,
    credentials: Option<Arc<dyn ProvideCredentials>>,
    transport: Option<Arc<dyn HttpTransport>>,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl<E: ProvideErrorMetadata> InvokerBuilder<E> {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn credentials_provider(mut self, provider: Arc<dyn ProvideCredentials>) -> Self {
        self.credentials = Some(provider);
        self
    }

    /// Use fixed credentials for every call.
    pub fn credentials(self, credentials: Credentials) -> Self {
        self.credentials_provider(Arc::new(StaticCredentialsProvider::new(credentials)))
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Resolve the endpoint and build the invoker.
    ///
    /// Without an explicit transport this creates a reqwest client wrapped
    /// in the configured retry policy.
    pub fn build(self) -> Result<OperationInvoker<E>, ClientError> {
        let endpoint = self.config.endpoint_for(self.metadata.endpoint_prefix);
        validate_endpoint(&endpoint)?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(RetryingTransport::new(
                ReqwestTransport::new(&self.config)?,
                self.config.retry.clone(),
            )),
        };
        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(DefaultCredentialsChain::new()));
        let signer = self.signer.unwrap_or_else(|| Arc::new(SigV4Signer::new()));

        log::debug!(
            "{} client for {} at {}",
            self.metadata.signing_name,
            self.config.region,
            endpoint
        );

        Ok(OperationInvoker {
            metadata: self.metadata,
            region: self.config.region.clone(),
            endpoint,
            user_agent: self.config.user_agent(),
            credentials,
            transport,
            signer,
            errors: self.errors,
            metrics: Arc::new(MetricsWindow::new(self.config.metrics_window)),
        })
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), ClientError> {
    let invalid = |reason: String| ClientError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };
    let url = url::Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme `{}`", other))),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{CredentialsError, MockProvideCredentials};
    use crate::http::{HttpMethod, TransportError};
    use crate::protocol::{require, RestJsonRequest};
    use crate::stub::StubTransport;
    use crate::unmarshal::ErrorEntry;
    use serde::{Deserialize, Serialize};

    #[derive(Debug)]
    enum TestError {
        BadRequest(ServiceError),
        Unhandled(ServiceError),
    }

    impl ProvideErrorMetadata for TestError {
        fn meta(&self) -> &ServiceError {
            match self {
                Self::BadRequest(e) | Self::Unhandled(e) => e,
            }
        }
    }

    static ERRORS: ErrorTable<TestError> = ErrorTable {
        entries: &[ErrorEntry {
            code: "BadRequestException",
            build: TestError::BadRequest,
        }],
        fallback: TestError::Unhandled,
    };

    const METADATA: ServiceMetadata = ServiceMetadata {
        signing_name: "guardduty",
        endpoint_prefix: "guardduty",
    };

    #[derive(Debug, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct GetWidget {
        #[serde(skip)]
        widget_id: Option<String>,
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct GetWidgetResult {
        name: Option<String>,
    }

    impl Operation for GetWidget {
        type Output = GetWidgetResult;
        const NAME: &'static str = "GetWidget";

        fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
            require(Self::NAME, "widgetId", &self.widget_id)?;
            Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/widget/{widgetId}")
                .label("widgetId", self.widget_id.as_deref())?
                .build())
        }
    }

    fn widget(id: &str) -> GetWidget {
        GetWidget {
            widget_id: Some(id.to_string()),
        }
    }

    fn invoker(stub: &Arc<StubTransport>) -> OperationInvoker<TestError> {
        OperationInvoker::builder(METADATA, &ERRORS)
            .config(ClientConfig::new("eu-west-1"))
            .credentials(Credentials::new("AKIDEXAMPLE", "secret"))
            .transport(stub.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn success_is_signed_and_decoded() {
        let stub = StubTransport::new();
        stub.push_json(200, r#"{"name":"w1"}"#);
        let inv = invoker(&stub);

        let out = inv.invoke(&widget("w/1")).unwrap();
        assert_eq!(out.name.as_deref(), Some("w1"));

        let req = stub.last_request().unwrap();
        assert_eq!(req.url, "https://guardduty.eu-west-1.amazonaws.com/widget/w%2F1");
        assert!(req
            .header("authorization")
            .unwrap()
            .contains("Credential=AKIDEXAMPLE/"));
        assert!(req.header("authorization").unwrap().contains("/eu-west-1/guardduty/aws4_request"));
        assert!(req.header("user-agent").unwrap().starts_with("awsbind/"));

        let m = inv.metrics().latest().unwrap();
        assert_eq!(m.operation, "GetWidget");
        assert_eq!(m.outcome, Outcome::Success);
        assert_eq!(m.status, Some(200));
        assert!(m.request_id.is_some());
        assert!(m.timing(MetricField::HttpRequestTime).is_some());
        assert!(m.timing(MetricField::ClientExecuteTime).is_some());
    }

    #[test]
    fn missing_label_never_reaches_transport() {
        let stub = StubTransport::new();
        let inv = invoker(&stub);
        let err = inv.invoke(&GetWidget::default()).unwrap_err();
        assert!(matches!(
            err.as_client_error(),
            Some(ClientError::MissingMember { member: "widgetId", .. })
        ));
        assert_eq!(stub.request_count(), 0);
    }

    #[test]
    fn named_and_unknown_service_errors() {
        let stub = StubTransport::new();
        stub.push_service_error(400, "BadRequestException", "bad detector");
        stub.push_service_error(403, "AccessDeniedException", "denied");
        let inv = invoker(&stub);

        match inv.invoke(&widget("a")).unwrap_err() {
            SdkError::Service(TestError::BadRequest(meta)) => {
                assert_eq!(meta.message, "bad detector");
                assert_eq!(meta.operation.as_deref(), Some("GetWidget"));
            }
            other => panic!("unexpected {:?}", other),
        }
        match inv.invoke(&widget("a")).unwrap_err() {
            SdkError::Service(TestError::Unhandled(meta)) => {
                assert_eq!(meta.code, "AccessDeniedException");
                assert_eq!(meta.status_code, 403);
            }
            other => panic!("unexpected {:?}", other),
        }
        let codes: Vec<_> = inv
            .metrics()
            .recent()
            .into_iter()
            .map(|m| m.outcome)
            .collect();
        assert_eq!(
            codes,
            vec![
                Outcome::ServiceError {
                    code: "BadRequestException".into()
                },
                Outcome::ServiceError {
                    code: "AccessDeniedException".into()
                },
            ]
        );
    }

    #[test]
    fn transport_failure_is_client_error() {
        let stub = StubTransport::new();
        stub.push_failure(TransportError::Connect("refused".into()));
        let err = invoker(&stub).invoke(&widget("a")).unwrap_err();
        assert!(matches!(
            err.as_client_error(),
            Some(ClientError::Transport(TransportError::Connect(_)))
        ));
    }

    #[test]
    fn override_credentials_skip_provider() {
        let stub = StubTransport::new();
        stub.push_json(200, "{}");
        let mut provider = MockProvideCredentials::new();
        provider.expect_provide_credentials().times(0);

        let inv = OperationInvoker::builder(METADATA, &ERRORS)
            .credentials_provider(Arc::new(provider))
            .transport(stub.clone())
            .build()
            .unwrap();
        let options = CallOptions::new().with_credentials(Credentials::new("AKIDOVERRIDE", "s"));
        inv.invoke_with(&widget("a"), &options).unwrap();

        let auth = stub.last_request().unwrap().headers["authorization"].clone();
        assert!(auth.contains("Credential=AKIDOVERRIDE/"));
    }

    #[test]
    fn provider_failure_is_client_error() {
        let stub = StubTransport::new();
        let mut provider = MockProvideCredentials::new();
        provider
            .expect_provide_credentials()
            .times(1)
            .returning(|| Err(CredentialsError::ChainExhausted(vec!["env: not set".into()])));

        let inv = OperationInvoker::builder(METADATA, &ERRORS)
            .credentials_provider(Arc::new(provider))
            .transport(stub.clone())
            .build()
            .unwrap();
        let err = inv.invoke(&widget("a")).unwrap_err();
        assert!(matches!(err.as_client_error(), Some(ClientError::Credentials(_))));
        assert_eq!(stub.request_count(), 0);
    }

    #[test]
    fn endpoint_override_and_validation() {
        let stub = StubTransport::new();
        stub.push_json(200, "");
        let inv = OperationInvoker::builder(METADATA, &ERRORS)
            .config(ClientConfig::new("us-west-2").with_endpoint_url("http://localhost:4566/"))
            .credentials(Credentials::new("a", "b"))
            .transport(stub.clone())
            .build()
            .unwrap();
        assert_eq!(inv.endpoint(), "http://localhost:4566");
        assert_eq!(inv.invoke(&widget("x")).unwrap(), GetWidgetResult::default());
        assert_eq!(stub.last_request().unwrap().url, "http://localhost:4566/widget/x");

        let err = OperationInvoker::builder(METADATA, &ERRORS)
            .config(ClientConfig::new("us-west-2").with_endpoint_url("ftp://example.com"))
            .transport(stub.clone())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidEndpoint { .. }));
    }

    #[test]
    fn clones_share_metrics() {
        let stub = StubTransport::new();
        stub.push_json(200, "{}");
        let inv = invoker(&stub);
        let other = inv.clone();
        other.invoke(&widget("a")).unwrap();
        assert_eq!(inv.metrics().len(), 1);
    }

    #[test]
    fn invoker_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OperationInvoker<ServiceError>>();
    }
}

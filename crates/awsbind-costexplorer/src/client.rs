//! The Cost Explorer client.

use crate::cost_categories::*;
use crate::cost_usage::*;
use crate::error::{CostExplorerError, ERRORS};
use crate::reservations::*;
use crate::rightsizing::*;
use crate::savings_plans::*;
use awsbind_core::config::{ClientConfig, Region};
use awsbind_core::credentials::{Credentials, ProvideCredentials};
use awsbind_core::error::ClientError;
use awsbind_core::http::HttpTransport;
use awsbind_core::invoker::{InvokerBuilder, OperationInvoker, ServiceMetadata};
use awsbind_core::metrics::MetricsWindow;
use awsbind_core::operation_methods;
use awsbind_core::signing::RequestSigner;
use std::sync::Arc;

pub const SERVICE: ServiceMetadata = ServiceMetadata {
    signing_name: "ce",
    endpoint_prefix: "ce",
};

/// The only commercial region Cost Explorer is served from.
pub const HOME_REGION: &str = "us-east-1";

/// Blocking Cost Explorer client.
///
/// Cost Explorer is served from `us-east-1`; other regions need an explicit
/// endpoint in [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct CostExplorerClient {
    invoker: OperationInvoker<CostExplorerError>,
}

impl CostExplorerClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Self::builder().config(config).build()
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    pub fn builder() -> CostExplorerClientBuilder {
        CostExplorerClientBuilder {
            inner: OperationInvoker::builder(SERVICE, &ERRORS),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.invoker.endpoint()
    }

    pub fn region(&self) -> &Region {
        self.invoker.region()
    }

    pub fn metrics(&self) -> &MetricsWindow {
        self.invoker.metrics()
    }

    operation_methods! {
        CostExplorerError;
        /// Creates a cost category.
        create_cost_category_definition, create_cost_category_definition_with: CreateCostCategoryDefinitionRequest;
        /// Deletes a cost category.
        delete_cost_category_definition, delete_cost_category_definition_with: DeleteCostCategoryDefinitionRequest;
        /// Reads a cost category.
        describe_cost_category_definition, describe_cost_category_definition_with: DescribeCostCategoryDefinitionRequest;
        /// Retrieves cost and usage metrics.
        get_cost_and_usage, get_cost_and_usage_with: GetCostAndUsageRequest;
        /// Retrieves cost and usage metrics with resource IDs.
        get_cost_and_usage_with_resources, get_cost_and_usage_with_resources_with: GetCostAndUsageWithResourcesRequest;
        /// Forecasts spend.
        get_cost_forecast, get_cost_forecast_with: GetCostForecastRequest;
        /// Lists values of a dimension.
        get_dimension_values, get_dimension_values_with: GetDimensionValuesRequest;
        /// Retrieves reservation coverage.
        get_reservation_coverage, get_reservation_coverage_with: GetReservationCoverageRequest;
        /// Recommends reservation purchases.
        get_reservation_purchase_recommendation, get_reservation_purchase_recommendation_with: GetReservationPurchaseRecommendationRequest;
        /// Retrieves reservation utilization.
        get_reservation_utilization, get_reservation_utilization_with: GetReservationUtilizationRequest;
        /// Recommends EC2 rightsizing.
        get_rightsizing_recommendation, get_rightsizing_recommendation_with: GetRightsizingRecommendationRequest;
        /// Retrieves Savings Plans coverage.
        get_savings_plans_coverage, get_savings_plans_coverage_with: GetSavingsPlansCoverageRequest;
        /// Recommends Savings Plans purchases.
        get_savings_plans_purchase_recommendation, get_savings_plans_purchase_recommendation_with: GetSavingsPlansPurchaseRecommendationRequest;
        /// Retrieves Savings Plans utilization.
        get_savings_plans_utilization, get_savings_plans_utilization_with: GetSavingsPlansUtilizationRequest;
        /// Retrieves per-plan Savings Plans utilization.
        get_savings_plans_utilization_details, get_savings_plans_utilization_details_with: GetSavingsPlansUtilizationDetailsRequest;
        /// Lists cost allocation tag keys or values.
        get_tags, get_tags_with: GetTagsRequest;
        /// Forecasts usage.
        get_usage_forecast, get_usage_forecast_with: GetUsageForecastRequest;
        /// Lists cost categories.
        list_cost_category_definitions, list_cost_category_definitions_with: ListCostCategoryDefinitionsRequest;
        /// Replaces a cost category's rules.
        update_cost_category_definition, update_cost_category_definition_with: UpdateCostCategoryDefinitionRequest;
    }
}

/// Builder for [`CostExplorerClient`].
pub struct CostExplorerClientBuilder {
    inner: InvokerBuilder<CostExplorerError>,
}

impl CostExplorerClientBuilder {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.inner = self.inner.config(config);
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.inner = self.inner.credentials(credentials);
        self
    }

    pub fn credentials_provider(mut self, provider: Arc<dyn ProvideCredentials>) -> Self {
        self.inner = self.inner.credentials_provider(provider);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.inner = self.inner.transport(transport);
        self
    }

    pub fn signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.inner = self.inner.signer(signer);
        self
    }

    pub fn build(self) -> Result<CostExplorerClient, ClientError> {
        let invoker = self.inner.build()?;
        let region = invoker.region();
        if region.name() != HOME_REGION && invoker.endpoint() == region.endpoint(SERVICE.endpoint_prefix) {
            log::warn!(
                "Cost Explorer has no endpoint in {}; set an endpoint URL or use {}",
                region,
                HOME_REGION
            );
        }
        Ok(CostExplorerClient { invoker })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DateInterval, Granularity};
    use awsbind_core::credentials::CredentialsError;
    use awsbind_core::error::SdkError;
    use awsbind_core::stub::StubTransport;

    mockall::mock! {
        Creds {}
        impl ProvideCredentials for Creds {
            fn provide_credentials(&self) -> Result<Credentials, CredentialsError>;
        }
    }

    fn client(stub: &Arc<StubTransport>) -> CostExplorerClient {
        CostExplorerClient::builder()
            .config(ClientConfig::new("us-east-1"))
            .credentials(Credentials::new("AKIDEXAMPLE", "secret"))
            .transport(stub.clone())
            .build()
            .unwrap()
    }

    fn january() -> DateInterval {
        DateInterval::default().start("2020-01-01").end("2020-02-01")
    }

    #[test]
    fn endpoint_and_target_header() {
        let stub = StubTransport::new();
        stub.push_json(200, r#"{"ResultsByTime":[]}"#);
        let ce = client(&stub);
        assert_eq!(ce.endpoint(), "https://ce.us-east-1.amazonaws.com");

        ce.get_cost_and_usage(
            &GetCostAndUsageRequest::default()
                .time_period(january())
                .granularity(Granularity::Monthly)
                .metrics(["BlendedCost"]),
        )
        .unwrap();

        let req = stub.last_request().unwrap();
        assert_eq!(req.method.as_str(), "POST");
        assert_eq!(req.url, "https://ce.us-east-1.amazonaws.com/");
        assert_eq!(
            req.header("x-amz-target"),
            Some("AWSInsightsIndexService.GetCostAndUsage")
        );
        assert_eq!(req.header("content-type"), Some("application/x-amz-json-1.1"));
        assert!(req.header("authorization").unwrap().contains("/us-east-1/ce/aws4_request"));

        let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
        assert_eq!(body["TimePeriod"]["Start"], "2020-01-01");
        assert_eq!(body["Granularity"], "MONTHLY");
        assert_eq!(body["Metrics"], serde_json::json!(["BlendedCost"]));
        assert!(body.get("Filter").is_none());
    }

    #[test]
    fn missing_required_member_never_reaches_the_wire() {
        let stub = StubTransport::new();
        let err = client(&stub)
            .get_cost_and_usage(&GetCostAndUsageRequest::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Client(ClientError::MissingMember {
                operation: "GetCostAndUsage",
                member: "TimePeriod"
            })
        ));
        assert_eq!(stub.request_count(), 0);
    }

    #[test]
    fn named_errors_are_typed() {
        let stub = StubTransport::new();
        stub.push_service_error(400, "com.amazon.coral.service#LimitExceededException", "Rate exceeded");
        stub.push_service_error(400, "ResourceNotFoundException", "No cost category");
        let ce = client(&stub);

        let err = ce
            .get_tags(&GetTagsRequest::default().time_period(january()))
            .unwrap_err();
        match err {
            SdkError::Service(CostExplorerError::LimitExceeded(meta)) => {
                assert_eq!(meta.code, "LimitExceededException");
                assert_eq!(meta.message, "Rate exceeded");
                assert_eq!(meta.operation.as_deref(), Some("GetTags"));
            }
            other => panic!("unexpected {:?}", other),
        }

        let err = ce
            .describe_cost_category_definition(
                &DescribeCostCategoryDefinitionRequest::default()
                    .cost_category_arn("arn:aws:ce::123456789012:costcategory/abc"),
            )
            .unwrap_err();
        assert!(err.as_service_error().unwrap().is_resource_not_found());
    }

    #[test]
    fn unknown_error_falls_back() {
        let stub = StubTransport::new();
        stub.push_service_error(400, "AccessDeniedException", "no");
        let err = client(&stub)
            .list_cost_category_definitions(&ListCostCategoryDefinitionsRequest::default())
            .unwrap_err();
        assert!(matches!(err, SdkError::Service(CostExplorerError::Unhandled(_))));
        assert!(!err.is_retryable());
    }

    #[test]
    fn unparseable_success_body_is_client_error() {
        let stub = StubTransport::new();
        stub.push_json(200, "not json");
        let err = client(&stub)
            .get_dimension_values(
                &GetDimensionValuesRequest::default()
                    .time_period(january())
                    .dimension(crate::types::Dimension::Service),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Client(ClientError::Unmarshall {
                operation: "GetDimensionValues",
                ..
            })
        ));
    }

    #[test]
    fn credential_failure_stops_the_call() {
        let stub = StubTransport::new();
        let mut creds = MockCreds::new();
        creds.expect_provide_credentials().times(1).returning(|| {
            Err(CredentialsError::NotLoaded {
                provider: "Environment",
                reason: "AWS_ACCESS_KEY_ID is not set".to_string(),
            })
        });
        let ce = CostExplorerClient::builder()
            .config(ClientConfig::new(HOME_REGION))
            .credentials_provider(Arc::new(creds))
            .transport(stub.clone())
            .build()
            .unwrap();

        let err = ce
            .get_tags(&GetTagsRequest::default().time_period(january()))
            .unwrap_err();
        assert!(matches!(err, SdkError::Client(ClientError::Credentials(_))));
        assert_eq!(stub.request_count(), 0);
    }

    #[test]
    fn endpoint_override_keeps_signing_region() {
        let stub = StubTransport::new();
        stub.set_echo(true);
        let ce = CostExplorerClient::builder()
            .config(ClientConfig::new("eu-central-1").with_endpoint_url("https://ce.example.test/"))
            .credentials(Credentials::new("AKIDEXAMPLE", "secret"))
            .transport(stub.clone())
            .build()
            .unwrap();
        assert_eq!(ce.endpoint(), "https://ce.example.test");

        ce.list_cost_category_definitions(&ListCostCategoryDefinitionsRequest::default())
            .unwrap();
        let req = stub.last_request().unwrap();
        assert_eq!(req.url, "https://ce.example.test/");
        assert!(req.header("authorization").unwrap().contains("/eu-central-1/ce/aws4_request"));
    }
}

//! Cost and usage queries, forecasts and dimension lookups.

use crate::types::{
    Context, DateInterval, Dimension, DimensionValuesWithAttributes, Expression, ForecastResult,
    Granularity, GroupDefinition, Metric, MetricValue, ResultByTime,
};
use crate::{JSON_VERSION, TARGET_PREFIX};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{aws_json_request, require, ProtocolRequest};
use serde::{Deserialize, Serialize};

// ── GetCostAndUsage ───────────────────────────────────────────────────

/// Retrieves cost and usage metrics for a time period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCostAndUsageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expression>,
    /// Metric names such as `BlendedCost` or `UsageQuantity`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<GroupDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetCostAndUsageRequest {
        time_period / set_time_period: DateInterval;
        granularity / set_granularity: Granularity;
        filter / set_filter: Expression;
        metrics / set_metrics: [String];
        group_by / set_group_by: [GroupDefinition];
        next_page_token / set_next_page_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCostAndUsageResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_definitions: Option<Vec<GroupDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_by_time: Option<Vec<ResultByTime>>,
}

fluent! {
    GetCostAndUsageResult {
        next_page_token / set_next_page_token: String;
        group_definitions / set_group_definitions: [GroupDefinition];
        results_by_time / set_results_by_time: [ResultByTime];
    }
}

impl Operation for GetCostAndUsageRequest {
    type Output = GetCostAndUsageResult;
    const NAME: &'static str = "GetCostAndUsage";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "TimePeriod", &self.time_period)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── GetCostAndUsageWithResources ──────────────────────────────────────

/// Like `GetCostAndUsage`, with resource-level granularity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCostAndUsageWithResourcesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<GroupDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetCostAndUsageWithResourcesRequest {
        time_period / set_time_period: DateInterval;
        granularity / set_granularity: Granularity;
        filter / set_filter: Expression;
        metrics / set_metrics: [String];
        group_by / set_group_by: [GroupDefinition];
        next_page_token / set_next_page_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCostAndUsageWithResourcesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_definitions: Option<Vec<GroupDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_by_time: Option<Vec<ResultByTime>>,
}

fluent! {
    GetCostAndUsageWithResourcesResult {
        next_page_token / set_next_page_token: String;
        group_definitions / set_group_definitions: [GroupDefinition];
        results_by_time / set_results_by_time: [ResultByTime];
    }
}

impl Operation for GetCostAndUsageWithResourcesRequest {
    type Output = GetCostAndUsageWithResourcesResult;
    const NAME: &'static str = "GetCostAndUsageWithResources";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "TimePeriod", &self.time_period)?;
        require(Self::NAME, "Filter", &self.filter)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── GetCostForecast ───────────────────────────────────────────────────

/// Forecasts spend for a future time period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCostForecastRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expression>,
    /// Confidence level of the prediction interval, 51 to 99.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_interval_level: Option<i32>,
}

fluent! {
    GetCostForecastRequest {
        time_period / set_time_period: DateInterval;
        metric / set_metric: Metric;
        granularity / set_granularity: Granularity;
        filter / set_filter: Expression;
        prediction_interval_level / set_prediction_interval_level: i32;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCostForecastResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast_results_by_time: Option<Vec<ForecastResult>>,
}

fluent! {
    GetCostForecastResult {
        total / set_total: MetricValue;
        forecast_results_by_time / set_forecast_results_by_time: [ForecastResult];
    }
}

impl Operation for GetCostForecastRequest {
    type Output = GetCostForecastResult;
    const NAME: &'static str = "GetCostForecast";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "TimePeriod", &self.time_period)?;
        require(Self::NAME, "Metric", &self.metric)?;
        require(Self::NAME, "Granularity", &self.granularity)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── GetDimensionValues ────────────────────────────────────────────────

/// Lists the values of a dimension within a time period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDimensionValuesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetDimensionValuesRequest {
        search_string / set_search_string: String;
        time_period / set_time_period: DateInterval;
        dimension / set_dimension: Dimension;
        context / set_context: Context;
        next_page_token / set_next_page_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDimensionValuesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_values: Option<Vec<DimensionValuesWithAttributes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetDimensionValuesResult {
        dimension_values / set_dimension_values: [DimensionValuesWithAttributes];
        return_size / set_return_size: i32;
        total_size / set_total_size: i32;
        next_page_token / set_next_page_token: String;
    }
}

impl Operation for GetDimensionValuesRequest {
    type Output = GetDimensionValuesResult;
    const NAME: &'static str = "GetDimensionValues";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "TimePeriod", &self.time_period)?;
        require(Self::NAME, "Dimension", &self.dimension)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── GetTags ───────────────────────────────────────────────────────────

/// Lists cost allocation tag keys, or the values of one key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTagsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetTagsRequest {
        search_string / set_search_string: String;
        time_period / set_time_period: DateInterval;
        tag_key / set_tag_key: String;
        next_page_token / set_next_page_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTagsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_size: Option<i32>,
}

fluent! {
    GetTagsResult {
        next_page_token / set_next_page_token: String;
        tags / set_tags: [String];
        return_size / set_return_size: i32;
        total_size / set_total_size: i32;
    }
}

impl Operation for GetTagsRequest {
    type Output = GetTagsResult;
    const NAME: &'static str = "GetTags";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "TimePeriod", &self.time_period)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── GetUsageForecast ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUsageForecastRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_interval_level: Option<i32>,
}

fluent! {
    GetUsageForecastRequest {
        time_period / set_time_period: DateInterval;
        metric / set_metric: Metric;
        granularity / set_granularity: Granularity;
        filter / set_filter: Expression;
        prediction_interval_level / set_prediction_interval_level: i32;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUsageForecastResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast_results_by_time: Option<Vec<ForecastResult>>,
}

fluent! {
    GetUsageForecastResult {
        total / set_total: MetricValue;
        forecast_results_by_time / set_forecast_results_by_time: [ForecastResult];
    }
}

impl Operation for GetUsageForecastRequest {
    type Output = GetUsageForecastResult;
    const NAME: &'static str = "GetUsageForecast";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "TimePeriod", &self.time_period)?;
        require(Self::NAME, "Metric", &self.metric)?;
        require(Self::NAME, "Granularity", &self.granularity)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DimensionValues, GroupDefinitionType, TagValues};
    use serde_json::{json, Value};

    fn january() -> DateInterval {
        DateInterval::default().start("2020-01-01").end("2020-02-01")
    }

    fn body(req: &ProtocolRequest) -> Value {
        serde_json::from_slice(&req.body).unwrap()
    }

    #[test]
    fn nested_filter_and_grouping() {
        let filter = Expression::default()
            .and([
                Expression::default().dimensions(
                    DimensionValues::default()
                        .key(Dimension::Region)
                        .values(["us-east-1", "eu-west-1"]),
                ),
                Expression::default().not(
                    Expression::default().tags(TagValues::default().key("env").values(["dev"])),
                ),
            ]);
        let req = GetCostAndUsageRequest::default()
            .time_period(january())
            .granularity(Granularity::Daily)
            .metrics(["UnblendedCost", "UsageQuantity"])
            .filter(filter)
            .group_by([GroupDefinition::default()
                .r#type(GroupDefinitionType::Dimension)
                .key("SERVICE")])
            .marshall()
            .unwrap();

        assert_eq!(req.headers["x-amz-target"], "AWSInsightsIndexService.GetCostAndUsage");
        let json = body(&req);
        assert_eq!(
            json["Filter"],
            json!({
                "And": [
                    { "Dimensions": { "Key": "REGION", "Values": ["us-east-1", "eu-west-1"] } },
                    { "Not": { "Tags": { "Key": "env", "Values": ["dev"] } } }
                ]
            })
        );
        assert_eq!(json["GroupBy"], json!([{ "Type": "DIMENSION", "Key": "SERVICE" }]));
    }

    #[test]
    fn request_round_trips_through_wire_body() {
        let req = GetCostAndUsageRequest::default()
            .time_period(january())
            .granularity(Granularity::Monthly)
            .metrics(["BlendedCost"])
            .next_page_token("page-2");
        let wire = req.marshall().unwrap();
        let back: GetCostAndUsageRequest = serde_json::from_slice(&wire.body).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn with_resources_requires_filter() {
        let err = GetCostAndUsageWithResourcesRequest::default()
            .time_period(january())
            .marshall()
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingMember { member: "Filter", .. }));
    }

    #[test]
    fn forecast_required_members() {
        let base = GetCostForecastRequest::default().time_period(january());
        assert!(matches!(
            base.marshall(),
            Err(ClientError::MissingMember { member: "Metric", .. })
        ));
        let req = base
            .metric(Metric::UnblendedCost)
            .granularity(Granularity::Monthly)
            .prediction_interval_level(80)
            .marshall()
            .unwrap();
        let json = body(&req);
        assert_eq!(json["Metric"], "UNBLENDED_COST");
        assert_eq!(json["PredictionIntervalLevel"], 80);
    }

    #[test]
    fn cost_and_usage_result_parses() {
        let out: GetCostAndUsageResult = serde_json::from_value(json!({
            "GroupDefinitions": [{ "Type": "DIMENSION", "Key": "SERVICE" }],
            "ResultsByTime": [{
                "TimePeriod": { "Start": "2020-01-01", "End": "2020-02-01" },
                "Total": {},
                "Groups": [{
                    "Keys": ["Amazon GuardDuty"],
                    "Metrics": { "UnblendedCost": { "Amount": "12.34", "Unit": "USD" } }
                }],
                "Estimated": false
            }]
        }))
        .unwrap();
        assert_eq!(out.next_page_token, None);
        let period = &out.results_by_time.unwrap()[0];
        assert_eq!(period.estimated, Some(false));
        let group = &period.groups.as_ref().unwrap()[0];
        assert_eq!(
            group.metrics.as_ref().unwrap()["UnblendedCost"].amount.as_deref(),
            Some("12.34")
        );
    }

    #[test]
    fn usage_forecast_result_parses() {
        let out: GetUsageForecastResult = serde_json::from_str(
            r#"{"Total":{"Amount":"100","Unit":"Hrs"},
                "ForecastResultsByTime":[{"TimePeriod":{"Start":"2020-03-01","End":"2020-04-01"},
                "MeanValue":"100","PredictionIntervalLowerBound":"90","PredictionIntervalUpperBound":"110"}]}"#,
        )
        .unwrap();
        let forecast = &out.forecast_results_by_time.unwrap()[0];
        assert_eq!(forecast.prediction_interval_upper_bound.as_deref(), Some("110"));
    }
}

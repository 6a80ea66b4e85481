//! Reserved Instance coverage, utilization and purchase recommendations.

use crate::types::{
    AccountScope, Coverage, CoverageByTime, DateInterval, Expression, Granularity, GroupDefinition,
    LookbackPeriodInDays, PaymentOption, ReservationAggregates, ReservationPurchaseRecommendation,
    ReservationPurchaseRecommendationMetadata, ServiceSpecification, TermInYears, UtilizationByTime,
};
use crate::{JSON_VERSION, TARGET_PREFIX};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{aws_json_request, require, ProtocolRequest};
use serde::{Deserialize, Serialize};

// ── GetReservationCoverage ────────────────────────────────────────────

/// Retrieves how much instance usage reservations covered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetReservationCoverageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<GroupDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetReservationCoverageRequest {
        time_period / set_time_period: DateInterval;
        group_by / set_group_by: [GroupDefinition];
        granularity / set_granularity: Granularity;
        filter / set_filter: Expression;
        metrics / set_metrics: [String];
        next_page_token / set_next_page_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetReservationCoverageResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverages_by_time: Option<Vec<CoverageByTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Coverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetReservationCoverageResult {
        coverages_by_time / set_coverages_by_time: [CoverageByTime];
        total / set_total: Coverage;
        next_page_token / set_next_page_token: String;
    }
}

impl Operation for GetReservationCoverageRequest {
    type Output = GetReservationCoverageResult;
    const NAME: &'static str = "GetReservationCoverage";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "TimePeriod", &self.time_period)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── GetReservationPurchaseRecommendation ──────────────────────────────

/// Recommends reservations to purchase for one service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetReservationPurchaseRecommendationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Service name, e.g. `Amazon Elastic Compute Cloud - Compute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_scope: Option<AccountScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookback_period_in_days: Option<LookbackPeriodInDays>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_in_years: Option<TermInYears>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_option: Option<PaymentOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_specification: Option<ServiceSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetReservationPurchaseRecommendationRequest {
        account_id / set_account_id: String;
        service / set_service: String;
        account_scope / set_account_scope: AccountScope;
        lookback_period_in_days / set_lookback_period_in_days: LookbackPeriodInDays;
        term_in_years / set_term_in_years: TermInYears;
        payment_option / set_payment_option: PaymentOption;
        service_specification / set_service_specification: ServiceSpecification;
        page_size / set_page_size: i32;
        next_page_token / set_next_page_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetReservationPurchaseRecommendationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReservationPurchaseRecommendationMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<ReservationPurchaseRecommendation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetReservationPurchaseRecommendationResult {
        metadata / set_metadata: ReservationPurchaseRecommendationMetadata;
        recommendations / set_recommendations: [ReservationPurchaseRecommendation];
        next_page_token / set_next_page_token: String;
    }
}

impl Operation for GetReservationPurchaseRecommendationRequest {
    type Output = GetReservationPurchaseRecommendationResult;
    const NAME: &'static str = "GetReservationPurchaseRecommendation";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "Service", &self.service)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── GetReservationUtilization ─────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetReservationUtilizationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<GroupDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetReservationUtilizationRequest {
        time_period / set_time_period: DateInterval;
        group_by / set_group_by: [GroupDefinition];
        granularity / set_granularity: Granularity;
        filter / set_filter: Expression;
        next_page_token / set_next_page_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetReservationUtilizationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilizations_by_time: Option<Vec<UtilizationByTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<ReservationAggregates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetReservationUtilizationResult {
        utilizations_by_time / set_utilizations_by_time: [UtilizationByTime];
        total / set_total: ReservationAggregates;
        next_page_token / set_next_page_token: String;
    }
}

impl Operation for GetReservationUtilizationRequest {
    type Output = GetReservationUtilizationResult;
    const NAME: &'static str = "GetReservationUtilization";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "TimePeriod", &self.time_period)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ec2Specification, OfferingClass};

    #[test]
    fn purchase_recommendation_body() {
        let req = GetReservationPurchaseRecommendationRequest::default()
            .service("Amazon Elastic Compute Cloud - Compute")
            .account_scope(AccountScope::Payer)
            .lookback_period_in_days(LookbackPeriodInDays::ThirtyDays)
            .term_in_years(TermInYears::OneYear)
            .payment_option(PaymentOption::NoUpfront)
            .service_specification(
                ServiceSpecification::default()
                    .ec2_specification(Ec2Specification::default().offering_class(OfferingClass::Standard)),
            )
            .marshall()
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
        assert_eq!(json["LookbackPeriodInDays"], "THIRTY_DAYS");
        assert_eq!(json["ServiceSpecification"]["EC2Specification"]["OfferingClass"], "STANDARD");
    }

    #[test]
    fn purchase_recommendation_requires_service() {
        let err = GetReservationPurchaseRecommendationRequest::default()
            .marshall()
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingMember { member: "Service", .. }));
    }

    #[test]
    fn utilization_aggregates_use_acronym_names() {
        let out: GetReservationUtilizationResult = serde_json::from_str(
            r#"{"Total":{"UtilizationPercentage":"87.5","NetRISavings":"10.00",
                "OnDemandCostOfRIHoursUsed":"40.00","TotalPotentialRISavings":"12.00"}}"#,
        )
        .unwrap();
        let total = out.total.unwrap();
        assert_eq!(total.net_ri_savings.as_deref(), Some("10.00"));
        assert_eq!(total.on_demand_cost_of_ri_hours_used.as_deref(), Some("40.00"));
        assert_eq!(total.total_potential_ri_savings.as_deref(), Some("12.00"));
        assert_eq!(out.utilizations_by_time, None);
    }

    #[test]
    fn coverage_result_parses() {
        let out: GetReservationCoverageResult = serde_json::from_str(
            r#"{"CoveragesByTime":[{"TimePeriod":{"Start":"2020-01-01","End":"2020-01-02"},
                "Total":{"CoverageHours":{"CoverageHoursPercentage":"40"}}}]}"#,
        )
        .unwrap();
        let hours = out.coverages_by_time.unwrap()[0]
            .total
            .clone()
            .and_then(|c| c.coverage_hours)
            .and_then(|h| h.coverage_hours_percentage);
        assert_eq!(hours.as_deref(), Some("40"));
    }
}

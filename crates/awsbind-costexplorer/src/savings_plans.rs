//! Savings Plans coverage, utilization and purchase recommendations.

use crate::types::{
    AccountScope, DateInterval, Expression, Granularity, GroupDefinition, LookbackPeriodInDays,
    PaymentOption, SavingsPlansCoverage, SavingsPlansPurchaseRecommendation,
    SavingsPlansPurchaseRecommendationMetadata, SavingsPlansUtilizationAggregates,
    SavingsPlansUtilizationByTime, SavingsPlansUtilizationDetail, SupportedSavingsPlansType,
    TermInYears,
};
use crate::{JSON_VERSION, TARGET_PREFIX};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{aws_json_request, require, ProtocolRequest};
use serde::{Deserialize, Serialize};

// ── GetSavingsPlansCoverage ───────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSavingsPlansCoverageRequest {
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
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

fluent! {
    GetSavingsPlansCoverageRequest {
        time_period / set_time_period: DateInterval;
        group_by / set_group_by: [GroupDefinition];
        granularity / set_granularity: Granularity;
        filter / set_filter: Expression;
        metrics / set_metrics: [String];
        next_token / set_next_token: String;
        max_results / set_max_results: i32;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSavingsPlansCoverageResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plans_coverages: Option<Vec<SavingsPlansCoverage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    GetSavingsPlansCoverageResult {
        savings_plans_coverages / set_savings_plans_coverages: [SavingsPlansCoverage];
        next_token / set_next_token: String;
    }
}

impl Operation for GetSavingsPlansCoverageRequest {
    type Output = GetSavingsPlansCoverageResult;
    const NAME: &'static str = "GetSavingsPlansCoverage";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "TimePeriod", &self.time_period)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── GetSavingsPlansPurchaseRecommendation ─────────────────────────────

/// Recommends Savings Plans to purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSavingsPlansPurchaseRecommendationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plans_type: Option<SupportedSavingsPlansType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_in_years: Option<TermInYears>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_option: Option<PaymentOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_scope: Option<AccountScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookback_period_in_days: Option<LookbackPeriodInDays>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expression>,
}

fluent! {
    GetSavingsPlansPurchaseRecommendationRequest {
        savings_plans_type / set_savings_plans_type: SupportedSavingsPlansType;
        term_in_years / set_term_in_years: TermInYears;
        payment_option / set_payment_option: PaymentOption;
        account_scope / set_account_scope: AccountScope;
        next_page_token / set_next_page_token: String;
        page_size / set_page_size: i32;
        lookback_period_in_days / set_lookback_period_in_days: LookbackPeriodInDays;
        filter / set_filter: Expression;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSavingsPlansPurchaseRecommendationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SavingsPlansPurchaseRecommendationMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plans_purchase_recommendation: Option<SavingsPlansPurchaseRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetSavingsPlansPurchaseRecommendationResult {
        metadata / set_metadata: SavingsPlansPurchaseRecommendationMetadata;
        savings_plans_purchase_recommendation / set_savings_plans_purchase_recommendation: SavingsPlansPurchaseRecommendation;
        next_page_token / set_next_page_token: String;
    }
}

impl Operation for GetSavingsPlansPurchaseRecommendationRequest {
    type Output = GetSavingsPlansPurchaseRecommendationResult;
    const NAME: &'static str = "GetSavingsPlansPurchaseRecommendation";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "SavingsPlansType", &self.savings_plans_type)?;
        require(Self::NAME, "TermInYears", &self.term_in_years)?;
        require(Self::NAME, "PaymentOption", &self.payment_option)?;
        require(Self::NAME, "LookbackPeriodInDays", &self.lookback_period_in_days)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── GetSavingsPlansUtilization ────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSavingsPlansUtilizationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expression>,
}

fluent! {
    GetSavingsPlansUtilizationRequest {
        time_period / set_time_period: DateInterval;
        granularity / set_granularity: Granularity;
        filter / set_filter: Expression;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSavingsPlansUtilizationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plans_utilizations_by_time: Option<Vec<SavingsPlansUtilizationByTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<SavingsPlansUtilizationAggregates>,
}

fluent! {
    GetSavingsPlansUtilizationResult {
        savings_plans_utilizations_by_time / set_savings_plans_utilizations_by_time: [SavingsPlansUtilizationByTime];
        total / set_total: SavingsPlansUtilizationAggregates;
    }
}

impl Operation for GetSavingsPlansUtilizationRequest {
    type Output = GetSavingsPlansUtilizationResult;
    const NAME: &'static str = "GetSavingsPlansUtilization";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "TimePeriod", &self.time_period)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── GetSavingsPlansUtilizationDetails ─────────────────────────────────

/// Utilization broken down by individual Savings Plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSavingsPlansUtilizationDetailsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

fluent! {
    GetSavingsPlansUtilizationDetailsRequest {
        time_period / set_time_period: DateInterval;
        filter / set_filter: Expression;
        next_token / set_next_token: String;
        max_results / set_max_results: i32;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSavingsPlansUtilizationDetailsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plans_utilization_details: Option<Vec<SavingsPlansUtilizationDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<SavingsPlansUtilizationAggregates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    GetSavingsPlansUtilizationDetailsResult {
        savings_plans_utilization_details / set_savings_plans_utilization_details: [SavingsPlansUtilizationDetail];
        total / set_total: SavingsPlansUtilizationAggregates;
        time_period / set_time_period: DateInterval;
        next_token / set_next_token: String;
    }
}

impl Operation for GetSavingsPlansUtilizationDetailsRequest {
    type Output = GetSavingsPlansUtilizationDetailsResult;
    const NAME: &'static str = "GetSavingsPlansUtilizationDetails";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "TimePeriod", &self.time_period)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

//! Enumerations and shapes shared by Cost Explorer operations.

use awsbind_core::{fluent, wire_enum};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── Enumerations ────────────────────────────────────────────────────────

wire_enum! {
    /// Whether recommendations cover the payer account or each linked account.
    pub enum AccountScope {
        Payer => "PAYER",
        Linked => "LINKED",
    }
}

wire_enum! {
    /// Which API the dimension values are requested for.
    pub enum Context {
        CostAndUsage => "COST_AND_USAGE",
        Reservations => "RESERVATIONS",
        SavingsPlans => "SAVINGS_PLANS",
    }
}

wire_enum! {
    pub enum CostCategoryRuleVersion {
        CostCategoryExpressionV1 => "CostCategoryExpression.v1",
    }
}

wire_enum! {
    /// A cost and usage dimension.
    pub enum Dimension {
        Az => "AZ",
        InstanceType => "INSTANCE_TYPE",
        LinkedAccount => "LINKED_ACCOUNT",
        LinkedAccountName => "LINKED_ACCOUNT_NAME",
        Operation => "OPERATION",
        PurchaseType => "PURCHASE_TYPE",
        Region => "REGION",
        Service => "SERVICE",
        ServiceCode => "SERVICE_CODE",
        UsageType => "USAGE_TYPE",
        UsageTypeGroup => "USAGE_TYPE_GROUP",
        RecordType => "RECORD_TYPE",
        OperatingSystem => "OPERATING_SYSTEM",
        Tenancy => "TENANCY",
        Scope => "SCOPE",
        Platform => "PLATFORM",
        SubscriptionId => "SUBSCRIPTION_ID",
        LegalEntityName => "LEGAL_ENTITY_NAME",
        DeploymentOption => "DEPLOYMENT_OPTION",
        DatabaseEngine => "DATABASE_ENGINE",
        CacheEngine => "CACHE_ENGINE",
        InstanceTypeFamily => "INSTANCE_TYPE_FAMILY",
        BillingEntity => "BILLING_ENTITY",
        ReservationId => "RESERVATION_ID",
        ResourceId => "RESOURCE_ID",
        RightsizingType => "RIGHTSIZING_TYPE",
        SavingsPlansType => "SAVINGS_PLANS_TYPE",
        SavingsPlanArn => "SAVINGS_PLAN_ARN",
        PaymentOption => "PAYMENT_OPTION",
    }
}

wire_enum! {
    pub enum Granularity {
        Daily => "DAILY",
        Monthly => "MONTHLY",
        Hourly => "HOURLY",
    }
}

wire_enum! {
    pub enum GroupDefinitionType {
        Dimension => "DIMENSION",
        Tag => "TAG",
        CostCategory => "COST_CATEGORY",
    }
}

wire_enum! {
    pub enum LookbackPeriodInDays {
        SevenDays => "SEVEN_DAYS",
        ThirtyDays => "THIRTY_DAYS",
        SixtyDays => "SIXTY_DAYS",
    }
}

wire_enum! {
    pub enum MatchOption {
        Equals => "EQUALS",
        StartsWith => "STARTS_WITH",
        EndsWith => "ENDS_WITH",
        Contains => "CONTAINS",
        CaseSensitive => "CASE_SENSITIVE",
        CaseInsensitive => "CASE_INSENSITIVE",
    }
}

wire_enum! {
    /// A forecastable cost or usage metric.
    pub enum Metric {
        BlendedCost => "BLENDED_COST",
        UnblendedCost => "UNBLENDED_COST",
        AmortizedCost => "AMORTIZED_COST",
        NetUnblendedCost => "NET_UNBLENDED_COST",
        NetAmortizedCost => "NET_AMORTIZED_COST",
        UsageQuantity => "USAGE_QUANTITY",
        NormalizedUsageAmount => "NORMALIZED_USAGE_AMOUNT",
    }
}

wire_enum! {
    pub enum OfferingClass {
        Standard => "STANDARD",
        Convertible => "CONVERTIBLE",
    }
}

wire_enum! {
    pub enum PaymentOption {
        NoUpfront => "NO_UPFRONT",
        PartialUpfront => "PARTIAL_UPFRONT",
        AllUpfront => "ALL_UPFRONT",
        LightUtilization => "LIGHT_UTILIZATION",
        MediumUtilization => "MEDIUM_UTILIZATION",
        HeavyUtilization => "HEAVY_UTILIZATION",
    }
}

wire_enum! {
    pub enum RecommendationTarget {
        SameInstanceFamily => "SAME_INSTANCE_FAMILY",
        CrossInstanceFamily => "CROSS_INSTANCE_FAMILY",
    }
}

wire_enum! {
    pub enum RightsizingType {
        Terminate => "TERMINATE",
        Modify => "MODIFY",
    }
}

wire_enum! {
    pub enum SupportedSavingsPlansType {
        ComputeSp => "COMPUTE_SP",
        Ec2InstanceSp => "EC2_INSTANCE_SP",
    }
}

wire_enum! {
    pub enum TermInYears {
        OneYear => "ONE_YEAR",
        ThreeYears => "THREE_YEARS",
    }
}

// ── Shapes ──────────────────────────────────────────────────────────────

/// A half-open date range, `Start` inclusive and `End` exclusive, as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateInterval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

fluent! {
    DateInterval {
        start / set_start: String;
        end / set_end: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DimensionValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_options: Option<Vec<MatchOption>>,
}

fluent! {
    DimensionValues {
        key / set_key: Dimension;
        values / set_values: [String];
        match_options / set_match_options: [MatchOption];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_options: Option<Vec<MatchOption>>,
}

fluent! {
    TagValues {
        key / set_key: String;
        values / set_values: [String];
        match_options / set_match_options: [MatchOption];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostCategoryValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

fluent! {
    CostCategoryValues {
        key / set_key: String;
        values / set_values: [String];
    }
}

/// A filter expression.
///
/// Exactly one of the members should be set per node; `And`, `Or` and
/// `Not` nest further expressions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Expression {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<Expression>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<Expression>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Expression>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<DimensionValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_categories: Option<CostCategoryValues>,
}

fluent! {
    Expression {
        or / set_or: [Expression];
        and / set_and: [Expression];
        not / set_not: Box<Expression>;
        dimensions / set_dimensions: DimensionValues;
        tags / set_tags: TagValues;
        cost_categories / set_cost_categories: CostCategoryValues;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<GroupDefinitionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

fluent! {
    GroupDefinition {
        r#type / set_type: GroupDefinitionType;
        key / set_key: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

fluent! {
    MetricValue {
        amount / set_amount: String;
        unit / set_unit: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<HashMap<String, MetricValue>>,
}

fluent! {
    Group {
        keys / set_keys: [String];
        metrics / set_metrics: {String => MetricValue};
    }
}

/// Cost and usage for one time period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultByTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<HashMap<String, MetricValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated: Option<bool>,
}

fluent! {
    ResultByTime {
        time_period / set_time_period: DateInterval;
        total / set_total: {String => MetricValue};
        groups / set_groups: [Group];
        estimated / set_estimated: bool;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForecastResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_interval_lower_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_interval_upper_bound: Option<String>,
}

fluent! {
    ForecastResult {
        time_period / set_time_period: DateInterval;
        mean_value / set_mean_value: String;
        prediction_interval_lower_bound / set_prediction_interval_lower_bound: String;
        prediction_interval_upper_bound / set_prediction_interval_upper_bound: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DimensionValuesWithAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
}

fluent! {
    DimensionValuesWithAttributes {
        value / set_value: String;
        attributes / set_attributes: {String => String};
    }
}

/// Maps every cost matching `Rule` to the category value `Value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostCategoryRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Expression>,
}

fluent! {
    CostCategoryRule {
        value / set_value: String;
        rule / set_rule: Expression;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_category_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_version: Option<CostCategoryRuleVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<CostCategoryRule>>,
}

fluent! {
    CostCategory {
        cost_category_arn / set_cost_category_arn: String;
        effective_start / set_effective_start: String;
        effective_end / set_effective_end: String;
        name / set_name: String;
        rule_version / set_rule_version: CostCategoryRuleVersion;
        rules / set_rules: [CostCategoryRule];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostCategoryReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_category_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_rules: Option<i32>,
}

fluent! {
    CostCategoryReference {
        cost_category_arn / set_cost_category_arn: String;
        name / set_name: String;
        effective_start / set_effective_start: String;
        effective_end / set_effective_end: String;
        number_of_rules / set_number_of_rules: i32;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoverageHours {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_running_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_hours_percentage: Option<String>,
}

fluent! {
    CoverageHours {
        on_demand_hours / set_on_demand_hours: String;
        reserved_hours / set_reserved_hours: String;
        total_running_hours / set_total_running_hours: String;
        coverage_hours_percentage / set_coverage_hours_percentage: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoverageNormalizedUnits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_normalized_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_normalized_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_running_normalized_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_normalized_units_percentage: Option<String>,
}

fluent! {
    CoverageNormalizedUnits {
        on_demand_normalized_units / set_on_demand_normalized_units: String;
        reserved_normalized_units / set_reserved_normalized_units: String;
        total_running_normalized_units / set_total_running_normalized_units: String;
        coverage_normalized_units_percentage / set_coverage_normalized_units_percentage: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoverageCost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_cost: Option<String>,
}

fluent! {
    CoverageCost {
        on_demand_cost / set_on_demand_cost: String;
    }
}

/// How much of usage was covered by reservations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Coverage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_hours: Option<CoverageHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_normalized_units: Option<CoverageNormalizedUnits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_cost: Option<CoverageCost>,
}

fluent! {
    Coverage {
        coverage_hours / set_coverage_hours: CoverageHours;
        coverage_normalized_units / set_coverage_normalized_units: CoverageNormalizedUnits;
        coverage_cost / set_coverage_cost: CoverageCost;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationCoverageGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Coverage>,
}

fluent! {
    ReservationCoverageGroup {
        attributes / set_attributes: {String => String};
        coverage / set_coverage: Coverage;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoverageByTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<ReservationCoverageGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Coverage>,
}

fluent! {
    CoverageByTime {
        time_period / set_time_period: DateInterval;
        groups / set_groups: [ReservationCoverageGroup];
        total / set_total: Coverage;
    }
}

/// Utilization and savings totals for reservations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationAggregates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization_percentage_in_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_actual_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_actual_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_units: Option<String>,
    #[serde(rename = "OnDemandCostOfRIHoursUsed", skip_serializing_if = "Option::is_none")]
    pub on_demand_cost_of_ri_hours_used: Option<String>,
    #[serde(rename = "NetRISavings", skip_serializing_if = "Option::is_none")]
    pub net_ri_savings: Option<String>,
    #[serde(rename = "TotalPotentialRISavings", skip_serializing_if = "Option::is_none")]
    pub total_potential_ri_savings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_upfront_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_recurring_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amortized_fee: Option<String>,
}

fluent! {
    ReservationAggregates {
        utilization_percentage / set_utilization_percentage: String;
        utilization_percentage_in_units / set_utilization_percentage_in_units: String;
        purchased_hours / set_purchased_hours: String;
        purchased_units / set_purchased_units: String;
        total_actual_hours / set_total_actual_hours: String;
        total_actual_units / set_total_actual_units: String;
        unused_hours / set_unused_hours: String;
        unused_units / set_unused_units: String;
        on_demand_cost_of_ri_hours_used / set_on_demand_cost_of_ri_hours_used: String;
        net_ri_savings / set_net_ri_savings: String;
        total_potential_ri_savings / set_total_potential_ri_savings: String;
        amortized_upfront_fee / set_amortized_upfront_fee: String;
        amortized_recurring_fee / set_amortized_recurring_fee: String;
        total_amortized_fee / set_total_amortized_fee: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationUtilizationGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization: Option<ReservationAggregates>,
}

fluent! {
    ReservationUtilizationGroup {
        key / set_key: String;
        value / set_value: String;
        attributes / set_attributes: {String => String};
        utilization / set_utilization: ReservationAggregates;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UtilizationByTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<ReservationUtilizationGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<ReservationAggregates>,
}

fluent! {
    UtilizationByTime {
        time_period / set_time_period: DateInterval;
        groups / set_groups: [ReservationUtilizationGroup];
        total / set_total: ReservationAggregates;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ec2InstanceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_flex_eligible: Option<bool>,
}

fluent! {
    Ec2InstanceDetails {
        family / set_family: String;
        instance_type / set_instance_type: String;
        region / set_region: String;
        availability_zone / set_availability_zone: String;
        platform / set_platform: String;
        tenancy / set_tenancy: String;
        current_generation / set_current_generation: bool;
        size_flex_eligible / set_size_flex_eligible: bool;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RdsInstanceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_edition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_flex_eligible: Option<bool>,
}

fluent! {
    RdsInstanceDetails {
        family / set_family: String;
        instance_type / set_instance_type: String;
        region / set_region: String;
        database_engine / set_database_engine: String;
        database_edition / set_database_edition: String;
        deployment_option / set_deployment_option: String;
        license_model / set_license_model: String;
        current_generation / set_current_generation: bool;
        size_flex_eligible / set_size_flex_eligible: bool;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RedshiftInstanceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_flex_eligible: Option<bool>,
}

fluent! {
    RedshiftInstanceDetails {
        family / set_family: String;
        node_type / set_node_type: String;
        region / set_region: String;
        current_generation / set_current_generation: bool;
        size_flex_eligible / set_size_flex_eligible: bool;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElastiCacheInstanceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_flex_eligible: Option<bool>,
}

fluent! {
    ElastiCacheInstanceDetails {
        family / set_family: String;
        node_type / set_node_type: String;
        region / set_region: String;
        product_description / set_product_description: String;
        current_generation / set_current_generation: bool;
        size_flex_eligible / set_size_flex_eligible: bool;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EsInstanceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_flex_eligible: Option<bool>,
}

fluent! {
    EsInstanceDetails {
        instance_class / set_instance_class: String;
        instance_size / set_instance_size: String;
        region / set_region: String;
        current_generation / set_current_generation: bool;
        size_flex_eligible / set_size_flex_eligible: bool;
    }
}

/// Instance attributes of a reservation recommendation; one member is set per service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceDetails {
    #[serde(rename = "EC2InstanceDetails", skip_serializing_if = "Option::is_none")]
    pub ec2_instance_details: Option<Ec2InstanceDetails>,
    #[serde(rename = "RDSInstanceDetails", skip_serializing_if = "Option::is_none")]
    pub rds_instance_details: Option<RdsInstanceDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redshift_instance_details: Option<RedshiftInstanceDetails>,
    #[serde(rename = "ElastiCacheInstanceDetails", skip_serializing_if = "Option::is_none")]
    pub elasticache_instance_details: Option<ElastiCacheInstanceDetails>,
    #[serde(rename = "ESInstanceDetails", skip_serializing_if = "Option::is_none")]
    pub es_instance_details: Option<EsInstanceDetails>,
}

fluent! {
    InstanceDetails {
        ec2_instance_details / set_ec2_instance_details: Ec2InstanceDetails;
        rds_instance_details / set_rds_instance_details: RdsInstanceDetails;
        redshift_instance_details / set_redshift_instance_details: RedshiftInstanceDetails;
        elasticache_instance_details / set_elasticache_instance_details: ElastiCacheInstanceDetails;
        es_instance_details / set_es_instance_details: EsInstanceDetails;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ec2Specification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_class: Option<OfferingClass>,
}

fluent! {
    Ec2Specification {
        offering_class / set_offering_class: OfferingClass;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceSpecification {
    #[serde(rename = "EC2Specification", skip_serializing_if = "Option::is_none")]
    pub ec2_specification: Option<Ec2Specification>,
}

fluent! {
    ServiceSpecification {
        ec2_specification / set_ec2_specification: Ec2Specification;
    }
}

/// One recommended reservation purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationPurchaseRecommendationDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_details: Option<InstanceDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_number_of_instances_to_purchase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_normalized_units_to_purchase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_number_of_instances_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_normalized_units_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_number_of_instances_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_normalized_units_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_number_of_instances_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_normalized_units_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_utilization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_break_even_in_months: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_savings_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_savings_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_on_demand_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_reservation_cost_for_lookback_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upfront_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_standard_monthly_cost: Option<String>,
}

fluent! {
    ReservationPurchaseRecommendationDetail {
        account_id / set_account_id: String;
        instance_details / set_instance_details: InstanceDetails;
        recommended_number_of_instances_to_purchase / set_recommended_number_of_instances_to_purchase: String;
        recommended_normalized_units_to_purchase / set_recommended_normalized_units_to_purchase: String;
        minimum_number_of_instances_used_per_hour / set_minimum_number_of_instances_used_per_hour: String;
        minimum_normalized_units_used_per_hour / set_minimum_normalized_units_used_per_hour: String;
        maximum_number_of_instances_used_per_hour / set_maximum_number_of_instances_used_per_hour: String;
        maximum_normalized_units_used_per_hour / set_maximum_normalized_units_used_per_hour: String;
        average_number_of_instances_used_per_hour / set_average_number_of_instances_used_per_hour: String;
        average_normalized_units_used_per_hour / set_average_normalized_units_used_per_hour: String;
        average_utilization / set_average_utilization: String;
        estimated_break_even_in_months / set_estimated_break_even_in_months: String;
        currency_code / set_currency_code: String;
        estimated_monthly_savings_amount / set_estimated_monthly_savings_amount: String;
        estimated_monthly_savings_percentage / set_estimated_monthly_savings_percentage: String;
        estimated_monthly_on_demand_cost / set_estimated_monthly_on_demand_cost: String;
        estimated_reservation_cost_for_lookback_period / set_estimated_reservation_cost_for_lookback_period: String;
        upfront_cost / set_upfront_cost: String;
        recurring_standard_monthly_cost / set_recurring_standard_monthly_cost: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationPurchaseRecommendationSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_estimated_monthly_savings_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_estimated_monthly_savings_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

fluent! {
    ReservationPurchaseRecommendationSummary {
        total_estimated_monthly_savings_amount / set_total_estimated_monthly_savings_amount: String;
        total_estimated_monthly_savings_percentage / set_total_estimated_monthly_savings_percentage: String;
        currency_code / set_currency_code: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationPurchaseRecommendation {
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
    pub recommendation_details: Option<Vec<ReservationPurchaseRecommendationDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_summary: Option<ReservationPurchaseRecommendationSummary>,
}

fluent! {
    ReservationPurchaseRecommendation {
        account_scope / set_account_scope: AccountScope;
        lookback_period_in_days / set_lookback_period_in_days: LookbackPeriodInDays;
        term_in_years / set_term_in_years: TermInYears;
        payment_option / set_payment_option: PaymentOption;
        service_specification / set_service_specification: ServiceSpecification;
        recommendation_details / set_recommendation_details: [ReservationPurchaseRecommendationDetail];
        recommendation_summary / set_recommendation_summary: ReservationPurchaseRecommendationSummary;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationPurchaseRecommendationMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_timestamp: Option<String>,
}

fluent! {
    ReservationPurchaseRecommendationMetadata {
        recommendation_id / set_recommendation_id: String;
        generation_timestamp / set_generation_timestamp: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ec2ResourceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_on_demand_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_performance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcpu: Option<String>,
}

fluent! {
    Ec2ResourceDetails {
        hourly_on_demand_rate / set_hourly_on_demand_rate: String;
        instance_type / set_instance_type: String;
        platform / set_platform: String;
        region / set_region: String;
        sku / set_sku: String;
        memory / set_memory: String;
        network_performance / set_network_performance: String;
        storage / set_storage: String;
        vcpu / set_vcpu: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceDetails {
    #[serde(rename = "EC2ResourceDetails", skip_serializing_if = "Option::is_none")]
    pub ec2_resource_details: Option<Ec2ResourceDetails>,
}

fluent! {
    ResourceDetails {
        ec2_resource_details / set_ec2_resource_details: Ec2ResourceDetails;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ec2ResourceUtilization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cpu_utilization_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory_utilization_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_storage_utilization_percentage: Option<String>,
}

fluent! {
    Ec2ResourceUtilization {
        max_cpu_utilization_percentage / set_max_cpu_utilization_percentage: String;
        max_memory_utilization_percentage / set_max_memory_utilization_percentage: String;
        max_storage_utilization_percentage / set_max_storage_utilization_percentage: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceUtilization {
    #[serde(rename = "EC2ResourceUtilization", skip_serializing_if = "Option::is_none")]
    pub ec2_resource_utilization: Option<Ec2ResourceUtilization>,
}

fluent! {
    ResourceUtilization {
        ec2_resource_utilization / set_ec2_resource_utilization: Ec2ResourceUtilization;
    }
}

/// The instance a rightsizing recommendation is about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagValues>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_details: Option<ResourceDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_utilization: Option<ResourceUtilization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_covered_hours_in_lookback_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plans_covered_hours_in_lookback_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_hours_in_lookback_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_running_hours_in_lookback_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

fluent! {
    CurrentInstance {
        resource_id / set_resource_id: String;
        tags / set_tags: [TagValues];
        resource_details / set_resource_details: ResourceDetails;
        resource_utilization / set_resource_utilization: ResourceUtilization;
        reservation_covered_hours_in_lookback_period / set_reservation_covered_hours_in_lookback_period: String;
        savings_plans_covered_hours_in_lookback_period / set_savings_plans_covered_hours_in_lookback_period: String;
        on_demand_hours_in_lookback_period / set_on_demand_hours_in_lookback_period: String;
        total_running_hours_in_lookback_period / set_total_running_hours_in_lookback_period: String;
        monthly_cost / set_monthly_cost: String;
        currency_code / set_currency_code: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_savings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_target_instance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_details: Option<ResourceDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_resource_utilization: Option<ResourceUtilization>,
}

fluent! {
    TargetInstance {
        estimated_monthly_cost / set_estimated_monthly_cost: String;
        estimated_monthly_savings / set_estimated_monthly_savings: String;
        currency_code / set_currency_code: String;
        default_target_instance / set_default_target_instance: bool;
        resource_details / set_resource_details: ResourceDetails;
        expected_resource_utilization / set_expected_resource_utilization: ResourceUtilization;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyRecommendationDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_instances: Option<Vec<TargetInstance>>,
}

fluent! {
    ModifyRecommendationDetail {
        target_instances / set_target_instances: [TargetInstance];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateRecommendationDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_savings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

fluent! {
    TerminateRecommendationDetail {
        estimated_monthly_savings / set_estimated_monthly_savings: String;
        currency_code / set_currency_code: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RightsizingRecommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_instance: Option<CurrentInstance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rightsizing_type: Option<RightsizingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_recommendation_detail: Option<ModifyRecommendationDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminate_recommendation_detail: Option<TerminateRecommendationDetail>,
}

fluent! {
    RightsizingRecommendation {
        account_id / set_account_id: String;
        current_instance / set_current_instance: CurrentInstance;
        rightsizing_type / set_rightsizing_type: RightsizingType;
        modify_recommendation_detail / set_modify_recommendation_detail: ModifyRecommendationDetail;
        terminate_recommendation_detail / set_terminate_recommendation_detail: TerminateRecommendationDetail;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RightsizingRecommendationMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookback_period_in_days: Option<LookbackPeriodInDays>,
}

fluent! {
    RightsizingRecommendationMetadata {
        recommendation_id / set_recommendation_id: String;
        generation_timestamp / set_generation_timestamp: String;
        lookback_period_in_days / set_lookback_period_in_days: LookbackPeriodInDays;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RightsizingRecommendationSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_recommendation_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_total_monthly_savings_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_percentage: Option<String>,
}

fluent! {
    RightsizingRecommendationSummary {
        total_recommendation_count / set_total_recommendation_count: String;
        estimated_total_monthly_savings_amount / set_estimated_total_monthly_savings_amount: String;
        savings_currency_code / set_savings_currency_code: String;
        savings_percentage / set_savings_percentage: String;
    }
}

/// Which instance families recommendations may target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RightsizingRecommendationConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_target: Option<RecommendationTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits_considered: Option<bool>,
}

fluent! {
    RightsizingRecommendationConfiguration {
        recommendation_target / set_recommendation_target: RecommendationTarget;
        benefits_considered / set_benefits_considered: bool;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansCoverageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spend_covered_by_savings_plans: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_percentage: Option<String>,
}

fluent! {
    SavingsPlansCoverageData {
        spend_covered_by_savings_plans / set_spend_covered_by_savings_plans: String;
        on_demand_cost / set_on_demand_cost: String;
        total_cost / set_total_cost: String;
        coverage_percentage / set_coverage_percentage: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansCoverage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<SavingsPlansCoverageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
}

fluent! {
    SavingsPlansCoverage {
        attributes / set_attributes: {String => String};
        coverage / set_coverage: SavingsPlansCoverageData;
        time_period / set_time_period: DateInterval;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansUtilization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization_percentage: Option<String>,
}

fluent! {
    SavingsPlansUtilization {
        total_commitment / set_total_commitment: String;
        used_commitment / set_used_commitment: String;
        unused_commitment / set_unused_commitment: String;
        utilization_percentage / set_utilization_percentage: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansSavings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_savings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_cost_equivalent: Option<String>,
}

fluent! {
    SavingsPlansSavings {
        net_savings / set_net_savings: String;
        on_demand_cost_equivalent / set_on_demand_cost_equivalent: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansAmortizedCommitment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_recurring_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_upfront_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amortized_commitment: Option<String>,
}

fluent! {
    SavingsPlansAmortizedCommitment {
        amortized_recurring_commitment / set_amortized_recurring_commitment: String;
        amortized_upfront_commitment / set_amortized_upfront_commitment: String;
        total_amortized_commitment / set_total_amortized_commitment: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansUtilizationByTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization: Option<SavingsPlansUtilization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<SavingsPlansSavings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_commitment: Option<SavingsPlansAmortizedCommitment>,
}

fluent! {
    SavingsPlansUtilizationByTime {
        time_period / set_time_period: DateInterval;
        utilization / set_utilization: SavingsPlansUtilization;
        savings / set_savings: SavingsPlansSavings;
        amortized_commitment / set_amortized_commitment: SavingsPlansAmortizedCommitment;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansUtilizationAggregates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization: Option<SavingsPlansUtilization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<SavingsPlansSavings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_commitment: Option<SavingsPlansAmortizedCommitment>,
}

fluent! {
    SavingsPlansUtilizationAggregates {
        utilization / set_utilization: SavingsPlansUtilization;
        savings / set_savings: SavingsPlansSavings;
        amortized_commitment / set_amortized_commitment: SavingsPlansAmortizedCommitment;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansUtilizationDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plan_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization: Option<SavingsPlansUtilization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<SavingsPlansSavings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_commitment: Option<SavingsPlansAmortizedCommitment>,
}

fluent! {
    SavingsPlansUtilizationDetail {
        savings_plan_arn / set_savings_plan_arn: String;
        attributes / set_attributes: {String => String};
        utilization / set_utilization: SavingsPlansUtilization;
        savings / set_savings: SavingsPlansSavings;
        amortized_commitment / set_amortized_commitment: SavingsPlansAmortizedCommitment;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_id: Option<String>,
}

fluent! {
    SavingsPlansDetails {
        region / set_region: String;
        instance_family / set_instance_family: String;
        offering_id / set_offering_id: String;
    }
}

/// One recommended Savings Plans purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansPurchaseRecommendationDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plans_details: Option<SavingsPlansDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upfront_cost: Option<String>,
    #[serde(rename = "EstimatedROI", skip_serializing_if = "Option::is_none")]
    pub estimated_roi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(rename = "EstimatedSPCost", skip_serializing_if = "Option::is_none")]
    pub estimated_sp_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_on_demand_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_on_demand_cost_with_current_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_savings_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_savings_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_commitment_to_purchase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_average_utilization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_savings_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_minimum_hourly_on_demand_spend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_maximum_hourly_on_demand_spend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_average_hourly_on_demand_spend: Option<String>,
}

fluent! {
    SavingsPlansPurchaseRecommendationDetail {
        savings_plans_details / set_savings_plans_details: SavingsPlansDetails;
        account_id / set_account_id: String;
        upfront_cost / set_upfront_cost: String;
        estimated_roi / set_estimated_roi: String;
        currency_code / set_currency_code: String;
        estimated_sp_cost / set_estimated_sp_cost: String;
        estimated_on_demand_cost / set_estimated_on_demand_cost: String;
        estimated_on_demand_cost_with_current_commitment / set_estimated_on_demand_cost_with_current_commitment: String;
        estimated_savings_amount / set_estimated_savings_amount: String;
        estimated_savings_percentage / set_estimated_savings_percentage: String;
        hourly_commitment_to_purchase / set_hourly_commitment_to_purchase: String;
        estimated_average_utilization / set_estimated_average_utilization: String;
        estimated_monthly_savings_amount / set_estimated_monthly_savings_amount: String;
        current_minimum_hourly_on_demand_spend / set_current_minimum_hourly_on_demand_spend: String;
        current_maximum_hourly_on_demand_spend / set_current_maximum_hourly_on_demand_spend: String;
        current_average_hourly_on_demand_spend / set_current_average_hourly_on_demand_spend: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansPurchaseRecommendationSummary {
    #[serde(rename = "EstimatedROI", skip_serializing_if = "Option::is_none")]
    pub estimated_roi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_total_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_on_demand_spend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_savings_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_recommendation_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_commitment_to_purchase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_commitment_to_purchase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_savings_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_savings_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_on_demand_cost_with_current_commitment: Option<String>,
}

fluent! {
    SavingsPlansPurchaseRecommendationSummary {
        estimated_roi / set_estimated_roi: String;
        currency_code / set_currency_code: String;
        estimated_total_cost / set_estimated_total_cost: String;
        current_on_demand_spend / set_current_on_demand_spend: String;
        estimated_savings_amount / set_estimated_savings_amount: String;
        total_recommendation_count / set_total_recommendation_count: String;
        daily_commitment_to_purchase / set_daily_commitment_to_purchase: String;
        hourly_commitment_to_purchase / set_hourly_commitment_to_purchase: String;
        estimated_savings_percentage / set_estimated_savings_percentage: String;
        estimated_monthly_savings_amount / set_estimated_monthly_savings_amount: String;
        estimated_on_demand_cost_with_current_commitment / set_estimated_on_demand_cost_with_current_commitment: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansPurchaseRecommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_scope: Option<AccountScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plans_type: Option<SupportedSavingsPlansType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_in_years: Option<TermInYears>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_option: Option<PaymentOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookback_period_in_days: Option<LookbackPeriodInDays>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plans_purchase_recommendation_details: Option<Vec<SavingsPlansPurchaseRecommendationDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plans_purchase_recommendation_summary: Option<SavingsPlansPurchaseRecommendationSummary>,
}

fluent! {
    SavingsPlansPurchaseRecommendation {
        account_scope / set_account_scope: AccountScope;
        savings_plans_type / set_savings_plans_type: SupportedSavingsPlansType;
        term_in_years / set_term_in_years: TermInYears;
        payment_option / set_payment_option: PaymentOption;
        lookback_period_in_days / set_lookback_period_in_days: LookbackPeriodInDays;
        savings_plans_purchase_recommendation_details / set_savings_plans_purchase_recommendation_details: [SavingsPlansPurchaseRecommendationDetail];
        savings_plans_purchase_recommendation_summary / set_savings_plans_purchase_recommendation_summary: SavingsPlansPurchaseRecommendationSummary;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingsPlansPurchaseRecommendationMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_metadata: Option<String>,
}

fluent! {
    SavingsPlansPurchaseRecommendationMetadata {
        recommendation_id / set_recommendation_id: String;
        generation_timestamp / set_generation_timestamp: String;
        additional_metadata / set_additional_metadata: String;
    }
}

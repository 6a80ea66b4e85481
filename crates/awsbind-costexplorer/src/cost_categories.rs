//! Cost Category definitions.

use crate::types::{CostCategory, CostCategoryReference, CostCategoryRule, CostCategoryRuleVersion};
use crate::{JSON_VERSION, TARGET_PREFIX};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{aws_json_request, require, ProtocolRequest};
use serde::{Deserialize, Serialize};

// ── CreateCostCategoryDefinition ──────────────────────────────────────

/// Creates a cost category with its rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCostCategoryDefinitionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_version: Option<CostCategoryRuleVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<CostCategoryRule>>,
}

fluent! {
    CreateCostCategoryDefinitionRequest {
        name / set_name: String;
        rule_version / set_rule_version: CostCategoryRuleVersion;
        rules / set_rules: [CostCategoryRule];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCostCategoryDefinitionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_category_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_start: Option<String>,
}

fluent! {
    CreateCostCategoryDefinitionResult {
        cost_category_arn / set_cost_category_arn: String;
        effective_start / set_effective_start: String;
    }
}

impl Operation for CreateCostCategoryDefinitionRequest {
    type Output = CreateCostCategoryDefinitionResult;
    const NAME: &'static str = "CreateCostCategoryDefinition";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "Name", &self.name)?;
        require(Self::NAME, "RuleVersion", &self.rule_version)?;
        require(Self::NAME, "Rules", &self.rules)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── DeleteCostCategoryDefinition ──────────────────────────────────────

/// Deletes a cost category; past data keeps its categorization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCostCategoryDefinitionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_category_arn: Option<String>,
}

fluent! {
    DeleteCostCategoryDefinitionRequest {
        cost_category_arn / set_cost_category_arn: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCostCategoryDefinitionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_category_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_end: Option<String>,
}

fluent! {
    DeleteCostCategoryDefinitionResult {
        cost_category_arn / set_cost_category_arn: String;
        effective_end / set_effective_end: String;
    }
}

impl Operation for DeleteCostCategoryDefinitionRequest {
    type Output = DeleteCostCategoryDefinitionResult;
    const NAME: &'static str = "DeleteCostCategoryDefinition";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "CostCategoryArn", &self.cost_category_arn)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── DescribeCostCategoryDefinition ────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCostCategoryDefinitionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_category_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_on: Option<String>,
}

fluent! {
    DescribeCostCategoryDefinitionRequest {
        cost_category_arn / set_cost_category_arn: String;
        effective_on / set_effective_on: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCostCategoryDefinitionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_category: Option<CostCategory>,
}

fluent! {
    DescribeCostCategoryDefinitionResult {
        cost_category / set_cost_category: CostCategory;
    }
}

impl Operation for DescribeCostCategoryDefinitionRequest {
    type Output = DescribeCostCategoryDefinitionResult;
    const NAME: &'static str = "DescribeCostCategoryDefinition";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "CostCategoryArn", &self.cost_category_arn)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── ListCostCategoryDefinitions ───────────────────────────────────────

/// Lists cost categories, effective now or at `EffectiveOn`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCostCategoryDefinitionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListCostCategoryDefinitionsRequest {
        effective_on / set_effective_on: String;
        next_token / set_next_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCostCategoryDefinitionsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_category_references: Option<Vec<CostCategoryReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListCostCategoryDefinitionsResult {
        cost_category_references / set_cost_category_references: [CostCategoryReference];
        next_token / set_next_token: String;
    }
}

impl Operation for ListCostCategoryDefinitionsRequest {
    type Output = ListCostCategoryDefinitionsResult;
    const NAME: &'static str = "ListCostCategoryDefinitions";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

// ── UpdateCostCategoryDefinition ──────────────────────────────────────

/// Replaces the rules of a cost category from the current month on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCostCategoryDefinitionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_category_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_version: Option<CostCategoryRuleVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<CostCategoryRule>>,
}

fluent! {
    UpdateCostCategoryDefinitionRequest {
        cost_category_arn / set_cost_category_arn: String;
        rule_version / set_rule_version: CostCategoryRuleVersion;
        rules / set_rules: [CostCategoryRule];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCostCategoryDefinitionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_category_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_start: Option<String>,
}

fluent! {
    UpdateCostCategoryDefinitionResult {
        cost_category_arn / set_cost_category_arn: String;
        effective_start / set_effective_start: String;
    }
}

impl Operation for UpdateCostCategoryDefinitionRequest {
    type Output = UpdateCostCategoryDefinitionResult;
    const NAME: &'static str = "UpdateCostCategoryDefinition";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "CostCategoryArn", &self.cost_category_arn)?;
        require(Self::NAME, "RuleVersion", &self.rule_version)?;
        require(Self::NAME, "Rules", &self.rules)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dimension, DimensionValues, Expression};

    fn rule() -> CostCategoryRule {
        CostCategoryRule::default().value("Security").rule(
            Expression::default().dimensions(
                DimensionValues::default()
                    .key(Dimension::Service)
                    .values(["Amazon GuardDuty"]),
            ),
        )
    }

    #[test]
    fn create_body_uses_dotted_rule_version() {
        let req = CreateCostCategoryDefinitionRequest::default()
            .name("Teams")
            .rule_version(CostCategoryRuleVersion::CostCategoryExpressionV1)
            .rules([rule()])
            .marshall()
            .unwrap();
        assert_eq!(
            req.headers["x-amz-target"],
            "AWSInsightsIndexService.CreateCostCategoryDefinition"
        );
        let json: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
        assert_eq!(json["RuleVersion"], "CostCategoryExpression.v1");
        assert_eq!(json["Rules"][0]["Value"], "Security");
        assert_eq!(json["Rules"][0]["Rule"]["Dimensions"]["Key"], "SERVICE");
    }

    #[test]
    fn update_requires_rules() {
        let err = UpdateCostCategoryDefinitionRequest::default()
            .cost_category_arn("arn:aws:ce::123456789012:costcategory/abc")
            .rule_version(CostCategoryRuleVersion::CostCategoryExpressionV1)
            .marshall()
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingMember { member: "Rules", .. }));
    }

    #[test]
    fn list_takes_no_required_members() {
        let req = ListCostCategoryDefinitionsRequest::default().marshall().unwrap();
        assert_eq!(req.body_text(), "{}");
    }

    #[test]
    fn list_result_parses() {
        let out: ListCostCategoryDefinitionsResult = serde_json::from_str(
            r#"{"CostCategoryReferences":[{"CostCategoryArn":"arn:aws:ce::123456789012:costcategory/abc",
                "Name":"Teams","EffectiveStart":"2020-01-01T00:00:00Z","NumberOfRules":3}]}"#,
        )
        .unwrap();
        let first = &out.cost_category_references.unwrap()[0];
        assert_eq!(first.number_of_rules, Some(3));
        assert_eq!(first.effective_end, None);
    }
}

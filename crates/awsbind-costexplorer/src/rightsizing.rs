//! EC2 rightsizing recommendations.

use crate::types::{
    Expression, RightsizingRecommendation, RightsizingRecommendationConfiguration,
    RightsizingRecommendationMetadata, RightsizingRecommendationSummary,
};
use crate::{JSON_VERSION, TARGET_PREFIX};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{aws_json_request, require, ProtocolRequest};
use serde::{Deserialize, Serialize};

// ── GetRightsizingRecommendation ──────────────────────────────────────

/// Recommends modifying or terminating underused EC2 instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRightsizingRecommendationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<RightsizingRecommendationConfiguration>,
    /// Only `AmazonEC2` is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fluent! {
    GetRightsizingRecommendationRequest {
        filter / set_filter: Expression;
        configuration / set_configuration: RightsizingRecommendationConfiguration;
        service / set_service: String;
        page_size / set_page_size: i32;
        next_page_token / set_next_page_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRightsizingRecommendationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RightsizingRecommendationMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RightsizingRecommendationSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rightsizing_recommendations: Option<Vec<RightsizingRecommendation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<RightsizingRecommendationConfiguration>,
}

fluent! {
    GetRightsizingRecommendationResult {
        metadata / set_metadata: RightsizingRecommendationMetadata;
        summary / set_summary: RightsizingRecommendationSummary;
        rightsizing_recommendations / set_rightsizing_recommendations: [RightsizingRecommendation];
        next_page_token / set_next_page_token: String;
        configuration / set_configuration: RightsizingRecommendationConfiguration;
    }
}

impl Operation for GetRightsizingRecommendationRequest {
    type Output = GetRightsizingRecommendationResult;
    const NAME: &'static str = "GetRightsizingRecommendation";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "Service", &self.service)?;
        aws_json_request(Self::NAME, TARGET_PREFIX, JSON_VERSION, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RecommendationTarget, RightsizingType};

    #[test]
    fn configuration_body() {
        let req = GetRightsizingRecommendationRequest::default()
            .service("AmazonEC2")
            .configuration(
                RightsizingRecommendationConfiguration::default()
                    .recommendation_target(RecommendationTarget::CrossInstanceFamily)
                    .benefits_considered(true),
            )
            .marshall()
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
        assert_eq!(json["Service"], "AmazonEC2");
        assert_eq!(json["Configuration"]["RecommendationTarget"], "CROSS_INSTANCE_FAMILY");
    }

    #[test]
    fn recommendation_result_parses() {
        let out: GetRightsizingRecommendationResult = serde_json::from_str(
            r#"{"Summary":{"TotalRecommendationCount":"1","SavingsCurrencyCode":"USD"},
                "RightsizingRecommendations":[{"AccountId":"123456789012","RightsizingType":"TERMINATE",
                "CurrentInstance":{"ResourceId":"i-0abc","ResourceDetails":{"EC2ResourceDetails":{"InstanceType":"m5.large"}}},
                "TerminateRecommendationDetail":{"EstimatedMonthlySavings":"70.08","CurrencyCode":"USD"}}]}"#,
        )
        .unwrap();
        let rec = &out.rightsizing_recommendations.unwrap()[0];
        assert_eq!(rec.rightsizing_type, Some(RightsizingType::Terminate));
        let instance_type = rec
            .current_instance
            .as_ref()
            .and_then(|c| c.resource_details.as_ref())
            .and_then(|d| d.ec2_resource_details.as_ref())
            .and_then(|e| e.instance_type.as_deref());
        assert_eq!(instance_type, Some("m5.large"));
        assert_eq!(rec.modify_recommendation_detail, None);
    }
}

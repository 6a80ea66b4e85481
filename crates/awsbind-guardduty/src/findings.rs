//! Findings: retrieval, statistics, archiving and feedback.

use crate::types::{
    Feedback, Finding, FindingCriteria, FindingStatisticType, FindingStatistics, SortCriteria,
};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::http::HttpMethod;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{require, ProtocolRequest, RestJsonRequest};
use serde::{Deserialize, Serialize};

// ── ArchiveFindings ───────────────────────────────────────────────────

/// Archives findings by ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveFindingsRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_ids: Option<Vec<String>>,
}

fluent! {
    ArchiveFindingsRequest {
        detector_id / set_detector_id: String;
        finding_ids / set_finding_ids: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveFindingsResult {}

impl Operation for ArchiveFindingsRequest {
    type Output = ArchiveFindingsResult;
    const NAME: &'static str = "ArchiveFindings";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "findingIds", &self.finding_ids)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/findings/archive")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── CreateSampleFindings ──────────────────────────────────────────────

/// Generates example findings of the given types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSampleFindingsRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_types: Option<Vec<String>>,
}

fluent! {
    CreateSampleFindingsRequest {
        detector_id / set_detector_id: String;
        finding_types / set_finding_types: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSampleFindingsResult {}

impl Operation for CreateSampleFindingsRequest {
    type Output = CreateSampleFindingsResult;
    const NAME: &'static str = "CreateSampleFindings";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/findings/create")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── GetFindings ───────────────────────────────────────────────────────

/// Describes findings by ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFindingsRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<SortCriteria>,
}

fluent! {
    GetFindingsRequest {
        detector_id / set_detector_id: String;
        finding_ids / set_finding_ids: [String];
        sort_criteria / set_sort_criteria: SortCriteria;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFindingsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub findings: Option<Vec<Finding>>,
}

fluent! {
    GetFindingsResult {
        findings / set_findings: [Finding];
    }
}

impl Operation for GetFindingsRequest {
    type Output = GetFindingsResult;
    const NAME: &'static str = "GetFindings";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "findingIds", &self.finding_ids)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/findings/get")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── GetFindingsStatistics ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFindingsStatisticsRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_statistic_types: Option<Vec<FindingStatisticType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_criteria: Option<FindingCriteria>,
}

fluent! {
    GetFindingsStatisticsRequest {
        detector_id / set_detector_id: String;
        finding_statistic_types / set_finding_statistic_types: [FindingStatisticType];
        finding_criteria / set_finding_criteria: FindingCriteria;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFindingsStatisticsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_statistics: Option<FindingStatistics>,
}

fluent! {
    GetFindingsStatisticsResult {
        finding_statistics / set_finding_statistics: FindingStatistics;
    }
}

impl Operation for GetFindingsStatisticsRequest {
    type Output = GetFindingsStatisticsResult;
    const NAME: &'static str = "GetFindingsStatistics";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "findingStatisticTypes", &self.finding_statistic_types)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/findings/statistics")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── ListFindings ──────────────────────────────────────────────────────

/// Lists finding IDs matching the criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFindingsRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_criteria: Option<FindingCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<SortCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListFindingsRequest {
        detector_id / set_detector_id: String;
        finding_criteria / set_finding_criteria: FindingCriteria;
        sort_criteria / set_sort_criteria: SortCriteria;
        max_results / set_max_results: i32;
        next_token / set_next_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFindingsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListFindingsResult {
        finding_ids / set_finding_ids: [String];
        next_token / set_next_token: String;
    }
}

impl Operation for ListFindingsRequest {
    type Output = ListFindingsResult;
    const NAME: &'static str = "ListFindings";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/findings")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── UnarchiveFindings ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnarchiveFindingsRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_ids: Option<Vec<String>>,
}

fluent! {
    UnarchiveFindingsRequest {
        detector_id / set_detector_id: String;
        finding_ids / set_finding_ids: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnarchiveFindingsResult {}

impl Operation for UnarchiveFindingsRequest {
    type Output = UnarchiveFindingsResult;
    const NAME: &'static str = "UnarchiveFindings";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "findingIds", &self.finding_ids)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/findings/unarchive")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── UpdateFindingsFeedback ────────────────────────────────────────────

/// Marks findings as useful or not useful.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFindingsFeedbackRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

fluent! {
    UpdateFindingsFeedbackRequest {
        detector_id / set_detector_id: String;
        finding_ids / set_finding_ids: [String];
        feedback / set_feedback: Feedback;
        comments / set_comments: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFindingsFeedbackResult {}

impl Operation for UpdateFindingsFeedbackRequest {
    type Output = UpdateFindingsFeedbackResult;
    const NAME: &'static str = "UpdateFindingsFeedback";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "findingIds", &self.finding_ids)?;
        require(Self::NAME, "feedback", &self.feedback)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/findings/feedback")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Condition, OrderBy};
    use serde_json::{json, Value};

    fn body(req: &ProtocolRequest) -> Value {
        serde_json::from_slice(&req.body).unwrap()
    }

    #[test]
    fn finding_ids_builder_appends() {
        let req = ArchiveFindingsRequest::default()
            .detector_id("d1")
            .finding_ids(["a"])
            .finding_ids(["b", "c"]);
        assert_eq!(
            req.finding_ids,
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );

        let mut req = req;
        req.set_finding_ids(Some(vec!["z".to_string()]));
        assert_eq!(req.finding_ids, Some(vec!["z".to_string()]));
        req.set_finding_ids(None);
        assert!(req.marshall().is_err());
    }

    #[test]
    fn archive_body_round_trips() {
        let req = ArchiveFindingsRequest::default()
            .detector_id("d1")
            .finding_ids(["f1", "f2"]);
        let wire = req.marshall().unwrap();
        assert_eq!(wire.path, "/detector/d1/findings/archive");

        let mut back: ArchiveFindingsRequest = serde_json::from_slice(&wire.body).unwrap();
        assert_eq!(back.detector_id, None);
        back.set_detector_id(Some("d1".to_string()));
        assert_eq!(back, req);
    }

    #[test]
    fn list_findings_criteria_shape() {
        let criteria = FindingCriteria::default()
            .criterion("severity", Condition::default().greater_than_or_equal(7))
            .criterion("service.archived", Condition::default().equals(["false"]));
        let req = ListFindingsRequest::default()
            .detector_id("d1")
            .finding_criteria(criteria)
            .sort_criteria(
                SortCriteria::default()
                    .attribute_name("updatedAt")
                    .order_by(OrderBy::Desc),
            )
            .max_results(50)
            .marshall()
            .unwrap();

        let json = body(&req);
        assert_eq!(json["findingCriteria"]["criterion"]["severity"], json!({ "greaterThanOrEqual": 7 }));
        assert_eq!(
            json["findingCriteria"]["criterion"]["service.archived"]["equals"],
            json!(["false"])
        );
        assert_eq!(json["sortCriteria"]["orderBy"], "DESC");
        assert_eq!(json["maxResults"], 50);
        assert!(json.get("nextToken").is_none());
    }

    #[test]
    fn statistics_types_required() {
        let err = GetFindingsStatisticsRequest::default()
            .detector_id("d1")
            .marshall()
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::MissingMember {
                member: "findingStatisticTypes",
                ..
            }
        ));

        let req = GetFindingsStatisticsRequest::default()
            .detector_id("d1")
            .finding_statistic_types([FindingStatisticType::CountBySeverity])
            .marshall()
            .unwrap();
        assert_eq!(body(&req), json!({ "findingStatisticTypes": ["COUNT_BY_SEVERITY"] }));
    }

    #[test]
    fn feedback_requires_value() {
        let req = UpdateFindingsFeedbackRequest::default()
            .detector_id("d1")
            .finding_ids(["f1"]);
        assert!(matches!(
            req.marshall(),
            Err(ClientError::MissingMember {
                member: "feedback",
                ..
            })
        ));
        let wire = req
            .feedback(Feedback::NotUseful)
            .comments("known scanner")
            .marshall()
            .unwrap();
        assert_eq!(body(&wire)["feedback"], "NOT_USEFUL");
    }

    #[test]
    fn get_findings_result_parses_nested_finding() {
        let out: GetFindingsResult = serde_json::from_value(json!({
            "findings": [{
                "accountId": "123456789012",
                "arn": "arn:aws:guardduty:us-east-1:123456789012:detector/d1/finding/f1",
                "createdAt": "2020-05-01T10:00:00.000Z",
                "id": "f1",
                "region": "us-east-1",
                "severity": 8.0,
                "type": "Recon:EC2/PortProbeUnprotectedPort",
                "resource": {
                    "resourceType": "Instance",
                    "instanceDetails": { "instanceId": "i-0abc", "instanceType": "t3.micro" }
                },
                "service": {
                    "archived": false,
                    "count": 4,
                    "action": {
                        "actionType": "NETWORK_CONNECTION",
                        "networkConnectionAction": {
                            "blocked": false,
                            "connectionDirection": "INBOUND",
                            "remoteIpDetails": { "ipAddressV4": "198.51.100.7" }
                        }
                    }
                }
            }]
        }))
        .unwrap();

        let finding = &out.findings.unwrap()[0];
        assert_eq!(finding.r#type.as_deref(), Some("Recon:EC2/PortProbeUnprotectedPort"));
        assert_eq!(finding.severity, Some(8.0));
        assert_eq!(finding.title, None);
        let resource = finding.resource.as_ref().unwrap();
        assert_eq!(
            resource.instance_details.as_ref().unwrap().instance_id.as_deref(),
            Some("i-0abc")
        );
        let action = finding.service.as_ref().unwrap().action.as_ref().unwrap();
        let remote = action
            .network_connection_action
            .as_ref()
            .and_then(|a| a.remote_ip_details.as_ref())
            .and_then(|r| r.ip_address_v4.as_deref());
        assert_eq!(remote, Some("198.51.100.7"));
    }
}

//! Detector lifecycle.

use crate::types::{DetectorStatus, FindingPublishingFrequency};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::http::HttpMethod;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{idempotency_token, require, ProtocolRequest, RestJsonRequest};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── CreateDetector ────────────────────────────────────────────────────

/// Creates a detector, the GuardDuty resource of one account in one region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDetectorRequest {
    /// Whether the detector starts enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_publishing_frequency: Option<FindingPublishingFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

fluent! {
    CreateDetectorRequest {
        enable / set_enable: bool;
        client_token / set_client_token: String;
        finding_publishing_frequency / set_finding_publishing_frequency: FindingPublishingFrequency;
        tags / set_tags: {String => String};
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDetectorResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detector_id: Option<String>,
}

fluent! {
    CreateDetectorResult {
        detector_id / set_detector_id: String;
    }
}

impl Operation for CreateDetectorRequest {
    type Output = CreateDetectorResult;
    const NAME: &'static str = "CreateDetector";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "enable", &self.enable)?;
        let body = Self {
            client_token: Some(idempotency_token(self.client_token.as_deref())),
            ..self.clone()
        };
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector")
            .body(&body)?
            .build())
    }
}

// ── DeleteDetector ────────────────────────────────────────────────────

/// Deletes a detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDetectorRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
}

fluent! {
    DeleteDetectorRequest {
        detector_id / set_detector_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDetectorResult {}

impl Operation for DeleteDetectorRequest {
    type Output = DeleteDetectorResult;
    const NAME: &'static str = "DeleteDetector";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Delete, "/detector/{detectorId}")
            .label("detectorId", self.detector_id.as_deref())?
            .build())
    }
}

// ── GetDetector ───────────────────────────────────────────────────────

/// Retrieves a detector's settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDetectorRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
}

fluent! {
    GetDetectorRequest {
        detector_id / set_detector_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDetectorResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_publishing_frequency: Option<FindingPublishingFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DetectorStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

fluent! {
    GetDetectorResult {
        created_at / set_created_at: String;
        finding_publishing_frequency / set_finding_publishing_frequency: FindingPublishingFrequency;
        service_role / set_service_role: String;
        status / set_status: DetectorStatus;
        updated_at / set_updated_at: String;
        tags / set_tags: {String => String};
    }
}

impl Operation for GetDetectorRequest {
    type Output = GetDetectorResult;
    const NAME: &'static str = "GetDetector";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}")
            .label("detectorId", self.detector_id.as_deref())?
            .build())
    }
}

// ── ListDetectors ─────────────────────────────────────────────────────

/// Lists detector IDs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDetectorsRequest {
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

fluent! {
    ListDetectorsRequest {
        max_results / set_max_results: i32;
        next_token / set_next_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDetectorsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detector_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListDetectorsResult {
        detector_ids / set_detector_ids: [String];
        next_token / set_next_token: String;
    }
}

impl Operation for ListDetectorsRequest {
    type Output = ListDetectorsResult;
    const NAME: &'static str = "ListDetectors";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector")
            .query("maxResults", self.max_results.as_ref())
            .query("nextToken", self.next_token.as_ref())
            .build())
    }
}

// ── UpdateDetector ────────────────────────────────────────────────────

/// Updates a detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDetectorRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_publishing_frequency: Option<FindingPublishingFrequency>,
}

fluent! {
    UpdateDetectorRequest {
        detector_id / set_detector_id: String;
        enable / set_enable: bool;
        finding_publishing_frequency / set_finding_publishing_frequency: FindingPublishingFrequency;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDetectorResult {}

impl Operation for UpdateDetectorRequest {
    type Output = UpdateDetectorResult;
    const NAME: &'static str = "UpdateDetector";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn body(req: &ProtocolRequest) -> Value {
        serde_json::from_slice(&req.body).unwrap()
    }

    #[test]
    fn create_detector_fills_client_token() {
        let req = CreateDetectorRequest::default().enable(true).marshall().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/detector");
        assert_eq!(req.headers["content-type"], "application/json");

        let json = body(&req);
        assert_eq!(json["enable"], true);
        assert_eq!(json["clientToken"].as_str().map(str::len), Some(36));
        assert!(json.get("findingPublishingFrequency").is_none());
        assert!(json.get("tags").is_none());
    }

    #[test]
    fn create_detector_keeps_caller_token() {
        let req = CreateDetectorRequest::default()
            .enable(false)
            .client_token("retry-1")
            .finding_publishing_frequency(FindingPublishingFrequency::FifteenMinutes)
            .tags("env", "dev")
            .marshall()
            .unwrap();
        let json = body(&req);
        assert_eq!(json["clientToken"], "retry-1");
        assert_eq!(json["findingPublishingFrequency"], "FIFTEEN_MINUTES");
        assert_eq!(json["tags"]["env"], "dev");
    }

    #[test]
    fn create_detector_requires_enable() {
        let err = CreateDetectorRequest::default().marshall().unwrap_err();
        assert!(matches!(
            err,
            ClientError::MissingMember {
                operation: "CreateDetector",
                member: "enable"
            }
        ));
    }

    #[test]
    fn detector_id_goes_in_the_path_only() {
        let req = UpdateDetectorRequest::default()
            .detector_id("abc123")
            .enable(false)
            .marshall()
            .unwrap();
        assert_eq!(req.path, "/detector/abc123");
        assert_eq!(body(&req), serde_json::json!({ "enable": false }));
    }

    #[test]
    fn empty_detector_id_is_rejected() {
        for req in [
            GetDetectorRequest::default(),
            GetDetectorRequest::default().detector_id(""),
        ] {
            assert!(matches!(
                req.marshall(),
                Err(ClientError::MissingMember {
                    member: "detectorId",
                    ..
                })
            ));
        }
    }

    #[test]
    fn list_detectors_paging_in_query() {
        let req = ListDetectorsRequest::default()
            .max_results(25)
            .next_token("tok")
            .marshall()
            .unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.query,
            vec![
                ("maxResults".to_string(), "25".to_string()),
                ("nextToken".to_string(), "tok".to_string()),
            ]
        );
        assert!(req.body.is_empty());

        assert!(ListDetectorsRequest::default().marshall().unwrap().query.is_empty());
    }

    #[test]
    fn get_detector_result_tolerates_missing_members() {
        let out: GetDetectorResult = serde_json::from_str(r#"{"status":"DISABLED"}"#).unwrap();
        assert_eq!(out.status, Some(DetectorStatus::Disabled));
        assert_eq!(out.created_at, None);
        assert_eq!(out.tags, None);
    }
}

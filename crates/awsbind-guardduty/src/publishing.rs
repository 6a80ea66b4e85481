//! Finding export destinations.

use crate::types::{Destination, DestinationProperties, DestinationType, PublishingStatus};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::http::HttpMethod;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{idempotency_token, require, ProtocolRequest, RestJsonRequest};
use serde::{Deserialize, Serialize};

// ── CreatePublishingDestination ───────────────────────────────────────

/// Creates a destination that findings are exported to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublishingDestinationRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<DestinationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_properties: Option<DestinationProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

fluent! {
    CreatePublishingDestinationRequest {
        detector_id / set_detector_id: String;
        destination_type / set_destination_type: DestinationType;
        destination_properties / set_destination_properties: DestinationProperties;
        client_token / set_client_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublishingDestinationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
}

fluent! {
    CreatePublishingDestinationResult {
        destination_id / set_destination_id: String;
    }
}

impl Operation for CreatePublishingDestinationRequest {
    type Output = CreatePublishingDestinationResult;
    const NAME: &'static str = "CreatePublishingDestination";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "destinationType", &self.destination_type)?;
        require(Self::NAME, "destinationProperties", &self.destination_properties)?;
        let body = Self {
            client_token: Some(idempotency_token(self.client_token.as_deref())),
            ..self.clone()
        };
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/publishingDestination")
            .label("detectorId", self.detector_id.as_deref())?
            .body(&body)?
            .build())
    }
}

// ── DeletePublishingDestination ───────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePublishingDestinationRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub destination_id: Option<String>,
}

fluent! {
    DeletePublishingDestinationRequest {
        detector_id / set_detector_id: String;
        destination_id / set_destination_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePublishingDestinationResult {}

impl Operation for DeletePublishingDestinationRequest {
    type Output = DeletePublishingDestinationResult;
    const NAME: &'static str = "DeletePublishingDestination";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Delete, "/detector/{detectorId}/publishingDestination/{destinationId}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("destinationId", self.destination_id.as_deref())?
            .build())
    }
}

// ── DescribePublishingDestination ─────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribePublishingDestinationRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub destination_id: Option<String>,
}

fluent! {
    DescribePublishingDestinationRequest {
        detector_id / set_detector_id: String;
        destination_id / set_destination_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribePublishingDestinationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<DestinationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishing_failure_start_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_properties: Option<DestinationProperties>,
}

fluent! {
    DescribePublishingDestinationResult {
        destination_id / set_destination_id: String;
        destination_type / set_destination_type: DestinationType;
        status / set_status: PublishingStatus;
        publishing_failure_start_timestamp / set_publishing_failure_start_timestamp: i64;
        destination_properties / set_destination_properties: DestinationProperties;
    }
}

impl Operation for DescribePublishingDestinationRequest {
    type Output = DescribePublishingDestinationResult;
    const NAME: &'static str = "DescribePublishingDestination";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}/publishingDestination/{destinationId}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("destinationId", self.destination_id.as_deref())?
            .build())
    }
}

// ── ListPublishingDestinations ────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPublishingDestinationsRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

fluent! {
    ListPublishingDestinationsRequest {
        detector_id / set_detector_id: String;
        max_results / set_max_results: i32;
        next_token / set_next_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPublishingDestinationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<Destination>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListPublishingDestinationsResult {
        destinations / set_destinations: [Destination];
        next_token / set_next_token: String;
    }
}

impl Operation for ListPublishingDestinationsRequest {
    type Output = ListPublishingDestinationsResult;
    const NAME: &'static str = "ListPublishingDestinations";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}/publishingDestination")
            .label("detectorId", self.detector_id.as_deref())?
            .query("maxResults", self.max_results.as_ref())
            .query("nextToken", self.next_token.as_ref())
            .build())
    }
}

// ── UpdatePublishingDestination ───────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePublishingDestinationRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub destination_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_properties: Option<DestinationProperties>,
}

fluent! {
    UpdatePublishingDestinationRequest {
        detector_id / set_detector_id: String;
        destination_id / set_destination_id: String;
        destination_properties / set_destination_properties: DestinationProperties;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePublishingDestinationResult {}

impl Operation for UpdatePublishingDestinationRequest {
    type Output = UpdatePublishingDestinationResult;
    const NAME: &'static str = "UpdatePublishingDestination";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/publishingDestination/{destinationId}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("destinationId", self.destination_id.as_deref())?
            .body(self)?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_destination_body() {
        let req = CreatePublishingDestinationRequest::default()
            .detector_id("d1")
            .destination_type(DestinationType::S3)
            .destination_properties(
                DestinationProperties::default()
                    .destination_arn("arn:aws:s3:::findings-bucket")
                    .kms_key_arn("arn:aws:kms:us-east-1:123456789012:key/k1"),
            )
            .client_token("tok")
            .marshall()
            .unwrap();
        assert_eq!(req.path, "/detector/d1/publishingDestination");
        let json: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
        assert_eq!(json["destinationType"], "S3");
        assert_eq!(json["destinationProperties"]["destinationArn"], "arn:aws:s3:::findings-bucket");
        assert_eq!(json["clientToken"], "tok");
    }

    #[test]
    fn describe_destination_result() {
        let out: DescribePublishingDestinationResult = serde_json::from_str(
            r#"{"destinationId":"dest1","destinationType":"S3","status":"PUBLISHING",
                "publishingFailureStartTimestamp":1588327200000,
                "destinationProperties":{"destinationArn":"arn:aws:s3:::b"}}"#,
        )
        .unwrap();
        assert_eq!(out.status, Some(PublishingStatus::Publishing));
        assert_eq!(out.publishing_failure_start_timestamp, Some(1_588_327_200_000));
        assert_eq!(
            out.destination_properties.unwrap().kms_key_arn,
            None
        );
    }

    #[test]
    fn delete_destination_needs_both_labels() {
        let err = DeletePublishingDestinationRequest::default()
            .detector_id("d1")
            .marshall()
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingMember { member: "destinationId", .. }));
    }
}

//! Threat intelligence lists.

use crate::types::{ThreatIntelSetFormat, ThreatIntelSetStatus};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::http::HttpMethod;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{idempotency_token, require, ProtocolRequest, RestJsonRequest};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── CreateThreatIntelSet ──────────────────────────────────────────────

/// Uploads a list of known malicious IP addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreatIntelSetRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ThreatIntelSetFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

fluent! {
    CreateThreatIntelSetRequest {
        detector_id / set_detector_id: String;
        name / set_name: String;
        format / set_format: ThreatIntelSetFormat;
        location / set_location: String;
        activate / set_activate: bool;
        client_token / set_client_token: String;
        tags / set_tags: {String => String};
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreatIntelSetResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_intel_set_id: Option<String>,
}

fluent! {
    CreateThreatIntelSetResult {
        threat_intel_set_id / set_threat_intel_set_id: String;
    }
}

impl Operation for CreateThreatIntelSetRequest {
    type Output = CreateThreatIntelSetResult;
    const NAME: &'static str = "CreateThreatIntelSet";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "name", &self.name)?;
        require(Self::NAME, "format", &self.format)?;
        require(Self::NAME, "location", &self.location)?;
        require(Self::NAME, "activate", &self.activate)?;
        let body = Self {
            client_token: Some(idempotency_token(self.client_token.as_deref())),
            ..self.clone()
        };
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/threatintelset")
            .label("detectorId", self.detector_id.as_deref())?
            .body(&body)?
            .build())
    }
}

// ── DeleteThreatIntelSet ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteThreatIntelSetRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub threat_intel_set_id: Option<String>,
}

fluent! {
    DeleteThreatIntelSetRequest {
        detector_id / set_detector_id: String;
        threat_intel_set_id / set_threat_intel_set_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteThreatIntelSetResult {}

impl Operation for DeleteThreatIntelSetRequest {
    type Output = DeleteThreatIntelSetResult;
    const NAME: &'static str = "DeleteThreatIntelSet";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Delete, "/detector/{detectorId}/threatintelset/{threatIntelSetId}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("threatIntelSetId", self.threat_intel_set_id.as_deref())?
            .build())
    }
}

// ── GetThreatIntelSet ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetThreatIntelSetRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub threat_intel_set_id: Option<String>,
}

fluent! {
    GetThreatIntelSetRequest {
        detector_id / set_detector_id: String;
        threat_intel_set_id / set_threat_intel_set_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetThreatIntelSetResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ThreatIntelSetFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ThreatIntelSetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

fluent! {
    GetThreatIntelSetResult {
        name / set_name: String;
        format / set_format: ThreatIntelSetFormat;
        location / set_location: String;
        status / set_status: ThreatIntelSetStatus;
        tags / set_tags: {String => String};
    }
}

impl Operation for GetThreatIntelSetRequest {
    type Output = GetThreatIntelSetResult;
    const NAME: &'static str = "GetThreatIntelSet";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}/threatintelset/{threatIntelSetId}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("threatIntelSetId", self.threat_intel_set_id.as_deref())?
            .build())
    }
}

// ── ListThreatIntelSets ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListThreatIntelSetsRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

fluent! {
    ListThreatIntelSetsRequest {
        detector_id / set_detector_id: String;
        max_results / set_max_results: i32;
        next_token / set_next_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListThreatIntelSetsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_intel_set_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListThreatIntelSetsResult {
        threat_intel_set_ids / set_threat_intel_set_ids: [String];
        next_token / set_next_token: String;
    }
}

impl Operation for ListThreatIntelSetsRequest {
    type Output = ListThreatIntelSetsResult;
    const NAME: &'static str = "ListThreatIntelSets";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}/threatintelset")
            .label("detectorId", self.detector_id.as_deref())?
            .query("maxResults", self.max_results.as_ref())
            .query("nextToken", self.next_token.as_ref())
            .build())
    }
}

// ── UpdateThreatIntelSet ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThreatIntelSetRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub threat_intel_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activate: Option<bool>,
}

fluent! {
    UpdateThreatIntelSetRequest {
        detector_id / set_detector_id: String;
        threat_intel_set_id / set_threat_intel_set_id: String;
        name / set_name: String;
        location / set_location: String;
        activate / set_activate: bool;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThreatIntelSetResult {}

impl Operation for UpdateThreatIntelSetRequest {
    type Output = UpdateThreatIntelSetResult;
    const NAME: &'static str = "UpdateThreatIntelSet";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/threatintelset/{threatIntelSetId}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("threatIntelSetId", self.threat_intel_set_id.as_deref())?
            .body(self)?
            .build())
    }
}

//! Trusted IP lists.

use crate::types::{IpSetFormat, IpSetStatus};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::http::HttpMethod;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{idempotency_token, require, ProtocolRequest, RestJsonRequest};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── CreateIPSet ───────────────────────────────────────────────────────

/// Uploads a list of trusted IP addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIPSetRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<IpSetFormat>,
    /// URI of the file, e.g. an S3 object URL.
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
    CreateIPSetRequest {
        detector_id / set_detector_id: String;
        name / set_name: String;
        format / set_format: IpSetFormat;
        location / set_location: String;
        activate / set_activate: bool;
        client_token / set_client_token: String;
        tags / set_tags: {String => String};
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIPSetResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_set_id: Option<String>,
}

fluent! {
    CreateIPSetResult {
        ip_set_id / set_ip_set_id: String;
    }
}

impl Operation for CreateIPSetRequest {
    type Output = CreateIPSetResult;
    const NAME: &'static str = "CreateIPSet";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "name", &self.name)?;
        require(Self::NAME, "format", &self.format)?;
        require(Self::NAME, "location", &self.location)?;
        require(Self::NAME, "activate", &self.activate)?;
        let body = Self {
            client_token: Some(idempotency_token(self.client_token.as_deref())),
            ..self.clone()
        };
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/ipset")
            .label("detectorId", self.detector_id.as_deref())?
            .body(&body)?
            .build())
    }
}

// ── DeleteIPSet ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteIPSetRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub ip_set_id: Option<String>,
}

fluent! {
    DeleteIPSetRequest {
        detector_id / set_detector_id: String;
        ip_set_id / set_ip_set_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteIPSetResult {}

impl Operation for DeleteIPSetRequest {
    type Output = DeleteIPSetResult;
    const NAME: &'static str = "DeleteIPSet";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Delete, "/detector/{detectorId}/ipset/{ipSetId}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("ipSetId", self.ip_set_id.as_deref())?
            .build())
    }
}

// ── GetIPSet ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIPSetRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub ip_set_id: Option<String>,
}

fluent! {
    GetIPSetRequest {
        detector_id / set_detector_id: String;
        ip_set_id / set_ip_set_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIPSetResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<IpSetFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IpSetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

fluent! {
    GetIPSetResult {
        name / set_name: String;
        format / set_format: IpSetFormat;
        location / set_location: String;
        status / set_status: IpSetStatus;
        tags / set_tags: {String => String};
    }
}

impl Operation for GetIPSetRequest {
    type Output = GetIPSetResult;
    const NAME: &'static str = "GetIPSet";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}/ipset/{ipSetId}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("ipSetId", self.ip_set_id.as_deref())?
            .build())
    }
}

// ── ListIPSets ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIPSetsRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

fluent! {
    ListIPSetsRequest {
        detector_id / set_detector_id: String;
        max_results / set_max_results: i32;
        next_token / set_next_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIPSetsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_set_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListIPSetsResult {
        ip_set_ids / set_ip_set_ids: [String];
        next_token / set_next_token: String;
    }
}

impl Operation for ListIPSetsRequest {
    type Output = ListIPSetsResult;
    const NAME: &'static str = "ListIPSets";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}/ipset")
            .label("detectorId", self.detector_id.as_deref())?
            .query("maxResults", self.max_results.as_ref())
            .query("nextToken", self.next_token.as_ref())
            .build())
    }
}

// ── UpdateIPSet ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIPSetRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub ip_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activate: Option<bool>,
}

fluent! {
    UpdateIPSetRequest {
        detector_id / set_detector_id: String;
        ip_set_id / set_ip_set_id: String;
        name / set_name: String;
        location / set_location: String;
        activate / set_activate: bool;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIPSetResult {}

impl Operation for UpdateIPSetRequest {
    type Output = UpdateIPSetResult;
    const NAME: &'static str = "UpdateIPSet";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/ipset/{ipSetId}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("ipSetId", self.ip_set_id.as_deref())?
            .body(self)?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create() -> CreateIPSetRequest {
        CreateIPSetRequest::default()
            .detector_id("d1")
            .name("office")
            .format(IpSetFormat::Txt)
            .location("https://s3.amazonaws.com/bucket/office.txt")
            .activate(true)
    }

    #[test]
    fn create_ip_set_body() {
        let req = create().marshall().unwrap();
        assert_eq!(req.path, "/detector/d1/ipset");
        let json: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
        assert_eq!(json["format"], "TXT");
        assert_eq!(json["activate"], true);
        assert!(json["clientToken"].is_string());
        assert!(json.get("detectorId").is_none());
    }

    #[test]
    fn each_required_member_is_checked() {
        let mut req = create();
        req.set_location(None);
        assert!(matches!(
            req.marshall(),
            Err(ClientError::MissingMember { member: "location", .. })
        ));
        let mut req = create();
        req.set_detector_id(None);
        assert!(matches!(
            req.marshall(),
            Err(ClientError::MissingMember { member: "detectorId", .. })
        ));
    }

    #[test]
    fn status_parses_strictly() {
        assert_eq!("ACTIVE".parse::<IpSetStatus>().unwrap(), IpSetStatus::Active);
        let err = "BOGUS".parse::<IpSetStatus>().unwrap_err();
        assert_eq!(err.type_name, "IpSetStatus");
    }

    #[test]
    fn newer_status_from_the_service_is_kept() {
        let out: GetIPSetResult =
            serde_json::from_str(r#"{"status":"SOME_NEW_STATUS","format":"TXT"}"#).unwrap();
        assert_eq!(out.status, Some(IpSetStatus::Unknown("SOME_NEW_STATUS".to_string())));
        assert_eq!(out.format, Some(IpSetFormat::Txt));
    }

    #[test]
    fn two_labels() {
        let req = DeleteIPSetRequest::default()
            .detector_id("d1")
            .ip_set_id("ip 1")
            .marshall()
            .unwrap();
        assert_eq!(req.path, "/detector/d1/ipset/ip%201");
        assert_eq!(req.method, HttpMethod::Delete);
    }
}

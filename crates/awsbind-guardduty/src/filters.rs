//! Saved finding filters.

use crate::types::{FilterAction, FindingCriteria};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::http::HttpMethod;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{idempotency_token, require, ProtocolRequest, RestJsonRequest};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── CreateFilter ──────────────────────────────────────────────────────

/// Creates a named filter for findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilterRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<FilterAction>,
    /// Position of the filter in the filter list, 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_criteria: Option<FindingCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

fluent! {
    CreateFilterRequest {
        detector_id / set_detector_id: String;
        name / set_name: String;
        description / set_description: String;
        action / set_action: FilterAction;
        rank / set_rank: i32;
        finding_criteria / set_finding_criteria: FindingCriteria;
        client_token / set_client_token: String;
        tags / set_tags: {String => String};
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fluent! {
    CreateFilterResult {
        name / set_name: String;
    }
}

impl Operation for CreateFilterRequest {
    type Output = CreateFilterResult;
    const NAME: &'static str = "CreateFilter";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "name", &self.name)?;
        require(Self::NAME, "findingCriteria", &self.finding_criteria)?;
        let body = Self {
            client_token: Some(idempotency_token(self.client_token.as_deref())),
            ..self.clone()
        };
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/filter")
            .label("detectorId", self.detector_id.as_deref())?
            .body(&body)?
            .build())
    }
}

// ── DeleteFilter ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFilterRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub filter_name: Option<String>,
}

fluent! {
    DeleteFilterRequest {
        detector_id / set_detector_id: String;
        filter_name / set_filter_name: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFilterResult {}

impl Operation for DeleteFilterRequest {
    type Output = DeleteFilterResult;
    const NAME: &'static str = "DeleteFilter";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Delete, "/detector/{detectorId}/filter/{filterName}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("filterName", self.filter_name.as_deref())?
            .build())
    }
}

// ── GetFilter ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFilterRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub filter_name: Option<String>,
}

fluent! {
    GetFilterRequest {
        detector_id / set_detector_id: String;
        filter_name / set_filter_name: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFilterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<FilterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_criteria: Option<FindingCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

fluent! {
    GetFilterResult {
        name / set_name: String;
        description / set_description: String;
        action / set_action: FilterAction;
        rank / set_rank: i32;
        finding_criteria / set_finding_criteria: FindingCriteria;
        tags / set_tags: {String => String};
    }
}

impl Operation for GetFilterRequest {
    type Output = GetFilterResult;
    const NAME: &'static str = "GetFilter";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}/filter/{filterName}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("filterName", self.filter_name.as_deref())?
            .build())
    }
}

// ── ListFilters ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFiltersRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

fluent! {
    ListFiltersRequest {
        detector_id / set_detector_id: String;
        max_results / set_max_results: i32;
        next_token / set_next_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFiltersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListFiltersResult {
        filter_names / set_filter_names: [String];
        next_token / set_next_token: String;
    }
}

impl Operation for ListFiltersRequest {
    type Output = ListFiltersResult;
    const NAME: &'static str = "ListFilters";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}/filter")
            .label("detectorId", self.detector_id.as_deref())?
            .query("maxResults", self.max_results.as_ref())
            .query("nextToken", self.next_token.as_ref())
            .build())
    }
}

// ── UpdateFilter ──────────────────────────────────────────────────────

/// Updates a filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilterRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<FilterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_criteria: Option<FindingCriteria>,
}

fluent! {
    UpdateFilterRequest {
        detector_id / set_detector_id: String;
        filter_name / set_filter_name: String;
        description / set_description: String;
        action / set_action: FilterAction;
        rank / set_rank: i32;
        finding_criteria / set_finding_criteria: FindingCriteria;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fluent! {
    UpdateFilterResult {
        name / set_name: String;
    }
}

impl Operation for UpdateFilterRequest {
    type Output = UpdateFilterResult;
    const NAME: &'static str = "UpdateFilter";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/filter/{filterName}")
            .label("detectorId", self.detector_id.as_deref())?
            .label("filterName", self.filter_name.as_deref())?
            .body(self)?
            .build())
    }
}

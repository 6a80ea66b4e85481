//! Request marshalling for the two JSON wire protocols.
//!
//! | Protocol    | Routing                               | Body                 |
//! |-------------|---------------------------------------|----------------------|
//! | REST-JSON   | method + path labels + query string   | `application/json`   |
//! | AWS JSON    | `POST /` + `X-Amz-Target` header      | `application/x-amz-json-1.1` |
//!
//! Marshalling is pure: it never touches credentials or the network.

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest};
use crate::signing::uri_encode;
use serde::Serialize;
use std::collections::BTreeMap;

/// A marshalled request, not yet bound to an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolRequest {
    pub operation: &'static str,
    pub method: HttpMethod,
    /// Percent-encoded path starting with `/`.
    pub path: String,
    /// Decoded query parameters, in insertion order. Keys may repeat.
    pub query: Vec<(String, String)>,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl ProtocolRequest {
    /// Attach the request to `endpoint` (scheme + authority, no trailing slash).
    pub fn into_http(self, endpoint: &str) -> HttpRequest {
        let mut url = format!("{}{}", endpoint.trim_end_matches('/'), self.path);
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", uri_encode(k), uri_encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        HttpRequest {
            method: self.method,
            url,
            headers: self.headers,
            body: self.body,
        }
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

// ── REST-JSON ───────────────────────────────────────────────────────────

/// Builder for REST-JSON requests.
///
/// ```ignore
/// RestJsonRequest::new("GetFilter", HttpMethod::Get, "/detector/{detectorId}/filter/{filterName}")
///     .label("detectorId", self.detector_id.as_deref())?
///     .label("filterName", self.filter_name.as_deref())?
///     .build()
/// ```
#[derive(Debug, Clone)]
pub struct RestJsonRequest {
    inner: ProtocolRequest,
}

impl RestJsonRequest {
    pub fn new(operation: &'static str, method: HttpMethod, path_template: &str) -> Self {
        Self {
            inner: ProtocolRequest {
                operation,
                method,
                path: path_template.to_string(),
                query: Vec::new(),
                headers: BTreeMap::new(),
                body: Vec::new(),
            },
        }
    }

    /// Substitute `{name}` in the path. Labels are required and non-empty.
    pub fn label(mut self, name: &'static str, value: Option<&str>) -> Result<Self, ClientError> {
        let value = value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ClientError::missing(self.inner.operation, name))?;
        let placeholder = format!("{{{}}}", name);
        self.inner.path = self.inner.path.replace(&placeholder, &uri_encode(value));
        Ok(self)
    }

    /// Add a query parameter when `value` is set.
    pub fn query<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.inner.query.push((name.to_string(), v.to_string()));
        }
        self
    }

    /// Add one `name=value` pair per element.
    pub fn query_list(mut self, name: &str, values: &[String]) -> Self {
        for v in values {
            self.inner.query.push((name.to_string(), v.clone()));
        }
        self
    }

    /// Serialize `body` as the JSON payload.
    pub fn body<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.inner.body = serialize(self.inner.operation, body)?;
        self.inner
            .headers
            .insert("content-type".to_string(), "application/json".to_string());
        Ok(self)
    }

    pub fn build(self) -> ProtocolRequest {
        self.inner
    }
}

// ── AWS JSON ────────────────────────────────────────────────────────────

/// Build an AWS JSON request: `POST /` with `X-Amz-Target: {prefix}.{operation}`.
pub fn aws_json_request<T: Serialize>(
    operation: &'static str,
    target_prefix: &str,
    json_version: &str,
    body: &T,
) -> Result<ProtocolRequest, ClientError> {
    let mut headers = BTreeMap::new();
    headers.insert(
        "content-type".to_string(),
        format!("application/x-amz-json-{}", json_version),
    );
    headers.insert(
        "x-amz-target".to_string(),
        format!("{}.{}", target_prefix, operation),
    );
    Ok(ProtocolRequest {
        operation,
        method: HttpMethod::Post,
        path: "/".to_string(),
        query: Vec::new(),
        headers,
        body: serialize(operation, body)?,
    })
}

// ── Shared helpers ──────────────────────────────────────────────────────

fn serialize<T: Serialize>(operation: &'static str, body: &T) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(body).map_err(|source| ClientError::Serialize { operation, source })
}

/// Fail marshalling when a required member is unset.
pub fn require<'a, T>(
    operation: &'static str,
    member: &'static str,
    value: &'a Option<T>,
) -> Result<&'a T, ClientError> {
    value
        .as_ref()
        .ok_or_else(|| ClientError::missing(operation, member))
}

/// The caller's idempotency token, or a fresh UUID v4 when unset.
pub fn idempotency_token(value: Option<&str>) -> String {
    match value {
        Some(token) => token.to_string(),
        None => uuid::Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rest_json_labels_are_encoded() {
        let req = RestJsonRequest::new("ListTagsForResource", HttpMethod::Get, "/tags/{resourceArn}")
            .label(
                "resourceArn",
                Some("arn:aws:guardduty:us-east-1:123456789012:detector/abc"),
            )
            .unwrap()
            .build();
        assert_eq!(
            req.path,
            "/tags/arn%3Aaws%3Aguardduty%3Aus-east-1%3A123456789012%3Adetector%2Fabc"
        );
        assert!(req.body.is_empty());
        assert!(!req.headers.contains_key("content-type"));
    }

    #[test]
    fn rest_json_missing_label_fails() {
        let err = RestJsonRequest::new("GetDetector", HttpMethod::Get, "/detector/{detectorId}")
            .label("detectorId", None)
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::MissingMember {
                operation: "GetDetector",
                member: "detectorId"
            }
        ));

        let err = RestJsonRequest::new("GetDetector", HttpMethod::Get, "/detector/{detectorId}")
            .label("detectorId", Some(""))
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingMember { .. }));
    }

    #[test]
    fn rest_json_query_and_body() {
        let req = RestJsonRequest::new("ListDetectors", HttpMethod::Get, "/detector")
            .query("maxResults", Some(25))
            .query::<String>("nextToken", None)
            .build();
        assert_eq!(req.query, vec![("maxResults".to_string(), "25".to_string())]);

        let req = RestJsonRequest::new("ArchiveFindings", HttpMethod::Post, "/detector/d1/findings/archive")
            .body(&json!({ "findingIds": ["a"] }))
            .unwrap()
            .build();
        assert_eq!(req.headers["content-type"], "application/json");
        assert_eq!(req.body_text(), r#"{"findingIds":["a"]}"#);
    }

    #[test]
    fn into_http_builds_url() {
        let req = RestJsonRequest::new("UntagResource", HttpMethod::Delete, "/tags/{resourceArn}")
            .label("resourceArn", Some("arn:x/y"))
            .unwrap()
            .query_list("tagKeys", &["env".to_string(), "team/owner".to_string()])
            .build()
            .into_http("https://guardduty.us-east-1.amazonaws.com/");
        assert_eq!(
            req.url,
            "https://guardduty.us-east-1.amazonaws.com/tags/arn%3Ax%2Fy?tagKeys=env&tagKeys=team%2Fowner"
        );
        assert_eq!(req.method, HttpMethod::Delete);
    }

    #[test]
    fn aws_json_headers() {
        let req = aws_json_request("GetCostAndUsage", "AWSInsightsIndexService", "1.1", &json!({})).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/");
        assert_eq!(req.headers["x-amz-target"], "AWSInsightsIndexService.GetCostAndUsage");
        assert_eq!(req.headers["content-type"], "application/x-amz-json-1.1");
        assert_eq!(req.body_text(), "{}");
    }

    #[test]
    fn require_reports_member() {
        let present = Some(3);
        assert_eq!(require("Op", "Count", &present).unwrap(), &3);
        let absent: Option<String> = None;
        let err = require("Op", "Name", &absent).unwrap_err();
        assert_eq!(err.to_string(), "Op: required member `Name` is not set");
    }

    #[test]
    fn idempotency_token_generated_when_unset() {
        assert_eq!(idempotency_token(Some("mine")), "mine");
        let a = idempotency_token(None);
        let b = idempotency_token(None);
        assert_eq!(a.len(), 36);
        assert_ne!(a, b);
    }
}

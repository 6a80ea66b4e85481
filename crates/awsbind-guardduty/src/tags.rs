//! Resource tagging.

use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::http::HttpMethod;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{require, ProtocolRequest, RestJsonRequest};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── ListTagsForResource ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceRequest {
    #[serde(skip)]
    pub resource_arn: Option<String>,
}

fluent! {
    ListTagsForResourceRequest {
        resource_arn / set_resource_arn: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

fluent! {
    ListTagsForResourceResult {
        tags / set_tags: {String => String};
    }
}

impl Operation for ListTagsForResourceRequest {
    type Output = ListTagsForResourceResult;
    const NAME: &'static str = "ListTagsForResource";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/tags/{resourceArn}")
            .label("resourceArn", self.resource_arn.as_deref())?
            .build())
    }
}

// ── TagResource ───────────────────────────────────────────────────────

/// Adds tags to a GuardDuty resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceRequest {
    #[serde(skip)]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

fluent! {
    TagResourceRequest {
        resource_arn / set_resource_arn: String;
        tags / set_tags: {String => String};
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceResult {}

impl Operation for TagResourceRequest {
    type Output = TagResourceResult;
    const NAME: &'static str = "TagResource";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "tags", &self.tags)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/tags/{resourceArn}")
            .label("resourceArn", self.resource_arn.as_deref())?
            .body(self)?
            .build())
    }
}

// ── UntagResource ─────────────────────────────────────────────────────

/// Removes tags from a GuardDuty resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceRequest {
    #[serde(skip)]
    pub resource_arn: Option<String>,
    #[serde(skip)]
    pub tag_keys: Option<Vec<String>>,
}

fluent! {
    UntagResourceRequest {
        resource_arn / set_resource_arn: String;
        tag_keys / set_tag_keys: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceResult {}

impl Operation for UntagResourceRequest {
    type Output = UntagResourceResult;
    const NAME: &'static str = "UntagResource";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "tagKeys", &self.tag_keys)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Delete, "/tags/{resourceArn}")
            .label("resourceArn", self.resource_arn.as_deref())?
            .query_list("tagKeys", self.tag_keys.as_deref().unwrap_or_default())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str = "arn:aws:guardduty:us-east-1:123456789012:detector/d1";

    #[test]
    fn untag_keys_repeat_in_query() {
        let req = UntagResourceRequest::default()
            .resource_arn(ARN)
            .tag_keys(["env", "team"])
            .marshall()
            .unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(
            req.path,
            "/tags/arn%3Aaws%3Aguardduty%3Aus-east-1%3A123456789012%3Adetector%2Fd1"
        );
        assert_eq!(
            req.query,
            vec![
                ("tagKeys".to_string(), "env".to_string()),
                ("tagKeys".to_string(), "team".to_string()),
            ]
        );
        assert!(req.body.is_empty());
    }

    #[test]
    fn untag_requires_keys() {
        let err = UntagResourceRequest::default().resource_arn(ARN).marshall().unwrap_err();
        assert!(matches!(err, ClientError::MissingMember { member: "tagKeys", .. }));
    }

    #[test]
    fn tag_resource_body_holds_only_tags() {
        let req = TagResourceRequest::default()
            .resource_arn(ARN)
            .tags("env", "prod")
            .marshall()
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
        assert_eq!(json, serde_json::json!({ "tags": { "env": "prod" } }));
    }

    #[test]
    fn tag_map_is_copied() {
        let mut tags = HashMap::new();
        tags.insert("env".to_string(), "prod".to_string());
        let mut req = TagResourceRequest::default();
        req.set_tags(Some(tags.clone()));
        tags.insert("team".to_string(), "sec".to_string());
        assert_eq!(req.tags.as_ref().map(HashMap::len), Some(1));
    }
}

//! AWS Organizations integration.

use crate::types::AdminAccount;
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::http::HttpMethod;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{require, ProtocolRequest, RestJsonRequest};
use serde::{Deserialize, Serialize};

// ── DescribeOrganizationConfiguration ─────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeOrganizationConfigurationRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
}

fluent! {
    DescribeOrganizationConfigurationRequest {
        detector_id / set_detector_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeOrganizationConfigurationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_account_limit_reached: Option<bool>,
}

fluent! {
    DescribeOrganizationConfigurationResult {
        auto_enable / set_auto_enable: bool;
        member_account_limit_reached / set_member_account_limit_reached: bool;
    }
}

impl Operation for DescribeOrganizationConfigurationRequest {
    type Output = DescribeOrganizationConfigurationResult;
    const NAME: &'static str = "DescribeOrganizationConfiguration";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}/admin")
            .label("detectorId", self.detector_id.as_deref())?
            .build())
    }
}

// ── DisableOrganizationAdminAccount ───────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableOrganizationAdminAccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_account_id: Option<String>,
}

fluent! {
    DisableOrganizationAdminAccountRequest {
        admin_account_id / set_admin_account_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableOrganizationAdminAccountResult {}

impl Operation for DisableOrganizationAdminAccountRequest {
    type Output = DisableOrganizationAdminAccountResult;
    const NAME: &'static str = "DisableOrganizationAdminAccount";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "adminAccountId", &self.admin_account_id)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/admin/disable")
            .body(self)?
            .build())
    }
}

// ── EnableOrganizationAdminAccount ────────────────────────────────────

/// Designates an account as the delegated administrator for the organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableOrganizationAdminAccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_account_id: Option<String>,
}

fluent! {
    EnableOrganizationAdminAccountRequest {
        admin_account_id / set_admin_account_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableOrganizationAdminAccountResult {}

impl Operation for EnableOrganizationAdminAccountRequest {
    type Output = EnableOrganizationAdminAccountResult;
    const NAME: &'static str = "EnableOrganizationAdminAccount";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "adminAccountId", &self.admin_account_id)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/admin/enable")
            .body(self)?
            .build())
    }
}

// ── ListOrganizationAdminAccounts ─────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrganizationAdminAccountsRequest {
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

fluent! {
    ListOrganizationAdminAccountsRequest {
        max_results / set_max_results: i32;
        next_token / set_next_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrganizationAdminAccountsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_accounts: Option<Vec<AdminAccount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListOrganizationAdminAccountsResult {
        admin_accounts / set_admin_accounts: [AdminAccount];
        next_token / set_next_token: String;
    }
}

impl Operation for ListOrganizationAdminAccountsRequest {
    type Output = ListOrganizationAdminAccountsResult;
    const NAME: &'static str = "ListOrganizationAdminAccounts";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/admin")
            .query("maxResults", self.max_results.as_ref())
            .query("nextToken", self.next_token.as_ref())
            .build())
    }
}

// ── UpdateOrganizationConfiguration ───────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationConfigurationRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_enable: Option<bool>,
}

fluent! {
    UpdateOrganizationConfigurationRequest {
        detector_id / set_detector_id: String;
        auto_enable / set_auto_enable: bool;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationConfigurationResult {}

impl Operation for UpdateOrganizationConfigurationRequest {
    type Output = UpdateOrganizationConfigurationResult;
    const NAME: &'static str = "UpdateOrganizationConfiguration";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "autoEnable", &self.auto_enable)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/admin")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AdminStatus;

    #[test]
    fn enable_admin_account() {
        let req = EnableOrganizationAdminAccountRequest::default()
            .admin_account_id("123456789012")
            .marshall()
            .unwrap();
        assert_eq!(req.path, "/admin/enable");
        assert_eq!(req.body_text(), r#"{"adminAccountId":"123456789012"}"#);
    }

    #[test]
    fn update_configuration_requires_auto_enable() {
        let err = UpdateOrganizationConfigurationRequest::default()
            .detector_id("d1")
            .marshall()
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingMember { member: "autoEnable", .. }));
    }

    #[test]
    fn list_admin_accounts_result() {
        let out: ListOrganizationAdminAccountsResult = serde_json::from_str(
            r#"{"adminAccounts":[{"adminAccountId":"123456789012","adminStatus":"DISABLE_IN_PROGRESS"}]}"#,
        )
        .unwrap();
        let admins = out.admin_accounts.unwrap();
        assert_eq!(admins[0].admin_status, Some(AdminStatus::DisableInProgress));
        assert_eq!(out.next_token, None);
    }
}

//! Member accounts and invitations.

use crate::types::{AccountDetail, Invitation, Master, Member, UnprocessedAccount};
use awsbind_core::error::ClientError;
use awsbind_core::fluent;
use awsbind_core::http::HttpMethod;
use awsbind_core::invoker::Operation;
use awsbind_core::protocol::{require, ProtocolRequest, RestJsonRequest};
use serde::{Deserialize, Serialize};

// ── AcceptInvitation ──────────────────────────────────────────────────

/// Accepts an invitation from an administrator account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvitationRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_id: Option<String>,
}

fluent! {
    AcceptInvitationRequest {
        detector_id / set_detector_id: String;
        master_id / set_master_id: String;
        invitation_id / set_invitation_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvitationResult {}

impl Operation for AcceptInvitationRequest {
    type Output = AcceptInvitationResult;
    const NAME: &'static str = "AcceptInvitation";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "masterId", &self.master_id)?;
        require(Self::NAME, "invitationId", &self.invitation_id)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/master")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── CreateMembers ─────────────────────────────────────────────────────

/// Adds member accounts to a detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembersRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_details: Option<Vec<AccountDetail>>,
}

fluent! {
    CreateMembersRequest {
        detector_id / set_detector_id: String;
        account_details / set_account_details: [AccountDetail];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

fluent! {
    CreateMembersResult {
        unprocessed_accounts / set_unprocessed_accounts: [UnprocessedAccount];
    }
}

impl Operation for CreateMembersRequest {
    type Output = CreateMembersResult;
    const NAME: &'static str = "CreateMembers";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "accountDetails", &self.account_details)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/member")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── DeclineInvitations ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclineInvitationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<Vec<String>>,
}

fluent! {
    DeclineInvitationsRequest {
        account_ids / set_account_ids: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclineInvitationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

fluent! {
    DeclineInvitationsResult {
        unprocessed_accounts / set_unprocessed_accounts: [UnprocessedAccount];
    }
}

impl Operation for DeclineInvitationsRequest {
    type Output = DeclineInvitationsResult;
    const NAME: &'static str = "DeclineInvitations";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "accountIds", &self.account_ids)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/invitation/decline")
            .body(self)?
            .build())
    }
}

// ── DeleteInvitations ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteInvitationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<Vec<String>>,
}

fluent! {
    DeleteInvitationsRequest {
        account_ids / set_account_ids: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteInvitationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

fluent! {
    DeleteInvitationsResult {
        unprocessed_accounts / set_unprocessed_accounts: [UnprocessedAccount];
    }
}

impl Operation for DeleteInvitationsRequest {
    type Output = DeleteInvitationsResult;
    const NAME: &'static str = "DeleteInvitations";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "accountIds", &self.account_ids)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/invitation/delete")
            .body(self)?
            .build())
    }
}

// ── DeleteMembers ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMembersRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<Vec<String>>,
}

fluent! {
    DeleteMembersRequest {
        detector_id / set_detector_id: String;
        account_ids / set_account_ids: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMembersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

fluent! {
    DeleteMembersResult {
        unprocessed_accounts / set_unprocessed_accounts: [UnprocessedAccount];
    }
}

impl Operation for DeleteMembersRequest {
    type Output = DeleteMembersResult;
    const NAME: &'static str = "DeleteMembers";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "accountIds", &self.account_ids)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/member/delete")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── DisassociateFromMasterAccount ─────────────────────────────────────

/// Leaves the current administrator account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisassociateFromMasterAccountRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
}

fluent! {
    DisassociateFromMasterAccountRequest {
        detector_id / set_detector_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisassociateFromMasterAccountResult {}

impl Operation for DisassociateFromMasterAccountRequest {
    type Output = DisassociateFromMasterAccountResult;
    const NAME: &'static str = "DisassociateFromMasterAccount";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/master/disassociate")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── DisassociateMembers ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisassociateMembersRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<Vec<String>>,
}

fluent! {
    DisassociateMembersRequest {
        detector_id / set_detector_id: String;
        account_ids / set_account_ids: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisassociateMembersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

fluent! {
    DisassociateMembersResult {
        unprocessed_accounts / set_unprocessed_accounts: [UnprocessedAccount];
    }
}

impl Operation for DisassociateMembersRequest {
    type Output = DisassociateMembersResult;
    const NAME: &'static str = "DisassociateMembers";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "accountIds", &self.account_ids)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/member/disassociate")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── GetInvitationsCount ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInvitationsCountRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInvitationsCountResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitations_count: Option<i32>,
}

fluent! {
    GetInvitationsCountResult {
        invitations_count / set_invitations_count: i32;
    }
}

impl Operation for GetInvitationsCountRequest {
    type Output = GetInvitationsCountResult;
    const NAME: &'static str = "GetInvitationsCount";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/invitation/count")
            .build())
    }
}

// ── GetMasterAccount ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMasterAccountRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
}

fluent! {
    GetMasterAccountRequest {
        detector_id / set_detector_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMasterAccountResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master: Option<Master>,
}

fluent! {
    GetMasterAccountResult {
        master / set_master: Master;
    }
}

impl Operation for GetMasterAccountRequest {
    type Output = GetMasterAccountResult;
    const NAME: &'static str = "GetMasterAccount";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}/master")
            .label("detectorId", self.detector_id.as_deref())?
            .build())
    }
}

// ── GetMembers ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMembersRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<Vec<String>>,
}

fluent! {
    GetMembersRequest {
        detector_id / set_detector_id: String;
        account_ids / set_account_ids: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMembersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

fluent! {
    GetMembersResult {
        members / set_members: [Member];
        unprocessed_accounts / set_unprocessed_accounts: [UnprocessedAccount];
    }
}

impl Operation for GetMembersRequest {
    type Output = GetMembersResult;
    const NAME: &'static str = "GetMembers";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "accountIds", &self.account_ids)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/member/get")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── InviteMembers ─────────────────────────────────────────────────────

/// Invites member accounts to be managed by this account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteMembersRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_email_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fluent! {
    InviteMembersRequest {
        detector_id / set_detector_id: String;
        account_ids / set_account_ids: [String];
        disable_email_notification / set_disable_email_notification: bool;
        message / set_message: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteMembersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

fluent! {
    InviteMembersResult {
        unprocessed_accounts / set_unprocessed_accounts: [UnprocessedAccount];
    }
}

impl Operation for InviteMembersRequest {
    type Output = InviteMembersResult;
    const NAME: &'static str = "InviteMembers";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "accountIds", &self.account_ids)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/member/invite")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── ListInvitations ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInvitationsRequest {
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

fluent! {
    ListInvitationsRequest {
        max_results / set_max_results: i32;
        next_token / set_next_token: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInvitationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitations: Option<Vec<Invitation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListInvitationsResult {
        invitations / set_invitations: [Invitation];
        next_token / set_next_token: String;
    }
}

impl Operation for ListInvitationsRequest {
    type Output = ListInvitationsResult;
    const NAME: &'static str = "ListInvitations";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/invitation")
            .query("maxResults", self.max_results.as_ref())
            .query("nextToken", self.next_token.as_ref())
            .build())
    }
}

// ── ListMembers ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembersRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
    /// `"true"` to list only associated members.
    #[serde(skip)]
    pub only_associated: Option<String>,
}

fluent! {
    ListMembersRequest {
        detector_id / set_detector_id: String;
        max_results / set_max_results: i32;
        next_token / set_next_token: String;
        only_associated / set_only_associated: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fluent! {
    ListMembersResult {
        members / set_members: [Member];
        next_token / set_next_token: String;
    }
}

impl Operation for ListMembersRequest {
    type Output = ListMembersResult;
    const NAME: &'static str = "ListMembers";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Get, "/detector/{detectorId}/member")
            .label("detectorId", self.detector_id.as_deref())?
            .query("maxResults", self.max_results.as_ref())
            .query("nextToken", self.next_token.as_ref())
            .query("onlyAssociated", self.only_associated.as_ref())
            .build())
    }
}

// ── StartMonitoringMembers ────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartMonitoringMembersRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<Vec<String>>,
}

fluent! {
    StartMonitoringMembersRequest {
        detector_id / set_detector_id: String;
        account_ids / set_account_ids: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartMonitoringMembersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

fluent! {
    StartMonitoringMembersResult {
        unprocessed_accounts / set_unprocessed_accounts: [UnprocessedAccount];
    }
}

impl Operation for StartMonitoringMembersRequest {
    type Output = StartMonitoringMembersResult;
    const NAME: &'static str = "StartMonitoringMembers";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "accountIds", &self.account_ids)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/member/start")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

// ── StopMonitoringMembers ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopMonitoringMembersRequest {
    #[serde(skip)]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<Vec<String>>,
}

fluent! {
    StopMonitoringMembersRequest {
        detector_id / set_detector_id: String;
        account_ids / set_account_ids: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopMonitoringMembersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

fluent! {
    StopMonitoringMembersResult {
        unprocessed_accounts / set_unprocessed_accounts: [UnprocessedAccount];
    }
}

impl Operation for StopMonitoringMembersRequest {
    type Output = StopMonitoringMembersResult;
    const NAME: &'static str = "StopMonitoringMembers";

    fn marshall(&self) -> Result<ProtocolRequest, ClientError> {
        require(Self::NAME, "accountIds", &self.account_ids)?;
        Ok(RestJsonRequest::new(Self::NAME, HttpMethod::Post, "/detector/{detectorId}/member/stop")
            .label("detectorId", self.detector_id.as_deref())?
            .body(self)?
            .build())
    }
}

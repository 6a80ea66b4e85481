//! The GuardDuty client.

use crate::detectors::*;
use crate::error::{GuardDutyError, ERRORS};
use crate::filters::*;
use crate::findings::*;
use crate::ip_sets::*;
use crate::members::*;
use crate::organization::*;
use crate::publishing::*;
use crate::tags::*;
use crate::threat_intel_sets::*;
use awsbind_core::config::{ClientConfig, Region};
use awsbind_core::credentials::{Credentials, ProvideCredentials};
use awsbind_core::error::ClientError;
use awsbind_core::http::HttpTransport;
use awsbind_core::invoker::{InvokerBuilder, OperationInvoker, ServiceMetadata};
use awsbind_core::metrics::MetricsWindow;
use awsbind_core::operation_methods;
use awsbind_core::signing::RequestSigner;
use std::sync::Arc;

pub const SERVICE: ServiceMetadata = ServiceMetadata {
    signing_name: "guardduty",
    endpoint_prefix: "guardduty",
};

/// Blocking GuardDuty client.
///
/// Cheap to clone; clones share the transport, credentials provider and
/// metrics window. Each method sends exactly one request.
#[derive(Debug, Clone)]
pub struct GuardDutyClient {
    invoker: OperationInvoker<GuardDutyError>,
}

impl GuardDutyClient {
    /// Client for `config` with the default credentials chain and transport.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Self::builder().config(config).build()
    }

    /// Client configured from the environment and shared config file.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    pub fn builder() -> GuardDutyClientBuilder {
        GuardDutyClientBuilder {
            inner: OperationInvoker::builder(SERVICE, &ERRORS),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.invoker.endpoint()
    }

    pub fn region(&self) -> &Region {
        self.invoker.region()
    }

    /// Metrics of the most recent calls.
    pub fn metrics(&self) -> &MetricsWindow {
        self.invoker.metrics()
    }

    operation_methods! {
        GuardDutyError;
        /// Accepts an invitation from an administrator account.
        accept_invitation, accept_invitation_with: AcceptInvitationRequest;
        /// Archives findings by ID.
        archive_findings, archive_findings_with: ArchiveFindingsRequest;
        /// Creates a detector.
        create_detector, create_detector_with: CreateDetectorRequest;
        /// Creates a finding filter.
        create_filter, create_filter_with: CreateFilterRequest;
        /// Creates a trusted IP list.
        create_ip_set, create_ip_set_with: CreateIPSetRequest;
        /// Adds member accounts.
        create_members, create_members_with: CreateMembersRequest;
        /// Creates a finding export destination.
        create_publishing_destination, create_publishing_destination_with: CreatePublishingDestinationRequest;
        /// Generates sample findings.
        create_sample_findings, create_sample_findings_with: CreateSampleFindingsRequest;
        /// Creates a threat list.
        create_threat_intel_set, create_threat_intel_set_with: CreateThreatIntelSetRequest;
        /// Declines invitations.
        decline_invitations, decline_invitations_with: DeclineInvitationsRequest;
        /// Deletes a detector.
        delete_detector, delete_detector_with: DeleteDetectorRequest;
        /// Deletes a filter.
        delete_filter, delete_filter_with: DeleteFilterRequest;
        /// Deletes a trusted IP list.
        delete_ip_set, delete_ip_set_with: DeleteIPSetRequest;
        /// Deletes invitations.
        delete_invitations, delete_invitations_with: DeleteInvitationsRequest;
        /// Deletes member accounts.
        delete_members, delete_members_with: DeleteMembersRequest;
        /// Deletes a publishing destination.
        delete_publishing_destination, delete_publishing_destination_with: DeletePublishingDestinationRequest;
        /// Deletes a threat list.
        delete_threat_intel_set, delete_threat_intel_set_with: DeleteThreatIntelSetRequest;
        /// Reads the organization auto-enable settings.
        describe_organization_configuration, describe_organization_configuration_with: DescribeOrganizationConfigurationRequest;
        /// Reads a publishing destination.
        describe_publishing_destination, describe_publishing_destination_with: DescribePublishingDestinationRequest;
        /// Revokes the delegated administrator.
        disable_organization_admin_account, disable_organization_admin_account_with: DisableOrganizationAdminAccountRequest;
        /// Leaves the administrator account.
        disassociate_from_master_account, disassociate_from_master_account_with: DisassociateFromMasterAccountRequest;
        /// Disassociates member accounts.
        disassociate_members, disassociate_members_with: DisassociateMembersRequest;
        /// Designates the delegated administrator.
        enable_organization_admin_account, enable_organization_admin_account_with: EnableOrganizationAdminAccountRequest;
        /// Reads a detector.
        get_detector, get_detector_with: GetDetectorRequest;
        /// Reads a filter.
        get_filter, get_filter_with: GetFilterRequest;
        /// Describes findings.
        get_findings, get_findings_with: GetFindingsRequest;
        /// Counts findings by severity.
        get_findings_statistics, get_findings_statistics_with: GetFindingsStatisticsRequest;
        /// Reads a trusted IP list.
        get_ip_set, get_ip_set_with: GetIPSetRequest;
        /// Counts pending invitations.
        get_invitations_count, get_invitations_count_with: GetInvitationsCountRequest;
        /// Reads the administrator account.
        get_master_account, get_master_account_with: GetMasterAccountRequest;
        /// Reads member accounts.
        get_members, get_members_with: GetMembersRequest;
        /// Reads a threat list.
        get_threat_intel_set, get_threat_intel_set_with: GetThreatIntelSetRequest;
        /// Invites member accounts.
        invite_members, invite_members_with: InviteMembersRequest;
        /// Lists detectors.
        list_detectors, list_detectors_with: ListDetectorsRequest;
        /// Lists filters.
        list_filters, list_filters_with: ListFiltersRequest;
        /// Lists finding IDs.
        list_findings, list_findings_with: ListFindingsRequest;
        /// Lists trusted IP lists.
        list_ip_sets, list_ip_sets_with: ListIPSetsRequest;
        /// Lists invitations.
        list_invitations, list_invitations_with: ListInvitationsRequest;
        /// Lists member accounts.
        list_members, list_members_with: ListMembersRequest;
        /// Lists delegated administrators.
        list_organization_admin_accounts, list_organization_admin_accounts_with: ListOrganizationAdminAccountsRequest;
        /// Lists publishing destinations.
        list_publishing_destinations, list_publishing_destinations_with: ListPublishingDestinationsRequest;
        /// Lists tags of a resource.
        list_tags_for_resource, list_tags_for_resource_with: ListTagsForResourceRequest;
        /// Lists threat lists.
        list_threat_intel_sets, list_threat_intel_sets_with: ListThreatIntelSetsRequest;
        /// Starts monitoring member accounts.
        start_monitoring_members, start_monitoring_members_with: StartMonitoringMembersRequest;
        /// Stops monitoring member accounts.
        stop_monitoring_members, stop_monitoring_members_with: StopMonitoringMembersRequest;
        /// Tags a resource.
        tag_resource, tag_resource_with: TagResourceRequest;
        /// Restores archived findings.
        unarchive_findings, unarchive_findings_with: UnarchiveFindingsRequest;
        /// Removes tags from a resource.
        untag_resource, untag_resource_with: UntagResourceRequest;
        /// Updates a detector.
        update_detector, update_detector_with: UpdateDetectorRequest;
        /// Updates a filter.
        update_filter, update_filter_with: UpdateFilterRequest;
        /// Sends feedback on findings.
        update_findings_feedback, update_findings_feedback_with: UpdateFindingsFeedbackRequest;
        /// Updates a trusted IP list.
        update_ip_set, update_ip_set_with: UpdateIPSetRequest;
        /// Updates the organization auto-enable settings.
        update_organization_configuration, update_organization_configuration_with: UpdateOrganizationConfigurationRequest;
        /// Updates a publishing destination.
        update_publishing_destination, update_publishing_destination_with: UpdatePublishingDestinationRequest;
        /// Updates a threat list.
        update_threat_intel_set, update_threat_intel_set_with: UpdateThreatIntelSetRequest;
    }
}

/// Builder for [`GuardDutyClient`].
pub struct GuardDutyClientBuilder {
    inner: InvokerBuilder<GuardDutyError>,
}

impl GuardDutyClientBuilder {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.inner = self.inner.config(config);
        self
    }

    /// Fixed credentials for every call.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.inner = self.inner.credentials(credentials);
        self
    }

    pub fn credentials_provider(mut self, provider: Arc<dyn ProvideCredentials>) -> Self {
        self.inner = self.inner.credentials_provider(provider);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.inner = self.inner.transport(transport);
        self
    }

    pub fn signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.inner = self.inner.signer(signer);
        self
    }

    pub fn build(self) -> Result<GuardDutyClient, ClientError> {
        Ok(GuardDutyClient {
            invoker: self.inner.build()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DetectorStatus, FindingPublishingFrequency};
    use awsbind_core::credentials::CredentialsError;
    use awsbind_core::error::SdkError;
    use awsbind_core::invoker::CallOptions;
    use awsbind_core::stub::StubTransport;

    mockall::mock! {
        Creds {}
        impl ProvideCredentials for Creds {
            fn provide_credentials(&self) -> Result<Credentials, CredentialsError>;
        }
    }

    fn client(stub: &Arc<StubTransport>) -> GuardDutyClient {
        GuardDutyClient::builder()
            .config(ClientConfig::new("us-west-2"))
            .credentials(Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"))
            .transport(stub.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn regional_endpoint() {
        let stub = StubTransport::new();
        let gd = client(&stub);
        assert_eq!(gd.endpoint(), "https://guardduty.us-west-2.amazonaws.com");
        assert_eq!(gd.region().name(), "us-west-2");
    }

    #[test]
    fn get_detector_round_trip() {
        let stub = StubTransport::new();
        stub.push_json(
            200,
            r#"{"createdAt":"2020-05-01T10:00:00.000Z","findingPublishingFrequency":"SIX_HOURS",
                "serviceRole":"arn:aws:iam::123456789012:role/aws-service-role/guardduty.amazonaws.com/AWSServiceRoleForAmazonGuardDuty",
                "status":"ENABLED","tags":{"env":"prod"}}"#,
        );
        let gd = client(&stub);

        let out = gd
            .get_detector(&GetDetectorRequest::default().detector_id("12abc34d567e8fa901bc2d34e56789f0"))
            .unwrap();
        assert_eq!(out.status, Some(DetectorStatus::Enabled));
        assert_eq!(out.finding_publishing_frequency, Some(FindingPublishingFrequency::SixHours));
        assert_eq!(out.updated_at, None);
        assert_eq!(out.tags.unwrap()["env"], "prod");

        let req = stub.last_request().unwrap();
        assert_eq!(req.method.as_str(), "GET");
        assert!(req.url.ends_with("/detector/12abc34d567e8fa901bc2d34e56789f0"));
        assert!(req.body.is_empty());
        assert!(req
            .header("authorization")
            .unwrap()
            .contains("/us-west-2/guardduty/aws4_request"));
    }

    #[test]
    fn bad_request_is_typed() {
        let stub = StubTransport::new();
        stub.push_service_error(400, "BadRequestException", "The request is rejected because the input detectorId is not owned by the current account.");
        let err = client(&stub)
            .delete_detector(&DeleteDetectorRequest::default().detector_id("nope"))
            .unwrap_err();
        match err {
            SdkError::Service(GuardDutyError::BadRequest(meta)) => {
                assert_eq!(meta.code, "BadRequestException");
                assert!(meta.message.starts_with("The request is rejected"));
                assert_eq!(meta.operation.as_deref(), Some("DeleteDetector"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn internal_error_and_fallback() {
        let stub = StubTransport::new();
        stub.push_service_error(500, "InternalServerErrorException", "boom");
        stub.push_service_error(429, "TooManyRequestsException", "slow down");
        let gd = client(&stub);

        let err = gd.list_detectors(&ListDetectorsRequest::default()).unwrap_err();
        assert!(matches!(err, SdkError::Service(GuardDutyError::InternalServerError(_))));
        assert!(err.is_retryable());

        let err = gd.list_detectors(&ListDetectorsRequest::default()).unwrap_err();
        match err.into_service_error() {
            Some(GuardDutyError::Unhandled(meta)) => {
                assert_eq!(meta.code, "TooManyRequestsException");
                assert_eq!(meta.status_code, 429);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn call_credentials_override_provider() {
        let stub = StubTransport::new();
        stub.push_json(200, r#"{"invitationsCount":3}"#);
        let mut creds = MockCreds::new();
        creds.expect_provide_credentials().never();

        let gd = GuardDutyClient::builder()
            .credentials_provider(Arc::new(creds))
            .transport(stub.clone())
            .build()
            .unwrap();
        let out = gd
            .get_invitations_count_with(
                &GetInvitationsCountRequest::default(),
                &CallOptions::new().with_credentials(Credentials::new("AKIDCALLSCOPED", "secret")),
            )
            .unwrap();
        assert_eq!(out.invitations_count, Some(3));
        assert!(stub.last_request().unwrap().headers["authorization"].contains("AKIDCALLSCOPED"));
    }

    #[test]
    fn metrics_window_records_calls() {
        let stub = StubTransport::new();
        stub.push_json(200, r#"{"detectorIds":["a"]}"#);
        stub.push_service_error(400, "BadRequestException", "bad");
        let gd = client(&stub);
        gd.list_detectors(&ListDetectorsRequest::default()).unwrap();
        let _ = gd.get_detector(&GetDetectorRequest::default().detector_id("x"));

        let recent = gd.metrics().recent();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].operation, "ListDetectors");
        assert_eq!(recent[1].status, Some(400));
    }
}

//! Enumerations and shapes shared by GuardDuty operations.

use awsbind_core::{fluent, wire_enum};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── Enumerations ────────────────────────────────────────────────────────

wire_enum! {
    /// Status of a delegated administrator account.
    pub enum AdminStatus {
        Enabled => "ENABLED",
        DisableInProgress => "DISABLE_IN_PROGRESS",
    }
}

wire_enum! {
    /// Kind of publishing destination.
    pub enum DestinationType {
        S3 => "S3",
    }
}

wire_enum! {
    pub enum DetectorStatus {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

wire_enum! {
    /// Usefulness feedback on a finding.
    pub enum Feedback {
        Useful => "USEFUL",
        NotUseful => "NOT_USEFUL",
    }
}

wire_enum! {
    /// What happens to findings matched by a filter.
    pub enum FilterAction {
        Noop => "NOOP",
        Archive => "ARCHIVE",
    }
}

wire_enum! {
    /// How often updated findings are exported.
    pub enum FindingPublishingFrequency {
        FifteenMinutes => "FIFTEEN_MINUTES",
        OneHour => "ONE_HOUR",
        SixHours => "SIX_HOURS",
    }
}

wire_enum! {
    pub enum FindingStatisticType {
        CountBySeverity => "COUNT_BY_SEVERITY",
    }
}

wire_enum! {
    /// File format of a trusted IP list.
    pub enum IpSetFormat {
        Txt => "TXT",
        Stix => "STIX",
        OtxCsv => "OTX_CSV",
        AlienVault => "ALIEN_VAULT",
        ProofPoint => "PROOF_POINT",
        FireEye => "FIRE_EYE",
    }
}

wire_enum! {
    pub enum IpSetStatus {
        Inactive => "INACTIVE",
        Activating => "ACTIVATING",
        Active => "ACTIVE",
        Deactivating => "DEACTIVATING",
        Error => "ERROR",
        DeletePending => "DELETE_PENDING",
        Deleted => "DELETED",
    }
}

wire_enum! {
    pub enum OrderBy {
        Asc => "ASC",
        Desc => "DESC",
    }
}

wire_enum! {
    pub enum PublishingStatus {
        PendingVerification => "PENDING_VERIFICATION",
        Publishing => "PUBLISHING",
        UnableToPublishFixDestinationProperty => "UNABLE_TO_PUBLISH_FIX_DESTINATION_PROPERTY",
        Stopped => "STOPPED",
    }
}

wire_enum! {
    /// File format of a threat list.
    pub enum ThreatIntelSetFormat {
        Txt => "TXT",
        Stix => "STIX",
        OtxCsv => "OTX_CSV",
        AlienVault => "ALIEN_VAULT",
        ProofPoint => "PROOF_POINT",
        FireEye => "FIRE_EYE",
    }
}

wire_enum! {
    pub enum ThreatIntelSetStatus {
        Inactive => "INACTIVE",
        Activating => "ACTIVATING",
        Active => "ACTIVE",
        Deactivating => "DEACTIVATING",
        Error => "ERROR",
        DeletePending => "DELETE_PENDING",
        Deleted => "DELETED",
    }
}

// ── Shapes ──────────────────────────────────────────────────────────────

/// Comparison operators applied to one finding attribute.
///
/// Only one operator family is expected per condition; the service rejects
/// conflicting combinations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Deprecated short form of `equals`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq: Option<Vec<String>>,
    /// Deprecated short form of `not_equals`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neq: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_equals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_than_or_equal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub less_than: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub less_than_or_equal: Option<i64>,
}

fluent! {
    Condition {
        eq / set_eq: [String];
        neq / set_neq: [String];
        gt / set_gt: i32;
        gte / set_gte: i32;
        lt / set_lt: i32;
        lte / set_lte: i32;
        equals / set_equals: [String];
        not_equals / set_not_equals: [String];
        greater_than / set_greater_than: i64;
        greater_than_or_equal / set_greater_than_or_equal: i64;
        less_than / set_less_than: i64;
        less_than_or_equal / set_less_than_or_equal: i64;
    }
}

/// Attribute name to [`Condition`], combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criterion: Option<HashMap<String, Condition>>,
}

fluent! {
    FindingCriteria {
        criterion / set_criterion: {String => Condition};
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

fluent! {
    SortCriteria {
        attribute_name / set_attribute_name: String;
        order_by / set_order_by: OrderBy;
    }
}

/// An account to add as a member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

fluent! {
    AccountDetail {
        account_id / set_account_id: String;
        email / set_email: String;
    }
}

/// An account the service could not process, with the reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnprocessedAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

fluent! {
    UnprocessedAccount {
        account_id / set_account_id: String;
        result / set_result: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fluent! {
    Member {
        account_id / set_account_id: String;
        detector_id / set_detector_id: String;
        master_id / set_master_id: String;
        email / set_email: String;
        relationship_status / set_relationship_status: String;
        invited_at / set_invited_at: String;
        updated_at / set_updated_at: String;
    }
}

/// The administrator account a member is associated with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Master {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited_at: Option<String>,
}

fluent! {
    Master {
        account_id / set_account_id: String;
        invitation_id / set_invitation_id: String;
        relationship_status / set_relationship_status: String;
        invited_at / set_invited_at: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited_at: Option<String>,
}

fluent! {
    Invitation {
        account_id / set_account_id: String;
        invitation_id / set_invitation_id: String;
        relationship_status / set_relationship_status: String;
        invited_at / set_invited_at: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_status: Option<AdminStatus>,
}

fluent! {
    AdminAccount {
        admin_account_id / set_admin_account_id: String;
        admin_status / set_admin_status: AdminStatus;
    }
}

/// Where findings are exported and the KMS key used to encrypt them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<String>,
}

fluent! {
    DestinationProperties {
        destination_arn / set_destination_arn: String;
        kms_key_arn / set_kms_key_arn: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<DestinationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishingStatus>,
}

fluent! {
    Destination {
        destination_id / set_destination_id: String;
        destination_type / set_destination_type: DestinationType;
        status / set_status: PublishingStatus;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_by_severity: Option<HashMap<String, i32>>,
}

fluent! {
    FindingStatistics {
        count_by_severity / set_count_by_severity: {String => i32};
    }
}

/// An EC2 instance tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

fluent! {
    Tag {
        key / set_key: String;
        value / set_value: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
}

fluent! {
    ProductCode {
        code / set_code: String;
        product_type / set_product_type: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IamInstanceProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

fluent! {
    IamInstanceProfile {
        arn / set_arn: String;
        id / set_id: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateIpAddressDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
}

fluent! {
    PrivateIpAddressDetails {
        private_dns_name / set_private_dns_name: String;
        private_ip_address / set_private_ip_address: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

fluent! {
    SecurityGroup {
        group_id / set_group_id: String;
        group_name / set_group_name: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_addresses: Option<Vec<PrivateIpAddressDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<SecurityGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

fluent! {
    NetworkInterface {
        ipv6_addresses / set_ipv6_addresses: [String];
        network_interface_id / set_network_interface_id: String;
        private_dns_name / set_private_dns_name: String;
        private_ip_address / set_private_ip_address: String;
        private_ip_addresses / set_private_ip_addresses: [PrivateIpAddressDetails];
        public_dns_name / set_public_dns_name: String;
        public_ip / set_public_ip: String;
        security_groups / set_security_groups: [SecurityGroup];
        subnet_id / set_subnet_id: String;
        vpc_id / set_vpc_id: String;
    }
}

/// The EC2 instance involved in a finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<IamInstanceProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outpost_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<NetworkInterface>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_codes: Option<Vec<ProductCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

fluent! {
    InstanceDetails {
        availability_zone / set_availability_zone: String;
        iam_instance_profile / set_iam_instance_profile: IamInstanceProfile;
        image_description / set_image_description: String;
        image_id / set_image_id: String;
        instance_id / set_instance_id: String;
        instance_state / set_instance_state: String;
        instance_type / set_instance_type: String;
        outpost_arn / set_outpost_arn: String;
        launch_time / set_launch_time: String;
        network_interfaces / set_network_interfaces: [NetworkInterface];
        platform / set_platform: String;
        product_codes / set_product_codes: [ProductCode];
        tags / set_tags: [Tag];
    }
}

/// The IAM access key involved in a finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

fluent! {
    AccessKeyDetails {
        access_key_id / set_access_key_id: String;
        principal_id / set_principal_id: String;
        user_name / set_user_name: String;
        user_type / set_user_type: String;
    }
}

/// The AWS resource a finding is about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_details: Option<AccessKeyDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_details: Option<InstanceDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

fluent! {
    Resource {
        access_key_details / set_access_key_details: AccessKeyDetails;
        instance_details / set_instance_details: InstanceDetails;
        resource_type / set_resource_type: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
}

fluent! {
    City {
        city_name / set_city_name: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
}

fluent! {
    Country {
        country_code / set_country_code: String;
        country_name / set_country_name: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

fluent! {
    GeoLocation {
        lat / set_lat: f64;
        lon / set_lon: f64;
    }
}

/// ISP and ASN information for a remote address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn_org: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
}

fluent! {
    Organization {
        asn / set_asn: String;
        asn_org / set_asn_org: String;
        isp / set_isp: String;
        org / set_org: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteIpDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_location: Option<GeoLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_v4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
}

fluent! {
    RemoteIpDetails {
        city / set_city: City;
        country / set_country: Country;
        geo_location / set_geo_location: GeoLocation;
        ip_address_v4 / set_ip_address_v4: String;
        organization / set_organization: Organization;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalIpDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_v4: Option<String>,
}

fluent! {
    LocalIpDetails {
        ip_address_v4 / set_ip_address_v4: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalPortDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_name: Option<String>,
}

fluent! {
    LocalPortDetails {
        port / set_port: i32;
        port_name / set_port_name: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePortDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_name: Option<String>,
}

fluent! {
    RemotePortDetails {
        port / set_port: i32;
        port_name / set_port_name: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

fluent! {
    DomainDetails {
        domain / set_domain: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsApiCallAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_details: Option<DomainDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip_details: Option<RemoteIpDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

fluent! {
    AwsApiCallAction {
        api / set_api: String;
        caller_type / set_caller_type: String;
        domain_details / set_domain_details: DomainDetails;
        remote_ip_details / set_remote_ip_details: RemoteIpDetails;
        service_name / set_service_name: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRequestAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

fluent! {
    DnsRequestAction {
        domain / set_domain: String;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConnectionAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_port_details: Option<LocalPortDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ip_details: Option<LocalIpDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip_details: Option<RemoteIpDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_port_details: Option<RemotePortDetails>,
}

fluent! {
    NetworkConnectionAction {
        blocked / set_blocked: bool;
        connection_direction / set_connection_direction: String;
        local_port_details / set_local_port_details: LocalPortDetails;
        protocol / set_protocol: String;
        local_ip_details / set_local_ip_details: LocalIpDetails;
        remote_ip_details / set_remote_ip_details: RemoteIpDetails;
        remote_port_details / set_remote_port_details: RemotePortDetails;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortProbeDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_port_details: Option<LocalPortDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ip_details: Option<LocalIpDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip_details: Option<RemoteIpDetails>,
}

fluent! {
    PortProbeDetail {
        local_port_details / set_local_port_details: LocalPortDetails;
        local_ip_details / set_local_ip_details: LocalIpDetails;
        remote_ip_details / set_remote_ip_details: RemoteIpDetails;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortProbeAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_probe_details: Option<Vec<PortProbeDetail>>,
}

fluent! {
    PortProbeAction {
        blocked / set_blocked: bool;
        port_probe_details / set_port_probe_details: [PortProbeDetail];
    }
}

/// The activity that triggered a finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_api_call_action: Option<AwsApiCallAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_request_action: Option<DnsRequestAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_connection_action: Option<NetworkConnectionAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_probe_action: Option<PortProbeAction>,
}

fluent! {
    Action {
        action_type / set_action_type: String;
        aws_api_call_action / set_aws_api_call_action: AwsApiCallAction;
        dns_request_action / set_dns_request_action: DnsRequestAction;
        network_connection_action / set_network_connection_action: NetworkConnectionAction;
        port_probe_action / set_port_probe_action: PortProbeAction;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatIntelligenceDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_list_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_names: Option<Vec<String>>,
}

fluent! {
    ThreatIntelligenceDetail {
        threat_list_name / set_threat_list_name: String;
        threat_names / set_threat_names: [String];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_intelligence_details: Option<Vec<ThreatIntelligenceDetail>>,
}

fluent! {
    Evidence {
        threat_intelligence_details / set_threat_intelligence_details: [ThreatIntelligenceDetail];
    }
}

/// GuardDuty-specific context of a finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_first_seen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_last_seen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_feedback: Option<String>,
}

fluent! {
    Service {
        action / set_action: Action;
        evidence / set_evidence: Evidence;
        archived / set_archived: bool;
        count / set_count: i32;
        detector_id / set_detector_id: String;
        event_first_seen / set_event_first_seen: String;
        event_last_seen / set_event_last_seen: String;
        resource_role / set_resource_role: String;
        service_name / set_service_name: String;
        user_feedback / set_user_feedback: String;
    }
}

/// A security finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fluent! {
    Finding {
        account_id / set_account_id: String;
        arn / set_arn: String;
        confidence / set_confidence: f64;
        created_at / set_created_at: String;
        description / set_description: String;
        id / set_id: String;
        partition / set_partition: String;
        region / set_region: String;
        resource / set_resource: Resource;
        schema_version / set_schema_version: String;
        service / set_service: Service;
        severity / set_severity: f64;
        title / set_title: String;
        r#type / set_type: String;
        updated_at / set_updated_at: String;
    }
}

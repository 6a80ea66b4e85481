use awsbind_core::StubTransport;
use awsbind::guardduty::types::{Condition, Feedback, FindingCriteria, IpSetFormat, IpSetStatus};
use awsbind::guardduty::*;
use awsbind::{ClientConfig, Credentials, ProvideErrorMetadata, SdkError};
use std::sync::Arc;

fn client(stub: &Arc<StubTransport>) -> GuardDutyClient {
    GuardDutyClient::builder()
        .config(ClientConfig::new("eu-west-1"))
        .credentials(Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"))
        .transport(stub.clone())
        .build()
        .unwrap()
}

#[test]
fn detector_lifecycle() {
    let stub = StubTransport::new();
    stub.push_json(200, r#"{"detectorId":"12abc34d567e8fa901bc2d34e56789f0"}"#);
    stub.push_json(200, r#"{"detectorIds":["12abc34d567e8fa901bc2d34e56789f0"]}"#);
    stub.push_json(200, "");
    stub.push_json(200, "{}");
    let gd = client(&stub);

    let created = gd
        .create_detector(&CreateDetectorRequest::default().enable(true))
        .unwrap();
    let id = created.detector_id.unwrap();

    let listed = gd.list_detectors(&ListDetectorsRequest::default()).unwrap();
    assert_eq!(listed.detector_ids, Some(vec![id.clone()]));
    assert_eq!(listed.next_token, None);

    gd.update_detector(&UpdateDetectorRequest::default().detector_id(&id).enable(false))
        .unwrap();
    gd.delete_detector(&DeleteDetectorRequest::default().detector_id(&id))
        .unwrap();

    let requests = stub.requests();
    let lines: Vec<String> = requests
        .iter()
        .map(|r| format!("{} {}", r.method, r.url))
        .collect();
    assert_eq!(
        lines,
        vec![
            "POST https://guardduty.eu-west-1.amazonaws.com/detector".to_string(),
            "GET https://guardduty.eu-west-1.amazonaws.com/detector".to_string(),
            format!("POST https://guardduty.eu-west-1.amazonaws.com/detector/{id}"),
            format!("DELETE https://guardduty.eu-west-1.amazonaws.com/detector/{id}"),
        ]
    );
    for r in &requests {
        assert!(r.header("authorization").unwrap().starts_with("AWS4-HMAC-SHA256 "));
        assert!(r.header("x-amz-date").is_some());
        assert!(r.header("user-agent").unwrap().starts_with("awsbind/"));
    }
}

#[test]
fn findings_workflow() {
    let stub = StubTransport::new();
    stub.push_json(200, r#"{"findingIds":["f1","f2"],"nextToken":"n2"}"#);
    stub.push_json(200, "{}");
    stub.push_json(200, "{}");
    let gd = client(&stub);

    let criteria = FindingCriteria::default()
        .criterion("severity", Condition::default().greater_than_or_equal(7));
    let page = gd
        .list_findings(
            &ListFindingsRequest::default()
                .detector_id("d1")
                .finding_criteria(criteria)
                .max_results(2),
        )
        .unwrap();
    let ids = page.finding_ids.unwrap();
    assert_eq!(page.next_token.as_deref(), Some("n2"));

    gd.update_findings_feedback(
        &UpdateFindingsFeedbackRequest::default()
            .detector_id("d1")
            .finding_ids(ids.clone())
            .feedback(Feedback::Useful),
    )
    .unwrap();
    gd.archive_findings(&ArchiveFindingsRequest::default().detector_id("d1").finding_ids(ids))
        .unwrap();

    let archived = stub.last_request().unwrap();
    assert!(archived.url.ends_with("/detector/d1/findings/archive"));
    assert_eq!(archived.body_text(), r#"{"findingIds":["f1","f2"]}"#);
}

#[test]
fn ip_set_status_round_trip() {
    let stub = StubTransport::new();
    stub.push_json(200, r#"{"ipSetId":"ip1"}"#);
    stub.push_json(
        200,
        r#"{"name":"office","format":"TXT","location":"s3://b/k","status":"ACTIVATING"}"#,
    );
    let gd = client(&stub);

    let created = gd
        .create_ip_set(
            &CreateIPSetRequest::default()
                .detector_id("d1")
                .name("office")
                .format(IpSetFormat::Txt)
                .location("s3://b/k")
                .activate(true),
        )
        .unwrap();
    let out = gd
        .get_ip_set(
            &GetIPSetRequest::default()
                .detector_id("d1")
                .ip_set_id(created.ip_set_id.unwrap()),
        )
        .unwrap();
    assert_eq!(out.status, Some(IpSetStatus::Activating));
    assert_eq!(out.format, Some(IpSetFormat::Txt));
    assert!(stub.last_request().unwrap().url.ends_with("/detector/d1/ipset/ip1"));
}

#[test]
fn undeclared_status_decodes() {
    let stub = StubTransport::new();
    stub.push_json(200, r#"{"name":"office","status":"SOME_NEW_STATUS"}"#);
    let out = client(&stub)
        .get_ip_set(&GetIPSetRequest::default().detector_id("d1").ip_set_id("ip1"))
        .unwrap();
    let status = out.status.unwrap();
    assert!(status.is_unknown());
    assert_eq!(status.as_str(), "SOME_NEW_STATUS");
    assert!("SOME_NEW_STATUS".parse::<IpSetStatus>().is_err());
}

#[test]
fn typed_and_fallback_errors() {
    let stub = StubTransport::new();
    stub.push_service_error(400, "BadRequestException", "The request is rejected because an invalid or out-of-range value is specified as an input parameter.");
    stub.push_service_error(403, "AccessDeniedException", "User is not authorized");
    let gd = client(&stub);

    let err = gd
        .get_members(&GetMembersRequest::default().detector_id("d1").account_ids(["1"]))
        .unwrap_err();
    let service = err.as_service_error().unwrap();
    assert!(service.is_bad_request());
    assert_eq!(service.code(), "BadRequestException");
    assert!(service.request_id().is_some());

    let err = gd
        .list_members(&ListMembersRequest::default().detector_id("d1"))
        .unwrap_err();
    match err {
        SdkError::Service(GuardDutyError::Unhandled(meta)) => {
            assert_eq!(meta.status_code, 403);
            assert_eq!(meta.message, "User is not authorized");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn missing_label_fails_before_sending() {
    let stub = StubTransport::new();
    let err = client(&stub)
        .get_filter(&GetFilterRequest::default().detector_id("d1"))
        .unwrap_err();
    assert!(matches!(
        err.as_client_error(),
        Some(awsbind::ClientError::MissingMember {
            operation: "GetFilter",
            member: "filterName"
        })
    ));
    assert_eq!(stub.request_count(), 0);
}

use awsbind_core::StubTransport;
use awsbind::costexplorer::types::{
    DateInterval, Dimension, Granularity, GroupDefinition, GroupDefinitionType,
};
use awsbind::costexplorer::*;
use awsbind::{ClientConfig, Credentials, SdkError};
use std::sync::Arc;

fn client(stub: &Arc<StubTransport>) -> CostExplorerClient {
    CostExplorerClient::builder()
        .config(ClientConfig::new("us-east-1"))
        .credentials(Credentials::new("AKIDEXAMPLE", "secret"))
        .transport(stub.clone())
        .build()
        .unwrap()
}

fn last_month() -> DateInterval {
    DateInterval::default().start("2020-04-01").end("2020-05-01")
}

#[test]
fn paginated_cost_and_usage() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        r#"{"ResultsByTime":[{"TimePeriod":{"Start":"2020-04-01","End":"2020-04-02"},"Total":{"BlendedCost":{"Amount":"1.5","Unit":"USD"}},"Estimated":false}],
            "NextPageToken":"p2"}"#,
    );
    stub.push_json(
        200,
        r#"{"ResultsByTime":[{"TimePeriod":{"Start":"2020-04-02","End":"2020-04-03"},"Total":{"BlendedCost":{"Amount":"2.5","Unit":"USD"}},"Estimated":true}]}"#,
    );
    let ce = client(&stub);

    let mut request = GetCostAndUsageRequest::default()
        .time_period(last_month())
        .granularity(Granularity::Daily)
        .metrics(["BlendedCost"]);
    let mut amounts = Vec::new();
    loop {
        let page = ce.get_cost_and_usage(&request).unwrap();
        for period in page.results_by_time.unwrap_or_default() {
            let total = period.total.unwrap_or_default();
            amounts.push(total["BlendedCost"].amount.clone().unwrap());
        }
        match page.next_page_token {
            Some(token) => {
                request.set_next_page_token(Some(token));
            }
            None => break,
        }
    }
    assert_eq!(amounts, ["1.5", "2.5"]);

    let bodies: Vec<serde_json::Value> = stub
        .requests()
        .iter()
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect();
    assert!(bodies[0].get("NextPageToken").is_none());
    assert_eq!(bodies[1]["NextPageToken"], "p2");
}

#[test]
fn grouped_dimension_query() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        r#"{"GroupDefinitions":[{"Type":"TAG","Key":"team"}],"ResultsByTime":[{"Groups":[{"Keys":["team$sec"],"Metrics":{"UnblendedCost":{"Amount":"3","Unit":"USD"}}}]}]}"#,
    );
    let out = client(&stub)
        .get_cost_and_usage(
            &GetCostAndUsageRequest::default()
                .time_period(last_month())
                .metrics(["UnblendedCost"])
                .group_by([GroupDefinition::default().r#type(GroupDefinitionType::Tag).key("team")]),
        )
        .unwrap();
    assert_eq!(
        out.group_definitions.unwrap()[0].r#type,
        Some(GroupDefinitionType::Tag)
    );
    let groups = out.results_by_time.unwrap()[0].groups.clone().unwrap();
    assert_eq!(groups[0].keys.as_deref(), Some(&["team$sec".to_string()][..]));
}

#[test]
fn invalid_next_token_is_typed() {
    let stub = StubTransport::new();
    stub.push_service_error(400, "InvalidNextTokenException", "The pagination token is invalid.");
    let err = client(&stub)
        .get_tags(
            &GetTagsRequest::default()
                .time_period(last_month())
                .next_page_token("stale"),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::Service(CostExplorerError::InvalidNextToken(_))
    ));
    assert!(err.to_string().contains("InvalidNextTokenException"));
}

#[test]
fn every_operation_sends_its_own_target() {
    let stub = StubTransport::new();
    stub.set_echo(true);
    let ce = client(&stub);

    ce.get_cost_forecast(
        &GetCostForecastRequest::default()
            .time_period(last_month())
            .metric(types::Metric::BlendedCost)
            .granularity(Granularity::Monthly),
    )
    .unwrap();
    ce.get_savings_plans_utilization(
        &GetSavingsPlansUtilizationRequest::default().time_period(last_month()),
    )
    .unwrap();
    ce.get_rightsizing_recommendation(&GetRightsizingRecommendationRequest::default().service("AmazonEC2"))
        .unwrap();

    let targets: Vec<String> = stub
        .requests()
        .iter()
        .map(|r| r.header("x-amz-target").unwrap().to_string())
        .collect();
    assert_eq!(
        targets,
        [
            "AWSInsightsIndexService.GetCostForecast",
            "AWSInsightsIndexService.GetSavingsPlansUtilization",
            "AWSInsightsIndexService.GetRightsizingRecommendation",
        ]
    );
}

#[test]
fn undeclared_dimension_in_rules_decodes() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        r#"{"CostCategory":{"CostCategoryArn":"arn:aws:ce::123456789012:costcategory/abc","Name":"entities",
            "RuleVersion":"CostCategoryExpression.v1",
            "Rules":[{"Value":"emea","Rule":{"Dimensions":{"Key":"INVOICING_ENTITY","Values":["AWS EMEA SARL"]}}},
                     {"Value":"core","Rule":{"Dimensions":{"Key":"SERVICE","Values":["Amazon GuardDuty"]}}}]}}"#,
    );
    let out = client(&stub)
        .describe_cost_category_definition(
            &DescribeCostCategoryDefinitionRequest::default()
                .cost_category_arn("arn:aws:ce::123456789012:costcategory/abc"),
        )
        .unwrap();

    let keys: Vec<Dimension> = out
        .cost_category
        .unwrap()
        .rules
        .unwrap()
        .into_iter()
        .filter_map(|r| r.rule.and_then(|e| e.dimensions).and_then(|d| d.key))
        .collect();
    assert_eq!(
        keys,
        [Dimension::Unknown("INVOICING_ENTITY".to_string()), Dimension::Service]
    );
}

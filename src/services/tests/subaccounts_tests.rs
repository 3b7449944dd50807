//! Tests for subaccount endpoints.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::Error;
use crate::services::SubAccount;
use crate::test_support::{envelope, list_envelope, with_client};

fn subaccount_json() -> serde_json::Value {
    json!({
        "id": 55,
        "subaccount_code": "ACCT_4hl4xenwpjy5wb",
        "business_name": "Sunshine Studios",
        "settlement_bank": "Access Bank",
        "account_number": "0193274682",
        "percentage_charge": "18.2",
        "is_verified": false,
        "settlement_schedule": "AUTO",
        "active": 1,
        "migrate": null
    })
}

#[tokio::test]
async fn create_subaccount_coerces_percentage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/subaccount"))
        .and(body_json(json!({
            "business_name": "Sunshine Studios",
            "settlement_bank": "044",
            "account_number": "0193274682",
            "percentage_charge": 18.2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(subaccount_json())))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sub = with_client(&mock_server, |c| {
        c.subaccounts().create(&SubAccount {
            business_name: Some("Sunshine Studios".to_string()),
            settlement_bank: Some("044".to_string()),
            account_number: Some("0193274682".to_string()),
            percentage_charge: Some(18.2),
            ..Default::default()
        })
    })
    .await
    .unwrap();

    assert_eq!(sub.percentage_charge, Some(18.2));
    assert_eq!(sub.active, Some(true));
    assert!(sub.migrate.is_none());
}

#[tokio::test]
async fn update_get_and_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/subaccount/55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(subaccount_json())))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/subaccount/55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(subaccount_json())))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/subaccount"))
        .and(query_param("perPage", "10"))
        .and(query_param("page", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_envelope(json!([subaccount_json()]), 10, 0)),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let (updated, fetched, list, list_n, missing) = with_client(&mock_server, |c| {
        let subaccounts = c.subaccounts();
        (
            subaccounts.update(&SubAccount {
                id: Some(55),
                settlement_schedule: Some("AUTO".to_string()),
                ..Default::default()
            }),
            subaccounts.get(55),
            subaccounts.list(),
            subaccounts.list_n(10, 0),
            subaccounts.update(&SubAccount::default()),
        )
    })
    .await;

    assert_eq!(updated.unwrap(), fetched.unwrap());
    assert_eq!(list.unwrap(), list_n.unwrap());
    assert!(matches!(missing, Err(Error::InvalidRequest(_))));
}

//! Tests for the endpoints implemented directly on the client.

use serde_json::json;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::Error;
use crate::test_support::{envelope, with_client};

#[tokio::test]
async fn resolve_card_bin() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/decision/bin/539983"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "bin": "539983",
            "brand": "Mastercard",
            "country_code": "NG",
            "card_type": "DEBIT"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, |c| c.resolve_card_bin("539983")).await;

    let bin = result.unwrap();
    assert_eq!(bin["brand"], json!("Mastercard"));
    assert_eq!(bin["card_type"], json!("DEBIT"));
}

#[tokio::test]
async fn check_balance_returns_every_currency() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Balances retrieved",
            "data": [
                { "currency": "NGN", "balance": 123456 },
                { "currency": "USD", "balance": "700" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let balances = with_client(&mock_server, |c| c.check_balance())
        .await
        .unwrap();

    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].currency.as_deref(), Some("NGN"));
    assert_eq!(balances[0].balance, Some(123456));
    assert_eq!(balances[1].balance, Some(700));
}

#[tokio::test]
async fn check_balance_without_data_is_unexpected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Balances retrieved"
        })))
        .mount(&mock_server)
        .await;

    let result = with_client(&mock_server, |c| c.check_balance()).await;
    assert!(matches!(result, Err(Error::UnexpectedResponse(_))));
}

#[tokio::test]
async fn get_session_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/integration/payment_session_timeout"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!({ "payment_session_timeout": 30 }))),
        )
        .mount(&mock_server)
        .await;

    let resp = with_client(&mock_server, |c| c.get_session_timeout())
        .await
        .unwrap();
    assert_eq!(resp["payment_session_timeout"], json!(30));
}

#[tokio::test]
async fn update_session_timeout_sends_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/integration/payment_session_timeout"))
        .and(body_string("timeout=45"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!({ "payment_session_timeout": 45 }))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let resp = with_client(&mock_server, |c| c.update_session_timeout(45))
        .await
        .unwrap();
    assert_eq!(resp["payment_session_timeout"], json!(45));
}

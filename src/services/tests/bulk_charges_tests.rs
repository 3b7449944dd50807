//! Tests for bulk charge endpoints.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::services::BulkItem;
use crate::test_support::{envelope, list_envelope, with_client};

fn batch_json() -> serde_json::Value {
    json!({
        "id": 17,
        "batch_code": "BCH_180tl7oq7cayggh",
        "status": "active",
        "domain": "test",
        "total_charges": "2",
        "pending_charges": 1
    })
}

#[tokio::test]
async fn initiate_posts_bare_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bulkcharge"))
        .and(body_json(json!([
            { "authorization": "AUTH_n95vpedf", "amount": 2500 },
            { "authorization": "AUTH_ljdt4e4j", "amount": 1500, "reference": "bulk-2" }
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(batch_json())))
        .expect(1)
        .mount(&mock_server)
        .await;

    let batch = with_client(&mock_server, |c| {
        c.bulk_charges().initiate(&[
            BulkItem {
                authorization: Some("AUTH_n95vpedf".to_string()),
                amount: Some(2500),
                ..Default::default()
            },
            BulkItem {
                authorization: Some("AUTH_ljdt4e4j".to_string()),
                amount: Some(1500),
                reference: Some("bulk-2".to_string()),
            },
        ])
    })
    .await
    .unwrap();

    assert_eq!(batch.batch_code.as_deref(), Some("BCH_180tl7oq7cayggh"));
    assert_eq!(batch.total_charges, Some(2));
    assert_eq!(batch.pending_charges, Some(1));
}

#[tokio::test]
async fn list_and_get_batches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bulkcharge"))
        .and(query_param("perPage", "10"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_envelope(json!([batch_json()]), 10, 0)))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/bulkcharge/BCH_180tl7oq7cayggh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "batch_code": "BCH_180tl7oq7cayggh",
            "total_charges": 2,
            "pending_charge": "0"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (list, list_n, batch) = with_client(&mock_server, |c| {
        let bulk = c.bulk_charges();
        (bulk.list(), bulk.list_n(10, 0), bulk.get("BCH_180tl7oq7cayggh"))
    })
    .await;

    assert_eq!(list.unwrap(), list_n.unwrap());
    assert_eq!(batch.unwrap().pending_charges, Some(0));
}

#[tokio::test]
async fn batch_charges_return_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bulkcharge/BCH_1/charges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Bulk charge items retrieved",
            "data": [{ "status": "success", "amount": 2500 }],
            "meta": { "total": 1 }
        })))
        .mount(&mock_server)
        .await;

    let resp = with_client(&mock_server, |c| c.bulk_charges().get_batch_charges("BCH_1"))
        .await
        .unwrap();

    assert_eq!(resp["data"][0]["amount"], json!(2500));
    assert_eq!(resp["meta"]["total"], json!(1));
}

#[tokio::test]
async fn pause_and_resume_are_gets() {
    let mock_server = MockServer::start().await;

    for action in ["pause", "resume"] {
        Mock::given(method("GET"))
            .and(path(format!("/bulkcharge/{action}/BCH_1")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": format!("Bulk charge batch has been {action}d")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let (paused, resumed) = with_client(&mock_server, |c| {
        (c.bulk_charges().pause("BCH_1"), c.bulk_charges().resume("BCH_1"))
    })
    .await;

    assert_eq!(paused.unwrap()["message"], json!("Bulk charge batch has been paused"));
    assert_eq!(resumed.unwrap()["message"], json!("Bulk charge batch has been resumed"));
}

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── CLASSIFY ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_classify_batch() {
    let server = common::make_server();

    let response = server
        .post("/api/classify")
        .json(&json!({"names": ["9999.x", "1-.nft", "unregistered.zil"]}))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json["items"].as_array().unwrap();

    assert_eq!(items.len(), 3);

    assert_eq!(items[0]["label"], "9999");
    assert_eq!(items[0]["number_club"], "10k Club");
    assert_eq!(items[0]["character_set"], "digit");

    assert_eq!(items[1]["number_club"], Value::Null);
    assert_eq!(items[1]["character_set"], "none");

    assert_eq!(items[2]["suffix"], "zil");
    assert_eq!(items[2]["character_set"], "letter");
}

#[tokio::test]
async fn test_classify_dotless_name() {
    let server = common::make_server();

    let response = server
        .post("/api/classify")
        .json(&json!({"names": ["500"]}))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["items"][0]["label"], "500");
    assert_eq!(json["items"][0]["suffix"], Value::Null);
    assert_eq!(json["items"][0]["number_club"], "999 Club");
}

#[tokio::test]
async fn test_classify_empty_batch() {
    let server = common::make_server();

    let response = server
        .post("/api/classify")
        .json(&json!({"names": []}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_classify_empty_name() {
    let server = common::make_server();

    let response = server
        .post("/api/classify")
        .json(&json!({"names": ["ok.x", ""]}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_classify_too_many_names() {
    let server = common::make_server();

    let names: Vec<String> = (1..=101).map(|i| format!("{i}.x")).collect();
    let response = server
        .post("/api/classify")
        .json(&json!({ "names": names }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── LIST ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_domains_list_defaults() {
    let server = common::make_server();

    let response = server.get("/api/domains").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json["items"].as_array().unwrap();

    assert_eq!(items.len(), common::REGISTERED.len());
    assert_eq!(items[0]["name"], "202.crypto");
    assert_eq!(items[0]["number_club"], "999 Club");

    assert_eq!(json["pagination"]["limit"], 20);
    assert_eq!(json["pagination"]["offset"], 0);
    assert_eq!(json["pagination"]["total_items"], 8);
}

#[tokio::test]
async fn test_domains_list_limit_and_offset() {
    let server = common::make_server();

    let response = server
        .get("/api/domains")
        .add_query_param("limit", 2)
        .add_query_param("offset", 1)
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json["items"].as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "9999.x");
    assert_eq!(items[0]["number_club"], "10k Club");
    assert_eq!(items[1]["name"], "10000.x");
    assert_eq!(json["pagination"]["limit"], 2);
    assert_eq!(json["pagination"]["offset"], 1);
    assert_eq!(json["pagination"]["total_items"], 8);
}

#[tokio::test]
async fn test_domains_list_offset_past_end() {
    let server = common::make_server();

    let response = server
        .get("/api/domains")
        .add_query_param("offset", 50)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["items"], json!([]));
}

#[tokio::test]
async fn test_domains_list_invalid_limit() {
    let server = common::make_server();

    for limit in [0, 101] {
        let response = server
            .get("/api/domains")
            .add_query_param("limit", limit)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn test_domains_list_negative_offset() {
    let server = common::make_server();

    let response = server
        .get("/api/domains")
        .add_query_param("offset", -1)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

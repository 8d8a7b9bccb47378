mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

fn attribute<'a>(json: &'a Value, trait_type: &str) -> Option<&'a Value> {
    json["attributes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["trait_type"] == trait_type)
        .map(|a| &a["value"])
}

#[tokio::test]
async fn test_metadata_full_document() {
    let server = common::make_server();

    let response = server.get("/metadata/202.crypto").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "name": "202.crypto",
        "attributes": [
            {"trait_type": "Ending", "value": "crypto"},
            {"trait_type": "Length", "value": 3, "display_type": "number"},
            {"trait_type": "Character Set", "value": "digit"},
            {"trait_type": "Number Club", "value": "999 Club"},
        ]
    }));
}

#[tokio::test]
async fn test_metadata_ten_k_boundary() {
    let server = common::make_server();

    let json = server.get("/metadata/10000.x").await.json::<Value>();
    assert_eq!(attribute(&json, "Number Club"), Some(&json!("10k Club")));

    let json = server.get("/metadata/10001.x").await.json::<Value>();
    assert_eq!(attribute(&json, "Number Club"), Some(&json!("100k Club")));
}

#[tokio::test]
async fn test_metadata_leading_zero_has_no_club() {
    let server = common::make_server();

    let json = server.get("/metadata/0202.nft").await.json::<Value>();

    assert_eq!(attribute(&json, "Number Club"), None);
    assert_eq!(attribute(&json, "Character Set"), Some(&json!("digit")));
}

#[tokio::test]
async fn test_metadata_character_sets() {
    let server = common::make_server();

    let cases = [
        ("0x199fnfwnef.nft", "alphanumeric"),
        ("WEFff.x", "letter"),
        ("1-.nft", "none"),
        ("9999.x", "digit"),
    ];

    for (name, expected) in cases {
        let json = server.get(&format!("/metadata/{name}")).await.json::<Value>();
        assert_eq!(
            attribute(&json, "Character Set"),
            Some(&json!(expected)),
            "{name}"
        );
    }
}

#[tokio::test]
async fn test_metadata_unknown_domain() {
    let server = common::make_server();

    let response = server.get("/metadata/unknown.crypto").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["name"], "unknown.crypto");
}

#[tokio::test]
async fn test_metadata_database_failure() {
    let server = common::make_server_with(Arc::new(common::FailingDomainRepository));

    let response = server.get("/metadata/202.crypto").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"]["code"], "internal_error");
}

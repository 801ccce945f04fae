//! Blocking client against a mock server

use mockito::{Matcher, Server};
use serde_json::json;
use tgtg_api_client::blocking::TgtgClient;
use tgtg_api_client::endpoints::{ItemsNearbyParams, OrderRating};
use tgtg_api_client::ClientConfig;

fn client_for(url: String) -> TgtgClient {
    let mut client = TgtgClient::with_config(ClientConfig::default().with_base_url(url)).unwrap();
    client.set_bearer_token("abc");
    client.set_user_id("u1");
    client.set_language("en-GB").unwrap();
    client
}

#[test]
fn test_blocking_nearby_restaurants() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/location/v1/lookup")
        .match_header("authorization", "Bearer abc")
        .match_header("accept-language", "en-GB")
        .match_body(Matcher::Json(json!({ "latitude": 51.5, "longitude": -0.1 })))
        .with_status(200)
        .with_body(r#"{"restaurants":[]}"#)
        .create();

    let client = client_for(server.url());
    let response = client.nearby_restaurants(51.5, -0.1).unwrap();

    assert_eq!(response, json!({ "restaurants": [] }));
    mock.assert();
}

#[test]
fn test_blocking_items_nearby_stock_only() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/item/v7/")
        .match_body(Matcher::PartialJson(json!({
            "user_id": "1426427",
            "with_stock_only": true,
            "radius": 5
        })))
        .with_status(200)
        .with_body(r#"{"items":[]}"#)
        .create();

    let client = client_for(server.url());
    let params = ItemsNearbyParams::new(1.0, 2.0)
        .with_radius(5)
        .with_stock_only(true);
    client.items_nearby(&params).unwrap();

    mock.assert();
}

#[test]
fn test_blocking_rate_order_not_redeemed() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/order/v6/o1/rate")
        .with_status(403)
        .create();

    let client = client_for(server.url());
    let status = client
        .rate_order("o1", &OrderRating::new(3, 3, 3))
        .unwrap();

    assert_eq!(status, 403);
    mock.assert();
}

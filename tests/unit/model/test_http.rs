use auction_client::model::http::{ApiRequest, Expectation, FailurePolicy};
use reqwest::{Method, StatusCode};
use serde_json::json;

#[test]
fn test_get_request_defaults() {
    let request = ApiRequest::get("item/1");
    assert_eq!(request.method(), &Method::GET);
    assert_eq!(request.path(), "item/1");
    assert!(request.query_pairs().is_empty());
    assert!(request.body().is_none());
    assert!(request.authorization().is_none());
    assert_eq!(request.expectation(), Expectation::read());
}

#[test]
fn test_post_request_serializes_body() {
    let request = ApiRequest::post("item/1/bid", &json!({"amount": 5}))
        .unwrap()
        .authorized("token");
    assert_eq!(request.method(), &Method::POST);
    assert_eq!(request.body(), Some(&json!({"amount": 5})));
    assert_eq!(request.authorization(), Some("token"));
}

#[test]
fn test_query_pairs_accumulate() {
    let request = ApiRequest::get("search")
        .query(vec![("q", "lamp".to_string())])
        .query(vec![("limit", "1".to_string())]);
    assert_eq!(
        request.query_pairs(),
        &[("q", "lamp".to_string()), ("limit", "1".to_string())]
    );
}

#[test]
fn test_read_expectation() {
    let expectation = Expectation::read();
    assert_eq!(expectation.success, StatusCode::OK);
    assert_eq!(
        expectation.failure,
        FailurePolicy::Fixed {
            message: "Something went wrong",
            not_found: None
        }
    );
}

#[test]
fn test_write_expectation() {
    let expectation = Expectation::write(StatusCode::CREATED, "Failed to place bid");
    assert_eq!(expectation.success, StatusCode::CREATED);
    assert_eq!(
        expectation.failure,
        FailurePolicy::ServerMessage {
            fallback: "Failed to place bid"
        }
    );
}

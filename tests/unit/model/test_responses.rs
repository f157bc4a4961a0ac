use auction_client::model::responses::ErrorResponse;
use serde_json::json;

#[test]
fn test_error_response_reads_message() {
    let response = ErrorResponse::from_body(&json!({"error_message": "bid too low"}));
    assert_eq!(response.error_message.as_deref(), Some("bid too low"));
    assert_eq!(response.message_or("fallback"), "bid too low");
}

#[test]
fn test_error_response_missing_message_falls_back() {
    let response = ErrorResponse::from_body(&json!({"status": 400}));
    assert_eq!(response.error_message, None);
    assert_eq!(response.message_or("Failed to place bid"), "Failed to place bid");
}

#[test]
fn test_error_response_empty_or_non_string_message_falls_back() {
    for body in [
        json!({"error_message": ""}),
        json!({"error_message": null}),
        json!({"error_message": 42}),
        json!(["error_message"]),
        json!(null),
    ] {
        assert_eq!(ErrorResponse::from_body(&body).message_or("fb"), "fb", "{body}");
    }
}

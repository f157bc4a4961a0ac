use auction_client::model::requests::{AnswerRequest, BidRequest, QuestionRequest, SearchParams};
use serde_json::json;

#[test]
fn test_search_params_without_anything_has_no_pairs() {
    let params = SearchParams::new(None, None);
    assert!(params.to_query_pairs().is_empty());
}

#[test]
fn test_search_params_query_only_yields_single_pair() {
    let params = SearchParams::new(Some("lamp"), None);
    assert_eq!(params.to_query_pairs(), vec![("q", "lamp".to_string())]);
}

#[test]
fn test_search_params_query_precedes_limit() {
    let params = SearchParams::new(Some("lamp"), Some(10));
    assert_eq!(
        params.to_query_pairs(),
        vec![("q", "lamp".to_string()), ("limit", "10".to_string())]
    );
}

#[test]
fn test_search_params_skip_empty_query_and_zero_limit() {
    assert_eq!(
        SearchParams::new(Some(""), Some(4)).to_query_pairs(),
        vec![("limit", "4".to_string())]
    );
    assert!(SearchParams::new(None, Some(0)).to_query_pairs().is_empty());
}

#[test]
fn test_write_bodies_use_backend_field_names() {
    assert_eq!(
        serde_json::to_value(BidRequest { amount: 250 }).unwrap(),
        json!({"amount": 250})
    );
    assert_eq!(
        serde_json::to_value(QuestionRequest {
            question_text: "Any scratches?".to_string()
        })
        .unwrap(),
        json!({"question_text": "Any scratches?"})
    );
    assert_eq!(
        serde_json::to_value(AnswerRequest {
            answer_text: "None".to_string()
        })
        .unwrap(),
        json!({"answer_text": "None"})
    );
}

#[test]
fn test_search_params_display_is_compact_json() {
    let params = SearchParams::new(Some("lamp"), Some(2));
    assert_eq!(params.to_string(), r#"{"query":"lamp","limit":2}"#);
}

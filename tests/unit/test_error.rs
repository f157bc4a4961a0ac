use auction_client::error::AppError;

#[test]
fn test_app_error_display_rejected_is_bare_message() {
    let error = AppError::Rejected("bid too low".to_string());
    assert_eq!(error.to_string(), "bid too low");
}

#[test]
fn test_app_error_display_route_not_found() {
    let error = AppError::RouteNotFound("/nowhere".to_string());
    assert_eq!(error.to_string(), "no route matches path: /nowhere");
}

#[test]
fn test_app_error_rejection_accessor() {
    let rejected = AppError::Rejected("Item not found".to_string());
    assert_eq!(rejected.rejection(), Some("Item not found"));

    let other = AppError::RouteNotFound("/x".to_string());
    assert_eq!(other.rejection(), None);
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        other => panic!("Expected Json error, got {other:?}"),
    }
}

#[test]
fn test_app_error_from_io() {
    let app_error: AppError = std::io::Error::other("disk").into();
    assert!(matches!(app_error, AppError::Io(_)));
    assert_eq!(app_error.to_string(), "io error: disk");
}

#[test]
fn test_app_error_from_url() {
    let url_error = url::Url::parse("::::").unwrap_err();
    let app_error: AppError = url_error.into();
    assert!(app_error.to_string().starts_with("invalid url: "));
}

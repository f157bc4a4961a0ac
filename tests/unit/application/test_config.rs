use auction_client::application::config::Config;
use auction_client::constants::{DEFAULT_BASE_URL, DEFAULT_LOCAL_STORAGE_PATH};
use std::env;

#[test]
fn test_config_with_base_url() {
    let config = Config::with_base_url("http://auction.test:9000");
    assert_eq!(config.rest_api.base_url, "http://auction.test:9000");
    assert_eq!(config.storage.local_storage_path, DEFAULT_LOCAL_STORAGE_PATH);
}

#[test]
fn test_config_new_reads_environment() {
    unsafe {
        env::set_var("AUCTION_API_BASE_URL", "http://from-env:4000");
        env::set_var("AUCTION_LOCAL_STORAGE", "/tmp/storage.json");
    }

    let config = Config::new();

    assert_eq!(config.rest_api.base_url, "http://from-env:4000");
    assert_eq!(config.storage.local_storage_path, "/tmp/storage.json");

    unsafe {
        env::remove_var("AUCTION_API_BASE_URL");
        env::remove_var("AUCTION_LOCAL_STORAGE");
    }
}

#[test]
fn test_default_base_url_is_an_http_url() {
    assert!(url::Url::parse(DEFAULT_BASE_URL).is_ok());
}

#[test]
fn test_config_serializes_to_json() {
    let config = Config::with_base_url("http://localhost:3333");
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["rest_api"]["base_url"], "http://localhost:3333");
    assert_eq!(config.to_string(), serde_json::to_string(&config).unwrap());
}

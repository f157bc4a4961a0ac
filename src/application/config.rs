use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LOCAL_STORAGE_PATH};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the auction REST API
pub struct RestApiConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the local key/value storage holding the session token
pub struct StorageConfig {
    /// Path of the JSON file backing local storage
    pub local_storage_path: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the auction client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Local storage configuration
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment and an optional `.env` file.
    ///
    /// # Environment
    /// * `AUCTION_API_BASE_URL` - backend base URL, defaults to [`DEFAULT_BASE_URL`]
    /// * `AUCTION_LOCAL_STORAGE` - local storage file, defaults to [`DEFAULT_LOCAL_STORAGE_PATH`]
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("AUCTION_API_BASE_URL", DEFAULT_BASE_URL.to_string()),
            },
            storage: StorageConfig {
                local_storage_path: get_env_or_default(
                    "AUCTION_LOCAL_STORAGE",
                    DEFAULT_LOCAL_STORAGE_PATH.to_string(),
                ),
            },
        }
    }

    /// Creates a configuration pointing at `base_url`, ignoring the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
            },
            storage: StorageConfig {
                local_storage_path: DEFAULT_LOCAL_STORAGE_PATH.to_string(),
            },
        }
    }
}

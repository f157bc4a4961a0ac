/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Auction Client Prelude
//!
//! Brings the commonly used types and traits into scope:
//!
//! ```rust
//! use auction_client::prelude::*;
//!
//! let mut router = Router::new();
//! assert_eq!(router.push("/item/42").unwrap(), View::ItemDetail { id: "42".to_string() });
//! ```

// ============================================================================
// CONFIGURATION AND ERRORS
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, RestApiConfig, StorageConfig};

/// Main error type for the library
pub use crate::error::AppError;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// API CLIENT
// ============================================================================

/// HTTP-backed client implementing every service interface
pub use crate::application::client::Client;

/// Service interfaces
pub use crate::application::interfaces::{
    bid::BidService, item::ItemService, question::QuestionService,
};

/// Request helper
pub use crate::model::http::{ApiRequest, Expectation, FailurePolicy, HttpClient};

// ============================================================================
// SESSION
// ============================================================================

/// Session token and its read-only sources
pub use crate::session::{LocalStorage, MemoryStorage, SessionToken, TokenSource};

// ============================================================================
// ROUTING
// ============================================================================

/// Route table, resolution and history
pub use crate::router::{Location, ROUTES, RouteName, RouteRecord, Router, View, resolve};

// ============================================================================
// TYPED VIEWS
// ============================================================================

/// Typed payloads
pub use crate::presentation::{Bid, Item, Question, decode};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde_json::{Value, json};
pub use tracing::{debug, error, info, warn};

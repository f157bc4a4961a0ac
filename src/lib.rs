/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Auction Client
//!
//! Client-side routing and REST API access for an auction application.
//!
//! The crate has two independent halves:
//!
//! - [`router`]: a static table mapping URL paths to views, backed by a
//!   navigation history.
//! - [`application`]: thin async operations (search, item lookup, bidding,
//!   questions and answers) against the auction backend, all driven by a single
//!   request helper in [`model::http`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use auction_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::new())?;
//! let items = client.search_items(Some("lamp"), Some(10)).await?;
//! println!("{items}");
//!
//! let storage = LocalStorage::new(".auction/local_storage.json");
//! let token = storage.session_token()?;
//! let bid = client.place_bid("42", 100, token.as_ref()).await?;
//! println!("{bid}");
//! # Ok(())
//! # }
//! ```

/// Service interfaces and the HTTP-backed client
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request helper and wire models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Typed views over backend payloads
pub mod presentation;
/// Path-to-view routing and navigation history
pub mod router;
/// Session token and local storage access
pub mod session;
/// Logging and environment helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}

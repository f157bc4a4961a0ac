/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Typed views over backend payloads.
//!
//! API operations resolve with the untouched JSON body. Callers that prefer
//! typed access decode those values with [`decode`]; fields this crate does not
//! know about are kept in each type's `extra` map.

/// Bid records
pub mod bid;
/// Auction items
pub mod item;
/// Questions and answers
pub mod question;

pub use bid::Bid;
pub use item::Item;
pub use question::Question;

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes a payload returned by an API operation into a typed view
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    Ok(serde_json::from_value(value)?)
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::ERROR_MESSAGE_FIELD;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend on a refused write
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable reason, when the server supplies one
    pub error_message: Option<String>,
}

impl ErrorResponse {
    /// Extracts the error message from an arbitrary JSON body.
    ///
    /// Only a non-empty string counts as a message; anything else is treated as absent.
    pub fn from_body(body: &Value) -> Self {
        let error_message = body
            .get(ERROR_MESSAGE_FIELD)
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        Self { error_message }
    }

    /// The server's message, or `fallback` when none was supplied
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.error_message.as_deref().unwrap_or(fallback)
    }
}

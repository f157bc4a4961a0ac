/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::ABSENT_TOKEN_VALUE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque credential issued by the login flow and sent on authenticated writes
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the authorization header for an optional token.
    ///
    /// The header is always sent; without a token it carries the literal `null`.
    pub fn header_value(token: Option<&SessionToken>) -> &str {
        token.map(SessionToken::as_str).unwrap_or(ABSENT_TOKEN_VALUE)
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for SessionToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

// never print credentials
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"***").finish()
    }
}

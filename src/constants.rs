/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

/// Base URL of the auction backend, fixed at build time.
///
/// Set `AUCTION_API_BASE_URL` while compiling to bake in a different default;
/// the runtime variable of the same name still takes precedence in [`crate::application::config::Config`].
pub const DEFAULT_BASE_URL: &str = match option_env!("AUCTION_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3333",
};
/// Default location of the local storage file holding the session token
pub const DEFAULT_LOCAL_STORAGE_PATH: &str = ".auction/local_storage.json";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("auction-client/", env!("CARGO_PKG_VERSION"));

/// Local storage key under which the login flow stores the session token
pub const SESSION_TOKEN_KEY: &str = "session_token";
/// Header carrying the session token on authenticated writes
pub const AUTHORIZATION_HEADER: &str = "X-Authorization";
/// Header value sent when the caller has no session token
pub const ABSENT_TOKEN_VALUE: &str = "null";
/// Field of an error body carrying the server's message
pub const ERROR_MESSAGE_FIELD: &str = "error_message";

/// Failure message for reads answered with an unexpected status
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";
/// Failure message for an item lookup answered with 404
pub const ITEM_NOT_FOUND_MESSAGE: &str = "Item not found";
/// Fallback failure message for bid placement
pub const PLACE_BID_FAILURE_MESSAGE: &str = "Failed to place bid";
/// Fallback failure message for asking a question
pub const ASK_QUESTION_FAILURE_MESSAGE: &str = "Failed to post question";
/// Fallback failure message for answering a question
pub const ANSWER_QUESTION_FAILURE_MESSAGE: &str = "Failed to answer question";

/// Read-only local storage sources for the session token
pub mod storage;
/// Session token type
pub mod token;

pub use storage::*;
pub use token::*;

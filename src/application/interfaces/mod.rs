/// Bid service interface
pub mod bid;
/// Item service interface
pub mod item;
/// Question service interface
pub mod question;

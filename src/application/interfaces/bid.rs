use crate::error::AppError;
use crate::session::SessionToken;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for bidding on items
#[async_trait]
pub trait BidService: Send + Sync {
    /// Places a bid on an item
    ///
    /// # Arguments
    /// * `item_id` - Item to bid on, forwarded as-is
    /// * `amount` - Offered amount
    /// * `session_token` - Credential of the bidder; sent as `null` when absent
    ///
    /// # Returns
    /// The created bid record on 201. Any other status fails with the server's
    /// `error_message`, or `"Failed to place bid"` when it has none.
    async fn place_bid(
        &self,
        item_id: &str,
        amount: u64,
        session_token: Option<&SessionToken>,
    ) -> Result<Value, AppError>;

    /// Gets the bids placed on an item, in the order the backend returns them
    async fn get_bid_history(&self, item_id: &str) -> Result<Value, AppError>;
}

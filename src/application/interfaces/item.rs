use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for reading auction items
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Searches items
    ///
    /// # Arguments
    /// * `query` - Free-text query, left out of the request when `None` or empty
    /// * `limit` - Maximum number of results, left out when `None` or zero
    ///
    /// # Returns
    /// The list of matching items exactly as returned by the backend
    async fn search_items(&self, query: Option<&str>, limit: Option<u32>)
    -> Result<Value, AppError>;

    /// Gets the details of a single item.
    ///
    /// A 404 fails with `"Item not found"`, any other unexpected status with
    /// `"Something went wrong"`.
    async fn get_item(&self, item_id: &str) -> Result<Value, AppError>;
}

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An auctionable listing
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Item {
    /// Item identifier
    #[serde(alias = "item_id", default)]
    pub id: Option<u64>,
    /// Listing title
    #[serde(alias = "name", default)]
    pub title: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Remaining fields, as sent by the backend
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

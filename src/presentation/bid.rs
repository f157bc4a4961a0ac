use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A monetary offer against an item
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Bid {
    /// Item the bid was placed on
    #[serde(default)]
    pub item_id: Option<u64>,
    /// Offered amount
    #[serde(default)]
    pub amount: Option<f64>,
    /// Remaining fields, as sent by the backend
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A buyer inquiry on an item and, once given, the seller's reply
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Question {
    /// Question identifier
    #[serde(alias = "id", default)]
    pub question_id: Option<u64>,
    /// Text of the question
    #[serde(default)]
    pub question_text: Option<String>,
    /// Text of the answer, absent until answered
    #[serde(default)]
    pub answer_text: Option<String>,
    /// Remaining fields, as sent by the backend
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    /// Whether the seller has replied
    pub fn is_answered(&self) -> bool {
        self.answer_text.as_deref().is_some_and(|a| !a.is_empty())
    }
}

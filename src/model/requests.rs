/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Parameters of a search request
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text query, omitted from the URL when empty
    pub query: Option<String>,
    /// Maximum number of results, omitted from the URL when zero
    pub limit: Option<u32>,
}

impl SearchParams {
    /// Creates search parameters
    pub fn new(query: Option<&str>, limit: Option<u32>) -> Self {
        Self {
            query: query.map(str::to_string),
            limit,
        }
    }

    /// Query string pairs in the order the backend expects: `q` first, then `limit`
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            pairs.push(("q", query.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Body of `POST /item/{id}/bid`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidRequest {
    /// Offered amount
    pub amount: u64,
}

/// Body of `POST /item/{id}/question`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRequest {
    /// Text of the question
    pub question_text: String,
}

/// Body of `POST /question/{id}`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRequest {
    /// Text of the answer
    pub answer_text: String,
}

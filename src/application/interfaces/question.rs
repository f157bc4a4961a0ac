use crate::error::AppError;
use crate::session::SessionToken;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the questions and answers attached to items
#[async_trait]
pub trait QuestionService: Send + Sync {
    /// Gets the questions asked about an item
    async fn get_questions(&self, item_id: &str) -> Result<Value, AppError>;

    /// Asks a question about an item.
    ///
    /// Fails with the server's `error_message`, or `"Failed to post question"`.
    async fn ask_question(
        &self,
        item_id: &str,
        question_text: &str,
        session_token: Option<&SessionToken>,
    ) -> Result<Value, AppError>;

    /// Answers a question.
    ///
    /// Fails with the server's `error_message`, or `"Failed to answer question"`.
    async fn answer_question(
        &self,
        question_id: &str,
        answer_text: &str,
        session_token: Option<&SessionToken>,
    ) -> Result<Value, AppError>;
}

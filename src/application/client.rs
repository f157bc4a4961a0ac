/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::bid::BidService;
use crate::application::interfaces::item::ItemService;
use crate::application::interfaces::question::QuestionService;
use crate::constants::{
    ANSWER_QUESTION_FAILURE_MESSAGE, ASK_QUESTION_FAILURE_MESSAGE, ITEM_NOT_FOUND_MESSAGE,
    PLACE_BID_FAILURE_MESSAGE,
};
use crate::error::AppError;
use crate::model::http::{ApiRequest, Expectation, HttpClient};
use crate::model::requests::{AnswerRequest, BidRequest, QuestionRequest, SearchParams};
use crate::session::SessionToken;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the auction backend.
///
/// Each operation issues exactly one request; nothing is cached, retried or
/// shared between calls, so a `Client` can be cloned or put behind an `Arc` freely.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for the backend named in `config`
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(&config)?);
        Ok(Self { http_client })
    }

    /// Creates a client from the environment, see [`Config::new`]
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Creates a client sharing an existing transport
    pub fn with_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// The underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl ItemService for Client {
    async fn search_items(
        &self,
        query: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Value, AppError> {
        let params = SearchParams::new(query, limit);
        info!("Searching items: {}", params);
        let request = ApiRequest::get("search").query(params.to_query_pairs());
        let items = self.http_client.send(request).await?;
        debug!(
            "Search returned {} items",
            items.as_array().map_or(0, Vec::len)
        );
        Ok(items)
    }

    async fn get_item(&self, item_id: &str) -> Result<Value, AppError> {
        info!("Getting item: {}", item_id);
        let request = ApiRequest::get(format!("item/{item_id}"))
            .expect(Expectation::read().with_not_found(ITEM_NOT_FOUND_MESSAGE));
        let item = self.http_client.send(request).await?;
        debug!("Item obtained: {}", item_id);
        Ok(item)
    }
}

#[async_trait]
impl BidService for Client {
    async fn place_bid(
        &self,
        item_id: &str,
        amount: u64,
        session_token: Option<&SessionToken>,
    ) -> Result<Value, AppError> {
        info!("Placing bid of {} on item {}", amount, item_id);
        let request = ApiRequest::post(format!("item/{item_id}/bid"), &BidRequest { amount })?
            .authorized(SessionToken::header_value(session_token))
            .expect(Expectation::write(
                StatusCode::CREATED,
                PLACE_BID_FAILURE_MESSAGE,
            ));
        let bid = self.http_client.send(request).await?;
        debug!("Bid placed on item {}", item_id);
        Ok(bid)
    }

    async fn get_bid_history(&self, item_id: &str) -> Result<Value, AppError> {
        info!("Getting bid history for item: {}", item_id);
        let bids = self
            .http_client
            .send(ApiRequest::get(format!("item/{item_id}/bid")))
            .await?;
        debug!(
            "Bid history obtained: {} bids",
            bids.as_array().map_or(0, Vec::len)
        );
        Ok(bids)
    }
}

#[async_trait]
impl QuestionService for Client {
    async fn get_questions(&self, item_id: &str) -> Result<Value, AppError> {
        info!("Getting questions for item: {}", item_id);
        let questions = self
            .http_client
            .send(ApiRequest::get(format!("item/{item_id}/question")))
            .await?;
        debug!(
            "Questions obtained: {} questions",
            questions.as_array().map_or(0, Vec::len)
        );
        Ok(questions)
    }

    async fn ask_question(
        &self,
        item_id: &str,
        question_text: &str,
        session_token: Option<&SessionToken>,
    ) -> Result<Value, AppError> {
        info!("Asking question on item {}", item_id);
        let body = QuestionRequest {
            question_text: question_text.to_string(),
        };
        let request = ApiRequest::post(format!("item/{item_id}/question"), &body)?
            .authorized(SessionToken::header_value(session_token))
            .expect(Expectation::write(
                StatusCode::OK,
                ASK_QUESTION_FAILURE_MESSAGE,
            ));
        self.http_client.send(request).await
    }

    async fn answer_question(
        &self,
        question_id: &str,
        answer_text: &str,
        session_token: Option<&SessionToken>,
    ) -> Result<Value, AppError> {
        info!("Answering question {}", question_id);
        let body = AnswerRequest {
            answer_text: answer_text.to_string(),
        };
        let request = ApiRequest::post(format!("question/{question_id}"), &body)?
            .authorized(SessionToken::header_value(session_token))
            .expect(Expectation::write(
                StatusCode::OK,
                ANSWER_QUESTION_FAILURE_MESSAGE,
            ));
        self.http_client.send(request).await
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::{AUTHORIZATION_HEADER, GENERIC_FAILURE_MESSAGE, USER_AGENT};
use crate::error::AppError;
use crate::model::responses::ErrorResponse;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

/// How a response with an unexpected status is turned into an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Reject with a fixed message without reading the body.
    ///
    /// `not_found` replaces the message when the status is 404.
    Fixed {
        /// Message for any unexpected status
        message: &'static str,
        /// Message for 404, if it is distinguished
        not_found: Option<&'static str>,
    },
    /// Parse the body as JSON and reject with its `error_message`, or `fallback`
    ServerMessage {
        /// Message used when the body carries no `error_message`
        fallback: &'static str,
    },
}

impl FailurePolicy {
    async fn reject(self, status: StatusCode, response: Response) -> AppError {
        match self {
            FailurePolicy::Fixed { message, not_found } => {
                let message = match not_found {
                    Some(not_found) if status == StatusCode::NOT_FOUND => not_found,
                    _ => message,
                };
                AppError::Rejected(message.to_string())
            }
            FailurePolicy::ServerMessage { fallback } => {
                let bytes = match response.bytes().await {
                    Ok(bytes) => bytes,
                    Err(e) => return e.into(),
                };
                match serde_json::from_slice::<Value>(&bytes) {
                    Ok(body) => {
                        AppError::Rejected(ErrorResponse::from_body(&body).message_or(fallback).to_string())
                    }
                    Err(e) => e.into(),
                }
            }
        }
    }
}

/// The status an operation accepts and what to do with any other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    /// The single status that counts as success
    pub success: StatusCode,
    /// Error produced for every other status
    pub failure: FailurePolicy,
}

impl Expectation {
    /// 200, anything else rejects with the generic failure message
    pub const fn read() -> Self {
        Self {
            success: StatusCode::OK,
            failure: FailurePolicy::Fixed {
                message: GENERIC_FAILURE_MESSAGE,
                not_found: None,
            },
        }
    }

    /// `success`, anything else rejects with the server's message or `fallback`
    pub const fn write(success: StatusCode, fallback: &'static str) -> Self {
        Self {
            success,
            failure: FailurePolicy::ServerMessage { fallback },
        }
    }

    /// Distinguishes 404 with its own message on a fixed-message read
    pub const fn with_not_found(self, message: &'static str) -> Self {
        match self.failure {
            FailurePolicy::Fixed { message: default, .. } => Self {
                success: self.success,
                failure: FailurePolicy::Fixed {
                    message: default,
                    not_found: Some(message),
                },
            },
            FailurePolicy::ServerMessage { .. } => self,
        }
    }
}

/// A single backend request, described before it is sent
#[derive(Debug, Clone)]
pub struct ApiRequest<'a> {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<Value>,
    authorization: Option<&'a str>,
    expectation: Expectation,
}

impl<'a> ApiRequest<'a> {
    /// A GET request expecting 200
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
            authorization: None,
            expectation: Expectation::read(),
        }
    }

    /// A POST request carrying `body` as JSON
    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, AppError> {
        Ok(Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(serde_json::to_value(body)?),
            authorization: None,
            expectation: Expectation::read(),
        })
    }

    /// Appends query string pairs
    pub fn query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Attaches the authorization header
    pub fn authorized(mut self, header_value: &'a str) -> Self {
        self.authorization = Some(header_value);
        self
    }

    /// Replaces the expected status and failure handling
    pub fn expect(mut self, expectation: Expectation) -> Self {
        self.expectation = expectation;
        self
    }

    /// HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query string pairs
    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// JSON body, if any
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Authorization header value, if the request is authenticated
    pub fn authorization(&self) -> Option<&str> {
        self.authorization
    }

    /// Expected status and failure handling
    pub fn expectation(&self) -> Expectation {
        self.expectation
    }
}

/// HTTP transport for the auction backend.
///
/// Holds no per-request state; every [`HttpClient::send`] is an independent
/// request with no retry, no timeout and no caching.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Creates the transport for the base URL in `config`
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        let base_url = Url::parse(&config.rest_api.base_url)?;
        debug!("HTTP client targeting {}", base_url);
        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// The base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the absolute URL for `path` and `query`.
    ///
    /// Path segments are forwarded as given; query values are form-encoded.
    pub fn url(&self, path: &str, query: &[(&'static str, String)]) -> Result<Url, AppError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Sends `request` and resolves with the parsed JSON body on the expected status.
    ///
    /// Every failure is logged and returned unchanged.
    pub async fn send(&self, request: ApiRequest<'_>) -> Result<Value, AppError> {
        let method = request.method.clone();
        let path = request.path.clone();
        self.execute(request)
            .await
            .inspect_err(|e| error!("Err {} {}: {}", method, path, e))
    }

    async fn execute(&self, request: ApiRequest<'_>) -> Result<Value, AppError> {
        let url = self.url(&request.path, &request.query)?;
        debug!("{} {}", request.method, url);

        let mut builder = self.http_client.request(request.method, url);
        if let Some(header_value) = request.authorization {
            builder = builder.header(AUTHORIZATION_HEADER, header_value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status != request.expectation.success {
            return Err(request.expectation.failure.reject(status, response).await);
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// Error types for fridge-chef
// Author: kelexine (https://github.com/kelexine)

use crate::models::AnalyzeResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChefError {
    #[error("invalid data URL format")]
    MalformedInput,

    #[error("failed to decode base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("failed to create Gemini client: {0}")]
    ClientConstruction(String),

    #[error("no response from Gemini")]
    EmptyResponse,

    #[error("failed to parse Gemini response: {0}")]
    ResponseParse(String),

    #[error("Gemini API error: {0}")]
    GeminiApi(String),

    /// Any failure of the analysis use case, as reported to the client.
    #[error("Failed to analyze image: {0}")]
    Analysis(Box<ChefError>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Not found: {0}")]
    NotFound(String),

    /// Panic payload caught at the top of the middleware stack.
    #[error("{0}")]
    Unhandled(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChefError {
    /// HTTP status this error maps to when it reaches the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChefError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ChefError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ChefError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert ChefError to the flat JSON envelope used by every endpoint
impl IntoResponse for ChefError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, axum::Json(AnalyzeResponse::failure(self.to_string()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ChefError>;

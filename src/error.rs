use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Groq API Error: {body}")]
    Upstream { status: u16, body: String },
    #[error("Groq API request timed out.")]
    Timeout,
    #[error("Empty response from Groq API.")]
    EmptyResponse,
    #[error("Could not extract JSON from Groq API response.")]
    MalformedResponse,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("No food-related items found.")]
    NoFoodItems,
    #[error("Unexpected Error: {0}")]
    Invocation(String),
    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Upstream statuses outside the valid range collapse to 502.
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NoFoodItems => StatusCode::BAD_REQUEST,
            ApiError::Timeout
            | ApiError::EmptyResponse
            | ApiError::MalformedResponse
            | ApiError::Invocation(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Invocation(e.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed ({}): {}", status, self);
        } else {
            log::warn!("Request rejected ({}): {}", status, self);
        }

        (status, Json(ErrorBody { detail: self.to_string() })).into_response()
    }
}

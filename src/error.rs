use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::month::ParseMonthError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("price out of range: {0}")]
    InvalidPrice(i32),

    #[error(transparent)]
    InvalidDateFormat(#[from] ParseMonthError),

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("subscription not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidPrice(price) => (
                StatusCode::BAD_REQUEST,
                format!("price must be between 0 and 10000, got {price}"),
            ),
            AppError::InvalidDateFormat(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::InvalidIdentifier(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound => (StatusCode::NOT_FOUND, "subscription not found".to_string()),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

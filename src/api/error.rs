use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ApiFailure;
use crate::services::{CatalogError, FieldError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    ValidationError(String),

    FieldValidation(Vec<FieldError>),

    Conflict(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::FieldValidation(errors) => {
                let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
                write!(f, "Invalid fields: {}", paths.join(", "))
            }
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ApiFailure::message(StatusCode::NOT_FOUND, msg),
                )
            }
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiFailure::message(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "A database error occurred",
                    ),
                )
            }
            Self::ValidationError(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ApiFailure::message(StatusCode::BAD_REQUEST, msg),
                )
            }
            Self::FieldValidation(errors) => {
                tracing::debug!(fields = errors.len(), "Rejected payload");
                (
                    StatusCode::BAD_REQUEST,
                    ApiFailure::fields(StatusCode::BAD_REQUEST, errors),
                )
            }
            Self::Conflict(msg) => (
                StatusCode::CONFLICT,
                ApiFailure::message(StatusCode::CONFLICT, msg),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidArgument(msg) => Self::ValidationError(msg),
            CatalogError::Validation(errors) => Self::FieldValidation(errors),
            CatalogError::NotFound(msg) => Self::NotFound(msg),
            CatalogError::Conflict(msg) => Self::Conflict(msg),
            CatalogError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::ValidationError(rejection.body_text())
    }
}

impl ApiError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::NotFound(format!("{resource} {id} not found"))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}

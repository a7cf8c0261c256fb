use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorBody;
use crate::services::{AccountError, AuthError, ImageError, ProfileError};

/// Failure of a handler.
///
/// The variants keep failure kinds apart for logging, but every one of them is
/// served as `500 {"error": ...}`: clients of this API only ever see a flat
/// error with a message.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    Conflict(String),

    Unauthorized(String),

    DatabaseError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Unauthorized(_) => "unauthorized",
            Self::DatabaseError(_) => "database",
            Self::InternalError(_) => "internal",
        }
    }

    /// Message sent to the client.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::Conflict(msg) | Self::Unauthorized(msg) => msg.clone(),
            Self::DatabaseError(_) => "A database error occurred".to_string(),
            Self::InternalError(_) => "An internal error occurred".to_string(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::DatabaseError(msg) | Self::InternalError(msg) => {
                tracing::error!(kind = self.kind(), "Error processing request: {}", msg);
            }
            _ => {
                tracing::warn!(kind = self.kind(), "Error processing request: {}", self);
            }
        }

        metrics::counter!("api_errors_total", "kind" => self.kind()).increment(1);

        let body = ErrorBody {
            error: self.client_message(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::EmailTaken => Self::Conflict(err.to_string()),
            AccountError::Database(msg) => Self::DatabaseError(msg),
            AccountError::Internal(msg) => Self::InternalError(msg),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UserNotFound | AuthError::InvalidPassword => {
                Self::Unauthorized(err.to_string())
            }
            AuthError::Database(msg) => Self::DatabaseError(msg),
            AuthError::Internal(msg) => Self::InternalError(msg),
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::UserNotFound | ProfileError::ProfileNotFound => {
                Self::NotFound(err.to_string())
            }
            ProfileError::EmailTaken => Self::Conflict(err.to_string()),
            ProfileError::Database(msg) => Self::DatabaseError(msg),
            ProfileError::Internal(msg) => Self::InternalError(msg),
        }
    }
}

impl From<ImageError> for ApiError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::Database(msg) => Self::DatabaseError(msg),
            ImageError::Internal(msg) => Self::InternalError(msg),
        }
    }
}

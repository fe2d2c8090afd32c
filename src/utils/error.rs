use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid MongoDB ObjectId: {value:?}")]
    InvalidIdError { value: String },

    #[error("Whisky not found")]
    NotFoundError,

    #[error("Whisky with this bottle name already exists: {bottle}")]
    DuplicateBottleError { bottle: String },

    #[error("Invalid request body: {message}")]
    InvalidBodyError { message: String },

    #[error("Storage error: {0}")]
    StorageError(#[from] mongodb::error::Error),

    #[error("Storage returned an identifier that is not an ObjectId: {value}")]
    UnexpectedIdError { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed input rejected before touching storage.
    Client,
    NotFound,
    Conflict,
    Storage,
    Configuration,
}

impl ServiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::InvalidIdError { .. } | ServiceError::InvalidBodyError { .. } => {
                ErrorCategory::Client
            }
            ServiceError::NotFoundError => ErrorCategory::NotFound,
            ServiceError::DuplicateBottleError { .. } => ErrorCategory::Conflict,
            ServiceError::StorageError(_)
            | ServiceError::UnexpectedIdError { .. }
            | ServiceError::IoError(_) => ErrorCategory::Storage,
            ServiceError::ConfigError { .. }
            | ServiceError::ConfigValidationError { .. }
            | ServiceError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidIdError { .. } | ServiceError::DuplicateBottleError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::NotFoundError => StatusCode::NOT_FOUND,
            ServiceError::InvalidBodyError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `detail` field of the error body.
    pub fn detail(&self) -> String {
        match self {
            ServiceError::InvalidIdError { .. } => "Invalid MongoDB ObjectId".to_string(),
            ServiceError::NotFoundError => "Whisky not found".to_string(),
            ServiceError::DuplicateBottleError { .. } => {
                "Whisky with this bottle name already exists".to_string()
            }
            ServiceError::InvalidBodyError { message } => message.clone(),
            _ => "Internal Server Error".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Client => "Check the request path and body format",
            ErrorCategory::NotFound => "List /whiskies/ to find an existing identifier",
            ErrorCategory::Conflict => "Choose a different bottle name",
            ErrorCategory::Storage => "Check that MongoDB is reachable via MONGO_CONNECTION_STRING",
            ErrorCategory::Configuration => "Review CLI flags, environment variables and the config file",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, category = ?self.category(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

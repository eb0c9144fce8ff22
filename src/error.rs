use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Stable machine-readable code sent alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "not_found",
            Error::MissingField(_) => "missing_field",
            Error::InvalidFormat(_) => "invalid_format",
            Error::BadRequest(_) | Error::Json(_) => "bad_request",
            Error::Database(_) | Error::Migrate(_) => "storage_failure",
            Error::Config(_) | Error::Io(_) | Error::Internal(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::MissingField(_)
            | Error::InvalidFormat(_)
            | Error::BadRequest(_)
            | Error::Json(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let code = self.code();

        let error_message = match &self {
            Error::BadRequest(msg)
            | Error::NotFound(msg)
            | Error::MissingField(msg)
            | Error::InvalidFormat(msg) => msg.clone(),
            Error::Json(err) => err.to_string(),
            Error::Database(err) => {
                tracing::error!(error = ?err, "storage failure");
                "Storage failure".to_string()
            }
            other => {
                tracing::error!(error = %other, "unhandled server error");
                "An unexpected error occurred".to_string()
            }
        };

        let body = Json(json!({ "error": error_message, "code": code }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

/// An item id that is not an integer can never name a row.
impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::NotFound(format!("No such resource: {}", rejection.body_text()))
    }
}

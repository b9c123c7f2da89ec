use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

pub const EMPLOYER_NOT_FOUND_MSG: &str = "Employer username must belong to existing user.";
pub const USERNAME_TAKEN_MSG: &str = "Username is already taken.";
const INTERNAL_ERROR_MSG: &str = "Internal server error.";

/// Failures raised by services and repositories.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("user with username {username} does not exist")]
    EmployerNotFound { username: String },
    #[error("username {username} is already taken")]
    UsernameTaken { username: String },
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl ServiceError {
    /// Turns a unique-constraint violation on `users.username` into `UsernameTaken`.
    pub fn from_user_write(err: sqlx::Error, username: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::UsernameTaken {
                    username: username.to_owned(),
                };
            }
        }
        Self::Db(err)
    }
}

/// Errors returned by handlers. Bodies are a flat JSON array of messages.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(vec![rejection.body_text()])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(messages) => {
                warn!(?messages, "request validation failed");
                (StatusCode::BAD_REQUEST, Json(messages)).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Service(ServiceError::EmployerNotFound { username }) => {
                warn!(%username, "employer not found");
                (
                    StatusCode::BAD_REQUEST,
                    Json(vec![EMPLOYER_NOT_FOUND_MSG.to_string()]),
                )
                    .into_response()
            }
            ApiError::Service(ServiceError::UsernameTaken { username }) => {
                warn!(%username, "username already taken");
                (
                    StatusCode::CONFLICT,
                    Json(vec![USERNAME_TAKEN_MSG.to_string()]),
                )
                    .into_response()
            }
            ApiError::Service(ServiceError::Db(e)) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(vec![INTERNAL_ERROR_MSG.to_string()]),
                )
                    .into_response()
            }
        }
    }
}

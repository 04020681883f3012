//! Error taxonomy shared by the stores, repositories and request handlers

use crate::shared::types::app::ErrorResponse;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("An account with that email already exists, log in instead")]
    DuplicateEmail,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("Unauthorized")]
    Unauthenticated,
    #[error("Unknown card variant `{0}`")]
    UnknownVariant(String),
    #[error("database error")]
    Database(#[source] sqlx::Error)
}

/// Postgres' generated name for the `UNIQUE` on `accounts.email`
pub const ACCOUNT_EMAIL_CONSTRAINT: &str = "accounts_email_key";

pub type KanbanResult<T> = Result<T, KanbanError>;

impl KanbanError {
    pub fn validation(msg: impl Into<String>) -> Self {
        KanbanError::Validation(msg.into())
    }
}

impl From<sqlx::Error> for KanbanError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => KanbanError::NotFound("Resource"),
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation if db_err.constraint() == Some(ACCOUNT_EMAIL_CONSTRAINT) =>
                    KanbanError::DuplicateEmail,
                ErrorKind::ForeignKeyViolation => KanbanError::NotFound("Referenced resource"),
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation =>
                    KanbanError::validation(db_err.message().to_string()),
                _ => KanbanError::Database(err)
            },
            _ => KanbanError::Database(err)
        }
    }
}

impl ResponseError for KanbanError {
    fn status_code(&self) -> StatusCode {
        match self {
            KanbanError::DuplicateEmail => StatusCode::CONFLICT,
            KanbanError::InvalidCredentials | KanbanError::Unauthenticated => StatusCode::UNAUTHORIZED,
            KanbanError::NotFound(_) => StatusCode::NOT_FOUND,
            KanbanError::Validation(_) | KanbanError::UnknownVariant(_) => StatusCode::BAD_REQUEST,
            KanbanError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let KanbanError::Database(err) = self {
            log::error!("database error: {err}");
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse { error: self.to_string() })
    }
}

// Lets startup failures surface from `app::start`
impl From<KanbanError> for std::io::Error {
    fn from(err: KanbanError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    }
}

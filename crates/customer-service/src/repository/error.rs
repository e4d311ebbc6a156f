//! Store outcomes that callers must tell apart.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use common::AppError;
use domain::EMAIL_EXISTS_MESSAGE;

/// Errors returned by the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::DuplicateKey(detail),
            _ => StoreError::Database(err),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(detail) => {
                tracing::warn!(%detail, "Unique constraint violated");
                AppError::validation(EMAIL_EXISTS_MESSAGE)
            }
            StoreError::Database(e) => AppError::Database(e),
        }
    }
}

//! Unified application error type.
//! All modules (store, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid break data: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Please enter an associate name")]
    EmptyName,

    #[error(
        "{} has already taken the maximum of {} breaks",
        .0,
        crate::core::tracker::MAX_BREAKS_PER_NAME
    )]
    BreakLimit(String),

    #[error("{0} is already on break")]
    AlreadyActive(String),

    #[error("No active break found for {0}")]
    NoActiveBreak(String),

    #[error("No break record with id '{0}'")]
    RecordNotFound(String),

    #[error("Id prefix '{0}' matches more than one record")]
    AmbiguousId(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Clipboard / export errors
    // ---------------------------
    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl AppError {
    /// True for the errors caused by user input rather than by the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::EmptyName
                | AppError::BreakLimit(_)
                | AppError::AlreadyActive(_)
                | AppError::NoActiveBreak(_)
                | AppError::RecordNotFound(_)
                | AppError::AmbiguousId(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tracker::MAX_BREAKS_PER_NAME;

    #[test]
    fn break_limit_message_uses_the_configured_limit() {
        let msg = AppError::BreakLimit("Alice".into()).to_string();
        assert_eq!(
            msg,
            format!("Alice has already taken the maximum of {MAX_BREAKS_PER_NAME} breaks")
        );
        assert!(AppError::BreakLimit("Alice".into()).is_validation());
    }
}

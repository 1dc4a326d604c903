//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Domain errors
    // ---------------------------
    /// The current session's role does not permit the operation,
    /// or there is no active session at all.
    #[error("Not allowed: {0}")]
    Authorization(String),

    /// A referenced entity id does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A state-transition precondition is violated (duplicate
    /// application, accepting a non-pending application, ...).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A required field is missing or malformed at creation time.
    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

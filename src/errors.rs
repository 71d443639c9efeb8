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

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: '{0}'. Please use YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors raised before anything touched the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::InvalidDate(_) | AppError::Validation(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;

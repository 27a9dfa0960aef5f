//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::posture::Posture;
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
    // Lookup / validation errors
    // ---------------------------
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("No reference clips found for posture {0}")]
    NoClipsAvailable(Posture),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid posture: {0}")]
    InvalidPosture(String),

    #[error("Invalid outcome: {0}")]
    InvalidOutcome(String),

    #[error("Invalid detection report: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

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

/// Caller-visible failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    BadRequest,
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "not-found",
            ErrorCategory::BadRequest => "bad-request",
            ErrorCategory::Internal => "internal",
        }
    }

    /// Process exit code used by `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::Internal => 1,
            ErrorCategory::NotFound => 2,
            ErrorCategory::BadRequest => 3,
        }
    }
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::NotFound(_) | AppError::NoClipsAvailable(_) => ErrorCategory::NotFound,
            AppError::InvalidArgument(_)
            | AppError::InvalidPosture(_)
            | AppError::InvalidOutcome(_)
            | AppError::Json(_) => ErrorCategory::BadRequest,
            _ => ErrorCategory::Internal,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

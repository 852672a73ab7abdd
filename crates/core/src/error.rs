// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status surfaced to callers.
    ///
    /// Ownership mismatches are reported as `NotFound` upstream, so a 404 never
    /// reveals whether another owner's record exists.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Domain(_) | AppError::Validation(_) | AppError::Serialization(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => 500,
        }
    }

    pub fn job_not_found(job_id: &str) -> Self {
        AppError::NotFound(format!("No job with id {}", job_id))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Database(String)

// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please provide {0}")]
    MissingField(&'static str),

    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("Invalid status: {0}")]
    UnknownStatus(String),

    #[error("Invalid job type: {0}")]
    UnknownJobType(String),

    #[error("Company or Position fields cannot be empty")]
    EmptyUpdateField,
}

pub type Result<T> = std::result::Result<T, DomainError>;

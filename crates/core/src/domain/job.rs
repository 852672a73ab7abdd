// Job Domain Model

use crate::domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Job ID (UUID v4)
pub type JobId = String;

/// Owner identifier (opaque reference to a user, supplied by the auth layer)
pub type OwnerId = String;

pub const COMPANY_MAX_LEN: usize = 50;
pub const POSITION_MAX_LEN: usize = 100;

/// Application status of a job record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Pending,
    Interview,
    Declined,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [JobStatus::Pending, JobStatus::Interview, JobStatus::Declined];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Interview => "interview",
            JobStatus::Declined => "declined",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(JobStatus::Pending),
            "interview" => Ok(JobStatus::Interview),
            "declined" => Ok(JobStatus::Declined),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// Employment type of a job record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Internship,
    Contract,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Internship => "internship",
            JobType::Contract => "contract",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "internship" => Ok(JobType::Internship),
            "contract" => Ok(JobType::Contract),
            other => Err(DomainError::UnknownJobType(other.to_string())),
        }
    }
}

/// Job record owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub owner_id: OwnerId,
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub job_type: JobType,

    pub created_at: i64, // epoch ms, immutable
    pub updated_at: i64, // epoch ms
}

impl Job {
    /// Create a new job record with default status and job type.
    ///
    /// `id` and `created_at` are injected (see `IdProvider` / `TimeProvider`).
    /// Company and position are trimmed and validated.
    pub fn new(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        company: &str,
        position: &str,
        created_at: i64,
    ) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            owner_id: owner_id.into(),
            company: validate_text("company", company, COMPANY_MAX_LEN)?,
            position: validate_text("position", position, POSITION_MAX_LEN)?,
            status: JobStatus::default(),
            job_type: JobType::default(),
            created_at,
            updated_at: created_at,
        })
    }

    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }

    pub fn set_company(&mut self, company: &str) -> Result<()> {
        self.company = validate_text("company", company, COMPANY_MAX_LEN)?;
        Ok(())
    }

    pub fn set_position(&mut self, position: &str) -> Result<()> {
        self.position = validate_text("position", position, POSITION_MAX_LEN)?;
        Ok(())
    }

    /// Record a modification; `created_at` never changes.
    pub fn touch(&mut self, now_millis: i64) {
        self.updated_at = now_millis.max(self.created_at);
    }
}

fn validate_text(field: &'static str, value: &str, max_len: usize) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::MissingField(field));
    }
    if value.chars().count() > max_len {
        return Err(DomainError::FieldTooLong { field, max: max_len });
    }
    Ok(value.to_string())
}

// Update Job Use Case

use crate::domain::{DomainError, Job};
use crate::error::{AppError, Result};
use crate::port::{JobRepository, TimeProvider};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "job_type")]
    pub job_type: Option<String>,
}

impl UpdateJobRequest {
    /// A provided-but-empty company or position is rejected before any lookup.
    pub fn validate(&self) -> std::result::Result<(), DomainError> {
        let is_empty = |field: &Option<String>| field.as_deref() == Some("");
        if is_empty(&self.company) || is_empty(&self.position) {
            return Err(DomainError::EmptyUpdateField);
        }
        Ok(())
    }

    fn apply(&self, job: &mut Job) -> std::result::Result<(), DomainError> {
        if let Some(company) = self.company.as_deref() {
            job.set_company(company)?;
        }
        if let Some(position) = self.position.as_deref() {
            job.set_position(position)?;
        }
        if let Some(status) = self.status.as_deref() {
            job.status = status.parse()?;
        }
        if let Some(job_type) = self.job_type.as_deref() {
            job.job_type = job_type.parse()?;
        }
        Ok(())
    }
}

/// Execute update use case
pub async fn execute(
    job_repo: &dyn JobRepository,
    time_provider: &dyn TimeProvider,
    owner_id: &str,
    job_id: &str,
    req: UpdateJobRequest,
) -> Result<Job> {
    req.validate()?;

    let mut job = job_repo
        .find_owned(owner_id, job_id)
        .await?
        .ok_or_else(|| AppError::job_not_found(job_id))?;

    req.apply(&mut job)?;
    job.touch(time_provider.now_millis());

    // Record may have been deleted concurrently
    if !job_repo.update(&job).await? {
        return Err(AppError::job_not_found(job_id));
    }

    info!(job_id = %job.id, owner_id = %owner_id, "Job updated");
    Ok(job)
}

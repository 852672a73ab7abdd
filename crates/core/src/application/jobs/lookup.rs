// Get / Delete Job Use Cases

use crate::domain::Job;
use crate::error::{AppError, Result};
use crate::port::JobRepository;
use tracing::info;

/// Fetch a single job owned by `owner_id`
pub async fn get(job_repo: &dyn JobRepository, owner_id: &str, job_id: &str) -> Result<Job> {
    job_repo
        .find_owned(owner_id, job_id)
        .await?
        .ok_or_else(|| AppError::job_not_found(job_id))
}

/// Delete a job owned by `owner_id`
pub async fn delete(job_repo: &dyn JobRepository, owner_id: &str, job_id: &str) -> Result<()> {
    if !job_repo.delete_owned(owner_id, job_id).await? {
        return Err(AppError::job_not_found(job_id));
    }

    info!(job_id = %job_id, owner_id = %owner_id, "Job deleted");
    Ok(())
}

// Create Job Use Case

use crate::domain::Job;
use crate::error::Result;
use crate::port::{IdProvider, JobRepository, TimeProvider};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Create request; status and job type default when absent.
/// Missing company/position deserialize as empty and fail validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub company: String,
    pub position: String,
    pub status: Option<String>,
    #[serde(alias = "job_type")]
    pub job_type: Option<String>,
}

/// Execute create use case
///
/// # Arguments
///
/// * `job_repo` - Job repository
/// * `id_provider` - ID generator (injected for determinism)
/// * `time_provider` - Time provider (injected for determinism)
/// * `owner_id` - Authenticated owner
/// * `req` - Create request
pub async fn execute(
    job_repo: &dyn JobRepository,
    id_provider: &dyn IdProvider,
    time_provider: &dyn TimeProvider,
    owner_id: &str,
    req: CreateJobRequest,
) -> Result<Job> {
    let mut job = Job::new(
        id_provider.next_id(),
        owner_id,
        &req.company,
        &req.position,
        time_provider.now_millis(),
    )?;

    if let Some(status) = req.status.as_deref() {
        job.status = status.parse()?;
    }
    if let Some(job_type) = req.job_type.as_deref() {
        job.job_type = job_type.parse()?;
    }

    job_repo.insert(&job).await?;

    info!(job_id = %job.id, owner_id = %owner_id, "Job created");
    Ok(job)
}

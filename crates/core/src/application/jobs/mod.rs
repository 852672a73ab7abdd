// Job Service - use cases for job records, all scoped to one owner

pub mod create;
pub mod list;
pub mod lookup;
pub mod stats;
pub mod update;

#[cfg(test)]
mod memory_repo;

pub use create::CreateJobRequest;
pub use list::ListJobsRequest;
pub use update::UpdateJobRequest;

use crate::domain::{Job, JobPage, JobStats};
use crate::error::Result;
use crate::port::{IdProvider, JobRepository, TimeProvider};
use std::sync::Arc;

/// Job Service
///
/// Stateless: every call is an independent computation over the records in
/// the repository at call time.
pub struct JobService {
    job_repo: Arc<dyn JobRepository>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl JobService {
    pub fn new(
        job_repo: Arc<dyn JobRepository>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            job_repo,
            id_provider,
            time_provider,
        }
    }

    /// Filtered, sorted, paginated listing
    pub async fn list(&self, req: &ListJobsRequest) -> Result<JobPage> {
        list::execute(self.job_repo.as_ref(), req).await
    }

    pub async fn get(&self, owner_id: &str, job_id: &str) -> Result<Job> {
        lookup::get(self.job_repo.as_ref(), owner_id, job_id).await
    }

    pub async fn create(&self, owner_id: &str, req: CreateJobRequest) -> Result<Job> {
        create::execute(
            self.job_repo.as_ref(),
            self.id_provider.as_ref(),
            self.time_provider.as_ref(),
            owner_id,
            req,
        )
        .await
    }

    pub async fn update(&self, owner_id: &str, job_id: &str, req: UpdateJobRequest) -> Result<Job> {
        update::execute(
            self.job_repo.as_ref(),
            self.time_provider.as_ref(),
            owner_id,
            job_id,
            req,
        )
        .await
    }

    pub async fn delete(&self, owner_id: &str, job_id: &str) -> Result<()> {
        lookup::delete(self.job_repo.as_ref(), owner_id, job_id).await
    }

    /// Status summary + monthly applications
    pub async fn stats(&self, owner_id: &str) -> Result<JobStats> {
        stats::execute(self.job_repo.as_ref(), owner_id).await
    }
}

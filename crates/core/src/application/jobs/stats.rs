// Job Statistics Use Case

use crate::domain::stats::{monthly_applications, MONTHLY_WINDOW};
use crate::domain::{JobStats, StatusSummary};
use crate::error::Result;
use crate::port::JobRepository;

/// Execute stats use case: status summary and monthly series for one owner
pub async fn execute(job_repo: &dyn JobRepository, owner_id: &str) -> Result<JobStats> {
    let (by_status, newest_months) = tokio::try_join!(
        job_repo.count_by_status(owner_id),
        job_repo.latest_monthly_counts(owner_id, MONTHLY_WINDOW),
    )?;

    Ok(JobStats {
        default_stats: StatusSummary::from_counts(by_status),
        monthly_applications: monthly_applications(newest_months),
    })
}

// Job Repository Port (Interface)

use crate::domain::{Job, JobFilter, JobStatus, MonthlyCount, PageRequest, SortOrder};
use crate::error::Result;
use async_trait::async_trait;

/// Document store for job records.
///
/// Every read and write is scoped to an owner; a record belonging to another
/// owner behaves exactly like a missing one.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a new job
    async fn insert(&self, job: &Job) -> Result<()>;

    /// Find a job by ID, only if owned by `owner_id`
    async fn find_owned(&self, owner_id: &str, id: &str) -> Result<Option<Job>>;

    /// Persist mutable fields of `job` (matched on id AND owner).
    /// Returns false if no such record exists.
    async fn update(&self, job: &Job) -> Result<bool>;

    /// Delete a job owned by `owner_id`. Returns false if no such record exists.
    async fn delete_owned(&self, owner_id: &str, id: &str) -> Result<bool>;

    /// Filtered retrieval with optional ordering, then skip/limit.
    /// `None` ordering means the store's natural (insertion) order.
    async fn find_matching(
        &self,
        filter: &JobFilter,
        order: Option<SortOrder>,
        page: PageRequest,
    ) -> Result<Vec<Job>>;

    /// Count all records matching `filter` (ignores pagination)
    async fn count_matching(&self, filter: &JobFilter) -> Result<i64>;

    /// Grouped count by status for one owner. Statuses with no records may be absent.
    async fn count_by_status(&self, owner_id: &str) -> Result<Vec<(JobStatus, i64)>>;

    /// Grouped count by creation (year, month) for one owner, newest bucket first,
    /// at most `limit` buckets.
    async fn latest_monthly_counts(&self, owner_id: &str, limit: usize) -> Result<Vec<MonthlyCount>>;
}

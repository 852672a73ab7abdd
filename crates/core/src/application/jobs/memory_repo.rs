//! In-memory JobRepository for unit tests.
//!
//! Built entirely from the pure domain functions (filter predicate, sort
//! comparator, page slicing, single-pass grouping), so use-case tests run the
//! same semantics a store adapter must reproduce.

use crate::domain::stats::{count_by_month, count_by_status, latest_months};
use crate::domain::{Job, JobFilter, JobStatus, MonthlyCount, PageRequest, SortOrder};
use crate::error::Result;
use crate::port::JobRepository;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryJobRepository {
    jobs: Mutex<Vec<Job>>, // insertion order = natural order
}

impl MemoryJobRepository {
    fn owned(&self, owner_id: &str) -> Vec<Job> {
        let jobs = self.jobs.lock().unwrap();
        jobs.iter().filter(|j| j.is_owned_by(owner_id)).cloned().collect()
    }
}

#[async_trait]
impl JobRepository for MemoryJobRepository {
    async fn insert(&self, job: &Job) -> Result<()> {
        self.jobs.lock().unwrap().push(job.clone());
        Ok(())
    }

    async fn find_owned(&self, owner_id: &str, id: &str) -> Result<Option<Job>> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs
            .iter()
            .find(|j| j.id == id && j.is_owned_by(owner_id))
            .cloned())
    }

    async fn update(&self, job: &Job) -> Result<bool> {
        let mut jobs = self.jobs.lock().unwrap();
        match jobs
            .iter_mut()
            .find(|j| j.id == job.id && j.is_owned_by(&job.owner_id))
        {
            Some(existing) => {
                *existing = job.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_owned(&self, owner_id: &str, id: &str) -> Result<bool> {
        let mut jobs = self.jobs.lock().unwrap();
        let before = jobs.len();
        jobs.retain(|j| !(j.id == id && j.is_owned_by(owner_id)));
        Ok(jobs.len() < before)
    }

    async fn find_matching(
        &self,
        filter: &JobFilter,
        order: Option<SortOrder>,
        page: PageRequest,
    ) -> Result<Vec<Job>> {
        let mut matching: Vec<Job> = self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|j| filter.matches(j))
            .cloned()
            .collect();
        if let Some(order) = order {
            matching.sort_by(|a, b| order.compare(a, b));
        }
        Ok(page.slice(&matching))
    }

    async fn count_matching(&self, filter: &JobFilter) -> Result<i64> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.iter().filter(|j| filter.matches(j)).count() as i64)
    }

    async fn count_by_status(&self, owner_id: &str) -> Result<Vec<(JobStatus, i64)>> {
        Ok(count_by_status(&self.owned(owner_id)).into_iter().collect())
    }

    async fn latest_monthly_counts(&self, owner_id: &str, limit: usize) -> Result<Vec<MonthlyCount>> {
        Ok(latest_months(count_by_month(&self.owned(owner_id)), limit))
    }
}

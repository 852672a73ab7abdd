//! Shared fixtures: SQLite-backed service with a settable clock and sequential ids

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use jobtrack_core::application::{CreateJobRequest, JobService, UpdateJobRequest};
use jobtrack_core::domain::Job;
use jobtrack_core::port::{IdProvider, TimeProvider};
use jobtrack_infra_sqlite::{create_pool, run_migrations, SqliteJobRepository};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

/// Clock that returns whatever was last set
pub struct ManualClock(AtomicI64);

impl ManualClock {
    pub fn new(millis: i64) -> Self {
        Self(AtomicI64::new(millis))
    }

    pub fn set(&self, millis: i64) {
        self.0.store(millis, Ordering::SeqCst);
    }
}

impl TimeProvider for ManualClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct SeqIds(AtomicU64);

impl IdProvider for SeqIds {
    fn next_id(&self) -> String {
        format!("job-{:04}", self.0.fetch_add(1, Ordering::SeqCst))
    }
}

pub struct Fixture {
    pub service: Arc<JobService>,
    pub clock: Arc<ManualClock>,
}

/// Noon UTC on the given day
pub fn millis(year: i32, month: u32, day: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .unwrap()
        .timestamp_millis()
}

pub async fn setup() -> Fixture {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let clock = Arc::new(ManualClock::new(millis(2024, 1, 1)));
    let service = JobService::new(
        Arc::new(SqliteJobRepository::new(pool)),
        Arc::new(SeqIds(AtomicU64::new(1))),
        clock.clone(),
    );

    Fixture {
        service: Arc::new(service),
        clock,
    }
}

impl Fixture {
    /// Create a job at `at` with the given position
    pub async fn create_at(&self, owner: &str, position: &str, at: i64) -> Job {
        self.clock.set(at);
        let req = CreateJobRequest {
            company: "Acme".to_string(),
            position: position.to_string(),
            ..Default::default()
        };
        self.service.create(owner, req).await.unwrap()
    }

    /// Create a job with explicit status and type, one minute after the previous clock value
    pub async fn create_with(&self, owner: &str, position: &str, status: &str, job_type: &str) -> Job {
        self.clock.set(self.clock.now_millis() + 60_000);
        let req = CreateJobRequest {
            company: "Acme".to_string(),
            position: position.to_string(),
            status: Some(status.to_string()),
            job_type: Some(job_type.to_string()),
        };
        self.service.create(owner, req).await.unwrap()
    }

    pub async fn set_status(&self, owner: &str, job: &Job, status: &str) -> Job {
        let req = UpdateJobRequest {
            status: Some(status.to_string()),
            ..Default::default()
        };
        self.service.update(owner, &job.id, req).await.unwrap()
    }
}

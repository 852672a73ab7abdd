// Job Statistics - status summary and monthly application buckets

use crate::domain::job::{Job, JobStatus};
use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of most recent month buckets reported
pub const MONTHLY_WINDOW: usize = 6;

/// Fixed-shape count per status; missing statuses are 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub pending: i64,
    pub interview: i64,
    pub declined: i64,
}

impl StatusSummary {
    /// Normalize grouped `(status, count)` pairs into the fixed schema
    pub fn from_counts(counts: impl IntoIterator<Item = (JobStatus, i64)>) -> Self {
        counts
            .into_iter()
            .fold(Self::default(), |mut summary, (status, count)| {
                match status {
                    JobStatus::Pending => summary.pending += count,
                    JobStatus::Interview => summary.interview += count,
                    JobStatus::Declined => summary.declined += count,
                }
                summary
            })
    }

    pub fn total(&self) -> i64 {
        self.pending + self.interview + self.declined
    }
}

/// (year, month) group of creation timestamps, UTC. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthBucket {
    first_day: NaiveDate,
}

impl MonthBucket {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// Bucket of an epoch-ms timestamp; `None` if outside the representable calendar.
    pub fn from_millis(millis: i64) -> Option<Self> {
        let at = DateTime::from_timestamp_millis(millis)?;
        Self::new(at.year(), at.month())
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// `"<Mon> <YYYY>"`, e.g. `"Mar 2024"`
    pub fn label(&self) -> String {
        self.first_day.format("%b %Y").to_string()
    }
}

/// Count of records created within one month bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyCount {
    pub bucket: MonthBucket,
    pub count: i64,
}

/// Presentation entry of the monthly series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyApplications {
    pub date: String,
    pub count: i64,
}

/// Statistics response: status summary plus monthly series (oldest first)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub default_stats: StatusSummary,
    pub monthly_applications: Vec<MonthlyApplications>,
}

/// Single pass: status -> count
pub fn count_by_status<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> HashMap<JobStatus, i64> {
    let mut counts = HashMap::new();
    for job in jobs {
        *counts.entry(job.status).or_insert(0) += 1;
    }
    counts
}

/// Single pass: month bucket -> count
pub fn count_by_month<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> HashMap<MonthBucket, i64> {
    let mut counts = HashMap::new();
    for job in jobs {
        match MonthBucket::from_millis(job.created_at) {
            Some(bucket) => *counts.entry(bucket).or_insert(0) += 1,
            None => tracing::warn!(
                job_id = %job.id,
                created_at = job.created_at,
                "Creation timestamp outside calendar range, not bucketed"
            ),
        }
    }
    counts
}

/// Most recent `window` buckets present, newest first
pub fn latest_months(
    counts: impl IntoIterator<Item = (MonthBucket, i64)>,
    window: usize,
) -> Vec<MonthlyCount> {
    let mut months: Vec<MonthlyCount> = counts
        .into_iter()
        .map(|(bucket, count)| MonthlyCount { bucket, count })
        .collect();
    months.sort_by(|a, b| b.bucket.cmp(&a.bucket));
    months.truncate(window);
    months
}

/// Turn a newest-first window into the presentation series, oldest first.
pub fn monthly_applications(newest_first: Vec<MonthlyCount>) -> Vec<MonthlyApplications> {
    newest_first
        .into_iter()
        .rev()
        .map(|m| MonthlyApplications {
            date: m.bucket.label(),
            count: m.count,
        })
        .collect()
}

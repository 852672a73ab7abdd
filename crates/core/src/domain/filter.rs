// Job Filter - normalized predicate over job records

use crate::domain::job::{Job, JobStatus, JobType, OwnerId};
use std::str::FromStr;

/// Sentinel query value meaning "no constraint"
pub const MATCH_ALL: &str = "all";

/// Constraint on a single enumerated field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion<T> {
    /// Absent, empty or `"all"`
    Any,
    /// Field must equal this value
    Only(T),
    /// Value outside the enumeration: no record can equal it
    Nothing,
}

impl<T: FromStr + Copy + PartialEq> Criterion<T> {
    /// Resolve a raw query value at the boundary.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some(MATCH_ALL) => Criterion::Any,
            Some(value) => value.parse().map(Criterion::Only).unwrap_or(Criterion::Nothing),
        }
    }

    pub fn accepts(&self, value: T) -> bool {
        match self {
            Criterion::Any => true,
            Criterion::Only(expected) => *expected == value,
            Criterion::Nothing => false,
        }
    }
}

/// Case folding shared by the search needle and stored positions (Unicode lowercase)
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Immutable filter over one owner's job records.
///
/// `matches` is the reference predicate; store adapters translate the same
/// value into their own query language and must agree with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFilter {
    pub owner_id: OwnerId,
    /// Literal, case-insensitive substring of `position`
    pub search: Option<String>,
    pub job_type: Criterion<JobType>,
    pub status: Criterion<JobStatus>,
}

impl JobFilter {
    /// Filter with no constraint beyond ownership
    pub fn for_owner(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            search: None,
            job_type: Criterion::Any,
            status: Criterion::Any,
        }
    }

    /// Build a filter from raw query parameters
    pub fn from_params(
        owner_id: impl Into<String>,
        search: Option<&str>,
        job_type: Option<&str>,
        status: Option<&str>,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
            job_type: Criterion::from_raw(job_type),
            status: Criterion::from_raw(status),
        }
    }

    /// Search text lowercased for comparison
    pub fn search_folded(&self) -> Option<String> {
        self.search.as_deref().map(fold_case)
    }

    pub fn matches(&self, job: &Job) -> bool {
        if !job.is_owned_by(&self.owner_id) {
            return false;
        }
        if let Some(needle) = self.search_folded() {
            if !fold_case(&job.position).contains(&needle) {
                return false;
            }
        }
        self.job_type.accepts(job.job_type) && self.status.accepts(job.status)
    }
}

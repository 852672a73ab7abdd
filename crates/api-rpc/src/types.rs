//! RPC Request/Response Types
//!
//! Request fields are snake_case; camelCase query-string names are accepted
//! as aliases. Listing and statistics results reuse the core shapes
//! (`JobPage`, `JobStats`), which serialize field-exact.

use jobtrack_core::application::{CreateJobRequest, ListJobsRequest, UpdateJobRequest};
use jobtrack_core::domain::Job;
use serde::{Deserialize, Serialize};

/// jobs.list.v1 - Filtered, sorted, paginated listing
#[derive(Debug, Deserialize)]
pub struct ListJobsParams {
    pub owner_id: String,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, alias = "jobType")]
    pub job_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    /// Number or numeric string; anything else falls back to page 1
    #[serde(default)]
    pub page: Option<serde_json::Value>,
    /// Number or numeric string; anything else falls back to 10
    #[serde(default)]
    pub limit: Option<serde_json::Value>,
}

impl From<ListJobsParams> for ListJobsRequest {
    fn from(params: ListJobsParams) -> Self {
        Self {
            owner_id: params.owner_id,
            search: params.search,
            job_type: params.job_type,
            status: params.status,
            sort: params.sort,
            page: params.page.as_ref().and_then(raw_text),
            limit: params.limit.as_ref().and_then(raw_text),
        }
    }
}

/// Query-string view of a JSON value
fn raw_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// jobs.get.v1 / jobs.delete.v1
#[derive(Debug, Deserialize)]
pub struct JobRefParams {
    pub owner_id: String,
    pub job_id: String,
}

/// jobs.create.v1
#[derive(Debug, Deserialize)]
pub struct CreateJobParams {
    pub owner_id: String,
    #[serde(flatten)]
    pub job: CreateJobRequest,
}

/// jobs.update.v1
#[derive(Debug, Deserialize)]
pub struct UpdateJobParams {
    pub owner_id: String,
    pub job_id: String,
    #[serde(flatten)]
    pub changes: UpdateJobRequest,
}

/// jobs.stats.v1
#[derive(Debug, Deserialize)]
pub struct StatsParams {
    pub owner_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub job: Job,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteJobResponse {
    pub job_id: String,
    pub deleted: bool,
}

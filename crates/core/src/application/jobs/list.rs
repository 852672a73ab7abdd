// List Jobs Use Case

use crate::domain::{JobFilter, JobPage, PageRequest, SortOrder};
use crate::error::Result;
use crate::port::JobRepository;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw listing parameters as received from the query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsRequest {
    pub owner_id: String,
    pub search: Option<String>,
    pub job_type: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListJobsRequest {
    pub fn for_owner(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            ..Default::default()
        }
    }

    pub fn filter(&self) -> JobFilter {
        JobFilter::from_params(
            self.owner_id.clone(),
            self.search.as_deref(),
            self.job_type.as_deref(),
            self.status.as_deref(),
        )
    }

    pub fn order(&self) -> Option<SortOrder> {
        SortOrder::resolve(self.sort.as_deref())
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

/// Execute list use case
///
/// Total count and page count are computed over the filtered set, so they do
/// not depend on the page requested.
pub async fn execute(job_repo: &dyn JobRepository, req: &ListJobsRequest) -> Result<JobPage> {
    let filter = req.filter();
    let order = req.order();
    let page = req.page_request();

    let total_jobs = job_repo.count_matching(&filter).await?;
    let jobs = job_repo.find_matching(&filter, order, page).await?;

    debug!(
        owner_id = %req.owner_id,
        page = page.page(),
        limit = page.limit(),
        total_jobs,
        returned = jobs.len(),
        "Listed jobs"
    );

    Ok(JobPage {
        jobs,
        total_jobs,
        num_of_pages: page.total_pages(total_jobs),
    })
}

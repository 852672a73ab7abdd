//! RPC Method Handlers
//!
//! Thin adapters from RPC params to `JobService` use cases.

use crate::error::to_rpc_error;
use crate::types::{
    CreateJobParams, DeleteJobResponse, JobRefParams, JobResponse, ListJobsParams, StatsParams,
    UpdateJobParams,
};
use jobtrack_core::application::{JobService, ListJobsRequest};
use jobtrack_core::domain::{JobPage, JobStats};
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: Arc<JobService>,
}

impl RpcHandler {
    pub fn new(service: Arc<JobService>) -> Self {
        Self { service }
    }

    /// jobs.list.v1
    pub async fn list(&self, params: ListJobsParams) -> Result<JobPage, ErrorObjectOwned> {
        let req = ListJobsRequest::from(params);
        self.service.list(&req).await.map_err(to_rpc_error)
    }

    /// jobs.get.v1
    pub async fn get(&self, params: JobRefParams) -> Result<JobResponse, ErrorObjectOwned> {
        let job = self
            .service
            .get(&params.owner_id, &params.job_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(JobResponse { job })
    }

    /// jobs.create.v1
    pub async fn create(&self, params: CreateJobParams) -> Result<JobResponse, ErrorObjectOwned> {
        let job = self
            .service
            .create(&params.owner_id, params.job)
            .await
            .map_err(to_rpc_error)?;

        Ok(JobResponse { job })
    }

    /// jobs.update.v1
    pub async fn update(&self, params: UpdateJobParams) -> Result<JobResponse, ErrorObjectOwned> {
        let job = self
            .service
            .update(&params.owner_id, &params.job_id, params.changes)
            .await
            .map_err(to_rpc_error)?;

        Ok(JobResponse { job })
    }

    /// jobs.delete.v1
    pub async fn delete(&self, params: JobRefParams) -> Result<DeleteJobResponse, ErrorObjectOwned> {
        self.service
            .delete(&params.owner_id, &params.job_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(DeleteJobResponse {
            job_id: params.job_id,
            deleted: true,
        })
    }

    /// jobs.stats.v1
    pub async fn stats(&self, params: StatsParams) -> Result<JobStats, ErrorObjectOwned> {
        self.service
            .stats(&params.owner_id)
            .await
            .map_err(to_rpc_error)
    }
}

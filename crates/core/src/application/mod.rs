// Application Layer - Use Cases and Business Logic

pub mod jobs;

// Re-exports
pub use jobs::{CreateJobRequest, JobService, ListJobsRequest, UpdateJobRequest};
